//! Input configuration (input.toml in the Nethercore config directory)
//!
//! Holds the joystick enable flag, the virtual-to-physical button map and
//! the axis bindings. Besides TOML persistence, every setting is reachable
//! by name through [`InputConfig::bindings`] and [`InputConfig::set_binding`]
//! so an external config layer can register and store them individually.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::joystick::{NUM_VIRTUAL_BUTTONS, VirtualButtonMap};
use crate::raw::{Axis, PhysicalButton};

/// File name of the input config inside [`config_dir`].
pub const CONFIG_FILE: &str = "input.toml";

/// Name prefix of the per-slot button bindings (`joystick_physical_button0`..).
pub const PHYSICAL_BUTTON_PREFIX: &str = "joystick_physical_button";

/// Input configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Post composite joystick events each frame (default: false)
    #[serde(default)]
    pub use_joystick: bool,

    /// Physical button driving each virtual button slot
    #[serde(default)]
    pub joystick_physical_buttons: VirtualButtonMap,

    /// Axis id for horizontal movement, -1 disables (default: left stick X)
    #[serde(default = "default_x_axis")]
    pub joystick_x_axis: i32,
    #[serde(default)]
    pub joystick_x_invert: bool,

    /// Axis id for vertical movement, -1 disables (default: left stick Y)
    #[serde(default = "default_y_axis")]
    pub joystick_y_axis: i32,
    #[serde(default)]
    pub joystick_y_invert: bool,

    /// Axis id for strafing, -1 disables (default: right stick X)
    #[serde(default = "default_strafe_axis")]
    pub joystick_strafe_axis: i32,
    #[serde(default)]
    pub joystick_strafe_invert: bool,
}

fn default_x_axis() -> i32 {
    Axis::LeftX.id()
}
fn default_y_axis() -> i32 {
    Axis::LeftY.id()
}
fn default_strafe_axis() -> i32 {
    Axis::RightX.id()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            use_joystick: false,
            joystick_physical_buttons: VirtualButtonMap::default(),
            joystick_x_axis: default_x_axis(),
            joystick_x_invert: false,
            joystick_y_axis: default_y_axis(),
            joystick_y_invert: false,
            joystick_strafe_axis: default_strafe_axis(),
            joystick_strafe_invert: false,
        }
    }
}

impl InputConfig {
    pub fn x_axis(&self) -> Option<Axis> {
        Axis::from_id(self.joystick_x_axis)
    }

    pub fn y_axis(&self) -> Option<Axis> {
        Axis::from_id(self.joystick_y_axis)
    }

    pub fn strafe_axis(&self) -> Option<Axis> {
        Axis::from_id(self.joystick_strafe_axis)
    }

    /// All bindable variables with their current values.
    pub fn bindings(&self) -> Vec<(String, i32)> {
        let mut vars = vec![("use_joystick".to_string(), i32::from(self.use_joystick))];
        vars.extend(
            self.joystick_physical_buttons
                .iter()
                .enumerate()
                .map(|(slot, button)| (format!("{PHYSICAL_BUTTON_PREFIX}{slot}"), button.id())),
        );
        vars.extend([
            ("joystick_x_axis".to_string(), self.joystick_x_axis),
            ("joystick_x_invert".to_string(), i32::from(self.joystick_x_invert)),
            ("joystick_y_axis".to_string(), self.joystick_y_axis),
            ("joystick_y_invert".to_string(), i32::from(self.joystick_y_invert)),
            ("joystick_strafe_axis".to_string(), self.joystick_strafe_axis),
            ("joystick_strafe_invert".to_string(), i32::from(self.joystick_strafe_invert)),
        ]);
        vars
    }

    /// Current value of a bindable variable.
    pub fn binding(&self, name: &str) -> Option<i32> {
        self.bindings()
            .into_iter()
            .find_map(|(var, value)| (var == name).then_some(value))
    }

    /// Set a variable by name.
    ///
    /// Booleans accept any integer (non-zero is true). Button slots only
    /// accept known physical button ids; axis ids accept any value, with
    /// negative or unknown ids meaning disabled.
    pub fn set_binding(&mut self, name: &str, value: i32) -> Result<(), ConfigError> {
        match name {
            "use_joystick" => self.use_joystick = value != 0,
            "joystick_x_axis" => self.joystick_x_axis = value,
            "joystick_x_invert" => self.joystick_x_invert = value != 0,
            "joystick_y_axis" => self.joystick_y_axis = value,
            "joystick_y_invert" => self.joystick_y_invert = value != 0,
            "joystick_strafe_axis" => self.joystick_strafe_axis = value,
            "joystick_strafe_invert" => self.joystick_strafe_invert = value != 0,
            _ => {
                let slot = name
                    .strip_prefix(PHYSICAL_BUTTON_PREFIX)
                    .and_then(|index| index.parse::<usize>().ok())
                    .filter(|&slot| slot < NUM_VIRTUAL_BUTTONS)
                    .ok_or_else(|| ConfigError::UnknownVariable(name.to_string()))?;
                let button =
                    PhysicalButton::from_id(value).ok_or_else(|| ConfigError::InvalidValue {
                        name: name.to_string(),
                        value,
                    })?;
                self.joystick_physical_buttons.set(slot, button);
            }
        }
        Ok(())
    }
}

/// Returns the platform-specific configuration directory.
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.nethercore", "", "Nethercore")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Loads the input configuration from the platform config directory.
///
/// Returns defaults if the file doesn't exist or cannot be parsed.
pub fn load() -> InputConfig {
    let Some(dir) = config_dir() else {
        return InputConfig::default();
    };
    match load_from(&dir.join(CONFIG_FILE)) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Using default input config: {}", e);
            InputConfig::default()
        }
    }
}

/// Loads an input configuration file. A missing file yields defaults.
pub fn load_from(path: &Path) -> Result<InputConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(InputConfig::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    Ok(toml::from_str(&content)?)
}

/// Saves the input configuration to the platform config directory,
/// creating the directory if needed.
pub fn save(config: &InputConfig) -> Result<(), ConfigError> {
    let dir = config_dir().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &dir.join(CONFIG_FILE))
}

/// Saves the input configuration to `path`, creating parent directories.
pub fn save_to(config: &InputConfig, path: &Path) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = InputConfig::default();
        assert!(!config.use_joystick);
        assert_eq!(config.x_axis(), Some(Axis::LeftX));
        assert_eq!(config.y_axis(), Some(Axis::LeftY));
        assert_eq!(config.strafe_axis(), Some(Axis::RightX));
        assert_eq!(config.joystick_physical_buttons, VirtualButtonMap::default());
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: InputConfig = toml::from_str("").unwrap();
        assert_eq!(config, InputConfig::default());
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml_str = r#"
use_joystick = true
joystick_physical_buttons = [1, 0, 2, 3, 4, 5, 6, 7, 8, 10]
joystick_strafe_axis = -1
"#;
        let config: InputConfig = toml::from_str(toml_str).unwrap();
        assert!(config.use_joystick);
        assert_eq!(config.joystick_physical_buttons.get(0), Some(PhysicalButton::B));
        assert_eq!(config.joystick_physical_buttons.get(1), Some(PhysicalButton::A));
        assert_eq!(
            config.joystick_physical_buttons.get(9),
            Some(PhysicalButton::RightShoulder)
        );
        assert_eq!(config.strafe_axis(), None);
        assert_eq!(config.x_axis(), Some(Axis::LeftX)); // default
    }

    #[test]
    fn test_config_rejects_unknown_button_id() {
        let toml_str = "joystick_physical_buttons = [0, 1, 2, 3, 4, 5, 6, 7, 8, 99]";
        assert!(toml::from_str::<InputConfig>(toml_str).is_err());
    }

    #[test]
    fn test_bindings_names() {
        let config = InputConfig::default();
        let bindings = config.bindings();
        assert_eq!(bindings[0], ("use_joystick".to_string(), 0));
        for slot in 0..NUM_VIRTUAL_BUTTONS {
            let name = format!("joystick_physical_button{slot}");
            assert_eq!(
                config.binding(&name),
                Some(VirtualButtonMap::default().get(slot).unwrap().id())
            );
        }
        assert_eq!(config.binding("joystick_y_axis"), Some(1));
        assert_eq!(config.binding("nonexistent"), None);
    }

    #[test]
    fn test_set_binding() {
        let mut config = InputConfig::default();
        config.set_binding("use_joystick", 1).unwrap();
        config.set_binding("joystick_physical_button3", 14).unwrap();
        config.set_binding("joystick_x_invert", 1).unwrap();
        config.set_binding("joystick_y_axis", -1).unwrap();

        assert!(config.use_joystick);
        assert_eq!(
            config.joystick_physical_buttons.get(3),
            Some(PhysicalButton::DPadRight)
        );
        assert!(config.joystick_x_invert);
        assert_eq!(config.y_axis(), None);
    }

    #[test]
    fn test_set_binding_errors() {
        let mut config = InputConfig::default();
        assert!(matches!(
            config.set_binding("joystick_physical_button10", 0),
            Err(ConfigError::UnknownVariable(_))
        ));
        assert!(matches!(
            config.set_binding("joystick_physical_buttonx", 0),
            Err(ConfigError::UnknownVariable(_))
        ));
        assert!(matches!(
            config.set_binding("joystick_physical_button0", 21),
            Err(ConfigError::InvalidValue { value: 21, .. })
        ));
        assert!(matches!(
            config.set_binding("mouse_sensitivity", 5),
            Err(ConfigError::UnknownVariable(_))
        ));
        assert_eq!(config, InputConfig::default());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let mut config = InputConfig::default();
        config.use_joystick = true;
        config.joystick_strafe_invert = true;
        config.set_binding("joystick_physical_button9", 10).unwrap();

        save_to(&config, &path).unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(loaded, InputConfig::default());
    }

    #[test]
    fn test_load_malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "use_joystick = \"maybe\"").unwrap();
        assert!(matches!(load_from(&path), Err(ConfigError::Parse(_))));
    }
}
