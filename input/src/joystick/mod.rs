//! Controller button remapping and analog axis filtering
//!
//! Controllers are sampled once per frame, outside the key queue. Physical
//! buttons are resolved through a [`VirtualButtonMap`] into a bitmask, and
//! raw axis readings are dead-zoned and optionally inverted.

#[cfg(feature = "gamepad")]
mod gamepad;

#[cfg(feature = "gamepad")]
pub use self::gamepad::GilrsController;

use serde::{Deserialize, Serialize};

use crate::raw::{Axis, PhysicalButton};

/// Number of virtual button slots.
pub const NUM_VIRTUAL_BUTTONS: usize = 10;

/// Axis readings with magnitude at or below this are reported as 0.
/// This is 5% of the full signed 16-bit range.
pub const DEAD_ZONE: i32 = 32768 / 20;

/// An opened controller.
pub trait Controller {
    /// Human-readable device name, for logging
    fn name(&self) -> &str;

    /// Whether a physical button is currently held
    fn is_pressed(&self, button: PhysicalButton) -> bool;

    /// Raw analog reading for an axis
    fn axis_value(&self, axis: Axis) -> i16;

    /// Next pending button edge, if the device reports edges.
    ///
    /// Called by the dispatcher during each platform poll; edges are routed
    /// through the key queue.
    fn next_button_event(&mut self) -> Option<(PhysicalButton, bool)> {
        None
    }
}

/// Virtual-to-physical button mapping, one physical button per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VirtualButtonMap([PhysicalButton; NUM_VIRTUAL_BUTTONS]);

impl Default for VirtualButtonMap {
    fn default() -> Self {
        Self([
            PhysicalButton::A,
            PhysicalButton::B,
            PhysicalButton::X,
            PhysicalButton::Y,
            PhysicalButton::Back,
            PhysicalButton::Guide,
            PhysicalButton::Start,
            PhysicalButton::LeftStick,
            PhysicalButton::RightStick,
            PhysicalButton::LeftShoulder,
        ])
    }
}

impl VirtualButtonMap {
    pub fn new(buttons: [PhysicalButton; NUM_VIRTUAL_BUTTONS]) -> Self {
        Self(buttons)
    }

    /// Physical button for a virtual slot, `None` past the last slot.
    pub fn get(&self, slot: usize) -> Option<PhysicalButton> {
        self.0.get(slot).copied()
    }

    /// Rebind a slot. Returns false if the slot does not exist.
    pub fn set(&mut self, slot: usize, button: PhysicalButton) -> bool {
        match self.0.get_mut(slot) {
            Some(entry) => {
                *entry = button;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = PhysicalButton> + '_ {
        self.0.iter().copied()
    }
}

/// State of one virtual button. Slots past the map read as released.
pub fn read_button_state<C>(controller: &C, map: &VirtualButtonMap, slot: usize) -> bool
where
    C: Controller + ?Sized,
{
    map.get(slot)
        .is_some_and(|button| controller.is_pressed(button))
}

/// Bitmask of held virtual buttons: bit i is set iff slot i is held.
pub fn sample_buttons<C>(controller: &C, map: &VirtualButtonMap) -> u32
where
    C: Controller + ?Sized,
{
    (0..NUM_VIRTUAL_BUTTONS)
        .filter(|&slot| read_button_state(controller, map, slot))
        .fold(0, |mask, slot| mask | (1 << slot))
}

/// Filtered reading of an axis. A disabled axis (`None`) reads as 0.
pub fn sample_axis<C>(controller: &C, axis: Option<Axis>, invert: bool) -> i32
where
    C: Controller + ?Sized,
{
    match axis {
        Some(axis) => filter_axis(controller.axis_value(axis), invert),
        None => 0,
    }
}

/// Apply the dead zone, then inversion, to a raw axis reading.
pub fn filter_axis(raw: i16, invert: bool) -> i32 {
    let value = i32::from(raw);
    let value = if value.abs() <= DEAD_ZONE { 0 } else { value };
    if invert { -value } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Controller with a fixed set of held buttons and axis values
    #[derive(Default)]
    struct FakePad {
        held: Vec<PhysicalButton>,
        axes: [i16; 6],
    }

    impl Controller for FakePad {
        fn name(&self) -> &str {
            "Fake Pad"
        }

        fn is_pressed(&self, button: PhysicalButton) -> bool {
            self.held.contains(&button)
        }

        fn axis_value(&self, axis: Axis) -> i16 {
            self.axes[axis.id() as usize]
        }
    }

    #[test]
    fn test_dead_zone_value() {
        assert_eq!(DEAD_ZONE, 1638);
    }

    #[test]
    fn test_dead_zone_clamps_to_zero() {
        for raw in [-1638i16, -1000, -1, 0, 1, 1000, 1637, 1638] {
            assert_eq!(filter_axis(raw, false), 0, "raw {raw}");
            assert_eq!(filter_axis(raw, true), 0, "raw {raw} inverted");
        }
    }

    #[test]
    fn test_outside_dead_zone_passes_and_inverts() {
        for raw in [1639i16, 5000, i16::MAX, -1639, -20000, i16::MIN] {
            let value = filter_axis(raw, false);
            assert_eq!(value, i32::from(raw));
            assert_eq!(filter_axis(raw, true), -value);
        }
        assert_eq!(filter_axis(i16::MIN, true), 32768);
    }

    #[test]
    fn test_disabled_axis_is_neutral() {
        let pad = FakePad {
            axes: [30000; 6],
            ..Default::default()
        };
        assert_eq!(sample_axis(&pad, None, false), 0);
        assert_eq!(sample_axis(&pad, Axis::from_id(Axis::DISABLED), true), 0);
        assert_eq!(sample_axis(&pad, Some(Axis::RightX), true), -30000);
    }

    #[test]
    fn test_button_mask_default_map() {
        let pad = FakePad {
            held: vec![PhysicalButton::A, PhysicalButton::Start],
            ..Default::default()
        };
        let map = VirtualButtonMap::default();
        assert_eq!(sample_buttons(&pad, &map), (1 << 0) | (1 << 6));
    }

    #[test]
    fn test_button_mask_slots_independent() {
        let map = VirtualButtonMap::default();
        for slot in 0..NUM_VIRTUAL_BUTTONS {
            let button = map.get(slot).unwrap();
            let pad = FakePad {
                held: vec![button],
                ..Default::default()
            };
            assert_eq!(sample_buttons(&pad, &map), 1 << slot);
        }
    }

    #[test]
    fn test_button_mask_follows_remap() {
        let mut map = VirtualButtonMap::default();
        assert!(map.set(0, PhysicalButton::DPadUp));
        assert!(!map.set(NUM_VIRTUAL_BUTTONS, PhysicalButton::A));

        let pad = FakePad {
            held: vec![PhysicalButton::A, PhysicalButton::DPadUp],
            ..Default::default()
        };
        // A is no longer mapped anywhere, DPadUp now drives slot 0
        assert_eq!(sample_buttons(&pad, &map), 1);
    }

    #[test]
    fn test_unmapped_physical_buttons_ignored() {
        let pad = FakePad {
            held: vec![PhysicalButton::Paddle1, PhysicalButton::Touchpad],
            ..Default::default()
        };
        assert_eq!(sample_buttons(&pad, &VirtualButtonMap::default()), 0);
    }

    #[test]
    fn test_read_button_state_out_of_range() {
        let pad = FakePad {
            held: PhysicalButton::ALL.to_vec(),
            ..Default::default()
        };
        let map = VirtualButtonMap::default();
        assert!(read_button_state(&pad, &map, 0));
        assert!(!read_button_state(&pad, &map, NUM_VIRTUAL_BUTTONS));
    }
}
