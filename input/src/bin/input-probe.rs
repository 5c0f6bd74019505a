//! Input probe
//!
//! Opens a window and logs every engine event the input pipeline produces.
//! Useful for checking key translation and gamepad mapping on a new machine.
//!
//! Run with `RUST_LOG=debug` to also see controller discovery details.

use anyhow::Result;
use nethercore_input::{EngineEvent, InputError, InputSubsystem, WinitEventSource, config};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

struct Probe {
    window: Option<Window>,
    source: WinitEventSource,
    input: InputSubsystem,
    events: Vec<EngineEvent>,
}

impl Probe {
    fn tick(&mut self, event_loop: &ActiveEventLoop) {
        match self.input.dispatch(&mut self.source, &mut self.events) {
            Ok(_) => {}
            Err(InputError::QuitRequested) => {
                tracing::info!("Quit requested");
                self.input.shutdown();
                event_loop.exit();
                return;
            }
            Err(e) => tracing::error!("Input error: {}", e),
        }
        self.input.update_joystick(&mut self.events);

        for event in self.events.drain(..) {
            match event {
                EngineEvent::Joystick { buttons, x, y, strafe }
                    if buttons == 0 && x == 0 && y == 0 && strafe == 0 => {}
                EngineEvent::Joystick { .. } => tracing::debug!("{:?}", event),
                _ => tracing::info!("{:?}", event),
            }
        }
    }
}

impl ApplicationHandler for Probe {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attributes = Window::default_attributes().with_title("Nethercore input probe");
        match event_loop.create_window(attributes) {
            Ok(window) => self.window = Some(window),
            Err(e) => {
                tracing::error!("Failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.source.handle_window_event(&event);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.tick(event_loop);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = config::load();
    tracing::info!(
        "Joystick events {}",
        if config.use_joystick { "enabled" } else { "disabled" }
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut probe = Probe {
        window: None,
        source: WinitEventSource::new(),
        input: InputSubsystem::init(config),
        events: Vec::new(),
    };
    event_loop.run_app(&mut probe)?;
    Ok(())
}
