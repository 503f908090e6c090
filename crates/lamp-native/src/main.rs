mod meshes;
mod renderer;
mod uniforms;

use log::{error, info, warn};
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use lamp_core::{
    command_for_key, compose_frame, AppState, Outcome, CONTROLS_HELP, WINDOW_HEIGHT,
    WINDOW_TITLE, WINDOW_WIDTH,
};
use renderer::GpuState;

/// Key identifier in the vocabulary `command_for_key` understands.
fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Named(NamedKey::ArrowUp) => Some("ArrowUp"),
        Key::Named(NamedKey::ArrowDown) => Some("ArrowDown"),
        Key::Named(NamedKey::ArrowLeft) => Some("ArrowLeft"),
        Key::Named(NamedKey::ArrowRight) => Some("ArrowRight"),
        Key::Named(NamedKey::Escape) => Some("Escape"),
        Key::Character(s) => Some(s.as_str()),
        _ => None,
    }
}

fn window_title(app: &AppState) -> String {
    format!("{WINDOW_TITLE} - {}", app.status_line())
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("{WINDOW_TITLE}");
    for line in CONTROLS_HELP {
        info!("{line}");
    }

    let mut app = AppState::new();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(window_title(&app))
        .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .build(&event_loop)?;
    let size = window.inner_size();
    app.resize(size.width, size.height);

    let mut state = pollster::block_on(GpuState::new(&window))?;

    event_loop.run(move |event, elwt| {
        let Event::WindowEvent { event, .. } = event else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                state.resize(size);
                app.resize(size.width, size.height);
                state.window.request_redraw();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                let Some(command) = key_name(&logical_key).and_then(command_for_key) else {
                    return;
                };
                match app.apply(command) {
                    Outcome::Quit => elwt.exit(),
                    Outcome::Redraw => {
                        state.window.set_title(&window_title(&app));
                        state.window.request_redraw();
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                let frame = compose_frame(&app);
                match state.render(&frame) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        state.resize(state.window.inner_size())
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        error!("GPU out of memory");
                        elwt.exit();
                    }
                    Err(e) => warn!("skipping frame: {e}"),
                }
            }
            _ => {}
        }
    })?;
    Ok(())
}
