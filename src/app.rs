use crate::config::ControllerConfig;
use crate::controller::{open_first_joystick, translate_event};
use crate::error::GpTestError;
use crate::render::render_frame;
use crate::state::{InputState, LoopState};
use crate::ui::SdlSurface;
use std::thread;
use tracing::{info, warn};

/// Open the window and the first joystick, then poll and redraw at a fixed
/// rate until the window closes or both stick clicks are held.
pub fn run(config: ControllerConfig) -> Result<(), GpTestError> {
    let sdl_context = sdl2::init().map_err(GpTestError::Init)?;
    let video = sdl_context.video().map_err(GpTestError::Subsystem)?;
    let joystick_subsystem = sdl_context.joystick().map_err(GpTestError::Subsystem)?;
    let ttf_context = sdl2::ttf::init()?;

    let window = video
        .window(&config.window_title, config.window_width, config.window_height)
        .position_centered()
        .build()?;
    let canvas = window.into_canvas().accelerated().build()?;

    let font = match ttf_context.load_font(&config.font_path, config.font_point_size) {
        Ok(font) => Some(font),
        Err(e) => {
            warn!(
                "Failed to load font {}: {}; labels disabled",
                config.font_path.display(),
                e
            );
            None
        }
    };

    // Held for the lifetime of the loop; SDL stops delivering its events once
    // the handle drops.
    let _joystick = open_first_joystick(&joystick_subsystem);

    let mut surface = SdlSurface::new(canvas, font);
    let mut event_pump = sdl_context.event_pump().map_err(GpTestError::EventPump)?;
    let mut state = InputState::new(&config);
    let mut loop_state = LoopState::Running;

    info!(
        "Running, exit with buttons {} + {}",
        config.left_stick_button, config.right_stick_button
    );

    while loop_state == LoopState::Running {
        let events: Vec<_> = event_pump
            .poll_iter()
            .filter_map(|event| translate_event(&event))
            .collect();
        loop_state = state.drain(events);
        // No closing frame is drawn once the pass stops the loop.
        if loop_state == LoopState::Stopped {
            break;
        }

        if let Err(e) = render_frame(
            &mut surface,
            &state,
            config.window_width,
            config.window_height,
        ) {
            warn!("frame draw failed: {}", e);
        }

        thread::sleep(config.frame_delay);
    }

    info!("Stopped");
    Ok(())
}
