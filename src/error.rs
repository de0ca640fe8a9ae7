use thiserror::Error;

/// Startup failures. Nothing past startup is fatal.
#[derive(Debug, Error)]
pub enum GpTestError {
    #[error("SDL init error: {0}")]
    Init(String),

    #[error("SDL subsystem error: {0}")]
    Subsystem(String),

    #[error("window error: {0}")]
    Window(#[from] sdl2::video::WindowBuildError),

    #[error("canvas error: {0}")]
    Canvas(#[from] sdl2::IntegerOrSdlError),

    #[error("TTF init error: {0}")]
    Ttf(#[from] sdl2::ttf::InitError),

    #[error("event pump error: {0}")]
    EventPump(String),
}
