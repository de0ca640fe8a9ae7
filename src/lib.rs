pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod layout;
pub mod render;
pub mod state;
pub mod ui;

pub use app::run;
pub use config::ControllerConfig;
pub use error::GpTestError;
pub use events::ControllerEvent;
pub use layout::{ButtonState, VirtualButton};
pub use state::{InputState, LoopState};
