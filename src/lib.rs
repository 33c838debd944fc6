pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod frame;
pub mod gallery;
pub mod math;
pub mod projection;
pub mod random;
pub mod session;
pub mod traits;
pub mod types;

pub use app::ShootingGallery;
pub use camera::{CameraPose, FirstPersonController};
pub use config::Config;
pub use crate::core::{GestureKind, InputEvent, MoveKey};
