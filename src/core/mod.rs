pub mod controller;
pub mod event;
pub mod gesture;
pub mod input_adapter;

pub use controller::{MoveKey, MovementState};
pub use event::InputEvent;
pub use gesture::{GestureKind, GestureSet};
pub use input_adapter::WinitInput;
