pub mod events;
pub mod inputs;
pub mod subscriber;
pub mod wiring;

pub use events::*;
pub use inputs::*;
pub use subscriber::*;
pub use wiring::*;
