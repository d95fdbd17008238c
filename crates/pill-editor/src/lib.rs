pub mod frame;
pub mod gesture;
pub mod input;
pub mod session;

pub use frame::Frame;
pub use gesture::Gesture;
pub use input::{HitTarget, InputEvent};
pub use session::{Session, UpOutcome};
