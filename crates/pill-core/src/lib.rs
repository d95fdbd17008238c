pub mod config;
pub mod id;
pub mod model;
pub mod palette;
pub mod split;

pub use config::SessionConfig;
pub use id::{IdAllocator, PillId};
pub use model::*;
pub use palette::{ColorSource, FixedColor, PastelPalette};
pub use split::{SplitOutcome, SplitReport, evaluate_split, split_all};
