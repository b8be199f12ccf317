pub mod error;
pub mod ladder;
pub mod scoring;
pub mod stats;
pub mod traits;
pub mod types;

pub use error::*;
pub use ladder::{Cut, Ladder, Outcome, Rung};
pub use scoring::compute_axis_score;
pub use traits::*;
pub use types::*;
