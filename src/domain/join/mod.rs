pub mod record;
pub mod resolver;

pub use record::{CombinedRecord, MatchCounts, Section};
pub use resolver::{JoinStage, NotFoundError, resolve};
