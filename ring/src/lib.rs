pub mod error;
pub mod lineage;
pub mod spend;

pub use error::{Error, Result, Role};
pub use lineage::{is_bundle_valid, GenesisChecker};
pub use spend::{output_total, InnerPuzzle, RingSpend};
