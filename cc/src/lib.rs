pub mod announce;
pub mod bundle;
pub mod coin;
pub mod condition;
pub mod params;
pub mod tree;

pub use announce::{announcement_id, next_announcement_id, subtotal_commitment, AnnouncementId};
pub use bundle::{CoinBundle, LineageProof, RingBundles};
pub use coin::{Amount, Coin, CoinId, PuzzleHash};
pub use condition::{conditions_tree, Condition, Opcode};
pub use params::CcParams;
pub use tree::Tree;
