use serde::{Deserialize, Serialize};

use crate::coin::{Amount, Coin, CoinId, PuzzleHash};

/// Why a coin is entitled to carry colored value: either its parent was
/// already a colored coin of the same type, or the genesis checker authorizes
/// the mint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineageProof {
    Parent {
        parent_parent_id: CoinId,
        parent_inner_puzzle_hash: PuzzleHash,
        parent_amount: Amount,
    },
    Genesis {
        // opaque, forwarded to the genesis checker unread
        proof: Vec<u8>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinBundle {
    pub coin: Coin,
    pub proof: LineageProof,
}

impl CoinBundle {
    pub fn new(coin: Coin, proof: LineageProof) -> Self {
        Self { coin, proof }
    }
}

/// The three bundles one ring spend validates: the spent coin and its two
/// neighbors around the ring. In a ring of one, all three are the same coin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingBundles {
    pub prev: CoinBundle,
    pub this: CoinBundle,
    pub next: CoinBundle,
}
