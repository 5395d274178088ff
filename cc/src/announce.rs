use rand_core::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::coin::{Coin, CoinId};
use crate::tree::Tree;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AnnouncementId(pub [u8; 32]);

impl From<[u8; 32]> for AnnouncementId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AnnouncementId {
    pub fn random(mut rng: impl RngCore) -> Self {
        let mut id = [0u8; 32];
        rng.fill_bytes(&mut id);
        Self(id)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn hex(&self) -> String {
        hex::encode(self.0)
    }
}

// The environment names every announcement after the coin that created it and
// the message it carries.
pub fn announcement_id(creator: CoinId, message: &[u8]) -> AnnouncementId {
    let mut hasher = Sha256::new();
    hasher.update(creator.as_bytes());
    hasher.update(message);
    let id: [u8; 32] = hasher.finalize().into();

    AnnouncementId(id)
}

// The message a ring coin announces: a commitment to its predecessor's coin
// info and the subtotal it inherited from it.
pub fn subtotal_commitment(coin: &Coin, subtotal: i128) -> [u8; 32] {
    Tree::list([coin.to_tree(), Tree::int(subtotal)]).hash()
}

// Id of the announcement the next coin around the ring must create.
//
// NOTE: the message commits the creating coin to the subtotal it inherits,
// not to the one it computes. Both ends of a link derive the message from the
// same pair, so the ring still closes; a corrected formula would change every
// colored-coin puzzle hash and so define a new coin type.
pub fn next_announcement_id(
    this_coin: &Coin,
    this_subtotal: i128,
    next_coin: &Coin,
) -> AnnouncementId {
    announcement_id(
        next_coin.id(),
        &subtotal_commitment(this_coin, this_subtotal),
    )
}
