use serde::{Deserialize, Serialize};

use crate::announce::AnnouncementId;
use crate::coin::{Amount, CoinId, PuzzleHash};
use crate::tree::Tree;

// Wire opcodes interpreted by the execution environment. The discriminants
// must not drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Opcode {
    AggSig = 49,
    AggSigMe = 50,
    CreateCoin = 51,
    CreateAnnouncement = 52,
    AssertAnnouncement = 53,
    AssertMyCoinId = 54,
    AssertSecondsAgeExceeds = 55,
    AssertSecondsNowExceeds = 56,
    AssertHeightAgeExceeds = 57,
    AssertHeightNowExceeds = 58,
    ReserveFee = 59,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    AggSig {
        public_key: Vec<u8>,
        message: Vec<u8>,
    },
    AggSigMe {
        public_key: Vec<u8>,
        message: Vec<u8>,
    },
    CreateCoin {
        puzzle_hash: PuzzleHash,
        amount: Amount,
    },
    CreateAnnouncement {
        message: Vec<u8>,
    },
    AssertAnnouncement {
        id: AnnouncementId,
    },
    AssertMyCoinId {
        id: CoinId,
    },
    AssertSecondsAgeExceeds {
        seconds: u64,
    },
    AssertSecondsNowExceeds {
        seconds: u64,
    },
    AssertHeightAgeExceeds {
        height: u64,
    },
    AssertHeightNowExceeds {
        height: u64,
    },
    ReserveFee {
        amount: Amount,
    },
}

impl Condition {
    pub fn opcode(&self) -> Opcode {
        match self {
            Condition::AggSig { .. } => Opcode::AggSig,
            Condition::AggSigMe { .. } => Opcode::AggSigMe,
            Condition::CreateCoin { .. } => Opcode::CreateCoin,
            Condition::CreateAnnouncement { .. } => Opcode::CreateAnnouncement,
            Condition::AssertAnnouncement { .. } => Opcode::AssertAnnouncement,
            Condition::AssertMyCoinId { .. } => Opcode::AssertMyCoinId,
            Condition::AssertSecondsAgeExceeds { .. } => Opcode::AssertSecondsAgeExceeds,
            Condition::AssertSecondsNowExceeds { .. } => Opcode::AssertSecondsNowExceeds,
            Condition::AssertHeightAgeExceeds { .. } => Opcode::AssertHeightAgeExceeds,
            Condition::AssertHeightNowExceeds { .. } => Opcode::AssertHeightNowExceeds,
            Condition::ReserveFee { .. } => Opcode::ReserveFee,
        }
    }

    // Value this condition orders the environment to create. Zero for
    // anything that is not a CreateCoin.
    pub fn created_amount(&self) -> Amount {
        match self {
            Condition::CreateCoin { amount, .. } => *amount,
            _ => 0,
        }
    }

    // The environment's native `(opcode arg ...)` form.
    pub fn to_tree(&self) -> Tree {
        let opcode = Tree::int(self.opcode() as u8 as i128);
        match self {
            Condition::AggSig {
                public_key,
                message,
            }
            | Condition::AggSigMe {
                public_key,
                message,
            } => Tree::list([opcode, Tree::atom(public_key), Tree::atom(message)]),
            Condition::CreateCoin {
                puzzle_hash,
                amount,
            } => Tree::list([
                opcode,
                Tree::atom(puzzle_hash.as_bytes()),
                Tree::int(*amount as i128),
            ]),
            Condition::CreateAnnouncement { message } => {
                Tree::list([opcode, Tree::atom(message)])
            }
            Condition::AssertAnnouncement { id } => {
                Tree::list([opcode, Tree::atom(id.as_bytes())])
            }
            Condition::AssertMyCoinId { id } => Tree::list([opcode, Tree::atom(id.as_bytes())]),
            Condition::AssertSecondsAgeExceeds { seconds }
            | Condition::AssertSecondsNowExceeds { seconds } => {
                Tree::list([opcode, Tree::int(*seconds as i128)])
            }
            Condition::AssertHeightAgeExceeds { height }
            | Condition::AssertHeightNowExceeds { height } => {
                Tree::list([opcode, Tree::int(*height as i128)])
            }
            Condition::ReserveFee { amount } => Tree::list([opcode, Tree::int(*amount as i128)]),
        }
    }
}

// The whole output list in the environment's form.
pub fn conditions_tree(conditions: &[Condition]) -> Tree {
    Tree::list(conditions.iter().map(Condition::to_tree))
}
