use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

// Which of the three ring positions the failing bundle occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Prev,
    This,
    Next,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Prev => write!(f, "prev"),
            Role::This => write!(f, "this"),
            Role::Next => write!(f, "next"),
        }
    }
}

// Failures are categorical and fatal: a failing call produces no conditions
// at all, the spend must be re-authored and resubmitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{0} coin bundle has an invalid lineage proof")]
    InvalidLineageProof(Role),
    #[error("inner puzzle attempted to create an announcement")]
    ForbiddenAnnouncement,
    #[error("genesis coin checker failure: {0}")]
    GenesisChecker(String),
    #[error("inner puzzle failure: {0}")]
    InnerPuzzle(String),
}
