//! Version-control status of the working tree
//!
//! A comparison run asks once for the current branch tip. A tree that is
//! not at the tip of exactly one branch reports an error, which callers
//! treat as "no branch information".

mod git;

pub use git::GitStatus;

use crate::error::SizeResult;
use async_trait::async_trait;

/// Branch state of the current checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VcsStatus {
    /// Branch whose tip is HEAD
    pub branch: String,

    /// Commit hash of HEAD
    pub head: String,

    /// Whether the working tree differs from HEAD
    pub changed: bool,
}

/// Source of [`VcsStatus`]
#[async_trait]
pub trait VcsStatusProvider: Send + Sync {
    /// Describe the current checkout, or fail if HEAD is not a branch tip
    async fn status(&self) -> SizeResult<VcsStatus>;
}
