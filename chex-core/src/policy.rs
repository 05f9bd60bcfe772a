use serde::{Deserialize, Serialize};

/// Content hash used for fingerprints. Both variants emit 32-byte digests
/// (64 hex chars), so tables built with either stay format-compatible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashAlgo {
    #[default]
    Sha256,
    Blake3,
}

/// What to do when the same filename appears twice in one upload batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuplicatePolicy {
    /// Later occurrence overwrites the earlier record in place.
    #[default]
    LastWins,
    /// Later occurrences are ignored.
    FirstWins,
    /// Fail the whole batch.
    Reject,
}
