//! Error taxonomy.
//!
//! Only structurally invalid input aborts a run. Capacity shortfall
//! and degraded placement are absorbed into the best-effort result
//! (see [`AllocationResult::unseated`](crate::model::AllocationResult)).

use thiserror::Error;

/// Fatal input validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// The candidate list was empty.
    #[error("no candidates to allocate")]
    NoCandidates,

    /// The room list was empty.
    #[error("no rooms available")]
    NoRooms,
}
