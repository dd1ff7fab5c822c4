//! Data model for the seat allocation engine.
//!
//! Input records ([`Candidate`], [`Room`]) are read-only snapshots for
//! the duration of one allocation run; output records ([`Seat`],
//! [`RoomSeating`], [`CandidateAllocation`], [`AllocationResult`]) are
//! created fresh per run and owned exclusively by it.
//!
//! # Design
//!
//! This module contains no allocation logic. The conflict-key vocabulary
//! ([`ConflictMode`]) lives here because it is part of the contract of
//! every output seat: an occupied seat always carries the resolved key
//! its neighbors were checked against.

mod result;
mod types;

pub use result::{AllocationResult, CandidateAllocation, RoomSeating, Seat};
pub use types::{Candidate, ConflictMode, Room};
