//! Output records: seats, per-room seatings, and the aggregate result.

use super::types::{Candidate, Room};

/// One cell of a room's seat grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat {
    /// Row index, 0-based from the front of the room.
    pub row: usize,

    /// Column index, 0-based from the left of the room.
    pub col: usize,

    /// The occupying candidate, if any.
    pub candidate: Option<Candidate>,

    /// The occupant's resolved conflict key (subject or department,
    /// per the run's [`ConflictMode`](super::ConflictMode)), kept for
    /// fast neighbor checks. `None` for empty seats.
    pub conflict_key: Option<String>,

    /// Human-facing seat number, computed for every cell regardless
    /// of occupancy.
    pub seat_number: String,
}

impl Seat {
    /// Returns whether the seat is occupied.
    pub fn is_occupied(&self) -> bool {
        self.candidate.is_some()
    }
}

/// A room paired with its fully populated seat grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomSeating {
    /// The room this seating belongs to.
    pub room: Room,

    /// Seat grid, indexed `grid[row][col]`.
    pub grid: Vec<Vec<Seat>>,

    /// Number of seats actually occupied.
    pub occupied: usize,
}

/// A flattened per-candidate placement record.
///
/// This is the primary externally consumed artifact; report generators
/// work from these rows without touching the seat grids.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateAllocation {
    /// Registration identifier of the seated candidate.
    pub register_number: String,

    /// Candidate's department.
    pub department: String,

    /// Subject code of the exam being written.
    pub subject: String,

    /// Name of the room the candidate was seated in.
    pub room_name: String,

    /// Row index of the assigned seat.
    pub row: usize,

    /// Column index of the assigned seat.
    pub col: usize,

    /// Human-facing seat number of the assigned seat.
    pub seat_number: String,
}

/// The aggregate outcome of one allocation run.
///
/// Allocation is best-effort: when capacity runs out, or when a
/// restricted candidate has no restricted room to go to, the surplus
/// candidates end up in [`unseated`](Self::unseated) rather than
/// aborting the run. `total_seated` always equals `allocations.len()`,
/// so a caller detects shortfall by comparing it against the input
/// count or by inspecting `unseated` directly.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationResult {
    /// Per-room seating views, in room fill order.
    pub rooms: Vec<RoomSeating>,

    /// Flat placement records, one per seated candidate.
    pub allocations: Vec<CandidateAllocation>,

    /// Number of candidates actually seated.
    pub total_seated: usize,

    /// Number of rooms that received at least part of the queue.
    pub rooms_used: usize,

    /// Register numbers of candidates that could not be seated.
    pub unseated: Vec<String>,
}
