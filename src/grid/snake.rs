//! Vertical boustrophedon coordinate mapping and grid filling.

use super::numbering::seat_number_for;
use crate::model::{Candidate, ConflictMode, Room, Seat};

/// Maps a (row, column) cell to its position in snake fill order.
///
/// Inverse of [`coords_at`].
pub fn position_of(row: usize, col: usize, rows: usize) -> usize {
    let offset = if col % 2 == 0 { row } else { rows - 1 - row };
    col * rows + offset
}

/// Maps a snake-order position back to its (row, column) cell.
///
/// Inverse of [`position_of`].
pub fn coords_at(position: usize, rows: usize) -> (usize, usize) {
    let col = position / rows;
    let offset = position % rows;
    let row = if col % 2 == 0 { offset } else { rows - 1 - offset };
    (row, col)
}

/// Outcome of pouring a slot queue into one room.
#[derive(Debug, Clone)]
pub struct GridFill {
    /// The populated grid, indexed `grid[row][col]`. Every cell carries
    /// a seat number, occupied or not.
    pub grid: Vec<Vec<Seat>>,

    /// Number of seats that received a candidate.
    pub occupied: usize,

    /// Number of queue items consumed (candidates and empties both).
    /// Anything past this index in the queue belongs to later rooms.
    pub consumed: usize,
}

/// Pours a slot queue into a room grid in snake order.
///
/// Consumes at most `room.capacity` queue items, one per cell; when the
/// capacity is below `rows * columns` the trailing cells stay empty and
/// the caller keeps the unconsumed tail of the queue for subsequent
/// rooms. Each occupied seat records its occupant's conflict key under
/// the given mode.
pub fn fill_room(room: &Room, queue: &[Option<Candidate>], mode: ConflictMode) -> GridFill {
    let rows = room.rows;
    let cols = room.columns;

    let mut grid: Vec<Vec<Seat>> = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| Seat {
                    row: r,
                    col: c,
                    candidate: None,
                    conflict_key: None,
                    seat_number: seat_number_for(r, c, rows),
                })
                .collect()
        })
        .collect();

    let mut occupied = 0;
    let mut consumed = 0;

    for position in 0..rows * cols {
        if consumed >= queue.len() || consumed >= room.capacity {
            break;
        }
        let (r, c) = coords_at(position, rows);
        if let Some(candidate) = &queue[consumed] {
            grid[r][c].conflict_key = Some(mode.key_of(candidate).to_string());
            grid[r][c].candidate = Some(candidate.clone());
            occupied += 1;
        }
        consumed += 1;
    }

    GridFill {
        grid,
        occupied,
        consumed,
    }
}
