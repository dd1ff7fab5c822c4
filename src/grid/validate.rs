//! Adjacency diagnostics.

use crate::model::{ConflictMode, Seat};

/// Checks that no two 4-adjacent occupied seats share a conflict key.
///
/// Diagnostic helper for tests and audits; the allocation path itself
/// never calls it. Returns `true` for an empty or conflict-free grid.
pub fn validate_no_adjacent_conflict(grid: &[Vec<Seat>], mode: ConflictMode) -> bool {
    let rows = grid.len();
    let cols = grid.first().map_or(0, |row| row.len());

    for r in 0..rows {
        for c in 0..cols {
            let Some(candidate) = &grid[r][c].candidate else {
                continue;
            };
            let key = mode.key_of(candidate);

            let neighbors = [
                (r.wrapping_sub(1), c),
                (r + 1, c),
                (r, c.wrapping_sub(1)),
                (r, c + 1),
            ];
            for (nr, nc) in neighbors {
                if nr >= rows || nc >= cols {
                    continue;
                }
                if let Some(other) = &grid[nr][nc].candidate {
                    if mode.key_of(other) == key {
                        return false;
                    }
                }
            }
        }
    }
    true
}
