//! Snake-order grid placement, seat numbering, and adjacency checks.
//!
//! Rooms fill in vertical boustrophedon ("snake") order: even columns
//! top-to-bottom, odd columns bottom-to-top. The same coordinate
//! mapping drives three things:
//!
//! - pouring a slot queue into a room grid ([`fill_room`]),
//! - the mixing builder's tail lookahead (via [`position_of`] /
//!   [`coords_at`]),
//! - human-facing seat numbers ([`seat_number_for`]), which follow the
//!   snake so invigilators can walk the numbering without backtracking.

mod numbering;
mod snake;
mod validate;

pub use numbering::seat_number_for;
pub use snake::{coords_at, fill_room, position_of, GridFill};
pub use validate::validate_no_adjacent_conflict;
