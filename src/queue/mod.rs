//! Slot queue construction.
//!
//! A queue is the linear sequence of slots (candidate or empty) poured
//! into one room in snake order. Two builder strategies exist:
//!
//! - **Spacer** ([`build_spacer_queue`]): one empty seat after every
//!   candidate. Only viable when a single subject is present and
//!   capacity is at least double the cohort; guarantees a
//!   conflict-free grid at the cost of up to half the seats.
//! - **Mixing** ([`build_mixing_queue`]): interleaves the two largest
//!   groups ("active pair"), replacing a depleted member with the next
//!   largest. When one group remains, a snake-coordinate lookahead
//!   inserts spacers in front of same-key collisions, but only while
//!   the remaining capacity of this and all later rooms still fits
//!   every unplaced candidate. When it does not, the collision is
//!   accepted rather than dropping anyone.
//!
//! Both builders draw from a shared [`GroupPool`] that persists across
//! rooms, so residual candidates carry into the next room.

mod mixing;
mod spacer;
mod types;

pub use mixing::build_mixing_queue;
pub use spacer::build_spacer_queue;
pub use types::{Group, GroupPool, Slot};
