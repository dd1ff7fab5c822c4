//! Allocation orchestration.
//!
//! The [`Allocator`] ties the pipeline together: sort and classify,
//! group, pick the allocation mode, build one queue per room, pour it
//! through the snake filler, and aggregate the result. Two entry
//! points exist:
//!
//! - [`Allocator::allocate`] — one session over one room list; errors
//!   on empty input.
//! - [`Allocator::allocate_strict`] — pre-splits candidates and rooms
//!   into a restricted partition (subjects that must stay in
//!   designated rooms) and a general partition, allocates each
//!   disjointly, and merges. Infallible; an empty partition is simply
//!   skipped.
//!
//! All tunable sets travel in an explicit [`AllocationConfig`] value;
//! nothing is read from ambient state, so concurrent runs with
//! different configurations cannot observe each other.

mod config;
mod error;
mod runner;

pub use config::AllocationConfig;
pub use error::AllocationError;
pub use runner::Allocator;
