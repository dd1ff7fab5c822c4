//! Deterministic exam-hall seat allocation engine.
//!
//! Assigns a cohort of exam candidates to physical seats across a set
//! of rooms so that, as far as capacity allows, no two adjacent seats
//! hold candidates writing the same subject (or, in single-subject
//! sessions, from the same department). The pipeline:
//!
//! - **Sort & classify** ([`grouping`]): composite priority ordering
//!   (accessible candidates, then priority subjects, then natural
//!   order) and session classification by distinct subjects and
//!   departments.
//! - **Grouping** ([`grouping`]): one group per subject (or per
//!   department in single-subject sessions), department-rotated inside
//!   each subject group.
//! - **Queue building** ([`queue`]): per room, either gap-insertion
//!   (spacer strategy) or active-pair interleaving with a
//!   budget-guarded tail lookahead (mixing strategy).
//! - **Grid placement** ([`grid`]): vertical snake fill, seat
//!   numbering, adjacency diagnostics.
//! - **Orchestration** ([`engine`]): mode selection, per-room capacity
//!   accounting, the strict restricted-subject partition, and result
//!   aggregation.
//!
//! # Architecture
//!
//! The engine is a pure, synchronous computation: one call in, one
//! [`AllocationResult`](model::AllocationResult) out, no suspension
//! points and no shared mutable state. Inputs are read-only snapshots;
//! every intermediate structure is owned by the single run that
//! created it. Persistence, transport, parsing, and report rendering
//! are external collaborators: this crate only ever sees candidate
//! and room records and returns placement records.
//!
//! Allocation is best-effort by contract: when capacity is
//! insufficient it degrades to allowed conflicts and reports the
//! overflow, rather than failing or backtracking.

pub mod engine;
pub mod grid;
pub mod grouping;
pub mod model;
pub mod queue;
