//! Candidate ordering, session classification, and group formation.
//!
//! The pipeline front end. Candidates are sorted by a composite
//! priority key (accessibility first, then priority subjects, then
//! natural order), the session is classified by how many distinct
//! subjects and departments it contains, and the sorted list is
//! partitioned into named groups:
//!
//! - **multi-subject session** — one group per subject, each group
//!   internally round-robined across departments so a dominant subject
//!   still alternates departments seat-to-seat;
//! - **single-subject session** — one group per department.
//!
//! The grouping axis doubles as the run's conflict key
//! ([`ConflictMode`](crate::model::ConflictMode)): neighbors are in
//! conflict exactly when they come from the same group.

mod engine;
mod types;

pub use engine::{build_groups, mix_by_department, sort_candidates};
pub use types::SessionProfile;
