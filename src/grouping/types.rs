//! Session classification.

use crate::model::{Candidate, ConflictMode};
use std::collections::BTreeSet;

/// Aggregate shape of one allocation session.
///
/// Computed once per run, before grouping; the distinct-subject count
/// decides the conflict mode and (together with capacity) the
/// allocation mode.
#[derive(Debug, Clone)]
pub struct SessionProfile {
    /// Distinct departments present, in sorted order.
    pub departments: BTreeSet<String>,

    /// Distinct subjects present, in sorted order.
    pub subjects: BTreeSet<String>,

    /// Total candidate count.
    pub total: usize,
}

impl SessionProfile {
    /// Classifies a candidate list.
    pub fn classify(candidates: &[Candidate]) -> Self {
        Self {
            departments: candidates.iter().map(|c| c.department.clone()).collect(),
            subjects: candidates.iter().map(|c| c.subject_code.clone()).collect(),
            total: candidates.len(),
        }
    }

    /// The conflict key attribute for this session: subject when more
    /// than one subject is present, department otherwise.
    pub fn conflict_mode(&self) -> ConflictMode {
        if self.subjects.len() > 1 {
            ConflictMode::Subject
        } else {
            ConflictMode::Department
        }
    }
}
