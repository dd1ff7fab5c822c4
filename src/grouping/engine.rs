//! Composite sort and group formation.

use crate::model::{Candidate, ConflictMode};
use itertools::Itertools;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

/// Sorts candidates by the composite priority key:
/// accessible candidates first, then priority-subject candidates, then
/// (department, subject, register number) natural order.
///
/// Register numbers compare numerically when both sides parse as
/// unsigned integers, lexicographically otherwise.
pub fn sort_candidates(
    candidates: &[Candidate],
    priority_subjects: &HashSet<String>,
) -> Vec<Candidate> {
    let mut sorted = candidates.to_vec();
    sorted.sort_by(|a, b| {
        b.accessible
            .cmp(&a.accessible)
            .then_with(|| {
                priority_subjects
                    .contains(&b.subject_code)
                    .cmp(&priority_subjects.contains(&a.subject_code))
            })
            .then_with(|| a.department.cmp(&b.department))
            .then_with(|| a.subject_code.cmp(&b.subject_code))
            .then_with(|| register_order(&a.register_number, &b.register_number))
    });
    sorted
}

fn register_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<u128>(), b.parse::<u128>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

/// Partitions sorted candidates into named groups along the conflict
/// axis, preserving sort order within each group.
///
/// In subject mode each group is additionally round-robined across
/// departments (see [`mix_by_department`]). Empty groups cannot occur:
/// a key only exists because at least one candidate carries it.
pub fn build_groups(
    candidates: Vec<Candidate>,
    mode: ConflictMode,
) -> BTreeMap<String, Vec<Candidate>> {
    let grouped: BTreeMap<String, Vec<Candidate>> = candidates
        .into_iter()
        .map(|c| (mode.key_of(&c).to_string(), c))
        .into_group_map()
        .into_iter()
        .collect();

    match mode {
        ConflictMode::Subject => grouped
            .into_iter()
            .map(|(key, members)| (key, mix_by_department(members)))
            .collect(),
        ConflictMode::Department => grouped,
    }
}

/// Round-robins a same-subject candidate list across its departments.
///
/// `[CSE, CSE, IT, IT]` becomes `[CSE, IT, CSE, IT]`, so a subject
/// that dominates a room still seats different departments next to
/// each other. Departments rotate in sorted order; within one
/// department the incoming order is kept.
pub fn mix_by_department(members: Vec<Candidate>) -> Vec<Candidate> {
    let by_department: BTreeMap<String, Vec<Candidate>> = members
        .into_iter()
        .map(|c| (c.department.clone(), c))
        .into_group_map()
        .into_iter()
        .collect();

    let mut lanes: Vec<std::vec::IntoIter<Candidate>> = by_department
        .into_values()
        .map(|v| v.into_iter())
        .collect();

    let mut mixed = Vec::new();
    let mut exhausted = false;
    while !exhausted {
        exhausted = true;
        for lane in &mut lanes {
            if let Some(c) = lane.next() {
                mixed.push(c);
                exhausted = false;
            }
        }
    }
    mixed
}
