//! Group queues and the cross-room pool.

use crate::model::Candidate;
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet, VecDeque};

/// One queue position: a candidate, or an intentionally empty seat.
pub type Slot = Option<Candidate>;

/// A named candidate group consumed head-first.
///
/// Members keep the order the grouping stage produced (priority sort,
/// then department rotation in subject mode).
#[derive(Debug, Clone)]
pub struct Group {
    key: String,
    members: VecDeque<Candidate>,
}

impl Group {
    /// Creates a group from an ordered member list.
    pub fn new(key: impl Into<String>, members: Vec<Candidate>) -> Self {
        Self {
            key: key.into(),
            members: members.into(),
        }
    }

    /// The group key (subject code or department).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Number of members not yet placed.
    pub fn remaining(&self) -> usize {
        self.members.len()
    }

    /// Whether every member has been placed.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The next member to be placed, if any.
    pub fn peek(&self) -> Option<&Candidate> {
        self.members.front()
    }

    /// Removes and returns the next member.
    pub fn take(&mut self) -> Option<Candidate> {
        self.members.pop_front()
    }
}

/// All groups of one allocation run, shared by every room's builder.
///
/// Groups are held in alphabetical key order; the pool outlives each
/// room so partially consumed groups flow into the next one.
#[derive(Debug, Clone)]
pub struct GroupPool {
    groups: Vec<Group>,
}

impl GroupPool {
    /// Builds a pool from the grouping stage's ordered map.
    pub fn new(groups: BTreeMap<String, Vec<Candidate>>) -> Self {
        Self {
            groups: groups
                .into_iter()
                .filter(|(_, members)| !members.is_empty())
                .map(|(key, members)| Group::new(key, members))
                .collect(),
        }
    }

    /// Total candidates not yet placed, across all groups.
    pub fn total_remaining(&self) -> usize {
        self.groups.iter().map(Group::remaining).sum()
    }

    /// Whether no candidates remain anywhere.
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Group::is_empty)
    }

    /// The first group (alphabetically) that still has members.
    pub fn first_non_empty_mut(&mut self) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| !g.is_empty())
    }

    /// Removes and returns the group with the most remaining members.
    ///
    /// Ties are broken the way the candidate sort is: a group whose
    /// next member is accessible wins, then one whose next member
    /// writes a priority subject, then alphabetical key order.
    pub fn take_largest(&mut self, priority_subjects: &HashSet<String>) -> Option<Group> {
        self.groups.retain(|g| !g.is_empty());
        let idx = self
            .groups
            .iter()
            .enumerate()
            .min_by_key(|(_, g)| {
                let head = g.peek();
                (
                    Reverse(g.remaining()),
                    head.map_or(true, |c| !c.accessible),
                    head.map_or(true, |c| !priority_subjects.contains(&c.subject_code)),
                    g.key().to_string(),
                )
            })
            .map(|(i, _)| i)?;
        Some(self.groups.remove(idx))
    }

    /// Returns a partially consumed group to the pool, keeping
    /// alphabetical order. Empty groups are dropped.
    pub fn restore(&mut self, group: Group) {
        if group.is_empty() {
            return;
        }
        let at = self.groups.partition_point(|g| g.key() < group.key());
        self.groups.insert(at, group);
    }

    /// Drains every remaining candidate, in alphabetical group order.
    pub fn drain_remaining(&mut self) -> Vec<Candidate> {
        let mut out = Vec::new();
        for group in &mut self.groups {
            out.extend(group.members.drain(..));
        }
        self.groups.clear();
        out
    }
}
