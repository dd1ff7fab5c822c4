//! Allocation configuration.
//!
//! [`AllocationConfig`] carries the externally administered subject and
//! room sets. It is supplied per allocator, refreshed by the caller as
//! needed; the engine never caches or globalizes it.

use std::collections::HashSet;

/// Configuration for one allocation engine.
///
/// # Defaults
///
/// All sets default to empty: no subject is prioritized or restricted,
/// and strict allocation routes everyone through the general partition.
///
/// ```
/// use examseat::engine::AllocationConfig;
///
/// let config = AllocationConfig::default();
/// assert!(config.priority_subjects.is_empty());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use examseat::engine::AllocationConfig;
///
/// let config = AllocationConfig::default()
///     .with_priority_subjects(["ME3591", "AU3301"])
///     .with_restricted_subjects(["GE3251"])
///     .with_restricted_rooms(["AH1"]);
///
/// assert!(config.priority_subjects.contains("ME3591"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AllocationConfig {
    /// Subject codes seated ahead of ordinary subjects (right after
    /// accessible candidates).
    pub priority_subjects: HashSet<String>,

    /// Subject codes that may only be seated in restricted rooms
    /// (e.g. drawing-based exams needing drafting tables).
    pub restricted_subjects: HashSet<String>,

    /// Names of the rooms the restricted subjects are confined to.
    /// Matched exactly against [`Room::name`](crate::model::Room::name).
    pub restricted_rooms: HashSet<String>,
}

impl AllocationConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the priority subject codes.
    pub fn with_priority_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority_subjects = subjects.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the restricted subject codes.
    pub fn with_restricted_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.restricted_subjects = subjects.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the restricted room names.
    pub fn with_restricted_rooms<I, S>(mut self, rooms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.restricted_rooms = rooms.into_iter().map(Into::into).collect();
        self
    }
}
