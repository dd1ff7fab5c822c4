//! Input records: candidates and rooms.

/// The attribute used to decide whether two adjacent seats conflict.
///
/// Multi-subject sessions separate by subject; a session where everyone
/// writes the same subject falls back to separating by department.
/// The mode is chosen once per allocation run and applies to every seat
/// of that run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConflictMode {
    /// Neighbors must not write the same subject.
    Subject,

    /// Neighbors must not belong to the same department.
    Department,
}

impl ConflictMode {
    /// Resolves the conflict key of a candidate under this mode.
    pub fn key_of<'a>(&self, candidate: &'a Candidate) -> &'a str {
        match self {
            ConflictMode::Subject => &candidate.subject_code,
            ConflictMode::Department => &candidate.department,
        }
    }
}

/// One exam-taking instance of a person.
///
/// Immutable for the duration of an allocation run. The same person
/// sitting two exams is represented by two distinct candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Unique registration identifier. Compared numerically when it
    /// parses as an unsigned integer, lexicographically otherwise.
    pub register_number: String,

    /// Subject code of the exam being written.
    pub subject_code: String,

    /// Department the candidate belongs to.
    pub department: String,

    /// Exam date label, e.g. `"19-11-25"`.
    pub exam_date: String,

    /// Session label, e.g. `"FN"` or `"AN"`.
    pub session: String,

    /// Accessibility flag. Accessible candidates are seated before
    /// everyone else.
    pub accessible: bool,
}

impl Candidate {
    /// Creates a candidate with the accessibility flag off.
    pub fn new(
        register_number: impl Into<String>,
        subject_code: impl Into<String>,
        department: impl Into<String>,
        exam_date: impl Into<String>,
        session: impl Into<String>,
    ) -> Self {
        Self {
            register_number: register_number.into(),
            subject_code: subject_code.into(),
            department: department.into(),
            exam_date: exam_date.into(),
            session: session.into(),
            accessible: false,
        }
    }

    /// Sets the accessibility flag.
    pub fn with_accessible(mut self, accessible: bool) -> Self {
        self.accessible = accessible;
        self
    }
}

/// A physical seating venue.
///
/// `capacity` may be smaller than `rows * columns` when some physical
/// seats are unusable; the surplus grid cells stay empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    /// Room name, unique within one allocation run.
    pub name: String,

    /// Block or building label.
    pub block: String,

    /// Number of seat rows.
    pub rows: usize,

    /// Number of seat columns.
    pub columns: usize,

    /// Usable seat count, at most `rows * columns`.
    pub capacity: usize,

    /// Fill-order number. Rooms with a lower number fill first;
    /// rooms without a number fill after all numbered rooms, in the
    /// order they were supplied.
    pub priority: Option<u32>,

    /// Whether the room is on the ground floor. Ground-floor rooms
    /// fill first within each partition of a strict run.
    pub ground_floor: bool,
}

impl Room {
    /// Creates a room with no fill-order number and the ground-floor
    /// flag off.
    pub fn new(
        name: impl Into<String>,
        block: impl Into<String>,
        rows: usize,
        columns: usize,
        capacity: usize,
    ) -> Self {
        Self {
            name: name.into(),
            block: block.into(),
            rows,
            columns,
            capacity,
            priority: None,
            ground_floor: false,
        }
    }

    /// Sets the fill-order number.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the ground-floor flag.
    pub fn with_ground_floor(mut self, ground_floor: bool) -> Self {
        self.ground_floor = ground_floor;
        self
    }
}
