//! Allocation execution.

use super::config::AllocationConfig;
use super::error::AllocationError;
use crate::grid::fill_room;
use crate::grouping::{build_groups, sort_candidates, SessionProfile};
use crate::model::{AllocationResult, Candidate, CandidateAllocation, Room, RoomSeating};
use crate::queue::{build_mixing_queue, build_spacer_queue, GroupPool};
use log::{debug, info, warn};

/// Executes seat allocation runs.
///
/// An allocator is cheap to construct and holds nothing but its
/// configuration; every run works on read-only input snapshots and
/// exclusively owned intermediate state, so allocators can be used
/// from multiple threads or rebuilt per call, whichever suits the
/// caller.
pub struct Allocator {
    config: AllocationConfig,
}

impl Allocator {
    /// Creates an allocator with the given configuration.
    pub fn new(config: AllocationConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// Allocates one session of candidates across the given rooms.
    ///
    /// Rooms fill in priority order (numbered rooms first, ascending;
    /// unnumbered rooms after, in supplied order). Allocation is
    /// best-effort: candidates that do not fit are reported in
    /// [`AllocationResult::unseated`], not treated as an error.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::NoCandidates`] or
    /// [`AllocationError::NoRooms`] when the respective list is empty.
    pub fn allocate(
        &self,
        candidates: &[Candidate],
        rooms: &[Room],
    ) -> Result<AllocationResult, AllocationError> {
        if candidates.is_empty() {
            return Err(AllocationError::NoCandidates);
        }
        if rooms.is_empty() {
            return Err(AllocationError::NoRooms);
        }
        Ok(self.run_session(candidates, rooms.to_vec()))
    }

    /// Allocates with the restricted-subject partition enforced.
    ///
    /// Candidates whose subject is in the restricted set go exclusively
    /// to rooms whose name is in the restricted-room set; everyone else
    /// goes exclusively to the remaining rooms. Within each partition,
    /// ground-floor rooms fill first (then by name). The two partial
    /// results are concatenated.
    ///
    /// Never fails: an empty partition on either side is skipped, and
    /// restricted candidates with no restricted room configured end up
    /// in [`AllocationResult::unseated`].
    pub fn allocate_strict(&self, candidates: &[Candidate], rooms: &[Room]) -> AllocationResult {
        let (restricted, general): (Vec<Candidate>, Vec<Candidate>) = candidates
            .iter()
            .cloned()
            .partition(|c| self.config.restricted_subjects.contains(&c.subject_code));
        let (restricted_rooms, general_rooms): (Vec<Room>, Vec<Room>) = rooms
            .iter()
            .cloned()
            .partition(|r| self.config.restricted_rooms.contains(&r.name));

        debug!(
            "strict split: {} restricted / {} general candidates, {} restricted / {} general rooms",
            restricted.len(),
            general.len(),
            restricted_rooms.len(),
            general_rooms.len()
        );

        let mut merged = AllocationResult::default();
        for (label, candidates, mut rooms) in [
            ("restricted", restricted, restricted_rooms),
            ("general", general, general_rooms),
        ] {
            if candidates.is_empty() {
                continue;
            }
            if rooms.is_empty() {
                warn!(
                    "{} {label} candidates have no {label} room configured and stay unseated",
                    candidates.len()
                );
                merged
                    .unseated
                    .extend(candidates.into_iter().map(|c| c.register_number));
                continue;
            }
            rooms.sort_by_key(|r| (!r.ground_floor, r.name.clone()));

            let part = self.run_session(&candidates, rooms);
            merged.rooms.extend(part.rooms);
            merged.allocations.extend(part.allocations);
            merged.unseated.extend(part.unseated);
        }

        merged.total_seated = merged.allocations.len();
        merged.rooms_used = merged.rooms.len();
        merged
    }

    /// One full pipeline pass over a non-empty candidate and room set.
    fn run_session(&self, candidates: &[Candidate], mut rooms: Vec<Room>) -> AllocationResult {
        rooms.sort_by_key(|r| (r.priority.is_none(), r.priority.unwrap_or(0)));

        let sorted = sort_candidates(candidates, &self.config.priority_subjects);
        let profile = SessionProfile::classify(&sorted);
        let mode = profile.conflict_mode();

        let total_capacity: usize = rooms.iter().map(|r| r.capacity).sum();
        let spacer_mode = profile.subjects.len() == 1 && total_capacity >= 2 * profile.total;
        debug!(
            "session: {} candidates, {} subjects, {} departments, capacity {total_capacity}, {} strategy",
            profile.total,
            profile.subjects.len(),
            profile.departments.len(),
            if spacer_mode { "spacer" } else { "mixing" }
        );

        let mut pool = GroupPool::new(build_groups(sorted, mode));
        let mut seatings: Vec<RoomSeating> = Vec::new();
        let mut allocations: Vec<CandidateAllocation> = Vec::new();

        for index in 0..rooms.len() {
            if pool.is_empty() {
                break;
            }
            let room = &rooms[index];
            let future_capacity: usize = rooms[index + 1..].iter().map(|r| r.capacity).sum();

            let queue = if spacer_mode {
                build_spacer_queue(&mut pool, room.capacity.min(room.rows * room.columns))
            } else {
                build_mixing_queue(
                    &mut pool,
                    room,
                    mode,
                    future_capacity,
                    &self.config.priority_subjects,
                )
            };

            let fill = fill_room(room, &queue, mode);
            for row in &fill.grid {
                for seat in row {
                    if let Some(candidate) = &seat.candidate {
                        allocations.push(CandidateAllocation {
                            register_number: candidate.register_number.clone(),
                            department: candidate.department.clone(),
                            subject: candidate.subject_code.clone(),
                            room_name: room.name.clone(),
                            row: seat.row,
                            col: seat.col,
                            seat_number: seat.seat_number.clone(),
                        });
                    }
                }
            }
            seatings.push(RoomSeating {
                room: room.clone(),
                grid: fill.grid,
                occupied: fill.occupied,
            });
        }

        let unseated: Vec<String> = pool
            .drain_remaining()
            .into_iter()
            .map(|c| c.register_number)
            .collect();
        if !unseated.is_empty() {
            warn!(
                "capacity exhausted: {} of {} candidates left unseated",
                unseated.len(),
                profile.total
            );
        }
        info!(
            "seated {} of {} candidates across {} rooms",
            allocations.len(),
            profile.total,
            seatings.len()
        );

        AllocationResult {
            total_seated: allocations.len(),
            rooms_used: seatings.len(),
            rooms: seatings,
            allocations,
            unseated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::validate_no_adjacent_conflict;
    use crate::model::ConflictMode;
    use std::collections::HashSet;

    fn candidate(reg: &str, subject: &str, dept: &str) -> Candidate {
        Candidate::new(reg, subject, dept, "19-11-25", "FN")
    }

    fn plain_allocator() -> Allocator {
        Allocator::new(AllocationConfig::default())
    }

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let allocator = plain_allocator();
        let rooms = vec![Room::new("H1", "B", 5, 5, 25)];
        let candidates = vec![candidate("1", "CS3401", "CSE")];

        assert_eq!(
            allocator.allocate(&[], &rooms),
            Err(AllocationError::NoCandidates)
        );
        assert_eq!(
            allocator.allocate(&candidates, &[]),
            Err(AllocationError::NoRooms)
        );
    }

    #[test]
    fn test_full_room_end_to_end() {
        // 25 same-subject same-department candidates into a 5x5 room:
        // capacity is too tight for spacers, everyone is seated.
        let candidates: Vec<_> = (1..=25)
            .map(|i| candidate(&i.to_string(), "CS3401", "CSE"))
            .collect();
        let rooms = vec![Room::new("H1", "B", 5, 5, 25)];

        let result = plain_allocator().allocate(&candidates, &rooms).unwrap();

        assert_eq!(result.rooms_used, 1);
        assert_eq!(result.total_seated, 25);
        assert_eq!(result.allocations.len(), 25);
        assert!(result.unseated.is_empty());
        assert_eq!(result.rooms[0].occupied, 25);

        // Seat numbers cover 1..=25; column 0 runs 1..5 top-down and
        // column 1 runs 6..10 bottom-up.
        let grid = &result.rooms[0].grid;
        let mut numbers: Vec<usize> = grid
            .iter()
            .flatten()
            .map(|s| s.seat_number.parse().unwrap())
            .collect();
        numbers.sort_unstable();
        assert_eq!(numbers, (1..=25).collect::<Vec<_>>());
        assert_eq!(grid[0][0].seat_number, "1");
        assert_eq!(grid[4][0].seat_number, "5");
        assert_eq!(grid[4][1].seat_number, "6");
        assert_eq!(grid[0][1].seat_number, "10");
    }

    #[test]
    fn test_spacer_mode_yields_conflict_free_grid() {
        // Single subject, single department, double capacity: spacer
        // mode applies and no two neighbors share the department key.
        let candidates: Vec<_> = (1..=10)
            .map(|i| candidate(&i.to_string(), "MA3251", "CSE"))
            .collect();
        let rooms = vec![Room::new("H1", "B", 5, 5, 25)];

        let result = plain_allocator().allocate(&candidates, &rooms).unwrap();

        assert_eq!(result.total_seated, 10);
        assert!(validate_no_adjacent_conflict(
            &result.rooms[0].grid,
            ConflictMode::Department
        ));
    }

    #[test]
    fn test_single_subject_departments_alternate_densely() {
        // One subject, two departments, capacity below double: mixing
        // mode alternates X,Y with no empty seats in between.
        let mut candidates = Vec::new();
        for i in 0..10 {
            candidates.push(candidate(&format!("1{i:02}"), "MA3251", "X"));
            candidates.push(candidate(&format!("2{i:02}"), "MA3251", "Y"));
        }
        let rooms = vec![Room::new("H1", "B", 5, 5, 25)];

        let result = plain_allocator().allocate(&candidates, &rooms).unwrap();
        assert_eq!(result.total_seated, 20);

        // Walk the grid in snake order: the first 20 cells hold strictly
        // alternating departments.
        let grid = &result.rooms[0].grid;
        let mut depts = Vec::new();
        for position in 0..20 {
            let (r, c) = crate::grid::coords_at(position, 5);
            depts.push(
                grid[r][c]
                    .candidate
                    .as_ref()
                    .map(|s| s.department.clone())
                    .unwrap_or_default(),
            );
        }
        for pair in depts.chunks(2) {
            assert_eq!(pair, ["X".to_string(), "Y".to_string()]);
        }
    }

    #[test]
    fn test_overflow_spills_into_second_room() {
        // Two balanced subjects alternate densely; the surplus flows on.
        let mut candidates = Vec::new();
        for i in 0..15 {
            candidates.push(candidate(&format!("1{i:02}"), "CS3401", "CSE"));
            candidates.push(candidate(&format!("2{i:02}"), "EC3401", "ECE"));
        }
        let rooms = vec![
            Room::new("H1", "B", 5, 5, 25),
            Room::new("H2", "B", 5, 5, 25),
        ];

        let result = plain_allocator().allocate(&candidates, &rooms).unwrap();

        assert_eq!(result.total_seated, 30);
        assert_eq!(result.rooms_used, 2);
        assert_eq!(result.rooms[0].occupied, 25);
        assert_eq!(result.rooms[1].occupied, 5);
    }

    #[test]
    fn test_single_group_spreads_while_budget_allows() {
        // One conflict group across two rooms: the tail lookahead may
        // spend the slack on spacers, but everyone still gets a seat.
        let candidates: Vec<_> = (1..=30)
            .map(|i| candidate(&i.to_string(), "CS3401", "CSE"))
            .collect();
        let rooms = vec![
            Room::new("H1", "B", 5, 5, 25),
            Room::new("H2", "B", 5, 5, 25),
        ];

        let result = plain_allocator().allocate(&candidates, &rooms).unwrap();

        assert_eq!(result.total_seated, 30);
        assert_eq!(result.rooms_used, 2);
        assert!(result.unseated.is_empty());
        // The first room is spaced out, not packed solid.
        assert!(result.rooms[0].occupied < 25);
    }

    #[test]
    fn test_capacity_shortfall_reports_unseated() {
        init_logs();
        let candidates: Vec<_> = (1..=30)
            .map(|i| candidate(&i.to_string(), "CS3401", "CSE"))
            .collect();
        let rooms = vec![Room::new("H1", "B", 5, 5, 25)];

        let result = plain_allocator().allocate(&candidates, &rooms).unwrap();

        assert_eq!(result.total_seated, 25);
        assert_eq!(result.unseated.len(), 5);
    }

    #[test]
    fn test_room_priority_orders_fill() {
        let candidates: Vec<_> = (1..=5)
            .map(|i| candidate(&i.to_string(), "CS3401", "CSE"))
            .collect();
        let rooms = vec![
            Room::new("H1", "B", 5, 5, 25),
            Room::new("H2", "B", 5, 5, 25).with_priority(1),
        ];

        let result = plain_allocator().allocate(&candidates, &rooms).unwrap();

        assert_eq!(result.rooms[0].room.name, "H2");
        assert!(result.allocations.iter().all(|a| a.room_name == "H2"));
    }

    #[test]
    fn test_accessible_candidates_take_early_seats() {
        let mut candidates: Vec<_> = (1..=10)
            .map(|i| candidate(&format!("{i:02}"), "CS3401", "CSE"))
            .collect();
        candidates.push(candidate("99", "CS3401", "CSE").with_accessible(true));
        let rooms = vec![Room::new("H1", "B", 11, 1, 11)];

        let result = plain_allocator().allocate(&candidates, &rooms).unwrap();

        // Snake position 0 is (0,0): the accessible candidate leads.
        let first = result.rooms[0].grid[0][0].candidate.as_ref().unwrap();
        assert_eq!(first.register_number, "99");
    }

    #[test]
    fn test_strict_routes_restricted_subject_to_restricted_room() {
        let config = AllocationConfig::default()
            .with_restricted_subjects(["GE3251"])
            .with_restricted_rooms(["AH1"]);
        let allocator = Allocator::new(config);

        let candidates = vec![
            candidate("1111", "CS1234", "CSE"),
            candidate("2222", "GE3251", "MECH"),
        ];
        let rooms = vec![
            Room::new("AH1", "Main", 5, 5, 25),
            Room::new("LH101", "Main", 5, 5, 25),
        ];

        let result = allocator.allocate_strict(&candidates, &rooms);

        assert_eq!(result.total_seated, 2);
        let by_reg = |reg: &str| {
            result
                .allocations
                .iter()
                .find(|a| a.register_number == reg)
                .unwrap()
        };
        assert_eq!(by_reg("2222").room_name, "AH1");
        assert_eq!(by_reg("1111").room_name, "LH101");
    }

    #[test]
    fn test_strict_without_restricted_rooms_reports_unseated() {
        init_logs();
        let config = AllocationConfig::default().with_restricted_subjects(["GE3251"]);
        let allocator = Allocator::new(config);

        let candidates = vec![
            candidate("1111", "CS1234", "CSE"),
            candidate("2222", "GE3251", "MECH"),
        ];
        let rooms = vec![Room::new("LH101", "Main", 5, 5, 25)];

        let result = allocator.allocate_strict(&candidates, &rooms);

        assert_eq!(result.total_seated, 1);
        assert_eq!(result.unseated, vec!["2222".to_string()]);
        assert_eq!(result.allocations[0].room_name, "LH101");
    }

    #[test]
    fn test_strict_fills_ground_floor_first() {
        let config = AllocationConfig::default();
        let allocator = Allocator::new(config);

        let candidates = vec![candidate("1", "CS3401", "CSE")];
        let rooms = vec![
            Room::new("A201", "Main", 5, 5, 25),
            Room::new("G001", "Main", 5, 5, 25).with_ground_floor(true),
        ];

        let result = allocator.allocate_strict(&candidates, &rooms);

        assert_eq!(result.allocations[0].room_name, "G001");
    }

    #[test]
    fn test_strict_tolerates_empty_input() {
        let result = plain_allocator().allocate_strict(&[], &[]);

        assert_eq!(result.total_seated, 0);
        assert_eq!(result.rooms_used, 0);
        assert!(result.unseated.is_empty());
    }

    #[test]
    fn test_no_room_appears_twice() {
        let candidates: Vec<_> = (1..=60)
            .map(|i| candidate(&i.to_string(), "CS3401", "CSE"))
            .collect();
        let rooms = vec![
            Room::new("H1", "B", 5, 5, 25),
            Room::new("H2", "B", 5, 5, 25),
            Room::new("H3", "B", 5, 5, 25),
        ];

        let result = plain_allocator().allocate(&candidates, &rooms).unwrap();

        let names: HashSet<&str> = result.rooms.iter().map(|s| s.room.name.as_str()).collect();
        assert_eq!(names.len(), result.rooms.len());
    }

    #[test]
    fn test_occupied_never_exceeds_capacity() {
        let candidates: Vec<_> = (1..=40)
            .map(|i| candidate(&i.to_string(), if i % 2 == 0 { "CS3401" } else { "EC3401" }, "CSE"))
            .collect();
        // Capacity below the grid size: only 20 of 25 cells usable.
        let rooms = vec![
            Room::new("H1", "B", 5, 5, 20),
            Room::new("H2", "B", 5, 5, 20),
        ];

        let result = plain_allocator().allocate(&candidates, &rooms).unwrap();

        for seating in &result.rooms {
            assert!(seating.occupied <= seating.room.capacity);
        }
        assert_eq!(result.total_seated, 40);
    }

    #[test]
    fn test_two_subjects_never_conflict_when_balanced() {
        // Two equal subjects fill a room completely; strict alternation
        // means the full grid passes the adjacency check.
        let mut candidates = Vec::new();
        for i in 0..13 {
            candidates.push(candidate(&format!("1{i:02}"), "CS3401", "CSE"));
            candidates.push(candidate(&format!("2{i:02}"), "EC3401", "ECE"));
        }
        let rooms = vec![Room::new("H1", "B", 5, 5, 25)];

        let result = plain_allocator().allocate(&candidates, &rooms).unwrap();

        assert_eq!(result.rooms[0].occupied, 25);
        assert!(validate_no_adjacent_conflict(
            &result.rooms[0].grid,
            ConflictMode::Subject
        ));
    }
}
