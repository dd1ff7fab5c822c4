//! Active-pair queue builder.

use super::types::{Group, GroupPool, Slot};
use crate::grid::{coords_at, position_of};
use crate::model::{ConflictMode, Room};
use log::debug;
use std::collections::HashSet;

/// Builds one room's queue by interleaving the two largest groups.
///
/// The two groups with the most remaining members form the active
/// pair (larger first; ties broken like the candidate sort, see
/// [`GroupPool::take_largest`]). Placement alternates strictly between
/// them; a depleted member is replaced by the next-largest pooled
/// group and alternation continues.
///
/// Once a single group remains, every placement first runs a snake
/// lookahead: if the preceding slot, or the same-row slot of the
/// previous column, holds a same-key candidate, an empty seat is
/// inserted instead, provided this room's unfilled capacity plus
/// `future_capacity` (all rooms after this one) still fits every
/// unplaced candidate. When the budget check fails the candidate is
/// seated beside the collision rather than dropped.
///
/// Returns one slot per usable seat (`room.capacity`, clamped to the
/// grid size), padded with empty seats when the pool drains early.
/// Partially consumed actives go back to the pool for the next room.
pub fn build_mixing_queue(
    pool: &mut GroupPool,
    room: &Room,
    mode: ConflictMode,
    future_capacity: usize,
    priority_subjects: &HashSet<String>,
) -> Vec<Slot> {
    // Capacity never exceeds the usable cells; anything past the grid
    // could not be poured anywhere.
    let capacity = room.capacity.min(room.rows * room.columns);
    let rows = room.rows;
    let mut queue: Vec<Slot> = Vec::with_capacity(capacity);
    if capacity == 0 {
        return queue;
    }

    let mut active_a = pool.take_largest(priority_subjects);
    let mut active_b = pool.take_largest(priority_subjects);
    let mut take_from_a = true;

    while queue.len() < capacity {
        let paired = active_a.is_some() && active_b.is_some();
        let use_a = if paired { take_from_a } else { active_a.is_some() };

        {
            let side = if use_a {
                active_a.as_mut()
            } else {
                active_b.as_mut()
            };
            let Some(group) = side else {
                break;
            };
            if paired {
                if let Some(candidate) = group.take() {
                    queue.push(Some(candidate));
                }
            } else {
                place_with_lookahead(&mut queue, group, mode, rows, capacity, future_capacity);
            }
        }
        if paired {
            take_from_a = !take_from_a;
        }

        let depleted = if use_a { &active_a } else { &active_b }
            .as_ref()
            .is_some_and(Group::is_empty);
        if depleted {
            let replacement = pool.take_largest(priority_subjects);
            if use_a {
                active_a = replacement;
            } else {
                active_b = replacement;
            }
        }
    }

    for active in [active_a, active_b].into_iter().flatten() {
        pool.restore(active);
    }

    queue.resize(capacity, None);
    queue
}

/// Places the tail group's next candidate, inserting budget-permitted
/// spacers in front of snake collisions first.
fn place_with_lookahead(
    queue: &mut Vec<Slot>,
    group: &mut Group,
    mode: ConflictMode,
    rows: usize,
    capacity: usize,
    future_capacity: usize,
) {
    let (key, register) = match group.peek() {
        Some(c) => (mode.key_of(c).to_string(), c.register_number.clone()),
        None => return,
    };

    while queue.len() < capacity && snake_conflict(queue, rows, mode, &key) {
        let local_left = capacity - queue.len() - 1;
        if local_left + future_capacity < group.remaining() {
            debug!(
                "capacity budget spent, seating {register} beside a same-key neighbor ({key})"
            );
            break;
        }
        queue.push(None);
    }
    if queue.len() >= capacity {
        return;
    }
    if let Some(candidate) = group.take() {
        queue.push(Some(candidate));
    }
}

/// Whether the next queue position collides with an already queued
/// candidate of the same conflict key: either the slot immediately
/// before it in snake order, or the same-row slot one column back.
fn snake_conflict(queue: &[Slot], rows: usize, mode: ConflictMode, key: &str) -> bool {
    let position = queue.len();

    if position > 0 {
        if let Some(Some(previous)) = queue.get(position - 1) {
            if mode.key_of(previous) == key {
                return true;
            }
        }
    }

    let (row, col) = coords_at(position, rows);
    if col > 0 {
        let beside = position_of(row, col - 1, rows);
        if let Some(Some(neighbor)) = queue.get(beside) {
            if mode.key_of(neighbor) == key {
                return true;
            }
        }
    }
    false
}
