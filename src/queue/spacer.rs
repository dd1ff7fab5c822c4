//! Gap-insertion queue builder.

use super::types::{GroupPool, Slot};

/// Builds one room's queue by alternating candidates and empty seats.
///
/// Groups are drained in alphabetical key order, one empty slot after
/// every candidate (unless the room is full). Stops at `capacity`
/// slots or when the pool runs dry; residual candidates stay in the
/// pool for later rooms.
///
/// The mode selector only picks this strategy when total capacity is
/// at least double the cohort, so the doubled seat usage is known to
/// fit.
pub fn build_spacer_queue(pool: &mut GroupPool, capacity: usize) -> Vec<Slot> {
    let mut queue: Vec<Slot> = Vec::with_capacity(capacity);

    while queue.len() < capacity {
        let Some(group) = pool.first_non_empty_mut() else {
            break;
        };
        let Some(candidate) = group.take() else {
            break;
        };
        queue.push(Some(candidate));
        if queue.len() < capacity {
            queue.push(None);
        }
    }
    queue
}
