//! Unit tests for lift-dispatch.

use lift_core::{CallRequest, Direction, Floor};

use crate::{DispatchQueues, Placement, route};

fn floors(ns: &[i32]) -> Vec<Floor> {
    ns.iter().copied().map(Floor).collect()
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing_tests {
    use super::*;

    #[test]
    fn route_relative_to_car() {
        assert_eq!(route(Floor(5), Floor(2)), Placement::Up);
        assert_eq!(route(Floor(1), Floor(2)), Placement::Down);
        assert_eq!(route(Floor(2), Floor(2)), Placement::AtFloor);
    }

    #[test]
    fn call_origin_does_not_affect_routing() {
        let mut q = DispatchQueues::new();
        // "Down" pressed above the car still lands in the up queue.
        assert_eq!(q.submit_call(&CallRequest::down(6), Floor(0)), Placement::Up);
        // "Up" pressed below the car lands in the down queue.
        assert_eq!(q.submit_call(&CallRequest::up(1), Floor(4)), Placement::Down);
        assert_eq!(q.up(), floors(&[6]).as_slice());
        assert_eq!(q.down(), floors(&[1]).as_slice());
    }

    #[test]
    fn call_at_current_floor_not_queued() {
        let mut q = DispatchQueues::new();
        assert_eq!(q.submit_call(&CallRequest::up(3), Floor(3)), Placement::AtFloor);
        assert!(q.is_empty());
    }

    #[test]
    fn destination_at_current_floor_ignored() {
        let mut q = DispatchQueues::new();
        assert_eq!(q.submit_destination(Floor(5), Floor(5)), Placement::AtFloor);
        assert!(q.is_empty());
    }
}

// ── Ordering ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ordering_tests {
    use super::*;

    #[test]
    fn up_queue_ascending() {
        let mut q = DispatchQueues::new();
        for n in [9, 2, 5] {
            q.submit_destination(Floor(n), Floor(0));
        }
        assert_eq!(q.up(), floors(&[2, 5, 9]).as_slice());
    }

    #[test]
    fn down_queue_descending() {
        let mut q = DispatchQueues::new();
        for n in [1, 7, 4] {
            q.submit_destination(Floor(n), Floor(10));
        }
        assert_eq!(q.down(), floors(&[7, 4, 1]).as_slice());
    }

    #[test]
    fn duplicates_kept() {
        let mut q = DispatchQueues::new();
        q.submit_destination(Floor(1), Floor(4));
        q.submit_destination(Floor(1), Floor(4));
        assert_eq!(q.down(), floors(&[1, 1]).as_slice());
        assert_eq!(q.len(), 2);
    }
}

// ── Sweep support ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod sweep_tests {
    use super::*;

    fn queues(up: &[i32], down: &[i32]) -> DispatchQueues {
        let mut q = DispatchQueues::new();
        for &n in up {
            q.insert(Direction::Up, Floor(n));
        }
        for &n in down {
            q.insert(Direction::Down, Floor(n));
        }
        q
    }

    #[test]
    fn snapshot_up_filters_behind_car() {
        let q = queues(&[2, 4, 6, 8], &[]);
        assert_eq!(q.snapshot(Direction::Up, Floor(4)), floors(&[4, 6, 8]));
    }

    #[test]
    fn snapshot_down_filters_behind_car() {
        let q = queues(&[], &[9, 5, 3, 1]);
        assert_eq!(q.snapshot(Direction::Down, Floor(5)), floors(&[5, 3, 1]));
    }

    #[test]
    fn snapshot_idle_is_empty() {
        let q = queues(&[3], &[1]);
        assert!(q.snapshot(Direction::Idle, Floor(2)).is_empty());
    }

    #[test]
    fn snapshot_is_detached_from_later_inserts() {
        let mut q = queues(&[2, 9], &[]);
        let snap = q.snapshot(Direction::Up, Floor(0));
        q.insert(Direction::Up, Floor(4));
        assert_eq!(snap, floors(&[2, 9]));
        assert_eq!(q.up(), floors(&[2, 4, 9]).as_slice());
    }

    #[test]
    fn has_eligible_matches_snapshot() {
        let q = queues(&[4, 9], &[7, 2]);
        assert!(q.has_eligible(Direction::Up, Floor(9)));
        assert!(!q.has_eligible(Direction::Up, Floor(10)));
        assert!(q.has_eligible(Direction::Down, Floor(2)));
        assert!(!q.has_eligible(Direction::Down, Floor(1)));
        assert!(!q.has_eligible(Direction::Idle, Floor(5)));
        assert!(!DispatchQueues::new().has_eligible(Direction::Up, Floor(0)));
    }

    #[test]
    fn remove_one_removes_single_duplicate() {
        let mut q = queues(&[3, 3, 7], &[]);
        assert!(q.remove_one(Direction::Up, Floor(3)));
        assert_eq!(q.up(), floors(&[3, 7]).as_slice());
        assert!(!q.remove_one(Direction::Up, Floor(5)));
        assert!(!q.remove_one(Direction::Idle, Floor(3)));
    }

    #[test]
    fn reroute_stale_up_entries() {
        let mut q = queues(&[4, 9], &[1]);
        let moved = q.reroute_stale(Direction::Up, Floor(6));
        assert_eq!(moved, floors(&[4]));
        assert_eq!(q.up(), floors(&[9]).as_slice());
        assert_eq!(q.down(), floors(&[4, 1]).as_slice());
    }

    #[test]
    fn reroute_stale_down_entries() {
        let mut q = queues(&[8], &[5, 2]);
        let moved = q.reroute_stale(Direction::Down, Floor(3));
        assert_eq!(moved, floors(&[5]));
        assert_eq!(q.up(), floors(&[5, 8]).as_slice());
        assert_eq!(q.down(), floors(&[2]).as_slice());
    }

    #[test]
    fn reroute_nothing_stale_is_noop() {
        let mut q = queues(&[5, 6], &[]);
        assert!(q.reroute_stale(Direction::Up, Floor(5)).is_empty());
        assert_eq!(q.up(), floors(&[5, 6]).as_slice());
    }

    #[test]
    fn clear_empties_both() {
        let mut q = queues(&[5], &[2]);
        assert!(q.has_pending(Direction::Up));
        q.clear();
        assert!(q.is_empty());
        assert!(!q.has_pending(Direction::Down));
    }
}
