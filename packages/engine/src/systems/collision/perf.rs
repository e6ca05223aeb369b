use std::cell::RefCell;

thread_local! {
    pub static PERF_RESOLVE_CALLS: RefCell<u64> = RefCell::new(0);
    pub static PERF_CELLS_PROBED: RefCell<u64> = RefCell::new(0);
    pub static PERF_INVALID_BODIES: RefCell<u64> = RefCell::new(0);
}

/// Snapshot of this thread's resolver counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionCounters {
    pub resolve_calls: u64,
    pub cells_probed: u64,
    pub invalid_bodies: u64,
}

impl std::ops::AddAssign for CollisionCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.resolve_calls = self.resolve_calls.saturating_add(rhs.resolve_calls);
        self.cells_probed = self.cells_probed.saturating_add(rhs.cells_probed);
        self.invalid_bodies = self.invalid_bodies.saturating_add(rhs.invalid_bodies);
    }
}

#[inline]
pub(crate) fn record_resolve(cells_probed: u64) {
    PERF_RESOLVE_CALLS.with(|c| {
        let mut v = c.borrow_mut();
        *v = v.saturating_add(1);
    });
    PERF_CELLS_PROBED.with(|c| {
        let mut v = c.borrow_mut();
        *v = v.saturating_add(cells_probed);
    });
}

#[inline]
pub(crate) fn record_invalid_body() {
    PERF_INVALID_BODIES.with(|c| {
        let mut v = c.borrow_mut();
        *v = v.saturating_add(1);
    });
}

pub fn reset_collision_perf_counters() {
    PERF_RESOLVE_CALLS.with(|c| *c.borrow_mut() = 0);
    PERF_CELLS_PROBED.with(|c| *c.borrow_mut() = 0);
    PERF_INVALID_BODIES.with(|c| *c.borrow_mut() = 0);
}

pub fn take_collision_perf_counters() -> CollisionCounters {
    CollisionCounters {
        resolve_calls: PERF_RESOLVE_CALLS.with(|c| std::mem::take(&mut *c.borrow_mut())),
        cells_probed: PERF_CELLS_PROBED.with(|c| std::mem::take(&mut *c.borrow_mut())),
        invalid_bodies: PERF_INVALID_BODIES.with(|c| std::mem::take(&mut *c.borrow_mut())),
    }
}
