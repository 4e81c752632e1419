//! Timer seam and a deterministic clock for driving it in tests.
//!
//! A [`Scheduler`] hands out handles; dropping a handle cancels its timer.
//! That is the whole lifecycle contract: whoever owns the handle owns the
//! timer, and releasing the owner releases the timer.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::error::{CarouselError, Result};

/// Source of one-shot and repeating timers on a single-threaded event loop.
pub trait Scheduler {
    /// Cancels the timer when dropped.
    type Handle;

    /// Run `task` once after `delay`.
    fn once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Result<Self::Handle>;

    /// Run `task` every `period` until the handle is dropped.
    fn every(&self, period: Duration, task: Box<dyn Fn()>) -> Result<Self::Handle>;
}

enum Task {
    Once(Box<dyn FnOnce()>),
    Every(Box<dyn Fn()>, Duration),
}

struct Entry {
    due: Duration,
    task: Task,
}

#[derive(Default)]
struct ClockInner {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<u64, Entry>,
    running: Option<u64>,
    running_cancelled: bool,
}

impl ClockInner {
    fn insert(&mut self, due: Duration, task: Task) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.timers.insert(id, Entry { due, task });
        id
    }

    fn cancel(&mut self, id: u64) {
        self.timers.remove(&id);
        if self.running == Some(id) {
            self.running_cancelled = true;
        }
    }

    /// Earliest timer due at or before `limit`; ties go to the older timer.
    fn next_due(&self, limit: Duration) -> Option<(u64, Duration)> {
        self.timers
            .iter()
            .filter(|(_, entry)| entry.due <= limit)
            .min_by_key(|(id, entry)| (entry.due, **id))
            .map(|(id, entry)| (*id, entry.due))
    }
}

/// Manually advanced clock implementing [`Scheduler`].
///
/// Time only moves inside [`VirtualClock::advance_by`]. Timers due within the
/// window fire in due order, and tasks may freely schedule or cancel other
/// timers (including themselves) while running.
#[derive(Clone, Default)]
pub struct VirtualClock {
    inner: Rc<RefCell<ClockInner>>,
}

impl VirtualClock {
    /// A clock at time zero with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed virtual time.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of armed timers.
    pub fn pending(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    /// Move time forward by `step`, firing every timer that comes due.
    pub fn advance_by(&self, step: Duration) {
        let target = self.now() + step;

        loop {
            let next = self.inner.borrow().next_due(target);
            let Some((id, due)) = next else {
                break;
            };

            let entry = {
                let mut inner = self.inner.borrow_mut();
                inner.now = due;
                inner.running = Some(id);
                inner.running_cancelled = false;
                inner.timers.remove(&id)
            };
            let Some(entry) = entry else {
                continue;
            };

            // The borrow is released while the task runs.
            match entry.task {
                Task::Once(task) => {
                    task();
                    self.inner.borrow_mut().running = None;
                }
                Task::Every(task, period) => {
                    task();
                    let mut inner = self.inner.borrow_mut();
                    inner.running = None;
                    if !inner.running_cancelled {
                        inner.timers.insert(
                            id,
                            Entry {
                                due: due + period,
                                task: Task::Every(task, period),
                            },
                        );
                    }
                }
            }
        }

        self.inner.borrow_mut().now = target;
    }

    fn handle(&self, id: u64) -> VirtualHandle {
        VirtualHandle {
            id,
            clock: Rc::downgrade(&self.inner),
        }
    }
}

impl Scheduler for VirtualClock {
    type Handle = VirtualHandle;

    fn once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Result<VirtualHandle> {
        let mut inner = self.inner.borrow_mut();
        let due = inner.now + delay;
        let id = inner.insert(due, Task::Once(task));
        drop(inner);
        Ok(self.handle(id))
    }

    fn every(&self, period: Duration, task: Box<dyn Fn()>) -> Result<VirtualHandle> {
        if period.is_zero() {
            return Err(CarouselError::ZeroDuration { field: "period" });
        }
        let mut inner = self.inner.borrow_mut();
        let due = inner.now + period;
        let id = inner.insert(due, Task::Every(task, period));
        drop(inner);
        Ok(self.handle(id))
    }
}

/// Handle to a [`VirtualClock`] timer; dropping it cancels the timer.
pub struct VirtualHandle {
    id: u64,
    clock: Weak<RefCell<ClockInner>>,
}

impl std::fmt::Debug for VirtualHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VirtualHandle").field("id", &self.id).finish()
    }
}

impl Drop for VirtualHandle {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            clock.borrow_mut().cancel(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn once_fires_at_deadline_only() {
        let clock = VirtualClock::new();
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let _handle = clock
            .once(ms(500), Box::new(move || counter.set(counter.get() + 1)))
            .unwrap();

        clock.advance_by(ms(499));
        assert_eq!(fired.get(), 0);
        clock.advance_by(ms(1));
        assert_eq!(fired.get(), 1);
        clock.advance_by(ms(10_000));
        assert_eq!(fired.get(), 1);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn every_repeats_until_dropped() {
        let clock = VirtualClock::new();
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let handle = clock
            .every(ms(100), Box::new(move || counter.set(counter.get() + 1)))
            .unwrap();

        clock.advance_by(ms(350));
        assert_eq!(fired.get(), 3);
        assert_eq!(clock.now(), ms(350));

        drop(handle);
        clock.advance_by(ms(1_000));
        assert_eq!(fired.get(), 3);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn zero_period_is_rejected() {
        let clock = VirtualClock::new();
        let result = clock.every(Duration::ZERO, Box::new(|| {}));
        assert!(matches!(
            result,
            Err(CarouselError::ZeroDuration { field: "period" })
        ));
    }

    #[test]
    fn same_deadline_runs_in_scheduling_order() {
        let clock = VirtualClock::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let first = order.clone();
        let second = order.clone();
        let _a = clock
            .once(ms(10), Box::new(move || first.borrow_mut().push("a")))
            .unwrap();
        let _b = clock
            .once(ms(10), Box::new(move || second.borrow_mut().push("b")))
            .unwrap();

        clock.advance_by(ms(10));
        assert_eq!(*order.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn repeating_task_can_cancel_itself() {
        let clock = VirtualClock::new();
        let slot: Rc<RefCell<Option<VirtualHandle>>> = Rc::new(RefCell::new(None));
        let fired = Rc::new(Cell::new(0));

        let task_slot = slot.clone();
        let counter = fired.clone();
        let handle = clock
            .every(
                ms(100),
                Box::new(move || {
                    counter.set(counter.get() + 1);
                    task_slot.borrow_mut().take();
                }),
            )
            .unwrap();
        *slot.borrow_mut() = Some(handle);

        clock.advance_by(ms(1_000));
        assert_eq!(fired.get(), 1);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn task_can_schedule_follow_up_within_window() {
        let clock = VirtualClock::new();
        let fired = Rc::new(Cell::new(false));
        let keep: Rc<RefCell<Vec<VirtualHandle>>> = Rc::new(RefCell::new(Vec::new()));

        let inner_clock = clock.clone();
        let flag = fired.clone();
        let store = keep.clone();
        let _outer = clock
            .once(
                ms(100),
                Box::new(move || {
                    let flag = flag.clone();
                    let handle = inner_clock
                        .once(ms(50), Box::new(move || flag.set(true)))
                        .unwrap();
                    store.borrow_mut().push(handle);
                }),
            )
            .unwrap();

        clock.advance_by(ms(150));
        assert!(fired.get());
    }
}
