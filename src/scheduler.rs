//! Delayed and repeating callbacks.
//!
//! Nothing here can be cancelled from the outside: one-shot tasks always run,
//! and a repeating task only ends by returning `ControlFlow::Break`.

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};

pub type Once = Box<dyn FnOnce()>;
pub type Repeating = Box<dyn FnMut() -> ControlFlow<()>>;

pub trait Scheduler: Clone + 'static {
    fn after(&self, delay_ms: u32, task: Once);
    fn every(&self, period_ms: u32, task: Repeating);
}

/// `setTimeout`/`setInterval` through gloo.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn after(&self, delay_ms: u32, task: Once) {
        Timeout::new(delay_ms, task).forget();
    }

    fn every(&self, period_ms: u32, mut task: Repeating) {
        let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        let handle_clone = handle.clone();
        let interval = Interval::new(period_ms, move || {
            if task().is_break() {
                // Dropping the interval clears it.
                if let Some(interval) = handle_clone.borrow_mut().take() {
                    drop(interval);
                }
            }
        });
        *handle.borrow_mut() = Some(interval);
    }
}

enum Job {
    Once(Once),
    Every { period_ms: u32, task: Repeating },
}

struct Pending {
    due: u64,
    seq: u64,
    job: Job,
}

#[derive(Default)]
struct Queue {
    now: u64,
    seq: u64,
    pending: Vec<Pending>,
}

impl Queue {
    fn push(&mut self, due: u64, job: Job) {
        self.seq += 1;
        self.pending.push(Pending { due, seq: self.seq, job });
    }

    fn pop_due(&mut self, until: u64) -> Option<Pending> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        let next = self.pending.swap_remove(index);
        self.now = next.due;
        Some(next)
    }
}

/// Host-driven clock: time only moves when [`ManualScheduler::advance`] is called.
/// Due tasks run in (due time, scheduling order).
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.queue.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Moves the clock forward by `ms`, running everything that falls due.
    /// Tasks scheduled while advancing run too if they are due in the window.
    pub fn advance(&self, ms: u64) {
        let until = self.queue.borrow().now + ms;
        loop {
            // The borrow must end before the task runs; tasks reschedule.
            let next = self.queue.borrow_mut().pop_due(until);
            let Some(Pending { due, job, .. }) = next else {
                break;
            };
            match job {
                Job::Once(task) => task(),
                Job::Every { period_ms, mut task } => {
                    if task().is_continue() {
                        self.queue
                            .borrow_mut()
                            .push(due + u64::from(period_ms.max(1)), Job::Every { period_ms, task });
                    }
                }
            }
        }
        self.queue.borrow_mut().now = until;
    }
}

impl Scheduler for ManualScheduler {
    fn after(&self, delay_ms: u32, task: Once) {
        let mut queue = self.queue.borrow_mut();
        let due = queue.now + u64::from(delay_ms);
        queue.push(due, Job::Once(task));
    }

    fn every(&self, period_ms: u32, task: Repeating) {
        let mut queue = self.queue.borrow_mut();
        let due = queue.now + u64::from(period_ms.max(1));
        queue.push(due, Job::Every { period_ms, task });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_shot_runs_when_due_and_not_before() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(false));
        let flag = fired.clone();
        scheduler.after(100, Box::new(move || *flag.borrow_mut() = true));

        scheduler.advance(99);
        assert!(!*fired.borrow());
        scheduler.advance(1);
        assert!(*fired.borrow());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn same_due_time_runs_in_scheduling_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (delay, label) in [(20, "b"), (10, "a"), (20, "c")] {
            let log = log.clone();
            scheduler.after(delay, Box::new(move || log.borrow_mut().push(label)));
        }
        scheduler.advance(50);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn repeating_task_stops_on_break() {
        let scheduler = ManualScheduler::new();
        let ticks = Rc::new(RefCell::new(Vec::new()));
        let seen = ticks.clone();
        let clock = scheduler.clone();
        let mut count = 0;
        scheduler.every(
            16,
            Box::new(move || {
                count += 1;
                seen.borrow_mut().push(clock.now());
                if count == 3 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            }),
        );

        scheduler.advance(1000);
        assert_eq!(*ticks.borrow(), vec![16, 32, 48]);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.now(), 1000);
    }

    #[test]
    fn tasks_scheduled_from_tasks_run_in_the_same_advance() {
        let scheduler = ManualScheduler::new();
        let fired_at = Rc::new(RefCell::new(None));
        let inner = scheduler.clone();
        let slot = fired_at.clone();
        scheduler.after(
            10,
            Box::new(move || {
                let clock = inner.clone();
                inner.after(5, Box::new(move || *slot.borrow_mut() = Some(clock.now())));
            }),
        );
        scheduler.advance(20);
        assert_eq!(*fired_at.borrow(), Some(15));
    }
}
