//! Engine-clock timers: the one-shot reset queue and fixed-period intervals.
//!
//! Both are driven by the session's elapsed time, so tests advance them with
//! a simulated clock. There is no cancellation anywhere: a scheduled reset
//! always runs once its deadline passes.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use smallvec::SmallVec;

/// A channel reset committed by a crisis burst.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetAction {
    Strobe,
    Echo,
    MarkerPulse { marker: usize },
    Bars,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Scheduled {
    due: Duration,
    seq: u64,
    action: ResetAction,
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due.cmp(&other.due).then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Time-ordered queue of pending resets. Ties on the deadline run in the
/// order they were scheduled.
#[derive(Default)]
pub struct ResetQueue {
    heap: BinaryHeap<Reverse<Scheduled>>,
    next_seq: u64,
}

impl ResetQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: Duration, action: ResetAction) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Scheduled { due, seq, action }));
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Pop every action whose deadline has passed at `now`.
    pub fn drain_due(&mut self, now: Duration) -> SmallVec<[ResetAction; 8]> {
        let mut due = SmallVec::new();
        while self.heap.peek().is_some_and(|head| head.0.due <= now) {
            if let Some(Reverse(task)) = self.heap.pop() {
                due.push(task.action);
            }
        }
        due
    }
}

/// Fixed-period timer with catch-up: an `advance` step that crosses several
/// periods reports one firing per crossed period. The first firing lands one
/// full period after start.
#[derive(Clone, Copy, Debug)]
pub struct IntervalTimer {
    period: Duration,
    next: Duration,
}

impl IntervalTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next: period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of deadlines reached by engine time `now`.
    pub fn poll(&mut self, now: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        let mut fired = 0;
        while self.next <= now {
            self.next += self.period;
            fired += 1;
        }
        fired
    }
}
