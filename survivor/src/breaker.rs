//! A circuit breaker that bounds a single expansion, shared by all of its worker threads. Once
//! either bound is crossed, workers stop producing branches and the expansion winds down early.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trip {
    BranchLimit { limit: usize },
    Deadline,
}

#[derive(Debug, Default)]
pub struct Breaker {
    max_branches: Option<usize>,
    deadline: Option<Instant>,
    branches: AtomicUsize,
    over_limit: AtomicBool,
    past_deadline: AtomicBool,
}
impl Breaker {
    pub fn new(max_branches: Option<usize>, deadline: Option<Instant>) -> Self {
        Self {
            max_branches,
            deadline,
            ..Self::default()
        }
    }

    /// Accounts for newly produced branches, tripping the breaker if the running total exceeds
    /// the branch limit or the deadline has been reached.
    pub fn record(&self, branches: usize) {
        let total = self.branches.fetch_add(branches, Ordering::SeqCst) + branches;
        if let Some(limit) = self.max_branches {
            if total > limit {
                self.over_limit.store(true, Ordering::SeqCst);
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.past_deadline.store(true, Ordering::SeqCst);
            }
        }
    }

    pub fn is_tripped(&self) -> bool {
        self.over_limit.load(Ordering::SeqCst) || self.past_deadline.load(Ordering::SeqCst)
    }

    pub fn trip(&self) -> Option<Trip> {
        match self.max_branches {
            Some(limit) if self.over_limit.load(Ordering::SeqCst) => Some(Trip::BranchLimit { limit }),
            _ if self.past_deadline.load(Ordering::SeqCst) => Some(Trip::Deadline),
            _ => None,
        }
    }

    /// The number of branches recorded so far.
    pub fn branches(&self) -> usize {
        self.branches.load(Ordering::SeqCst)
    }
}
