//! Failure conditions of a search run. All of these are fatal; a run is never retried.

use std::time::Duration;

use thiserror::Error;

use crate::domain::{Matchup, Team};

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("no record for team {team}")]
    MissingRecord { team: Team },

    #[error("degenerate joint probability {total} for {matchup}")]
    DegenerateProbability { matchup: Matchup, total: f64 },

    #[error("empty schedule window {start}..={end} over {available} week(s)")]
    EmptyScheduleWindow {
        start: usize,
        end: usize,
        available: usize,
    },

    #[error("frontier of {size} sequences after week {week} exceeds the limit of {limit}")]
    FrontierLimitExceeded {
        week: usize,
        size: usize,
        limit: usize,
    },

    #[error("deadline exceeded after week {week} ({elapsed:?} elapsed)")]
    DeadlineExceeded { week: usize, elapsed: Duration },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] anyhow::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidWeek {
    #[error("team {team} appears in more than one matchup")]
    DuplicateTeam { team: Team },

    #[error("team {team} cannot play itself")]
    SelfMatchup { team: Team },
}

#[derive(Debug, Error, PartialEq)]
#[error("win probability {win} outside [0, 1]")]
pub struct InvalidRecord {
    pub win: f64,
}
