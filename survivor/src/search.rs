//! The week-by-week search. Starting from a single lineage of the preselected teams, every week
//! is scored, the frontier is branched against the week's matchups and, optionally, deduplicated.
//! The search ends once all weeks have been processed, or early, if a week leaves no lineage
//! standing; in the latter case the frontier from before that week is ranked instead.

use std::time::{Duration, Instant};

use anyhow::bail;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, trace};

use crate::breaker::{Breaker, Trip};
use crate::domain::{LeagueSchedule, Team, TeamRecords};
use crate::error::SearchError;
use crate::expand::{expand, BranchGate, ScoredMatchup};
use crate::frontier::{Frontier, PickSequence};
use crate::rank::rank;
use crate::reduce::reduce;
use crate::roster::{Roster, TeamId};
use crate::scorer::{score, HomeFieldBias};

#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    pub prune: bool,
    pub gate: BranchGate,
    pub bias: HomeFieldBias,
    pub top_n: usize,
    pub max_frontier: Option<usize>,
    pub deadline: Option<Duration>,
}
impl SearchConfig {
    pub const DEFAULT_TOP_N: usize = 10;

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.gate.validate()?;
        self.bias.validate()?;
        if self.max_frontier == Some(0) {
            bail!("max frontier must be positive")
        }
        Ok(())
    }

    pub fn with_prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    pub fn with_strict_confidence(mut self, strict_confidence: bool) -> Self {
        self.gate.strict_confidence = strict_confidence;
        self
    }

    pub fn with_favourites_only(mut self, favourites_only: bool) -> Self {
        self.gate.favourites_only = favourites_only;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_max_frontier(mut self, max_frontier: Option<usize>) -> Self {
        self.max_frontier = max_frontier;
        self
    }

    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            prune: false,
            gate: BranchGate::default(),
            bias: HomeFieldBias::default(),
            top_n: Self::DEFAULT_TOP_N,
            max_frontier: None,
            deadline: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Termination {
    /// Every week of the schedule was processed.
    Exhausted,

    /// No lineage could be extended in the given (calendar) week.
    WeekEmpty { week: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WeekSummary {
    pub week: usize,
    pub matchups: usize,
    pub expanded: usize,
    pub retained: usize,
}

#[derive(Debug)]
pub struct SearchOutcome {
    pub termination: Termination,
    pub weeks: Vec<WeekSummary>,
    pub frontier: Frontier,
    pub ranked: Vec<PickSequence>,
    pub elapsed: Duration,
}

pub fn search(
    schedule: &LeagueSchedule,
    records: &TeamRecords,
    preselected: &[Team],
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    config.validate()?;
    if schedule.is_empty() {
        return Err(SearchError::EmptyScheduleWindow {
            start: schedule.week_number(0),
            end: schedule.week_number(0),
            available: 0,
        });
    }

    let start_time = Instant::now();
    let mut roster = Roster::with_capacity(schedule.weeks()[0].len() * 2 + preselected.len());
    let fixtures = resolve_fixtures(schedule, &mut roster);
    let mut frontier = Frontier::seed(roster, preselected);
    debug!(
        "seeded frontier with {} preselected team(s) over {} week(s)",
        frontier.preselected(),
        schedule.len()
    );

    let mut weeks = Vec::with_capacity(schedule.len());
    let mut termination = Termination::Exhausted;
    for (index, (week, fixtures)) in schedule.weeks().iter().zip(&fixtures).enumerate() {
        let week_number = schedule.week_number(index);
        let scored = week
            .matchups()
            .par_iter()
            .zip(fixtures.par_iter())
            .map(|(matchup, &(visitor, home))| {
                score(matchup, records, &config.bias).map(|composite| ScoredMatchup {
                    visitor,
                    home,
                    composite,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!("week {week_number}: expanding {} lineage(s)", frontier.len());
        let breaker = Breaker::new(
            config.max_frontier,
            config.deadline.and_then(|deadline| start_time.checked_add(deadline)),
        );
        let branches = expand(&frontier, &scored, &config.gate, &breaker);
        match breaker.trip() {
            Some(Trip::BranchLimit { limit }) => {
                return Err(SearchError::FrontierLimitExceeded {
                    week: week_number,
                    size: breaker.branches(),
                    limit,
                });
            }
            Some(Trip::Deadline) => {
                return Err(SearchError::DeadlineExceeded {
                    week: week_number,
                    elapsed: start_time.elapsed(),
                });
            }
            None => {}
        }
        if branches.is_empty() {
            info!(
                "week {week_number}: no viable picks; ranking {} lineage(s) from the prior week",
                frontier.len()
            );
            termination = Termination::WeekEmpty { week: week_number };
            break;
        }
        let expanded = branches.len();
        frontier.advance(branches);

        if config.prune {
            let removed = reduce(&mut frontier);
            trace!("week {week_number}: pruned {removed} duplicate lineage(s)");
        }
        info!(
            "week {week_number}: {} matchup(s), {expanded} branch(es), {} retained",
            week.len(),
            frontier.len()
        );
        weeks.push(WeekSummary {
            week: week_number,
            matchups: week.len(),
            expanded,
            retained: frontier.len(),
        });

        if let Some(deadline) = config.deadline {
            let elapsed = start_time.elapsed();
            if elapsed >= deadline {
                return Err(SearchError::DeadlineExceeded {
                    week: week_number,
                    elapsed,
                });
            }
        }
    }

    let ranked = rank(&frontier, config.top_n);
    let elapsed = start_time.elapsed();
    debug!("terminated ({termination:?}) after {elapsed:?}");
    Ok(SearchOutcome {
        termination,
        weeks,
        frontier,
        ranked,
        elapsed,
    })
}

fn resolve_fixtures(schedule: &LeagueSchedule, roster: &mut Roster) -> Vec<Vec<(TeamId, TeamId)>> {
    let mut fixtures = Vec::with_capacity(schedule.len());
    for week in schedule.weeks() {
        let mut week_fixtures = Vec::with_capacity(week.len());
        for matchup in week.matchups() {
            week_fixtures.push((roster.intern(&matchup.visitor), roster.intern(&matchup.home)));
        }
        fixtures.push(week_fixtures);
    }
    fixtures
}
