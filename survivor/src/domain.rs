//! Teams, matchups and the league schedule, along with the per-team records that the matchups are
//! scored against.

use std::fmt::{Display, Formatter};

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::error::{InvalidRecord, InvalidWeek, SearchError};

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Team(pub String);
impl Team {
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Team {
    fn from(code: &str) -> Self {
        Self(code.into())
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The side of a matchup. Iteration order (visitor, then home) is also the order in which
/// branches are emitted.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EnumIter, strum_macros::Display)]
pub enum Side {
    Visitor,
    Home,
}
impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::Visitor => Side::Home,
            Side::Home => Side::Visitor,
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub visitor: Team,
    pub home: Team,
}
impl Matchup {
    pub fn new(visitor: impl Into<Team>, home: impl Into<Team>) -> Self {
        Self {
            visitor: visitor.into(),
            home: home.into(),
        }
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Visitor => &self.visitor,
            Side::Home => &self.home,
        }
    }

    pub fn side_of(&self, team: &Team) -> Option<Side> {
        if &self.visitor == team {
            Some(Side::Visitor)
        } else if &self.home == team {
            Some(Side::Home)
        } else {
            None
        }
    }
}

impl Display for Matchup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.visitor, self.home)
    }
}

/// The games of a single week. A team plays at most once per week.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Week {
    matchups: Vec<Matchup>,
}
impl Week {
    pub fn new(matchups: Vec<Matchup>) -> Result<Self, InvalidWeek> {
        let mut seen = FxHashSet::with_capacity_and_hasher(matchups.len() * 2, Default::default());
        for matchup in &matchups {
            if matchup.visitor == matchup.home {
                return Err(InvalidWeek::SelfMatchup {
                    team: matchup.home.clone(),
                });
            }
            for team in [&matchup.visitor, &matchup.home] {
                if !seen.insert(team) {
                    return Err(InvalidWeek::DuplicateTeam { team: team.clone() });
                }
            }
        }
        Ok(Self { matchups })
    }

    pub fn matchups(&self) -> &[Matchup] {
        &self.matchups
    }

    pub fn matchup_of(&self, team: &Team) -> Option<&Matchup> {
        self.matchups
            .iter()
            .find(|matchup| matchup.side_of(team).is_some())
    }

    pub fn len(&self) -> usize {
        self.matchups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchups.is_empty()
    }
}

/// An ordered run of weeks. Week numbers are 1-based; `first_week` is the number of the first
/// week held.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeagueSchedule {
    weeks: Vec<Week>,
    first_week: usize,
}
impl LeagueSchedule {
    pub fn new(weeks: Vec<Week>) -> Self {
        Self {
            weeks,
            first_week: 1,
        }
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// The calendar number of the week at the given (0-based) index.
    pub fn week_number(&self, index: usize) -> usize {
        self.first_week + index
    }

    /// Narrows the schedule to weeks `start..=end`, given as calendar week numbers.
    pub fn window(&self, start: usize, end: usize) -> Result<LeagueSchedule, SearchError> {
        let last_week = self.first_week + self.weeks.len();
        let empty = || SearchError::EmptyScheduleWindow {
            start,
            end,
            available: self.weeks.len(),
        };
        if start > end || start < self.first_week || start >= last_week {
            return Err(empty());
        }
        let end = usize::min(end, last_week - 1);
        let weeks = self.weeks[start - self.first_week..=end - self.first_week].to_vec();
        Ok(Self {
            weeks,
            first_week: start,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub win: f64,
    pub loss: f64,
}
impl TeamRecord {
    pub const DEFAULT_OVERALL_WEIGHT: f64 = 0.8;

    pub fn new(win: f64) -> Result<Self, InvalidRecord> {
        if !win.is_finite() || !(0.0..=1.0).contains(&win) {
            return Err(InvalidRecord { win });
        }
        Ok(Self {
            win,
            loss: 1.0 - win,
        })
    }

    /// Blends a season-long win rate with a recent-form win rate, weighting the former by
    /// `overall_weight` and the latter by its complement.
    pub fn blended(overall: f64, recent: f64, overall_weight: f64) -> Result<Self, InvalidRecord> {
        Self::new((overall_weight * overall + (1.0 - overall_weight) * recent).clamp(0.0, 1.0))
    }
}

#[derive(Clone, Debug, Default)]
pub struct TeamRecords {
    records: FxHashMap<Team, TeamRecord>,
}
impl TeamRecords {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn insert(&mut self, team: Team, record: TeamRecord) -> Option<TeamRecord> {
        self.records.insert(team, record)
    }

    pub fn get(&self, team: &Team) -> Result<&TeamRecord, SearchError> {
        self.records.get(team).ok_or_else(|| SearchError::MissingRecord {
            team: team.clone(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Team, &TeamRecord)> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<(Team, TeamRecord)> for TeamRecords {
    fn from_iter<T: IntoIterator<Item = (Team, TeamRecord)>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests;
