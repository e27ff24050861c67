//! Parsing of the season schedule, laid out as a tab-separated grid with one row per team. The
//! first column holds the team's code and each subsequent column its opponent in the
//! corresponding week: `@XXX` for an away game at `XXX`, a bare `XXX` for a home game against
//! `XXX`, and anything else (`BYE`, blank) for no game. Only away cells are read, so that every
//! game is taken exactly once, from the visitor's row.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use survivor::domain::{LeagueSchedule, Matchup, Team, Week};
use survivor::error::{InvalidWeek, SearchError};

const AWAY_MARKER: char = '@';

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("no team code on line {line}")]
    MissingTeam { line: usize },

    #[error("no opponent after '@' for team {team} in week {week}")]
    MissingOpponent { team: Team, week: usize },

    #[error("week {week}: {source}")]
    InvalidWeek { week: usize, source: InvalidWeek },

    #[error("{0}")]
    Window(#[from] SearchError),
}

/// Parses the grid and narrows it to weeks `start..=end`.
pub fn parse_grid(grid: &str, start: usize, end: usize) -> Result<LeagueSchedule, ScheduleError> {
    let mut weeks: Vec<Vec<Matchup>> = vec![];
    for (line_index, line) in grid.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut cells = line.split('\t');
        let team = match cells.next().map(str::trim) {
            Some(code) if !code.is_empty() => Team::from(code),
            _ => return Err(ScheduleError::MissingTeam { line: line_index + 1 }),
        };
        for (week_index, cell) in cells.enumerate() {
            if weeks.len() <= week_index {
                weeks.resize_with(week_index + 1, Vec::new);
            }
            if let Some(opponent) = cell.trim().strip_prefix(AWAY_MARKER) {
                let opponent = opponent.trim();
                if opponent.is_empty() {
                    return Err(ScheduleError::MissingOpponent {
                        team,
                        week: week_index + 1,
                    });
                }
                weeks[week_index].push(Matchup::new(team.clone(), opponent));
            }
        }
    }
    debug!("parsed {} week(s) from schedule grid", weeks.len());

    let weeks = weeks
        .into_iter()
        .enumerate()
        .map(|(week_index, matchups)| {
            Week::new(matchups).map_err(|source| ScheduleError::InvalidWeek {
                week: week_index + 1,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(LeagueSchedule::new(weeks).window(start, end)?)
}

pub fn read_grid(path: impl AsRef<Path>, start: usize, end: usize) -> Result<LeagueSchedule, ScheduleError> {
    let grid = fs::read_to_string(path)?;
    parse_grid(&grid, start, end)
}
