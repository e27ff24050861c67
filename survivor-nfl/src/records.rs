//! Derivation of team records from weekly score files. Each game result line names the two teams
//! with their scores, e.g. `CIN 34, IND 23` (optionally tab-indented and followed by other
//! columns). Tied games are not counted.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::bail;
use regex::Regex;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, trace};

use survivor::domain::{Team, TeamRecord, TeamRecords};
use survivor::error::InvalidRecord;

use crate::file;

pub const SCORE_LINE_PATTERN: &str = r"^\t?([A-Z]+) (\d+), ([A-Z]+) (\d+).*";

#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid record for team {team}: {source}")]
    InvalidRecord { team: Team, source: InvalidRecord },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] anyhow::Error),
}

/// How a team's recent win rate is averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecentForm {
    /// Over the recent games actually played.
    Played,
    /// Over the full window of `recent_games`, so a team with fewer games counts the rest as losses.
    Window,
}

#[derive(Debug, Clone)]
pub struct RecordsConfig {
    pub score_line: Regex,
    pub overall_weight: f64,
    pub recent_games: usize,
    pub recent_form: RecentForm,
}
impl RecordsConfig {
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.score_line.captures_len() != 5 {
            bail!("score line pattern must capture exactly four groups")
        }
        if !(0.0..=1.0).contains(&self.overall_weight) {
            bail!("overall weight must lie in [0, 1]")
        }
        if self.recent_games == 0 {
            bail!("at least one recent game must be considered")
        }
        Ok(())
    }
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            score_line: Regex::new(SCORE_LINE_PATTERN).expect("score line regex"),
            overall_weight: TeamRecord::DEFAULT_OVERALL_WEIGHT,
            recent_games: 2,
            recent_form: RecentForm::Played,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Team,
    pub loser: Team,
}

/// Extracts the decided games from the given text, in order of appearance.
pub fn parse_scores(text: &str, score_line: &Regex) -> Vec<GameResult> {
    text.lines()
        .filter_map(|line| {
            let captures = score_line.captures(line)?;
            let first_score: u16 = captures[2].parse().ok()?;
            let second_score: u16 = captures[4].parse().ok()?;
            let (first, second) = (Team::from(&captures[1]), Team::from(&captures[3]));
            if first_score > second_score {
                Some(GameResult { winner: first, loser: second })
            } else if second_score > first_score {
                Some(GameResult { winner: second, loser: first })
            } else {
                trace!("ignoring tied game: {line}");
                None
            }
        })
        .collect()
}

/// Per-team outcomes in chronological order; `true` for a win.
#[derive(Debug, Default)]
pub struct SeasonResults {
    outcomes: FxHashMap<Team, Vec<bool>>,
}
impl SeasonResults {
    pub fn push(&mut self, result: GameResult) {
        self.outcomes.entry(result.winner).or_default().push(true);
        self.outcomes.entry(result.loser).or_default().push(false);
    }

    pub fn outcomes(&self, team: &Team) -> Option<&[bool]> {
        self.outcomes.get(team).map(Vec::as_slice)
    }

    /// Blends each team's season-long win rate with its win rate over the most recent games.
    pub fn records(&self, config: &RecordsConfig) -> Result<TeamRecords, RecordsError> {
        let mut records = TeamRecords::with_capacity(self.outcomes.len());
        for (team, outcomes) in &self.outcomes {
            let overall = win_rate(outcomes);
            let recent_outcomes = &outcomes[outcomes.len().saturating_sub(config.recent_games)..];
            let recent = match config.recent_form {
                RecentForm::Played => win_rate(recent_outcomes),
                RecentForm::Window => wins(recent_outcomes) as f64 / config.recent_games as f64,
            };
            let record = TeamRecord::blended(overall, recent, config.overall_weight).map_err(|source| {
                RecordsError::InvalidRecord {
                    team: team.clone(),
                    source,
                }
            })?;
            records.insert(team.clone(), record);
        }
        Ok(records)
    }
}

impl FromIterator<GameResult> for SeasonResults {
    fn from_iter<T: IntoIterator<Item = GameResult>>(iter: T) -> Self {
        let mut results = Self::default();
        for result in iter {
            results.push(result);
        }
        results
    }
}

fn wins(outcomes: &[bool]) -> usize {
    outcomes.iter().filter(|&&won| won).count()
}

fn win_rate(outcomes: &[bool]) -> f64 {
    wins(outcomes) as f64 / outcomes.len() as f64
}

/// Reads every `.txt` score file under `dir` in file name order and derives the team records.
pub fn read_season_dir(dir: impl AsRef<Path>, config: &RecordsConfig) -> Result<TeamRecords, RecordsError> {
    config.validate()?;
    let files = file::list_files(dir.as_ref(), &mut |path| {
        path.extension().map_or(false, |extension| extension == "txt")
    })?;
    let mut results = SeasonResults::default();
    for file in &files {
        let text = fs::read_to_string(file)?;
        let games = parse_scores(&text, &config.score_line);
        debug!("read {} game(s) from {file:?}", games.len());
        for game in games {
            results.push(game);
        }
    }
    results.records(config)
}
