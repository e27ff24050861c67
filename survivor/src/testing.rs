//! Fixture builders for unit tests.

use crate::domain::{LeagueSchedule, Matchup, Team, TeamRecord, TeamRecords, Week};

pub fn teams(codes: &[&str]) -> Vec<Team> {
    codes.iter().map(|&code| Team::from(code)).collect()
}

pub fn week(matchups: &[(&str, &str)]) -> Week {
    Week::new(
        matchups
            .iter()
            .map(|&(visitor, home)| Matchup::new(visitor, home))
            .collect(),
    )
    .unwrap()
}

pub fn schedule(weeks: &[&[(&str, &str)]]) -> LeagueSchedule {
    LeagueSchedule::new(weeks.iter().map(|matchups| week(matchups)).collect())
}

pub fn records(wins: &[(&str, f64)]) -> TeamRecords {
    wins.iter()
        .map(|&(code, win)| (Team::from(code), TeamRecord::new(win).unwrap()))
        .collect()
}

/// A schedule in which every one of `teams` (an even number) plays in every week, with no
/// pairing repeated. Teams are coded `T00`, `T01`, ...
pub fn round_robin(teams: usize, weeks: usize) -> LeagueSchedule {
    let codes: Vec<_> = (0..teams).map(|team| format!("T{team:02}")).collect();
    let mut order: Vec<_> = (0..teams).collect();
    let mut schedule = Vec::with_capacity(weeks);
    for week in 0..weeks {
        let matchups = (0..teams / 2)
            .map(|slot| {
                let (first, second) = (order[slot], order[teams - 1 - slot]);
                let (visitor, home) = if week % 2 == 0 { (first, second) } else { (second, first) };
                Matchup::new(codes[visitor].as_str(), codes[home].as_str())
            })
            .collect();
        schedule.push(Week::new(matchups).unwrap());
        order[1..].rotate_right(1);
    }
    LeagueSchedule::new(schedule)
}

/// Records for the teams of [`round_robin`], with win probabilities rising evenly from 0.1.
pub fn round_robin_records(teams: usize) -> TeamRecords {
    (0..teams)
        .map(|team| {
            let win = 0.1 + 0.8 * team as f64 / (teams - 1) as f64;
            (Team(format!("T{team:02}")), TeamRecord::new(win).unwrap())
        })
        .collect()
}
