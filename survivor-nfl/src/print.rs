use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Cell, Col, Row, Table};

use survivor::domain::{LeagueSchedule, Matchup, Side, Team};
use survivor::frontier::PickSequence;

/// Expresses a probability as a percentage, truncated (not rounded) to two decimal places.
pub fn format_percentage(probability: f64) -> String {
    format!("{}", f64::floor(probability * 10_000.0) / 100.0)
}

/// Renders the matchup with the picked team enclosed in brackets, e.g. `NE @ [KC]`.
pub fn bracket(matchup: &Matchup, pick: &Team) -> String {
    let decorate = |side: Side| {
        let team = matchup.team(side);
        if team == pick {
            format!("[{team}]")
        } else {
            team.to_string()
        }
    };
    format!("{} @ {}", decorate(Side::Visitor), decorate(Side::Home))
}

/// One line per searched week, naming the matchup that the sequence picked from. Weeks for which
/// the sequence has no pick (following an early termination) are omitted.
pub fn week_lines(sequence: &PickSequence, schedule: &LeagueSchedule) -> Vec<String> {
    schedule
        .weeks()
        .iter()
        .enumerate()
        .filter_map(|(index, week)| {
            let pick = sequence.pick_for_week(index)?;
            let matchup = week.matchup_of(pick)?;
            Some(format!(
                "week {:>2}: {}",
                schedule.week_number(index),
                bracket(matchup, pick)
            ))
        })
        .collect()
}

/// A header line with the sequence's percentage chance, followed by its [`week_lines`].
pub fn describe(sequence: &PickSequence, schedule: &LeagueSchedule) -> String {
    let mut lines = vec![format_percentage(sequence.probability), "-------".into()];
    lines.extend(week_lines(sequence, schedule));
    lines.join("\n")
}

pub fn tabulate(ranked: &[PickSequence]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(5))),
            Col::new(Styles::default().with(MinWidth(10))),
            Col::new(Styles::default().with(MinWidth(20))),
            Col::new(Styles::default().with(MinWidth(40))),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Rank".into(),
                "Survival\n%".into(),
                "Preselected".into(),
                "Picks".into(),
            ],
        ));
    table.push_rows(ranked.iter().enumerate().map(|(index, sequence)| {
        Row::new(
            Styles::default(),
            vec![
                Cell::new(
                    Styles::default().with(HAlign::Right),
                    format!("{}", index + 1).into(),
                ),
                Cell::new(
                    Styles::default().with(HAlign::Right),
                    format_percentage(sequence.probability).into(),
                ),
                Cell::new(
                    Styles::default(),
                    join_codes(&sequence.picks[..sequence.preselected]).into(),
                ),
                Cell::new(Styles::default(), join_codes(sequence.searched()).into()),
            ],
        )
    }));
    table
}

fn join_codes(teams: &[Team]) -> String {
    teams
        .iter()
        .map(Team::code)
        .collect::<Vec<_>>()
        .join(", ")
}
