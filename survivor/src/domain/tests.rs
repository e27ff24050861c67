use assert_float_eq::*;
use strum::IntoEnumIterator;

use super::*;
use crate::testing::{schedule, week};

#[test]
fn record_complements() {
    for win in [0.0, 0.2, 0.5, 0.75, 1.0] {
        let record = TeamRecord::new(win).unwrap();
        assert_eq!(win, record.win);
        assert_float_absolute_eq!(1.0, record.win + record.loss);
    }
}

#[test]
fn record_out_of_range() {
    assert_eq!(InvalidRecord { win: 1.1 }, TeamRecord::new(1.1).unwrap_err());
    assert_eq!(InvalidRecord { win: -0.1 }, TeamRecord::new(-0.1).unwrap_err());
    assert!(TeamRecord::new(f64::NAN).is_err());
    assert_eq!(
        "win probability 1.1 outside [0, 1]",
        TeamRecord::new(1.1).unwrap_err().to_string()
    );
}

#[test]
fn record_blended() {
    let record = TeamRecord::blended(0.5, 1.0, TeamRecord::DEFAULT_OVERALL_WEIGHT).unwrap();
    assert_float_absolute_eq!(0.6, record.win);
    assert_float_absolute_eq!(1.0, record.win + record.loss);
}

#[test]
fn records_lookup() {
    let mut records = TeamRecords::with_capacity(1);
    assert!(records.is_empty());
    records.insert("KC".into(), TeamRecord::new(0.7).unwrap());
    assert_eq!(1, records.len());
    assert_eq!(0.7, records.get(&"KC".into()).unwrap().win);
    let err = records.get(&"NE".into()).unwrap_err();
    assert_eq!("no record for team NE", err.to_string());
}

#[test]
fn week_rejects_duplicate_team() {
    let err = Week::new(vec![Matchup::new("AAA", "BBB"), Matchup::new("CCC", "AAA")]).unwrap_err();
    assert_eq!(InvalidWeek::DuplicateTeam { team: "AAA".into() }, err);
    assert_eq!("team AAA appears in more than one matchup", err.to_string());
}

#[test]
fn week_rejects_self_matchup() {
    let err = Week::new(vec![Matchup::new("AAA", "AAA")]).unwrap_err();
    assert_eq!(InvalidWeek::SelfMatchup { team: "AAA".into() }, err);
}

#[test]
fn week_lookup() {
    let week = week(&[("AAA", "BBB"), ("CCC", "DDD")]);
    assert_eq!(2, week.len());
    assert!(!week.is_empty());
    assert_eq!(Some(&Matchup::new("CCC", "DDD")), week.matchup_of(&"DDD".into()));
    assert_eq!(None, week.matchup_of(&"EEE".into()));
    assert!(Week::default().is_empty());
}

#[test]
fn matchup_sides() {
    let matchup = Matchup::new("AAA", "BBB");
    assert_eq!(&Team::from("AAA"), matchup.team(Side::Visitor));
    assert_eq!(&Team::from("BBB"), matchup.team(Side::Home));
    assert_eq!(Some(Side::Home), matchup.side_of(&"BBB".into()));
    assert_eq!(None, matchup.side_of(&"CCC".into()));
    assert_eq!(Side::Visitor, Side::Home.opposite());
    assert_eq!("AAA @ BBB", matchup.to_string());
}

#[test]
fn side_order() {
    assert_eq!(vec![Side::Visitor, Side::Home], Side::iter().collect::<Vec<_>>());
    assert_eq!("Home", Side::Home.to_string());
}

fn three_weeks() -> LeagueSchedule {
    schedule(&[&[("AAA", "BBB")], &[("BBB", "CCC")], &[("CCC", "AAA")]])
}

#[test]
fn window_within_schedule() {
    let window = three_weeks().window(2, 3).unwrap();
    assert_eq!(2, window.len());
    assert_eq!(2, window.week_number(0));
    assert_eq!(3, window.week_number(1));
    assert_eq!(Some(&Matchup::new("BBB", "CCC")), window.weeks()[0].matchups().first());
}

#[test]
fn window_of_window() {
    let window = three_weeks().window(2, 3).unwrap().window(3, 3).unwrap();
    assert_eq!(1, window.len());
    assert_eq!(3, window.week_number(0));
    assert_eq!(Some(&Matchup::new("CCC", "AAA")), window.weeks()[0].matchups().first());
}

#[test]
fn window_end_truncated_to_schedule() {
    let window = three_weeks().window(3, 17).unwrap();
    assert_eq!(1, window.len());
}

#[test]
fn window_empty() {
    let schedule = three_weeks();
    for (start, end) in [(3, 2), (0, 2), (4, 5)] {
        let err = schedule.window(start, end).unwrap_err();
        assert!(
            matches!(err, SearchError::EmptyScheduleWindow { start: s, end: e, available: 3 } if s == start && e == end),
            "{err:?}"
        );
    }
    assert!(LeagueSchedule::new(vec![]).window(1, 1).is_err());
}
