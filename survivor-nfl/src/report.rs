//! The JSON-exportable summary of a completed search.

use serde::Serialize;

use survivor::frontier::PickSequence;
use survivor::search::{SearchOutcome, Termination, WeekSummary};

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub start_week: usize,
    pub end_week: usize,
    pub termination: &'a Termination,
    pub weeks: &'a [WeekSummary],
    pub ranked: &'a [PickSequence],
    pub elapsed_secs: f64,
}
impl<'a> Report<'a> {
    pub fn new(start_week: usize, end_week: usize, outcome: &'a SearchOutcome) -> Self {
        Self {
            start_week,
            end_week,
            termination: &outcome.termination,
            weeks: &outcome.weeks,
            ranked: &outcome.ranked,
            elapsed_secs: outcome.elapsed.as_secs_f64(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use survivor::domain::{LeagueSchedule, Matchup, Team, TeamRecord, TeamRecords, Week};
    use survivor::search::{search, SearchConfig};

    use super::*;

    #[test]
    fn serialize_outcome() {
        let schedule = LeagueSchedule::new(vec![
            Week::new(vec![Matchup::new("NE", "KC")]).unwrap(),
            Week::new(vec![Matchup::new("BUF", "NE")]).unwrap(),
        ]);
        let records: TeamRecords = [("NE", 0.4), ("KC", 0.7), ("BUF", 0.6)]
            .into_iter()
            .map(|(code, win)| (Team::from(code), TeamRecord::new(win).unwrap()))
            .collect();
        let outcome = search(&schedule, &records, &[], &SearchConfig::default()).unwrap();
        let report = Report::new(1, 2, &outcome);

        let json: Value = serde_json::to_value(&report).unwrap();
        assert_eq!(1, json["start_week"]);
        assert_eq!("Exhausted", json["termination"]);
        assert_eq!(2, json["weeks"].as_array().unwrap().len());
        assert_eq!(1, json["weeks"][0]["week"]);
        let best = &json["ranked"][0];
        let picks: Vec<_> = best["picks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|pick| pick.as_str().unwrap())
            .collect();
        assert_eq!(vec!["KC", "BUF"], picks);
        assert_eq!(0, best["preselected"]);
        assert!(best["probability"].as_f64().unwrap() > 0.0);
    }
}
