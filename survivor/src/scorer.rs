//! Scoring of a single matchup: both teams' records are biased towards the home side, clamped,
//! combined into joint likelihoods of either side winning, and normalised into a composite
//! probability per side.

use anyhow::bail;
use serde::Serialize;

use crate::clamp::clamp;
use crate::domain::{Matchup, Side, TeamRecords};
use crate::error::SearchError;

/// Multiplicative adjustment applied to raw win/loss probabilities: the home side's win
/// probability is scaled up by `favour` and its loss probability down by `handicap`; the
/// visitor receives the converse.
#[derive(Clone, Debug, PartialEq)]
pub struct HomeFieldBias {
    pub favour: f64,
    pub handicap: f64,
}
impl HomeFieldBias {
    pub fn neutral() -> Self {
        Self {
            favour: 1.0,
            handicap: 1.0,
        }
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.favour <= 0.0 || self.handicap <= 0.0 {
            bail!("home field bias factors must be positive")
        }
        Ok(())
    }
}

impl Default for HomeFieldBias {
    fn default() -> Self {
        Self {
            favour: 1.05,
            handicap: 0.95,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Composite {
    pub visitor: f64,
    pub home: f64,
}
impl Composite {
    pub fn side(&self, side: Side) -> f64 {
        match side {
            Side::Visitor => self.visitor,
            Side::Home => self.home,
        }
    }
}

pub fn score(
    matchup: &Matchup,
    records: &TeamRecords,
    bias: &HomeFieldBias,
) -> Result<Composite, SearchError> {
    let visitor = records.get(&matchup.visitor)?;
    let home = records.get(&matchup.home)?;

    let visitor_win = clamp(visitor.win * bias.handicap);
    let visitor_loss = clamp(visitor.loss * bias.favour);
    let home_win = clamp(home.win * bias.favour);
    let home_loss = clamp(home.loss * bias.handicap);

    let home_wins = home_win * visitor_loss;
    let visitor_wins = visitor_win * home_loss;
    let total = home_wins + visitor_wins;
    if !total.is_finite() || total <= 0.0 {
        return Err(SearchError::DegenerateProbability {
            matchup: matchup.clone(),
            total,
        });
    }
    Ok(Composite {
        visitor: visitor_wins / total,
        home: home_wins / total,
    })
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use survivor_testing::assert_fair_book;

    use super::*;
    use crate::domain::TeamRecord;
    use crate::testing::records;

    #[test]
    fn visitor_favoured() {
        let records = records(&[("AAA", 0.6), ("BBB", 0.4)]);
        let composite = score(&Matchup::new("AAA", "BBB"), &records, &HomeFieldBias::default()).unwrap();
        // visitor: 0.57 × 0.57, home: 0.42 × 0.42
        assert_float_absolute_eq!(0.3249 / 0.5013, composite.visitor);
        assert_float_absolute_eq!(0.1764 / 0.5013, composite.home);
        assert_fair_book(&[composite.visitor, composite.home]);
        assert!(composite.visitor >= 0.5);
    }

    #[test]
    fn home_field_breaks_even_records() {
        let records = records(&[("AAA", 0.5), ("BBB", 0.5)]);
        let composite = score(&Matchup::new("AAA", "BBB"), &records, &HomeFieldBias::default()).unwrap();
        assert!(composite.home > composite.visitor);
        assert_fair_book(&[composite.visitor, composite.home]);
    }

    #[test]
    fn neutral_field_even_records() {
        let records = records(&[("AAA", 0.5), ("BBB", 0.5)]);
        let composite = score(&Matchup::new("AAA", "BBB"), &records, &HomeFieldBias::neutral()).unwrap();
        assert_eq!(0.5, composite.visitor);
        assert_eq!(0.5, composite.home);
    }

    #[test]
    fn extremes_are_clamped() {
        let records = records(&[("AAA", 1.0), ("BBB", 0.0)]);
        let composite = score(&Matchup::new("AAA", "BBB"), &records, &HomeFieldBias::default()).unwrap();
        // visitor: 0.95 × 0.95, home: 0.05 × 0.05
        assert_float_absolute_eq!(0.9025 / 0.905, composite.visitor);
        assert_float_absolute_eq!(0.0025 / 0.905, composite.home);
        assert!(composite.visitor < 1.0);
        assert!(composite.home > 0.0);
    }

    #[test]
    fn books_are_fair_across_records() {
        let bias = HomeFieldBias::default();
        for visitor in 0..=10 {
            for home in 0..=10 {
                let records = records(&[("AAA", visitor as f64 / 10.0), ("BBB", home as f64 / 10.0)]);
                let composite = score(&Matchup::new("AAA", "BBB"), &records, &bias).unwrap();
                assert_fair_book(&[composite.visitor, composite.home]);
            }
        }
    }

    #[test]
    fn missing_visitor_record() {
        let records = records(&[("BBB", 0.4)]);
        let err = score(&Matchup::new("AAA", "BBB"), &records, &HomeFieldBias::default()).unwrap_err();
        assert!(matches!(err, SearchError::MissingRecord { ref team } if team.code() == "AAA"));
        assert_eq!("no record for team AAA", err.to_string());
    }

    #[test]
    fn missing_home_record() {
        let records = records(&[("AAA", 0.4)]);
        let err = score(&Matchup::new("AAA", "BBB"), &records, &HomeFieldBias::default()).unwrap_err();
        assert!(matches!(err, SearchError::MissingRecord { ref team } if team.code() == "BBB"));
    }

    #[test]
    fn degenerate_records() {
        let mut records = TeamRecords::default();
        records.insert("AAA".into(), TeamRecord { win: f64::NAN, loss: f64::NAN });
        records.insert("BBB".into(), TeamRecord { win: f64::NAN, loss: f64::NAN });
        let err = score(&Matchup::new("AAA", "BBB"), &records, &HomeFieldBias::default()).unwrap_err();
        assert!(matches!(err, SearchError::DegenerateProbability { .. }));
    }

    #[test]
    fn side_lookup() {
        let composite = Composite { visitor: 0.3, home: 0.7 };
        assert_eq!(0.3, composite.side(Side::Visitor));
        assert_eq!(0.7, composite.side(Side::Home));
    }
}
