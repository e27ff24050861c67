//! Branching of every live sequence against every matchup of a week.
//!
//! A sequence may extend by a side of a matchup only if it has not picked that team before and
//! the [`BranchGate`] admits the side. Sequences that cannot extend by any side of any matchup
//! do not survive into the next week.

use anyhow::bail;
use rayon::prelude::*;
use strum::IntoEnumIterator;

use crate::breaker::Breaker;
use crate::domain::Side;
use crate::frontier::{Branch, Frontier};
use crate::roster::TeamId;
use crate::scorer::Composite;

/// Decides which sides of a scored matchup are worth branching on.
///
/// * With `favourites_only`, a side is admitted only if its composite probability is no lower
///   than its opponent's; on an exact tie both sides are admitted. Without it, both sides are
///   always admitted.
/// * With `strict_confidence`, a side is additionally required to exceed `confidence_floor`.
#[derive(Clone, Debug, PartialEq)]
pub struct BranchGate {
    pub favourites_only: bool,
    pub strict_confidence: bool,
    pub confidence_floor: f64,
}
impl BranchGate {
    pub const DEFAULT_CONFIDENCE_FLOOR: f64 = 0.75;

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !(0.0..=1.0).contains(&self.confidence_floor) {
            bail!("confidence floor must lie in [0, 1]")
        }
        Ok(())
    }

    #[inline]
    pub fn admits(&self, own: f64, opponent: f64) -> bool {
        (!self.favourites_only || own >= opponent)
            && (!self.strict_confidence || own > self.confidence_floor)
    }

    pub fn admitted_sides(&self, composite: &Composite) -> Vec<Side> {
        Side::iter()
            .filter(|&side| self.admits(composite.side(side), composite.side(side.opposite())))
            .collect()
    }
}

impl Default for BranchGate {
    fn default() -> Self {
        Self {
            favourites_only: true,
            strict_confidence: false,
            confidence_floor: Self::DEFAULT_CONFIDENCE_FLOOR,
        }
    }
}

/// A matchup resolved to team ordinals, with its composite probabilities.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredMatchup {
    pub visitor: TeamId,
    pub home: TeamId,
    pub composite: Composite,
}
impl ScoredMatchup {
    pub fn team(&self, side: Side) -> TeamId {
        match side {
            Side::Visitor => self.visitor,
            Side::Home => self.home,
        }
    }
}

/// Produces the branches of every lineage in the frontier against the week's matchups. Branches
/// are ordered by matchup, then by lineage, then visitor before home.
///
/// Every lineage's branches are accounted for in the `breaker`. Once it trips, no further
/// lineages are extended and the returned branches are incomplete.
pub fn expand(
    frontier: &Frontier,
    scored: &[ScoredMatchup],
    gate: &BranchGate,
    breaker: &Breaker,
) -> Vec<Branch> {
    scored
        .par_iter()
        .flat_map(|matchup| {
            let sides = gate.admitted_sides(&matchup.composite);
            frontier.lineages().par_iter().flat_map_iter(move |lineage| {
                if breaker.is_tripped() {
                    return vec![];
                }
                let branches: Vec<_> = sides
                    .iter()
                    .filter_map(|&side| {
                        let team = matchup.team(side);
                        if frontier.has_picked(lineage, team) {
                            None
                        } else {
                            Some(Branch {
                                parent: lineage.tail,
                                team,
                                probability: lineage.probability * matchup.composite.side(side),
                            })
                        }
                    })
                    .collect();
                breaker.record(branches.len());
                branches
            })
        })
        .collect()
}
