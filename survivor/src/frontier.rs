//! The search frontier: the set of partial pick sequences alive after a given week.
//!
//! Sequences are not stored as lists. Every pick is an immutable node in an append-only arena
//! ([`PickTree`]) that points back at the pick made before it, so that sibling branches share
//! their common history and extending a sequence costs a single node. A [`Lineage`] names the
//! last pick of a sequence along with the sequence's cumulative probability; the frontier is
//! simply a list of lineages over a shared tree.

use serde::Serialize;

use crate::domain::Team;
use crate::roster::{Roster, TeamId};

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
struct Node {
    team: TeamId,
    parent: Option<NodeId>,
}

#[derive(Debug, Default)]
pub struct PickTree {
    nodes: Vec<Node>,
}
impl PickTree {
    pub fn push(&mut self, team: TeamId, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { team, parent });
        id
    }

    /// Walks the history ending at `tail`, from the most recent pick back to the first.
    pub fn history(&self, tail: Option<NodeId>) -> impl Iterator<Item = TeamId> + '_ {
        let mut cursor = tail;
        std::iter::from_fn(move || {
            let node = &self.nodes[cursor?.0];
            cursor = node.parent;
            Some(node.team)
        })
    }

    pub fn contains(&self, tail: Option<NodeId>, team: TeamId) -> bool {
        self.history(tail).any(|picked| picked == team)
    }

    /// The picks ending at `tail`, oldest first.
    pub fn path(&self, tail: Option<NodeId>) -> Vec<TeamId> {
        let mut path: Vec<_> = self.history(tail).collect();
        path.reverse();
        path
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lineage {
    pub tail: Option<NodeId>,
    pub probability: f64,
}

/// A candidate extension of a lineage by one pick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Branch {
    pub parent: Option<NodeId>,
    pub team: TeamId,
    pub probability: f64,
}

/// A materialised pick sequence. The first `preselected` picks were supplied before the search
/// began and contribute no factor to `probability`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PickSequence {
    pub picks: Vec<Team>,
    pub preselected: usize,
    pub probability: f64,
}
impl PickSequence {
    /// The picks made during the search.
    pub fn searched(&self) -> &[Team] {
        &self.picks[self.preselected..]
    }

    /// The pick made for the week at the given (0-based) index of the searched schedule.
    pub fn pick_for_week(&self, index: usize) -> Option<&Team> {
        self.searched().get(index)
    }

    pub fn contains(&self, team: &Team) -> bool {
        self.picks.contains(team)
    }
}

#[derive(Debug)]
pub struct Frontier {
    roster: Roster,
    tree: PickTree,
    lineages: Vec<Lineage>,
    preselected: usize,
}
impl Frontier {
    /// Creates a frontier holding a single lineage of the preselected teams, with probability 1.
    /// Teams listed more than once are picked once.
    pub fn seed(mut roster: Roster, preselected: &[Team]) -> Self {
        let mut tree = PickTree::default();
        let mut tail = None;
        let mut picked = 0;
        for team in preselected {
            let team = roster.intern(team);
            if !tree.contains(tail, team) {
                tail = Some(tree.push(team, tail));
                picked += 1;
            }
        }
        Self {
            roster,
            tree,
            lineages: vec![Lineage {
                tail,
                probability: 1.0,
            }],
            preselected: picked,
        }
    }

    /// Appends an arbitrary sequence as a standalone lineage.
    #[cfg(test)]
    pub(crate) fn insert(&mut self, picks: &[Team], probability: f64) -> Lineage {
        let mut tail = None;
        for team in picks {
            let team = self.roster.intern(team);
            debug_assert!(!self.tree.contains(tail, team), "{team:?} picked twice");
            tail = Some(self.tree.push(team, tail));
        }
        let lineage = Lineage { tail, probability };
        self.lineages.push(lineage);
        lineage
    }

    /// Replaces the current lineages with the given branches.
    pub fn advance(&mut self, branches: Vec<Branch>) {
        let mut lineages = Vec::with_capacity(branches.len());
        for branch in branches {
            debug_assert!(!self.tree.contains(branch.parent, branch.team));
            let tail = self.tree.push(branch.team, branch.parent);
            lineages.push(Lineage {
                tail: Some(tail),
                probability: branch.probability,
            });
        }
        self.lineages = lineages;
    }

    pub(crate) fn retain(&mut self, lineages: Vec<Lineage>) {
        self.lineages = lineages;
    }

    pub fn has_picked(&self, lineage: &Lineage, team: TeamId) -> bool {
        self.tree.contains(lineage.tail, team)
    }

    pub fn sequence(&self, lineage: &Lineage) -> PickSequence {
        PickSequence {
            picks: self
                .tree
                .path(lineage.tail)
                .into_iter()
                .map(|team| self.roster[team].clone())
                .collect(),
            preselected: self.preselected,
            probability: lineage.probability,
        }
    }

    pub fn sequences(&self) -> Vec<PickSequence> {
        self.lineages
            .iter()
            .map(|lineage| self.sequence(lineage))
            .collect()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn tree(&self) -> &PickTree {
        &self.tree
    }

    pub fn lineages(&self) -> &[Lineage] {
        &self.lineages
    }

    pub fn preselected(&self) -> usize {
        self.preselected
    }

    pub fn len(&self) -> usize {
        self.lineages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lineages.is_empty()
    }
}
