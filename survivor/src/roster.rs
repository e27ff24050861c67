//! Interning of teams into dense ordinals, so that pick histories can be stored and compared as
//! integers.

use std::ops::Index;

use rustc_hash::FxHashMap;

use crate::domain::Team;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TeamId(usize);
impl TeamId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn as_index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct Roster {
    team_to_id: FxHashMap<Team, TeamId>,
    id_to_team: Vec<Team>,
}
impl Roster {
    pub fn with_capacity(capacity: usize) -> Self {
        let team_to_id = FxHashMap::with_capacity_and_hasher(capacity, Default::default());
        let id_to_team = Vec::with_capacity(capacity);
        Self {
            team_to_id,
            id_to_team,
        }
    }

    /// Returns the ordinal of the given team, admitting it if not already present.
    pub fn intern(&mut self, team: &Team) -> TeamId {
        if let Some(&id) = self.team_to_id.get(team) {
            return id;
        }
        let id = TeamId::from_index(self.id_to_team.len());
        self.team_to_id.insert(team.clone(), id);
        self.id_to_team.push(team.clone());
        id
    }

    pub fn id_of(&self, team: &Team) -> Option<TeamId> {
        self.team_to_id.get(team).copied()
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.id_to_team.get(id.as_index())
    }

    pub fn len(&self) -> usize {
        self.id_to_team.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_team.is_empty()
    }

    pub fn teams(&self) -> &[Team] {
        &self.id_to_team
    }
}

impl Index<TeamId> for Roster {
    type Output = Team;

    fn index(&self, id: TeamId) -> &Self::Output {
        self.team(id)
            .unwrap_or_else(|| panic!("no team with ordinal {}", id.0))
    }
}
