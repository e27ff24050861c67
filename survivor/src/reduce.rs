//! Deduplication of the frontier by exact pick history.

use std::collections::hash_map::Entry;

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::frontier::Frontier;

/// Keeps one lineage per distinct ordered pick history: the one with the highest probability,
/// or the earliest among equals. Survivors hold the position of the first lineage with their
/// history. Returns the number of lineages removed.
pub fn reduce(frontier: &mut Frontier) -> usize {
    let paths: Vec<_> = frontier
        .lineages()
        .par_iter()
        .map(|lineage| frontier.tree().path(lineage.tail))
        .collect();

    let mut positions = FxHashMap::with_capacity_and_hasher(paths.len(), Default::default());
    let mut retained = Vec::with_capacity(paths.len());
    for (path, lineage) in paths.into_iter().zip(frontier.lineages()) {
        match positions.entry(path) {
            Entry::Vacant(entry) => {
                entry.insert(retained.len());
                retained.push(*lineage);
            }
            Entry::Occupied(entry) => {
                let incumbent = &mut retained[*entry.get()];
                if lineage.probability > incumbent.probability {
                    *incumbent = *lineage;
                }
            }
        }
    }

    let removed = frontier.len() - retained.len();
    frontier.retain(retained);
    removed
}
