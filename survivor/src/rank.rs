//! Selection of the most probable sequences from a frontier.

use std::cmp::Ordering;

use crate::frontier::{Frontier, Lineage, PickSequence};

/// Returns up to `n` sequences in descending order of probability. Sequences of equal probability
/// keep their frontier order.
pub fn rank(frontier: &Frontier, n: usize) -> Vec<PickSequence> {
    let mut ranked: Vec<_> = frontier.lineages().iter().enumerate().collect();
    if n == 0 || ranked.is_empty() {
        return vec![];
    }

    fn descending(a: &(usize, &Lineage), b: &(usize, &Lineage)) -> Ordering {
        b.1.probability
            .total_cmp(&a.1.probability)
            .then(a.0.cmp(&b.0))
    }

    if n < ranked.len() {
        ranked.select_nth_unstable_by(n - 1, descending);
        ranked.truncate(n);
    }
    ranked.sort_unstable_by(descending);
    ranked
        .into_iter()
        .map(|(_, lineage)| frontier.sequence(lineage))
        .collect()
}
