//! Enumerates season-long survivor pool pick sequences. Each week exactly one team must be
//! picked to win, and no team may be picked twice. Sequences are ranked by the product of their
//! weekly composite win probabilities.

pub mod breaker;
pub mod clamp;
pub mod domain;
pub mod error;
pub mod expand;
pub mod frontier;
pub mod rank;
pub mod reduce;
pub mod roster;
pub mod scorer;
pub mod search;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../../README.md")]
#[cfg(doc)]
fn readme() {}
