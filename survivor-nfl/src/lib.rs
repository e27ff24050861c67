//! Reads NFL schedules and season scores in the grid and text formats published by ESPN, and
//! presents the ranked pick sequences.

pub mod chosen;
pub mod file;
pub mod print;
pub mod records;
pub mod report;
pub mod schedule;

#[cfg(test)]
pub(crate) mod testing;
