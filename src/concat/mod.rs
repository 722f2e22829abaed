//! Core concatenation logic: the page accumulator, page geometry helpers,
//! and the sequential pad-and-append procedure.

pub mod accumulator;
pub mod concatenator;
pub mod pages;

pub use accumulator::PageAccumulator;
pub use concatenator::{ConcatResult, ConcatStatistics, Concatenator};
