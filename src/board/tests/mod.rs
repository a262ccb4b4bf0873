//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Pseudo-legal destinations per piece family
//! - `simulate.rs` - Move simulation side effects
//! - `legality.rs` - Check detection and the legality filter
//! - `edge_cases.rs` - Special positions and preserved rule quirks
//! - `proptest.rs` - Property-based tests

mod movegen;

use std::collections::BTreeSet;

use crate::board::Square;

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

pub(super) fn squares(list: &[&str]) -> BTreeSet<Square> {
    list.iter().map(|s| sq(s)).collect()
}

pub(super) fn as_set(moves: Vec<Square>) -> BTreeSet<Square> {
    moves.into_iter().collect()
}
