//! Shortest-encoding search via lattice construction and a bounded sweep.
//!
//! Builds a char-level lattice from dictionary prefix matches, then sweeps it
//! left to right keeping only the shortest accumulated codes per position.

mod join;
mod lattice;
mod search;
pub(crate) mod testutil;

#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::dict::Dictionary;

pub use join::{join, JoinMode, ParseJoinModeError};
pub use lattice::{build_lattice, Lattice, LatticeEdge};
pub use search::search_shortest;

/// Every minimal encoding of a text, sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Encodings {
    /// Key count shared by all encodings
    pub keys: usize,
    pub codes: Vec<String>,
}

/// Encode `text` with `dict`, returning all shortest encodings found within
/// `breadth_limit` ties per position.
pub fn encode(
    dict: &dyn Dictionary,
    text: &str,
    mode: JoinMode,
    breadth_limit: usize,
) -> Encodings {
    let lattice = build_lattice(dict, text);
    let codes: Vec<String> = search_shortest(&lattice, mode, breadth_limit)
        .into_iter()
        .collect();
    let keys = codes.first().map(|c| c.chars().count()).unwrap_or(0);
    Encodings { keys, codes }
}
