use rayon::prelude::*;
use tracing::{debug, debug_span};

use crate::dict::Dictionary;

/// One way to emit a stretch of the text: `len` chars starting at `start`
/// are typed as `code`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatticeEdge {
    /// Start position (char index, inclusive)
    pub start: usize,
    /// Number of chars covered, at least 1
    pub len: usize,
    pub code: String,
}

impl LatticeEdge {
    /// End position (char index, exclusive)
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// All edges of a text, indexed by start position.
#[derive(Debug, Clone)]
pub struct Lattice {
    /// Number of chars in the text
    pub char_count: usize,
    edges_by_start: Vec<Vec<LatticeEdge>>,
}

impl Lattice {
    /// Edges leaving `pos`. Empty for `pos >= char_count`.
    pub fn edges_at(&self, pos: usize) -> &[LatticeEdge] {
        self.edges_by_start
            .get(pos)
            .map(|e| e.as_slice())
            .unwrap_or(&[])
    }

    pub fn edge_count(&self) -> usize {
        self.edges_by_start.iter().map(|e| e.len()).sum()
    }
}

/// Build the lattice of `text` against `dict`.
///
/// Positions are independent, so each one is filled by its own rayon task and
/// writes only its own slot. A position where no word matches gets a single
/// fallback edge typing the literal char, which keeps the end of the text
/// reachable from every position.
pub fn build_lattice(dict: &dyn Dictionary, text: &str) -> Lattice {
    // Byte offset of every char, plus the end of the text.
    let mut offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    let char_count = offsets.len();
    offsets.push(text.len());
    let _span = debug_span!("build_lattice", char_count).entered();

    let edges_by_start: Vec<Vec<LatticeEdge>> = (0..char_count)
        .into_par_iter()
        .map(|start| edges_from(dict, text, &offsets, start))
        .collect();

    let lattice = Lattice {
        char_count,
        edges_by_start,
    };
    debug!(edge_count = lattice.edge_count());
    lattice
}

fn edges_from(
    dict: &dyn Dictionary,
    text: &str,
    offsets: &[usize],
    start: usize,
) -> Vec<LatticeEdge> {
    let suffix = &text[offsets[start]..];
    let mut edges: Vec<LatticeEdge> = dict
        .common_prefix_search(suffix)
        .into_iter()
        .flat_map(|m| {
            let (len, codes) = (m.len, m.codes);
            codes.iter().map(move |code| LatticeEdge {
                start,
                len,
                code: code.clone(),
            })
        })
        .collect();

    if edges.is_empty() {
        edges.push(LatticeEdge {
            start,
            len: 1,
            code: text[offsets[start]..offsets[start + 1]].to_string(),
        });
    }
    edges
}
