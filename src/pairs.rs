//! Spatial pair search between two atom selections.
//!
//! An R* tree over one selection answers within-cutoff queries for the other.
//! The result is the exhaustive pair set with a defined order: ascending
//! first-side index, then ascending second-side index. Tree iteration order
//! never reaches the caller, so repeated runs emit identical sequences.

use crate::structure::AtomRecord;
use rstar::primitives::GeomWithData;
use rstar::RTree;

type IndexedPoint = GeomWithData<[f64; 3], usize>;

/// Find all `(a, b)` atom-index pairs within `cutoff` of each other.
///
/// The cutoff test is inclusive and uses the same coordinates the distance
/// of the resulting contact is later computed from.
pub fn find_pairs(
    side_a: &[&AtomRecord],
    side_b: &[&AtomRecord],
    cutoff: f64,
) -> Vec<(usize, usize)> {
    if side_a.is_empty() || side_b.is_empty() {
        return Vec::new();
    }

    let tree = RTree::bulk_load(
        side_b
            .iter()
            .map(|atom| IndexedPoint::new([atom.pos.x, atom.pos.y, atom.pos.z], atom.index))
            .collect(),
    );
    let max_radius_squared = cutoff * cutoff;

    let mut pairs = Vec::new();
    for atom in side_a {
        let mut neighbors: Vec<usize> = tree
            .locate_within_distance(
                [atom.pos.x, atom.pos.y, atom.pos.z],
                max_radius_squared,
            )
            .map(|point| point.data)
            .collect();
        neighbors.sort_unstable();
        pairs.extend(neighbors.into_iter().map(|b| (atom.index, b)));
    }
    pairs
}
