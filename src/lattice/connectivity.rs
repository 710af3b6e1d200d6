//! Flood-fill reachability over occupied tiles

use std::collections::HashSet;

use tracing::trace;

use crate::lattice::coordinate::Coordinate;
use crate::lattice::state::Lattice;

impl Lattice {
    /// Occupied cells reachable from `seed` through occupied neighbors
    ///
    /// The seed itself is always part of the result, even when it holds no
    /// occupied tile; the search only ever expands into occupied cells.
    pub fn reachable_from(&self, seed: Coordinate) -> HashSet<Coordinate> {
        let mut visited = HashSet::new();
        let mut stack = vec![seed];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            stack.extend(
                current
                    .neighbors()
                    .filter(|neighbor| self.is_occupied(*neighbor) && !visited.contains(neighbor)),
            );
        }

        visited
    }

    /// Whether every occupied tile belongs to one connected component
    ///
    /// A lattice with no tiles, or with no occupied tiles, is not connected.
    pub fn is_connected(&self) -> bool {
        if self.tiles.is_empty() {
            return false;
        }

        let Some(seed) = self.occupied().next() else {
            return false;
        };

        let reached = self.reachable_from(seed).len();
        let occupied = self.occupied_count();
        trace!(reached, occupied, "connectivity search finished");
        reached == occupied
    }

    /// Number of connected components among occupied tiles
    pub fn components(&self) -> usize {
        let mut remaining: HashSet<Coordinate> = self.occupied().collect();
        let mut count = 0;

        loop {
            let Some(seed) = remaining.iter().next().copied() else {
                break;
            };
            for reached in self.reachable_from(seed) {
                remaining.remove(&reached);
            }
            count += 1;
        }

        count
    }
}
