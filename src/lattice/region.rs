//! Bulk lattice population before a simulation starts
//!
//! Shapes that reach past the `i32` coordinate range are clipped at its edge.

use std::ops::Range;

use rand::Rng;

use crate::lattice::coordinate::{Coordinate, Direction};
use crate::lattice::state::{AddOutcome, Lattice};

// Axis values `start..end` that fit in the coordinate range
fn clipped(start: i64, end: i64) -> Range<i64> {
    start.max(i64::from(i32::MIN))..end.min(i64::from(i32::MAX) + 1)
}

/// Add every cell of the `width` x `height` axial box starting at `origin`
///
/// Returns the number of tiles newly created.
pub fn fill_rectangle(lattice: &mut Lattice, origin: Coordinate, width: u32, height: u32) -> usize {
    let (ox, oy) = (i64::from(origin.x), i64::from(origin.y));
    let rows = clipped(oy, oy + i64::from(height));

    let mut added = 0;
    for x in clipped(ox, ox + i64::from(width)) {
        for y in rows.clone() {
            if lattice.add_tile(Coordinate::new(x as i32, y as i32)) == AddOutcome::Added {
                added += 1;
            }
        }
    }
    added
}

/// Add every cell within hex distance `radius` of `center`
///
/// Returns the number of tiles newly created. A radius of zero adds only the
/// center; radius `r` covers `3r(r + 1) + 1` cells.
pub fn fill_hexagon(lattice: &mut Lattice, center: Coordinate, radius: u32) -> usize {
    let r = i64::from(radius);
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    let rows = clipped(cy - r, cy + r + 1);

    let mut added = 0;
    for x in clipped(cx - r, cx + r + 1) {
        for y in rows.clone() {
            let coord = Coordinate::new(x as i32, y as i32);
            if center.distance(coord) <= u64::from(radius)
                && lattice.add_tile(coord) == AddOutcome::Added
            {
                added += 1;
            }
        }
    }
    added
}

/// Lay tiles along a random walk of `steps` moves from `start`
///
/// The start cell is tiled first, then each step picks one of the six
/// directions uniformly and tiles the cell it lands on. Revisited cells are
/// left alone, so the tile count is at most `steps + 1`; a step past the edge
/// of the coordinate range is skipped. Returns the cell the walk ended on.
pub fn random_walk<R: Rng>(
    lattice: &mut Lattice,
    rng: &mut R,
    start: Coordinate,
    steps: usize,
) -> Coordinate {
    lattice.add_tile(start);
    let mut position = start;
    for _ in 0..steps {
        if let Some(next) = position.neighbor(random_direction(rng)) {
            position = next;
            lattice.add_tile(position);
        }
    }
    position
}

/// Uniformly random lattice direction
pub fn random_direction<R: Rng>(rng: &mut R) -> Direction {
    rng.random()
}
