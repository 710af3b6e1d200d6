//! Text rendering of a lattice
//!
//! Flat-topped hexagons are drawn on a raster of half-height rows: column `x`
//! maps to a raster column and each cell sits on half-row `2y - x`, so
//! neighbouring columns are staggered by half a cell. Only every other raster
//! position belongs to the lattice; the rest stays blank.
//!
//! Rasters larger than `MAX_RASTER_CELLS` are refused rather than allocated.

use ndarray::Array2;

use crate::io::configuration::MAX_RASTER_CELLS;
use crate::io::error::{Result, invalid_parameter};
use crate::lattice::{Coordinate, Lattice};

/// What a single raster position shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Raster position between lattice cells
    Off,
    /// Lattice cell without a tile
    Vacant,
    /// Tile present but unoccupied
    EmptyTile,
    /// Occupied tile
    Occupied,
    /// Robot standing on an occupied tile
    RobotOnTile,
    /// Robot standing anywhere else
    Robot,
}

impl Glyph {
    /// Three-character text form
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "   ",
            Self::Vacant => " . ",
            Self::EmptyTile => "[ ]",
            Self::Occupied => "[X]",
            Self::RobotOnTile => "[R]",
            Self::Robot => "[r]",
        }
    }
}

/// Lattice laid out on a half-row raster
#[derive(Debug, Clone)]
pub struct Raster {
    /// Glyphs indexed by (`row`, `col`), row 0 being the northernmost half-row
    pub cells: Array2<Glyph>,
    /// Lattice `x` of raster column 0
    pub first_column: i32,
    /// Half-row height of raster row 0
    pub top_height: i64,
}

const fn half_row(coord: Coordinate) -> i64 {
    2 * coord.y as i64 - coord.x as i64
}

impl Raster {
    /// Lay out every tile and the robot
    ///
    /// # Errors
    ///
    /// Returns `LatticeError::InvalidParameter` if the raster spanning the
    /// tiles and the robot would exceed `MAX_RASTER_CELLS`
    pub fn from_lattice(lattice: &Lattice) -> Result<Self> {
        let bounds = lattice.bounds();
        let robot = lattice.robot_position();

        let (low, high) = lattice
            .tiles()
            .map(|(coord, _)| half_row(coord))
            .fold((half_row(robot), half_row(robot)), |(low, high), h| {
                (low.min(h), high.max(h))
            });

        let rows = (high - low + 1) as u64;
        let cols = (i64::from(bounds.max.x) - i64::from(bounds.min.x) + 1) as u64;
        let cell_count = rows.saturating_mul(cols);
        if cell_count > MAX_RASTER_CELLS {
            return Err(invalid_parameter(
                "raster",
                &format!("{rows}x{cols}"),
                &format!("at most {MAX_RASTER_CELLS} cells"),
            ));
        }

        let mut cells = Array2::from_elem((rows as usize, cols as usize), Glyph::Off);
        for ((row, col), glyph) in cells.indexed_iter_mut() {
            let height = high - row as i64;
            let x = i64::from(bounds.min.x) + col as i64;
            if (height + x).rem_euclid(2) == 0 {
                *glyph = Glyph::Vacant;
            }
        }

        let mut raster = Self {
            cells,
            first_column: bounds.min.x,
            top_height: high,
        };

        for (coord, tile) in lattice.tiles() {
            let glyph = if tile.is_occupied() {
                Glyph::Occupied
            } else {
                Glyph::EmptyTile
            };
            raster.set(coord, glyph);
        }

        let robot_glyph = if lattice.is_occupied(robot) {
            Glyph::RobotOnTile
        } else {
            Glyph::Robot
        };
        raster.set(robot, robot_glyph);

        Ok(raster)
    }

    /// Raster (`row`, `col`) of a lattice coordinate
    pub const fn index_of(&self, coord: Coordinate) -> Option<(usize, usize)> {
        let row = self.top_height - half_row(coord);
        let col = coord.x as i64 - self.first_column as i64;
        if row < 0 || col < 0 {
            return None;
        }
        Some((row as usize, col as usize))
    }

    /// Glyph shown for a lattice coordinate, if it falls inside the raster
    pub fn glyph_at(&self, coord: Coordinate) -> Option<Glyph> {
        self.index_of(coord)
            .and_then(|index| self.cells.get(index).copied())
    }

    fn set(&mut self, coord: Coordinate, glyph: Glyph) {
        if let Some(cell) = self
            .index_of(coord)
            .and_then(|index| self.cells.get_mut(index))
        {
            *cell = glyph;
        }
    }
}

/// Render the lattice as text, north at the top
///
/// Each line is one half-row; trailing blanks are trimmed.
///
/// # Errors
///
/// Returns an error if the raster would exceed `MAX_RASTER_CELLS`
pub fn render_text(lattice: &Lattice) -> Result<String> {
    let raster = Raster::from_lattice(lattice)?;
    Ok(raster
        .cells
        .rows()
        .into_iter()
        .map(|row| {
            let line: String = row.iter().map(|glyph| glyph.as_str()).collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

/// One-line summary of robot and tile state
pub fn status_line(lattice: &Lattice) -> String {
    let carrying = if lattice.robot_has_tile() {
        "carrying"
    } else {
        "empty-handed"
    };
    let connected = if lattice.is_connected() {
        "connected"
    } else {
        "disconnected"
    };
    format!(
        "robot {} {carrying} | tiles {} occupied {} | {connected}",
        lattice.robot_position(),
        lattice.tile_count(),
        lattice.occupied_count(),
    )
}
