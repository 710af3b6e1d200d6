//! Tile occupancy and robot state machine
//!
//! The robot is either empty-handed or carrying a single detached tile. Every
//! mutating operation reports what happened through an outcome value; a refused
//! operation leaves the lattice untouched.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::lattice::coordinate::{Coordinate, Direction};

/// Occupancy of a single lattice cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    occupied: bool,
}

impl Tile {
    /// Tiles enter the lattice occupied
    const fn placed() -> Self {
        Self { occupied: true }
    }

    /// Whether the cell currently holds a unit
    pub const fn is_occupied(&self) -> bool {
        self.occupied
    }
}

/// Result of [`Lattice::add_tile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new occupied tile was created
    Added,
    /// The coordinate already had a tile; nothing changed
    AlreadyPresent,
}

/// Result of [`Lattice::remove_tile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The unoccupied tile was dropped from the lattice
    Removed,
    /// No tile exists at the coordinate
    Absent,
    /// The tile is occupied and was kept
    Occupied,
}

/// Result of [`Lattice::pick_up_tile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickUpOutcome {
    /// The robot lifted the tile it stands on
    PickedUp,
    /// The robot already carries a tile
    AlreadyCarrying,
    /// The robot stands where no tile exists
    NoTile,
    /// The tile under the robot is already empty
    Unoccupied,
}

/// Result of [`Lattice::place_tile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// The carried tile was set down
    Placed {
        /// Whether a new tile entry had to be created
        created: bool,
    },
    /// The robot has nothing to place
    NotCarrying,
}

/// Result of a robot move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The robot stepped to a new cell
    Moved {
        /// Position before the move
        from: Coordinate,
        /// Position after the move
        to: Coordinate,
    },
    /// The target cell holds an occupied tile
    Blocked {
        /// The cell the robot tried to enter
        target: Coordinate,
    },
    /// The direction label is not one of the six lattice directions
    InvalidDirection,
    /// The step would leave the `i32` coordinate range
    OffLattice,
}

impl AddOutcome {
    /// Whether a tile was created
    pub const fn succeeded(&self) -> bool {
        matches!(self, Self::Added)
    }
}

impl RemoveOutcome {
    /// Whether a tile was dropped
    pub const fn succeeded(&self) -> bool {
        matches!(self, Self::Removed)
    }
}

impl PickUpOutcome {
    /// Whether the robot now carries the tile
    pub const fn succeeded(&self) -> bool {
        matches!(self, Self::PickedUp)
    }
}

impl PlaceOutcome {
    /// Whether the carried tile was set down
    pub const fn succeeded(&self) -> bool {
        matches!(self, Self::Placed { .. })
    }
}

impl MoveOutcome {
    /// Whether the robot changed position
    pub const fn succeeded(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Inclusive bounding box over every tile and the robot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Smallest coordinate on each axis
    pub min: Coordinate,
    /// Largest coordinate on each axis
    pub max: Coordinate,
}

impl Bounds {
    const fn around(point: Coordinate) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    const fn include(mut self, point: Coordinate) -> Self {
        if point.x < self.min.x {
            self.min.x = point.x;
        }
        if point.y < self.min.y {
            self.min.y = point.y;
        }
        if point.x > self.max.x {
            self.max.x = point.x;
        }
        if point.y > self.max.y {
            self.max.y = point.y;
        }
        self
    }

    /// Check if a coordinate lies within the box
    pub const fn contains(&self, point: Coordinate) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Hexagonal tile lattice with a single robot
///
/// Owns the tile mapping and the robot's position and carry state. The robot
/// may stand on any cell, tiled or not, but never enters an occupied one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lattice {
    pub(crate) tiles: HashMap<Coordinate, Tile>,
    robot_position: Coordinate,
    robot_has_tile: bool,
}

impl Lattice {
    /// Create an empty lattice with an empty-handed robot at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty lattice with the robot at `position`
    pub fn with_robot_at(position: Coordinate) -> Self {
        Self {
            robot_position: position,
            ..Self::default()
        }
    }

    /// Current robot position
    pub const fn robot_position(&self) -> Coordinate {
        self.robot_position
    }

    /// Whether the robot carries a detached tile
    pub const fn robot_has_tile(&self) -> bool {
        self.robot_has_tile
    }

    /// Tile at `coord`, if one has been placed there
    pub fn tile(&self, coord: Coordinate) -> Option<&Tile> {
        self.tiles.get(&coord)
    }

    /// Whether a tile entry exists at `coord`
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.tiles.contains_key(&coord)
    }

    /// Whether `coord` holds an occupied tile
    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.tiles.get(&coord).is_some_and(Tile::is_occupied)
    }

    /// Iterate over every tile entry in unspecified order
    pub fn tiles(&self) -> impl Iterator<Item = (Coordinate, &Tile)> + '_ {
        self.tiles.iter().map(|(coord, tile)| (*coord, tile))
    }

    /// Iterate over the coordinates of occupied tiles in unspecified order
    pub fn occupied(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.tiles
            .iter()
            .filter(|(_, tile)| tile.occupied)
            .map(|(coord, _)| *coord)
    }

    /// Number of tile entries, occupied or not
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Number of occupied tiles
    pub fn occupied_count(&self) -> usize {
        self.tiles.values().filter(|tile| tile.occupied).count()
    }

    /// Bounding box over all tiles and the robot position
    pub fn bounds(&self) -> Bounds {
        self.tiles
            .keys()
            .fold(Bounds::around(self.robot_position), |bounds, coord| {
                bounds.include(*coord)
            })
    }

    /// Add an occupied tile at `coord` unless one is already there
    pub fn add_tile(&mut self, coord: Coordinate) -> AddOutcome {
        if self.insert_placed(coord) {
            debug!(%coord, "tile added");
            AddOutcome::Added
        } else {
            trace!(%coord, "add skipped, tile present");
            AddOutcome::AlreadyPresent
        }
    }

    /// Remove the tile at `coord` if it exists and is unoccupied
    pub fn remove_tile(&mut self, coord: Coordinate) -> RemoveOutcome {
        match self.tiles.get(&coord) {
            None => RemoveOutcome::Absent,
            Some(tile) if tile.occupied => {
                trace!(%coord, "remove refused, tile occupied");
                RemoveOutcome::Occupied
            }
            Some(_) => {
                self.tiles.remove(&coord);
                debug!(%coord, "tile removed");
                RemoveOutcome::Removed
            }
        }
    }

    /// Lift the occupied tile under the robot
    pub fn pick_up_tile(&mut self) -> PickUpOutcome {
        if self.robot_has_tile {
            return PickUpOutcome::AlreadyCarrying;
        }

        let position = self.robot_position;
        let Some(tile) = self.tiles.get_mut(&position) else {
            return PickUpOutcome::NoTile;
        };
        if !tile.occupied {
            return PickUpOutcome::Unoccupied;
        }

        tile.occupied = false;
        self.robot_has_tile = true;
        debug!(%position, "tile picked up");
        PickUpOutcome::PickedUp
    }

    /// Set the carried tile down at the robot's position
    ///
    /// A cell without a tile entry gets one created exactly as `add_tile` would.
    pub fn place_tile(&mut self) -> PlaceOutcome {
        if !self.robot_has_tile {
            return PlaceOutcome::NotCarrying;
        }

        let position = self.robot_position;
        let created = self.insert_placed(position);
        if let Some(tile) = self.tiles.get_mut(&position) {
            tile.occupied = true;
        }
        self.robot_has_tile = false;
        debug!(%position, created, "tile placed");
        PlaceOutcome::Placed { created }
    }

    /// Step the robot one cell in `direction` unless the target is occupied
    pub fn move_robot(&mut self, direction: Direction) -> MoveOutcome {
        let from = self.robot_position;
        let Some(target) = from.neighbor(direction) else {
            trace!(%direction, %from, "move refused, edge of coordinate range");
            return MoveOutcome::OffLattice;
        };

        if self.is_occupied(target) {
            trace!(%direction, %target, "move blocked");
            return MoveOutcome::Blocked { target };
        }

        self.robot_position = target;
        debug!(%direction, %from, to = %target, "robot moved");
        MoveOutcome::Moved { from, to: target }
    }

    /// Step the robot using a direction label such as `"NE"`
    pub fn move_robot_named(&mut self, label: &str) -> MoveOutcome {
        Direction::from_label(label).map_or_else(
            || {
                trace!(label, "move ignored, unknown direction");
                MoveOutcome::InvalidDirection
            },
            |direction| self.move_robot(direction),
        )
    }

    /// Adjacent coordinate of `position` for a direction label
    ///
    /// Returns `None` for anything other than `N`, `NE`, `SE`, `S`, `SW`, `NW`,
    /// and for steps past the edge of the coordinate range.
    pub fn get_neighbor(position: Coordinate, label: &str) -> Option<Coordinate> {
        Direction::from_label(label).and_then(|direction| position.neighbor(direction))
    }

    // Shared by add_tile and place_tile so both follow the same occupancy default
    fn insert_placed(&mut self, coord: Coordinate) -> bool {
        if self.tiles.contains_key(&coord) {
            return false;
        }
        self.tiles.insert(coord, Tile::placed());
        true
    }
}
