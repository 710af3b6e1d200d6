//! Hexagonal lattice engine
//!
//! This module contains the core simulation state:
//! - Axial coordinates and neighbor directions
//! - Tile occupancy and the robot state machine
//! - Connectivity search over occupied tiles
//! - Bulk population helpers

/// Connectivity search over occupied tiles
pub mod connectivity;
/// Axial coordinates, directions and hex distance
pub mod coordinate;
/// Bulk population of rectangles, hexagons and random walks
pub mod region;
/// Tiles, robot state and operation outcomes
pub mod state;

pub use coordinate::{Coordinate, Direction};
pub use state::{
    AddOutcome, Bounds, Lattice, MoveOutcome, PickUpOutcome, PlaceOutcome, RemoveOutcome, Tile,
};
