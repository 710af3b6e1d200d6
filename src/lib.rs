//! Single-robot tile manipulation on a hexagonal lattice
//!
//! A robot walks a lattice of hexagonal cells, lifting tiles and setting them
//! down elsewhere, while the crate keeps track of whether the occupied tiles
//! still form one connected piece.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Lattice coordinates, tile state, robot state machine and connectivity
pub mod lattice;
/// Scripted and random drivers built on the lattice
pub mod simulation;

pub use io::error::{LatticeError, Result};
pub use lattice::{Coordinate, Direction, Lattice};
