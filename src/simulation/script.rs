//! Textual step scripts for driving the robot
//!
//! A script is a list of tokens separated by commas or whitespace:
//! direction labels (`N`, `NE`, `SE`, `S`, `SW`, `NW`, any case) move the
//! robot, `pick`/`pickup` and `place`/`drop` handle the carried tile, and
//! `add:X:Y` / `remove:X:Y` edit tiles directly.

use std::fmt;
use std::str::FromStr;

use crate::io::error::{LatticeError, Result, invalid_step};
use crate::lattice::{Coordinate, Direction};

/// A single driver action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Move the robot one cell
    Move(Direction),
    /// Lift the tile under the robot
    PickUp,
    /// Set the carried tile down
    Place,
    /// Add a tile at a coordinate
    Add(Coordinate),
    /// Remove an unoccupied tile at a coordinate
    Remove(Coordinate),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move(direction) => write!(f, "{direction}"),
            Self::PickUp => f.write_str("pick"),
            Self::Place => f.write_str("place"),
            Self::Add(coord) => write!(f, "add:{}:{}", coord.x, coord.y),
            Self::Remove(coord) => write!(f, "remove:{}:{}", coord.x, coord.y),
        }
    }
}

fn parse_coordinate(index: usize, token: &str, rest: &str) -> Result<Coordinate> {
    let mut parts = rest.split(':');
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid_step(index, token, &"expected two coordinates as X:Y"));
    };
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|e| invalid_step(index, token, &format!("bad x coordinate: {e}")))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|e| invalid_step(index, token, &format!("bad y coordinate: {e}")))?;
    Ok(Coordinate::new(x, y))
}

/// Parse one token; `index` is only used for error reporting
///
/// # Errors
///
/// Returns `LatticeError::InvalidStep` for unknown words or malformed coordinates
pub fn parse_step(index: usize, token: &str) -> Result<Step> {
    if let Some(direction) = Direction::from_label(&token.to_ascii_uppercase()) {
        return Ok(Step::Move(direction));
    }

    let lower = token.to_ascii_lowercase();
    match lower.as_str() {
        "pick" | "pickup" => return Ok(Step::PickUp),
        "place" | "drop" => return Ok(Step::Place),
        _ => {}
    }

    if let Some(rest) = lower.strip_prefix("add:") {
        return parse_coordinate(index, token, rest).map(Step::Add);
    }
    if let Some(rest) = lower.strip_prefix("remove:") {
        return parse_coordinate(index, token, rest).map(Step::Remove);
    }

    Err(invalid_step(
        index,
        token,
        &"expected a direction, pick, place, add:X:Y or remove:X:Y",
    ))
}

/// Parse a whole script
///
/// # Errors
///
/// Returns the error for the first token that fails to parse
pub fn parse_script(script: &str) -> Result<Vec<Step>> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| parse_step(index, token))
        .collect()
}

impl FromStr for Step {
    type Err = LatticeError;

    fn from_str(s: &str) -> Result<Self> {
        parse_step(0, s.trim())
    }
}
