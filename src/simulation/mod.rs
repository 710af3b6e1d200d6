//! Drivers that sequence lattice operations
//!
//! Everything here works through the public lattice surface; no simulation
//! state lives outside the values passed in.

/// Per-step driver loop and the demo scenario
pub mod driver;
/// Step script parsing
pub mod script;
/// Seeded random trials and aggregate statistics
pub mod survey;

pub use driver::{Driver, StepOutcome, StepReport};
pub use script::{Step, parse_script};
