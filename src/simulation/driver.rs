//! Step-by-step driver loop over an owned lattice

use tracing::{debug, info};

use crate::lattice::{
    AddOutcome, Coordinate, Direction, Lattice, MoveOutcome, PickUpOutcome, PlaceOutcome,
    RemoveOutcome,
};
use crate::simulation::script::Step;

/// What a single step did to the lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Outcome of a move
    Move(MoveOutcome),
    /// Outcome of a pick-up
    PickUp(PickUpOutcome),
    /// Outcome of a placement
    Place(PlaceOutcome),
    /// Outcome of a tile addition
    Add(AddOutcome),
    /// Outcome of a tile removal
    Remove(RemoveOutcome),
}

impl StepOutcome {
    /// Whether the step changed the lattice
    pub const fn succeeded(&self) -> bool {
        match self {
            Self::Move(outcome) => outcome.succeeded(),
            Self::PickUp(outcome) => outcome.succeeded(),
            Self::Place(outcome) => outcome.succeeded(),
            Self::Add(outcome) => outcome.succeeded(),
            Self::Remove(outcome) => outcome.succeeded(),
        }
    }
}

/// Record of one applied step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// Zero-based position in the driver's history
    pub index: usize,
    /// The step that was applied
    pub step: Step,
    /// What it did
    pub outcome: StepOutcome,
    /// Connectivity of the occupied tiles after the step
    pub connected: bool,
}

/// Applies steps to a lattice it owns, one at a time
#[derive(Debug, Clone, Default)]
pub struct Driver {
    lattice: Lattice,
    steps_applied: usize,
}

impl Driver {
    /// Take ownership of a prepared lattice
    pub const fn new(lattice: Lattice) -> Self {
        Self {
            lattice,
            steps_applied: 0,
        }
    }

    /// Current lattice state
    pub const fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Give the lattice back
    pub fn into_lattice(self) -> Lattice {
        self.lattice
    }

    /// Number of steps applied so far
    pub const fn steps_applied(&self) -> usize {
        self.steps_applied
    }

    /// Apply one step and report its outcome
    pub fn apply(&mut self, step: Step) -> StepReport {
        let outcome = match step {
            Step::Move(direction) => StepOutcome::Move(self.lattice.move_robot(direction)),
            Step::PickUp => StepOutcome::PickUp(self.lattice.pick_up_tile()),
            Step::Place => StepOutcome::Place(self.lattice.place_tile()),
            Step::Add(coord) => StepOutcome::Add(self.lattice.add_tile(coord)),
            Step::Remove(coord) => StepOutcome::Remove(self.lattice.remove_tile(coord)),
        };

        let report = StepReport {
            index: self.steps_applied,
            step,
            outcome,
            connected: self.lattice.is_connected(),
        };
        self.steps_applied += 1;

        debug!(
            index = report.index,
            %step,
            succeeded = outcome.succeeded(),
            connected = report.connected,
            "step applied"
        );
        report
    }

    /// Apply every step in order
    pub fn run(&mut self, steps: &[Step]) -> Vec<StepReport> {
        let reports: Vec<StepReport> = steps.iter().map(|&step| self.apply(step)).collect();
        let succeeded = reports.iter().filter(|r| r.outcome.succeeded()).count();
        info!(steps = reports.len(), succeeded, "script finished");
        reports
    }
}

/// The 2x2 starting block `(0,0), (1,0), (0,1), (1,1)` with the robot at the origin
pub fn demo_lattice() -> Lattice {
    let mut lattice = Lattice::new();
    for coord in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        lattice.add_tile(Coordinate::from(coord));
    }
    lattice
}

/// Phases of the demo scenario, rendered after each one
///
/// The robot tries to head north into the block, lifts the tile it starts on,
/// carries it south onto open ground and sets it down, then lifts it again
/// and tries to return north-east before placing it.
pub fn demo_phases() -> Vec<Vec<Step>> {
    vec![
        vec![Step::Move(Direction::N), Step::PickUp],
        vec![Step::Move(Direction::S), Step::Place],
        vec![Step::PickUp, Step::Move(Direction::NE), Step::Place],
    ]
}
