//! Seeded batches of random trials
//!
//! Each trial lays a random-walk lattice, parks the robot on the walk's start
//! tile and lets it act at random for a fixed number of steps. The survey
//! aggregates how often the occupied tiles stay connected.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::io::configuration::{
    DEFAULT_ACTIONS, DEFAULT_SEED, DEFAULT_TRIALS, DEFAULT_WALK_LENGTH, MAX_SETUP_TILES,
    MOVE_WEIGHT, PICK_UP_WEIGHT, PLACE_WEIGHT,
};
use crate::io::error::{Result, invalid_parameter};
use crate::lattice::region::{random_direction, random_walk};
use crate::lattice::{Coordinate, Lattice, MoveOutcome};

/// Survey parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyConfig {
    /// Number of trials to run
    pub trials: usize,
    /// Random-walk steps used to lay each trial's tiles
    pub walk_length: usize,
    /// Random robot actions per trial
    pub actions: usize,
    /// Seed of the first trial; trial `i` uses `seed + i`
    pub seed: u64,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            walk_length: DEFAULT_WALK_LENGTH,
            actions: DEFAULT_ACTIONS,
            seed: DEFAULT_SEED,
        }
    }
}

impl SurveyConfig {
    /// Check that the survey would do any work
    ///
    /// # Errors
    ///
    /// Returns `LatticeError::InvalidParameter` if `trials` is zero or a walk
    /// would lay more than `MAX_SETUP_TILES` tiles
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(invalid_parameter(
                "trials",
                &self.trials,
                &"at least one trial is required",
            ));
        }
        if self.walk_length as u64 >= MAX_SETUP_TILES {
            return Err(invalid_parameter(
                "walk",
                &self.walk_length,
                &format!("at most {MAX_SETUP_TILES} tiles"),
            ));
        }
        Ok(())
    }

    /// Seed used by the trial at `index`
    pub const fn trial_seed(&self, index: usize) -> u64 {
        self.seed.wrapping_add(index as u64)
    }
}

/// Tallies from a single trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrialReport {
    /// Tiles laid by the random walk
    pub tiles: usize,
    /// Moves that changed the robot position
    pub moves: usize,
    /// Moves refused because the target was occupied
    pub blocked_moves: usize,
    /// Successful pick-ups
    pub pick_ups: usize,
    /// Successful placements
    pub placements: usize,
    /// Connectivity right after the walk
    pub connected_before: bool,
    /// Connectivity after the last action
    pub connected_after: bool,
    /// Connected components after the last action
    pub components_after: usize,
    /// Whether the robot still held a tile at the end
    pub ended_carrying: bool,
}

/// Run one trial with its own seed
pub fn run_trial(config: &SurveyConfig, seed: u64) -> TrialReport {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut lattice = Lattice::new();
    random_walk(&mut lattice, &mut rng, Coordinate::ORIGIN, config.walk_length);

    let mut report = TrialReport {
        tiles: lattice.tile_count(),
        connected_before: lattice.is_connected(),
        ..TrialReport::default()
    };

    let total_weight = MOVE_WEIGHT + PICK_UP_WEIGHT + PLACE_WEIGHT;
    for _ in 0..config.actions {
        let roll = rng.random_range(0..total_weight);
        if roll < MOVE_WEIGHT {
            match lattice.move_robot(random_direction(&mut rng)) {
                MoveOutcome::Moved { .. } => report.moves += 1,
                MoveOutcome::Blocked { .. } => report.blocked_moves += 1,
                MoveOutcome::InvalidDirection | MoveOutcome::OffLattice => {}
            }
        } else if roll < MOVE_WEIGHT + PICK_UP_WEIGHT {
            if lattice.pick_up_tile().succeeded() {
                report.pick_ups += 1;
            }
        } else if lattice.place_tile().succeeded() {
            report.placements += 1;
        }
    }

    report.connected_after = lattice.is_connected();
    report.components_after = lattice.components();
    report.ended_carrying = lattice.robot_has_tile();

    debug!(
        seed,
        tiles = report.tiles,
        moves = report.moves,
        components = report.components_after,
        "trial finished"
    );
    report
}

/// Aggregated statistics over recorded trials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Survey {
    /// Trials recorded
    pub trials: usize,
    /// Trials connected right after the walk
    pub connected_before: usize,
    /// Trials connected after the last action
    pub connected_after: usize,
    /// Trials that ended with the robot carrying a tile
    pub ended_carrying: usize,
    /// Total tiles laid
    pub tiles: usize,
    /// Total successful moves
    pub moves: usize,
    /// Total blocked moves
    pub blocked_moves: usize,
    /// Total pick-ups
    pub pick_ups: usize,
    /// Total placements
    pub placements: usize,
    /// Largest component count seen at the end of a trial
    pub max_components: usize,
}

impl Survey {
    /// Add a trial to the totals
    pub fn record(&mut self, report: &TrialReport) {
        self.trials += 1;
        self.connected_before += usize::from(report.connected_before);
        self.connected_after += usize::from(report.connected_after);
        self.ended_carrying += usize::from(report.ended_carrying);
        self.tiles += report.tiles;
        self.moves += report.moves;
        self.blocked_moves += report.blocked_moves;
        self.pick_ups += report.pick_ups;
        self.placements += report.placements;
        self.max_components = self.max_components.max(report.components_after);
    }

    /// Mean tiles per trial
    pub const fn mean_tiles(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.tiles as f64 / self.trials as f64
    }

    /// Fraction of trials that ended connected
    pub const fn connected_fraction(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.connected_after as f64 / self.trials as f64
    }
}

/// Run every trial of a survey, calling `on_trial` after each one
///
/// # Errors
///
/// Returns an error if the configuration is invalid
pub fn run_survey<F>(config: &SurveyConfig, mut on_trial: F) -> Result<Survey>
where
    F: FnMut(&TrialReport),
{
    config.validate()?;

    let mut survey = Survey::default();
    for index in 0..config.trials {
        let report = run_trial(config, config.trial_seed(index));
        survey.record(&report);
        on_trial(&report);
    }
    Ok(survey)
}
