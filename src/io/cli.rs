//! Command-line interface for running scripted and random lattice simulations

use crate::io::configuration::{
    DEFAULT_ACTIONS, DEFAULT_HEIGHT, DEFAULT_LOG_FILTER, DEFAULT_RADIUS, DEFAULT_SEED,
    DEFAULT_TRIALS, DEFAULT_WALK_LENGTH, DEFAULT_WIDTH, MAX_SETUP_TILES,
};
use crate::io::error::{LatticeError, Result, invalid_parameter};
use crate::io::image::export_lattice_as_png;
use crate::io::progress::ProgressManager;
use crate::io::render::{render_text, status_line};
use crate::lattice::region::{fill_hexagon, fill_rectangle, random_walk};
use crate::lattice::{Coordinate, Lattice};
use crate::simulation::driver::{Driver, StepReport, demo_lattice, demo_phases};
use crate::simulation::script::parse_script;
use crate::simulation::survey::{Survey, SurveyConfig, run_survey};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "hexlattice")]
#[command(
    author,
    version,
    about = "Move a tile-carrying robot around a hexagonal lattice"
)]
/// Command-line arguments for the lattice simulator
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// What to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the built-in demo on a 2x2 block
    Demo,
    /// Lay out a shape and run a step script on it
    Run(RunArgs),
    /// Run many random trials and summarise connectivity
    Survey(SurveyArgs),
}

/// Initial tile layout for `run`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Axial rectangle anchored at the origin
    Rect,
    /// Hexagon centered on the origin
    Hex,
    /// Seeded random walk from the origin
    Walk,
}

/// Arguments for `run`
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Steps, e.g. "N pick S place add:3:1 remove:0:0"
    #[arg(value_name = "SCRIPT", default_value = "")]
    pub script: String,

    /// Initial tile layout
    #[arg(long, value_enum, default_value_t = Shape::Rect)]
    pub shape: Shape,

    /// Rectangle width
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Rectangle height
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Hexagon radius
    #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
    pub radius: u32,

    /// Random-walk length
    #[arg(long, default_value_t = DEFAULT_WALK_LENGTH)]
    pub walk: usize,

    /// Random seed for the walk layout
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Print the lattice after every step
    #[arg(short, long)]
    pub trace: bool,

    /// Also write the final lattice as a PNG image
    #[arg(short, long, value_name = "PATH")]
    pub png: Option<PathBuf>,
}

/// Arguments for `survey`
#[derive(Args, Debug)]
pub struct SurveyArgs {
    /// Number of trials
    #[arg(short = 'n', long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Random-walk length per trial
    #[arg(long, default_value_t = DEFAULT_WALK_LENGTH)]
    pub walk: usize,

    /// Random robot actions per trial
    #[arg(short, long, default_value_t = DEFAULT_ACTIONS)]
    pub actions: usize,

    /// Seed of the first trial
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl SurveyArgs {
    /// Survey configuration described by these arguments
    pub const fn config(&self) -> SurveyConfig {
        SurveyConfig {
            trials: self.trials,
            walk_length: self.walk,
            actions: self.actions,
            seed: self.seed,
        }
    }
}

/// Log filter for a given number of `-v` flags
pub const fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => DEFAULT_LOG_FILTER,
        1 => "hexlattice=info",
        2 => "hexlattice=debug",
        _ => "hexlattice=trace",
    }
}

/// Install the global log subscriber, writing to stderr
///
/// `RUST_LOG` is honoured unless `-v` was given.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init_logging(verbose: u8) -> Result<()> {
    let filter = if verbose == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter(0)))
    } else {
        EnvFilter::new(log_filter(verbose))
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).map_err(|e| LatticeError::Logging {
        reason: e.to_string(),
    })
}

/// Build the initial lattice for `run`
///
/// # Errors
///
/// Returns an error if the requested shape would exceed `MAX_SETUP_TILES`
pub fn build_lattice(args: &RunArgs) -> Result<Lattice> {
    let mut lattice = Lattice::new();
    match args.shape {
        Shape::Rect => {
            let cells = u64::from(args.width) * u64::from(args.height);
            if cells > MAX_SETUP_TILES {
                return Err(invalid_parameter(
                    "width x height",
                    &cells,
                    &format!("at most {MAX_SETUP_TILES} tiles"),
                ));
            }
            fill_rectangle(&mut lattice, Coordinate::ORIGIN, args.width, args.height);
        }
        Shape::Hex => {
            let r = u64::from(args.radius);
            let cells = 3 * r * (r + 1) + 1;
            if cells > MAX_SETUP_TILES {
                return Err(invalid_parameter(
                    "radius",
                    &args.radius,
                    &format!("at most {MAX_SETUP_TILES} tiles"),
                ));
            }
            fill_hexagon(&mut lattice, Coordinate::ORIGIN, args.radius);
        }
        Shape::Walk => {
            if args.walk as u64 >= MAX_SETUP_TILES {
                return Err(invalid_parameter(
                    "walk",
                    &args.walk,
                    &format!("at most {MAX_SETUP_TILES} tiles"),
                ));
            }
            let mut rng = StdRng::seed_from_u64(args.seed);
            random_walk(&mut lattice, &mut rng, Coordinate::ORIGIN, args.walk);
        }
    }
    Ok(lattice)
}

fn write_report(out: &mut impl Write, report: &StepReport) -> Result<()> {
    let verdict = if report.outcome.succeeded() {
        "ok"
    } else {
        "no-op"
    };
    writeln!(
        out,
        "step {}: {} -> {verdict} {:?} (connected: {})",
        report.index, report.step, report.outcome, report.connected
    )?;
    Ok(())
}

fn write_lattice(out: &mut impl Write, lattice: &Lattice) -> Result<()> {
    writeln!(out, "{}", render_text(lattice)?)?;
    writeln!(out, "{}", status_line(lattice))?;
    writeln!(out)?;
    Ok(())
}

/// Executes a parsed command line, writing human-readable output to a sink
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns an error if the script fails to parse, a parameter is out of
    /// range, or writing output fails
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        match &self.cli.command {
            Command::Demo => Self::run_demo(out),
            Command::Run(args) => Self::run_script(args, out),
            Command::Survey(args) => Self::run_survey(args, out),
        }
    }

    fn run_demo(out: &mut impl Write) -> Result<()> {
        let mut driver = Driver::new(demo_lattice());
        write_lattice(out, driver.lattice())?;

        for phase in demo_phases() {
            for report in driver.run(&phase) {
                write_report(out, &report)?;
            }
            write_lattice(out, driver.lattice())?;
        }
        Ok(())
    }

    fn run_script(args: &RunArgs, out: &mut impl Write) -> Result<()> {
        let steps = parse_script(&args.script)?;
        let lattice = build_lattice(args)?;
        info!(
            shape = ?args.shape,
            tiles = lattice.tile_count(),
            steps = steps.len(),
            "running script"
        );

        let mut driver = Driver::new(lattice);
        if args.trace {
            write_lattice(out, driver.lattice())?;
        }

        for &step in &steps {
            let report = driver.apply(step);
            write_report(out, &report)?;
            if args.trace {
                write_lattice(out, driver.lattice())?;
            }
        }

        if !args.trace {
            write_lattice(out, driver.lattice())?;
        }

        if let Some(path) = &args.png {
            export_lattice_as_png(driver.lattice(), path)?;
            info!(path = %path.display(), "lattice exported");
        }
        Ok(())
    }

    fn run_survey(args: &SurveyArgs, out: &mut impl Write) -> Result<()> {
        let config = args.config();
        let mut progress = ProgressManager::new();
        if !args.quiet {
            progress.initialize(config.trials);
        }

        let survey = run_survey(&config, |report| {
            progress.complete_trial(report.connected_after);
        })?;
        progress.finish();

        write_summary(out, &config, &survey)
    }
}

fn write_summary(out: &mut impl Write, config: &SurveyConfig, survey: &Survey) -> Result<()> {
    writeln!(
        out,
        "trials {} (seed {}, walk {}, actions {})",
        survey.trials, config.seed, config.walk_length, config.actions
    )?;
    writeln!(out, "mean tiles {:.2}", survey.mean_tiles())?;
    writeln!(
        out,
        "connected after walk {}/{}",
        survey.connected_before, survey.trials
    )?;
    writeln!(
        out,
        "connected at end {}/{} ({:.1}%)",
        survey.connected_after,
        survey.trials,
        survey.connected_fraction() * 100.0
    )?;
    writeln!(
        out,
        "moves {} blocked {} pick-ups {} placements {}",
        survey.moves, survey.blocked_moves, survey.pick_ups, survey.placements
    )?;
    writeln!(
        out,
        "ended carrying {} | max components {}",
        survey.ended_carrying, survey.max_components
    )?;
    Ok(())
}
