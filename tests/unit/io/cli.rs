//! Tests for command-line parsing and command execution

#[cfg(test)]
mod tests {
    use clap::Parser;
    use hexlattice::LatticeError;
    use hexlattice::io::cli::{
        Cli, Command, CommandRunner, RunArgs, Shape, build_lattice, log_filter,
    };
    use hexlattice::io::configuration::{DEFAULT_SEED, DEFAULT_TRIALS, DEFAULT_WIDTH};

    fn run_args(args: &[&str]) -> RunArgs {
        let mut argv = vec!["hexlattice", "run"];
        argv.extend_from_slice(args);
        match Cli::parse_from(argv).command {
            Command::Run(run) => run,
            other => unreachable!("Expected run command, got {other:?}"),
        }
    }

    fn execute(argv: &[&str]) -> (Result<(), LatticeError>, String) {
        let cli = Cli::parse_from(argv.iter().copied());
        let mut out = Vec::new();
        let result = CommandRunner::new(cli).run(&mut out);
        (result, String::from_utf8_lossy(&out).into_owned())
    }

    // Tests run defaults when only a script is given
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_run_defaults() {
        let args = run_args(&["N pick"]);
        assert_eq!(args.script, "N pick");
        assert_eq!(args.shape, Shape::Rect);
        assert_eq!(args.width, DEFAULT_WIDTH);
        assert_eq!(args.seed, DEFAULT_SEED);
        assert!(!args.trace);
        assert!(args.png.is_none());
    }

    // Tests run with every flag set
    #[test]
    fn test_cli_parse_run_all_args() {
        let args = run_args(&[
            "S,place", "--shape", "hex", "-r", "3", "-w", "5", "-H", "4", "--walk", "7", "-s",
            "9", "--trace", "--png", "out.png",
        ]);
        assert_eq!(args.shape, Shape::Hex);
        assert_eq!(args.radius, 3);
        assert_eq!(args.width, 5);
        assert_eq!(args.height, 4);
        assert_eq!(args.walk, 7);
        assert_eq!(args.seed, 9);
        assert!(args.trace);
        assert_eq!(
            args.png.as_deref(),
            Some(std::path::Path::new("out.png"))
        );
    }

    // Tests survey arguments map onto the survey configuration
    #[test]
    fn test_cli_parse_survey() {
        let cli = Cli::parse_from(["hexlattice", "-vv", "survey", "-n", "12", "-q"]);
        assert_eq!(cli.verbose, 2);
        let Command::Survey(args) = cli.command else {
            unreachable!("Expected survey command");
        };
        let config = args.config();
        assert_eq!(config.trials, 12);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert!(args.quiet);

        let defaults = Cli::parse_from(["hexlattice", "survey"]);
        let Command::Survey(default_args) = defaults.command else {
            unreachable!("Expected survey command");
        };
        assert_eq!(default_args.trials, DEFAULT_TRIALS);
    }

    // Tests unknown subcommands are rejected
    #[test]
    fn test_cli_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["hexlattice", "fly"]).is_err());
        assert!(Cli::try_parse_from(["hexlattice", "run", "--shape", "circle"]).is_err());
    }

    // Tests verbosity levels map to increasingly detailed filters
    #[test]
    fn test_log_filter_levels() {
        assert_eq!(log_filter(0), "hexlattice=warn");
        assert_eq!(log_filter(1), "hexlattice=info");
        assert_eq!(log_filter(2), "hexlattice=debug");
        assert_eq!(log_filter(3), "hexlattice=trace");
        assert_eq!(log_filter(9), "hexlattice=trace");
    }

    // Tests each setup shape lays the expected number of tiles
    #[test]
    fn test_build_lattice_shapes() {
        let rect = build_lattice(&run_args(&["-w", "3", "-H", "4"]));
        assert!(rect.is_ok_and(|lattice| lattice.tile_count() == 12));

        let hex = build_lattice(&run_args(&["--shape", "hex", "-r", "2"]));
        assert!(hex.is_ok_and(|lattice| lattice.tile_count() == 19));

        let walk = build_lattice(&run_args(&["--shape", "walk", "--walk", "10"]));
        assert!(walk.is_ok_and(|lattice| {
            lattice.tile_count() <= 11 && lattice.is_occupied(lattice.robot_position())
        }));
    }

    // Tests oversized shapes are rejected before allocation
    // Verified by removing the tile limit check
    #[test]
    fn test_build_lattice_rejects_oversized() {
        let rect = build_lattice(&run_args(&["-w", "100000", "-H", "100000"]));
        assert!(matches!(rect, Err(LatticeError::InvalidParameter { .. })));

        let hex = build_lattice(&run_args(&["--shape", "hex", "-r", "100000"]));
        assert!(matches!(hex, Err(LatticeError::InvalidParameter { .. })));
    }

    // Tests the demo prints every step and the lattice between phases
    #[test]
    fn test_demo_output() {
        let (result, output) = execute(&["hexlattice", "demo"]);
        assert!(result.is_ok());
        assert!(output.starts_with("[X]"));
        assert!(output.contains("step 0: N -> no-op"));
        assert!(output.contains("step 1: pick -> ok"));
        assert!(output.contains("step 6: place -> ok"));
        assert_eq!(output.matches("robot (").count(), 4);
    }

    // Tests a script run reports each step and the final state
    #[test]
    fn test_run_script_output() {
        let (result, output) = execute(&["hexlattice", "run", "pick SW place"]);
        assert!(result.is_ok());
        assert!(output.contains("step 0: pick -> ok"));
        assert!(output.contains("step 1: SW -> ok"));
        assert!(output.contains("step 2: place -> ok"));
        assert!(output.contains("robot (-1, -1) empty-handed | tiles 5 occupied 4"));
    }

    // Tests a malformed script fails before anything runs
    #[test]
    fn test_run_invalid_script() {
        let (result, output) = execute(&["hexlattice", "run", "N jump"]);
        assert!(matches!(
            result,
            Err(LatticeError::InvalidStep { index: 1, .. })
        ));
        assert!(output.is_empty());
    }

    // Tests far-away script tiles are refused at render time instead of panicking
    // Verified by removing the raster size check
    #[test]
    fn test_run_far_tiles_rejected() {
        let (result, output) = execute(&["hexlattice", "run", "add:1000000000:0"]);
        assert!(matches!(
            result,
            Err(LatticeError::InvalidParameter {
                parameter: "raster",
                ..
            })
        ));
        assert!(output.contains("step 0: add:1000000000:0 -> ok"));

        let (edge, _) = execute(&["hexlattice", "run", "add:2147483647:0"]);
        assert!(edge.is_err());
    }

    // Tests --png writes the final lattice
    #[test]
    fn test_run_exports_png() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let path = dir.path().join("final.png");
        let Some(path_str) = path.to_str() else {
            return;
        };

        let (result, _) = execute(&["hexlattice", "run", "pick", "--png", path_str]);
        assert!(result.is_ok());
        assert!(path.exists());
    }

    // Tests a quiet survey prints its summary
    #[test]
    fn test_survey_output() {
        let (result, output) = execute(&["hexlattice", "survey", "-n", "5", "-a", "20", "-q"]);
        assert!(result.is_ok());
        assert!(output.contains("trials 5 (seed 42, walk 10, actions 20)"));
        assert!(output.contains("connected after walk 5/5"));
    }

    // Tests survey walks share the setup tile limit
    #[test]
    fn test_survey_walk_limit() {
        let (result, _) = execute(&["hexlattice", "survey", "--walk", "1000000", "-q"]);
        assert!(matches!(
            result,
            Err(LatticeError::InvalidParameter {
                parameter: "walk",
                ..
            })
        ));
    }

    // Tests a survey without trials is rejected
    #[test]
    fn test_survey_zero_trials() {
        let (result, _) = execute(&["hexlattice", "survey", "-n", "0", "-q"]);
        assert!(matches!(
            result,
            Err(LatticeError::InvalidParameter {
                parameter: "trials",
                ..
            })
        ));
    }
}
