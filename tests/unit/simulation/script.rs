//! Tests for step script parsing

#[cfg(test)]
mod tests {
    use hexlattice::LatticeError;
    use hexlattice::lattice::{Coordinate, Direction};
    use hexlattice::simulation::script::{Step, parse_script, parse_step};

    // Tests every token kind with mixed separators and case
    // Verified by splitting on commas only
    #[test]
    fn test_parse_script_all_tokens() {
        let steps = match parse_script("N, ne  pick\tPLACE,drop pickup add:3:-1 remove:0:0") {
            Ok(steps) => steps,
            Err(error) => unreachable!("Script should parse: {error}"),
        };
        assert_eq!(
            steps,
            vec![
                Step::Move(Direction::N),
                Step::Move(Direction::NE),
                Step::PickUp,
                Step::Place,
                Step::Place,
                Step::PickUp,
                Step::Add(Coordinate::new(3, -1)),
                Step::Remove(Coordinate::ORIGIN),
            ]
        );
    }

    // Tests empty and separator-only scripts parse to nothing
    #[test]
    fn test_parse_empty_script() {
        assert!(parse_script("").is_ok_and(|steps| steps.is_empty()));
        assert!(parse_script(" , ,\n").is_ok_and(|steps| steps.is_empty()));
    }

    // Tests the first bad token is reported with its position
    // Verified by reporting the character offset instead of the token index
    #[test]
    fn test_parse_script_reports_bad_token() {
        match parse_script("N S jump E") {
            Err(LatticeError::InvalidStep { index, token, .. }) => {
                assert_eq!(index, 2);
                assert_eq!(token, "jump");
            }
            other => unreachable!("Expected InvalidStep, got {other:?}"),
        }
    }

    // Tests malformed coordinates
    #[test]
    fn test_parse_bad_coordinates() {
        assert!(parse_step(0, "add:1").is_err());
        assert!(parse_step(0, "add:1:2:3").is_err());
        assert!(parse_step(0, "add:x:1").is_err());
        assert!(parse_step(0, "remove:1:").is_err());
        assert!(parse_step(0, "add:-4:7").is_ok_and(|s| s == Step::Add(Coordinate::new(-4, 7))));
    }

    // Tests display output parses back to the same step
    #[test]
    fn test_display_parses_back() {
        for step in [
            Step::Move(Direction::SW),
            Step::PickUp,
            Step::Place,
            Step::Add(Coordinate::new(-2, 5)),
            Step::Remove(Coordinate::new(7, 0)),
        ] {
            assert!(step.to_string().parse::<Step>().is_ok_and(|parsed| parsed == step));
        }
    }
}
