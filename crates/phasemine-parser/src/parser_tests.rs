use phasemine_core::{geometry::Point, path::PathCommand};

use crate::{
    error::{ErrorCode, ParseError},
    parse_path,
    span::Span,
};

fn codes(err: &ParseError) -> Vec<Option<ErrorCode>> {
    err.diagnostics().iter().map(|d| d.code()).collect()
}

fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> PathCommand {
    PathCommand::Line { x0, y0, x1, y1 }
}

#[test]
fn test_parse_empty_path() {
    assert_eq!(parse_path("").unwrap(), vec![]);
    assert_eq!(parse_path("   ").unwrap(), vec![]);
}

#[test]
fn test_parse_move_and_lines() {
    let commands = parse_path("M 0,0 L 10,0 L 10,0 L 20,5 Z").unwrap();

    assert_eq!(
        commands,
        vec![
            PathCommand::Move { x: 0.0, y: 0.0 },
            line(0.0, 0.0, 10.0, 0.0),
            line(10.0, 0.0, 10.0, 0.0),
            line(10.0, 0.0, 20.0, 5.0),
        ]
    );
    assert!(commands[2].is_zero_length_line());
}

#[test]
fn test_parse_curves_start_at_pen() {
    let commands = parse_path("M 0,0 Q 50,100 100,0 C 110,10 120,20 130,0").unwrap();

    assert_eq!(
        commands[1],
        PathCommand::QuadraticCurve {
            start: Point::new(0.0, 0.0),
            control: Point::new(50.0, 100.0),
            end: Point::new(100.0, 0.0),
        }
    );
    assert_eq!(
        commands[2],
        PathCommand::CubicCurve {
            start: Point::new(100.0, 0.0),
            control1: Point::new(110.0, 10.0),
            control2: Point::new(120.0, 20.0),
            end: Point::new(130.0, 0.0),
        }
    );
}

#[test]
fn test_parse_close_returns_pen_to_subpath_start() {
    let commands = parse_path("M 5,5 L 10,5 L 10,10 Z L 0,0").unwrap();

    assert_eq!(commands.last(), Some(&line(5.0, 5.0, 0.0, 0.0)));
}

#[test]
fn test_parse_multiple_subpaths() {
    let commands = parse_path("M 0,0 L 1,1 Z M 50,50 L 60,60 Z").unwrap();

    assert_eq!(commands.len(), 4);
    assert_eq!(commands[2], PathCommand::Move { x: 50.0, y: 50.0 });
    assert_eq!(commands[3], line(50.0, 50.0, 60.0, 60.0));
}

#[test]
fn test_parse_decimal_and_negative_coordinates() {
    let commands = parse_path("M 33.3,912.75 L -0.5,1.2e3").unwrap();

    assert_eq!(commands[1], line(33.3, 912.75, -0.5, 1200.0));
}

#[test]
fn test_parse_lone_close_is_only_a_warning() {
    let commands = parse_path("Z M 0,0 L 1,1").unwrap();

    assert_eq!(commands.len(), 2);
}

#[test]
fn test_unknown_command() {
    let err = parse_path("M 0,0 A 10,10 L 5,5").unwrap_err();

    assert_eq!(codes(&err), vec![Some(ErrorCode::E001)]);
    let diag = &err.diagnostics()[0];
    assert_eq!(diag.message(), "unknown path command `A`");
    assert_eq!(diag.labels()[0].span(), Span::new(6..7));
    assert!(diag.help().is_some());
}

#[test]
fn test_relative_commands_are_unsupported() {
    let err = parse_path("m 0,0 l 10,0").unwrap_err();

    // Recovery skips everything up to the next supported command letter.
    assert_eq!(codes(&err), vec![Some(ErrorCode::E001)]);
}

#[test]
fn test_extra_coordinate_pair() {
    let err = parse_path("M 0,0 L 10,0 20,0").unwrap_err();

    assert_eq!(codes(&err), vec![Some(ErrorCode::E001)]);
    assert!(err.diagnostics()[0].message().contains("coordinate pair `20,0`"));
}

#[test]
fn test_malformed_coordinate_pair() {
    let source = "M 0,0 L 10;5 Z";
    let err = parse_path(source).unwrap_err();

    assert_eq!(codes(&err), vec![Some(ErrorCode::E002)]);
    let span = err.diagnostics()[0].labels()[0].span();
    assert_eq!(span.slice(source), Some("10;5"));
}

#[test]
fn test_every_malformed_pair_is_reported() {
    let err = parse_path("M 0,0 C a,b 1,1 c,d Z").unwrap_err();

    assert_eq!(codes(&err), vec![Some(ErrorCode::E002), Some(ErrorCode::E002)]);
}

#[test]
fn test_drawing_before_move() {
    let err = parse_path("L 10,0 L 20,0").unwrap_err();

    assert_eq!(codes(&err), vec![Some(ErrorCode::E003), Some(ErrorCode::E003)]);
    assert_eq!(err.diagnostics()[0].labels()[0].span(), Span::new(0..1));
}

#[test]
fn test_missing_coordinates_at_end() {
    let source = "M 0,0 C 1,1 2,2";
    let err = parse_path(source).unwrap_err();

    assert_eq!(codes(&err), vec![Some(ErrorCode::E004)]);
    let labels = err.diagnostics()[0].labels();
    assert_eq!(labels[0].span(), Span::new(source.len()..source.len()));
    assert!(!labels[1].is_primary());
    assert_eq!(labels[1].span(), Span::new(6..7));
}

#[test]
fn test_missing_coordinates_before_next_command() {
    let err = parse_path("M L 10,0").unwrap_err();

    // `M` lacks its pair, so the following `L` has no pen to start from.
    assert_eq!(codes(&err), vec![Some(ErrorCode::E004), Some(ErrorCode::E003)]);
}

#[test]
fn test_error_display_counts_additional_diagnostics() {
    let err = parse_path("X 0,0 M Y").unwrap_err();

    assert_eq!(err.diagnostics().len(), 2);
    assert_eq!(
        err.to_string(),
        "error[E001]: unknown path command `X` (+1 more)"
    );
}

mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Strategy for coordinates as they appear in diagram paths.
    fn coordinate_strategy() -> impl Strategy<Value = (f64, f64)> {
        (0u32..=10_000, 0u32..=300_000)
            .prop_map(|(x, y)| (f64::from(x) / 100.0, f64::from(y) / 100.0))
    }

    /// Strategy for well-formed polyline paths.
    fn polyline_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
        prop::collection::vec(coordinate_strategy(), 1..12)
    }

    fn render(points: &[(f64, f64)]) -> String {
        let mut source = String::new();
        for (i, (x, y)) in points.iter().enumerate() {
            let letter = if i == 0 { "M" } else { "L" };
            source.push_str(&format!("{letter} {x},{y} "));
        }
        source.push('Z');
        source
    }

    fn check_polyline_parses(points: &[(f64, f64)]) -> Result<(), TestCaseError> {
        let source = render(points);
        let commands = parse_path(&source)
            .map_err(|err| TestCaseError::fail(format!("`{source}` rejected: {err}")))?;

        prop_assert_eq!(commands.len(), points.len());
        for (command, (x, y)) in commands.iter().zip(points) {
            prop_assert_eq!(command.end_point(), Point::new(*x, *y));
        }
        Ok(())
    }

    fn check_parse_is_deterministic(points: &[(f64, f64)]) -> Result<(), TestCaseError> {
        let source = render(points);
        let first = parse_path(&source).map_err(|err| TestCaseError::fail(err.to_string()))?;
        let second = parse_path(&source).map_err(|err| TestCaseError::fail(err.to_string()))?;

        prop_assert_eq!(first, second);
        Ok(())
    }

    fn check_garbage_never_panics(source: &str) -> Result<(), TestCaseError> {
        if let Err(err) = parse_path(source) {
            prop_assert!(!err.diagnostics().is_empty());
            for diag in err.diagnostics() {
                for label in diag.labels() {
                    prop_assert!(label.span().end() <= source.len());
                }
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn polyline_parses(points in polyline_strategy()) {
            check_polyline_parses(&points)?;
        }

        #[test]
        fn parse_is_deterministic(points in polyline_strategy()) {
            check_parse_is_deterministic(&points)?;
        }

        #[test]
        fn garbage_never_panics(source in "[MLQCZA-Y0-9,. -]{0,40}") {
            check_garbage_never_panics(&source)?;
        }
    }
}
