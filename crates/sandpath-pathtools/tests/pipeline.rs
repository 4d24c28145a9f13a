//! End-to-end properties of the conversion pipeline.

use std::f64::consts::PI;

use sandpath_core::{Contour, ConversionConfig, OutputFormat, Point};
use sandpath_pathtools::convert;

fn contour(points: &[(f64, f64)]) -> Contour {
    Contour::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
}

fn square(x0: f64, y0: f64, side: f64) -> Contour {
    contour(&[
        (x0, y0),
        (x0 + side, y0),
        (x0 + side, y0 + side),
        (x0, y0 + side),
        (x0, y0),
    ])
}

fn noisy_wave(points: usize) -> Contour {
    Contour::new(
        (0..points)
            .map(|i| {
                let x = i as f64 * 0.5;
                Point::new(x, (x * 0.7).sin() * 15.0 + (x * 3.1).cos() * 2.0)
            })
            .collect(),
    )
}

#[test]
fn identical_input_yields_byte_identical_output() {
    let contours = vec![square(0.0, 0.0, 10.0), contour(&[(30.0, 5.0), (40.0, 8.0)])];
    let config = ConversionConfig::default();

    let a = convert(&contours, &config).expect("conversion");
    let b = convert(&contours, &config).expect("conversion");
    assert_eq!(a, b);
    assert_eq!(a.encoded_text, b.encoded_text);
}

#[test]
fn point_budget_respected_or_truncated_exactly() {
    for max_points in [4, 8, 20, 100] {
        let contours = vec![noisy_wave(150), square(200.0, 200.0, 30.0)];
        let config = ConversionConfig {
            max_points,
            minimize_jumps: false,
            ..ConversionConfig::default()
        };

        let result = convert(&contours, &config).expect("conversion");
        if result.truncated {
            assert_eq!(
                result.ordered_points.len(),
                max_points,
                "truncated result must hit the budget exactly"
            );
        } else {
            assert!(
                result.ordered_points.len() <= max_points,
                "budget {max_points} exceeded: {}",
                result.ordered_points.len()
            );
        }
    }
}

#[test]
fn square_simplification_keeps_all_corners() {
    let config = ConversionConfig {
        epsilon: 0.5,
        max_points: 100,
        minimize_jumps: false,
        ..ConversionConfig::default()
    };
    let result = convert(&[square(0.0, 0.0, 10.0)], &config).expect("conversion");

    // All 4 corners plus the closing point survive (possibly rotated
    // by the loop anchor, but the vertex set is unchanged).
    assert_eq!(result.ordered_points.len(), 5);
    let corners = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    for corner in corners {
        assert!(
            result.ordered_points.contains(&corner),
            "corner {corner:?} was dropped"
        );
    }
    assert!(!result.truncated);
    assert!((result.final_epsilon - 0.5).abs() < f64::EPSILON);
}

#[test]
fn angle_steps_never_exceed_pi() {
    let contours = vec![
        square(0.0, 0.0, 50.0),
        square(60.0, 0.0, 20.0),
        contour(&[(100.0, 100.0), (120.0, 90.0), (140.0, 100.0)]),
    ];
    let config = ConversionConfig::default();
    let result = convert(&contours, &config).expect("conversion");

    for pair in result.polar_points.windows(2) {
        let delta = pair[1].theta - pair[0].theta;
        assert!(
            delta.abs() <= PI + 1e-9,
            "angle step {delta} exceeds pi"
        );
    }
}

#[test]
fn radius_normalized_to_scale() {
    let config = ConversionConfig::default();
    let result = convert(&[square(0.0, 0.0, 10.0)], &config).expect("conversion");
    let max_r = result
        .polar_points
        .iter()
        .map(|p| p.r)
        .fold(0.0_f64, f64::max);
    assert!((max_r - 1000.0).abs() < 1e-9);
    assert!(result.polar_points.iter().all(|p| p.r >= 0.0));
}

#[test]
fn stitched_path_includes_connector_geometry() {
    // Two squares far apart: with jump minimization the path between
    // them is still a single ordered sequence with no teleports longer
    // than the true gap.
    let contours = vec![square(0.0, 0.0, 10.0), square(40.0, 0.0, 10.0)];
    let config = ConversionConfig::default();
    let result = convert(&contours, &config).expect("conversion");

    // Path visits both squares.
    assert!(result.ordered_points.contains(&Point::new(0.0, 0.0)));
    assert!(result.ordered_points.contains(&Point::new(50.0, 10.0)));
}

#[test]
fn touching_contours_stitch_without_new_geometry() {
    // Second square shares its left edge start with the first square's
    // corner: transition rides existing geometry only.
    let a = square(0.0, 0.0, 10.0);
    let b = square(10.0, 0.0, 10.0);
    let config = ConversionConfig::default();
    let result = convert(&[a, b], &config).expect("conversion");

    // Every consecutive step is short: either along a square edge or
    // through the shared corner. Nothing jumps across open sand.
    for pair in result.ordered_points.windows(2) {
        assert!(
            pair[0].distance(pair[1]) <= 10.0 + 1e-9,
            "unexpected long jump {:?} -> {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn connector_never_rides_undrawn_geometry() {
    // A late-tour contour zigzags through the gap between the first
    // two. Its geometry is not on the sand yet when the first
    // transition is stitched, so the connector must not borrow it.
    let first = contour(&[(0.0, 0.0), (10.0, 0.0)]);
    let second = contour(&[(30.0, 0.0), (40.0, 0.0)]);
    let bridge = contour(&[
        (200.0, 200.0),
        (13.0, 0.0),
        (16.0, 2.0),
        (19.0, 0.0),
        (22.0, 2.0),
        (27.0, 0.0),
        (201.0, 200.0),
    ]);
    let config = ConversionConfig::default();
    let result = convert(&[first, second, bridge], &config).expect("conversion");

    let pos = |p: Point| result.ordered_points.iter().position(|&q| q == p);
    let second_start = pos(Point::new(30.0, 0.0)).expect("second contour present");
    let bridge_interior = pos(Point::new(16.0, 2.0)).expect("bridge contour present");
    assert!(
        second_start < bridge_interior,
        "transition borrowed geometry drawn later in the tour"
    );
}

#[test]
fn shared_endpoint_contours_collapse_instead_of_undershooting() {
    // Chained segments dedup to 4 distinct points under a budget of 5:
    // no cut happens, so the result must not be reported as truncated.
    let chain: Vec<Contour> = (0..3)
        .map(|i| {
            let x = f64::from(i);
            contour(&[(x, 0.0), (x + 1.0, 0.0)])
        })
        .collect();
    let config = ConversionConfig {
        max_points: 5,
        minimize_jumps: false,
        ..ConversionConfig::default()
    };
    let result = convert(&chain, &config).expect("conversion");
    assert!(!result.truncated);
    assert_eq!(result.ordered_points.len(), 4);
}

#[test]
fn loop_mode_closes_every_contour() {
    let arc = contour(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    let config = ConversionConfig {
        is_loop: true,
        minimize_jumps: false,
        ..ConversionConfig::default()
    };
    let result = convert(&[arc], &config).expect("conversion");

    // Closed tour: the path returns to its starting point.
    assert_eq!(
        result.ordered_points.first(),
        result.ordered_points.last()
    );
}

#[test]
fn near_duplicate_contour_dropped_from_path() {
    let a = square(0.0, 0.0, 10.0);
    let shifted = square(0.5, 0.0, 10.0);
    let config = ConversionConfig {
        minimize_jumps: false,
        ..ConversionConfig::default()
    };

    let result = convert(&[a.clone(), shifted], &config).expect("conversion");
    let alone = convert(&[a], &config).expect("conversion");
    assert_eq!(result.ordered_points.len(), alone.ordered_points.len());
}

#[test]
fn truncation_reported_with_final_epsilon() {
    let contours = vec![square(0.0, 0.0, 10.0), square(100.0, 0.0, 10.0)];
    let config = ConversionConfig {
        max_points: 4,
        minimize_jumps: false,
        ..ConversionConfig::default()
    };
    let result = convert(&contours, &config).expect("conversion");
    assert!(result.truncated);
    assert_eq!(result.ordered_points.len(), 4);
    assert!(result.final_epsilon > config.epsilon);
}

#[test]
fn format_2_subdivides_long_runs() {
    let line = contour(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);
    let coarse = convert(
        &[line.clone()],
        &ConversionConfig {
            output_format: OutputFormat::ThetaRho,
            ..ConversionConfig::default()
        },
    )
    .expect("conversion");
    let fine = convert(
        &[line],
        &ConversionConfig {
            output_format: OutputFormat::ContinuousLines,
            ..ConversionConfig::default()
        },
    )
    .expect("conversion");

    assert!(fine.ordered_points.len() > coarse.ordered_points.len());
    assert_eq!(fine.encoded_text.lines().count(), fine.polar_points.len());
}
