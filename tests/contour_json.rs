//! File-based conversion flow: contours in as JSON, encoded text out.

use std::fs;

use sandpath::{convert, Contour, ConversionConfig, OutputFormat, Point};

fn triangle() -> Vec<Contour> {
    vec![Contour::new(vec![
        Point::new(0.0, 0.0),
        Point::new(20.0, 0.0),
        Point::new(10.0, 15.0),
        Point::new(0.0, 0.0),
    ])]
}

#[test]
fn contours_round_trip_through_json_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input_path = dir.path().join("contours.json");
    let output_path = dir.path().join("track.thr");

    let json = serde_json::to_string(&triangle()).expect("serialize contours");
    fs::write(&input_path, json).expect("write input");

    let raw = fs::read_to_string(&input_path).expect("read input");
    let contours: Vec<Contour> = serde_json::from_str(&raw).expect("parse input");

    let config = ConversionConfig {
        output_format: OutputFormat::ContinuousLines,
        ..ConversionConfig::default()
    };
    let result = convert(&contours, &config).expect("conversion");
    fs::write(&output_path, &result.encoded_text).expect("write output");

    let written = fs::read_to_string(&output_path).expect("read output");
    assert_eq!(written, result.encoded_text);
    assert!(written.lines().all(|l| l.split(' ').count() == 2));
}

#[test]
fn partial_config_json_fills_defaults() {
    let config: ConversionConfig =
        serde_json::from_str(r#"{"epsilon": 1.25, "output_format": "ThetaRho"}"#)
            .expect("partial config");
    assert!((config.epsilon - 1.25).abs() < f64::EPSILON);
    assert_eq!(config.max_points, ConversionConfig::default().max_points);

    let result = convert(&triangle(), &config).expect("conversion");
    assert!(result.encoded_text.starts_with('{'));
}

#[test]
fn invalid_epsilon_surfaces_as_error() {
    let config = ConversionConfig {
        epsilon: 0.0,
        ..ConversionConfig::default()
    };
    assert!(convert(&triangle(), &config).is_err());
}
