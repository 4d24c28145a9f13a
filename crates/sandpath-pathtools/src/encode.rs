//! Output text encodings.
//!
//! Each format is a bit-exact contract: downstream firmware parses the
//! text verbatim, so the literal layout here must never drift. Radius
//! arrives normalized to [0, 1000] and theta as continuous radians.

use std::f64::consts::PI;
use std::fmt::Write as _;

use sandpath_core::{OutputFormat, Point, PolarPoint};

/// Serialize a polar sequence in the requested format.
#[must_use = "returns the encoded text"]
pub fn encode(polar: &[PolarPoint], format: OutputFormat) -> String {
    match format {
        OutputFormat::ThetaRho => encode_theta_rho(polar),
        OutputFormat::QuantizedBytes => encode_quantized(polar),
        OutputFormat::ContinuousLines => encode_continuous(polar),
        OutputFormat::WhitespaceBits => encode_whitespace(polar),
    }
}

/// Subdivide segments longer than `threshold` by linear interpolation
/// so long straight runs carry enough samples for step-by-step
/// playback.
///
/// Each long segment is split into `max(2, ceil(distance / threshold))`
/// pieces. Applied to the Cartesian sequence before polar mapping when
/// encoding [`OutputFormat::ContinuousLines`].
#[must_use = "returns the subdivided point sequence"]
pub fn subdivide_long_segments(points: &[Point], threshold: f64) -> Vec<Point> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(points.len());
    out.push(first);

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let d = a.distance(b);
        if d > threshold {
            let pieces = ((d / threshold).ceil() as usize).max(2);
            for k in 1..=pieces {
                let t = k as f64 / pieces as f64;
                out.push(Point::new(
                    a.x + (b.x - a.x) * t,
                    a.y + (b.y - a.y) * t,
                ));
            }
        } else {
            out.push(b);
        }
    }

    out
}

/// Theta wrapped into [0, 3600) tenths of a degree, integer-rounded.
fn wrapped_tenths(theta: f64) -> i64 {
    ((theta.to_degrees() * 10.0).round() as i64).rem_euclid(3600)
}

/// Quantize a value from [0, in_max] to an 8-bit range.
fn quantize(value: f64, in_max: f64) -> u8 {
    let scaled = (value * 255.0 / in_max).round();
    scaled.clamp(0.0, 255.0) as u8
}

/// Format 0: `{r,theta}` integer pairs, comma-joined, theta in wrapped
/// tenths of a degree.
fn encode_theta_rho(polar: &[PolarPoint]) -> String {
    let mut out = String::new();
    for (i, p) in polar.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{{{},{}}}", p.r.round() as i64, wrapped_tenths(p.theta));
    }
    out
}

/// Format 1: radius and wrapped theta each quantized to [0, 255], same
/// bracketed pair layout as format 0.
fn encode_quantized(polar: &[PolarPoint]) -> String {
    let mut out = String::new();
    for (i, p) in polar.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let r = quantize(p.r, 1000.0);
        let theta = quantize(wrapped_tenths(p.theta) as f64, 3600.0);
        let _ = write!(out, "{{{r},{theta}}}");
    }
    out
}

/// Format 2: one `"<theta_radians> <radius_normalized>"` line per
/// point, 5 decimal places.
///
/// Theta stays continuous (never wrapped) so multi-revolution paths
/// play back without snapping; a fixed −90° rotation aligns the
/// table's zero-angle convention.
fn encode_continuous(polar: &[PolarPoint]) -> String {
    let mut lines = Vec::with_capacity(polar.len());
    for p in polar {
        // Rotate by −900 tenths of a degree, then flip into the
        // table's angle direction.
        let theta = PI / 2.0 - p.theta;
        let r = p.r / 1000.0;
        lines.push(format!("{theta:.5} {r:.5}"));
    }
    lines.join("\n")
}

/// Format 3: radius byte then theta byte per point, each rendered
/// MSB-first as spaces (0) and tabs (1), one point per line.
///
/// Whitespace-significant: any trimming, re-indenting editor, or
/// transport that strips trailing whitespace corrupts this output.
fn encode_whitespace(polar: &[PolarPoint]) -> String {
    let mut lines = Vec::with_capacity(polar.len());
    for p in polar {
        let r = quantize(p.r, 1000.0);
        let theta = quantize(wrapped_tenths(p.theta) as f64, 3600.0);
        let mut line = String::with_capacity(16);
        for byte in [r, theta] {
            for bit in (0..8).rev() {
                line.push(if byte >> bit & 1 == 1 { '\t' } else { ' ' });
            }
        }
        lines.push(line);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theta_rho_pairs_integer_rounded_and_wrapped() {
        let polar = [
            PolarPoint::new(500.4, PI),          // 1800 tenths
            PolarPoint::new(250.0, 5.0 * PI / 2.0), // 4500 → wraps to 900
        ];
        assert_eq!(encode(&polar, OutputFormat::ThetaRho), "{500,1800},{250,900}");
    }

    #[test]
    fn theta_rho_negative_angle_wraps_positive() {
        let polar = [PolarPoint::new(100.0, -PI / 2.0)]; // −900 → 2700
        assert_eq!(encode(&polar, OutputFormat::ThetaRho), "{100,2700}");
    }

    #[test]
    fn quantized_bytes_scale_to_255() {
        let polar = [PolarPoint::new(1000.0, 0.0), PolarPoint::new(0.0, PI)];
        // r 1000 → 255; theta 0 → 0. r 0 → 0; theta 1800 → 128.
        assert_eq!(
            encode(&polar, OutputFormat::QuantizedBytes),
            "{255,0},{0,128}"
        );
    }

    #[test]
    fn continuous_line_matches_firmware_literal() {
        // r=500, theta=1800 tenths must encode to exactly this string.
        let polar = [PolarPoint::new(500.0, PI)];
        assert_eq!(
            encode(&polar, OutputFormat::ContinuousLines),
            "-1.57080 0.50000"
        );
    }

    #[test]
    fn continuous_lines_do_not_wrap() {
        // 2.5 revolutions: the encoded angle keeps growing in
        // magnitude instead of wrapping back.
        let polar = [
            PolarPoint::new(500.0, 0.0),
            PolarPoint::new(500.0, 5.0 * PI),
        ];
        let text = encode(&polar, OutputFormat::ContinuousLines);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "1.57080 0.50000");
        assert_eq!(lines[1], "-14.13717 0.50000");
    }

    #[test]
    fn whitespace_bits_render_exactly() {
        // r 1000 → 255 → eight tabs; theta 0 → eight spaces.
        let polar = [PolarPoint::new(1000.0, 0.0)];
        assert_eq!(
            encode(&polar, OutputFormat::WhitespaceBits),
            "\t\t\t\t\t\t\t\t        "
        );
    }

    #[test]
    fn whitespace_bits_one_line_per_point() {
        let polar = [PolarPoint::new(0.0, 0.0), PolarPoint::new(0.0, 0.0)];
        let text = encode(&polar, OutputFormat::WhitespaceBits);
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().all(|l| l.len() == 16));
    }

    #[test]
    fn empty_sequence_encodes_empty() {
        for format in [
            OutputFormat::ThetaRho,
            OutputFormat::QuantizedBytes,
            OutputFormat::ContinuousLines,
            OutputFormat::WhitespaceBits,
        ] {
            assert_eq!(encode(&[], format), "");
        }
    }

    #[test]
    fn subdivision_splits_long_segments() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let out = subdivide_long_segments(&points, 2.5);
        // ceil(10 / 2.5) = 4 pieces → 5 points total.
        assert_eq!(out.len(), 5);
        assert_eq!(out[0], Point::new(0.0, 0.0));
        assert_eq!(out[2], Point::new(5.0, 0.0));
        assert_eq!(out[4], Point::new(10.0, 0.0));
    }

    #[test]
    fn subdivision_leaves_short_segments_alone() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ];
        let out = subdivide_long_segments(&points, 2.5);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn subdivision_minimum_two_pieces() {
        // Barely over threshold: still split into at least 2 pieces.
        let points = [Point::new(0.0, 0.0), Point::new(2.6, 0.0)];
        let out = subdivide_long_segments(&points, 2.5);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn subdivision_of_empty_input() {
        assert!(subdivide_long_segments(&[], 2.5).is_empty());
    }
}
