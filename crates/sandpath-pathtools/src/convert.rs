//! Conversion orchestration.
//!
//! One pure, synchronous pass: simplify under the point budget, drop
//! near-duplicates, order and orient the tour, stitch transitions,
//! map to continuous polar coordinates, encode. No state survives the
//! call; identical input always yields byte-identical output.

use sandpath_core::{
    Contour, ContourSource, ConversionConfig, ConversionResult, ConvertError, OutputFormat, Point,
    Result, TraceSnapshot,
};
use tracing::{debug, info, warn};

use crate::dedupe::dedupe_contours;
use crate::encode::{encode, subdivide_long_segments};
use crate::planner::plan_tour;
use crate::polar::map_to_polar;
use crate::simplify::simplify_within_budget;
use crate::stitch::StitchGraph;

/// Ordered contours ready for layout, with the simplifier's outcome.
struct PlannedTour {
    ordered: Vec<Contour>,
    final_epsilon: f64,
    truncated: bool,
}

/// Convert raw traced contours into an encoded polar path.
///
/// The only fatal condition is a non-positive epsilon or point budget.
/// Empty input yields an empty result; an unreachable budget yields a
/// truncated result with `truncated` set.
pub fn convert(raw_contours: &[Contour], config: &ConversionConfig) -> Result<ConversionResult> {
    validate(config)?;

    let cleaned = clean_input(raw_contours);
    if cleaned.is_empty() {
        debug!("no contours supplied, returning empty result");
        return Ok(ConversionResult::empty(config.epsilon));
    }

    let tour = plan_contours(&cleaned, config);
    let points = lay_out_path(&tour.ordered, config);

    let points = if config.output_format == OutputFormat::ContinuousLines {
        let threshold = tour.final_epsilon * config.tuning.subdivision_factor;
        subdivide_long_segments(&points, threshold)
    } else {
        points
    };

    let polar = map_to_polar(&points);
    let encoded_text = encode(&polar, config.output_format);

    if tour.truncated {
        warn!(
            max_points = config.max_points,
            final_epsilon = tour.final_epsilon,
            "result truncated to point budget"
        );
    }
    info!(
        contours = tour.ordered.len(),
        points = points.len(),
        final_epsilon = tour.final_epsilon,
        truncated = tour.truncated,
        format = config.output_format.code(),
        "conversion complete"
    );

    Ok(ConversionResult {
        ordered_points: points,
        polar_points: polar,
        encoded_text,
        truncated: tour.truncated,
        final_epsilon: tour.final_epsilon,
    })
}

/// Convert contours obtained from an external boundary tracer.
pub fn convert_from_source<S: ContourSource + ?Sized>(
    source: &S,
    config: &ConversionConfig,
) -> Result<ConversionResult> {
    let contours = source.detect_contours(config.retrieval_mode);
    convert(&contours, config)
}

/// Run the pipeline through tour planning only and snapshot the
/// resulting contour order for inspection.
pub fn plan_preview(raw_contours: &[Contour], config: &ConversionConfig) -> Result<TraceSnapshot> {
    validate(config)?;
    let cleaned = clean_input(raw_contours);
    Ok(TraceSnapshot::new(plan_contours(&cleaned, config).ordered))
}

fn validate(config: &ConversionConfig) -> Result<()> {
    if config.epsilon <= 0.0 || !config.epsilon.is_finite() {
        return Err(ConvertError::InvalidEpsilon {
            value: config.epsilon,
        });
    }
    if config.max_points == 0 {
        return Err(ConvertError::InvalidPointBudget {
            value: config.max_points,
        });
    }
    Ok(())
}

/// Re-normalize input: external callers may hand over contours that
/// bypassed the consecutive-duplicate invariant (e.g. via serde).
fn clean_input(raw_contours: &[Contour]) -> Vec<Contour> {
    raw_contours
        .iter()
        .map(|c| Contour::new(c.points().to_vec()))
        .filter(|c| !c.is_empty())
        .collect()
}

/// Simplify under budget, dedupe, and order the tour.
fn plan_contours(cleaned: &[Contour], config: &ConversionConfig) -> PlannedTour {
    let outcome =
        simplify_within_budget(cleaned, config.epsilon, config.max_points, &config.tuning);
    let deduped = dedupe_contours(outcome.contours, config.tuning.iou_threshold);
    PlannedTour {
        ordered: plan_tour(&deduped, config.is_loop),
        final_epsilon: outcome.final_epsilon,
        truncated: outcome.truncated,
    }
}

/// Concatenate ordered contours, routing transitions through the
/// stitch graph when jump minimization is on.
fn lay_out_path(ordered: &[Contour], config: &ConversionConfig) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::new();

    if config.minimize_jumps && ordered.len() > 1 {
        let mut graph = StitchGraph::new(config.tuning.neighbor_fanout);
        if let Some(first) = ordered.first() {
            graph.add_contour(first.points());
        }

        for (i, contour) in ordered.iter().enumerate() {
            append_points(&mut points, contour.points());
            if let Some(next) = ordered.get(i + 1) {
                // The graph holds only geometry drawn so far; the next
                // contour joins it after its entry point is stitched.
                if let (Some(from), Some(to)) = (contour.last(), next.first()) {
                    let connector = graph.stitch(from, to);
                    append_points(&mut points, &connector.points);
                }
                graph.add_contour(next.points());
            }
        }
    } else {
        for contour in ordered {
            append_points(&mut points, contour.points());
        }
    }

    points
}

/// Extend the path, collapsing a duplicate point at the seam.
fn append_points(path: &mut Vec<Point>, points: &[Point]) {
    for &p in points {
        if path.last() != Some(&p) {
            path.push(p);
        }
    }
}
