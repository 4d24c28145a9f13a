//! # Sandpath
//!
//! Converts raster-derived boundary traces into a single continuous,
//! orderable motion path for a two-axis polar plotting mechanism (a
//! kinetic sand table) that cannot lift its drawing tool.
//!
//! ## Architecture
//!
//! Sandpath is organized as a workspace with multiple crates:
//!
//! 1. **sandpath-core** - Data model, configuration, errors, input
//!    contract, debug trace
//! 2. **sandpath-pathtools** - The conversion pipeline: simplify,
//!    dedupe, normalize, plan, stitch, polar-map, encode
//! 3. **sandpath** - Library facade and the contour-JSON CLI
//!
//! ## The pipeline
//!
//! A conversion is a pure function of `(contours, config)`: contour
//! simplification under an adaptive point budget, bounding-box
//! deduplication, loop normalization, greedy tour ordering,
//! minimal-jump stitching via graph search, continuous polar mapping,
//! and literal text encoding for table firmware.

pub use sandpath_core::{
    Aabb, Contour, ContourSource, ConversionConfig, ConversionResult, ConvertError, OutputFormat,
    Point, PolarPoint, RetrievalMode, StaticContours, TraceSnapshot, Tuning, CLOSE_EPS,
};

pub use sandpath_pathtools::{
    convert, convert_from_source, dedupe_contours, encode, map_to_polar, plan_preview, plan_tour,
    rotate_loop_start, rotate_loop_to_centroid, simplify_contour, simplify_within_budget,
    subdivide_long_segments, Connector, SimplifyOutcome, StitchGraph, RADIUS_SCALE,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
