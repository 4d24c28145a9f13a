//! # Sandpath Pathtools
//!
//! The conversion pipeline: turns raster-derived boundary contours
//! into a single continuous, orderable motion path for a two-axis
//! polar sand table that cannot lift its drawing tool.
//!
//! ## Pipeline stages
//!
//! - **Simplify**: Douglas-Peucker reduction under an adaptive,
//!   globally budgeted tolerance
//! - **Dedupe**: near-duplicate contour removal via bounding-box IoU
//! - **Normalize**: loop start rotation for closed contours
//! - **Plan**: greedy nearest-neighbor tour ordering and orientation
//! - **Stitch**: minimal-jump connectors via graph search over placed
//!   geometry
//! - **Polar**: continuous (unwrapped) theta-rho mapping
//! - **Encode**: the literal output formats consumed by table firmware
//!
//! The entry point is [`convert`]; everything is a pure function of
//! `(contours, config)`.

pub mod convert;
pub mod dedupe;
pub mod encode;
pub mod normalize;
pub mod planner;
pub mod polar;
pub mod simplify;
pub mod stitch;

pub use convert::{convert, convert_from_source, plan_preview};
pub use dedupe::dedupe_contours;
pub use encode::{encode, subdivide_long_segments};
pub use normalize::{rotate_loop_start, rotate_loop_to_centroid};
pub use planner::plan_tour;
pub use polar::{map_to_polar, RADIUS_SCALE};
pub use simplify::{simplify_contour, simplify_within_budget, SimplifyOutcome};
pub use stitch::{Connector, Edge, GraphNode, StitchGraph};
