//! # Sandpath Core
//!
//! Core types, configuration, and errors for the sandpath converter.
//! Provides the data model shared between the conversion pipeline and
//! its callers: geometric primitives, the conversion configuration and
//! result, the contour-source input contract, and the debug trace.

pub mod config;
pub mod error;
pub mod geom;
pub mod result;
pub mod source;
pub mod trace;

pub use config::{ConversionConfig, OutputFormat, RetrievalMode, Tuning};
pub use error::{ConvertError, Result};
pub use geom::{Aabb, Contour, Point, PolarPoint, CLOSE_EPS};
pub use result::ConversionResult;
pub use source::{ContourSource, StaticContours};
pub use trace::TraceSnapshot;
