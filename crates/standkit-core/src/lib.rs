//! # StandKit Core
//!
//! Shared foundation for the StandKit workspace: 2D shape primitives in the
//! SVG y-down convention, millimeter/inch unit helpers, and the common error
//! types. Everything here is plain data with no I/O so the geometry crates
//! stay pure.

pub mod error;
pub mod shapes;
pub mod units;

pub use error::{DimensionParseError, Error, Result};
pub use shapes::{rotate_point, Circle, Part, PartShape, Point, Quad, Rect};
pub use units::{
    format_length, inches_to_mm, mm_to_inches, parse_length, unit_label, MeasurementSystem,
    MM_PER_INCH,
};
