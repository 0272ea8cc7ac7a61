//! # StandKit Geometry
//!
//! Deterministic geometry and stability analysis for a desk monitor stand:
//! a base plate, a stand column, a VESA neck, and the display it carries
//! (panel plus electronics backpack).
//!
//! One dimension model goes in; one snapshot comes out with three 2D
//! projections (side, front, top), the volume-weighted center of gravity,
//! a tip-over stability verdict, and the view box framing the drawing.
//! All coordinates are SVG-style millimeters with Y growing downward.
//!
//! ## Pipeline
//!
//! The side view is the source of truth. It solves the vertical stack and
//! the tilt geometry; the front view re-centers those heights at each
//! part's width, and the top view folds side-view depth into plan Y and
//! runs the sway-circle stability test.
//!
//! ## Usage
//!
//! ```
//! use standkit_geometry::{compute_geometry, DimensionModel};
//!
//! let dims = DimensionModel::default();
//! let snapshot = compute_geometry(&dims);
//! assert!(snapshot.is_stable);
//! println!("viewBox: {}", snapshot.view_box);
//! ```
//!
//! Computation is pure: the same model always yields a bit-identical
//! snapshot. Applications that recompute on every edit should go through
//! [`GeometryEngine`], which memoizes the last result.

pub mod center_of_gravity;
pub mod dimensions;
pub mod engine;
pub mod front_view;
pub mod layout;
pub mod side_view;
pub mod snapshot;
pub mod stability;
pub mod top_view;

pub use dimensions::DimensionModel;
pub use engine::{compute_geometry, GeometryEngine};
pub use front_view::FrontViewGeometry;
pub use layout::ViewLayout;
pub use side_view::{floor_intersection, NeckGeometry, SideViewGeometry};
pub use snapshot::{GeometrySnapshot, SideViewPoints, ViewBox};
pub use stability::SwayAnalysis;
pub use top_view::{map_depth_to_plan, TopViewGeometry};
