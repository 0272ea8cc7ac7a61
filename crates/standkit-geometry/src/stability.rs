//! # Stability Analyzer
//!
//! Decides whether the assembly can tip over. The side view's tilt contact
//! points are mapped into the plan, the span between them becomes the sway
//! circle, and the verdict is whether that circle stays inside the base
//! footprint at every sampled swivel position.

use serde::{Deserialize, Serialize};
use standkit_core::shapes::{rotate_point, Circle, Point, Rect};
use tracing::{debug, info};

use crate::dimensions::DimensionModel;
use crate::side_view::SideViewGeometry;

/// Result of the sway-circle containment test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwayAnalysis {
    /// Plan Y of the backward tip line
    #[serde(rename = "y_A")]
    pub y_a: f64,
    /// Plan Y of the forward tip line
    #[serde(rename = "y_B")]
    pub y_b: f64,
    /// Sway circle at swivel zero
    pub circle: Circle,
    /// True when the circle stays inside the base at every sampled angle
    pub is_stable: bool,
}

impl SwayAnalysis {
    /// Evaluates tip-over stability about `pivot` within the `base`
    /// footprint, both in plan coordinates.
    ///
    /// The tip contacts are mapped relative to the pivot: side-view X
    /// forward of the stand's depth center becomes plan Y above the pivot.
    /// The circle spanning the two mapped lines approximates the locus the
    /// display sweeps between its tilt limits, and it is re-tested after
    /// rotating its center about the pivot by the swivel angle either way.
    /// Containment is inclusive, the circle's radius never changes, and
    /// three samples are checked rather than the full swept hull, so the
    /// verdict is slightly conservative at intermediate angles.
    pub fn evaluate(
        dims: &DimensionModel,
        side: &SideViewGeometry,
        pivot: Point,
        base: &Rect,
    ) -> Self {
        let half_depth = dims.stand_depth / 2.0;
        let y_a = pivot.y - (side.point_a.x - side.stand_front_bottom_x - half_depth);
        let y_b = pivot.y - (side.point_b.x - side.stand_front_bottom_x - half_depth);

        let radius = (y_a - y_b).abs() / 2.0;
        let circle = Circle::new(Point::new(pivot.x, (y_a + y_b) / 2.0), radius);

        let swivel_rad = dims.swivel_angle.abs().to_radians();
        let centered = base.contains_circle(&circle);
        let swung_cw = base.contains_circle(&Circle::new(
            rotate_point(circle.center, pivot, swivel_rad),
            radius,
        ));
        let swung_ccw = base.contains_circle(&Circle::new(
            rotate_point(circle.center, pivot, -swivel_rad),
            radius,
        ));
        let is_stable = centered && swung_cw && swung_ccw;

        debug!(
            "Sway circle r={} at ({}, {}), samples centered={} cw={} ccw={}",
            radius, circle.center.x, circle.center.y, centered, swung_cw, swung_ccw
        );
        info!(
            "Stability verdict: {}",
            if is_stable { "stable" } else { "tips over" }
        );

        Self {
            y_a,
            y_b,
            circle,
            is_stable,
        }
    }
}
