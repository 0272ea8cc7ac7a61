//! # Top-View Projector
//!
//! Plan projection of the assembly. Width still runs along X, centered like
//! the front view, while side-view depth folds into plan Y through a single
//! shared mapping: whatever lies further forward in the side view sits
//! lower on the plan.

use serde::{Deserialize, Serialize};
use standkit_core::shapes::{Part, PartShape, Point, Quad, Rect};
use tracing::debug;

use crate::dimensions::DimensionModel;
use crate::layout::{ViewLayout, PLAN_REF_OFFSET};
use crate::side_view::SideViewGeometry;
use crate::stability::SwayAnalysis;

/// Maps a side-view X coordinate onto the plan's Y axis.
///
/// `ref_y` is the plan line the stand's front face falls on; distances
/// forward of `stand_front_x` (smaller side X) land below it.
pub fn map_depth_to_plan(ref_y: f64, stand_front_x: f64, side_x: f64) -> f64 {
    ref_y + (stand_front_x - side_x)
}

/// Solved top-view geometry, including the stability verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopViewGeometry {
    /// Top-left of this view's region
    pub origin: Point,
    /// X of the assembly centerline
    pub center_x: f64,
    /// Base plate footprint
    pub base: Rect,
    /// Footprint of the stand column at the floor
    pub stand_bottom: Rect,
    /// Footprint of the stand column at its top; offset from the bottom
    /// when the column leans
    pub stand_top: Rect,
    /// Overall stand body: the union of both footprints
    pub stand_body_points: Quad,
    /// Display panel slab
    pub panel: Rect,
    /// Electronics housing
    pub backpack: Rect,
    /// VESA bracket
    pub vesa_neck: Rect,
    /// Sway containment verdict
    pub is_stable: bool,
    /// Swivel axis in plan coordinates
    pub pivot: Point,
    /// Plan Y of the backward tip line
    #[serde(rename = "y_A")]
    pub y_a: f64,
    /// Plan Y of the forward tip line
    #[serde(rename = "y_B")]
    pub y_b: f64,
}

impl TopViewGeometry {
    /// Projects the solved side view onto the plan and runs the stability
    /// analysis.
    pub fn project(dims: &DimensionModel, side: &SideViewGeometry, layout: &ViewLayout) -> Self {
        let origin = layout.top_view_origin;
        let center_x = origin.x + dims.screen_width / 2.0;
        let ref_y = origin.y + PLAN_REF_OFFSET;
        let front_x = side.stand_front_bottom_x;

        let [p1, p2, p3, p4] = side.stand_poly_points.points;
        let stand_front_bottom_y = map_depth_to_plan(ref_y, front_x, p1.x);
        let stand_rear_bottom_y = map_depth_to_plan(ref_y, front_x, p2.x);
        let stand_rear_top_y = map_depth_to_plan(ref_y, front_x, p3.x);
        let stand_front_top_y = map_depth_to_plan(ref_y, front_x, p4.x);

        let base_front_y = stand_front_bottom_y + dims.stand_front_offset;
        let base = Rect::new(
            center_x - dims.base_width / 2.0,
            base_front_y - dims.base_depth,
            dims.base_width,
            dims.base_depth,
        );

        let stand_left_x = center_x - dims.stand_width / 2.0;
        let stand_bottom = Rect::new(
            stand_left_x,
            stand_front_bottom_y.min(stand_rear_bottom_y),
            dims.stand_width,
            (stand_front_bottom_y - stand_rear_bottom_y).abs(),
        );
        let stand_top = Rect::new(
            stand_left_x,
            stand_front_top_y.min(stand_rear_top_y),
            dims.stand_width,
            (stand_front_top_y - stand_rear_top_y).abs(),
        );

        let body_near = stand_front_bottom_y
            .min(stand_rear_bottom_y)
            .min(stand_front_top_y)
            .min(stand_rear_top_y);
        let body_far = stand_front_bottom_y
            .max(stand_rear_bottom_y)
            .max(stand_front_top_y)
            .max(stand_rear_top_y);
        let stand_right_x = center_x + dims.stand_width / 2.0;
        let stand_body_points = Quad::new([
            Point::new(stand_left_x, body_near),
            Point::new(stand_right_x, body_near),
            Point::new(stand_right_x, body_far),
            Point::new(stand_left_x, body_far),
        ]);

        let pivot = Point::new(center_x, stand_rear_bottom_y + dims.swivel_pivot_offset);
        let sway = SwayAnalysis::evaluate(dims, side, pivot, &base);

        let neck_rear_top = side.vesa_neck.poly_points.points[1];
        let vesa_neck = Rect::new(
            center_x - dims.vesa_neck_width / 2.0,
            map_depth_to_plan(ref_y, front_x, neck_rear_top.x),
            dims.vesa_neck_width,
            dims.vesa_neck_depth,
        );
        let backpack = Rect::new(
            center_x - dims.backpack_width / 2.0,
            map_depth_to_plan(ref_y, front_x, side.backpack.right()),
            dims.backpack_width,
            dims.backpack_thickness,
        );
        let panel = Rect::new(
            origin.x,
            map_depth_to_plan(ref_y, front_x, side.panel.right()),
            dims.screen_width,
            dims.panel_thickness,
        );

        debug!(
            "Top view projected: center_x={}, pivot=({}, {}), stable={}",
            center_x, pivot.x, pivot.y, sway.is_stable
        );

        Self {
            origin,
            center_x,
            base,
            stand_bottom,
            stand_top,
            stand_body_points,
            panel,
            backpack,
            vesa_neck,
            is_stable: sway.is_stable,
            pivot,
            y_a: sway.y_a,
            y_b: sway.y_b,
        }
    }

    /// Outline of `part` in this view; the stand reports its overall body
    pub fn part_shape(&self, part: Part) -> PartShape {
        match part {
            Part::Base => PartShape::Rectangle(self.base),
            Part::Stand => PartShape::Quadrilateral(self.stand_body_points),
            Part::VesaNeck => PartShape::Rectangle(self.vesa_neck),
            Part::Backpack => PartShape::Rectangle(self.backpack),
            Part::Panel => PartShape::Rectangle(self.panel),
        }
    }
}
