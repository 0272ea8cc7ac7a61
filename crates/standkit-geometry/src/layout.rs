//! Canvas layout frame shared by the three views.
//!
//! The drawing places the side view in a left column and stacks the top view
//! over the front view in a right column. Everything hangs off a single
//! floor line so heights agree across views.

use standkit_core::shapes::Point;

use crate::dimensions::DimensionModel;

/// Horizontal gap between the side-view column and the front/top column
pub const HORIZONTAL_VIEW_GAP: f64 = 250.0;
/// Vertical gap between the top view and the front view beneath it
pub const VERTICAL_VIEW_GAP: f64 = 0.0;
/// Canvas space reserved above the top view
pub const TOP_PADDING: f64 = 150.0;
/// Outer padding applied when framing the drawing
pub const OUTER_PADDING: f64 = 100.0;
/// Nominal width reserved for the side-view column
pub const SIDE_VIEW_LAYOUT_WIDTH: f64 = 800.0;
/// Side-view X of the stand's rear-bottom corner, the depth anchor every
/// side-view placement is measured from
pub const STAND_REAR_ANCHOR_X: f64 = 600.0;
/// Offset from the top-view origin down to the plan reference line
pub const PLAN_REF_OFFSET: f64 = 100.0;
/// Depth margin added when sizing the top-view drawing area
pub const TOP_VIEW_DEPTH_MARGIN: f64 = 200.0;
/// Extra room kept on the right edge of the frame for the legend column
pub const VIEW_BOX_RIGHT_EXTRA: f64 = 300.0;
/// Extra room kept below the floor line for dimension callouts
pub const VIEW_BOX_BOTTOM_EXTRA: f64 = 150.0;

/// Per-computation layout frame: view anchors plus the shared floor line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLayout {
    /// Top-left of the top view
    pub top_view_origin: Point,
    /// Side-view anchor, on the floor line at the canvas's left edge
    pub side_view_origin: Point,
    /// Front-view anchor, on the floor line below the top view
    pub front_view_origin: Point,
    /// Y of the floor line all elevation views rest on
    pub floor_y: f64,
    /// Vertical extent reserved for the top view
    pub top_view_drawing_height: f64,
    /// Assembly height at zero lift, base to panel top
    pub static_assembly_height: f64,
}

impl ViewLayout {
    /// Derives the layout frame from the model. Pure, recomputed per call.
    pub fn from_model(dims: &DimensionModel) -> Self {
        let panel_assembly_height = dims.panel_height.max(dims.backpack_height);
        let top_view_drawing_height = dims.base_depth.max(
            dims.stand_depth
                + dims.vesa_neck_depth
                + dims.total_screen_thickness()
                + TOP_VIEW_DEPTH_MARGIN,
        );
        let static_assembly_height = dims.base_height + dims.stand_height + panel_assembly_height;

        let top_view_origin = Point::new(SIDE_VIEW_LAYOUT_WIDTH + HORIZONTAL_VIEW_GAP, TOP_PADDING);
        let floor_y =
            top_view_origin.y + top_view_drawing_height + VERTICAL_VIEW_GAP + static_assembly_height;

        Self {
            top_view_origin,
            side_view_origin: Point::new(0.0, floor_y),
            front_view_origin: Point::new(top_view_origin.x, floor_y),
            floor_y,
            top_view_drawing_height,
            static_assembly_height,
        }
    }
}
