//! Snapshot assembly: the engine's complete output for one model.

use serde::{Deserialize, Serialize};
use standkit_core::shapes::Point;
use std::fmt;

use crate::front_view::FrontViewGeometry;
use crate::layout::{
    ViewLayout, OUTER_PADDING, TOP_PADDING, VIEW_BOX_BOTTOM_EXTRA, VIEW_BOX_RIGHT_EXTRA,
};
use crate::side_view::SideViewGeometry;
use crate::top_view::TopViewGeometry;

/// Side-view tip contacts plus the stand centerline, surfaced for overlays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideViewPoints {
    /// Floor contact of the backward-tilt ray
    #[serde(rename = "A")]
    pub a: Point,
    /// Floor contact of the forward-tilt ray
    #[serde(rename = "B")]
    pub b: Point,
    /// X midway between the stand's bottom faces
    pub stand_center_x: f64,
}

/// Rectangle framing the whole drawing, in `min-x min-y width height` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewBox {
    /// X of the left edge
    pub min_x: f64,
    /// Y of the top edge
    pub min_y: f64,
    /// Total width
    pub width: f64,
    /// Total height
    pub height: f64,
}

impl fmt::Display for ViewBox {
    /// Formats as the four space-separated numbers an SVG `viewBox` takes
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }
}

/// Complete derived geometry for one dimension model.
///
/// Snapshots are plain values: computing twice from equal models yields
/// equal snapshots, so they can be cached, diffed, and serialized freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometrySnapshot {
    /// Sagittal elevation
    pub side_view: SideViewGeometry,
    /// Frontal elevation
    pub front_view: FrontViewGeometry,
    /// Plan projection with the stability verdict
    pub top_view: TopViewGeometry,
    /// Tip contacts and stand centerline from the side view
    pub side_view_points: SideViewPoints,
    /// Top-level copy of the stability verdict
    pub is_stable: bool,
    /// Frame enclosing all three views
    pub view_box: ViewBox,
}

impl GeometrySnapshot {
    /// Assembles the snapshot from the three solved views.
    pub(crate) fn assemble(
        layout: &ViewLayout,
        side: SideViewGeometry,
        front: FrontViewGeometry,
        top: TopViewGeometry,
    ) -> Self {
        let view_box = frame_views(layout, &side, &front, &top);
        let [p1, p2, _, _] = side.stand_poly_points.points;
        let side_view_points = SideViewPoints {
            a: side.point_a,
            b: side.point_b,
            stand_center_x: (p1.x + p2.x) / 2.0,
        };
        Self {
            is_stable: top.is_stable,
            side_view: side,
            front_view: front,
            top_view: top,
            side_view_points,
            view_box,
        }
    }
}

/// Frames the three views: the base plates bound the drawing horizontally,
/// the shared floor line and top padding bound it vertically, with extra
/// room kept for the legend column and dimension callouts.
fn frame_views(
    layout: &ViewLayout,
    side: &SideViewGeometry,
    front: &FrontViewGeometry,
    top: &TopViewGeometry,
) -> ViewBox {
    let min_x = side.base.x.min(front.base.x).min(top.base.x) - OUTER_PADDING;
    let max_x = side.base.right().max(front.base.right()).max(top.base.right())
        + OUTER_PADDING
        + VIEW_BOX_RIGHT_EXTRA;
    let min_y = TOP_PADDING - OUTER_PADDING;
    let max_y = layout.floor_y + OUTER_PADDING + VIEW_BOX_BOTTOM_EXTRA;
    ViewBox {
        min_x,
        min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    }
}
