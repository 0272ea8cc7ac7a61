//! Volume-weighted center of gravity across the five parts.
//!
//! Each part is treated as a homogeneous box: its side-view rectangle
//! extruded by its front-view width. The leaning stand column is the
//! exception, contributing its quadrilateral centroid with a box volume.

use standkit_core::shapes::{Point, Rect};
use tracing::debug;

use crate::dimensions::DimensionModel;

/// Combined centroid of the assembly in side-view coordinates.
///
/// A zero total volume falls back to the origin so downstream consumers
/// never see NaN coordinates.
pub fn combined_center(
    base: &Rect,
    panel: &Rect,
    backpack: &Rect,
    vesa_neck: &Rect,
    stand_volume: f64,
    stand_cg: Point,
    dims: &DimensionModel,
) -> Point {
    let boxed_parts = [
        (panel, dims.screen_width),
        (backpack, dims.backpack_width),
        (vesa_neck, dims.vesa_neck_width),
        (base, dims.base_width),
    ];

    let mut total_volume = stand_volume;
    let mut weighted_x = stand_cg.x * stand_volume;
    let mut weighted_y = stand_cg.y * stand_volume;
    for (rect, width) in boxed_parts {
        let volume = rect.width * rect.height * width;
        total_volume += volume;
        weighted_x += (rect.x + rect.width / 2.0) * volume;
        weighted_y += (rect.y + rect.height / 2.0) * volume;
    }

    if total_volume == 0.0 {
        debug!("Zero total volume, center of gravity falls back to origin");
        return Point::new(0.0, 0.0);
    }
    Point::new(weighted_x / total_volume, weighted_y / total_volume)
}
