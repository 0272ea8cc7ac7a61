//! Front-view projector.
//!
//! Re-projects the solved side view onto the frontal plane. Every part is
//! centered on the assembly centerline at its configured width, while the
//! vertical placements are taken from the side view unchanged so the two
//! elevations always agree.

use serde::{Deserialize, Serialize};
use standkit_core::shapes::{Part, PartShape, Point, Rect};
use tracing::debug;

use crate::dimensions::DimensionModel;
use crate::layout::ViewLayout;
use crate::side_view::SideViewGeometry;

/// Solved front-view geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontViewGeometry {
    /// View anchor on the floor line
    pub origin: Point,
    /// Y of the floor line
    pub floor_y: f64,
    /// X of the assembly centerline
    pub center_x: f64,
    /// Base plate resting on the floor
    pub base: Rect,
    /// Stand column from its top edge down to the base
    pub stand: Rect,
    /// Display panel slab
    pub panel: Rect,
    /// Electronics housing
    pub backpack: Rect,
    /// VESA bracket
    pub vesa_neck: Rect,
    /// Center of gravity on the centerline, at the side view's height
    pub combined_cg: Point,
}

impl FrontViewGeometry {
    /// Projects the solved side view onto the frontal plane.
    pub fn project(dims: &DimensionModel, side: &SideViewGeometry, layout: &ViewLayout) -> Self {
        let origin = layout.front_view_origin;
        let floor_y = layout.floor_y;
        let center_x = origin.x + dims.screen_width / 2.0;

        let base = Rect::new(
            center_x - dims.base_width / 2.0,
            floor_y - dims.base_height,
            dims.base_width,
            dims.base_height,
        );

        // The neck sits the physical gap below the column top, so adding
        // the gap back recovers the column top; the lift moves the display
        // stack, never the column.
        let stand_top_y = side.vesa_neck.y + side.total_physical_gap;
        let stand = Rect::new(
            center_x - dims.stand_width / 2.0,
            stand_top_y,
            dims.stand_width,
            floor_y - stand_top_y - dims.base_height,
        );

        let vesa_neck = Rect::new(
            center_x - dims.vesa_neck_width / 2.0,
            side.vesa_neck.y,
            dims.vesa_neck_width,
            dims.vesa_neck_height,
        );
        let backpack = Rect::new(
            center_x - dims.backpack_width / 2.0,
            side.backpack.y,
            dims.backpack_width,
            dims.backpack_height,
        );
        let panel = Rect::new(origin.x, side.panel.y, dims.screen_width, dims.panel_height);

        let combined_cg = Point::new(center_x, side.combined_cg.y);

        debug!(
            "Front view projected: center_x={}, stand_top_y={}",
            center_x, stand_top_y
        );

        Self {
            origin,
            floor_y,
            center_x,
            base,
            stand,
            panel,
            backpack,
            vesa_neck,
            combined_cg,
        }
    }

    /// Outline of `part` in this view; everything is axis-aligned here
    pub fn part_shape(&self, part: Part) -> PartShape {
        match part {
            Part::Base => PartShape::Rectangle(self.base),
            Part::Stand => PartShape::Rectangle(self.stand),
            Part::VesaNeck => PartShape::Rectangle(self.vesa_neck),
            Part::Backpack => PartShape::Rectangle(self.backpack),
            Part::Panel => PartShape::Rectangle(self.panel),
        }
    }
}
