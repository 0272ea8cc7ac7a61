//! # Side-View Layout Solver
//!
//! Lays the assembly out in the sagittal plane: depth runs along X, height
//! runs down Y, and everything rests on the shared floor line. This view
//! owns the canonical vertical extents and the tilt geometry; the front and
//! top projectors derive their placements from what is solved here.
//!
//! The stand column is anchored by its rear-bottom corner at a fixed X and
//! rises at the configured angle. The neck, backpack, and panel hang off
//! the column's top, shifted by the lift after clamping.

use serde::{Deserialize, Serialize};
use standkit_core::shapes::{Part, PartShape, Point, Quad, Rect};
use tracing::debug;

use crate::center_of_gravity;
use crate::dimensions::DimensionModel;
use crate::layout::{ViewLayout, STAND_REAR_ANCHOR_X};

/// VESA neck outline in the side view.
///
/// The axis-aligned fields describe the unsheared bracket; `poly_points`
/// is the drawn quadrilateral whose rear edge tracks the stand's slope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeckGeometry {
    /// X of the left (front) edge
    pub x: f64,
    /// Y of the top edge
    pub y: f64,
    /// Depth front to back
    pub width: f64,
    /// Height
    pub height: f64,
    /// Corners in drawing order: top-left, top-right, bottom-right,
    /// bottom-left
    pub poly_points: Quad,
}

impl NeckGeometry {
    /// The axis-aligned portion as a plain rectangle
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Solved side-view geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideViewGeometry {
    /// View anchor on the floor line
    pub origin: Point,
    /// Y of the floor line
    pub floor_y: f64,
    /// Base plate resting on the floor
    pub base: Rect,
    /// Bounding rectangle of the stand column
    pub stand: Rect,
    /// Stand corners in order: front-bottom, rear-bottom, rear-top,
    /// front-top
    pub stand_poly_points: Quad,
    /// Union of the panel and backpack extents
    pub screen: Rect,
    /// Display panel slab
    pub panel: Rect,
    /// Electronics housing behind the panel
    pub backpack: Rect,
    /// VESA bracket joining column and display
    pub vesa_neck: NeckGeometry,
    /// Tilt pivot: one third into the screen thickness, centered on the
    /// panel height
    pub pivot: Point,
    /// X of the first thickness reference line
    pub thickness_line1: f64,
    /// X of the second thickness reference line
    pub thickness_line2: f64,
    /// Floor contact of the backward-tilt ray
    pub point_a: Point,
    /// Floor contact of the forward-tilt ray
    pub point_b: Point,
    /// X of the stand's front face at the floor
    pub stand_front_bottom_x: f64,
    /// X of the stand's rear face at the floor
    pub stand_rear_bottom_x: f64,
    /// Centroid of the stand quadrilateral
    pub stand_cg: Point,
    /// Volume of the stand column as a box
    pub stand_volume: f64,
    /// Gap between stand top and neck after lift clamping; negative means
    /// the neck overlaps the column
    pub total_physical_gap: f64,
    /// Upper bound on the lift before the panel's bottom reaches the base
    pub max_lifting_offset: f64,
    /// Volume-weighted center of gravity of the whole assembly
    pub combined_cg: Point,
}

impl SideViewGeometry {
    /// Solves the sagittal layout for `dims` inside the shared frame.
    pub fn solve(dims: &DimensionModel, layout: &ViewLayout) -> Self {
        let origin = layout.side_view_origin;
        let floor_y = layout.floor_y;
        let total_screen_thickness = dims.total_screen_thickness();

        let stand_angle_rad = dims.stand_base_angle.to_radians();
        let stand_top_x_offset = dims.stand_height * stand_angle_rad.cos();
        let stand_top_y_offset = -dims.stand_height * stand_angle_rad.sin();

        let stand_rear_bottom_x = origin.x + STAND_REAR_ANCHOR_X;
        let stand_front_bottom_x = stand_rear_bottom_x - dims.stand_depth;

        let base = Rect::new(
            stand_front_bottom_x - dims.stand_front_offset,
            floor_y - dims.base_height,
            dims.base_depth,
            dims.base_height,
        );

        let p1 = Point::new(stand_front_bottom_x, base.y);
        let p2 = Point::new(stand_rear_bottom_x, base.y);
        let p3 = Point::new(p2.x + stand_top_x_offset, base.y + stand_top_y_offset);
        let p4 = Point::new(p1.x + stand_top_x_offset, base.y + stand_top_y_offset);
        let stand_poly_points = Quad::new([p1, p2, p3, p4]);

        // The lift may not push the panel's bottom edge below the base top.
        let max_lifting_offset = base.y - p4.y + dims.stand_to_neck_gap
            - dims.vesa_neck_height / 2.0
            - dims.panel_height / 2.0;
        let clamped_lift = 0f64.max(max_lifting_offset.min(dims.lifting_offset));
        let total_physical_gap = dims.stand_to_neck_gap - clamped_lift;

        let neck_top_y = p4.y - total_physical_gap;
        let neck_bottom_y = neck_top_y + dims.vesa_neck_height;

        // Shear slope of the stand's front face p1 -> p4. A collapsed
        // column (p4 level with p1) gets no shear instead of dividing by
        // zero.
        let face_dy = p4.y - p1.y;
        let dx_dy = if face_dy == 0.0 {
            0.0
        } else {
            (p4.x - p1.x) / face_dy
        };

        let neck_tr = Point::new(p4.x + (neck_top_y - p4.y) * dx_dy, neck_top_y);
        let neck_br = Point::new(p4.x + (neck_bottom_y - p4.y) * dx_dy, neck_bottom_y);
        let neck_tl = Point::new(neck_tr.x - dims.vesa_neck_depth, neck_top_y);
        let neck_bl = Point::new(neck_tl.x, neck_bottom_y);
        let vesa_neck = NeckGeometry {
            x: neck_tl.x,
            y: neck_top_y,
            width: dims.vesa_neck_depth,
            height: dims.vesa_neck_height,
            poly_points: Quad::new([neck_tl, neck_tr, neck_br, neck_bl]),
        };

        let neck_center_y = neck_top_y + dims.vesa_neck_height / 2.0;
        let backpack = Rect::new(
            neck_tl.x - dims.backpack_thickness,
            neck_center_y - dims.backpack_height / 2.0,
            dims.backpack_thickness,
            dims.backpack_height,
        );
        let panel = Rect::new(
            backpack.x - dims.panel_thickness,
            neck_center_y - dims.panel_height / 2.0,
            dims.panel_thickness,
            dims.panel_height,
        );

        let screen_top = panel.y.min(backpack.y);
        let screen = Rect::new(
            panel.x,
            screen_top,
            total_screen_thickness,
            panel.bottom().max(backpack.bottom()) - screen_top,
        );

        let pivot = Point::new(
            panel.x + total_screen_thickness / 3.0,
            panel.y + panel.height / 2.0,
        );
        let thickness_line1 = panel.x + total_screen_thickness / 3.0;
        let thickness_line2 = panel.x + (2.0 * total_screen_thickness) / 3.0;

        let point_a = floor_intersection(pivot, -dims.tilt_backward_angle, floor_y);
        let point_b = floor_intersection(pivot, dims.tilt_forward_angle, floor_y);

        let stand = Rect::new(
            p1.x.min(p4.x),
            p4.y,
            dims.stand_depth,
            stand_top_y_offset.abs(),
        );

        let stand_volume = dims.stand_width * dims.stand_depth * dims.stand_height;
        let stand_cg = Point::new(
            (p1.x + p2.x + p3.x + p4.x) / 4.0,
            (p1.y + p3.y) / 2.0,
        );

        let combined_cg = center_of_gravity::combined_center(
            &base,
            &panel,
            &backpack,
            &vesa_neck.rect(),
            stand_volume,
            stand_cg,
            dims,
        );

        debug!(
            "Side view solved: floor_y={}, pivot=({}, {}), max_lift={}",
            floor_y, pivot.x, pivot.y, max_lifting_offset
        );

        Self {
            origin,
            floor_y,
            base,
            stand,
            stand_poly_points,
            screen,
            panel,
            backpack,
            vesa_neck,
            pivot,
            thickness_line1,
            thickness_line2,
            point_a,
            point_b,
            stand_front_bottom_x,
            stand_rear_bottom_x,
            stand_cg,
            stand_volume,
            total_physical_gap,
            max_lifting_offset,
            combined_cg,
        }
    }

    /// Outline of `part` in this view: quadrilaterals for the stand column
    /// and neck, rectangles for everything else
    pub fn part_shape(&self, part: Part) -> PartShape {
        match part {
            Part::Base => PartShape::Rectangle(self.base),
            Part::Stand => PartShape::Quadrilateral(self.stand_poly_points),
            Part::VesaNeck => PartShape::Quadrilateral(self.vesa_neck.poly_points),
            Part::Backpack => PartShape::Rectangle(self.backpack),
            Part::Panel => PartShape::Rectangle(self.panel),
        }
    }
}

/// Floor contact of a ray cast from `pivot` at `angle_deg` from vertical.
///
/// Positive angles lean toward the viewer's right. A pivot at or below the
/// floor degenerates to the pivot's own X on the floor line.
pub fn floor_intersection(pivot: Point, angle_deg: f64, floor_y: f64) -> Point {
    if pivot.y >= floor_y {
        return Point::new(pivot.x, floor_y);
    }
    let delta_y = floor_y - pivot.y;
    let delta_x = delta_y * angle_deg.to_radians().tan();
    Point::new(pivot.x + delta_x, floor_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn solve_default() -> SideViewGeometry {
        let dims = DimensionModel::default();
        let layout = ViewLayout::from_model(&dims);
        SideViewGeometry::solve(&dims, &layout)
    }

    #[test]
    fn test_vertical_stand_corners() {
        let side = solve_default();
        let [p1, p2, p3, p4] = side.stand_poly_points.points;
        assert!(close(p1.x, 550.0) && close(p1.y, 1195.63));
        assert!(close(p2.x, 600.0) && close(p2.y, 1195.63));
        assert!(close(p3.x, 600.0) && close(p3.y, 895.63));
        assert!(close(p4.x, 550.0) && close(p4.y, 895.63));
        assert_eq!(side.stand_rear_bottom_x, 600.0);
        assert_eq!(side.stand_front_bottom_x, 550.0);
    }

    #[test]
    fn test_base_rests_on_floor() {
        let side = solve_default();
        assert!(close(side.base.x, 400.0));
        assert!(close(side.base.bottom(), side.floor_y));
        assert_eq!(side.base.width, 243.5);
        assert_eq!(side.base.height, 5.0);
    }

    #[test]
    fn test_neck_and_display_stack() {
        let side = solve_default();
        assert!(close(side.vesa_neck.x, 535.0));
        assert!(close(side.vesa_neck.y, 910.63));
        assert!(close(side.backpack.x, 474.0));
        assert!(close(side.backpack.y, 781.33));
        assert!(close(side.panel.x, 467.0));
        assert!(close(side.panel.y, 719.015));
        assert!(close(side.screen.x, 467.0));
        assert_eq!(side.screen.width, 68.0);
        assert!(close(side.screen.height, 412.63));
    }

    #[test]
    fn test_pivot_and_thickness_lines() {
        let side = solve_default();
        assert!(close(side.pivot.x, 489.6666666666667));
        assert!(close(side.pivot.y, 925.33));
        assert_eq!(side.thickness_line1, side.pivot.x);
        assert!(close(side.thickness_line2, 512.3333333333334));
    }

    #[test]
    fn test_tilt_contact_points() {
        let side = solve_default();
        assert!(close(side.point_a.x, 415.9002539903786));
        assert!(close(side.point_b.x, 563.4330793429548));
        assert_eq!(side.point_a.y, side.floor_y);
        assert_eq!(side.point_b.y, side.floor_y);
    }

    #[test]
    fn test_stand_centroid_and_volume() {
        let side = solve_default();
        assert_eq!(side.stand_volume, 750_000.0);
        assert!(close(side.stand_cg.x, 575.0));
        assert!(close(side.stand_cg.y, 1045.63));
    }

    #[test]
    fn test_lift_bound_for_defaults() {
        let side = solve_default();
        assert!(close(side.max_lifting_offset, 63.985));
        assert!(close(side.total_physical_gap, -15.0));
    }

    #[test]
    fn test_excessive_lift_is_clamped() {
        let mut dims = DimensionModel::default();
        dims.lifting_offset = 10_000.0;
        let layout = ViewLayout::from_model(&dims);
        let side = SideViewGeometry::solve(&dims, &layout);
        // At the clamp the panel's bottom edge sits exactly on the base top.
        assert!(close(side.panel.bottom(), side.base.y));
        assert!(close(
            side.total_physical_gap,
            dims.stand_to_neck_gap - side.max_lifting_offset
        ));
    }

    #[test]
    fn test_negative_lift_treated_as_zero() {
        let mut dims = DimensionModel::default();
        dims.lifting_offset = -50.0;
        let layout = ViewLayout::from_model(&dims);
        let side = SideViewGeometry::solve(&dims, &layout);
        let baseline = solve_default();
        assert_eq!(side.vesa_neck.y, baseline.vesa_neck.y);
        assert_eq!(side.total_physical_gap, baseline.total_physical_gap);
    }

    #[test]
    fn test_leaning_stand_shears_neck() {
        let mut dims = DimensionModel::default();
        dims.stand_base_angle = 75.0;
        dims.lifting_offset = 40.0;
        let layout = ViewLayout::from_model(&dims);
        let side = SideViewGeometry::solve(&dims, &layout);
        let [p1, _, _, p4] = side.stand_poly_points.points;
        assert!(close(p4.x, 627.6457135307562));
        assert!(close(p4.y, 905.8522521132796));
        assert!(close(side.max_lifting_offset, 53.76274788672049));
        assert!(close(side.total_physical_gap, -55.0));
        assert!(close(side.vesa_neck.x, 597.9085079470444));
        assert!(close(side.vesa_neck.y, 960.8522521132796));
        let [_, tr, br, _] = side.vesa_neck.poly_points.points;
        assert!(close(tr.x, 612.9085079470444));
        assert!(close(br.x, 605.0308016895694));
        assert!(close(br.y, 990.2522521132796));
        // Rear edge of the neck follows the same slope as the front face.
        let face_slope = (p4.x - p1.x) / (p4.y - p1.y);
        let neck_slope = (br.x - tr.x) / (br.y - tr.y);
        assert!(close(face_slope, neck_slope));
    }

    #[test]
    fn test_collapsed_stand_has_no_shear() {
        let mut dims = DimensionModel::default();
        dims.stand_height = 0.0;
        let layout = ViewLayout::from_model(&dims);
        let side = SideViewGeometry::solve(&dims, &layout);
        let [p1, _, _, p4] = side.stand_poly_points.points;
        assert_eq!(p1.y, p4.y);
        assert!(side.vesa_neck.x.is_finite());
        assert!(side.vesa_neck.poly_points.points[1].x.is_finite());
        assert_eq!(side.vesa_neck.poly_points.points[1].x, p4.x);
    }

    #[test]
    fn test_floor_intersection_symmetric_tilts() {
        let pivot = Point::new(100.0, 50.0);
        let left = floor_intersection(pivot, -30.0, 150.0);
        let right = floor_intersection(pivot, 30.0, 150.0);
        assert!(close(pivot.x - left.x, right.x - pivot.x));
        assert_eq!(left.y, 150.0);
    }

    #[test]
    fn test_floor_intersection_pivot_below_floor() {
        let pivot = Point::new(100.0, 200.0);
        let hit = floor_intersection(pivot, 45.0, 150.0);
        assert_eq!(hit, Point::new(100.0, 150.0));
    }

    #[test]
    fn test_part_shapes_tagged_by_variant() {
        let side = solve_default();
        assert!(matches!(side.part_shape(Part::Base), PartShape::Rectangle(_)));
        assert!(matches!(
            side.part_shape(Part::Stand),
            PartShape::Quadrilateral(_)
        ));
        assert!(matches!(
            side.part_shape(Part::VesaNeck),
            PartShape::Quadrilateral(_)
        ));
        let panel_bbox = side.part_shape(Part::Panel).bounding_box();
        assert_eq!(panel_bbox, side.panel);
    }

    #[test]
    fn test_vertical_stand_quad_matches_bounding_rect() {
        let side = solve_default();
        let bbox = side.stand_poly_points.bounding_box();
        assert!(close(bbox.x, side.stand.x));
        assert!(close(bbox.y, side.stand.y));
        assert!(close(bbox.width, side.stand.width));
        assert!(close(bbox.height, side.stand.height));
    }
}
