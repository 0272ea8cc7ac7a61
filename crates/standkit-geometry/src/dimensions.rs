//! The dimension model, the engine's sole input.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat record of the physical measurements driving every view.
///
/// Lengths are millimeters, angles are degrees. The model is treated as an
/// immutable value: the engine derives a fresh snapshot from it and caches
/// by structural equality, so edits replace the whole model rather than
/// mutating it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionModel {
    /// Panel width across the front
    pub screen_width: f64,
    /// Panel height
    pub panel_height: f64,
    /// Panel depth front to back
    pub panel_thickness: f64,
    /// Backpack height
    pub backpack_height: f64,
    /// Backpack width across the front
    pub backpack_width: f64,
    /// Backpack depth front to back
    pub backpack_thickness: f64,
    /// VESA neck height
    pub vesa_neck_height: f64,
    /// VESA neck depth front to back
    pub vesa_neck_depth: f64,
    /// VESA neck width across the front
    pub vesa_neck_width: f64,
    /// Stand column length along its long axis
    pub stand_height: f64,
    /// Nominal vertical gap between the stand top and the neck; negative
    /// values let the neck overlap the column
    pub stand_to_neck_gap: f64,
    /// Height-adjustment travel of the display down the column from its
    /// topmost position; clamped so the panel never reaches the base
    pub lifting_offset: f64,
    /// Stand column width across the front
    pub stand_width: f64,
    /// Stand column depth front to back
    pub stand_depth: f64,
    /// Distance from the stand's front face to the base's front edge
    pub stand_front_offset: f64,
    /// Base plate width across the front
    pub base_width: f64,
    /// Base plate depth front to back
    pub base_depth: f64,
    /// Base plate height
    pub base_height: f64,
    /// Maximum backward tilt of the display, degrees from vertical
    pub tilt_backward_angle: f64,
    /// Maximum forward tilt of the display, degrees from vertical
    pub tilt_forward_angle: f64,
    /// Swivel range to either side, degrees
    pub swivel_angle: f64,
    /// Plan-view distance from the stand's rear face to the swivel axis
    pub swivel_pivot_offset: f64,
    /// Angle between the stand column and the floor, degrees; 90 is vertical
    pub stand_base_angle: f64,
    /// Presentation-only label nudges keyed per view and dimension; carried
    /// for the editing layer, never read by the engine
    pub label_offsets: BTreeMap<String, f64>,
}

impl DimensionModel {
    /// Combined panel plus backpack depth
    pub fn total_screen_thickness(&self) -> f64 {
        self.panel_thickness + self.backpack_thickness
    }
}

impl Default for DimensionModel {
    /// The shipped configuration: a 32-inch-class display on a
    /// 220 x 243.5 mm base.
    fn default() -> Self {
        Self {
            screen_width: 718.0,
            panel_height: 412.63,
            panel_thickness: 7.0,
            backpack_height: 288.0,
            backpack_width: 437.0,
            backpack_thickness: 61.0,
            vesa_neck_height: 29.4,
            vesa_neck_depth: 15.0,
            vesa_neck_width: 40.0,
            stand_height: 300.0,
            stand_to_neck_gap: -15.0,
            lifting_offset: 0.0,
            stand_width: 50.0,
            stand_depth: 50.0,
            stand_front_offset: 150.0,
            base_width: 220.0,
            base_depth: 243.5,
            base_height: 5.0,
            tilt_backward_angle: 15.0,
            tilt_forward_angle: 15.0,
            swivel_angle: 25.0,
            swivel_pivot_offset: 25.0,
            stand_base_angle: 90.0,
            label_offsets: default_label_offsets(),
        }
    }
}

/// Shipped label placements, tuned by hand against the default dimensions.
fn default_label_offsets() -> BTreeMap<String, f64> {
    [
        ("front_screenWidth", -180.0),
        ("front_backpackWidth", -220.0),
        ("front_panelHeight", 120.0),
        ("front_baseWidth", 50.0),
        ("front_standWidth", -300.0),
        ("front_neckWidth", -300.0),
        ("front_backpackHeight", 185.0),
        ("side_panelThickness", -180.0),
        ("side_backpackThickness", -180.0),
        ("side_neckDepth", -180.0),
        ("side_standDepth", 30.0),
        ("side_baseDepth", 50.0),
        ("side_frontOffset", 30.0),
        ("side_backpackHeight", -60.0),
        ("side_neckHeight", 60.0),
        ("side_standHeight", 110.0),
        ("side_gap", 60.0),
        ("side_baseHeight", 100.0),
        ("top_baseWidth", -60.0),
        ("top_baseDepth", -150.0),
        ("top_pivotOffset", -150.0),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let dims = DimensionModel::default();
        assert_eq!(dims.screen_width, 718.0);
        assert_eq!(dims.panel_height, 412.63);
        assert_eq!(dims.base_depth, 243.5);
        assert_eq!(dims.stand_to_neck_gap, -15.0);
        assert_eq!(dims.stand_base_angle, 90.0);
        assert_eq!(dims.swivel_angle, 25.0);
        assert_eq!(dims.label_offsets.len(), 21);
    }

    #[test]
    fn test_total_screen_thickness() {
        let dims = DimensionModel::default();
        assert_eq!(dims.total_screen_thickness(), 68.0);
    }

    #[test]
    fn test_serde_uses_camel_case_keys() {
        let dims = DimensionModel::default();
        let json = serde_json::to_value(&dims).unwrap();
        assert_eq!(json["screenWidth"], 718.0);
        assert_eq!(json["vesaNeckHeight"], 29.4);
        assert_eq!(json["swivelPivotOffset"], 25.0);
        assert_eq!(json["labelOffsets"]["side_standDepth"], 30.0);
        assert!(json.get("screen_width").is_none());
    }

    #[test]
    fn test_serde_round_trip_preserves_model() {
        let mut dims = DimensionModel::default();
        dims.stand_base_angle = 75.0;
        dims.lifting_offset = 40.0;
        let json = serde_json::to_string(&dims).unwrap();
        let back: DimensionModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dims);
    }
}
