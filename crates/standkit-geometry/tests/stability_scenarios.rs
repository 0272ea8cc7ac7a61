//! Tip-over verdicts across swivel angles and base footprints.

use standkit_geometry::{compute_geometry, DimensionModel};

fn with_swivel(angle: f64) -> DimensionModel {
    DimensionModel {
        swivel_angle: angle,
        ..DimensionModel::default()
    }
}

#[test]
fn test_shipped_configuration_is_stable() {
    let snap = compute_geometry(&DimensionModel::default());
    assert!(snap.is_stable);
    assert_eq!(snap.is_stable, snap.top_view.is_stable);
}

#[test]
fn test_zero_swivel_is_stable() {
    assert!(compute_geometry(&with_swivel(0.0)).is_stable);
}

#[test]
fn test_swivel_sign_does_not_matter() {
    let positive = compute_geometry(&with_swivel(25.0));
    let negative = compute_geometry(&with_swivel(-25.0));
    assert_eq!(positive.is_stable, negative.is_stable);
    assert_eq!(positive.top_view.y_a, negative.top_view.y_a);
    assert_eq!(positive.top_view.y_b, negative.top_view.y_b);
}

#[test]
fn test_wide_swivel_tips_over() {
    // The default base keeps the sway circle contained up to 25 degrees;
    // beyond that the swung circle leaves the footprint sideways.
    assert!(compute_geometry(&with_swivel(25.0)).is_stable);
    assert!(!compute_geometry(&with_swivel(30.0)).is_stable);
    assert!(!compute_geometry(&with_swivel(45.0)).is_stable);
    assert!(!compute_geometry(&with_swivel(90.0)).is_stable);
}

#[test]
fn test_narrow_base_tips_over() {
    let dims = DimensionModel {
        base_width: 1.0,
        ..DimensionModel::default()
    };
    let snap = compute_geometry(&dims);
    assert!(!snap.is_stable);
}

#[test]
fn test_wider_base_restores_stability() {
    // 45 degrees of swivel is too much for the stock base but fine on a
    // deeper, wider one.
    let dims = DimensionModel {
        swivel_angle: 45.0,
        base_width: 400.0,
        base_depth: 400.0,
        ..DimensionModel::default()
    };
    let snap = compute_geometry(&dims);
    assert!(snap.is_stable);
}

#[test]
fn test_steeper_back_tilt_grows_sway_circle() {
    let gentle = compute_geometry(&DimensionModel::default());
    let steep = compute_geometry(&DimensionModel {
        tilt_backward_angle: 45.0,
        ..DimensionModel::default()
    });
    let gentle_radius = (gentle.top_view.y_a - gentle.top_view.y_b).abs() / 2.0;
    let steep_radius = (steep.top_view.y_a - steep.top_view.y_b).abs() / 2.0;
    assert!(steep_radius > gentle_radius);
    // The default footprint cannot contain the 45-degree back tilt.
    assert!(!steep.is_stable);
}

#[test]
fn test_swivel_angle_only_affects_verdict() {
    let narrow = compute_geometry(&with_swivel(25.0));
    let wide = compute_geometry(&with_swivel(45.0));
    // The drawing itself is swivel-independent; only the verdict flips.
    assert_eq!(narrow.side_view, wide.side_view);
    assert_eq!(narrow.top_view.y_a, wide.top_view.y_a);
    assert_eq!(narrow.view_box, wide.view_box);
    assert_ne!(narrow.is_stable, wide.is_stable);
}
