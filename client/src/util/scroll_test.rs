use super::*;

#[test]
fn ratio_tracks_position() {
    assert!((scroll_ratio(0.0, 2_000.0, 1_000.0) - 0.0).abs() < f64::EPSILON);
    assert!((scroll_ratio(500.0, 2_000.0, 1_000.0) - 0.5).abs() < f64::EPSILON);
    assert!((scroll_ratio(1_000.0, 2_000.0, 1_000.0) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn ratio_is_clamped() {
    assert!((scroll_ratio(-40.0, 2_000.0, 1_000.0) - 0.0).abs() < f64::EPSILON);
    assert!((scroll_ratio(1_200.0, 2_000.0, 1_000.0) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn non_scrolling_page_reports_zero() {
    assert!(scroll_ratio(0.0, 800.0, 800.0).abs() < f64::EPSILON);
    assert!(scroll_ratio(10.0, 600.0, 800.0).abs() < f64::EPSILON);
    assert!(scroll_ratio(f64::NAN, 2_000.0, 800.0).abs() < f64::EPSILON);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn current_ratio_is_zero_outside_browser() {
    assert!(current_ratio().abs() < f64::EPSILON);
}
