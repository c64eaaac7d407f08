#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn zero_items_yield_nothing() {
    assert!(calculate_auto_layout_positions(0, 2000.0, 2000.0).is_empty());
}

#[test]
fn single_item_sits_at_canvas_center() {
    assert_eq!(calculate_auto_layout_positions(1, 2000.0, 1000.0), vec![Point::new(1000.0, 500.0)]);
}

#[test]
fn four_items_fill_two_by_two() {
    assert_eq!(
        calculate_auto_layout_positions(4, 2000.0, 2000.0),
        vec![
            Point::new(500.0, 500.0),
            Point::new(1500.0, 500.0),
            Point::new(500.0, 1500.0),
            Point::new(1500.0, 1500.0),
        ]
    );
}

#[test]
fn five_items_use_three_columns_two_rows() {
    let points = calculate_auto_layout_positions(5, 3000.0, 2000.0);
    assert_eq!(points.len(), 5);
    assert_eq!(points[0], Point::new(500.0, 500.0));
    assert_eq!(points[2], Point::new(2500.0, 500.0));
    assert_eq!(points[3], Point::new(500.0, 1500.0));
    assert_eq!(points[4], Point::new(1500.0, 1500.0));
}

#[test]
fn all_points_lie_inside_canvas() {
    for count in 1..50 {
        for p in calculate_auto_layout_positions(count, 1234.0, 567.0) {
            assert!(p.x > 0.0 && p.x < 1234.0);
            assert!(p.y > 0.0 && p.y < 567.0);
        }
    }
}

#[test]
fn seed_keeps_stored_and_fills_missing() {
    let stored = [Some(Point::new(120.0, 80.0)), None, Some(Point::new(0.5, 0.25)), None];
    let seeded = seed_positions(&stored, 2000.0, 2000.0);
    assert_eq!(
        seeded,
        vec![
            Point::new(120.0, 80.0),
            Point::new(500.0, 1000.0),
            Point::new(1000.0, 500.0),
            Point::new(1500.0, 1000.0),
        ]
    );
}

#[test]
fn seed_with_everything_stored_is_identity_for_pixels() {
    let stored = [Some(Point::new(10.0, 20.0)), Some(Point::new(30.0, 40.0))];
    assert_eq!(seed_positions(&stored, 500.0, 500.0), vec![Point::new(10.0, 20.0), Point::new(30.0, 40.0)]);
}

#[test]
fn seed_empty_input() {
    assert!(seed_positions(&[], 500.0, 500.0).is_empty());
}
