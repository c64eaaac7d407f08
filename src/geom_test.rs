#![allow(clippy::float_cmp)]

use super::*;

// --- Rect ---

#[test]
fn rect_edges_and_center() {
    let r = Rect::new(10.0, 20.0, 100.0, 50.0);
    assert_eq!(r.right(), 110.0);
    assert_eq!(r.bottom(), 70.0);
    assert_eq!(r.center(), Point::new(60.0, 45.0));
    assert_eq!(r.origin(), Point::new(10.0, 20.0));
}

#[test]
fn rect_centered_at_inverts_center() {
    let r = Rect::centered_at(Point::new(60.0, 45.0), 100.0, 50.0);
    assert_eq!(r, Rect::new(10.0, 20.0, 100.0, 50.0));
}

#[test]
fn rect_translated_keeps_size() {
    let r = Rect::new(0.0, 0.0, 30.0, 40.0).translated(-5.0, 7.0);
    assert_eq!(r, Rect::new(-5.0, 7.0, 30.0, 40.0));
}

#[test]
fn rect_with_origin_moves_corner_only() {
    let r = Rect::new(1.0, 2.0, 30.0, 40.0).with_origin(Point::new(100.0, 200.0));
    assert_eq!(r, Rect::new(100.0, 200.0, 30.0, 40.0));
}

#[test]
fn rect_contains_edges_inclusive() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(Point::new(0.0, 0.0)));
    assert!(r.contains(Point::new(10.0, 10.0)));
    assert!(r.contains(Point::new(5.0, 5.0)));
    assert!(!r.contains(Point::new(10.1, 5.0)));
    assert!(!r.contains(Point::new(5.0, -0.1)));
}

#[test]
fn rect_is_within_canvas() {
    assert!(Rect::new(0.0, 0.0, 4000.0, 4000.0).is_within(4000.0, 4000.0));
    assert!(Rect::new(3000.0, 3000.0, 100.0, 100.0).is_within(4000.0, 4000.0));
    assert!(!Rect::new(-1.0, 0.0, 10.0, 10.0).is_within(4000.0, 4000.0));
    assert!(!Rect::new(3950.0, 0.0, 100.0, 10.0).is_within(4000.0, 4000.0));
    assert!(!Rect::new(0.0, 3999.0, 10.0, 10.0).is_within(4000.0, 4000.0));
}

// --- ContainerRect ---

#[test]
fn container_local_and_page_are_inverse() {
    let c = ContainerRect::new(120.0, 64.0, 800.0, 600.0);
    let page = Point::new(300.0, 200.0);
    let local = c.to_local(page);
    assert_eq!(local, Point::new(180.0, 136.0));
    assert_eq!(c.to_page(local), page);
}

// --- PositionedItem ---

#[test]
fn positioned_item_serializes_flat_camel_case() {
    let item = PositionedItem::new("btn-1", Rect::new(1.0, 2.0, 3.0, 4.0));
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json, serde_json::json!({ "id": "btn-1", "x": 1.0, "y": 2.0, "width": 3.0, "height": 4.0 }));
    let back: PositionedItem = serde_json::from_value(json).unwrap();
    assert_eq!(back, item);
}

// --- bounding_box ---

#[test]
fn bounding_box_of_nothing_is_none() {
    assert!(bounding_box(Vec::<Rect>::new()).is_none());
}

#[test]
fn bounding_box_spans_all_rects() {
    let bbox = bounding_box([Rect::new(-150.0, 10.0, 100.0, 50.0), Rect::new(300.0, -20.0, 200.0, 40.0)]).unwrap();
    assert_eq!(bbox, Rect::new(-150.0, -20.0, 650.0, 80.0));
}
