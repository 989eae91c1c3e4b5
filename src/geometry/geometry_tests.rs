use crate::geometry::{Quadrant, Rect, Vec2};

fn rect(x1: f64, y1: f64, x2: f64, y2: f64) -> Rect {
    Rect::new(Vec2::new(x1, y1), Vec2::new(x2, y2))
}

#[test]
fn test_contains_is_inclusive_on_both_edges() {
    let r = rect(1.0, 1.0, 10.0, 10.0);
    assert!(r.contains(Vec2::new(1.0, 1.0)));
    assert!(r.contains(Vec2::new(10.0, 10.0)));
    assert!(r.contains(Vec2::new(5.0, 7.5)));
    assert!(!r.contains(Vec2::new(0.999, 5.0)));
    assert!(!r.contains(Vec2::new(5.0, 10.001)));
    assert!(!r.contains(Vec2::new(f64::NAN, 5.0)));
}

#[test]
fn test_encloses() {
    let node = rect(2.0, 2.0, 5.0, 5.0);
    // outside area
    assert!(!rect(0.0, 0.0, 1.0, 1.0).encloses(&node));
    // overlapping area
    assert!(!rect(0.0, 0.0, 3.0, 3.0).encloses(&node));
    // exact coverage
    assert!(rect(2.0, 2.0, 5.0, 5.0).encloses(&node));
    // covering area
    assert!(rect(1.0, 1.0, 6.0, 6.0).encloses(&node));
}

#[test]
fn test_overlaps() {
    let node = rect(2.0, 2.0, 5.0, 5.0);
    assert!(!node.overlaps(&rect(0.0, 0.0, 1.0, 1.0)));
    assert!(node.overlaps(&rect(0.0, 0.0, 3.0, 3.0)));
    assert!(node.overlaps(&rect(2.0, 2.0, 5.0, 5.0)));
    assert!(node.overlaps(&rect(1.0, 1.0, 6.0, 6.0)));
    assert!(node.overlaps(&rect(3.0, 3.0, 4.0, 4.0)));
}

#[test]
fn test_overlaps_is_symmetric_and_excludes_shared_edges() {
    let a = rect(0.0, 0.0, 4.0, 4.0);
    let right = rect(4.0, 0.0, 8.0, 4.0);
    let below = rect(0.0, 4.0, 4.0, 8.0);
    let crossing = rect(3.0, 3.0, 6.0, 6.0);
    assert!(!a.overlaps(&right) && !right.overlaps(&a));
    assert!(!a.overlaps(&below) && !below.overlaps(&a));
    assert!(a.overlaps(&crossing) && crossing.overlaps(&a));
}

#[test]
fn test_intersects_includes_shared_edges() {
    let a = rect(0.0, 0.0, 4.0, 4.0);
    assert!(a.intersects(&rect(4.0, 0.0, 8.0, 4.0)));
    assert!(rect(0.0, 4.0, 4.0, 8.0).intersects(&a));
    assert!(a.intersects(&rect(4.0, 4.0, 5.0, 5.0)));
    assert!(a.intersects(&rect(1.0, 1.0, 2.0, 2.0)));
    assert!(!a.intersects(&rect(4.1, 0.0, 8.0, 4.0)));
    assert!(!rect(-3.0, -3.0, -0.5, 2.0).intersects(&a));
}

#[test]
fn test_quadrants_split_at_midpoint() {
    let r = rect(1.0, 1.0, 10.0, 10.0);
    let [nw, ne, sw, se] = r.quadrants();
    assert_eq!(nw, rect(1.0, 1.0, 5.5, 5.5));
    assert_eq!(ne, rect(5.5, 1.0, 10.0, 5.5));
    assert_eq!(sw, rect(1.0, 5.5, 5.5, 10.0));
    assert_eq!(se, rect(5.5, 5.5, 10.0, 10.0));
    for q in r.quadrants() {
        assert!(r.encloses(&q));
        assert_eq!(q.width(), r.width() / 2.0);
        assert_eq!(q.height(), r.height() / 2.0);
    }
}

#[test]
fn test_quadrant_of() {
    let r = rect(1.0, 1.0, 10.0, 10.0);
    assert_eq!(r.quadrant_of(Vec2::new(8.0, 2.0)), Some(Quadrant::NorthEast));
    assert_eq!(r.quadrant_of(Vec2::new(1.0, 1.0)), Some(Quadrant::NorthWest));
    assert_eq!(r.quadrant_of(Vec2::new(2.0, 9.0)), Some(Quadrant::SouthWest));
    assert_eq!(r.quadrant_of(Vec2::new(9.0, 9.0)), Some(Quadrant::SouthEast));
    // the midpoint belongs to every quadrant, the first one wins
    assert_eq!(r.quadrant_of(Vec2::new(5.5, 5.5)), Some(Quadrant::NorthWest));
    assert_eq!(r.quadrant_of(Vec2::new(11.0, 5.0)), None);
}

#[test]
fn test_around_and_validity() {
    let window = Rect::around(Vec2::new(4.0, 4.0), 2.0);
    assert_eq!(window, rect(2.0, 2.0, 6.0, 6.0));
    assert!(window.is_valid());
    assert!(!rect(5.0, 1.0, 1.0, 5.0).is_valid());
    assert!(!rect(0.0, f64::NAN, 1.0, 1.0).is_valid());
}

#[test]
fn test_vector_ops() {
    let a = Vec2::new(3.0, 4.0);
    assert_eq!(a.length(), 5.0);
    assert_eq!(a * 2.0, Vec2::new(6.0, 8.0));
    assert_eq!(a / 2.0, Vec2::new(1.5, 2.0));
    assert_eq!(-a, Vec2::new(-3.0, -4.0));
    assert_eq!(a - a, Vec2::ZERO);
    let mut b = Vec2::from((1.0, 1.0));
    b += a;
    assert_eq!(<(f64, f64)>::from(b), (4.0, 5.0));
}
