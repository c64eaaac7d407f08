use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

fn random_rect(rng: &mut StdRng) -> Rect {
    Rect::new(
        rng.random_range(-500.0..500.0),
        rng.random_range(-500.0..500.0),
        rng.random_range(1.0..300.0),
        rng.random_range(1.0..300.0),
    )
}

#[test]
fn overlapping_rects_collide() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(50.0, 50.0, 100.0, 100.0);
    assert!(check_collision(&a, &b, 0.0));
}

#[test]
fn contained_rect_collides() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
    assert!(check_collision(&outer, &inner, 0.0));
    assert!(check_collision(&inner, &outer, 0.0));
}

#[test]
fn edge_touching_rects_collide() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let right = Rect::new(100.0, 0.0, 100.0, 100.0);
    let below = Rect::new(0.0, 100.0, 100.0, 100.0);
    assert!(check_collision(&a, &right, 0.0));
    assert!(check_collision(&a, &below, 0.0));
}

#[test]
fn one_unit_gap_does_not_collide() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let right = Rect::new(101.0, 0.0, 100.0, 100.0);
    let below = Rect::new(0.0, 101.0, 100.0, 100.0);
    assert!(!check_collision(&a, &right, 0.0));
    assert!(!check_collision(&a, &below, 0.0));
}

#[test]
fn padding_closes_small_gaps() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(105.0, 0.0, 100.0, 100.0);
    assert!(!check_collision(&a, &b, 0.0));
    assert!(!check_collision(&a, &b, 4.0));
    assert!(check_collision(&a, &b, 5.0));
    assert!(check_collision(&a, &b, 10.0));
}

#[test]
fn diagonal_separation_does_not_collide() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(20.0, 20.0, 10.0, 10.0);
    assert!(!check_collision(&a, &b, 0.0));
}

#[test]
fn collision_is_symmetric_sweep() {
    let mut rng = StdRng::seed_from_u64(0xc011);
    for _ in 0..2000 {
        let a = random_rect(&mut rng);
        let b = random_rect(&mut rng);
        let padding = rng.random_range(0.0..50.0);
        assert_eq!(check_collision(&a, &b, padding), check_collision(&b, &a, padding), "{a:?} vs {b:?} p={padding}");
    }
}

#[test]
fn padding_never_removes_a_collision_sweep() {
    let mut rng = StdRng::seed_from_u64(0xbad);
    for _ in 0..2000 {
        let a = random_rect(&mut rng);
        let b = random_rect(&mut rng);
        if check_collision(&a, &b, 0.0) {
            assert!(check_collision(&a, &b, rng.random_range(0.0..50.0)));
        }
    }
}

#[test]
fn collides_with_any_checks_every_rect() {
    let existing = [Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(100.0, 100.0, 10.0, 10.0)];
    assert!(collides_with_any(&Rect::new(105.0, 105.0, 10.0, 10.0), &existing, 0.0));
    assert!(!collides_with_any(&Rect::new(50.0, 50.0, 10.0, 10.0), &existing, 0.0));
    assert!(!collides_with_any(&Rect::new(50.0, 50.0, 10.0, 10.0), &[], 0.0));
}
