#![allow(clippy::float_cmp)]

use super::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Degenerate inputs
// =============================================================

#[test]
fn empty_input_produces_no_path() {
    assert!(smooth_path(&[]).is_empty());
}

#[test]
fn single_point_produces_no_path() {
    assert!(smooth_path(&[p(5.0, 5.0)]).is_empty());
}

#[test]
fn two_points_produce_move_and_one_quad() {
    let path = smooth_path(&[p(0.0, 0.0), p(10.0, 0.0)]);
    assert_eq!(
        path,
        vec![
            PathSeg::MoveTo(p(0.0, 0.0)),
            PathSeg::QuadTo { ctrl: p(0.0, 0.0), to: p(10.0, 0.0) },
        ]
    );
}

// =============================================================
// Midpoint construction
// =============================================================

#[test]
fn midpoint_averages_coordinates() {
    assert_eq!(midpoint(p(0.0, 0.0), p(4.0, 6.0)), p(2.0, 3.0));
}

#[test]
fn interior_quads_target_midpoints() {
    let points = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)];
    let path = smooth_path(&points);
    assert_eq!(
        path,
        vec![
            PathSeg::MoveTo(p(0.0, 0.0)),
            PathSeg::QuadTo { ctrl: p(10.0, 0.0), to: p(10.0, 5.0) },
            PathSeg::QuadTo { ctrl: p(10.0, 10.0), to: p(0.0, 10.0) },
        ]
    );
}

#[test]
fn three_points_skip_straight_to_the_closing_quad() {
    let points = [p(0.0, 0.0), p(6.0, 0.0), p(6.0, 6.0)];
    let path = smooth_path(&points);
    assert_eq!(
        path,
        vec![
            PathSeg::MoveTo(p(0.0, 0.0)),
            PathSeg::QuadTo { ctrl: p(6.0, 0.0), to: p(6.0, 6.0) },
        ]
    );
}

#[test]
fn closing_quad_is_controlled_by_the_second_to_last_point() {
    let points = [p(0.0, 0.0), p(2.0, 0.0), p(4.0, 0.0), p(6.0, 0.0), p(8.0, 0.0)];
    let path = smooth_path(&points);
    let last = path.last().unwrap();
    assert_eq!(*last, PathSeg::QuadTo { ctrl: p(6.0, 0.0), to: p(8.0, 0.0) });
}

#[test]
fn path_length_tracks_input_length() {
    let points: Vec<Point> = (0..10).map(|i| p(f64::from(i) * 5.0, 0.0)).collect();
    let path = smooth_path(&points);
    // MoveTo + one interior quad per point in 1..n-2 + the closing quad.
    assert_eq!(path.len(), 1 + (points.len() - 3) + 1);
}
