use std::f64::consts::{FRAC_PI_2, PI};

use electric_border::perimeter::{clamp_radius, corner_point, rounded_rect_point, Point, RoundedRect};

fn close(a: Point, b: Point, eps: f64) -> bool {
    (a.x - b.x).abs() < eps && (a.y - b.y).abs() < eps
}

#[test]
fn corner_point_follows_the_circle() {
    let c = Point::new(10.0, 20.0);
    assert!(close(corner_point(c, 5.0, -FRAC_PI_2, FRAC_PI_2, 0.0), Point::new(10.0, 15.0), 1e-12));
    assert!(close(corner_point(c, 5.0, -FRAC_PI_2, FRAC_PI_2, 1.0), Point::new(15.0, 20.0), 1e-12));
    assert!(close(corner_point(c, 5.0, PI, FRAC_PI_2, 0.5), Point::new(10.0 - 5.0 * 0.5f64.sqrt(), 20.0 - 5.0 * 0.5f64.sqrt()), 1e-12));
}

#[test]
fn sharp_square_walks_clockwise() {
    let at = |t| rounded_rect_point(t, 0.0, 0.0, 100.0, 100.0, 0.0);
    assert!(close(at(0.0), Point::new(0.0, 0.0), 1e-9));
    assert!(close(at(0.125), Point::new(50.0, 0.0), 1e-9));
    assert!(close(at(0.25), Point::new(100.0, 0.0), 1e-9));
    assert!(close(at(0.5), Point::new(100.0, 100.0), 1e-9));
    assert!(close(at(0.75), Point::new(0.0, 100.0), 1e-9));
    assert!(close(at(0.875), Point::new(0.0, 50.0), 1e-9));
}

#[test]
fn starts_at_left_end_of_top_edge() {
    let p = rounded_rect_point(0.0, 40.0, 40.0, 400.0, 200.0, 40.0);
    assert!(close(p, Point::new(80.0, 40.0), 1e-9));
}

#[test]
fn equal_steps_give_equal_distances() {
    let points: Vec<Point> = (0..100)
        .map(|i| rounded_rect_point(i as f64 / 100.0, 0.0, 0.0, 400.0, 200.0, 40.0))
        .collect();
    let steps: Vec<f64> = points.windows(2).map(|w| w[0].distance(w[1])).collect();

    let mean = steps.iter().sum::<f64>() / steps.len() as f64;
    let var = steps.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / steps.len() as f64;
    let cv = var.sqrt() / mean;
    assert!(cv < 0.05, "coefficient of variation {cv}");

    let rect = RoundedRect::new(0.0, 0.0, 400.0, 200.0, 40.0).unwrap();
    assert!((mean - rect.perimeter() / 100.0).abs() < 0.1);
}

#[test]
fn outline_is_closed() {
    for &(w, h, r) in &[(400.0, 200.0, 40.0), (100.0, 40.0, 100.0), (50.0, 50.0, 0.0), (10.0, 300.0, 3.0), (64.0, 64.0, 32.0)] {
        let start = rounded_rect_point(0.0, 5.0, 7.0, w, h, r);
        let end = rounded_rect_point(1.0 - 1e-12, 5.0, 7.0, w, h, r);
        assert!(close(start, end, 1e-6), "{w}x{h} r{r}: {start:?} vs {end:?}");
        assert!(close(start, rounded_rect_point(1.0, 5.0, 7.0, w, h, r), 1e-9));
    }
}

#[test]
fn oversized_radius_is_clamped() {
    assert_eq!(clamp_radius(100.0, 100.0, 40.0), 20.0);
    assert_eq!(clamp_radius(-3.0, 100.0, 40.0), 0.0);
    assert_eq!(clamp_radius(f64::INFINITY, 100.0, 40.0), 20.0);

    let rect = RoundedRect::new(0.0, 0.0, 100.0, 40.0, 100.0).unwrap();
    assert_eq!(rect.radius(), 20.0);
    for i in 0..200 {
        let t = i as f64 / 200.0;
        let clamped = rounded_rect_point(t, 0.0, 0.0, 100.0, 40.0, 100.0);
        let explicit = rounded_rect_point(t, 0.0, 0.0, 100.0, 40.0, 20.0);
        assert!(close(clamped, explicit, 1e-12));
        assert!((-1e-9..=100.0 + 1e-9).contains(&clamped.x));
        assert!((-1e-9..=40.0 + 1e-9).contains(&clamped.y));
    }
}

#[test]
fn clamped_outline_does_not_fold_back() {
    // Stadium shape: x moves monotonically along the top and the bottom.
    let points: Vec<Point> = (0..=400)
        .map(|i| rounded_rect_point(i as f64 / 400.0, 0.0, 0.0, 100.0, 40.0, 100.0))
        .collect();
    for w in points.windows(2) {
        if w[0].y < 1e-9 && w[1].y < 1e-9 {
            assert!(w[1].x >= w[0].x);
        }
        if (w[0].y - 40.0).abs() < 1e-9 && (w[1].y - 40.0).abs() < 1e-9 {
            assert!(w[1].x <= w[0].x);
        }
    }
}

#[test]
fn arc_points_keep_their_radius() {
    let rect = RoundedRect::new(0.0, 0.0, 400.0, 200.0, 40.0).unwrap();
    let perimeter = rect.perimeter();
    // Middle of the top-right arc.
    let t = (320.0 + FRAC_PI_2 * 40.0 / 2.0) / perimeter;
    let p = rect.point_at(t);
    assert!((p.distance(Point::new(360.0, 40.0)) - 40.0).abs() < 1e-9);
    assert!(p.x > 360.0 && p.y < 40.0);
}

#[test]
fn perimeter_lengths() {
    let rect = RoundedRect::new(0.0, 0.0, 300.0, 150.0, 20.0).unwrap();
    assert!((rect.perimeter() - (2.0 * 260.0 + 2.0 * 110.0 + 2.0 * PI * 20.0)).abs() < 1e-9);
    assert!((rect.approx_perimeter() - (900.0 + 40.0 * PI)).abs() < 1e-9);
}

#[test]
fn degenerate_boxes_are_rejected() {
    assert!(RoundedRect::new(0.0, 0.0, 0.0, 10.0, 2.0).is_none());
    assert!(RoundedRect::new(0.0, 0.0, 10.0, -1.0, 2.0).is_none());
    assert!(RoundedRect::new(0.0, 0.0, f64::NAN, 10.0, 2.0).is_none());
    assert_eq!(rounded_rect_point(0.3, 4.0, 5.0, 0.0, 0.0, 10.0), Point::new(4.0, 5.0));
}
