use proptest::prelude::*;
use vectorkit_designer::{fit_freehand, simplify, smooth_anchors, Anchor, Point};

fn noisy_wave() -> Vec<Anchor> {
    (0..400)
        .map(|i| {
            let t = i as f64 * 0.05;
            let jitter = ((i * 7919) % 13) as f64 * 0.01;
            Anchor::corner(Point::new(t * 10.0, (t * 2.0).sin() * 20.0 + jitter))
        })
        .collect()
}

#[test]
fn test_simplify_is_idempotent_on_wave() {
    let anchors = noisy_wave();
    let once = simplify(&anchors, 0.5);
    assert!(once.len() < anchors.len());
    assert_eq!(simplify(&once, 0.5), once);
}

#[test]
fn test_simplify_keeps_endpoints_and_handles() {
    let curved = Anchor::new(Point::new(5.0, 8.0), Point::new(4.0, 8.0), Point::new(6.0, 8.0));
    let anchors = vec![
        Anchor::corner(Point::new(0.0, 0.0)),
        curved,
        Anchor::corner(Point::new(10.0, 0.0)),
    ];
    let kept = simplify(&anchors, 1.0);
    assert_eq!(kept, anchors);
}

#[test]
fn test_non_positive_tolerance_keeps_everything() {
    let anchors = noisy_wave();
    assert_eq!(simplify(&anchors, 0.0), anchors);
    assert_eq!(simplify(&anchors, f64::NAN), anchors);
}

#[test]
fn test_freehand_tolerance_scales_with_stroke() {
    let points: Vec<Point> = noisy_wave().iter().map(|a| a.point).collect();
    let thin = fit_freehand(&points, 0.5);
    let thick = fit_freehand(&points, 4.0);
    assert!(thick.len() < thin.len());
    assert_eq!(thick.first().unwrap().point, points[0]);
    assert_eq!(thick.last().unwrap().point, *points.last().unwrap());
}

#[test]
fn test_closed_smoothing_curves_every_anchor() {
    let square = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ]
    .map(Anchor::corner);
    let smooth = smooth_anchors(&square, true);
    assert!(smooth.iter().all(|a| !a.is_corner()));
}

proptest! {
    #[test]
    fn simplify_twice_equals_once(
        pts in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 0..60),
        tolerance in 0.01f64..20.0,
    ) {
        let anchors: Vec<Anchor> = pts
            .iter()
            .map(|&(x, y)| Anchor::corner(Point::new(x, y)))
            .collect();
        let once = simplify(&anchors, tolerance);
        prop_assert_eq!(simplify(&once, tolerance), once);
    }
}
