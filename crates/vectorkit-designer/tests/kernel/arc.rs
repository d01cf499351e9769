use vectorkit_designer::{arc_anchors, arc_path, circumcircle, sample_arc, ArcPath, Point};

#[test]
fn test_collinear_points_have_no_circle() {
    assert!(circumcircle(Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)).is_none());
    assert!(circumcircle(Point::new(3.0, 3.0), Point::new(3.0, 3.0), Point::new(5.0, 1.0)).is_none());
}

#[test]
fn test_semicircle_flags() {
    let path = arc_path(Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(1.0, 1.0));
    assert_eq!(
        path,
        ArcPath::Arc {
            start: Point::new(0.0, 0.0),
            end: Point::new(2.0, 0.0),
            radius: 1.0,
            large_arc: false,
            sweep: false,
        }
    );
    assert_eq!(path.to_svg(), "M 0 0 A 1 1 0 0 0 2 0");
}

#[test]
fn test_three_quarter_arc_is_large() {
    let path = arc_path(Point::new(1.0, 0.0), Point::new(0.0, 1.0), Point::new(-1.0, 0.0));
    let ArcPath::Arc { large_arc, sweep, radius, .. } = path else {
        panic!("expected arc, got {path:?}");
    };
    assert!(large_arc);
    assert!(!sweep);
    assert_eq!(radius, 1.0);
}

#[test]
fn test_quarter_arc_is_small() {
    let path = arc_path(
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(0.5f64.sqrt(), 0.5f64.sqrt()),
    );
    let ArcPath::Arc { large_arc, sweep, .. } = path else {
        panic!("expected arc, got {path:?}");
    };
    assert!(!large_arc);
    assert!(sweep);
}

#[test]
fn test_collinear_arc_degrades_to_line() {
    let path = arc_path(Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(2.0, 0.0));
    assert_eq!(path.to_svg(), "M 0 0 L 4 0");
}

#[test]
fn test_sampled_arc_hits_endpoints_exactly() {
    let start = Point::new(0.3, 0.1);
    let end = Point::new(4.7, 2.2);
    let via = Point::new(2.0, -1.9);
    let samples = sample_arc(start, end, via, 16);
    assert_eq!(samples.len(), 17);
    assert_eq!(samples[0], start);
    assert_eq!(samples[16], end);

    let circle = circumcircle(start, end, via).unwrap();
    for p in &samples {
        assert!((p.distance_to(&circle.center) - circle.radius).abs() < 1e-9);
    }
}

#[test]
fn test_arc_anchors_lie_on_circle() {
    let anchors = arc_anchors(Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(1.0, 1.0));
    assert_eq!(anchors.len(), 3);
    assert_eq!(anchors[0].point, Point::new(0.0, 0.0));
    assert_eq!(anchors[2].point, Point::new(2.0, 0.0));
    assert!(anchors[1].point.distance_to(&Point::new(1.0, 1.0)) < 1e-12);
    assert_eq!(anchors[0].handle_in, anchors[0].point);
    assert_eq!(anchors[2].handle_out, anchors[2].point);
}
