use proptest::prelude::*;
use vectorkit_designer::{move_shape, rotate, scale, Anchor, Point, Shape};

fn assert_points_close(a: &[Anchor], b: &[Anchor], eps: f64) {
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b) {
        assert!(x.point.distance_to(&y.point) < eps, "{x:?} vs {y:?}");
        assert!(x.handle_in.distance_to(&y.handle_in) < eps);
        assert!(x.handle_out.distance_to(&y.handle_out) < eps);
    }
}

fn anchors(shape: &Shape) -> &[Anchor] {
    match shape {
        Shape::Pen(p) | Shape::Line(p) => &p.anchors,
        _ => panic!("not a path"),
    }
}

proptest! {
    #[test]
    fn rotate_then_unrotate_restores_path(
        pts in prop::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 1..12),
        cx in -500.0f64..500.0,
        cy in -500.0f64..500.0,
        angle in -10.0f64..10.0,
    ) {
        let path = Shape::pen(
            pts.iter().map(|&(x, y)| Anchor::corner(Point::new(x, y))).collect(),
            true,
        );
        let center = Point::new(cx, cy);
        let back = rotate(&rotate(&path, center, angle), center, -angle);
        assert_points_close(anchors(&back), anchors(&path), 1e-6);
    }

    #[test]
    fn rotate_then_unrotate_restores_box(
        x in -500.0f64..500.0,
        y in -500.0f64..500.0,
        w in 0.0f64..300.0,
        h in 0.0f64..300.0,
        angle in -10.0f64..10.0,
    ) {
        let rect = Shape::rectangle(x, y, w, h);
        let pivot = Point::new(17.0, -3.0);
        let back = rotate(&rotate(&rect, pivot, angle), pivot, -angle);
        let a = rect.frame_geometry().unwrap();
        let b = back.frame_geometry().unwrap();
        prop_assert!((a.x - b.x).abs() < 1e-6);
        prop_assert!((a.y - b.y).abs() < 1e-6);
        prop_assert_eq!(a.width, b.width);
        prop_assert_eq!(a.height, b.height);
        prop_assert!(b.rotation.abs() < 1e-12);
    }
}

#[test]
fn test_unit_scale_is_identity() {
    let shapes = vec![
        Shape::rectangle(1.5, 2.5, 10.0, 20.0),
        Shape::ellipse(0.0, 0.0, 3.0, 4.0),
        Shape::brush(vec![Point::new(0.1, 0.2), Point::new(0.3, 0.7)]),
        Shape::arc(Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(1.0, 1.0)),
        Shape::group(vec![Shape::polygon(5.0, 5.0, 10.0, 10.0, 6)]),
    ];
    for shape in &shapes {
        assert_eq!(&scale(shape, Point::new(123.4, -56.7), 1.0, 1.0), shape);
    }
}

#[test]
fn test_move_recurses_into_groups() {
    let group = Shape::group(vec![
        Shape::rectangle(0.0, 0.0, 1.0, 1.0),
        Shape::brush(vec![Point::new(2.0, 2.0)]),
    ]);
    let moved = move_shape(&group, 10.0, 5.0);
    assert_eq!(moved.id(), group.id());

    let children = moved.children();
    let frame = children[0].frame_geometry().unwrap();
    assert_eq!((frame.x, frame.y), (10.0, 5.0));
    match &children[1] {
        Shape::Brush(b) => assert_eq!(b.points, vec![Point::new(12.0, 7.0)]),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_transforms_leave_input_untouched() {
    let rect = Shape::rectangle(0.0, 0.0, 4.0, 4.0);
    let before = rect.clone();
    let _ = rotate(&rect, Point::ORIGIN, 1.0);
    let _ = scale(&rect, Point::ORIGIN, -2.0, 3.0);
    let _ = move_shape(&rect, 1.0, 1.0);
    assert_eq!(rect, before);
}

#[test]
fn test_scale_about_pivot_moves_points() {
    let path = Shape::pen(
        vec![
            Anchor::corner(Point::new(1.0, 1.0)),
            Anchor::corner(Point::new(3.0, 1.0)),
        ],
        false,
    );
    let scaled = scale(&path, Point::new(1.0, 1.0), 2.0, -1.0);
    let a = anchors(&scaled);
    assert_eq!(a[0].point, Point::new(1.0, 1.0));
    assert_eq!(a[1].point, Point::new(5.0, 1.0));
}
