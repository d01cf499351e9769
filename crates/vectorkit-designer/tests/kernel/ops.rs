use vectorkit_designer::{
    boolean_op, bounding_box, contour_area, BooleanOp, PathShape, Rect, Shape, Style, Tool,
};

fn unit_squares() -> Vec<Shape> {
    vec![
        Shape::rectangle(0.0, 0.0, 1.0, 1.0),
        Shape::rectangle(0.5, 0.5, 1.0, 1.0),
    ]
}

fn path(shape: &Shape) -> &PathShape {
    match shape {
        Shape::Pen(p) => p,
        other => panic!("expected pen, got {other:?}"),
    }
}

fn total_area(shapes: &[Shape]) -> f64 {
    shapes.iter().map(|s| contour_area(&path(s).anchors)).sum()
}

fn assert_rect_close(a: Rect, b: Rect) {
    for (x, y) in [
        (a.min_x(), b.min_x()),
        (a.min_y(), b.min_y()),
        (a.max_x(), b.max_x()),
        (a.max_y(), b.max_y()),
    ] {
        assert!((x - y).abs() < 1e-9, "{a:?} vs {b:?}");
    }
}

#[test]
fn test_unite_overlapping_squares() {
    let result = boolean_op(&unit_squares(), BooleanOp::Unite).unwrap();
    assert_eq!(result.len(), 1);

    let shape = &result[0];
    assert_eq!(shape.tool(), Tool::Pen);
    assert!(path(shape).is_closed);
    assert_rect_close(
        bounding_box(shape, false).unwrap(),
        Rect::new(0.0, 0.0, 1.5, 1.5),
    );
    assert!((contour_area(&path(shape).anchors) - 1.75).abs() < 1e-9);
}

#[test]
fn test_subtract_and_intersect_areas() {
    let subtract = boolean_op(&unit_squares(), BooleanOp::Subtract).unwrap();
    assert!((total_area(&subtract) - 0.75).abs() < 1e-9);

    let intersect = boolean_op(&unit_squares(), BooleanOp::Intersect).unwrap();
    assert_eq!(intersect.len(), 1);
    assert_rect_close(
        bounding_box(&intersect[0], false).unwrap(),
        Rect::new(0.5, 0.5, 0.5, 0.5),
    );
}

#[test]
fn test_exclude_leaves_two_pieces() {
    let shapes = vec![
        Shape::rectangle(0.0, 0.0, 2.0, 1.0),
        Shape::rectangle(1.0, 0.0, 2.0, 1.0),
    ];
    let result = boolean_op(&shapes, BooleanOp::Exclude).unwrap();
    assert_eq!(result.len(), 2);
    assert!((total_area(&result) - 2.0).abs() < 1e-9);
}

#[test]
fn test_trim_splits_first_operand() {
    let result = boolean_op(&unit_squares(), BooleanOp::Trim).unwrap();
    assert_eq!(result.len(), 2);
    assert!((total_area(&result) - 1.0).abs() < 1e-9);
}

#[test]
fn test_disjoint_intersection_is_none() {
    let shapes = vec![
        Shape::rectangle(0.0, 0.0, 1.0, 1.0),
        Shape::rectangle(5.0, 5.0, 1.0, 1.0),
    ];
    assert!(boolean_op(&shapes, BooleanOp::Intersect).is_none());
}

#[test]
fn test_subtract_hole_yields_exterior_and_hole_paths() {
    let shapes = vec![
        Shape::rectangle(0.0, 0.0, 10.0, 10.0),
        Shape::rectangle(3.0, 3.0, 4.0, 4.0),
    ];
    let result = boolean_op(&shapes, BooleanOp::Subtract).unwrap();
    assert_eq!(result.len(), 2);
    let mut areas: Vec<f64> = result
        .iter()
        .map(|s| contour_area(&path(s).anchors))
        .collect();
    areas.sort_by(f64::total_cmp);
    assert!((areas[0] - 16.0).abs() < 1e-9);
    assert!((areas[1] - 100.0).abs() < 1e-9);
}

#[test]
fn test_result_inherits_first_style_with_fresh_ids() {
    let Shape::Rectangle(mut first) = Shape::rectangle(0.0, 0.0, 1.0, 1.0) else {
        unreachable!();
    };
    first.style = Style {
        stroke_color: "#123456".into(),
        ..Style::default()
    };
    let shapes = vec![Shape::Rectangle(first.clone()), Shape::rectangle(0.5, 0.0, 1.0, 1.0)];
    let result = boolean_op(&shapes, BooleanOp::Unite).unwrap();
    for shape in &result {
        assert_eq!(shape.style(), Some(&first.style));
        assert!(shapes.iter().all(|s| s.id() != shape.id()));
    }
}

#[test]
fn test_groups_are_not_operands() {
    let shapes = vec![
        Shape::group(unit_squares()),
        Shape::rectangle(0.0, 0.0, 1.0, 1.0),
    ];
    assert!(boolean_op(&shapes, BooleanOp::Unite).is_none());
}

#[test]
fn test_curved_operands_are_flattened() {
    let shapes = vec![
        Shape::ellipse(0.0, 0.0, 10.0, 10.0),
        Shape::rectangle(5.0, -5.0, 10.0, 20.0),
    ];
    let result = boolean_op(&shapes, BooleanOp::Subtract).unwrap();
    assert_eq!(result.len(), 1);
    let half_disc = std::f64::consts::PI * 25.0 / 2.0;
    assert!((total_area(&result) - half_disc).abs() < 0.5);
}
