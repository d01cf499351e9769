use vectorkit_designer::{
    bounding_box, resize, rotate, transform_crop_rect, Anchor, BoxFrame, Point, Rect,
    ResizeHandle, ResizeRequest, Shape,
};

fn frame(shape: &Shape) -> BoxFrame {
    *shape.frame_geometry().unwrap()
}

#[test]
fn test_edge_resize_on_rotated_box_keeps_height() {
    let rect = Shape::rectangle(10.0, 20.0, 100.0, 50.0);
    let center = Point::new(60.0, 45.0);
    let rect = rotate(&rect, center, 0.7);
    let f = frame(&rect);

    let right_mid = f.to_world(Point::new(110.0, 45.0));
    let left_mid = f.to_world(Point::new(10.0, 45.0));
    let along = Point::new(0.7f64.cos(), 0.7f64.sin());
    let request = ResizeRequest::new(ResizeHandle::Right, right_mid, right_mid + along * 30.0);

    let resized = resize(&rect, &request);
    let r = frame(&resized);
    assert_eq!(r.height, 50.0);
    assert!((r.width - 130.0).abs() < 1e-9, "width {}", r.width);
    assert!((r.rotation - 0.7).abs() < 1e-12);

    let new_left_mid = r.to_world(Point::new(r.x, r.y + r.height / 2.0));
    assert!(new_left_mid.distance_to(&left_mid) < 1e-9);
}

#[test]
fn test_top_edge_drag_anchors_bottom() {
    let rect = Shape::rectangle(0.0, 0.0, 40.0, 40.0);
    let request = ResizeRequest::new(ResizeHandle::Top, Point::new(20.0, 0.0), Point::new(25.0, -10.0));
    let f = frame(&resize(&rect, &request));
    assert_eq!((f.x, f.y, f.width, f.height), (0.0, -10.0, 40.0, 50.0));
}

#[test]
fn test_edge_aspect_lock_centers_orthogonal_axis() {
    let rect = Shape::rectangle(0.0, 0.0, 20.0, 10.0);
    let request = ResizeRequest::new(ResizeHandle::Right, Point::new(20.0, 5.0), Point::new(40.0, 5.0))
        .keep_aspect_ratio(true);
    let f = frame(&resize(&rect, &request));
    assert_eq!((f.width, f.height), (40.0, 20.0));
    assert_eq!(f.center().y, 5.0);
    assert_eq!(f.x, 0.0);
}

#[test]
fn test_zero_width_box_keeps_width() {
    let rect = Shape::rectangle(5.0, 5.0, 0.0, 10.0);
    let request = ResizeRequest::new(
        ResizeHandle::BottomRight,
        Point::new(5.0, 15.0),
        Point::new(30.0, 25.0),
    );
    let f = frame(&resize(&rect, &request));
    assert_eq!(f.width, 0.0);
    assert_eq!(f.height, 20.0);
}

#[test]
fn test_resize_path_uses_bounds() {
    let path = Shape::pen(
        vec![
            Anchor::corner(Point::new(0.0, 0.0)),
            Anchor::corner(Point::new(10.0, 0.0)),
            Anchor::corner(Point::new(10.0, 10.0)),
        ],
        true,
    );
    let request = ResizeRequest::new(
        ResizeHandle::BottomRight,
        Point::new(10.0, 10.0),
        Point::new(20.0, 20.0),
    );
    let b = bounding_box(&resize(&path, &request), false).unwrap();
    assert_eq!(b, Rect::new(0.0, 0.0, 20.0, 20.0));
}

#[test]
fn test_external_pivot_keeps_anchor() {
    let rect = Shape::rectangle(0.0, 0.0, 10.0, 10.0);
    let pivot = Point::new(-20.0, 4.0);
    let rect = rotate(&rect, pivot, 0.3);
    let f = frame(&rect);
    let top_left = f.to_world(Point::new(f.x, f.y));
    let bottom_right = f.to_world(Point::new(f.x + 10.0, f.y + 10.0));

    let request = ResizeRequest::new(
        ResizeHandle::BottomRight,
        bottom_right,
        bottom_right + Point::new(3.0, 3.0),
    )
    .rotation_pivot(pivot);
    let r = frame(&resize(&rect, &request));
    let new_top_left = r.to_world(Point::new(r.x, r.y));
    assert!(new_top_left.distance_to(&top_left) < 1e-9);
}

#[test]
fn test_crop_normalizes_inverted_drag() {
    let image = BoxFrame::new(0.0, 0.0, 100.0, 100.0);
    let crop = Rect::new(20.0, 20.0, 10.0, 10.0);
    let moved = transform_crop_rect(
        &crop,
        &image,
        ResizeHandle::Right,
        Point::new(15.0, 50.0),
        Point::new(30.0, 50.0),
    );
    assert_eq!(moved, Rect::new(15.0, 20.0, 5.0, 10.0));
}

#[test]
fn test_crop_on_rotated_image_uses_local_axes() {
    let mut image = BoxFrame::new(0.0, 0.0, 100.0, 50.0);
    image.rotation = std::f64::consts::FRAC_PI_2;
    let crop = Rect::new(10.0, 10.0, 20.0, 20.0);
    // Canvas +y is the image's local +x after a quarter turn.
    let moved = transform_crop_rect(
        &crop,
        &image,
        ResizeHandle::Right,
        Point::new(50.0, 40.0),
        Point::new(50.0, 30.0),
    );
    assert!((moved.width - 30.0).abs() < 1e-9);
    assert!((moved.height - 20.0).abs() < 1e-9);
}
