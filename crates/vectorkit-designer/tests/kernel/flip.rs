use std::io::Cursor;

use image::{DynamicImage, GenericImageView, ImageFormat, Rgba, RgbaImage};
use vectorkit_designer::{flip, Anchor, FlipAxis, FlipError, ImageShape, Point, Rect, Shape};

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

fn two_pixel_png() -> Vec<u8> {
    let img = RgbaImage::from_fn(2, 1, |x, _| if x == 0 { RED } else { BLUE });
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut out, ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

fn pixels(data: &[u8]) -> DynamicImage {
    image::load_from_memory(data).unwrap()
}

#[tokio::test]
async fn test_flip_twice_restores_path() {
    let pen = Shape::pen(
        vec![
            Anchor::new(Point::new(1.0, 2.0), Point::new(0.0, 2.0), Point::new(3.0, 5.0)),
            Anchor::corner(Point::new(7.0, -4.0)),
        ],
        false,
    );
    let center = Point::new(10.0, 3.0);
    for axis in [FlipAxis::Horizontal, FlipAxis::Vertical] {
        let once = flip(&pen, center, axis).await.unwrap();
        assert_ne!(once, pen);
        let twice = flip(&once, center, axis).await.unwrap();
        assert_eq!(twice, pen);
    }
}

#[tokio::test]
async fn test_horizontal_flip_mirrors_box_about_center() {
    let rect = Shape::rectangle(2.0, 0.0, 4.0, 2.0);
    let flipped = flip(&rect, Point::new(10.0, 0.0), FlipAxis::Horizontal)
        .await
        .unwrap();
    let f = flipped.frame_geometry().unwrap();
    assert_eq!((f.x, f.width, f.scale_x), (14.0, 4.0, -1.0));
}

#[tokio::test]
async fn test_image_flip_mirrors_pixels() {
    let mut image = ImageShape::new(10.0, 20.0, 30.0, 40.0, two_pixel_png());
    image.crop = Some(Rect::new(0.0, 0.0, 10.0, 40.0));
    let shape = Shape::Image(image);
    let center = Point::new(0.0, 0.0);

    let once = flip(&shape, center, FlipAxis::Horizontal).await.unwrap();
    let Shape::Image(flipped) = &once else {
        panic!("expected image");
    };
    let px = pixels(&flipped.data);
    assert_eq!(px.get_pixel(0, 0), BLUE);
    assert_eq!(px.get_pixel(1, 0), RED);
    assert_eq!(flipped.frame.scale_x, 1.0);
    assert_eq!(flipped.frame.x, -40.0);
    assert_eq!(flipped.crop, Some(Rect::new(20.0, 0.0, 10.0, 40.0)));

    let twice = flip(&once, center, FlipAxis::Horizontal).await.unwrap();
    let (Shape::Image(original), Shape::Image(restored)) = (&shape, &twice) else {
        panic!("expected image");
    };
    assert_eq!(restored.frame, original.frame);
    assert_eq!(restored.crop, original.crop);
    assert_eq!(
        pixels(&restored.data).to_rgba8(),
        pixels(&original.data).to_rgba8()
    );
}

#[tokio::test]
async fn test_group_with_image_flips_every_child() {
    let group = Shape::group(vec![
        Shape::rectangle(0.0, 0.0, 2.0, 2.0),
        Shape::image(4.0, 0.0, 2.0, 1.0, two_pixel_png()),
    ]);
    let flipped = flip(&group, Point::new(3.0, 0.0), FlipAxis::Vertical)
        .await
        .unwrap();
    assert_eq!(flipped.id(), group.id());

    let rect = flipped.children()[0].frame_geometry().unwrap();
    assert_eq!((rect.y, rect.scale_y), (-2.0, -1.0));

    let Shape::Image(image) = &flipped.children()[1] else {
        panic!("expected image");
    };
    assert_eq!(image.frame.y, -1.0);
    // A 2x1 image is unchanged by a vertical pixel flip.
    assert_eq!(pixels(&image.data).get_pixel(0, 0), RED);
}

#[tokio::test]
async fn test_undecodable_image_is_an_error() {
    let shape = Shape::image(0.0, 0.0, 1.0, 1.0, vec![1, 2, 3, 4, 5]);
    let err = flip(&shape, Point::ORIGIN, FlipAxis::Horizontal)
        .await
        .unwrap_err();
    assert!(matches!(err, FlipError::Decode(_)));
}
