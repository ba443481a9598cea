use textblock::backend::{BLACK, Canvas, FontdueMeasurer, WHITE};
use textblock::platform::font::load_font_bytes;
use textblock::{
    Alignment, BackendError, Drawer, Fixed, FixedPoint, Measurer, Options, Point, TextBlock,
};

fn system_font() -> Option<Vec<u8>> {
    match load_font_bytes() {
        Ok((_, bytes)) => Some(bytes),
        Err(e) => {
            eprintln!("skipping backend font test: {e}");
            None
        }
    }
}

#[test]
fn garbage_bytes_are_rejected() {
    let canvas = Canvas::from_bytes(vec![0, 1, 2, 3], 16.0, 8, 8);
    assert!(matches!(canvas, Err(BackendError::InvalidFont(_))));

    let measurer = FontdueMeasurer::from_bytes(&[0, 1, 2, 3], 16.0);
    assert!(matches!(measurer, Err(BackendError::InvalidFont(_))));
}

#[test]
fn missing_font_file_reports_path() {
    let err = FontdueMeasurer::from_file("/definitely/not/here.ttf", 16.0)
        .err()
        .expect("missing file must fail");
    assert!(matches!(err, BackendError::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here.ttf"));
}

#[test]
fn fontdue_measurer_smoke() {
    let Some(bytes) = system_font() else {
        return;
    };
    let m = FontdueMeasurer::from_bytes(&bytes, 32.0).expect("create measurer");

    let metrics = m.face_metrics();
    assert!(metrics.line_height > Fixed::ZERO);
    assert!(metrics.ascent > Fixed::ZERO);
    assert!(metrics.descent >= Fixed::ZERO);

    let short = m.measure_width("Hi");
    let long = m.measure_width("Hi there, world");
    assert!(short > Fixed::ZERO);
    assert!(long > short);
    assert_eq!(m.measure_width(""), Fixed::ZERO);
}

#[test]
fn fontdue_measurer_clamps_tiny_sizes() {
    let Some(bytes) = system_font() else {
        return;
    };
    let m = FontdueMeasurer::from_bytes(&bytes, 0.25).expect("create measurer");
    assert_eq!(m.size_px(), 1.0);
    let m = FontdueMeasurer::from_bytes(&bytes, 18.0).expect("create measurer");
    assert_eq!(m.size_px(), 18.0);
}

#[test]
fn canvas_fill_and_color() {
    let Some(bytes) = system_font() else {
        return;
    };
    let mut canvas = Canvas::from_bytes(bytes, 24.0, 64, 32).expect("create canvas");
    assert_eq!(canvas.color(), BLACK);

    let blue = image::Rgba([0, 0, 255, 255]);
    canvas.fill(blue);
    assert!(canvas.image().pixels().all(|px| *px == blue));

    canvas.fill(WHITE);
    canvas.set_color(blue);
    assert_eq!(canvas.color(), blue);
    canvas.set_cursor(FixedPoint::new(Fixed::from_int(2), Fixed::from_int(24)));
    canvas.draw_string("W");

    let img = canvas.into_image();
    assert_eq!(img.dimensions(), (64, 32));
    // Blue blended onto white keeps red and green equal.
    assert!(img.pixels().any(|px| *px != WHITE));
    assert!(img.pixels().all(|px| px[0] == px[1]));
}

#[test]
fn canvas_draws_inside_block_bounds() {
    let Some(bytes) = system_font() else {
        return;
    };
    let mut canvas = Canvas::from_bytes(bytes, 40.0, 400, 300).expect("create canvas");

    let block = TextBlock::new(
        &canvas,
        ["Hello", "World"],
        Some(Options::new().with_spacing(1.2).with_alignment(Alignment::Center)),
    );
    let pt = Point::new(200, 150);
    let bounds = block.bounds_at(pt);
    assert!(!bounds.is_empty());

    block.draw_at(pt, &mut canvas);

    // The pen ends after the last line.
    let last = block.layout_at(pt).pop().expect("two lines");
    assert_eq!(canvas.dot().y, last.origin.y);
    assert_eq!(canvas.dot().x, last.origin.x + canvas.measure_width("World"));

    let img = canvas.image();
    let inked = (bounds.min.y.max(0)..bounds.max.y.min(img.height() as i32))
        .flat_map(|y| (bounds.min.x.max(0)..bounds.max.x.min(img.width() as i32)).map(move |x| (x, y)))
        .any(|(x, y)| *img.get_pixel(x as u32, y as u32) != WHITE);
    assert!(inked, "no glyph pixels inside {bounds:?}");
}

#[test]
fn stroke_rect_outlines_corners() {
    let Some(bytes) = system_font() else {
        return;
    };
    let mut canvas = Canvas::from_bytes(bytes, 12.0, 20, 20).expect("create canvas");
    let red = image::Rgba([255, 0, 0, 255]);
    canvas.stroke_rect(
        textblock::Rect::new(Point::new(2, 3), Point::new(10, 12)),
        red,
    );
    let img = canvas.image();
    assert_eq!(*img.get_pixel(2, 3), red);
    assert_eq!(*img.get_pixel(9, 12), red);
    assert_eq!(*img.get_pixel(10, 11), red);
    // The far corner is left alone.
    assert_eq!(*img.get_pixel(10, 12), WHITE);
    assert_eq!(*img.get_pixel(5, 5), WHITE);
}
