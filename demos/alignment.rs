use anyhow::{Context, Result};
use std::env;
use textblock::backend::Canvas;
use textblock::platform::font;
use textblock::{Alignment, Options, Point, TextBlock};

const IMG_W: u32 = 600;
const IMG_H: u32 = 1200;
const RED: image::Rgba<u8> = image::Rgba([255, 0, 0, 255]);

fn main() -> Result<()> {
    env_logger::init();

    // 引数: [フォントパス] [出力PNG]
    let args: Vec<String> = env::args().collect();
    let out_path = args.get(2).cloned().unwrap_or_else(|| "out.png".to_string());

    let mut canvas = match args.get(1) {
        Some(path) => Canvas::from_file(path, 50.0, IMG_W, IMG_H)?,
        None => {
            let (_, bytes) = font::load_font_bytes()?;
            Canvas::from_bytes(bytes, 50.0, IMG_W, IMG_H)?
        }
    };

    let mut block = TextBlock::new(
        &canvas,
        ["Hello", "There", "Loooooooooooooooong", "Word"],
        Some(Options::new().with_spacing(1.2)),
    );

    let x = IMG_W as i32 / 2;
    for (alignment, y) in [
        (Alignment::Left, 200),
        (Alignment::Center, 600),
        (Alignment::Right, 1000),
    ] {
        let pt = Point::new(x, y);
        block.set_alignment(alignment);
        block.draw_at(pt, &mut canvas);
        canvas.stroke_rect(block.bounds_at(pt), RED);
    }

    canvas
        .save_png(&out_path)
        .with_context(|| format!("failed to write {out_path}"))?;

    Ok(())
}
