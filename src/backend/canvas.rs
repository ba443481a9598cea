use std::path::Path;

use ab_glyph::{Font, FontArc, GlyphId, PxScale, PxScaleFont, ScaleFont, point};
use image::{Rgba, RgbaImage};

use crate::error::BackendError;
use crate::fixed::{Fixed, FixedPoint};
use crate::geometry::Rect;
use crate::metrics::{Drawer, FaceMetrics, Measurer};

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// An RGBA image with a pen that draws text in one font face.
///
/// 描画位置 (`dot`) は可変状態なので、複数の TextBlock から同時に使わないこと。
pub struct Canvas {
    image: RgbaImage,
    font: PxScaleFont<FontArc>,
    color: Rgba<u8>,
    dot: FixedPoint,
}

impl Canvas {
    /// 白で塗りつぶした `width` x `height` のキャンバスを作る
    pub fn new(font: FontArc, size_px: f32, width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, WHITE),
            font: font.into_scaled(PxScale::from(size_px.max(1.0))),
            color: BLACK,
            dot: FixedPoint::default(),
        }
    }

    /// フォントのバイト列から生成する
    pub fn from_bytes(
        bytes: Vec<u8>,
        size_px: f32,
        width: u32,
        height: u32,
    ) -> Result<Self, BackendError> {
        let font =
            FontArc::try_from_vec(bytes).map_err(|e| BackendError::InvalidFont(e.to_string()))?;
        Ok(Self::new(font, size_px, width, height))
    }

    pub fn from_file(
        path: impl AsRef<Path>,
        size_px: f32,
        width: u32,
        height: u32,
    ) -> Result<Self, BackendError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| BackendError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!(target: "Canvas", "loaded font {}", path.display());
        Self::from_bytes(bytes, size_px, width, height)
    }

    pub fn color(&self) -> Rgba<u8> {
        self.color
    }

    /// 以降の draw_string で使う文字色
    pub fn set_color(&mut self, color: Rgba<u8>) {
        self.color = color;
    }

    /// Current pen position.
    pub fn dot(&self) -> FixedPoint {
        self.dot
    }

    pub fn fill(&mut self, color: Rgba<u8>) {
        for px in self.image.pixels_mut() {
            *px = color;
        }
    }

    /// Draws a one-pixel outline along `rect`'s edges. The max edges are drawn
    /// too, except for the far corner `(max.x, max.y)`.
    pub fn stroke_rect(&mut self, rect: Rect, color: Rgba<u8>) {
        for x in rect.min.x..rect.max.x {
            self.put(x, rect.min.y, color);
            self.put(x, rect.max.y, color);
        }
        for y in rect.min.y..rect.max.y {
            self.put(rect.min.x, y, color);
            self.put(rect.max.x, y, color);
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), BackendError> {
        let path = path.as_ref();
        self.image
            .save_with_format(path, image::ImageFormat::Png)?;
        log::info!(
            target: "Canvas",
            "wrote {}x{} png to {}",
            self.image.width(),
            self.image.height(),
            path.display()
        );
        Ok(())
    }

    fn put(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if x < 0 || y < 0 || x as u32 >= self.image.width() || y as u32 >= self.image.height() {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, color);
    }

    /// Glyphs of `text` with their pen offsets, plus the total advance.
    ///
    /// Advances and kerning are snapped to 1/64 px one glyph at a time so that
    /// measuring and drawing agree exactly.
    fn glyph_run(&self, text: &str) -> (Vec<(GlyphId, Fixed)>, Fixed) {
        let mut run = Vec::with_capacity(text.len());
        let mut pen = Fixed::ZERO;
        let mut prev: Option<GlyphId> = None;

        for ch in text.chars() {
            // 制御文字は幅を持たない
            if ch.is_control() {
                continue;
            }
            let id = self.font.glyph_id(ch);
            if let Some(p) = prev {
                pen += Fixed::from_f32(self.font.kern(p, id));
            }
            run.push((id, pen));
            pen += Fixed::from_f32(self.font.h_advance(id));
            prev = Some(id);
        }

        (run, pen)
    }
}

impl Measurer for Canvas {
    fn measure_width(&self, text: &str) -> Fixed {
        self.glyph_run(text).1
    }

    /// `line_height` is the face's ascent + descent + line gap, which is
    /// usually taller than the pixel size (a truetype face that reports its
    /// height as the font size gives tighter lines).
    fn face_metrics(&self) -> FaceMetrics {
        let ascent = self.font.ascent();
        let descent = -self.font.descent();
        FaceMetrics {
            line_height: Fixed::from_f32(ascent + descent + self.font.line_gap()),
            ascent: Fixed::from_f32(ascent),
            descent: Fixed::from_f32(descent),
        }
    }
}

impl Drawer for Canvas {
    fn set_cursor(&mut self, dot: FixedPoint) {
        self.dot = dot;
    }

    fn draw_string(&mut self, text: &str) {
        let (run, advance) = self.glyph_run(text);
        let origin_x = self.dot.x.to_f32();
        let baseline = self.dot.y.to_f32();
        let color = self.color;
        let image = &mut self.image;

        for (id, offset) in run {
            let glyph =
                id.with_scale_and_position(self.font.scale, point(origin_x + offset.to_f32(), baseline));
            // 空白などアウトラインのないグリフは飛ばす
            let Some(outlined) = self.font.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let x = bounds.min.x as i32 + gx as i32;
                let y = bounds.min.y as i32 + gy as i32;
                blend(image, x, y, color, coverage);
            });
        }

        self.dot.x += advance;
    }
}

/// Source-over blend of `color` at `coverage` onto one pixel.
fn blend(image: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x as u32 >= image.width() || y as u32 >= image.height() {
        return;
    }
    let alpha = coverage.clamp(0.0, 1.0) * f32::from(color[3]) / 255.0;
    if alpha <= 0.0 {
        return;
    }
    let dst = image.get_pixel_mut(x as u32, y as u32);
    for i in 0..3 {
        let mixed = f32::from(dst[i]) * (1.0 - alpha) + f32::from(color[i]) * alpha;
        dst[i] = mixed.round() as u8;
    }
    dst[3] = (f32::from(dst[3]) + (255.0 - f32::from(dst[3])) * alpha).round() as u8;
}
