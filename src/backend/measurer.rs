use fontdue::{Font as FontDue, FontSettings};
use std::path::Path;

use crate::error::BackendError;
use crate::fixed::Fixed;
use crate::metrics::{FaceMetrics, Measurer};

/// 計測専用のバックエンド
///
/// ラスタライズせずに幅とメトリクスだけが欲しい場合に使う。
pub struct FontdueMeasurer {
    font: FontDue,
    size_px: f32,
    metrics: FaceMetrics,
}

impl FontdueMeasurer {
    /// バイト列からフォントを読み込んで初期化
    pub fn from_bytes(bytes: &[u8], size_px: f32) -> Result<Self, BackendError> {
        let font = FontDue::from_bytes(bytes, FontSettings::default())
            .map_err(|e| BackendError::InvalidFont(e.to_string()))?;
        let size_px = size_px.max(1.0);

        let line = font
            .horizontal_line_metrics(size_px)
            .ok_or(BackendError::MissingLineMetrics)?;

        // fontdue の descent は負の値
        let metrics = FaceMetrics {
            line_height: Fixed::from_f32(line.new_line_size),
            ascent: Fixed::from_f32(line.ascent),
            descent: Fixed::from_f32(-line.descent),
        };

        Ok(Self {
            font,
            size_px,
            metrics,
        })
    }

    pub fn from_file(path: impl AsRef<Path>, size_px: f32) -> Result<Self, BackendError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| BackendError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes, size_px)
    }

    pub fn size_px(&self) -> f32 {
        self.size_px
    }
}

impl Measurer for FontdueMeasurer {
    fn measure_width(&self, text: &str) -> Fixed {
        let mut width = Fixed::ZERO;
        let mut prev: Option<char> = None;

        for ch in text.chars() {
            if ch.is_control() {
                continue;
            }
            if let Some(p) = prev
                && let Some(kern) = self.font.horizontal_kern(p, ch, self.size_px)
            {
                width += Fixed::from_f32(kern);
            }
            // rasterize() ではなく metrics() でビットマップ生成を避ける
            width += Fixed::from_f32(self.font.metrics(ch, self.size_px).advance_width);
            prev = Some(ch);
        }

        width
    }

    fn face_metrics(&self) -> FaceMetrics {
        self.metrics
    }
}
