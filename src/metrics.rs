//! Font backend capabilities consumed by the layout.
//!
//! # Overview
//!
//! The layout code never talks to a font library directly. It asks a
//! [`Measurer`] for advance widths and face metrics, and hands positioned
//! strings to a [`Drawer`].
//!
//! # Concurrency
//!
//! A drawer keeps its pen position (`dot`) as mutable state, so a
//! `set_cursor` followed by `draw_string` is only meaningful when nothing
//! else touches the same drawer in between. Neither trait requires `Sync`;
//! callers sharing one backend between several blocks must serialise the
//! calls themselves.

use crate::fixed::{Fixed, FixedPoint};

/// Face-level vertical metrics, all non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaceMetrics {
    /// Recommended distance between two baselines at 1.0 spacing.
    pub line_height: Fixed,
    /// Distance from the baseline to the top of the tallest glyphs.
    pub ascent: Fixed,
    /// Distance from the baseline down to the lowest descender.
    pub descent: Fixed,
}

impl FaceMetrics {
    /// Offset from the top of a line box down to its baseline.
    pub fn baseline_offset(&self) -> Fixed {
        self.line_height - self.descent
    }
}

/// Reports how much room a string takes.
pub trait Measurer {
    /// Advance width of `text` on a single line, including kerning.
    fn measure_width(&self, text: &str) -> Fixed;

    fn face_metrics(&self) -> FaceMetrics;
}

/// Renders strings at a pen position.
pub trait Drawer {
    /// Moves the pen to a baseline origin.
    fn set_cursor(&mut self, dot: FixedPoint);

    /// Draws `text` starting at the pen and advances the pen past it.
    fn draw_string(&mut self, text: &str);
}
