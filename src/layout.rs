//! Centered multi-line text blocks.
//!
//! A [`TextBlock`] stacks caller-supplied lines and centers the whole stack on
//! an anchor point. Horizontally each line is placed according to the block's
//! [`Alignment`]; vertically the lines are `line_advance` apart.
//!
//! ```text
//!            half_width   half_width
//!          |<---------->|<---------->|
//!   -------+------------+------------+  ^
//!          | Hello                   |  | half_height
//!          | There      x anchor     |  v
//!          | Loooooooooooooooong     |  ^
//!          | Word                    |  | half_height
//!   -------+------------+------------+  v
//! ```

use crate::fixed::{Fixed, FixedPoint};
use crate::geometry::{Point, Rect};
use crate::metrics::{Drawer, FaceMetrics, Measurer};

/// Spacing used when none (or a non-positive one) is configured.
pub const DEFAULT_SPACING: f64 = 1.5;

/// Horizontal placement of each line inside the block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Every line starts at the block's left bound.
    #[default]
    Left,
    /// Every line is centered on the anchor.
    Center,
    /// Every line ends at the block's right bound.
    Right,
}

/// Optional construction parameters for [`TextBlock::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Baseline-to-baseline distance as a multiple of the face line height.
    pub spacing: f64,
    pub alignment: Alignment,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            alignment: Alignment::Left,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Configured spacing, or [`DEFAULT_SPACING`] unless it is strictly positive.
    fn effective_spacing(&self) -> f64 {
        if self.spacing > 0.0 {
            self.spacing
        } else {
            DEFAULT_SPACING
        }
    }
}

/// One line to draw: the baseline origin and the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawInstruction {
    pub origin: FixedPoint,
    pub text: String,
}

#[derive(Debug, Clone)]
struct Line {
    text: String,
    width: Fixed,
}

/// A block of lines laid out around an anchor point.
///
/// Widths and face metrics are sampled once in [`TextBlock::new`]; every
/// query after that is a pure function of the block. Only
/// [`TextBlock::draw_at`] has side effects, and those land on the drawer the
/// caller passes in.
#[derive(Debug, Clone)]
pub struct TextBlock {
    lines: Vec<Line>,
    metrics: FaceMetrics,
    half_width: Fixed,
    half_height: Fixed,
    line_advance: Fixed,
    alignment: Alignment,
}

impl TextBlock {
    /// Measures `lines` with `measurer` and derives the block geometry.
    ///
    /// An empty line list is fine and yields a zero-size block.
    pub fn new<M, I, S>(measurer: &M, lines: I, options: Option<Options>) -> Self
    where
        M: Measurer + ?Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = options.unwrap_or_default();
        let metrics = measurer.face_metrics();

        // Baselines stay on whole pixels.
        let line_advance = Fixed::from_int(
            (f64::from(metrics.line_height.ceil()) * options.effective_spacing()) as i32,
        );

        let lines: Vec<Line> = lines
            .into_iter()
            .map(|text| {
                let text: String = text.into();
                let width = measurer.measure_width(&text);
                Line { text, width }
            })
            .collect();

        let count = lines.len() as i32;
        let gaps = lines.len().saturating_sub(1) as i32;
        let height = metrics.line_height * count + (line_advance - metrics.line_height) * gaps;

        let width = lines
            .iter()
            .map(|l| l.width)
            .max()
            .unwrap_or(Fixed::ZERO);

        let block = Self {
            lines,
            metrics,
            half_width: width / 2,
            half_height: height / 2,
            line_advance,
            alignment: options.alignment,
        };

        log::debug!(
            target: "TextBlock::new",
            "lines={} half_width={} half_height={} line_advance={}",
            block.lines.len(),
            block.half_width,
            block.half_height,
            block.line_advance
        );

        block
    }

    /// Rectangle that encloses the block when it is centered on `pt`.
    ///
    /// Each edge is rounded up to a whole pixel on its own.
    pub fn bounds_at(&self, pt: Point) -> Rect {
        let x = Fixed::from_int(pt.x);
        let y = Fixed::from_int(pt.y);
        Rect {
            min: Point::new((x - self.half_width).ceil(), (y - self.half_height).ceil()),
            max: Point::new((x + self.half_width).ceil(), (y + self.half_height).ceil()),
        }
    }

    /// Baseline origin of every line when the block is centered on `pt`.
    pub fn layout_at(&self, pt: Point) -> Vec<DrawInstruction> {
        self.origins(pt)
            .map(|(origin, line)| DrawInstruction {
                origin,
                text: line.text.clone(),
            })
            .collect()
    }

    /// Draws the block centered on `pt`.
    ///
    /// Moves the drawer's pen once per line. The drawer must not be used by
    /// anything else until this returns.
    pub fn draw_at<D>(&self, pt: Point, drawer: &mut D)
    where
        D: Drawer + ?Sized,
    {
        for (origin, line) in self.origins(pt) {
            log::debug!(
                target: "TextBlock::draw_at",
                "({}, {}) `{}`",
                origin.x,
                origin.y,
                line.text
            );
            drawer.set_cursor(origin);
            drawer.draw_string(&line.text);
        }
    }

    fn origins(&self, pt: Point) -> impl Iterator<Item = (FixedPoint, &Line)> + '_ {
        let x = Fixed::from_int(pt.x);
        let top = Fixed::from_int(pt.y) - self.half_height + self.metrics.baseline_offset();

        let mut y = top;
        self.lines.iter().map(move |line| {
            let origin = FixedPoint::new(x - self.line_offset(line), y);
            y += self.line_advance;
            (origin, line)
        })
    }

    /// Distance from the anchor back to the line's origin.
    fn line_offset(&self, line: &Line) -> Fixed {
        match self.alignment {
            // Anchored on the block bound, not on the line's own width.
            Alignment::Left => self.half_width,
            Alignment::Center => line.width / 2,
            Alignment::Right => line.width - self.half_width,
        }
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    pub fn line_advance(&self) -> Fixed {
        self.line_advance
    }

    pub fn half_width(&self) -> Fixed {
        self.half_width
    }

    pub fn half_height(&self) -> Fixed {
        self.half_height
    }

    pub fn face_metrics(&self) -> FaceMetrics {
        self.metrics
    }

    pub fn lines(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.lines.iter().map(|l| l.text.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
