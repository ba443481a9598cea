//! Lay out and draw small blocks of left, center or right aligned text
//! centered on a point.
//!
//! # Data Flow
//!
//! ```text
//! lines + Measurer → TextBlock → bounds_at / layout_at / draw_at(Drawer)
//! ```
//!
//! Geometry is computed in 26.6 fixed point ([`Fixed`]) and rounded up to
//! whole pixels only when a [`Rect`] is produced.

pub mod backend;
pub mod error;
pub mod fixed;
pub mod geometry;
pub mod layout;
pub mod metrics;
pub mod platform;

pub use error::BackendError;
pub use fixed::{Fixed, FixedPoint};
pub use geometry::{Point, Rect};
pub use layout::{Alignment, DrawInstruction, Options, TextBlock};
pub use metrics::{Drawer, FaceMetrics, Measurer};
