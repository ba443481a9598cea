//! Font backends that implement [`Measurer`](crate::metrics::Measurer) and
//! [`Drawer`](crate::metrics::Drawer).
//!
//! - [`Canvas`]: ab_glyph outlines rasterised into an `image::RgbaImage`.
//! - [`FontdueMeasurer`]: fontdue, measurement only.

pub mod canvas;
pub mod measurer;

pub use canvas::{BLACK, Canvas, WHITE};
pub use measurer::FontdueMeasurer;
