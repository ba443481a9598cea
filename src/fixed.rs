//! 26.6 fixed-point numbers.
//!
//! Font backends report distances with sub-pixel precision. Every layout
//! computation in this crate is carried out on [`Fixed`] so that bounding
//! rectangles come out the same on every platform, with no float drift.
//!
//! # Rounding
//!
//! - [`Fixed::ceil`] rounds toward positive infinity. Pixel rectangles use it.
//! - [`Fixed::floor`] rounds toward negative infinity.
//! - [`Fixed::round`] rounds half up.
//! - Division by an integer truncates toward zero.
//!
//! # Overflow
//!
//! All arithmetic wraps in two's complement, in debug and release builds
//! alike. A block too large for 26.6 gets wrapped (meaningless but
//! deterministic) geometry instead of a panic.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::geometry::Point;

/// Number of fractional bits.
const SHIFT: u32 = 6;
/// Units per pixel.
const ONE: i32 = 1 << SHIFT;

/// Signed 26.6 fixed-point value. `Fixed(64)` is one pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed(pub i32);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);

    /// Whole pixels to fixed point.
    pub const fn from_int(px: i32) -> Self {
        Fixed(px.wrapping_shl(SHIFT))
    }

    /// Float pixels to fixed point, rounded to the nearest 1/64.
    pub fn from_f32(px: f32) -> Self {
        Fixed((px * ONE as f32).round() as i32)
    }

    /// Raw value in 1/64 pixel units.
    pub const fn raw(self) -> i32 {
        self.0
    }

    pub const fn ceil(self) -> i32 {
        self.0.wrapping_add(ONE - 1) >> SHIFT
    }

    pub const fn floor(self) -> i32 {
        self.0 >> SHIFT
    }

    pub const fn round(self) -> i32 {
        self.0.wrapping_add(ONE / 2) >> SHIFT
    }

    pub fn to_f32(self) -> f32 {
        self.0 as f32 / ONE as f32
    }
}

impl Add for Fixed {
    type Output = Fixed;
    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for Fixed {
    fn add_assign(&mut self, rhs: Fixed) {
        self.0 = self.0.wrapping_add(rhs.0);
    }
}

impl Sub for Fixed {
    type Output = Fixed;
    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.wrapping_sub(rhs.0))
    }
}

impl SubAssign for Fixed {
    fn sub_assign(&mut self, rhs: Fixed) {
        self.0 = self.0.wrapping_sub(rhs.0);
    }
}

impl Neg for Fixed {
    type Output = Fixed;
    fn neg(self) -> Fixed {
        Fixed(self.0.wrapping_neg())
    }
}

/// Scales the raw value; `Fixed::from_int(3) * 2 == Fixed::from_int(6)`.
impl Mul<i32> for Fixed {
    type Output = Fixed;
    fn mul(self, rhs: i32) -> Fixed {
        Fixed(self.0.wrapping_mul(rhs))
    }
}

/// Truncates toward zero.
impl Div<i32> for Fixed {
    type Output = Fixed;
    fn div(self, rhs: i32) -> Fixed {
        Fixed(self.0.wrapping_div(rhs))
    }
}

impl fmt::Display for Fixed {
    /// Prints `int:frac` with the fraction in 1/64ths, e.g. `12:32` for 12.5 px.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            let abs = -(self.0 as i64);
            write!(f, "-{}:{:02}", abs >> SHIFT, abs & (ONE as i64 - 1))
        } else {
            write!(f, "{}:{:02}", self.0 >> SHIFT, self.0 & (ONE - 1))
        }
    }
}

/// A position in fixed-point space, typically a glyph baseline origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FixedPoint {
    pub x: Fixed,
    pub y: Fixed,
}

impl FixedPoint {
    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    pub const fn from_point(p: Point) -> Self {
        Self {
            x: Fixed::from_int(p.x),
            y: Fixed::from_int(p.y),
        }
    }
}

impl From<Point> for FixedPoint {
    fn from(p: Point) -> Self {
        Self::from_point(p)
    }
}
