//! Core value types for sheet layout calculations.
//!
//! All values share one linear unit (millimeters in practice, but nothing
//! here cares as long as sheet, card, gap and margins agree).

use serde::{Deserialize, Serialize};

/// The size of a sheet or card as a (length, width) pair.
///
/// Length runs along the x axis, width along the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
}

/// Non-printable borders on the sheet's four sides.
///
/// Margins never go negative: the constructors clamp, and anything arriving
/// through serde should pass through [`Margins::clamped`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margins {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub right: f64,
    #[serde(default)]
    pub bottom: f64,
    #[serde(default)]
    pub left: f64,
}

/// An axis-aligned rectangle in sheet coordinates (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    #[inline]
    pub fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }

    /// The same rectangle rotated 90°: length and width trade places.
    #[inline]
    pub fn swapped(&self) -> Self {
        Self {
            length: self.width,
            width: self.length,
        }
    }

    /// Copy with negative components clamped to zero.
    #[inline]
    pub fn clamped(&self) -> Self {
        Self {
            length: self.length.max(0.0),
            width: self.width.max(0.0),
        }
    }

    /// Both components strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.length > 0.0 && self.width > 0.0
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.length * self.width
    }
}

impl Margins {
    /// Create margins, clamping any negative value to zero.
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top: top.max(0.0),
            right: right.max(0.0),
            bottom: bottom.max(0.0),
            left: left.max(0.0),
        }
    }

    /// The same value on all four sides.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Copy with negative components clamped to zero.
    pub fn clamped(&self) -> Self {
        Self::new(self.top, self.right, self.bottom, self.left)
    }

    /// Combined left + right inset.
    #[inline]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Combined top + bottom inset.
    #[inline]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

impl Rect {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_swap() {
        let card = Dimensions::new(90.0, 50.0);
        let rotated = card.swapped();
        assert_eq!(rotated.length, 50.0);
        assert_eq!(rotated.width, 90.0);
        // Swapping twice returns the original
        assert_eq!(rotated.swapped(), card);
    }

    #[test]
    fn dimensions_clamp_negative() {
        let dims = Dimensions::new(-5.0, 30.0).clamped();
        assert_eq!(dims.length, 0.0);
        assert_eq!(dims.width, 30.0);
        assert!(!dims.is_positive());
    }

    #[test]
    fn dimensions_area() {
        assert_eq!(Dimensions::new(90.0, 50.0).area(), 4500.0);
    }

    #[test]
    fn margins_clamp_negative() {
        let margins = Margins::new(5.0, -3.0, 7.0, -1.0);
        assert_eq!(margins.right, 0.0);
        assert_eq!(margins.left, 0.0);
        assert_eq!(margins.top, 5.0);
        assert_eq!(margins.bottom, 7.0);
    }

    #[test]
    fn margins_uniform() {
        let margins = Margins::uniform(5.0);
        assert_eq!(margins.horizontal(), 10.0);
        assert_eq!(margins.vertical(), 10.0);
    }

    #[test]
    fn margins_default_is_zero() {
        let margins = Margins::default();
        assert_eq!(margins.horizontal(), 0.0);
        assert_eq!(margins.vertical(), 0.0);
    }

    #[test]
    fn rect_edges() {
        let rect = Rect::new(42.0, 5.0, 90.0, 50.0);
        assert_eq!(rect.right(), 132.0);
        assert_eq!(rect.bottom(), 55.0);
    }
}
