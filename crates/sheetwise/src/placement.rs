//! Derived grid geometry - where the counted cards actually sit.
//!
//! The layout core only counts; this module turns a non-empty
//! [`OrientationLayout`] into concrete sheet coordinates for a renderer:
//! the grid's used extent, its centered origin, the four free-space
//! clearances, and the individual card rectangles.

use serde::Serialize;

use crate::geometry::{Dimensions, Margins, Rect};
use crate::layout::OrientationLayout;

/// Distances from the sheet edges to the card grid.
///
/// All four are ≥ 0 whenever the layout came from a consistent count:
/// the used extent never exceeds the usable area by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Clearance {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Concrete geometry for one orientation's grid, centered in the usable area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    /// Effective card dimensions (already swapped for the rotated variant).
    pub card: Dimensions,
    pub count_x: usize,
    pub count_y: usize,
    pub gap: f64,
    /// Extent the grid occupies: count × card + (count − 1) × gap per axis.
    pub used_width: f64,
    pub used_height: f64,
    /// Top-left corner of the grid in sheet coordinates.
    pub origin_x: f64,
    pub origin_y: f64,
    pub clearance: Clearance,
}

impl Placement {
    /// Place a layout's grid on the sheet. Returns `None` for an empty layout.
    ///
    /// Leftover usable space is split evenly, so the grid sits centered
    /// between the margins on both axes.
    pub fn for_layout(
        sheet: Dimensions,
        margins: Margins,
        gap: f64,
        layout: &OrientationLayout,
    ) -> Option<Self> {
        if layout.count_x == 0 || layout.count_y == 0 {
            return None;
        }

        let used_width =
            layout.count_x as f64 * layout.card.length + (layout.count_x - 1) as f64 * gap;
        let used_height =
            layout.count_y as f64 * layout.card.width + (layout.count_y - 1) as f64 * gap;

        let extra_w = (layout.usable_width - used_width).max(0.0);
        let extra_h = (layout.usable_height - used_height).max(0.0);

        let origin_x = margins.left + extra_w / 2.0;
        let origin_y = margins.top + extra_h / 2.0;

        let clearance = Clearance {
            left: origin_x,
            top: origin_y,
            right: sheet.length - (origin_x + used_width),
            bottom: sheet.width - (origin_y + used_height),
        };

        Some(Self {
            card: layout.card,
            count_x: layout.count_x,
            count_y: layout.count_y,
            gap,
            used_width,
            used_height,
            origin_x,
            origin_y,
            clearance,
        })
    }

    /// Enumerate the card rectangles row by row, left to right.
    ///
    /// This is O(total) and exists for renderers; the counting core itself
    /// never iterates cards.
    pub fn card_rects(&self) -> Vec<Rect> {
        let mut rects = Vec::with_capacity(self.count_x * self.count_y);
        for iy in 0..self.count_y {
            for ix in 0..self.count_x {
                rects.push(Rect::new(
                    self.origin_x + ix as f64 * (self.card.length + self.gap),
                    self.origin_y + iy as f64 * (self.card.width + self.gap),
                    self.card.length,
                    self.card.width,
                ));
            }
        }
        rects
    }
}

// ============================================================================
// TESTS
// ============================================================================
