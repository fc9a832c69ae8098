//! Grid layout evaluation - the two-orientation card count core.
//!
//! Everything here is a pure function of its inputs. Invalid geometry is not
//! an error: non-positive usable space or card size yields a zero-count
//! layout, and the caller decides what "does not fit" means to the user.

use serde::{Deserialize, Serialize};

use crate::geometry::{Dimensions, Margins};

/// Input record for a layout computation.
///
/// All values share one linear unit. [`LayoutParams::new`] normalizes on the
/// way in, so the core never sees negative gaps or margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    pub sheet: Dimensions,
    pub card: Dimensions,
    #[serde(default)]
    pub gap: f64,
    #[serde(default)]
    pub margins: Margins,
}

impl LayoutParams {
    /// Build a parameter record with everything clamped to non-negative.
    pub fn new(sheet: Dimensions, card: Dimensions, gap: f64, margins: Margins) -> Self {
        Self {
            sheet,
            card,
            gap,
            margins,
        }
        .normalized()
    }

    /// Copy with negative dimensions, gap and margins clamped to zero.
    ///
    /// Deserialized records (YAML jobs, JSON) should pass through here before
    /// any computation.
    pub fn normalized(&self) -> Self {
        Self {
            sheet: self.sheet.clamped(),
            card: self.card.clamped(),
            gap: self.gap.max(0.0),
            margins: self.margins.clamped(),
        }
    }
}

/// Which way the card sits on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Unrotated,
    Rotated,
}

impl Orientation {
    /// Machine-readable key, matching the serde form.
    pub fn name(&self) -> &'static str {
        match self {
            Orientation::Unrotated => "unrotated",
            Orientation::Rotated => "rotated",
        }
    }

    /// Human-readable variant title.
    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Unrotated => "Without rotation",
            Orientation::Rotated => "Rotated 90°",
        }
    }
}

/// One orientation's grid counts, built in one shot and never mutated.
///
/// `card` holds the *effective* card dimensions for this orientation: for
/// [`Orientation::Rotated`] they are the caller's card with length and width
/// swapped. The usable extents are carried along for downstream free-space
/// computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrientationLayout {
    pub orientation: Orientation,
    pub card: Dimensions,
    pub count_x: usize,
    pub count_y: usize,
    pub total: usize,
    pub usable_width: f64,
    pub usable_height: f64,
}

impl OrientationLayout {
    /// No cards fit in this orientation.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// The full two-orientation decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutDecision {
    pub unrotated: OrientationLayout,
    pub rotated: OrientationLayout,
    pub best: Orientation,
}

impl LayoutDecision {
    /// The layout selected by the tie-break rule.
    pub fn best_layout(&self) -> &OrientationLayout {
        match self.best {
            Orientation::Unrotated => &self.unrotated,
            Orientation::Rotated => &self.rotated,
        }
    }

    /// Neither orientation fits a single card.
    pub fn is_infeasible(&self) -> bool {
        self.unrotated.is_empty() && self.rotated.is_empty()
    }
}

/// Count how many cards of the given (effective) size fit on the sheet.
///
/// The usable area is the sheet minus margins. Each card after the first
/// consumes one card-plus-gap cell, so padding the usable span with a single
/// gap before dividing counts the first card too:
///
/// ```text
/// count_x = floor((usable_width + gap) / (card.length + gap))
/// ```
///
/// Non-positive usable space or card size short-circuits to a zero-count
/// layout. The explicit clamp to zero guards against floating-point artifacts
/// at the boundary; no epsilon is applied before flooring, so a span that
/// computes fractionally short of an exact multiple counts one less.
pub fn evaluate_orientation(
    sheet: Dimensions,
    card: Dimensions,
    gap: f64,
    margins: Margins,
    orientation: Orientation,
) -> OrientationLayout {
    let usable_width = sheet.length - margins.horizontal();
    let usable_height = sheet.width - margins.vertical();

    if usable_width <= 0.0 || usable_height <= 0.0 || card.length <= 0.0 || card.width <= 0.0 {
        return OrientationLayout {
            orientation,
            card,
            count_x: 0,
            count_y: 0,
            total: 0,
            usable_width,
            usable_height,
        };
    }

    let count_x = ((usable_width + gap) / (card.length + gap)).floor().max(0.0) as usize;
    let count_y = ((usable_height + gap) / (card.width + gap)).floor().max(0.0) as usize;

    OrientationLayout {
        orientation,
        card,
        count_x,
        count_y,
        total: count_x * count_y,
        usable_width,
        usable_height,
    }
}

/// Evaluate both orientations and pick the better one.
///
/// The rotated variant wins only when its total *strictly* exceeds the
/// unrotated total - on ties the card stays as given.
pub fn compute_layouts(params: &LayoutParams) -> LayoutDecision {
    let unrotated = evaluate_orientation(
        params.sheet,
        params.card,
        params.gap,
        params.margins,
        Orientation::Unrotated,
    );
    let rotated = evaluate_orientation(
        params.sheet,
        params.card.swapped(),
        params.gap,
        params.margins,
        Orientation::Rotated,
    );

    let best = if rotated.total > unrotated.total {
        Orientation::Rotated
    } else {
        Orientation::Unrotated
    };

    LayoutDecision {
        unrotated,
        rotated,
        best,
    }
}

// ============================================================================
// TESTS
// ============================================================================
