//! Named sheet-format presets.
//!
//! Common press sheet sizes, all in millimeters as (length, width).
//! Names are matched case-insensitively; the numeric names follow the
//! trade convention of quoting the short side first.

use crate::geometry::Dimensions;

/// A stock sheet size with a lookup name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetFormat {
    name: &'static str,
    length: f64,
    width: f64,
}

const FORMATS: &[SheetFormat] = &[
    SheetFormat { name: "sra3", length: 450.0, width: 320.0 },
    SheetFormat { name: "325x470", length: 470.0, width: 325.0 },
    SheetFormat { name: "330x488", length: 488.0, width: 330.0 },
    SheetFormat { name: "350x500", length: 500.0, width: 350.0 },
    SheetFormat { name: "470x620", length: 620.0, width: 470.0 },
    SheetFormat { name: "470x650", length: 650.0, width: 470.0 },
    SheetFormat { name: "500x700", length: 700.0, width: 500.0 },
    SheetFormat { name: "520x720", length: 720.0, width: 520.0 },
    SheetFormat { name: "640x900", length: 900.0, width: 640.0 },
    SheetFormat { name: "620x940", length: 940.0, width: 620.0 },
    SheetFormat { name: "700x1000", length: 1000.0, width: 700.0 },
    SheetFormat { name: "720x1040", length: 1040.0, width: 720.0 },
];

impl SheetFormat {
    /// All built-in formats, in catalog order.
    pub fn all() -> &'static [SheetFormat] {
        FORMATS
    }

    /// Look up a format by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<SheetFormat> {
        let lower = name.trim().to_lowercase();
        FORMATS.iter().copied().find(|f| f.name == lower)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Sheet size as (length, width) in millimeters.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.length, self.width)
    }
}

// ============================================================================
// TESTS
// ============================================================================
