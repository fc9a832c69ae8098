//! List the built-in sheet format presets.

use sheetwise::SheetFormat;

use crate::cli::common::format_mm;

pub fn cmd_formats() {
    println!("Available sheet formats:");
    for format in SheetFormat::all() {
        let dims = format.dimensions();
        println!(
            "  {:10} {} × {} mm",
            format.name(),
            format_mm(dims.length),
            format_mm(dims.width)
        );
    }
}
