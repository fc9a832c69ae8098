//! Draw the two layout variants side by side as SVG, optionally PNG.
//!
//! The drawing mirrors what a print operator wants to see before running a
//! sheet: the sheet outline, the dashed print area, every card rectangle,
//! and the free-space distances from the grid to each sheet edge.

use std::fs;
use std::process;

use sheetwise::{compute_layouts, LayoutDecision, LayoutParams, OrientationLayout, Placement};

use crate::cli::common::{format_mm, try_layout_flag, ParamFlags};

/// Fixed page the two sheet drawings are scaled into.
const PAGE_WIDTH: f64 = 1000.0;
const PAGE_HEIGHT: f64 = 600.0;
const OUTER_PAD: f64 = 20.0;
const COLUMN_GAP: f64 = 20.0;

pub fn cmd_render(args: &[String]) {
    let mut flags = ParamFlags::new();
    let mut output_path: Option<String> = None;
    let mut png_output: Option<String> = None;
    let mut png_scale = 2.0_f64;

    let mut i = 0;
    while i < args.len() {
        match try_layout_flag(args, &mut i, &mut flags) {
            Ok(true) => continue,
            Ok(false) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(args[i].clone());
                }
            }
            "--png" => {
                i += 1;
                if i < args.len() {
                    png_output = Some(args[i].clone());
                }
            }
            "--png-scale" => {
                i += 1;
                if i < args.len() {
                    png_scale = args[i].parse().unwrap_or(2.0);
                }
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let params = flags.into_params().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let decision = compute_layouts(&params);
    if decision.is_infeasible() {
        eprintln!("Note: cards do not fit in either orientation; rendering the empty sheets.");
    }

    let svg = layout_svg(&params, &decision);

    match output_path.as_deref() {
        Some("-") | None => {
            println!("{}", svg);
        }
        Some(path) => {
            fs::write(path, &svg).unwrap_or_else(|e| {
                eprintln!("Error: failed to write {}: {}", path, e);
                process::exit(1);
            });
            eprintln!("Wrote: {}", path);
        }
    }

    if let Some(png_path) = png_output {
        write_png(&svg, &png_path, png_scale);
    }
}

/// Build the full two-variant SVG for a computed decision.
pub fn layout_svg(params: &LayoutParams, decision: &LayoutDecision) -> String {
    let sheet = params.sheet;

    // Two columns sharing one scale, both sheets fully visible.
    let column_width = (PAGE_WIDTH - 2.0 * OUTER_PAD - COLUMN_GAP) / 2.0;
    let available_height = PAGE_HEIGHT - 2.0 * OUTER_PAD;
    let scale = (column_width / sheet.length).min(available_height / sheet.width);

    let sheet_px_w = sheet.length * scale;
    let sheet_px_h = sheet.width * scale;

    let col0_x = OUTER_PAD + (column_width - sheet_px_w) / 2.0;
    let col1_x = OUTER_PAD + column_width + COLUMN_GAP + (column_width - sheet_px_w) / 2.0;
    let offset_y = OUTER_PAD + (available_height - sheet_px_h) / 2.0;

    let mut svg = String::new();
    svg.push_str(&format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{:.0}" height="{:.0}"
     viewBox="0 0 {:.0} {:.0}">
  <title>sheetwise layout - {} × {} mm sheet</title>
  <rect width="100%" height="100%" fill="white"/>
"##,
        PAGE_WIDTH,
        PAGE_HEIGHT,
        PAGE_WIDTH,
        PAGE_HEIGHT,
        format_mm(sheet.length),
        format_mm(sheet.width)
    ));

    // An empty decision has no "optimal" variant to highlight.
    let feasible = !decision.is_infeasible();

    push_variant(
        &mut svg,
        params,
        &decision.unrotated,
        feasible && decision.best == decision.unrotated.orientation,
        true,
        col0_x,
        offset_y,
        scale,
    );
    push_variant(
        &mut svg,
        params,
        &decision.rotated,
        feasible && decision.best == decision.rotated.orientation,
        false,
        col1_x,
        offset_y,
        scale,
    );

    svg.push_str("</svg>\n");
    svg
}

/// Draw one variant: sheet, print area, card grid, free-space labels, titles.
#[allow(clippy::too_many_arguments)]
fn push_variant(
    svg: &mut String,
    params: &LayoutParams,
    layout: &OrientationLayout,
    best: bool,
    is_first: bool,
    offset_x: f64,
    offset_y: f64,
    scale: f64,
) {
    let sheet = params.sheet;
    let margins = params.margins;
    let sheet_px_w = sheet.length * scale;
    let sheet_px_h = sheet.width * scale;

    let to_px_x = |mm: f64| offset_x + mm * scale;
    let to_px_y = |mm: f64| offset_y + mm * scale;

    // Sheet outline: highlighted when this variant is the optimal one.
    let (stroke, stroke_width) = if best { ("#0055cc", 2.0) } else { ("#444", 1.5) };
    svg.push_str(&format!(
        "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"#ffffff\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
        to_px_x(0.0),
        to_px_y(0.0),
        sheet_px_w,
        sheet_px_h,
        stroke,
        stroke_width
    ));

    // Print area (sheet minus margins).
    let print_w = (sheet.length - margins.horizontal()).max(0.0);
    let print_h = (sheet.width - margins.vertical()).max(0.0);
    if print_w > 0.0 && print_h > 0.0 {
        svg.push_str(&format!(
            "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"#f5faff\"/>\n",
            to_px_x(margins.left),
            to_px_y(margins.top),
            print_w * scale,
            print_h * scale
        ));
    }

    let placement = Placement::for_layout(sheet, margins, params.gap, layout);

    if let Some(placement) = &placement {
        // Card grid.
        svg.push_str("  <g fill=\"#90c4ff\" stroke=\"#003366\" stroke-width=\"1\">\n");
        for rect in placement.card_rects() {
            svg.push_str(&format!(
                "    <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"/>\n",
                to_px_x(rect.x),
                to_px_y(rect.y),
                rect.width * scale,
                rect.height * scale
            ));
        }
        svg.push_str("  </g>\n");

        // Free-space labels. The side labels sit in the top quarter for the
        // first variant and the bottom quarter for the second, so the two
        // drawings don't mirror each other's clutter.
        let c = placement.clearance;
        let y_sides = offset_y + sheet_px_h * if is_first { 0.25 } else { 0.75 };

        svg.push_str("  <g font-family=\"sans-serif\" font-size=\"11\" text-anchor=\"middle\" fill=\"#000\">\n");

        if c.left >= 0.01 {
            svg.push_str(&format!(
                "    <text x=\"{:.2}\" y=\"{:.2}\" dominant-baseline=\"middle\">{} mm</text>\n",
                to_px_x(placement.origin_x / 2.0),
                y_sides,
                format_mm(c.left)
            ));
        }
        if c.right >= 0.01 {
            svg.push_str(&format!(
                "    <text x=\"{:.2}\" y=\"{:.2}\" dominant-baseline=\"middle\">{} mm</text>\n",
                to_px_x(sheet.length - c.right / 2.0),
                y_sides,
                format_mm(c.right)
            ));
        }

        // Top/bottom labels shift sideways so they don't collide with the
        // sheet length label below the drawing.
        let x_center = offset_x + sheet_px_w / 2.0 + if is_first { -20.0 } else { 20.0 };

        if c.top >= 0.01 {
            svg.push_str(&format!(
                "    <text x=\"{:.2}\" y=\"{:.2}\" dominant-baseline=\"middle\">{} mm</text>\n",
                x_center,
                to_px_y(placement.origin_y / 2.0),
                format_mm(c.top)
            ));
        }
        if c.bottom >= 0.01 {
            svg.push_str(&format!(
                "    <text x=\"{:.2}\" y=\"{:.2}\" dominant-baseline=\"middle\">{} mm</text>\n",
                x_center,
                to_px_y(sheet.width - c.bottom / 2.0),
                format_mm(c.bottom)
            ));
        }

        svg.push_str("  </g>\n");
    } else {
        svg.push_str(&format!(
            "  <text x=\"{:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" font-size=\"12\" fill=\"#c00\">Does not fit</text>\n",
            offset_x + 10.0,
            offset_y + 20.0
        ));
    }

    // Dashed print-area outline on top of the grid.
    if print_w > 0.0 && print_h > 0.0 {
        svg.push_str(&format!(
            "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"none\" stroke=\"#999\" stroke-width=\"1\" stroke-dasharray=\"4 3\"/>\n",
            to_px_x(margins.left),
            to_px_y(margins.top),
            print_w * scale,
            print_h * scale
        ));
    }

    // Sheet dimension labels: length below, width rotated along the right edge.
    svg.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" font-size=\"12\" text-anchor=\"middle\" fill=\"#333\">{} mm</text>\n",
        offset_x + sheet_px_w / 2.0,
        offset_y + sheet_px_h + 14.0,
        format_mm(sheet.length)
    ));
    svg.push_str(&format!(
        "  <text transform=\"translate({:.2},{:.2}) rotate(90)\" font-family=\"sans-serif\" font-size=\"12\" text-anchor=\"middle\" dominant-baseline=\"middle\" fill=\"#333\">{} mm</text>\n",
        offset_x + sheet_px_w + 10.0,
        offset_y + sheet_px_h / 2.0,
        format_mm(sheet.width)
    ));

    // Variant title above the sheet.
    let title_color = if best { "#0055cc" } else { "#555" };
    let title = if best {
        format!("Optimal — {} ({} pcs)", layout.orientation.label(), layout.total)
    } else {
        format!("{} ({} pcs)", layout.orientation.label(), layout.total)
    };
    svg.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" font-size=\"12\" text-anchor=\"middle\" fill=\"{}\">{}</text>\n",
        offset_x + sheet_px_w / 2.0,
        offset_y - 6.0,
        title_color,
        title
    ));
}

/// Rasterize SVG content to PNG using resvg.
pub fn write_png(svg_content: &str, png_path: &str, scale: f64) {
    use resvg::usvg;
    use tiny_skia::Pixmap;

    eprint!("Generating PNG at {}x scale...", scale);

    let options = usvg::Options::default();
    let tree = match usvg::Tree::from_str(svg_content, &options) {
        Ok(t) => t,
        Err(e) => {
            eprintln!(" failed: {}", e);
            return;
        }
    };

    let pixmap_width = (PAGE_WIDTH * scale) as u32;
    let pixmap_height = (PAGE_HEIGHT * scale) as u32;

    let mut pixmap = match Pixmap::new(pixmap_width, pixmap_height) {
        Some(p) => p,
        None => {
            eprintln!(" failed: could not create pixmap");
            return;
        }
    };

    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(scale as f32, scale as f32);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    match pixmap.save_png(png_path) {
        Ok(_) => eprintln!(" done!\nWrote: {} ({}x{})", png_path, pixmap_width, pixmap_height),
        Err(e) => eprintln!(" failed: {}", e),
    }
}

fn print_usage() {
    eprintln!("sheetwise render - draw both layout variants as SVG");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    sheetwise render --sheet <LxW> --card <LxW> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    --sheet <LxW>              Sheet size in mm (e.g. 450x320)");
    eprintln!("    -f, --format <name>        Sheet size by preset name");
    eprintln!("    -c, --card <LxW>           Card size in mm (e.g. 90x50)");
    eprintln!("    -g, --gap <n>              Gap between cards (default: 0)");
    eprintln!("    -m, --margins <n|t,r,b,l>  Margins, uniform or per side (default: 0)");
    eprintln!("    -o, --output <file>        Output SVG file (- for stdout, default: stdout)");
    eprintln!("    --png <file>               Also rasterize to PNG");
    eprintln!("    --png-scale <n>            PNG scale factor (default: 2.0)");
    eprintln!();
    eprintln!("EXAMPLE:");
    eprintln!("    sheetwise render --format sra3 --card 90x50 -g 2 -m 5 -o layout.svg");
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sheetwise::{Dimensions, Margins};

    fn sra3_params() -> LayoutParams {
        LayoutParams::new(
            Dimensions::new(450.0, 320.0),
            Dimensions::new(90.0, 50.0),
            2.0,
            Margins::uniform(5.0),
        )
    }

    #[test]
    fn svg_contains_both_variants_and_the_grid() {
        let params = sra3_params();
        let decision = compute_layouts(&params);
        let svg = layout_svg(&params, &decision);

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains("Optimal — Without rotation (24 pcs)"));
        assert!(svg.contains("Rotated 90° (24 pcs)"));
        // 24 + 24 card rects plus sheet/print-area rects and the background.
        let rect_count = svg.matches("<rect").count();
        assert!(rect_count > 48, "expected card grid rects, got {}", rect_count);
    }

    #[test]
    fn svg_labels_free_space() {
        let params = sra3_params();
        let decision = compute_layouts(&params);
        let svg = layout_svg(&params, &decision);

        // Unrotated variant: 42 mm side clearances, 5 mm top/bottom.
        assert!(svg.contains(">42 mm</text>"));
        assert!(svg.contains(">5 mm</text>"));
        // Sheet dimension labels.
        assert!(svg.contains(">450 mm</text>"));
        assert!(svg.contains(">320 mm</text>"));
    }

    #[test]
    fn infeasible_layout_renders_a_note() {
        let params = LayoutParams::new(
            Dimensions::new(100.0, 100.0),
            Dimensions::new(200.0, 200.0),
            0.0,
            Margins::default(),
        );
        let decision = compute_layouts(&params);
        let svg = layout_svg(&params, &decision);

        assert_eq!(svg.matches("Does not fit").count(), 2);
        assert!(!svg.contains("Optimal"));
    }
}
