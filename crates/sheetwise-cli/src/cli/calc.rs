//! Compute both orientations and report card counts.

use std::process;

use serde::Serialize;

use sheetwise::{
    compute_layouts, LayoutDecision, LayoutParams, Orientation, OrientationLayout, Placement,
};

use crate::cli::common::{format_mm, try_layout_flag, ParamFlags};

/// One orientation with its derived geometry for JSON output.
#[derive(Serialize)]
struct JsonVariant<'a> {
    #[serde(flatten)]
    layout: &'a OrientationLayout,
    #[serde(skip_serializing_if = "Option::is_none")]
    placement: Option<Placement>,
}

/// Full decision record for JSON output.
#[derive(Serialize)]
struct JsonReport<'a> {
    params: &'a LayoutParams,
    best: Orientation,
    feasible: bool,
    unrotated: JsonVariant<'a>,
    rotated: JsonVariant<'a>,
}

pub fn cmd_calc(args: &[String]) {
    let mut flags = ParamFlags::new();
    let mut json_output = false;

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
            "--json" => json_output = true,
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

    if json_output {
        let report = JsonReport {
            params: &params,
            best: decision.best,
            feasible: !decision.is_infeasible(),
            unrotated: JsonVariant {
                layout: &decision.unrotated,
                placement: Placement::for_layout(
                    params.sheet,
                    params.margins,
                    params.gap,
                    &decision.unrotated,
                ),
            },
            rotated: JsonVariant {
                layout: &decision.rotated,
                placement: Placement::for_layout(
                    params.sheet,
                    params.margins,
                    params.gap,
                    &decision.rotated,
                ),
            },
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("Failed to serialize JSON")
        );
        return;
    }

    print_summary(&params, &decision);
}

fn print_summary(params: &LayoutParams, decision: &LayoutDecision) {
    let m = params.margins;

    println!("═══════════════════════════════════════════════");
    println!("  LAYOUT SUMMARY");
    println!("═══════════════════════════════════════════════");
    println!(
        "  Sheet: {} × {} mm",
        format_mm(params.sheet.length),
        format_mm(params.sheet.width)
    );
    println!(
        "  Margins (t/r/b/l): {}/{}/{}/{} mm",
        format_mm(m.top),
        format_mm(m.right),
        format_mm(m.bottom),
        format_mm(m.left)
    );
    println!("  Gap: {} mm", format_mm(params.gap));
    println!("  ─────────────────────────────────────────────");
    println!("  {}", variant_line(&decision.unrotated));
    println!("  {}", variant_line(&decision.rotated));
    println!("  ─────────────────────────────────────────────");

    if decision.is_infeasible() {
        println!("  Cards do not fit in either orientation.");
    } else {
        let best = decision.best_layout();
        println!(
            "  Optimal: {}, {} pcs ({}×{})",
            best.orientation.label(),
            best.total,
            best.count_x,
            best.count_y
        );
        println!(
            "  Card in optimal orientation: {} × {} mm",
            format_mm(best.card.length),
            format_mm(best.card.width)
        );
    }
    println!("═══════════════════════════════════════════════");
}

fn variant_line(layout: &OrientationLayout) -> String {
    format!(
        "{:17} {} pcs ({}×{})",
        format!("{}:", layout.orientation.label()),
        layout.total,
        layout.count_x,
        layout.count_y
    )
}

fn print_usage() {
    eprintln!("sheetwise calc - compute card counts for both orientations");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    sheetwise calc --sheet <LxW> --card <LxW> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    --sheet <LxW>              Sheet size in mm (e.g. 450x320)");
    eprintln!("    -f, --format <name>        Sheet size by preset name");
    eprintln!("    -c, --card <LxW>           Card size in mm (e.g. 90x50)");
    eprintln!("    -g, --gap <n>              Gap between cards (default: 0)");
    eprintln!("    -m, --margins <n|t,r,b,l>  Margins, uniform or per side (default: 0)");
    eprintln!("    --json                     Emit the full decision as JSON");
    eprintln!();
    eprintln!("EXAMPLE:");
    eprintln!("    sheetwise calc --format sra3 --card 90x50 -g 2 -m 5");
}
