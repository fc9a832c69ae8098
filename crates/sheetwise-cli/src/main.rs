//! sheetwise - imposition layout calculator CLI
//!
//! Usage:
//!   sheetwise calc --sheet 450x320 --card 90x50 [-g 2] [-m 5]
//!   sheetwise render --format sra3 --card 90x50 -o layout.svg
//!   sheetwise job <jobs.yaml>
//!   sheetwise formats

use std::env;
use std::process;

mod cli;

use cli::{cmd_calc, cmd_formats, cmd_job, cmd_render};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() >= 2 {
        match args[1].as_str() {
            "calc" => {
                cmd_calc(&args[2..]);
                return;
            }
            "render" => {
                cmd_render(&args[2..]);
                return;
            }
            "formats" => {
                cmd_formats();
                return;
            }
            "job" => {
                cmd_job(&args[2..]);
                return;
            }
            "help" | "--help" | "-h" => {
                print_usage(&args[0]);
                return;
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!();
                print_usage(&args[0]);
                process::exit(1);
            }
        }
    }

    print_usage(&args[0]);
    process::exit(1);
}

fn print_usage(prog: &str) {
    eprintln!("sheetwise - how many cards fit on a press sheet");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} calc [options]       Compute both orientations and report counts", prog);
    eprintln!("  {} render [options]     Draw both variants as SVG (optionally PNG)", prog);
    eprintln!("  {} job <file.yaml>      Run a batch of layout jobs from YAML", prog);
    eprintln!("  {} formats              List built-in sheet formats", prog);
    eprintln!();
    eprintln!("Layout options (calc and render):");
    eprintln!("  --sheet <LxW>          Sheet size in mm (e.g. 450x320)");
    eprintln!("  -f, --format <name>    Sheet size by preset name (see 'formats')");
    eprintln!("  -c, --card <LxW>       Card size in mm (e.g. 90x50)");
    eprintln!("  -g, --gap <n>          Gap between cards (default: 0)");
    eprintln!("  -m, --margins <n|t,r,b,l>  Sheet margins, uniform or per side (default: 0)");
    eprintln!();
    eprintln!("Calc options:");
    eprintln!("  --json                 Emit the full decision as JSON");
    eprintln!();
    eprintln!("Render options:");
    eprintln!("  -o, --output <file>    Output SVG file (- for stdout, default: stdout)");
    eprintln!("  --png <file>           Also rasterize to PNG");
    eprintln!("  --png-scale <n>        PNG scale factor (default: 2.0)");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} calc --format sra3 --card 90x50 -g 2 -m 5", prog);
    eprintln!("  {} render --sheet 500x350 --card 90x55 -g 3 -m 10,15,10,15 -o run.svg", prog);
}
