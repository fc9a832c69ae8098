//! Batch layout jobs from a YAML file.
//!
//! A job file describes a set of sheet/card combinations to evaluate in one
//! run, each optionally rendered to its own SVG.

use std::fs;
use std::path::Path;
use std::process;

use serde::{Deserialize, Serialize};

use sheetwise::{compute_layouts, Dimensions, LayoutParams, Margins, SheetFormat};

use crate::cli::render::layout_svg;

/// A complete job file: a named batch of layout jobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobFile {
    /// Batch name/title.
    pub name: String,

    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,

    /// Jobs to run, in order.
    pub jobs: Vec<JobSpec>,
}

/// One sheet/card combination to evaluate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSpec {
    /// Job name (for identification in the report).
    pub name: String,

    /// Named sheet preset; an explicit `sheet` block takes precedence.
    #[serde(default)]
    pub format: Option<String>,

    /// Explicit sheet size in mm.
    #[serde(default)]
    pub sheet: Option<Dimensions>,

    /// Card size in mm.
    pub card: Dimensions,

    /// Gap between cards.
    #[serde(default)]
    pub gap: f64,

    /// Sheet margins.
    #[serde(default)]
    pub margins: Margins,

    /// Optional SVG output path for this job.
    #[serde(default)]
    pub output: Option<String>,
}

impl JobFile {
    /// Load a job file from YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read job file: {}", e))?;

        serde_yaml::from_str(&content).map_err(|e| format!("Failed to parse job YAML: {}", e))
    }
}

impl JobSpec {
    /// Resolve the sheet source and normalize everything into core params.
    pub fn params(&self) -> Result<LayoutParams, String> {
        let sheet = match (self.sheet, &self.format) {
            (Some(dims), _) => dims,
            (None, Some(name)) => SheetFormat::from_name(name)
                .ok_or_else(|| format!("job '{}': unknown sheet format '{}'", self.name, name))?
                .dimensions(),
            (None, None) => {
                return Err(format!("job '{}': needs either 'sheet' or 'format'", self.name))
            }
        };

        if !sheet.is_positive() {
            return Err(format!("job '{}': set positive sheet dimensions", self.name));
        }

        Ok(LayoutParams::new(sheet, self.card, self.gap, self.margins))
    }
}

/// Execute the job command.
pub fn cmd_job(args: &[String]) {
    if args.is_empty() {
        print_usage();
        return;
    }

    let mut job_path: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--example" => {
                print_example();
                return;
            }
            arg if !arg.starts_with('-') => {
                job_path = Some(arg.to_string());
            }
            _ => {}
        }
        i += 1;
    }

    let job_path = match job_path {
        Some(p) => p,
        None => {
            eprintln!("Error: No job file specified");
            print_usage();
            process::exit(1);
        }
    };

    eprintln!("Loading jobs: {}", job_path);

    let file = match JobFile::load(&job_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    eprintln!("Batch: {}", file.name);
    if let Some(description) = &file.description {
        eprintln!("{}", description);
    }
    eprintln!("Jobs: {}\n", file.jobs.len());

    let mut failed = 0;

    for job in &file.jobs {
        let params = match job.params() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("  {:16} ERROR: {}", job.name, e);
                failed += 1;
                continue;
            }
        };

        let decision = compute_layouts(&params);
        let best = decision.best_layout();

        if decision.is_infeasible() {
            eprintln!("  {:16} does not fit", job.name);
        } else {
            eprintln!(
                "  {:16} {} pcs ({}×{}) {}",
                job.name,
                best.total,
                best.count_x,
                best.count_y,
                best.orientation.label()
            );
        }

        if let Some(output) = &job.output {
            let svg = layout_svg(&params, &decision);
            match fs::write(output, &svg) {
                Ok(()) => eprintln!("  {:16} wrote {}", "", output),
                Err(e) => {
                    eprintln!("  {:16} ERROR: failed to write {}: {}", "", output, e);
                    failed += 1;
                }
            }
        }
    }

    if failed > 0 {
        eprintln!("\n{} job(s) failed", failed);
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!("sheetwise job - run a batch of layout jobs from YAML");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    sheetwise job <jobs.yaml> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    --example    Print an example job YAML");
    eprintln!("    -h, --help   Show this help");
    eprintln!();
    eprintln!("EXAMPLE:");
    eprintln!("    sheetwise job print_run.yaml");
}

fn print_example() {
    println!(
        r##"# Example sheetwise job file
name: "Business card run"
description: "Card counts for the usual stocks"

jobs:
  - name: cards_sra3
    format: sra3          # or an explicit sheet: {{ length: 450, width: 320 }}
    card: {{ length: 90, width: 50 }}
    gap: 2
    margins: {{ top: 5, right: 5, bottom: 5, left: 5 }}
    output: cards_sra3.svg

  - name: flyers_500x700
    sheet: {{ length: 700, width: 500 }}
    card: {{ length: 210, width: 99 }}
    gap: 3
    margins: {{ top: 10, right: 10, bottom: 10, left: 10 }}
"##
    );
}

// ============================================================================
// TESTS
// ============================================================================
