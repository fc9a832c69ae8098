//! CLI command implementations.
//!
//! This module contains the implementations for the various CLI subcommands:
//! - `calc` - Compute both orientations and report card counts
//! - `render` - Draw the two layout variants side by side as SVG/PNG
//! - `formats` - List built-in sheet format presets
//! - `job` - Run a batch of layout jobs from a YAML file

pub mod common;
pub mod calc;
pub mod render;
pub mod formats;
pub mod job;

pub use calc::cmd_calc;
pub use render::cmd_render;
pub use formats::cmd_formats;
pub use job::cmd_job;
