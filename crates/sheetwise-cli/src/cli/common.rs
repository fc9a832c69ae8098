//! Common utilities shared across CLI commands.
//!
//! Flag parsing follows the input contract of the layout core: unparsable
//! numbers default to 0 and negative values clamp to 0, so bad text can at
//! worst produce a degenerate (zero-count) layout, never a crash.

use sheetwise::{Dimensions, LayoutParams, Margins, SheetFormat};

/// Layout parameters collected from command-line flags.
#[derive(Debug, Default)]
pub struct ParamFlags {
    pub sheet: Option<Dimensions>,
    pub card: Option<Dimensions>,
    pub gap: f64,
    pub margins: Margins,
}

impl ParamFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the final parameter record, enforcing the caller-side
    /// preconditions: both sizes supplied and a positive sheet.
    pub fn into_params(self) -> Result<LayoutParams, String> {
        let sheet = self
            .sheet
            .ok_or("missing sheet size: use --sheet LxW or --format <name>")?;
        let card = self.card.ok_or("missing card size: use --card LxW")?;

        if !sheet.is_positive() {
            return Err("set positive sheet dimensions".to_string());
        }

        Ok(LayoutParams::new(sheet, card, self.gap, self.margins))
    }
}

/// Try to consume one shared layout flag (and its value) at `*i`.
///
/// Returns `Ok(true)` with `*i` advanced past the flag when it was one of
/// ours, `Ok(false)` with `*i` untouched when the command should handle it.
pub fn try_layout_flag(
    args: &[String],
    i: &mut usize,
    flags: &mut ParamFlags,
) -> Result<bool, String> {
    match args[*i].as_str() {
        "--sheet" => {
            *i += 1;
            let value = expect_value(args, *i, "--sheet")?;
            flags.sheet = Some(
                parse_dims(value).ok_or_else(|| format!("--sheet expects LxW, got '{}'", value))?,
            );
        }
        "-f" | "--format" => {
            *i += 1;
            let value = expect_value(args, *i, "--format")?;
            let format = SheetFormat::from_name(value).ok_or_else(|| {
                format!("unknown sheet format '{}' (see 'sheetwise formats')", value)
            })?;
            flags.sheet = Some(format.dimensions());
        }
        "-c" | "--card" => {
            *i += 1;
            let value = expect_value(args, *i, "--card")?;
            flags.card = Some(
                parse_dims(value).ok_or_else(|| format!("--card expects LxW, got '{}'", value))?,
            );
        }
        "-g" | "--gap" => {
            *i += 1;
            flags.gap = parse_value(expect_value(args, *i, "--gap")?);
        }
        "-m" | "--margins" => {
            *i += 1;
            let value = expect_value(args, *i, "--margins")?;
            flags.margins = parse_margins(value)
                .ok_or_else(|| format!("--margins expects N or T,R,B,L, got '{}'", value))?;
        }
        _ => return Ok(false),
    }
    *i += 1;
    Ok(true)
}

fn expect_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i)
        .map(|s| s.as_str())
        .ok_or_else(|| format!("{} requires a value", flag))
}

/// Parse a single non-negative number; unparsable text becomes 0.
pub fn parse_value(s: &str) -> f64 {
    s.trim().parse::<f64>().unwrap_or(0.0).max(0.0)
}

/// Parse an `LxW` size pair like `450x320`.
pub fn parse_dims(s: &str) -> Option<Dimensions> {
    let mut parts = s.trim().splitn(2, ['x', 'X']);
    let length = parts.next()?;
    let width = parts.next()?;
    Some(Dimensions::new(parse_value(length), parse_value(width)))
}

/// Parse margins: one value for all four sides, or `top,right,bottom,left`.
pub fn parse_margins(s: &str) -> Option<Margins> {
    let parts: Vec<&str> = s.trim().split(',').collect();
    match parts.as_slice() {
        [all] => Some(Margins::uniform(parse_value(all))),
        [top, right, bottom, left] => Some(Margins::new(
            parse_value(top),
            parse_value(right),
            parse_value(bottom),
            parse_value(left),
        )),
        _ => None,
    }
}

/// Format a millimeter value to 0.1 precision, trimming a trailing `.0`.
pub fn format_mm(value: f64) -> String {
    let v = (value * 10.0).round() / 10.0;
    if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{:.1}", v)
    }
}

// ============================================================================
// TESTS
// ============================================================================
