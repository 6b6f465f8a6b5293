//! Plain terminal output.

use crate::models::{Cidr, ParsedCidr};
use colored::Colorize;
use std::error::Error;
use std::io::Write;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// `true` in green, `false` in red.
pub fn format_bool(value: bool) -> String {
    if value {
        "true".green().to_string()
    } else {
        "false".red().to_string()
    }
}

pub fn blocks_plain(blocks: &[Cidr]) -> String {
    blocks.iter().map(|b| format!("{b}\n")).collect()
}

pub fn write_lines<W, I>(out: &mut W, lines: I) -> Result<(), Box<dyn Error>>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = String>,
{
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

pub fn lines_plain(lines: &[String]) -> String {
    lines.iter().map(|l| format!("{l}\n")).collect()
}

/// `ip/prefix  block  IPvN` per record.
pub fn parsed_plain(records: &[ParsedCidr]) -> String {
    records
        .iter()
        .map(|p| {
            format!(
                "{cidr:<43} {block:<43} {version}\n",
                cidr = p.cidr,
                block = Cidr::from_block(p.range()).to_string(),
                version = format!("IPv{}", p.version).blue(),
            )
        })
        .collect()
}
