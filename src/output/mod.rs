//! Output rendering for command results.
//!
//! - [`csv`] - padded CSV rows
//! - [`json`] - pretty JSON
//! - [`terminal`] - plain lines with colors

mod csv;
mod json;
mod terminal;

use crate::codec::{format_address, from_ip_addr, FormatOpts};
use crate::models::{Cidr, ParsedCidr};
use std::error::Error;
use std::io::Write;
use std::net::IpAddr;

pub use csv::BlockPrintRow;
pub use json::to_json;
pub use terminal::{format_bool, format_field};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Csv,
    Json,
}

pub fn render_blocks(blocks: &[Cidr], format: OutputFormat) -> Result<String, Box<dyn Error>> {
    match format {
        OutputFormat::Plain => Ok(terminal::blocks_plain(blocks)),
        OutputFormat::Csv => Ok(csv::blocks_csv(blocks)),
        OutputFormat::Json => to_json(blocks),
    }
}

/// Write addresses to `out` one at a time as they are pulled from `addresses`.
///
/// Addresses are printed the way [`Cidr`] prints its network address, so an
/// IPv4-mapped address comes out as `::ffff:102:304`.
pub fn write_addresses<W, I>(
    out: &mut W,
    addresses: I,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = IpAddr>,
{
    let text = addresses.into_iter().map(|ip| {
        let (number, version) = from_ip_addr(ip);
        format_address(number, version, FormatOpts::default())
    });
    match format {
        OutputFormat::Plain => terminal::write_lines(out, text),
        OutputFormat::Csv => csv::write_addresses_csv(out, text),
        OutputFormat::Json => json::write_json_list(out, text),
    }
}

pub fn render_bool(value: bool, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    match format {
        OutputFormat::Plain => Ok(format!("{}\n", format_bool(value))),
        OutputFormat::Csv => Ok(format!("{}\n", format_field(value, 7))),
        OutputFormat::Json => to_json(&value),
    }
}

/// `(input, normalized)` pairs.
pub fn render_normalized(
    pairs: &[(String, String)],
    format: OutputFormat,
) -> Result<String, Box<dyn Error>> {
    match format {
        OutputFormat::Plain => {
            let lines: Vec<String> = pairs.iter().map(|(_, n)| n.clone()).collect();
            Ok(terminal::lines_plain(&lines))
        }
        OutputFormat::Csv => Ok(csv::pairs_csv(("input", "normalized"), pairs)),
        OutputFormat::Json => {
            let list: Vec<&str> = pairs.iter().map(|(_, n)| n.as_str()).collect();
            to_json(&list)
        }
    }
}

pub fn render_parsed(
    records: &[ParsedCidr],
    format: OutputFormat,
) -> Result<String, Box<dyn Error>> {
    match format {
        OutputFormat::Plain => Ok(terminal::parsed_plain(records)),
        OutputFormat::Csv => Ok(csv::parsed_csv(records)),
        OutputFormat::Json => to_json(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(ips: &[&str], format: OutputFormat) -> String {
        let ips = ips.iter().map(|ip| ip.parse::<IpAddr>().unwrap());
        let mut out = Vec::new();
        write_addresses(&mut out, ips, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    /// Accepts `cap` bytes, then fails like a closed pipe.
    struct Capped {
        buf: Vec<u8>,
        cap: usize,
    }

    impl Write for Capped {
        fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
            if self.buf.len() + bytes.len() > self.cap {
                return Err(std::io::ErrorKind::BrokenPipe.into());
            }
            self.buf.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_addresses_formats() {
        let ips = ["1.2.3.0", "::1", "::ffff:1.2.3.4"];
        assert_eq!(
            written(&ips, OutputFormat::Plain),
            "1.2.3.0\n::1\n::ffff:102:304\n"
        );
        let json: Vec<String> = serde_json::from_str(&written(&ips, OutputFormat::Json)).unwrap();
        assert_eq!(json, vec!["1.2.3.0", "::1", "::ffff:102:304"]);
        let csv = written(&ips, OutputFormat::Csv);
        assert_eq!(csv.lines().count(), 4);
        assert!(csv.lines().nth(3).unwrap().contains("\"::ffff:102:304\""), "{csv}");
    }

    #[test]
    fn test_write_addresses_empty() {
        assert_eq!(written(&[], OutputFormat::Plain), "");
        assert_eq!(written(&[], OutputFormat::Json), "[]\n");
    }

    #[test]
    fn test_write_addresses_streams_unbounded_input() {
        use crate::models::{IpVersion, Range};
        use crate::processing::Expander;

        // 2^128 addresses: only a streaming writer gets to the write error
        let all = Expander::new(vec![Range::new(0, u128::MAX, IpVersion::V6)]);
        let mut out = Capped {
            buf: Vec::new(),
            cap: 4096,
        };
        assert!(write_addresses(&mut out, all, OutputFormat::Plain).is_err());
        assert!(out.buf.starts_with(b"::\n::1\n::2\n"));
    }

    #[test]
    fn test_render_normalized_plain() {
        let pairs = vec![("::0".to_string(), "::".to_string())];
        assert_eq!(render_normalized(&pairs, OutputFormat::Plain).unwrap(), "::\n");
        assert!(render_normalized(&pairs, OutputFormat::Csv)
            .unwrap()
            .contains("\"::0\""));
    }

    #[test]
    fn test_render_bool_json() {
        assert_eq!(render_bool(false, OutputFormat::Json).unwrap(), "false\n");
    }
}
