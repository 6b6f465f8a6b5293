//! CSV output.
//!
//! Fields are quoted and padded so the columns line up in a terminal.

use super::terminal::format_field;
use crate::codec::{format_address, FormatOpts};
use crate::models::{Cidr, ParsedCidr};
use itertools::Itertools;
use std::error::Error;
use std::io::Write;

/// One output row per CIDR block.
#[derive(Debug)]
pub struct BlockPrintRow {
    /// Row number, from 1.
    pub j: usize,
    pub cidr: String,
    /// Network address.
    pub first: String,
    /// Broadcast address.
    pub last: String,
    /// Address count, `2^128` for `::/0`.
    pub addresses: String,
}

impl BlockPrintRow {
    pub fn new(j: usize, block: &Cidr) -> BlockPrintRow {
        let range = block.range();
        let addr = |n| format_address(n, range.version, FormatOpts::default());
        BlockPrintRow {
            j,
            cidr: block.to_string(),
            first: addr(range.start),
            last: addr(range.end),
            addresses: match range.size() {
                Some(n) => n.to_string(),
                None => "2^128".to_string(),
            },
        }
    }
}

fn row(fields: &[(String, usize)]) -> String {
    let cells = fields.iter().map(|(v, w)| format_field(v, *w)).join(",");
    format!("{cells}\n")
}

pub fn blocks_csv(blocks: &[Cidr]) -> String {
    let mut out = row(&[
        ("cnt".into(), 6),
        ("cidr".into(), 45),
        ("first".into(), 41),
        ("last".into(), 41),
        ("addresses".into(), 12),
    ]);
    for (i, block) in blocks.iter().enumerate() {
        let r = BlockPrintRow::new(i + 1, block);
        out.push_str(&row(&[
            (r.j.to_string(), 6),
            (r.cidr, 45),
            (r.first, 41),
            (r.last, 41),
            (r.addresses, 12),
        ]));
    }
    out
}

pub fn write_addresses_csv<W, I>(out: &mut W, addresses: I) -> Result<(), Box<dyn Error>>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = String>,
{
    out.write_all(row(&[("ip".into(), 41)]).as_bytes())?;
    for ip in addresses {
        out.write_all(row(&[(ip, 41)]).as_bytes())?;
    }
    Ok(())
}

/// `input,output` pairs, e.g. for normalization.
pub fn pairs_csv(header: (&str, &str), pairs: &[(String, String)]) -> String {
    let mut out = row(&[(header.0.into(), 45), (header.1.into(), 45)]);
    for (a, b) in pairs {
        out.push_str(&row(&[(a.clone(), 45), (b.clone(), 45)]));
    }
    out
}

pub fn parsed_csv(records: &[ParsedCidr]) -> String {
    let mut out = row(&[
        ("cidr".into(), 45),
        ("version".into(), 9),
        ("prefix".into(), 8),
        ("start".into(), 41),
        ("end".into(), 41),
    ]);
    for p in records {
        let addr = |n| format_address(n, p.version, FormatOpts::default());
        out.push_str(&row(&[
            (p.cidr.clone(), 45),
            (p.version.to_string(), 9),
            (p.prefix.to_string(), 8),
            (addr(p.start), 41),
            (addr(p.end), 41),
        ]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_cidr;

    #[test]
    fn test_block_print_row() {
        let r = BlockPrintRow::new(1, &Cidr::new("10.0.0.0/24").unwrap());
        assert_eq!(r.first, "10.0.0.0");
        assert_eq!(r.last, "10.0.0.255");
        assert_eq!(r.addresses, "256");

        let all = BlockPrintRow::new(2, &Cidr::new("::/0").unwrap());
        assert_eq!(all.last, "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff");
        assert_eq!(all.addresses, "2^128");
    }

    #[test]
    fn test_blocks_csv() {
        let out = blocks_csv(&[Cidr::new("10.0.0.0/31").unwrap()]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].trim_start().starts_with("\"cnt\""));
        let cells: Vec<&str> = lines[1].split(',').map(str::trim).collect();
        assert_eq!(
            cells,
            vec!["\"1\"", "\"10.0.0.0/31\"", "\"10.0.0.0\"", "\"10.0.0.1\"", "\"2\""]
        );
    }

    #[test]
    fn test_parsed_csv() {
        let out = parsed_csv(&[parse_cidr("fe80::1%eth0/64").unwrap()]);
        let cells: Vec<&str> = out.lines().nth(1).unwrap().split(',').map(str::trim).collect();
        assert_eq!(cells[0], "\"fe80::1%eth0/64\"");
        assert_eq!(cells[1], "\"6\"");
        assert_eq!(cells[3], "\"fe80::\"");
        assert_eq!(cells[4], "\"fe80::ffff:ffff:ffff:ffff\"");
    }
}
