//! Command line interface.
//!
//! Every command reads network lists from files (`-` for stdin) and renders its result
//! as plain text, CSV or JSON.

use crate::config::Settings;
use crate::input::read_networks;
use crate::models::{parse_cidr, ParsedCidr};
use crate::output::{self, OutputFormat};
use crate::processing::NormalizeOpts;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(name = "cidr-tools", author, version)]
#[command(about = "Merge, exclude, expand and compare IPv4/IPv6 networks")]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge networks into the minimal list of CIDR blocks
    Merge {
        /// Network files, one network per line or a JSON array
        #[arg(value_name = "FILE", required = true)]
        files: Vec<String>,
    },

    /// Remove the networks in EXCLUDE from the networks in BASE
    Exclude {
        #[arg(value_name = "BASE")]
        base: String,
        #[arg(value_name = "EXCLUDE")]
        exclude: String,
    },

    /// List every address of the merged networks
    Expand {
        #[arg(value_name = "FILE", required = true)]
        files: Vec<String>,

        /// Stop after N addresses, 0 for no limit
        #[arg(short, long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Check whether any network in A overlaps any network in B
    Overlap {
        #[arg(value_name = "A")]
        a: String,
        #[arg(value_name = "B")]
        b: String,
    },

    /// Check whether the networks in A cover every network in B
    Contains {
        #[arg(value_name = "A")]
        a: String,
        #[arg(value_name = "B")]
        b: String,
    },

    /// Print networks in canonical form
    Normalize {
        #[arg(value_name = "FILE", required = true)]
        files: Vec<String>,

        /// Print all eight IPv6 groups
        #[arg(long)]
        no_compress: bool,

        /// Print a dotted IPv4 tail as hex groups
        #[arg(long)]
        hexify: bool,
    },

    /// Show how each network is parsed
    Parse {
        #[arg(value_name = "FILE", required = true)]
        files: Vec<String>,
    },
}

fn read_all(files: &[String]) -> Result<Vec<String>, Box<dyn Error>> {
    let mut networks = Vec::new();
    for file in files {
        networks.extend(read_networks(file)?);
    }
    Ok(networks)
}

/// Run a parsed command and write its output to `out`.
///
/// `expand` writes each address as it is generated; the other commands render first.
pub fn run<W: Write + ?Sized>(
    cli: &Cli,
    settings: &Settings,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    let format = cli.format;
    log::info!("#Start {:?} as {format:?}", cli.command);

    let rendered = match &cli.command {
        Commands::Merge { files } => {
            let blocks = crate::merge_cidr(read_all(files)?)?;
            output::render_blocks(&blocks, format)
        }
        Commands::Exclude { base, exclude } => {
            let blocks = crate::exclude_cidr(read_networks(base)?, read_networks(exclude)?)?;
            output::render_blocks(&blocks, format)
        }
        Commands::Expand { files, limit } => {
            let limit = limit.unwrap_or(settings.expand_limit);
            let mut addresses = crate::expand_cidr(read_all(files)?)?.peekable();
            match limit {
                0 => output::write_addresses(out, addresses.by_ref(), format)?,
                n => output::write_addresses(out, addresses.by_ref().take(n), format)?,
            }
            if addresses.peek().is_some() {
                log::warn!("Expansion stopped after {limit} addresses, raise --limit for more");
            }
            return Ok(());
        }
        Commands::Overlap { a, b } => {
            let overlaps = crate::overlap_cidr(read_networks(a)?, read_networks(b)?)?;
            output::render_bool(overlaps, format)
        }
        Commands::Contains { a, b } => {
            let contains = crate::contains_cidr(read_networks(a)?, read_networks(b)?)?;
            output::render_bool(contains, format)
        }
        Commands::Normalize {
            files,
            no_compress,
            hexify,
        } => {
            let opts = NormalizeOpts {
                compress: !no_compress,
                hexify: *hexify,
            };
            let pairs = read_all(files)?
                .into_iter()
                .map(|net| {
                    let normalized = crate::normalize_cidr(&net, opts)?;
                    Ok((net, normalized))
                })
                .collect::<Result<Vec<(String, String)>, Box<dyn Error>>>()?;
            output::render_normalized(&pairs, format)
        }
        Commands::Parse { files } => {
            let records = read_all(files)?
                .iter()
                .map(|net| parse_cidr(net))
                .collect::<Result<Vec<ParsedCidr>, _>>()?;
            output::render_parsed(&records, format)
        }
    }?;
    out.write_all(rendered.as_bytes())?;
    Ok(())
}
