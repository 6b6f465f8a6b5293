//! Reading network lists for the command line tool.

mod file;

pub use file::{parse_json, parse_lines, read_networks, STDIN_PATH};
