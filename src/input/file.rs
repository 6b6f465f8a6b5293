//! Network list files.
//!
//! A list is either plain text with one token per line or a JSON array of strings.

use std::error::Error;
use std::io::Read;
use std::path::Path;

/// Path that reads from stdin.
pub const STDIN_PATH: &str = "-";

/// Read the network tokens in `path` (`-` for stdin).
///
/// # Returns
/// * `Ok(Vec<String>)` - Trimmed tokens, blank lines and `#` comments dropped
/// * `Err` - If the file is missing, unreadable or holds invalid JSON
pub fn read_networks(path: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let text = if path == STDIN_PATH {
        log::info!("Reading networks from stdin");
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| format!("Error reading stdin: {e}"))?;
        text
    } else {
        if !Path::new(path).exists() {
            return Err(format!("Network file does not exist: {path}").into());
        }
        log::info!("Reading networks from file: {path}");
        std::fs::read_to_string(path).map_err(|e| format!("Error reading {path}: {e}"))?
    };

    let networks = if is_json(path, &text) {
        parse_json(path, &text)?
    } else {
        parse_lines(&text)
    };

    if networks.is_empty() {
        log::warn!("No networks found in {path}");
    } else {
        log::debug!("Read {} networks from {path}", networks.len());
    }
    Ok(networks)
}

fn is_json(path: &str, text: &str) -> bool {
    let by_extension = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    by_extension || text.trim_start().starts_with('[')
}

/// One token per line.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// A JSON array of token strings. Blank entries are skipped with a warning.
pub fn parse_json(source: &str, text: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let de = &mut serde_json::Deserializer::from_str(text);
    let raw: Vec<String> = serde_path_to_error::deserialize(de).map_err(|e| {
        format!(
            "Error parsing JSON network list {source} at {path}: {inner}",
            path = e.path(),
            inner = e.inner()
        )
    })?;

    let mut networks = Vec::with_capacity(raw.len());
    for (i, net) in raw.iter().enumerate() {
        let net = net.trim();
        if net.is_empty() {
            log::warn!("Skipping blank entry [{i}] in {source}");
            continue;
        }
        networks.push(net.to_string());
    }
    Ok(networks)
}
