//! JSON output.

use serde::Serialize;
use std::error::Error;
use std::io::Write;

/// Pretty JSON for any serializable result, newline terminated.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, Box<dyn Error>> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| format!("Error serializing JSON: {e}"))?;
    Ok(format!("{json}\n"))
}

/// Stream a JSON array of strings in the same layout as [`to_json`].
pub fn write_json_list<W, I>(out: &mut W, items: I) -> Result<(), Box<dyn Error>>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = String>,
{
    let mut empty = true;
    for item in items {
        let item =
            serde_json::to_string(&item).map_err(|e| format!("Error serializing JSON: {e}"))?;
        let open = if empty { "[" } else { "," };
        write!(out, "{open}\n  {item}")?;
        empty = false;
    }
    out.write_all(if empty { "[]\n" } else { "\n]\n" }.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_cidr, Cidr};

    #[test]
    fn test_blocks_serialize_as_strings() {
        let blocks = vec![Cidr::new("1.0.0.0/23").unwrap(), Cidr::new("::/0").unwrap()];
        let value: Vec<String> = serde_json::from_str(&to_json(&blocks).unwrap()).unwrap();
        assert_eq!(value, vec!["1.0.0.0/23", "::/0"]);
    }

    #[test]
    fn test_parsed_record() {
        let parsed = parse_cidr("1.2.3.4/24").unwrap();
        let value: serde_json::Value = serde_json::from_str(&to_json(&parsed).unwrap()).unwrap();
        assert_eq!(value["cidr"], "1.2.3.4/24");
        assert_eq!(value["version"], "4");
        assert_eq!(value["prefix_present"], true);
        assert_eq!(value["start"], 0x01020300u64);
    }

    #[test]
    fn test_streamed_list_matches_pretty() {
        let items = vec!["10.0.0.0".to_string(), "::1".to_string()];
        let mut out = Vec::new();
        write_json_list(&mut out, items.clone()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), to_json(&items).unwrap());

        let mut out = Vec::new();
        write_json_list(&mut out, Vec::new()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), to_json(&Vec::<String>::new()).unwrap());
    }

    #[test]
    fn test_bool() {
        assert_eq!(to_json(&true).unwrap(), "true\n");
    }
}
