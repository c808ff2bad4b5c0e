use serde_json::Value;
use std::io::{self, Read};

/// Attempt to read JSON from stdin if data is being piped.
/// Returns None if stdin is a TTY (interactive).
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse_piped(&buffer)
}

/// Blank input counts as "nothing piped" rather than a parse error.
fn parse_piped(buffer: &str) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(trimmed)
        .map_err(|e| format!("Failed to parse JSON from stdin: {e}"))?;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_none() {
        assert!(parse_piped("  \n\t").unwrap().is_none());
    }

    #[test]
    fn test_json_is_parsed() {
        let value = parse_piped(r#"{"tenure_years": 10}"#).unwrap().unwrap();
        assert_eq!(value["tenure_years"], 10);
    }

    #[test]
    fn test_garbage_is_error() {
        let err = parse_piped("tenure=10").unwrap_err();
        assert!(err.to_string().contains("stdin"));
    }
}
