use serde_json::Value;
use std::io::{self, Read};

/// Read loan terms piped on stdin, as JSON or YAML.
/// Returns None when stdin is a terminal or the pipe is empty.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse_piped(&buffer)
}

fn parse_piped(buffer: &str) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if trimmed.starts_with('{') {
        return Ok(Some(serde_json::from_str(trimmed)?));
    }
    let value: Value = serde_yaml::from_str(trimmed)
        .map_err(|e| format!("stdin is neither JSON nor YAML: {}", e))?;
    Ok(Some(value))
}
