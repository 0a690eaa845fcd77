//! CLI argument validation functions
//!
//! Value parsers for arguments that clap cannot check on its own.

use std::fs;
use std::path::PathBuf;

/// Marker for reading messages from standard input
pub const STDIN_MARKER: &str = "-";

/// Validate that a configuration file exists and is readable
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.is_file() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    fs::File::open(&path)
        .map(|_| path)
        .map_err(|e| format!("Cannot read configuration file '{}': {}", path_str, e))
}

/// Validate the messages source: `-` for stdin, otherwise a readable file
pub fn validate_messages_source(path_str: &str) -> Result<PathBuf, String> {
    if path_str == STDIN_MARKER {
        return Ok(PathBuf::from(STDIN_MARKER));
    }

    let path = PathBuf::from(path_str);
    if !path.is_file() {
        return Err(format!("Messages file does not exist: '{}'", path_str));
    }

    Ok(path)
}

/// Validate a batch id: a non-negative integer
pub fn validate_batch_id(id_str: &str) -> Result<i64, String> {
    let id: i64 = id_str
        .trim()
        .parse()
        .map_err(|_| format!("Batch id must be an integer, got: '{}'", id_str))?;

    if id < 0 {
        return Err(format!("Batch id cannot be negative, got: {}", id));
    }

    Ok(id)
}

/// Validate a webhook or base URL given on the command line
pub fn validate_http_url(url_str: &str) -> Result<String, String> {
    let url = reqwest::Url::parse(url_str.trim())
        .map_err(|e| format!("Invalid URL '{}': {}", url_str, e))?;

    match url.scheme() {
        "http" | "https" => Ok(url_str.trim().to_string()),
        other => Err(format!("URL must use http or https, got '{}'", other)),
    }
}
