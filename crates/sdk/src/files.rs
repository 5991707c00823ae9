//! File helpers for building Put requests

use crate::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;

/// Read a file and return its contents base64-encoded (standard alphabet, padded)
pub fn read_file_contents(path: impl AsRef<Path>) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(STANDARD.encode(bytes))
}
