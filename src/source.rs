use std::io::Read;

use simdutf8::basic::from_utf8;

use crate::error::ScanError;

/// Validates raw source bytes as UTF-8 without copying.
pub fn decode(bytes: &[u8]) -> Result<&str, ScanError> {
    Ok(from_utf8(bytes)?)
}

/// Drains a character source into memory and validates it.
pub fn read_source<R: Read>(mut reader: R) -> Result<String, ScanError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(decode(&bytes)?.to_owned())
}
