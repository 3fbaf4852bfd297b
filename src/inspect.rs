//! Key inspection helpers
//!
//! Hex parsing and rendering behind `grantkey-cli`.

use crate::error::{GrantKeyError, Result};
use crate::key::{self, GrantKeyRef};

/// Parse a hex string, with or without a leading "0x"
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(digits).map_err(|e| GrantKeyError::Config(format!("invalid hex {:?}: {}", s, e)))
}

/// Parse a single prefix byte
pub fn parse_prefix(s: &str) -> Result<u8> {
    match parse_hex(s)?.as_slice() {
        [byte] => Ok(*byte),
        other => Err(GrantKeyError::Config(format!(
            "prefix must be exactly one byte, got {} from {:?}",
            other.len(),
            s
        ))),
    }
}

/// Build a key from hex identifiers and a text label, returned as hex
pub fn encode_hex(prefix: u8, primary: &str, secondary: &str, label: &str) -> Result<String> {
    let primary = parse_hex(primary)?;
    let secondary = parse_hex(secondary)?;

    let encoded = key::encode(prefix, &primary, &secondary, label.as_bytes())?;
    Ok(hex::encode(encoded))
}

/// Render a decoded key, one field per line
///
/// The label prints as text when it is UTF-8, otherwise as `0x`-prefixed hex.
pub fn render(decoded: &GrantKeyRef<'_>) -> String {
    let label = match decoded.label_str() {
        Some(text) => text.to_string(),
        None => format!("0x{}", hex::encode(decoded.label)),
    };

    format!(
        "prefix:    {:02x}\nprimary:   {}\nsecondary: {}\nlabel:     {}",
        decoded.prefix,
        hex::encode(decoded.primary),
        hex::encode(decoded.secondary),
        label
    )
}

/// Decode a hex key and render its fields
pub fn decode_hex(raw: &str) -> Result<String> {
    let bytes = parse_hex(raw)?;
    let decoded = key::decode(&bytes)?;
    Ok(render(&decoded))
}
