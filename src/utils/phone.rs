use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

// Mask produced by the registration form input: +CC (DD) NNNNN-NNNN.
static PHONE_MASK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+(\d{2}) \((\d{2})\) (\d{5})-(\d{4})$").expect("phone mask pattern is valid")
});

/// A masked phone number decomposed into the parts the backend expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneParts {
    pub country: String,
    pub ddd: String,
    pub number: String,
}

/// Raised when the raw input does not match the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Enter a phone number in the +00 (00) 00000-0000 format")]
pub struct InvalidPhone;

/// Decompose a masked phone string. The hyphen separating the two halves of
/// the local number is not part of the wire format and is stripped.
pub fn parse_phone_mask(raw: &str) -> Result<PhoneParts, InvalidPhone> {
    let caps = PHONE_MASK.captures(raw.trim()).ok_or(InvalidPhone)?;
    Ok(PhoneParts {
        country: caps[1].to_string(),
        ddd: caps[2].to_string(),
        number: format!("{}{}", &caps[3], &caps[4]),
    })
}
