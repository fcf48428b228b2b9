//! Byte and symbol steps shared by the encoder and decoder
//!
//! text ⇄ UTF-8 bytes ⇄ standard base64 symbols ⇄ link symbols

use crate::error::DecodeFailure;
use crate::variant::{reverse_symbol, Variant};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Text to link symbols in the given variant
pub(crate) fn to_link_symbols(text: &str, variant: Variant) -> String {
    // UTF-8 expansion first; base64 only sees byte-range values.
    let symbols = STANDARD.encode(text.as_bytes());
    variant.apply(&symbols)
}

/// Link symbols of any variant back to text
pub(crate) fn from_link_symbols(param: &str) -> Result<String, DecodeFailure> {
    let trimmed = param.trim();
    if trimmed.is_empty() {
        return Err(DecodeFailure::Empty);
    }
    let symbols = restore_padding(normalize(trimmed))?;
    let bytes = STANDARD.decode(symbols)?;
    Ok(String::from_utf8(bytes)?)
}

/// Reverse every variant's substitutions and drop existing padding
fn normalize(param: &str) -> String {
    param
        .chars()
        .map(reverse_symbol)
        .collect::<String>()
        .trim_end_matches('=')
        .to_string()
}

/// Right-pad with `=` to a whole number of 4-symbol groups
fn restore_padding(mut symbols: String) -> Result<String, DecodeFailure> {
    match symbols.len() % 4 {
        0 => {}
        1 => return Err(DecodeFailure::BadPadding { len: symbols.len() }),
        rem => symbols.extend(std::iter::repeat('=').take(4 - rem)),
    }
    Ok(symbols)
}
