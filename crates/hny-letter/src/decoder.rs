//! Letter decoder
//!
//! Reads a letter back from a link parameter written by any shipped
//! variant. The variant is never detected explicitly: all substitutes are
//! mapped back to standard base64 first, then a single pipeline runs.

use crate::config::{LinkConfig, DEFAULT_BASE_URL, DEFAULT_PARAM_NAME};
use crate::error::DecodeFailure;
use crate::record::LetterRecord;
use crate::wire;
use url::Url;

/// Decode a bare parameter value
///
/// # Errors
/// Returns [`DecodeFailure`] on any malformed input; never a partial record
pub fn decode(param: &str) -> Result<LetterRecord, DecodeFailure> {
    let result = wire::from_link_symbols(param)
        .and_then(|text| serde_json::from_str::<LetterRecord>(&text).map_err(DecodeFailure::from));
    if let Err(e) = &result {
        tracing::debug!("Rejected letter parameter ({} chars): {}", param.len(), e);
    }
    result
}

/// Decode the letter parameter of a full URL
///
/// # Errors
/// Returns [`DecodeFailure::MissingParam`] when the URL does not parse or
/// has no `f` parameter, or any decode failure of its value
pub fn decode_url(url: &str) -> Result<LetterRecord, DecodeFailure> {
    LetterDecoder::default().decode_url(url)
}

/// Decoder bound to a parameter name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterDecoder {
    param_name: String,
}

impl Default for LetterDecoder {
    fn default() -> Self {
        Self {
            param_name: DEFAULT_PARAM_NAME.to_string(),
        }
    }
}

impl LetterDecoder {
    /// Decoder reading the parameter named in `config`
    #[must_use]
    pub fn new(config: &LinkConfig) -> Self {
        Self {
            param_name: config.param_name.clone(),
        }
    }

    /// Decode a bare parameter value
    ///
    /// # Errors
    /// See [`decode`]
    #[inline]
    pub fn decode(&self, param: &str) -> Result<LetterRecord, DecodeFailure> {
        decode(param)
    }

    /// Decode the letter parameter of a full URL
    ///
    /// # Errors
    /// See [`decode_url`]
    pub fn decode_url(&self, url: &str) -> Result<LetterRecord, DecodeFailure> {
        let param = self
            .param_from_url(url)
            .ok_or_else(|| DecodeFailure::MissingParam(self.param_name.clone()))?;
        decode(&param)
    }

    /// Decode input that is either a full URL or a bare parameter
    ///
    /// # Errors
    /// See [`decode`] and [`decode_url`]
    pub fn decode_input(&self, input: &str) -> Result<LetterRecord, DecodeFailure> {
        let input = input.trim();
        if input.contains('?') || input.contains("://") {
            self.decode_url(input)
        } else {
            decode(input)
        }
    }

    /// Name of the letter query parameter
    #[inline]
    #[must_use]
    pub fn param_name(&self) -> &str {
        &self.param_name
    }

    /// Value of the letter parameter, percent-decoded
    ///
    /// Other parameters and any `#fragment` are ignored. The first
    /// occurrence wins. A relative reference such as `/?f=...` is read
    /// against the default viewer host.
    #[must_use]
    pub fn param_from_url(&self, url: &str) -> Option<String> {
        let parsed = parse_url(url)?;
        let value = parsed
            .query_pairs()
            .find(|(name, _)| *name == self.param_name)
            .map(|(_, value)| value.into_owned());
        value
    }
}

fn parse_url(url: &str) -> Option<Url> {
    match Url::parse(url) {
        Ok(parsed) => Some(parsed),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(DEFAULT_BASE_URL).ok()?.join(url).ok()
        }
        Err(e) => {
            tracing::debug!("Unparseable letter URL: {}", e);
            None
        }
    }
}
