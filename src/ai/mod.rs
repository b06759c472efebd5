//! AI contracts: query translation, recipe extraction, result localization.
//!
//! Each contract renders a prompt, calls the provider's single `generate`
//! primitive, and (for the two structured contracts) parses the reply into a
//! typed value. Structured replies that fail to parse abort the request with
//! `MalformedAIOutput`; there is no retry and no non-AI fallback.

pub mod extract;
pub mod localize;
pub mod query;

use crate::error::ApiError;

/// Deserialize a schema-constrained reply, mapping failure to the
/// request-fatal malformed-output error.
pub(crate) fn parse_reply<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T, ApiError> {
    serde_json::from_str(raw).map_err(|e| ApiError::MalformedAiOutput(e.to_string()))
}
