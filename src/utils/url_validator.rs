//! Validation of destination URLs submitted for shortening.

use std::borrow::Cow;
use url::Url;
use validator::ValidationError;

/// Maximum accepted length of an original URL, in characters.
pub const MAX_URL_LENGTH: usize = 2048;

/// Checks that `raw` is an absolute `http`/`https` URL with a host.
///
/// The URL is not normalized: the stored value is exactly what the client sent,
/// so idempotent lookups compare raw strings.
///
/// Used as a `validator` custom rule on request DTOs.
pub fn validate_original_url(raw: &str) -> Result<(), ValidationError> {
    if raw.trim().is_empty() {
        return Err(invalid("empty_url", "URL must not be empty"));
    }

    if raw.chars().count() > MAX_URL_LENGTH {
        return Err(invalid("url_too_long", "URL exceeds the maximum length of 2048 characters"));
    }

    let parsed = Url::parse(raw).map_err(|_| {
        invalid(
            "invalid_url",
            "Invalid URL format. It must include the http or https protocol",
        )
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid("unsupported_scheme", "Only http and https URLs are accepted"));
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing_host", "URL must contain a host"));
    }

    Ok(())
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}
