//! Short code generation and format checks.
//!
//! Codes are drawn uniformly from an alphabet without look-alike characters
//! (`0`/`O`, `1`/`l`/`I`) using the thread-local CSPRNG.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// Number of characters in every short code.
pub const CODE_LENGTH: usize = 6;

/// Characters a generated code may contain.
pub const ALPHABET: &[u8] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Draws a random code of `length` characters from [`ALPHABET`].
///
/// # Examples
///
/// ```ignore
/// let code = random_code(CODE_LENGTH);
/// assert_eq!(code.len(), 6);
/// ```
pub fn random_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

/// Rejects codes that cannot exist before the store is queried.
///
/// # Errors
///
/// Returns [`AppError::Validation`] unless `code` has exactly [`CODE_LENGTH`] characters.
pub fn validate_code_format(code: &str) -> Result<(), AppError> {
    let length = code.chars().count();

    if length != CODE_LENGTH {
        return Err(AppError::bad_request(
            format!("Short code must be exactly {CODE_LENGTH} characters"),
            json!({ "provided_length": length }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_code_has_requested_length() {
        assert_eq!(random_code(CODE_LENGTH).len(), 6);
        assert_eq!(random_code(10).len(), 10);
        assert!(random_code(0).is_empty());
    }

    #[test]
    fn test_random_code_uses_alphabet_only() {
        for _ in 0..200 {
            let code = random_code(CODE_LENGTH);
            assert!(code.bytes().all(|b| ALPHABET.contains(&b)), "{code}");
        }
    }

    #[test]
    fn test_alphabet_has_no_ambiguous_characters() {
        for c in [b'0', b'O', b'1', b'l', b'I'] {
            assert!(!ALPHABET.contains(&c), "{}", c as char);
        }
        assert!(ALPHABET.iter().all(|b| b.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_random_code_is_mostly_unique() {
        let codes: HashSet<String> = (0..1000).map(|_| random_code(CODE_LENGTH)).collect();
        // 57^6 possibilities; a handful of collisions would still be fine
        assert!(codes.len() > 990);
    }

    #[test]
    fn test_validate_exact_length() {
        assert!(validate_code_format("aZbKq7").is_ok());
    }

    #[test]
    fn test_validate_too_short() {
        let err = validate_code_format("abc12").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.to_string().contains("exactly 6"));
    }

    #[test]
    fn test_validate_too_long() {
        assert!(validate_code_format("abc1234").is_err());
    }

    #[test]
    fn test_validate_empty() {
        assert!(validate_code_format("").is_err());
    }

    #[test]
    fn test_validate_counts_characters_not_bytes() {
        assert!(validate_code_format("ááááá1").is_ok());
    }
}
