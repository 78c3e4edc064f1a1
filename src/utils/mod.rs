//! Utility functions shared across layers.
//!
//! - [`short_code`] - Random short code generation and format checks
//! - [`url_validator`] - Destination URL validation rules
//! - [`db_error`] - Database error classification

pub mod db_error;
pub mod short_code;
pub mod url_validator;
