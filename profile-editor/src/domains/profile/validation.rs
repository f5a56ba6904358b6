//! Client-side checks run before an update is sent.
//!
//! Rules run in a fixed order and stop at the first failure. Optional fields
//! are only checked when non-empty; `email` is always checked.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::state::FormData;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]{2,}$").expect("valid name pattern"));
static MOBILE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid mobile pattern"));
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern")
});

pub const MIN_ADDRESS_CHARS: usize = 5;

/// First rule a form violated. `Display` is the text shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid firstName")]
    FirstName,
    #[error("Invalid lastName")]
    LastName,
    #[error("Mobile Number should contain exactly 10 digits")]
    MobileNumber,
    #[error("Please enter a valid email address")]
    Email,
    #[error("Please enter a valid address")]
    Address,
}

pub fn is_valid_name(value: &str) -> bool {
    NAME_PATTERN.is_match(value)
}

pub fn is_valid_mobile(value: &str) -> bool {
    MOBILE_PATTERN.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn is_valid_address(value: &str) -> bool {
    value.chars().count() >= MIN_ADDRESS_CHARS
}

/// Check `form` against every rule, in order.
pub fn validate(form: &FormData) -> Result<(), ValidationError> {
    if !form.first_name.is_empty() && !is_valid_name(&form.first_name) {
        return Err(ValidationError::FirstName);
    }
    if !form.last_name.is_empty() && !is_valid_name(&form.last_name) {
        return Err(ValidationError::LastName);
    }
    if !form.mobile_number.is_empty() && !is_valid_mobile(&form.mobile_number)
    {
        return Err(ValidationError::MobileNumber);
    }
    if !is_valid_email(&form.email) {
        return Err(ValidationError::Email);
    }
    if !form.address.is_empty() && !is_valid_address(&form.address) {
        return Err(ValidationError::Address);
    }
    Ok(())
}
