//! Accept/reject validation of user supplied fields: email addresses,
//! usernames, Egyptian mobile numbers and Egyptian national ids.
//!
//! ```
//! use ruservalidation::{validate_email, validate_national_id, validate_phone_number};
//!
//! assert!(validate_email("user@example.com"));
//! assert!(validate_phone_number("201012345678"));
//! assert!(validate_national_id("29812251201234"));
//! assert!(!validate_national_id(None::<&str>));
//! ```

mod interfaces;
mod input;
mod uservalidator;
mod regexp_cache;
mod regex_based_matcher;


pub use input::FieldValue;
pub use uservalidator::{
    errors, Anchoring, Century, FieldKind, Governorate, NationalId, UserValidator, USER_VALIDATOR,
};

/// Validates an email address with [`USER_VALIDATOR`].
pub fn validate_email<'a>(value: impl Into<FieldValue<'a>>) -> bool {
    USER_VALIDATOR.validate_email(value)
}

/// Validates a username with [`USER_VALIDATOR`].
pub fn validate_username<'a>(value: impl Into<FieldValue<'a>>) -> bool {
    USER_VALIDATOR.validate_username(value)
}

/// Validates an Egyptian mobile number with [`USER_VALIDATOR`].
pub fn validate_phone_number<'a>(value: impl Into<FieldValue<'a>>) -> bool {
    USER_VALIDATOR.validate_phone_number(value)
}

/// Validates an Egyptian national id with [`USER_VALIDATOR`].
pub fn validate_national_id<'a>(value: impl Into<FieldValue<'a>>) -> bool {
    USER_VALIDATOR.validate_national_id(value)
}

/// Parses an Egyptian national id with [`USER_VALIDATOR`], reporting the
/// first failed check.
pub fn parse_national_id<'a>(
    value: impl Into<FieldValue<'a>>,
) -> Result<NationalId, errors::NationalIdError> {
    USER_VALIDATOR.parse_national_id(value)
}
