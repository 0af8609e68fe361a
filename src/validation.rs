use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError};

lazy_static! {
    static ref NAME_RE: Regex = Regex::new(r"^[a-zA-Z\s]+$").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"^[0-9+\s()-]+$").unwrap();
}

/// Customer contact details supplied with a booking. Validation is
/// synchronous and reports per-field messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CustomerInfo {
    #[validate(
        length(min = 2, max = 50, message = "Name must be 2 to 50 characters"),
        regex(path = *NAME_RE, message = "Name must only contain letters")
    )]
    pub name: String,
    #[validate(
        length(min = 10, message = "Phone must be at least 10 digits"),
        regex(path = *PHONE_RE, message = "Invalid phone format")
    )]
    pub phone: String,
    /// Optional; an empty string counts as "not provided".
    #[serde(default)]
    #[validate(custom(function = validate_optional_email))]
    pub email: String,
}

fn validate_optional_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || email.validate_email() {
        return Ok(());
    }
    let mut error = ValidationError::new("email");
    error.message = Some("Invalid email format".into());
    Err(error)
}
