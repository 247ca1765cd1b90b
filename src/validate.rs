//! Form-input validation for the sign-in and sign-up forms.
//!
//! Schemas are declarative (`garde` derive); the entry points turn raw form
//! strings into either a validated value or a list of field-attributed
//! messages. Failures are data, never panics, so form code can render them
//! inline next to the offending input.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use garde::Validate;

/// One rule violation, attributed to the form field that broke it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    /// Field name as the form knows it (`"email"` or `"password"`).
    pub field: String,
    /// Human-readable description of the violated rule.
    pub message: String,
}

/// Validated sign-in input: a well-formed email address and a password of at
/// least 6 characters.
#[derive(Clone, Debug, PartialEq, Eq, Validate)]
pub struct SignInData {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 6))]
    pub password: String,
}

/// Validated sign-up input. Stricter than sign-in: new passwords need at
/// least 8 characters, while existing accounts may predate that rule.
#[derive(Clone, Debug, PartialEq, Eq, Validate)]
pub struct SignUpData {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 8))]
    pub password: String,
}

/// Validate raw sign-in form input.
///
/// # Errors
///
/// One [`FieldError`] per violated rule, in schema order.
pub fn validate_sign_in(email: &str, password: &str) -> Result<SignInData, Vec<FieldError>> {
    let data = SignInData {
        email: email.to_owned(),
        password: password.to_owned(),
    };
    match data.validate() {
        Ok(()) => Ok(data),
        Err(report) => Err(field_errors(&report)),
    }
}

/// Validate raw sign-up form input.
///
/// # Errors
///
/// One [`FieldError`] per violated rule, in schema order.
pub fn validate_sign_up(email: &str, password: &str) -> Result<SignUpData, Vec<FieldError>> {
    let data = SignUpData {
        email: email.to_owned(),
        password: password.to_owned(),
    };
    match data.validate() {
        Ok(()) => Ok(data),
        Err(report) => Err(field_errors(&report)),
    }
}

/// Flatten a validation report into per-field errors.
fn field_errors(report: &garde::Report) -> Vec<FieldError> {
    report
        .iter()
        .map(|(path, error)| FieldError {
            field: path.to_string(),
            message: error.to_string(),
        })
        .collect()
}
