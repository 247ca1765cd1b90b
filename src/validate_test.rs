use super::*;

fn fields(errors: &[FieldError]) -> Vec<&str> {
    errors.iter().map(|e| e.field.as_str()).collect()
}

// =============================================================
// Sign-in
// =============================================================

#[test]
fn sign_in_accepts_valid_input() {
    let data = validate_sign_in("user@example.com", "abc123").expect("input should validate");
    assert_eq!(data.email, "user@example.com");
    assert_eq!(data.password, "abc123");
}

#[test]
fn sign_in_accepts_a_six_character_password() {
    assert!(validate_sign_in("user@example.com", "abc123").is_ok());
}

#[test]
fn sign_in_rejects_a_five_character_password() {
    let errors =
        validate_sign_in("user@example.com", "abc12").expect_err("password should be too short");
    assert_eq!(fields(&errors), vec!["password"]);
    assert!(!errors[0].message.is_empty());
}

#[test]
fn sign_in_rejects_a_malformed_email() {
    let errors = validate_sign_in("not-an-email", "abc123").expect_err("email should be rejected");
    assert_eq!(fields(&errors), vec!["email"]);
}

#[test]
fn sign_in_reports_both_fields_when_both_break() {
    let errors =
        validate_sign_in("not-an-email", "abc").expect_err("both fields should be rejected");
    let names = fields(&errors);
    assert!(names.contains(&"email"));
    assert!(names.contains(&"password"));
    assert_eq!(errors.len(), 2);
}

#[test]
fn sign_in_rejects_empty_input_without_panicking() {
    let errors = validate_sign_in("", "").expect_err("empty input should be rejected");
    assert!(!errors.is_empty());
}

// =============================================================
// Sign-up
// =============================================================

#[test]
fn sign_up_accepts_an_eight_character_password() {
    assert!(validate_sign_up("user@example.com", "abc12345").is_ok());
}

#[test]
fn sign_up_rejects_a_seven_character_password() {
    let errors =
        validate_sign_up("user@example.com", "abc1234").expect_err("password should be too short");
    assert_eq!(fields(&errors), vec!["password"]);
}

#[test]
fn sign_up_password_rule_is_stricter_than_sign_in() {
    // Seven characters signs in fine but cannot register.
    assert!(validate_sign_in("user@example.com", "abc1234").is_ok());
    assert!(validate_sign_up("user@example.com", "abc1234").is_err());
}

#[test]
fn sign_up_rejects_a_malformed_email() {
    let errors =
        validate_sign_up("not-an-email", "abc12345").expect_err("email should be rejected");
    assert_eq!(fields(&errors), vec!["email"]);
}

#[test]
fn validated_data_preserves_the_input_verbatim() {
    let data = validate_sign_up("User@Example.com", "  spaced pw  ").expect("input should validate");
    assert_eq!(data.email, "User@Example.com");
    assert_eq!(data.password, "  spaced pw  ");
}
