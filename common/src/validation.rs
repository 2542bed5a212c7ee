//! Local form validation. Every check runs before a request is built.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ValidationError, MIN_PASSWORD_LEN};
use crate::requests::{LoginRequest, RegisterRequest, UpdateProfileRequest};

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email.trim())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Login only requires both fields to be present; the backend decides the rest.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, ValidationError> {
    if is_blank(email) || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    })
}

pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
) -> Result<RegisterRequest, ValidationError> {
    if is_blank(name) || is_blank(email) || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(RegisterRequest {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        password: password.to_string(),
    })
}

pub fn validate_profile_update(
    name: &str,
    email: &str,
) -> Result<UpdateProfileRequest, ValidationError> {
    if is_blank(name) || is_blank(email) {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(UpdateProfileRequest {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_both_fields() {
        assert_eq!(validate_login("", "secret"), Err(ValidationError::MissingCredentials));
        assert_eq!(validate_login("a@b.co", ""), Err(ValidationError::MissingCredentials));
        assert_eq!(validate_login("   ", "secret"), Err(ValidationError::MissingCredentials));
    }

    #[test]
    fn login_trims_email_but_not_password() {
        let request = validate_login(" a@b.co ", " pw ").unwrap();
        assert_eq!(request.email, "a@b.co");
        assert_eq!(request.password, " pw ");
    }

    #[test]
    fn email_format() {
        assert!(is_valid_email("citizen@urbanfix.in"));
        assert!(!is_valid_email("citizen@urbanfix"));
        assert!(!is_valid_email("citizen urbanfix.in"));
        assert!(!is_valid_email("@urbanfix.in"));
    }

    #[test]
    fn registration_checks_in_order() {
        assert_eq!(
            validate_registration("", "bad", "123"),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_registration("Asha", "bad", "123"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_registration("Asha", "asha@x.org", "12345"),
            Err(ValidationError::PasswordTooShort)
        );
        assert!(validate_registration("Asha", "asha@x.org", "123456").is_ok());
    }

    #[test]
    fn profile_update_requires_valid_email() {
        assert_eq!(validate_profile_update("Asha", ""), Err(ValidationError::MissingFields));
        assert_eq!(
            validate_profile_update("Asha", "nope"),
            Err(ValidationError::InvalidEmail)
        );
        let request = validate_profile_update(" Asha ", "asha@x.org").unwrap();
        assert_eq!(request.name, "Asha");
    }
}
