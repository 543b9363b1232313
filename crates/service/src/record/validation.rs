use once_cell::sync::Lazy;
use regex::Regex;

use super::domain::Record;
use crate::errors::ServiceError;

// local-part@label(.label)+, no whitespace, a single '@'
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email pattern compiles")
});

pub fn validate_name(name: &str) -> Result<(), ServiceError> {
    if name.trim().is_empty() {
        return Err(ServiceError::Validation("name must not be blank".into()));
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_RE.is_match(email)
}

pub fn validate_email(email: &str) -> Result<(), ServiceError> {
    if !is_valid_email(email) {
        return Err(ServiceError::Validation("email must be a well-formed address".into()));
    }
    Ok(())
}

/// Name first, then email; the first failure is reported.
pub fn validate(candidate: &Record) -> Result<(), ServiceError> {
    validate_name(&candidate.name)?;
    validate_email(&candidate.email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for ok in ["joao@example.com", "joao_atualizado@example.com", "first.last+tag@mail.example.co", "a@b.io"] {
            assert!(is_valid_email(ok), "{ok} should be accepted");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["", "invalid_email", "a@b", "a@b.", "a@.com", "@example.com", "a b@example.com", "a@@b.com", "a@b..com"] {
            assert!(!is_valid_email(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn blank_name_rejected() {
        assert!(matches!(validate_name(""), Err(ServiceError::Validation(_))));
        assert!(matches!(validate_name("   "), Err(ServiceError::Validation(_))));
        assert!(validate_name("Maria").is_ok());
    }

    #[test]
    fn name_checked_before_email() {
        let err = validate(&Record::new("", "invalid_email")).unwrap_err();
        assert_eq!(err.to_string(), "validation error: name must not be blank");

        let err = validate(&Record::new("Ana", "invalid_email")).unwrap_err();
        assert_eq!(err.to_string(), "validation error: email must be a well-formed address");
    }
}
