//! Validation for the sign-in and sign-up form inputs.
//!
//! Field constraints are fixed at compile time: email and name must be
//! non-empty, password must be at least [`MIN_PASSWORD_LENGTH`] characters.
//! Per-field validators return the error message for inline display; the
//! whole-input `validate()` functions gate submission.

/// Minimum length for passwords
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validation error for a single form field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Required field was left empty
    Required { field: &'static str },
    /// Field value is shorter than the allowed minimum
    TooShort { field: &'static str, min: usize },
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::Required { field } => write!(f, "{} is required", field),
            FieldError::TooShort { field, min } => {
                write!(f, "{} must be at least {} characters", field, min)
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Per-field validation errors for one submit attempt.
///
/// `None` means the field passed. Sign-in never sets `name`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// Sign-in form input
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign-up form input
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Validate the name field (sign-up only).
///
/// Presence-only: any value of length ≥ 1 passes, whitespace included.
pub fn validate_name(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        Some(FieldError::Required { field: "Name" })
    } else {
        None
    }
}

/// Validate the email field.
///
/// Presence-only: any value of length ≥ 1 passes. Address shape is the
/// identity service's concern.
pub fn validate_email(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        Some(FieldError::Required { field: "Email" })
    } else {
        None
    }
}

/// Validate the password field.
///
/// Length is counted in characters, not bytes, so multibyte passwords are
/// measured the way the user typed them.
pub fn validate_password(value: &str) -> Option<FieldError> {
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        Some(FieldError::TooShort {
            field: "Password",
            min: MIN_PASSWORD_LENGTH,
        })
    } else {
        None
    }
}

impl SignInInput {
    /// Validate all fields, collecting every failure
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let errors = FieldErrors {
            name: None,
            email: validate_email(&self.email),
            password: validate_password(&self.password),
        };

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl SignUpInput {
    /// Validate all fields, collecting every failure
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let errors = FieldErrors {
            name: validate_name(&self.name),
            email: validate_email(&self.email),
            password: validate_password(&self.password),
        };

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_sign_in_input() {
        let input = SignInInput {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_empty_email_fails() {
        let input = SignInInput {
            email: "".to_string(),
            password: "secret".to_string(),
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.email, Some(FieldError::Required { field: "Email" }));
        assert!(errors.password.is_none());
    }

    #[test]
    fn test_whitespace_only_fields_count_as_present() {
        // The contract checks length only; " " has length 1 and passes
        assert!(validate_email(" ").is_none());
        assert!(validate_name(" ").is_none());
    }

    #[test]
    fn test_short_password_fails() {
        let input = SignInInput {
            email: "a@b.com".to_string(),
            password: "12345".to_string(),
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(
            errors.password,
            Some(FieldError::TooShort {
                field: "Password",
                min: MIN_PASSWORD_LENGTH
            })
        );
    }

    #[test]
    fn test_password_exactly_at_minimum() {
        assert!(validate_password("123456").is_none());
        assert!(validate_password("12345").is_some());
    }

    #[test]
    fn test_password_length_counts_characters_not_bytes() {
        // Five characters but ten bytes; still too short
        assert!(validate_password("ñññññ").is_some());
        // Six characters, twelve bytes; passes
        assert!(validate_password("ññññññ").is_none());
    }

    #[test]
    fn test_all_fields_reported_at_once() {
        let input = SignUpInput {
            name: "".to_string(),
            email: "".to_string(),
            password: "".to_string(),
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.password.is_some());
    }

    #[test]
    fn test_empty_name_blocks_sign_up() {
        let input = SignUpInput {
            name: "".to_string(),
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.name, Some(FieldError::Required { field: "Name" }));
        assert!(errors.email.is_none());
        assert!(errors.password.is_none());
    }

    #[test]
    fn test_valid_sign_up_input() {
        let input = SignUpInput {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "lovelace".to_string(),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_field_error_display() {
        assert_eq!(
            FieldError::Required { field: "Email" }.to_string(),
            "Email is required"
        );
        assert_eq!(
            FieldError::TooShort {
                field: "Password",
                min: 6
            }
            .to_string(),
            "Password must be at least 6 characters"
        );
    }
}
