//! Sign-in and sign-up form validation.
//!
//! Validation runs before any call to the auth provider.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Minimum password length accepted at sign-up.
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Form validation errors.
///
/// 表单校验错误。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialsError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    EmailInvalid,

    #[error("Password is required")]
    PasswordRequired,

    #[error("Password must be at least {min_len} characters long")]
    PasswordTooShort { min_len: usize },

    #[error("Name is required")]
    NameRequired,
}

/// Validated email and password pair handed to the auth provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Raw sign-in form input.
#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn validate(&self) -> Result<Credentials, CredentialsError> {
        let email = validate_email(&self.email)?;
        if self.password.trim().is_empty() {
            return Err(CredentialsError::PasswordRequired);
        }
        Ok(Credentials {
            email,
            password: self.password.clone(),
        })
    }
}

/// Raw sign-up form input.
#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl SignUpForm {
    /// Returns the credentials and the trimmed display name.
    pub fn validate(&self) -> Result<(Credentials, String), CredentialsError> {
        let email = validate_email(&self.email)?;
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CredentialsError::PasswordTooShort {
                min_len: MIN_PASSWORD_LEN,
            });
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CredentialsError::NameRequired);
        }
        Ok((
            Credentials {
                email,
                password: self.password.clone(),
            },
            name.to_string(),
        ))
    }
}

fn validate_email(raw: &str) -> Result<String, CredentialsError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(CredentialsError::EmailRequired);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(CredentialsError::EmailInvalid);
    }
    Ok(email.to_string())
}
