use gl_core::CoreError;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing required field '{field}' {location}")]
    Validation {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Passwords do not match {location}")]
    PasswordMismatch { location: ErrorLocation },

    #[error("Invalid role '{value}': expected producer, buyer or regulator {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Another sign-in is already in progress {location}")]
    AuthInProgress { location: ErrorLocation },
}

impl AuthError {
    /// Stable code for the presentation layer
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::PasswordMismatch { .. } => "PASSWORD_MISMATCH",
            Self::InvalidRole { .. } => "INVALID_ROLE",
            Self::AuthInProgress { .. } => "AUTH_IN_PROGRESS",
        }
    }

    /// Form field the error refers to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            Self::PasswordMismatch { .. } => Some("confirm_password"),
            Self::InvalidRole { .. } => Some("role"),
            Self::AuthInProgress { .. } => None,
        }
    }

    /// Heading for a user-facing notification
    pub fn title(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "Validation Error",
            Self::PasswordMismatch { .. } => "Password Mismatch",
            Self::InvalidRole { .. } => "Invalid Role",
            Self::AuthInProgress { .. } => "Please Wait",
        }
    }
}

impl From<CoreError> for AuthError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidRole { value, location } => Self::InvalidRole { value, location },
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
