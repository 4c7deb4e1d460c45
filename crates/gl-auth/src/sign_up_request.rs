use crate::sign_in_request::{parse_role_selector, require};
use crate::{AuthError, Result as AuthErrorResult};

use gl_core::Role;

use std::panic::Location;

use error_location::ErrorLocation;

/// Registration form values
#[derive(Debug, Clone, Default)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Option<Role>,
}

impl SignUpRequest {
    pub fn new(
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
        role: Role,
    ) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
            role: Some(role),
        }
    }

    #[track_caller]
    pub fn from_form(
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
        role: &str,
    ) -> AuthErrorResult<Self> {
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
            role: parse_role_selector(role)?,
        })
    }

    /// Missing fields are reported before a password mismatch
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<Role> {
        require(&self.name, "name")?;
        require(&self.email, "email")?;
        require(&self.password, "password")?;
        let Some(role) = self.role else {
            return Err(AuthError::Validation {
                field: "role",
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if self.password != self.confirm_password {
            return Err(AuthError::PasswordMismatch {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(role)
    }
}
