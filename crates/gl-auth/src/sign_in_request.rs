use crate::{AuthError, Result as AuthErrorResult};

use gl_core::Role;

use std::panic::Location;

use error_location::ErrorLocation;

/// Credentials submitted from the sign-in form.
///
/// The role is asserted by the caller and trusted as given.
#[derive(Debug, Clone, Default)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
}

impl SignInRequest {
    pub fn new(email: &str, password: &str, role: Role) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            role: Some(role),
        }
    }

    /// Build from raw form values.
    ///
    /// An empty role selector is left unset and reported by `validate`;
    /// an unrecognized one fails with `InvalidRole`.
    #[track_caller]
    pub fn from_form(email: &str, password: &str, role: &str) -> AuthErrorResult<Self> {
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
            role: parse_role_selector(role)?,
        })
    }

    /// Check required fields in form order, returning the selected role
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<Role> {
        require(&self.email, "email")?;
        require(&self.password, "password")?;
        let Some(role) = self.role else {
            return Err(AuthError::Validation {
                field: "role",
                location: ErrorLocation::from(Location::caller()),
            });
        };
        Ok(role)
    }
}

#[track_caller]
pub(crate) fn require(value: &str, field: &'static str) -> AuthErrorResult<()> {
    if value.trim().is_empty() {
        return Err(AuthError::Validation {
            field,
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

#[track_caller]
pub(crate) fn parse_role_selector(value: &str) -> AuthErrorResult<Option<Role>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    Ok(Some(value.parse::<Role>()?))
}
