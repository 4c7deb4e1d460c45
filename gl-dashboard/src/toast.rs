use gl_auth::AuthError;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// Short notification shown after a form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(title: &'static str, description: &'static str) -> Self {
        Self {
            title,
            description,
            variant: ToastVariant::Default,
        }
    }

    pub fn from_error(error: &AuthError) -> Self {
        let description = match error {
            AuthError::Validation { .. } => "Please fill in all fields",
            AuthError::PasswordMismatch { .. } => "Passwords do not match",
            AuthError::InvalidRole { .. } => "Choose producer, buyer or regulator",
            AuthError::AuthInProgress { .. } => "A sign-in is already in progress",
        };

        Self {
            title: error.title(),
            description,
            variant: ToastVariant::Destructive,
        }
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant {
            ToastVariant::Default => write!(f, "[{}] {}", self.title, self.description),
            ToastVariant::Destructive => write!(f, "[!] {}: {}", self.title, self.description),
        }
    }
}
