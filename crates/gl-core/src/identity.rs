use crate::Role;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The authenticated principal held for the session.
///
/// Fields are private so the role cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    id: String,
    email: String,
    name: String,
    role: Role,
    signed_in_at: DateTime<Utc>,
}

impl Identity {
    /// Create an identity with a freshly generated id
    pub fn new(email: &str, name: &str, role: Role) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role,
            signed_in_at: Utc::now(),
        }
    }

    /// Create an identity whose display name is the local part of the email
    pub fn from_email(email: &str, role: Role) -> Self {
        Self::new(email, Self::name_from_email(email), role)
    }

    /// Everything before the first '@', or the whole string when there is none
    pub fn name_from_email(email: &str) -> &str {
        email.split('@').next().unwrap_or(email)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn signed_in_at(&self) -> DateTime<Utc> {
        self.signed_in_at
    }
}
