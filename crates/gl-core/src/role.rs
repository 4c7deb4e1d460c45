use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// Platform role. Determines which dashboard an identity may open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Records hydrogen production and issues carbon credits
    Producer,
    /// Browses and purchases credits
    Buyer,
    /// Monitors transactions and retirements
    Regulator,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Producer, Role::Buyer, Role::Regulator];

    /// Lowercase form used in paths and form selectors
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Producer => "producer",
            Self::Buyer => "buyer",
            Self::Regulator => "regulator",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Producer => "Producer",
            Self::Buyer => "Buyer",
            Self::Regulator => "Regulator",
        }
    }

    /// Path of the dashboard this role lands on
    pub fn home_path(&self) -> &'static str {
        match self {
            Self::Producer => "/producer",
            Self::Buyer => "/buyer",
            Self::Regulator => "/regulator",
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "producer" => Ok(Self::Producer),
            "buyer" => Ok(Self::Buyer),
            "regulator" => Ok(Self::Regulator),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
