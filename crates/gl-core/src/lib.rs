pub mod error;
pub mod identity;
pub mod role;

pub use error::{CoreError, Result};
pub use identity::Identity;
pub use role::Role;
