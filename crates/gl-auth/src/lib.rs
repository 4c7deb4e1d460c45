pub mod busy_guard;
pub mod error;
pub mod latency;
pub mod session_store;
pub mod sign_in_request;
pub mod sign_up_request;

pub use busy_guard::BusyGuard;
pub use error::{AuthError, Result};
pub use latency::{Latency, NoLatency, SimulatedLatency};
pub use session_store::SessionStore;
pub use sign_in_request::SignInRequest;
pub use sign_up_request::SignUpRequest;

#[cfg(test)]
mod tests;
