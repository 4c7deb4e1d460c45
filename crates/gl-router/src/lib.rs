//! Route guarding for the role dashboards.
//!
//! Resolution is a pure function of the current identity and the requested
//! path; the router keeps no state of its own.

pub mod navigation;
pub mod resolution;
pub mod route;
pub mod view;

pub use navigation::{Navigation, navigate};
pub use resolution::{Resolution, resolve};
pub use route::Route;
pub use view::View;

/// Path of the landing/auth view
pub const LANDING_PATH: &str = "/";

#[cfg(test)]
mod tests;
