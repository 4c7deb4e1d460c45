pub mod cli;
pub mod command;
pub mod error;
pub mod logger;
pub mod render;
pub mod shell;
pub mod toast;

pub use cli::Cli;
pub use error::{DashboardError, Result as DashboardResult};
pub use shell::{Flow, Shell};
pub use toast::{Toast, ToastVariant};

#[cfg(test)]
mod tests;
