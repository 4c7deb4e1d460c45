use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Config error: {0}")]
    Config(#[from] gl_config::ConfigError),

    #[error("IO error: {message}: {source}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, DashboardError>;
