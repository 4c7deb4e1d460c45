use gl_config::{Config, LogLevel};

use clap::Parser;

#[derive(Parser)]
#[command(name = "gl-dashboard")]
#[command(about = "Green Ledger role dashboards in the terminal")]
#[command(version)]
pub struct Cli {
    /// Simulated sign-in round trip in milliseconds (overrides config)
    #[arg(long)]
    pub latency_ms: Option<u64>,

    /// Log level: off, error, warn, info, debug, trace (overrides config)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Disable colored log output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Flags take precedence over config.toml and GL_* variables
    pub fn apply(&self, config: &mut Config) {
        if let Some(latency_ms) = self.latency_ms {
            config.session.latency_ms = latency_ms;
        }
        if let Some(ref level) = self.log_level {
            config.logging.level = LogLevel::parse_lenient(level);
        }
        if self.no_color {
            config.logging.colored = false;
        }
    }
}
