use crate::Cli;

use gl_config::Config;

use clap::Parser;
use log::LevelFilter;

#[test]
fn test_cli_flags_override_config() {
    let cli = Cli::try_parse_from([
        "gl-dashboard",
        "--latency-ms",
        "0",
        "--log-level",
        "debug",
        "--no-color",
    ])
    .unwrap();
    let mut config = Config::default();

    cli.apply(&mut config);

    assert_eq!(config.session.latency_ms, 0);
    assert_eq!(*config.logging.level, LevelFilter::Debug);
    assert!(!config.logging.colored);
}

#[test]
fn test_cli_without_flags_keeps_config() {
    let cli = Cli::try_parse_from(["gl-dashboard"]).unwrap();
    let mut config = Config::default();
    config.session.latency_ms = 42;

    cli.apply(&mut config);

    assert_eq!(config.session.latency_ms, 42);
    assert!(config.logging.colored);
}
