use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Logging
// =========================================================================

#[test]
#[serial]
fn given_absolute_log_dir_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _dir = EnvGuard::set("GL_LOG_DIR", "/var/log/green-ledger");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("relative"));
}

#[test]
#[serial]
fn given_log_dir_with_traversal_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _dir = EnvGuard::set("GL_LOG_DIR", "../outside");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring(".."));
}

#[test]
#[serial]
fn given_log_file_with_path_separator_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("GL_LOG_FILE", "nested/dashboard.log");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("bare file name"));
}

#[test]
#[serial]
fn given_plain_log_file_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("GL_LOG_FILE", "dashboard.log");
    let _colored = EnvGuard::set("GL_LOG_COLORED", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
    assert!(!config.logging.colored);
}

#[test]
#[serial]
fn given_no_log_file_when_load_then_destination_is_stderr() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.destination(), eq("stderr"));
}

#[test]
#[serial]
fn given_log_file_env_when_load_then_destination_is_file_name() {
    // Given
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("GL_LOG_FILE", "dashboard.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.destination(), eq("dashboard.log"));
}
