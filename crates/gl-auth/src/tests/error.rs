use crate::{AuthError, SignInRequest, SignUpRequest};

use gl_core::Role;

#[test]
fn test_validation_error_code_and_field() {
    let error = SignInRequest::new("", "x", Role::Buyer).validate().unwrap_err();

    assert_eq!(error.error_code(), "VALIDATION_ERROR");
    assert_eq!(error.field(), Some("email"));
    assert_eq!(error.title(), "Validation Error");
    assert!(error.to_string().contains("email"));
}

#[test]
fn test_password_mismatch_error_code_and_field() {
    let error = SignUpRequest::new("A", "a@b.com", "x", "y", Role::Buyer)
        .validate()
        .unwrap_err();

    assert_eq!(error.error_code(), "PASSWORD_MISMATCH");
    assert_eq!(error.field(), Some("confirm_password"));
    assert_eq!(error.title(), "Password Mismatch");
}

#[test]
fn test_invalid_role_maps_from_core_error() {
    let core_error = "janitor".parse::<Role>().unwrap_err();

    let error = AuthError::from(core_error);

    assert_eq!(error.error_code(), "INVALID_ROLE");
    assert_eq!(error.field(), Some("role"));
    assert!(error.to_string().contains("janitor"));
}
