use crate::{AuthError, BusyGuard};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[test]
fn given_free_flag_when_acquired_then_flag_set_until_drop() {
    let flag = Arc::new(AtomicBool::new(false));

    let guard = BusyGuard::acquire(&flag).unwrap();
    assert!(flag.load(Ordering::SeqCst));

    drop(guard);
    assert!(!flag.load(Ordering::SeqCst));
}

#[test]
fn given_held_flag_when_acquired_again_then_auth_in_progress() {
    let flag = Arc::new(AtomicBool::new(false));
    let _guard = BusyGuard::acquire(&flag).unwrap();

    let result = BusyGuard::acquire(&flag);

    assert!(matches!(result, Err(AuthError::AuthInProgress { .. })));
    assert!(flag.load(Ordering::SeqCst));
}
