use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use error_location::ErrorLocation;

/// Holds the session's busy flag for the lifetime of one auth attempt.
///
/// The flag is cleared on drop, so every exit path releases it.
pub struct BusyGuard {
    flag: Arc<AtomicBool>,
}

impl BusyGuard {
    /// Claim the flag, or fail if another attempt holds it
    #[track_caller]
    pub fn acquire(flag: &Arc<AtomicBool>) -> AuthErrorResult<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| AuthError::AuthInProgress {
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            flag: Arc::clone(flag),
        })
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
