use crate::{
    AuthError, BusyGuard, Latency, Result as AuthErrorResult, SignInRequest, SignUpRequest,
};

use gl_core::Identity;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, warn};
use tokio::sync::RwLock;

/// Owner of the authenticated identity for one application run.
///
/// Cloning yields another handle onto the same session. The three auth
/// operations are the only writers; reads may happen at any time and see the
/// most recently completed write.
pub struct SessionStore {
    inner: Arc<RwLock<SessionInner>>,
    busy: Arc<AtomicBool>,
    latency: Arc<dyn Latency>,
}

struct SessionInner {
    identity: Option<Identity>,
}

impl SessionStore {
    /// Create an empty session
    pub fn new(latency: Arc<dyn Latency>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionInner { identity: None })),
            busy: Arc::new(AtomicBool::new(false)),
            latency,
        }
    }

    pub fn with_latency<L: Latency + 'static>(latency: L) -> Self {
        Self::new(Arc::new(latency))
    }

    /// Sign in with a caller-asserted role.
    ///
    /// Fails without touching the session if a field is missing or another
    /// attempt is still in flight.
    pub async fn sign_in(&self, request: &SignInRequest) -> AuthErrorResult<Identity> {
        let role = request.validate().inspect_err(|e| {
            debug!("Sign-in rejected: {}", e.error_code());
        })?;

        let _busy = self.claim()?;
        self.latency.round_trip().await;

        let identity = Identity::from_email(request.email.trim(), role);
        self.store(identity.clone()).await;

        info!("Signed in {} as {}", identity.email(), identity.role());
        Ok(identity)
    }

    /// Register and sign in. Same failure semantics as `sign_in`.
    pub async fn sign_up(&self, request: &SignUpRequest) -> AuthErrorResult<Identity> {
        let role = request.validate().inspect_err(|e| {
            debug!("Sign-up rejected: {}", e.error_code());
        })?;

        let _busy = self.claim()?;
        self.latency.round_trip().await;

        let identity = Identity::new(request.email.trim(), request.name.trim(), role);
        self.store(identity.clone()).await;

        info!("Registered {} as {}", identity.email(), identity.role());
        Ok(identity)
    }

    /// Clear the session. Idempotent.
    pub async fn sign_out(&self) {
        let mut inner = self.inner.write().await;

        match inner.identity.take() {
            Some(identity) => info!("Signed out {}", identity.email()),
            None => debug!("Sign-out with no active session"),
        }
    }

    pub async fn current_identity(&self) -> Option<Identity> {
        let inner = self.inner.read().await;
        inner.identity.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        let inner = self.inner.read().await;
        inner.identity.is_some()
    }

    /// True while a sign-in or sign-up is suspended on its round trip
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    fn claim(&self) -> AuthErrorResult<BusyGuard> {
        BusyGuard::acquire(&self.busy).inspect_err(|e: &AuthError| {
            warn!("Rejected overlapping auth attempt: {}", e.error_code());
        })
    }

    async fn store(&self, identity: Identity) {
        let mut inner = self.inner.write().await;

        if let Some(previous) = inner.identity.replace(identity) {
            info!("Replaced active session for {}", previous.email());
        }
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            busy: Arc::clone(&self.busy),
            latency: Arc::clone(&self.latency),
        }
    }
}
