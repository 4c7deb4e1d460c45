use gl_auth::Latency;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;

/// Latency that holds every round trip until the test releases it
pub struct GatedLatency {
    gate: Arc<Notify>,
}

impl GatedLatency {
    pub fn new() -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        (
            Self {
                gate: Arc::clone(&gate),
            },
            gate,
        )
    }
}

#[async_trait]
impl Latency for GatedLatency {
    async fn round_trip(&self) {
        self.gate.notified().await;
    }
}
