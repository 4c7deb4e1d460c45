use std::time::Duration;

use async_trait::async_trait;

/// Suspension point standing in for a network round trip.
#[async_trait]
pub trait Latency: Send + Sync {
    async fn round_trip(&self);
}

/// Sleeps for a fixed delay before completing
#[derive(Debug, Clone)]
pub struct SimulatedLatency {
    delay: Duration,
}

impl SimulatedLatency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

#[async_trait]
impl Latency for SimulatedLatency {
    async fn round_trip(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// Completes immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn round_trip(&self) {}
}
