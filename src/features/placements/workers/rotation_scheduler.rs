use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant};

use crate::features::placements::services::FeedService;

/// Background worker that rotates the TOP listings round-robin
pub struct RotationScheduler {
    feed_service: Arc<FeedService>,
    period: Duration,
}

impl RotationScheduler {
    pub fn new(feed_service: Arc<FeedService>, period: Duration) -> Self {
        Self {
            feed_service,
            period,
        }
    }

    /// Run the scheduler in a background loop; the first rotation happens one period in
    pub async fn run(&self) {
        tracing::info!(
            "Starting TOP rotation scheduler (every {}s)",
            self.period.as_secs()
        );

        let mut interval = interval_at(Instant::now() + self.period, self.period);

        loop {
            interval.tick().await;
            let order = self.feed_service.rotate().await;
            tracing::debug!("Rotated {} TOP listings", order.len());
        }
    }
}
