use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;

use crate::features::placements::services::FeedService;

/// Background worker that refetches the TOP / NOTOP collections on a fixed period
pub struct FeedRefresher {
    feed_service: Arc<FeedService>,
    period: Duration,
}

impl FeedRefresher {
    pub fn new(feed_service: Arc<FeedService>, period: Duration) -> Self {
        Self {
            feed_service,
            period,
        }
    }

    /// Run the refresher in a background loop; the first refresh happens immediately
    pub async fn run(&self) {
        tracing::info!(
            "Starting placement feed refresher (every {}s)",
            self.period.as_secs()
        );

        let mut interval = interval(self.period);

        loop {
            interval.tick().await;
            self.tick().await;
        }
    }

    async fn tick(&self) {
        match self.feed_service.refresh().await {
            Ok(summary) if summary.partial => {
                tracing::warn!(
                    "Placement feed refreshed with stale data: top={}, notop={}",
                    summary.top,
                    summary.not_top
                );
            }
            Ok(summary) => {
                tracing::info!(
                    "Placement feed refreshed: top={}, notop={}",
                    summary.top,
                    summary.not_top
                );
            }
            Err(e) => {
                tracing::error!("Error refreshing placement feed: {:?}", e);
            }
        }
    }
}
