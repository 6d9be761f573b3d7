mod feed_refresher;
mod rotation_scheduler;

pub use feed_refresher::FeedRefresher;
pub use rotation_scheduler::RotationScheduler;
