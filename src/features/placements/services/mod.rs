mod evaluator;
mod feed_service;
mod partition;
mod rotation;

pub use evaluator::{PlacementEvaluation, PlacementEvaluator};
pub use feed_service::{FeedService, RefreshSummary};
pub use partition::{partition, PlacementPartition};
pub use rotation::{carry_rotation_order, rotate};
