pub mod models;
pub mod source;

pub use models::{Listing, ListingImage, ListingVideo, ModerationStatus, PricingTier};
pub use source::ListingSource;
