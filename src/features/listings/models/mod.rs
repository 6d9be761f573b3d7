mod listing;
mod media;

pub use listing::{Listing, ModerationStatus, PricingTier};
pub use media::{ListingImage, ListingVideo};
