mod placed_listing;
mod placement_terms;
mod placement_window;

pub use placed_listing::PlacedListing;
pub use placement_terms::{PlacementError, PlacementTerms};
pub use placement_window::PlacementWindow;
