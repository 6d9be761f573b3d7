use chrono::NaiveDateTime;

use super::placement_window::PlacementWindow;
use crate::features::listings::Listing;

/// A fetched listing paired with the window parsed from its placement fields.
///
/// `window` is `None` when any placement field is missing or unparseable; such
/// a listing is never TOP.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedListing {
    pub listing: Listing,
    pub window: Option<PlacementWindow>,
}

impl PlacedListing {
    pub fn id(&self) -> &str {
        &self.listing.id
    }

    pub fn is_active_at(&self, now: NaiveDateTime) -> bool {
        self.window.is_some_and(|window| window.is_active_at(now))
    }
}
