use chrono::{FixedOffset, NaiveDateTime, Timelike, Utc};

use crate::features::listings::Listing;
use crate::features::placements::models::{
    PlacedListing, PlacementError, PlacementTerms, PlacementWindow,
};

/// Outcome of checking one window against one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementEvaluation {
    pub date_in_range: bool,
    pub within_daily_window: bool,
}

impl PlacementEvaluation {
    pub fn is_valid(&self) -> bool {
        self.date_in_range && self.within_daily_window
    }
}

/// Decides whether paid placements are active, in marketplace local time
#[derive(Debug, Clone, Copy)]
pub struct PlacementEvaluator {
    utc_offset: FixedOffset,
}

impl PlacementEvaluator {
    pub fn new(utc_offset: FixedOffset) -> Self {
        Self { utc_offset }
    }

    /// Current wall-clock time of the marketplace
    pub fn local_now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.utc_offset).naive_local()
    }

    /// Parse the placement fields of arbitrary terms into a window
    pub fn window_from_terms(
        &self,
        terms: &PlacementTerms<'_>,
    ) -> Result<PlacementWindow, PlacementError> {
        PlacementWindow::from_terms(terms, self.utc_offset)
    }

    /// Window of a listing, or `None` when its placement fields are incomplete
    pub fn window_for(&self, listing: &Listing) -> Option<PlacementWindow> {
        match self.window_from_terms(&PlacementTerms::from(listing)) {
            Ok(window) => Some(window),
            Err(e) => {
                tracing::debug!("Listing {} has no placement window: {}", listing.id, e);
                None
            }
        }
    }

    /// Pair a listing from the TOP fetch with its window.
    ///
    /// Only listings flagged TOP with a transaction id get one.
    pub fn place(&self, listing: Listing) -> PlacedListing {
        let window = if listing.is_top && listing.has_transaction() {
            self.window_for(&listing)
        } else {
            tracing::debug!(
                "Listing {} in TOP set is not flagged TOP or has no transaction",
                listing.id
            );
            None
        };
        PlacedListing { listing, window }
    }

    pub fn evaluate(&self, window: &PlacementWindow, now: NaiveDateTime) -> PlacementEvaluation {
        PlacementEvaluation {
            date_in_range: window.covers_date(now.date()),
            within_daily_window: window.covers_hour(now.hour()),
        }
    }
}
