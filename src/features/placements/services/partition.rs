use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::features::listings::Listing;
use crate::features::placements::models::PlacedListing;

/// TOP-flagged and NOTOP listings split by whether their window is active
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementPartition {
    pub top: Vec<PlacedListing>,
    pub not_top: Vec<Listing>,
}

/// Split fetched listings into currently valid TOP and everything else.
///
/// TOP listings whose window is not active at `now` are merged into the NOTOP
/// set keyed by id. Every input id appears in exactly one output set, once.
pub fn partition(
    top: Vec<PlacedListing>,
    not_top: Vec<Listing>,
    now: NaiveDateTime,
) -> PlacementPartition {
    let mut top_ids: HashSet<String> = HashSet::new();
    let mut valid = Vec::new();
    let mut expired = Vec::new();

    for placed in top {
        if !top_ids.insert(placed.id().to_string()) {
            continue;
        }
        if placed.is_active_at(now) {
            valid.push(placed);
        } else {
            expired.push(placed.listing);
        }
    }

    let valid_ids: HashSet<&str> = valid.iter().map(PlacedListing::id).collect();
    let mut merged_ids: HashSet<String> = HashSet::new();
    let mut merged = Vec::with_capacity(not_top.len() + expired.len());

    for listing in not_top.into_iter().chain(expired) {
        if valid_ids.contains(listing.id.as_str()) {
            continue;
        }
        if merged_ids.insert(listing.id.clone()) {
            merged.push(listing);
        }
    }

    PlacementPartition {
        top: valid,
        not_top: merged,
    }
}
