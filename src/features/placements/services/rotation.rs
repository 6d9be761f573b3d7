use std::collections::HashMap;

use crate::features::placements::models::PlacedListing;

/// One round-robin tick: the first element moves to the end
pub fn rotate<T>(items: &mut [T]) {
    if items.len() > 1 {
        items.rotate_left(1);
    }
}

/// Order freshly partitioned TOP listings by the current rotation.
///
/// Listings already rotating keep their relative order; newly valid ones are
/// appended in fetch order. Listings missing from `fresh` drop out.
pub fn carry_rotation_order(
    current_order: &[String],
    mut fresh: Vec<PlacedListing>,
) -> Vec<PlacedListing> {
    let position: HashMap<&str, usize> = current_order
        .iter()
        .enumerate()
        .map(|(index, id)| (id.as_str(), index))
        .collect();

    fresh.sort_by_key(|placed| position.get(placed.id()).copied().unwrap_or(usize::MAX));
    fresh
}
