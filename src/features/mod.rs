pub mod listings;
pub mod placements;
