/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// PLACEMENT CONSTANTS
// =============================================================================

/// Days counted for each month unit in a pricing tier ("1 MES")
pub const DAYS_PER_MONTH: u32 = 31;

/// Days counted for each week unit in a pricing tier ("2 SEMANAS")
pub const DAYS_PER_WEEK: u32 = 7;

/// Daily hour count meaning the listing rotates all day
pub const FULL_DAY_HOURS: u32 = 24;
