use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::listings::Listing;

/// Read access to the backend's listing collections
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Listings flagged TOP that carry a transaction id
    async fn fetch_top(&self) -> Result<Vec<Listing>>;

    /// Unpaid listings that are neither pending nor rejected
    async fn fetch_not_top(&self) -> Result<Vec<Listing>>;

    /// Name used in logs
    fn source_name(&self) -> &'static str;
}
