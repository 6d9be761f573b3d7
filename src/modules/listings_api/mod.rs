//! Listings backend module
//!
//! HTTP access to the platform backend that owns the listing collections.

mod listings_client;

pub use listings_client::ListingsApiClient;
