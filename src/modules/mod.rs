//! Modules layer - Infrastructure components for external integrations
//!
//! Contains clients and adapters for external services such as the listings backend.

pub mod listings_api;
