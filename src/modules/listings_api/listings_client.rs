use async_trait::async_trait;

use crate::core::config::ListingsApiConfig;
use crate::core::error::{AppError, Result};
use crate::features::listings::{Listing, ListingSource};

/// HTTP client for the backend's TOP / NOTOP listing endpoints
pub struct ListingsApiClient {
    client: reqwest::Client,
    top_url: String,
    not_top_url: String,
}

impl ListingsApiClient {
    pub fn new(config: &ListingsApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("ClassifiedsCore/1.0 (placement-feed)")
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            top_url: config.top_url(),
            not_top_url: config.not_top_url(),
        })
    }

    /// GET a JSON array of listings
    async fn fetch_listings(&self, url: &str) -> Result<Vec<Listing>> {
        tracing::debug!("Fetching listings from {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!("Listings request failed: {:?}", e);
            AppError::ExternalServiceError(format!("Listings request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Listings backend returned status {} for {}", status, url);
            return Err(AppError::ExternalServiceError(format!(
                "Listings backend returned status {}",
                status
            )));
        }

        let items: Vec<serde_json::Value> = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse listings response: {:?}", e);
            AppError::ExternalServiceError(format!("Failed to parse listings response: {}", e))
        })?;

        let total = items.len();
        let listings = decode_listings(items);

        tracing::debug!(
            "Fetched {} listings from {} ({} skipped)",
            listings.len(),
            url,
            total - listings.len()
        );
        Ok(listings)
    }
}

/// Decode each element on its own; a malformed listing is skipped, not fatal
fn decode_listings(items: Vec<serde_json::Value>) -> Vec<Listing> {
    items
        .into_iter()
        .filter_map(|item| {
            let id = item
                .get("_id")
                .or_else(|| item.get("id"))
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string());

            match serde_json::from_value::<Listing>(item) {
                Ok(listing) => Some(listing),
                Err(e) => {
                    tracing::warn!("Skipping malformed listing {}: {}", id, e);
                    None
                }
            }
        })
        .collect()
}

#[async_trait]
impl ListingSource for ListingsApiClient {
    async fn fetch_top(&self) -> Result<Vec<Listing>> {
        self.fetch_listings(&self.top_url).await
    }

    async fn fetch_not_top(&self) -> Result<Vec<Listing>> {
        self.fetch_listings(&self.not_top_url).await
    }

    fn source_name(&self) -> &'static str {
        "listings-api"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::json;
    use std::time::Duration;

    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn config(base_url: String) -> ListingsApiConfig {
        ListingsApiConfig {
            base_url,
            top_path: "/top".to_string(),
            not_top_path: "/notop".to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    #[tokio::test]
    async fn test_fetches_both_collections() {
        let router = Router::new()
            .route(
                "/top",
                get(|| async {
                    Json(json!([{ "_id": "t1", "isTop": true, "transactionId": "tx" }]))
                }),
            )
            .route(
                "/notop",
                get(|| async { Json(json!([{ "_id": "n1" }, { "_id": "n2" }])) }),
            );
        let client = ListingsApiClient::new(&config(spawn_backend(router).await)).unwrap();

        let top = tokio_test::assert_ok!(client.fetch_top().await);
        let not_top = tokio_test::assert_ok!(client.fetch_not_top().await);

        assert_eq!(top.len(), 1);
        assert_eq!(top[0].id, "t1");
        assert_eq!(not_top.len(), 2);
        assert_eq!(client.source_name(), "listings-api");
    }

    #[tokio::test]
    async fn test_malformed_listing_does_not_fail_the_batch() {
        let router = Router::new().route(
            "/top",
            get(|| async {
                Json(json!([
                    { "_id": "good-1", "pricing": { "price": "$50.000" }, "selectedTime": 10 },
                    { "_id": "bad", "images": "not-a-list" },
                    { "title": "no id" },
                    { "_id": "good-2", "status": "Aprobado" }
                ]))
            }),
        );
        let client = ListingsApiClient::new(&config(spawn_backend(router).await)).unwrap();

        let top = tokio_test::assert_ok!(client.fetch_top().await);

        let ids: Vec<&str> = top.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["good-1", "good-2"]);
        assert_eq!(top[0].selected_time.as_deref(), Some("10"));
        assert!(top[0].pricing.as_ref().unwrap().price.is_none());
    }

    #[test]
    fn test_decode_listings_skips_invalid_elements() {
        let listings = decode_listings(vec![json!({ "id": "a" }), json!(42), json!({ "id": "b" })]);
        assert_eq!(listings.len(), 2);
    }

    #[tokio::test]
    async fn test_error_status_is_external_service_error() {
        let router = Router::new().route(
            "/top",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let client = ListingsApiClient::new(&config(spawn_backend(router).await)).unwrap();

        let err = tokio_test::assert_err!(client.fetch_top().await);
        assert!(matches!(err, AppError::ExternalServiceError(_)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_external_service_error() {
        let router = Router::new().route("/notop", get(|| async { Json(json!({ "oops": 1 })) }));
        let client = ListingsApiClient::new(&config(spawn_backend(router).await)).unwrap();

        let err = tokio_test::assert_err!(client.fetch_not_top().await);
        assert!(matches!(err, AppError::ExternalServiceError(_)));
    }
}
