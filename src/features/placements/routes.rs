use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::placements::handlers;
use crate::features::placements::services::FeedService;

/// Create routes for the placement feed
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<FeedService>) -> Router {
    Router::new()
        .route("/api/placements/top", get(handlers::list_top))
        .route("/api/placements/notop", get(handlers::list_not_top))
        .route("/api/placements/status", get(handlers::get_status))
        .route(
            "/api/placements/evaluate",
            post(handlers::evaluate_placement),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{AppError, Result};
    use crate::features::listings::{Listing, ListingSource};
    use crate::features::placements::dtos::{
        FeedStatusDto, ListingResponseDto, PlacementEvaluationDto,
    };
    use crate::features::placements::services::PlacementEvaluator;
    use crate::shared::test_helpers::{local_time, plain_listing, top_listing};
    use crate::shared::types::ApiResponse;
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::FixedOffset;
    use serde_json::json;

    struct FixedSource {
        available: bool,
    }

    #[async_trait]
    impl ListingSource for FixedSource {
        async fn fetch_top(&self) -> Result<Vec<Listing>> {
            if !self.available {
                return Err(AppError::ExternalServiceError("offline".to_string()));
            }
            Ok(vec![
                top_listing("top-1", "2026-10-18", "09:00", "10 AM", "3 DÍAS", "24 H"),
                top_listing("old", "2026-09-01", "09:00", "10 AM", "3 DÍAS", "24 H"),
            ])
        }

        async fn fetch_not_top(&self) -> Result<Vec<Listing>> {
            if !self.available {
                return Err(AppError::ExternalServiceError("offline".to_string()));
            }
            Ok((1..=12).map(|i| plain_listing(&format!("n{}", i))).collect())
        }

        fn source_name(&self) -> &'static str {
            "fixed"
        }
    }

    async fn server(available: bool) -> TestServer {
        let feed = Arc::new(FeedService::new(
            Arc::new(FixedSource { available }),
            PlacementEvaluator::new(FixedOffset::east_opt(0).unwrap()),
        ));
        let _ = feed.refresh_at(local_time(18, 12, 0)).await;
        TestServer::new(routes(feed)).unwrap()
    }

    #[tokio::test]
    async fn test_list_top() {
        let server = server(true).await;

        let response = server.get("/api/placements/top").await;
        response.assert_status_ok();

        let body: ApiResponse<Vec<ListingResponseDto>> = response.json();
        assert!(body.success);
        assert_eq!(body.meta.unwrap().total, 1);
        let listings = body.data.unwrap();
        assert_eq!(listings[0].id, "top-1");
        assert!(listings[0].placement.is_some());
    }

    #[tokio::test]
    async fn test_list_not_top_is_paginated() {
        let server = server(true).await;

        let response = server
            .get("/api/placements/notop")
            .add_query_param("page", 2)
            .add_query_param("page_size", 10)
            .await;
        response.assert_status_ok();

        let body: ApiResponse<Vec<ListingResponseDto>> = response.json();
        assert_eq!(body.meta.unwrap().total, 13);
        let ids: Vec<String> = body.data.unwrap().into_iter().map(|l| l.id).collect();
        assert_eq!(ids, vec!["n11", "n12", "old"]);
    }

    #[tokio::test]
    async fn test_list_not_top_far_page_is_empty() {
        let server = server(true).await;

        let response = server
            .get("/api/placements/notop")
            .add_query_param("page", i64::MAX)
            .await;
        response.assert_status_ok();

        let body: ApiResponse<Vec<ListingResponseDto>> = response.json();
        assert_eq!(body.meta.unwrap().total, 13);
        assert!(body.data.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_status_reports_failure() {
        let server = server(false).await;

        let response = server.get("/api/placements/status").await;
        response.assert_status_ok();

        let body: ApiResponse<FeedStatusDto> = response.json();
        let status = body.data.unwrap();
        assert_eq!(status.top_count, 0);
        assert_eq!(status.failure_count, 1);
        assert!(status.last_error.is_some());
    }

    #[tokio::test]
    async fn test_evaluate_placement() {
        let server = server(true).await;

        let response = server
            .post("/api/placements/evaluate")
            .json(&json!({
                "transactionDate": "2026-10-18",
                "transactionTime": "14:00",
                "selectedTime": "10 AM",
                "days": "3 DÍAS",
                "hours": "10 H",
                "at": "2026-10-18T16:00:00"
            }))
            .await;
        response.assert_status_ok();

        let body: ApiResponse<PlacementEvaluationDto> = response.json();
        let evaluation = body.data.unwrap();
        assert_eq!(evaluation.window.start_date.to_string(), "2026-10-19");
        assert!(!evaluation.date_in_range);
        assert!(!evaluation.valid);
    }

    #[tokio::test]
    async fn test_evaluate_rejects_malformed_fields() {
        let server = server(true).await;

        let response = server
            .post("/api/placements/evaluate")
            .json(&json!({
                "transactionDate": "2026-10-18",
                "selectedTime": "whenever",
                "days": "3 DÍAS",
                "hours": "10 H"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ApiResponse<()> = response.json();
        assert!(!body.success);
    }

    #[tokio::test]
    async fn test_evaluate_rejects_missing_body_fields() {
        let server = server(true).await;

        let response = server
            .post("/api/placements/evaluate")
            .json(&json!({ "selectedTime": "10 AM" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
