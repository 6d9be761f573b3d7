use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::placements::dtos::{
    EvaluatePlacementDto, FeedStatusDto, ListingResponseDto, PlacementEvaluationDto,
};
use crate::features::placements::services::FeedService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List TOP listings currently inside their paid window
///
/// Returned in the current rotation order.
#[utoipa::path(
    get,
    path = "/api/placements/top",
    responses(
        (status = 200, description = "Valid TOP listings", body = ApiResponse<Vec<ListingResponseDto>>),
    ),
    tag = "placements"
)]
pub async fn list_top(
    State(service): State<Arc<FeedService>>,
) -> Result<Json<ApiResponse<Vec<ListingResponseDto>>>> {
    let listings = service.top().await;
    let total = listings.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(listings),
        None,
        Some(Meta { total }),
    )))
}

/// List listings outside a paid window
#[utoipa::path(
    get,
    path = "/api/placements/notop",
    params(PaginationQuery),
    responses(
        (status = 200, description = "NOTOP listings", body = ApiResponse<Vec<ListingResponseDto>>),
    ),
    tag = "placements"
)]
pub async fn list_not_top(
    State(service): State<Arc<FeedService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ListingResponseDto>>>> {
    let (listings, total) = service.not_top(&pagination).await;
    Ok(Json(ApiResponse::success(
        Some(listings),
        None,
        Some(Meta { total }),
    )))
}

/// Placement feed status
#[utoipa::path(
    get,
    path = "/api/placements/status",
    responses(
        (status = 200, description = "Feed snapshot status", body = ApiResponse<FeedStatusDto>),
    ),
    tag = "placements"
)]
pub async fn get_status(
    State(service): State<Arc<FeedService>>,
) -> Result<Json<ApiResponse<FeedStatusDto>>> {
    let status = service.status().await;
    Ok(Json(ApiResponse::success(Some(status), None, None)))
}

/// Evaluate raw placement fields
///
/// Parses the fields the way the feed does and reports whether the window is
/// active at `at` (or now).
#[utoipa::path(
    post,
    path = "/api/placements/evaluate",
    request_body = EvaluatePlacementDto,
    responses(
        (status = 200, description = "Evaluation result", body = ApiResponse<PlacementEvaluationDto>),
        (status = 400, description = "Missing or unparseable placement fields")
    ),
    tag = "placements"
)]
pub async fn evaluate_placement(
    State(service): State<Arc<FeedService>>,
    AppJson(dto): AppJson<EvaluatePlacementDto>,
) -> Result<Json<ApiResponse<PlacementEvaluationDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let evaluation = service.evaluate(&dto)?;
    Ok(Json(ApiResponse::success(Some(evaluation), None, None)))
}
