use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime, Utc};
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::features::listings::{Listing, ListingSource};
use crate::features::placements::dtos::{
    EvaluatePlacementDto, FeedStatusDto, ListingResponseDto, PlacementEvaluationDto,
};
use crate::features::placements::models::PlacedListing;
use crate::features::placements::services::{
    carry_rotation_order, partition, rotate, PlacementEvaluator,
};
use crate::shared::types::PaginationQuery;

/// Counts produced by one refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSummary {
    pub top: usize,
    pub not_top: usize,
    /// One of the two collections could not be fetched and was kept as-is
    pub partial: bool,
}

#[derive(Default)]
struct FeedState {
    /// Last successful fetch of each collection
    raw_top: Vec<PlacedListing>,
    raw_not_top: Vec<Listing>,
    /// Valid TOP listings in rotation order
    top: Vec<PlacedListing>,
    not_top: Vec<Listing>,
    refreshed_at: Option<DateTime<Utc>>,
    rotated_at: Option<DateTime<Utc>>,
    refresh_count: u64,
    failure_count: u64,
    last_error: Option<String>,
}

/// In-memory TOP / NOTOP feed kept fresh from the listings backend
pub struct FeedService {
    source: Arc<dyn ListingSource>,
    evaluator: PlacementEvaluator,
    state: RwLock<FeedState>,
}

impl FeedService {
    pub fn new(source: Arc<dyn ListingSource>, evaluator: PlacementEvaluator) -> Self {
        Self {
            source,
            evaluator,
            state: RwLock::new(FeedState::default()),
        }
    }

    /// Refetch both collections and re-partition at the marketplace's current time
    pub async fn refresh(&self) -> Result<RefreshSummary> {
        self.refresh_at(self.evaluator.local_now()).await
    }

    /// Refetch both collections and re-partition at `now`.
    ///
    /// A collection that fails to fetch keeps its previous contents. When both
    /// fail the snapshot is left untouched and the error is returned.
    pub async fn refresh_at(&self, now: NaiveDateTime) -> Result<RefreshSummary> {
        let (top, not_top) =
            futures::future::join(self.source.fetch_top(), self.source.fetch_not_top()).await;

        let mut errors = Vec::new();
        let top = top
            .map_err(|e| {
                tracing::warn!(
                    "Failed to fetch TOP listings from {}: {}",
                    self.source.source_name(),
                    e
                );
                errors.push(format!("top: {}", e));
            })
            .ok();
        let not_top = not_top
            .map_err(|e| {
                tracing::warn!(
                    "Failed to fetch NOTOP listings from {}: {}",
                    self.source.source_name(),
                    e
                );
                errors.push(format!("notop: {}", e));
            })
            .ok();

        let mut state = self.state.write().await;

        if top.is_none() && not_top.is_none() {
            let message = errors.join("; ");
            state.failure_count += 1;
            state.last_error = Some(message.clone());
            return Err(AppError::ExternalServiceError(message));
        }

        if let Some(listings) = top {
            state.raw_top = listings
                .into_iter()
                .map(|mut listing| {
                    listing.normalize_principal();
                    self.evaluator.place(listing)
                })
                .collect();
        }
        if let Some(listings) = not_top {
            state.raw_not_top = listings
                .into_iter()
                .map(|mut listing| {
                    listing.normalize_principal();
                    listing
                })
                .collect();
        }

        let split = partition(state.raw_top.clone(), state.raw_not_top.clone(), now);
        let current_order: Vec<String> = state.top.iter().map(|p| p.id().to_string()).collect();

        state.top = carry_rotation_order(&current_order, split.top);
        state.not_top = split.not_top;
        state.refreshed_at = Some(Utc::now());
        state.refresh_count += 1;

        let partial = !errors.is_empty();
        if partial {
            state.failure_count += 1;
            state.last_error = Some(errors.join("; "));
        } else {
            state.last_error = None;
        }

        let summary = RefreshSummary {
            top: state.top.len(),
            not_top: state.not_top.len(),
            partial,
        };
        tracing::debug!(
            "Placement feed refreshed: top={}, notop={}, partial={}",
            summary.top,
            summary.not_top,
            summary.partial
        );

        Ok(summary)
    }

    /// Advance the TOP rotation by one tick; returns the rotated ids
    pub async fn rotate(&self) -> Vec<String> {
        let mut state = self.state.write().await;
        rotate(&mut state.top);
        state.rotated_at = Some(Utc::now());
        state.top.iter().map(|p| p.id().to_string()).collect()
    }

    /// Valid TOP listings in rotation order
    pub async fn top(&self) -> Vec<ListingResponseDto> {
        let state = self.state.read().await;
        state.top.iter().map(ListingResponseDto::from).collect()
    }

    /// One page of NOTOP listings plus the total count
    pub async fn not_top(&self, page: &PaginationQuery) -> (Vec<ListingResponseDto>, i64) {
        let state = self.state.read().await;
        let items = page
            .paginate(&state.not_top)
            .iter()
            .map(ListingResponseDto::from)
            .collect();
        (items, state.not_top.len() as i64)
    }

    pub async fn status(&self) -> FeedStatusDto {
        let state = self.state.read().await;
        FeedStatusDto {
            top_count: state.top.len(),
            not_top_count: state.not_top.len(),
            refreshed_at: state.refreshed_at,
            rotated_at: state.rotated_at,
            refresh_count: state.refresh_count,
            failure_count: state.failure_count,
            last_error: state.last_error.clone(),
        }
    }

    /// Evaluate raw placement fields without touching the feed
    pub fn evaluate(&self, dto: &EvaluatePlacementDto) -> Result<PlacementEvaluationDto> {
        let window = self
            .evaluator
            .window_from_terms(&dto.terms())
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let at = dto.at.unwrap_or_else(|| self.evaluator.local_now());
        let evaluation = self.evaluator.evaluate(&window, at);

        Ok(PlacementEvaluationDto::new(window, at, evaluation))
    }
}
