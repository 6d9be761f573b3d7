use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::listings::{
    Listing, ListingImage, ListingVideo, ModerationStatus, PricingTier,
};
use crate::features::placements::models::{PlacedListing, PlacementTerms, PlacementWindow};
use crate::features::placements::services::PlacementEvaluation;

/// Listing as served by the placement feed
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponseDto {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    /// URL of the cover image (the principal one, else the first)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_image: Option<String>,
    pub images: Vec<ListingImage>,
    pub videos: Vec<ListingVideo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ModerationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PricingTier>,
    /// Active placement window, present on TOP listings only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<PlacementWindow>,
}

impl From<&Listing> for ListingResponseDto {
    fn from(l: &Listing) -> Self {
        Self {
            id: l.id.clone(),
            title: l.title.clone(),
            description: l.description.clone(),
            name: l.name.clone(),
            phone: l.phone.clone(),
            email: l.email.clone(),
            nationality: l.nationality.clone(),
            country: l.country.clone(),
            department: l.department.clone(),
            city: l.city.clone(),
            locality: l.locality.clone(),
            principal_image: l.principal_image().map(|image| image.url.clone()),
            images: l.images.clone(),
            videos: l.videos.clone(),
            status: l.status,
            pricing: l.pricing.clone(),
            placement: None,
        }
    }
}

impl From<&PlacedListing> for ListingResponseDto {
    fn from(placed: &PlacedListing) -> Self {
        Self {
            placement: placed.window,
            ..Self::from(&placed.listing)
        }
    }
}

/// Snapshot health of the placement feed
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedStatusDto {
    pub top_count: usize,
    pub not_top_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refreshed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotated_at: Option<DateTime<Utc>>,
    pub refresh_count: u64,
    pub failure_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

/// Raw placement fields to evaluate, in the backend's formats
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatePlacementDto {
    /// "2026-10-18", "18/10/2026" or an RFC 3339 timestamp
    #[validate(length(min = 1, max = 64, message = "transactionDate is required"))]
    pub transaction_date: String,

    #[validate(regex(
        path = "*crate::shared::validation::TRANSACTION_TIME_REGEX",
        message = "transactionTime must look like \"09:00\" or \"2:05 PM\""
    ))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_time: Option<String>,

    #[validate(regex(
        path = "*crate::shared::validation::SELECTED_TIME_REGEX",
        message = "selectedTime must look like \"10 AM\" or \"22:00\""
    ))]
    pub selected_time: String,

    #[validate(regex(
        path = "*crate::shared::validation::PRICING_DAYS_REGEX",
        message = "days must look like \"3 DÍAS\" or \"1 MES\""
    ))]
    pub days: String,

    #[validate(regex(
        path = "*crate::shared::validation::PRICING_HOURS_REGEX",
        message = "hours must look like \"10 H\""
    ))]
    pub hours: String,

    /// Local instant to evaluate at; defaults to the marketplace's current time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<NaiveDateTime>,
}

impl EvaluatePlacementDto {
    pub fn terms(&self) -> PlacementTerms<'_> {
        PlacementTerms {
            transaction_date: Some(&self.transaction_date),
            transaction_time: self.transaction_time.as_deref(),
            selected_time: Some(&self.selected_time),
            days: Some(&self.days),
            hours: Some(&self.hours),
        }
    }
}

/// Result of evaluating a placement window at one instant
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlacementEvaluationDto {
    pub window: PlacementWindow,
    pub end_date: NaiveDate,
    pub end_hour: u32,
    pub evaluated_at: NaiveDateTime,
    pub date_in_range: bool,
    pub within_daily_window: bool,
    pub valid: bool,
}

impl PlacementEvaluationDto {
    pub fn new(
        window: PlacementWindow,
        evaluated_at: NaiveDateTime,
        evaluation: PlacementEvaluation,
    ) -> Self {
        Self {
            window,
            end_date: window.end_date(),
            end_hour: window.end_hour(),
            evaluated_at,
            date_in_range: evaluation.date_in_range,
            within_daily_window: evaluation.within_daily_window,
            valid: evaluation.is_valid(),
        }
    }
}
