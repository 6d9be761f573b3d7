use utoipa::{Modify, OpenApi};

use crate::features::listings::{
    ListingImage, ListingVideo, ModerationStatus, PricingTier,
};
use crate::features::placements::models::PlacementWindow;
use crate::features::placements::{dtos as placements_dtos, handlers as placements_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Placements (public)
        placements_handlers::list_top,
        placements_handlers::list_not_top,
        placements_handlers::get_status,
        placements_handlers::evaluate_placement,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Listings
            ListingImage,
            ListingVideo,
            ModerationStatus,
            PricingTier,
            // Placements
            PlacementWindow,
            placements_dtos::ListingResponseDto,
            placements_dtos::FeedStatusDto,
            placements_dtos::EvaluatePlacementDto,
            placements_dtos::PlacementEvaluationDto,
            ApiResponse<Vec<placements_dtos::ListingResponseDto>>,
            ApiResponse<placements_dtos::FeedStatusDto>,
            ApiResponse<placements_dtos::PlacementEvaluationDto>,
        )
    ),
    tags(
        (name = "placements", description = "TOP / NOTOP listing feed and placement windows (public)"),
    ),
    info(
        title = "Classifieds Core API",
        version = "0.1.0",
        description = "Placement feed for TOP and NOTOP listings",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_placement_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/placements/top",
            "/api/placements/notop",
            "/api/placements/status",
            "/api/placements/evaluate",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Feed".to_string(),
            version: "9.9.9".to_string(),
            description: "Staging".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Feed");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("Staging"));
    }
}
