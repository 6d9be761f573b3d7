mod placement_dto;

pub use placement_dto::{
    EvaluatePlacementDto, FeedStatusDto, ListingResponseDto, PlacementEvaluationDto,
};
