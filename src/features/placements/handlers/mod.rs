pub mod placement_handler;

pub use placement_handler::{
    __path_evaluate_placement, __path_get_status, __path_list_not_top, __path_list_top,
    evaluate_placement, get_status, list_not_top, list_top,
};
