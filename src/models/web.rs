mod error;
mod misc;
mod store;
mod cors;

pub use {
    error::{ApiError, ApiResult, ErrorBody},
    misc::Or404,
    store::Store,
    cors::Cors
};
