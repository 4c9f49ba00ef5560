use {
    log::error,
    serde::Serialize,
    thiserror::Error,
    rocket::{
        Request,
        http::Status,
        serde::json::Json,
        response::{self, Responder}
    },
    crate::models::repo::StoreError
};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unprocessable(String),
    #[error("{0}")]
    Internal(String)
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::BadRequest(_) => Status::BadRequest,
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::Unprocessable(_) => Status::UnprocessableEntity,
            ApiError::Internal(_) => Status::InternalServerError
        }
    }

    pub fn bad_request(e: StoreError) -> ApiError {
        error!("store failure: {}", e);
        ApiError::BadRequest(Status::BadRequest.reason_lossy().to_string())
    }
}

// store failures stay opaque to clients and come out as 422
impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> ApiError {
        error!("store failure: {}", e);
        ApiError::Unprocessable(Status::UnprocessableEntity.reason_lossy().to_string())
    }
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    success: bool,
    error: u16,
    message: String
}

impl ErrorBody {
    pub fn new(status: Status, message: impl Into<String>) -> ErrorBody {
        ErrorBody {
            success: false,
            error: status.code,
            message: message.into()
        }
    }
}

impl <'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        (status, Json(ErrorBody::new(status, self.to_string())))
            .respond_to(request)
    }
}
