use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use shared::{ErrorResponse, ValidationError};
use thiserror::Error;
use tracing::error;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Counter store error: {0}")]
    Store(#[from] StoreError),
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let (status, message) = match &self {
            ApiError::Invalid(e) => (e.status(), e.to_string()),
            ApiError::Store(e) => {
                error!("{} {} failed: {}", req.method(), req.uri(), e);
                (Status::InternalServerError, "Failed to reach like counter store".to_string())
            }
        };

        rocket::Response::build_from(Json(ErrorResponse::new(message)).respond_to(req)?)
            .status(status)
            .ok()
    }
}
