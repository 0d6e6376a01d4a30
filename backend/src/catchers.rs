use rocket::{Request, catch, http::Status, serde::json::Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorMessage {
    error: String,
    status: u16,
}

fn message(status: Status, error: &str) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: error.into(),
        status: status.code,
    })
}

#[catch(400)]
pub fn bad_request(_req: &Request) -> Json<ErrorMessage> {
    message(Status::BadRequest, "Invalid request parameters.")
}

#[catch(404)]
pub fn not_found(req: &Request) -> Json<ErrorMessage> {
    match req.uri().path().segments().next() {
        Some("api") => message(Status::NotFound, "Unknown API route. Use /api/likes."),
        _ => message(Status::NotFound, "The requested resource was not found."),
    }
}

#[catch(413)]
pub fn payload_too_large(_req: &Request) -> Json<ErrorMessage> {
    message(Status::PayloadTooLarge, "The request body is too large.")
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> Json<ErrorMessage> {
    message(Status::InternalServerError, "An internal server error occurred.")
}
