use rocket::{State, get, post, http::Status, serde::json::Json, data::{Data, ToByteUnit}};
use tracing::{debug, info, instrument, warn};
use shared::{models::*, validation::{extract_design_id, parse_ids}};
use crate::{error::ApiError, store::CounterStore};

pub struct AppState {
    pub store: Box<dyn CounterStore>,
}

impl AppState {
    pub fn new(store: Box<dyn CounterStore>) -> Self {
        Self { store }
    }
}

#[instrument(skip(state, debug))]
#[get("/likes?<ids>&<debug>")]
pub async fn get_likes(
    state: &State<AppState>,
    ids: Option<&str>,
    debug: Option<&str>,
) -> Result<Json<LikesResponse>, ApiError> {
    let ids = parse_ids(ids);
    let counts = state.store.get(&ids).await?;
    debug!("Read {} like counters from {}", counts.len(), state.store.backend_name());

    let response = match debug {
        Some(flag) if !flag.is_empty() => LikesResponse::with_backend_flag(counts, state.store.is_shared()),
        _ => LikesResponse::new(counts),
    };
    Ok(Json(response))
}

/// Upper bound on the increment body; anything cut off is treated as unparseable.
const MAX_BODY: u64 = 64 * 1024;

#[instrument(skip(state, body), fields(design_id))]
#[post("/likes", data = "<body>")]
pub async fn increment_like(
    state: &State<AppState>,
    body: Data<'_>,
) -> Result<Json<IncrementResponse>, ApiError> {
    let bytes = match body.open(MAX_BODY.bytes()).into_bytes().await {
        Ok(bytes) if bytes.is_complete() => bytes.into_inner(),
        Ok(_) => {
            warn!("Increment body exceeded {} bytes", MAX_BODY);
            Vec::new()
        }
        Err(e) => {
            warn!("Failed to read increment body: {}", e);
            Vec::new()
        }
    };
    let id = extract_design_id(&bytes)?;
    tracing::Span::current().record("design_id", id.as_str());

    let count = state.store.increment(&id).await?;
    info!("❤️ Design {} now has {} likes", id, count);

    Ok(Json(IncrementResponse { id, count }))
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}
