pub mod routes;
pub mod store;
pub mod kv;
pub mod config;
pub mod cors;
pub mod cache;
pub mod error;
pub mod catchers;
pub use shared::{models::*, error::*};

use rocket::{Build, Rocket, catchers, routes};
use crate::{
    routes::{all_options, get_likes, increment_like, AppState},
    cors::CORS,
    cache::CacheControl,
    catchers::{bad_request, internal_error, not_found, payload_too_large},
};

/// The like API with its fairings and catchers. Static file serving is mounted by the binary.
pub fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .attach(CORS)
        .attach(CacheControl)
        .manage(state)
        .mount("/api", routes![get_likes, increment_like, all_options])
        .register("/", catchers![bad_request, not_found, payload_too_large, internal_error])
}

#[cfg(test)]
mod tests;
