use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Request, Response};
use rocket::http::Header;

const NO_STORE: &str = "no-store, max-age=0";
const IMMUTABLE: &str = "public, max-age=31536000, immutable";

const IMMUTABLE_EXTENSIONS: &[&str] = &[
    "mp4", "webm", "ogg", "mp3", "wav", "m4a",
    "jpg", "jpeg", "png", "gif", "webp", "avif", "svg", "ico",
    "woff", "woff2", "ttf", "otf",
];

pub struct CacheControl;

pub fn cache_policy(path: &str) -> Option<&'static str> {
    if path == "/api" || path.starts_with("/api/") {
        return Some(NO_STORE);
    }

    let extension = path.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase())?;
    if extension.contains('/') {
        return None;
    }
    IMMUTABLE_EXTENSIONS.contains(&extension.as_str()).then_some(IMMUTABLE)
}

#[rocket::async_trait]
impl Fairing for CacheControl {
    fn info(&self) -> Info {
        Info {
            name: "Cache-Control",
            kind: Kind::Response
        }
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        if let Some(policy) = cache_policy(req.uri().path().as_str()) {
            res.set_header(Header::new("Cache-Control", policy));
        }
    }
}
