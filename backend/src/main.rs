use backend::{
    build_rocket,
    config::{StoreConfig, KV_TOKEN_VAR, KV_URL_VAR},
    routes::AppState,
    store,
};
use rocket::{routes, fs::NamedFile};
use tracing::info;
use include_dir::{include_dir, Dir};
use uuid::Uuid;

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

#[rocket::get("/<path..>", rank = 20)]
async fn spa_handler(path: std::path::PathBuf, temp_dir: &rocket::State<std::path::PathBuf>) -> Option<NamedFile> {
    let file_path = temp_dir.join(&path);
    if file_path.exists() && file_path.is_file() {
        NamedFile::open(&file_path).await.ok()
    } else {
        NamedFile::open(temp_dir.join("index.html")).await.ok()
    }
}

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    info!("🚀 Starting design likes server");

    let config = StoreConfig::from_lookup(|key| {
        secret_store.get(key).or_else(|| std::env::var(key).ok())
    });
    if config == StoreConfig::Memory {
        info!("Set {} and {} to share counts across instances", KV_URL_VAR, KV_TOKEN_VAR);
    }
    let app_state = AppState::new(store::from_config(&config));

    let temp_dir = std::env::temp_dir().join(format!("design_likes_static_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&temp_dir).expect("Failed to create temp directory");
    STATIC_DIR.extract(&temp_dir).expect("Failed to extract static files");

    let rocket = build_rocket(app_state)
        .manage(temp_dir)
        .mount("/", routes![spa_handler]);

    Ok(rocket.into())
}
