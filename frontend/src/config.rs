use shared::designs;

pub struct Config {
    pub api_base_url: &'static str,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            api_base_url: "/api"
        }
    }

    pub fn likes_url(&self) -> String {
        format!("{}/likes", self.api_base_url)
    }

    /// Bulk-read URL covering the whole design catalog.
    pub fn catalog_likes_url(&self) -> String {
        format!("{}?ids={}", self.likes_url(), designs::ids_query())
    }
}

pub const CONFIG: Config = Config::new();
