use tracing::warn;

pub const KV_URL_VAR: &str = "KV_REST_API_URL";
pub const KV_TOKEN_VAR: &str = "KV_REST_API_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Kv { url: String, token: String },
    Memory,
}

impl StoreConfig {
    /// Both KV credentials must be present and non-blank, otherwise the
    /// in-memory counters are used for the whole process lifetime.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        match (read(KV_URL_VAR), read(KV_TOKEN_VAR)) {
            (Some(url), Some(token)) => StoreConfig::Kv { url, token },
            _ => {
                warn!("{} / {} not set - like counts will be kept in memory", KV_URL_VAR, KV_TOKEN_VAR);
                StoreConfig::Memory
            }
        }
    }
}
