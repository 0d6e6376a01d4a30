use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;

pub const KV_FLAG_KEY: &str = "_kv";

pub type LikeCounts = BTreeMap<String, u64>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LikesResponse {
    #[serde(flatten)]
    pub counts: LikeCounts,
    #[serde(rename = "_kv", default, skip_serializing_if = "Option::is_none")]
    pub kv: Option<bool>,
}

impl LikesResponse {
    pub fn new(counts: LikeCounts) -> Self {
        Self { counts, kv: None }
    }

    /// A design literally named `_kv` is dropped so the flag is the only `_kv` key.
    pub fn with_backend_flag(mut counts: LikeCounts, shared_backend: bool) -> Self {
        counts.remove(KV_FLAG_KEY);
        Self { counts, kv: Some(shared_backend) }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncrementRequest {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncrementResponse {
    pub id: String,
    pub count: u64,
}
