use serde::Deserialize;
use serde_json::{json, Value};
use shared::models::LikeCounts;
use tracing::{debug, warn};
use crate::store::{key_for, CounterStore, StoreError};

/// Redis-compatible REST KV (Upstash protocol): each command is a JSON array
/// POSTed to the base URL with a bearer token.
pub struct KvStore {
    client: reqwest::Client,
    url: String,
    token: String,
}

#[derive(Debug, Deserialize)]
pub struct KvReply {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl KvReply {
    pub fn into_result(self) -> Result<Value, StoreError> {
        match (self.error, self.result) {
            (Some(error), _) => Err(StoreError::Backend(error)),
            (None, Some(result)) => Ok(result),
            (None, None) => Ok(Value::Null),
        }
    }
}

/// Reads a counter value as stored by INCR. Missing keys come back as `null`.
pub fn parse_count(value: &Value) -> Result<u64, StoreError> {
    match value {
        Value::Null => Ok(0),
        Value::Number(n) => n.as_u64().ok_or_else(|| StoreError::UnexpectedReply(n.to_string())),
        Value::String(s) => s.trim().parse().map_err(|_| StoreError::UnexpectedReply(s.clone())),
        other => Err(StoreError::UnexpectedReply(other.to_string())),
    }
}

pub fn parse_mget(ids: &[String], result: &Value) -> Result<LikeCounts, StoreError> {
    let values = result
        .as_array()
        .ok_or_else(|| StoreError::UnexpectedReply(result.to_string()))?;

    if values.len() != ids.len() {
        return Err(StoreError::UnexpectedReply(format!(
            "MGET returned {} values for {} keys",
            values.len(),
            ids.len()
        )));
    }

    ids.iter()
        .zip(values)
        .map(|(id, value)| parse_count(value).map(|n| (id.clone(), n)))
        .collect()
}

impl KvStore {
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    async fn command(&self, command: Value) -> Result<Value, StoreError> {
        debug!("KV command: {}", command);
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(&command)
            .send()
            .await?;

        let status = response.status();
        let reply: KvReply = response.json().await?;
        if !status.is_success() {
            warn!("KV request failed with status {}", status);
        }
        reply.into_result()
    }
}

#[rocket::async_trait]
impl CounterStore for KvStore {
    async fn get(&self, ids: &[String]) -> Result<LikeCounts, StoreError> {
        if ids.is_empty() {
            return Ok(LikeCounts::new());
        }

        let mut command = vec![Value::from("MGET")];
        command.extend(ids.iter().map(|id| Value::from(key_for(id))));

        let result = self.command(Value::Array(command)).await?;
        parse_mget(ids, &result)
    }

    async fn increment(&self, id: &str) -> Result<u64, StoreError> {
        let result = self.command(json!(["INCR", key_for(id)])).await?;
        parse_count(&result)
    }

    fn backend_name(&self) -> &'static str {
        "kv"
    }

    fn is_shared(&self) -> bool {
        true
    }
}
