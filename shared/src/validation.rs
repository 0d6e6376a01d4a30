use serde_json::Value;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("id required")]
    MissingId,
}

#[cfg(feature = "backend")]
impl ValidationError {
    pub fn status(&self) -> rocket::http::Status {
        match self {
            ValidationError::MissingId => rocket::http::Status::BadRequest,
        }
    }
}

/// Splits a comma-separated `ids` query value, trimming entries and dropping empties.
pub fn parse_ids(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

// Integral floats print without a fraction, so `1.0` and `1` name the same design.
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0 => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

/// Pulls the design id out of a raw increment body.
///
/// Malformed JSON (including bytes that are not UTF-8) counts as a missing
/// id. Scalars are coerced to text the way a loosely typed client would send
/// them: `""`, `0`, `false` and `null` are treated as absent.
pub fn extract_design_id(body: &[u8]) -> Result<String, ValidationError> {
    let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

    match value.get("id") {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Ok(number_text(n)),
        Some(Value::Bool(true)) => Ok("true".into()),
        _ => Err(ValidationError::MissingId),
    }
}
