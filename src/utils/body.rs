// src/utils/body.rs

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderValue, header},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// A JSON request body that may be missing.
///
/// * An empty body or a literal `null` is `None`; handlers decide what absence means.
/// * A body without a JSON `Content-Type` or with malformed JSON is a 400.
/// * Well-formed JSON of the wrong shape is a 422.
#[derive(Debug)]
pub struct OptionalJson<T>(pub Option<T>);

impl<T, S> FromRequest<S> for OptionalJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req.headers().get(header::CONTENT_TYPE).cloned();
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        decode_json_body(content_type.as_ref(), &bytes).map(OptionalJson)
    }
}

pub fn decode_json_body<T: DeserializeOwned>(
    content_type: Option<&HeaderValue>,
    body: &Bytes,
) -> Result<Option<T>, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    if !is_json_content_type(content_type) {
        return Err(AppError::BadRequest(format!(
            "Expected a JSON body, got content type {:?}",
            content_type
        )));
    }

    let Json(value) = Json::<Option<T>>::from_bytes(body)?;
    Ok(value)
}

fn is_json_content_type(content_type: Option<&HeaderValue>) -> bool {
    let Some(essence) = content_type
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_ascii_lowercase())
    else {
        return false;
    };

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
