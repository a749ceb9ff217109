//! API utilities for frontend-backend communication
//!
//! Every request carries the session cookie (`credentials: include`); the
//! server keeps no other client state.

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

/// Port the survey API listens on when no base is configured
const DEFAULT_API_PORT: u16 = 5000;

/// Get the base URL for API requests
///
/// `SURVEY_API_BASE` set at build time wins; otherwise the base is the page's
/// own host on port 5000, e.g. "http://localhost:5000".
pub fn api_base() -> String {
    if let Some(base) = option_env!("SURVEY_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from a path such as "/get_fertilizers"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn with_session(builder: RequestBuilder) -> RequestBuilder {
    builder.credentials(RequestCredentials::Include)
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request.send().await.map_err(network)?;
    if !response.ok() {
        log::warn!("{} -> {}", response.url(), response.status());
        return Err(ApiError::from_status(response.status()));
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<B: Serialize + ?Sized>(builder: RequestBuilder, body: &B) -> Result<Request, ApiError> {
    builder
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))
}

/// GET `path` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let request = with_session(Request::get(&api_url(path)))
        .build()
        .map_err(network)?;
    decode(send(request).await?).await
}

/// POST a JSON body; the response body is ignored
pub async fn post_json<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = encode(with_session(Request::post(&api_url(path))), body)?;
    send(request).await?;
    Ok(())
}

/// POST a JSON body and decode the JSON response
pub async fn post_json_for<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let request = encode(with_session(Request::post(&api_url(path))), body)?;
    decode(send(request).await?).await
}

/// DELETE with a JSON body
pub async fn delete_json<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = encode(with_session(Request::delete(&api_url(path))), body)?;
    send(request).await?;
    Ok(())
}
