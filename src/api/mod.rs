//! Backend API Wrappers
//!
//! Frontend bindings to the REST backend, organized by domain. All
//! calls go through the shared fetch plumbing below so every caller
//! gets the same error shape and cookie handling.

mod answers;
mod auth;
mod leagues;
mod links;
mod questions;
mod races;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

// Re-export all public items
pub use answers::*;
pub use auth::*;
pub use leagues::*;
pub use links::*;
pub use questions::*;
pub use races::*;

/// Error from an API call: the backend message (or status text) plus
/// the HTTP status when the request got far enough to have one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
    /// Per-field validation messages from the body's `errors` map,
    /// one "field: messages" line each
    pub field_errors: Vec<String>,
}

impl ApiError {
    fn network(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    /// Session expired or never established; callers route back to login.
    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Message-only response body used by most mutating endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: std::collections::BTreeMap<String, Vec<String>>,
}

const CONNECTION_ERROR: &str = "Connection error. Please try again.";

async fn send(method: &str, path: &str, body: Option<String>) -> Result<Response, ApiError> {
    let init = RequestInit::new();
    init.set_method(method);
    init.set_credentials(RequestCredentials::Include);
    if let Some(json) = body {
        let headers = web_sys::Headers::new().map_err(|_| ApiError::network(CONNECTION_ERROR))?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|_| ApiError::network(CONNECTION_ERROR))?;
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&json));
    }

    let request = Request::new_with_str_and_init(path, &init)
        .map_err(|_| ApiError::network(CONNECTION_ERROR))?;
    let window = web_sys::window().ok_or_else(|| ApiError::network(CONNECTION_ERROR))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| ApiError::network(CONNECTION_ERROR))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::network(CONNECTION_ERROR))?;

    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        let (message, field_errors) = error_details(&response).await;
        web_sys::console::error_1(
            &format!("[API] {} {} failed: {} {}", method, path, status, message).into(),
        );
        Err(ApiError {
            status: Some(status),
            message,
            field_errors,
        })
    }
}

/// Backend errors carry a `message` field, optionally with a per-field
/// `errors` map; a body that is missing or unreadable falls back to the
/// HTTP status text.
async fn error_details(response: &Response) -> (String, Vec<String>) {
    let fallback = response.status_text();
    let Ok(promise) = response.json() else {
        return (fallback, Vec::new());
    };
    let Ok(value) = JsFuture::from(promise).await else {
        return (fallback, Vec::new());
    };
    match serde_wasm_bindgen::from_value::<ErrorBody>(value) {
        Ok(body) => {
            let message = if body.message.is_empty() {
                fallback
            } else {
                body.message
            };
            let field_errors = body
                .errors
                .iter()
                .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
                .collect();
            (message, field_errors)
        }
        _ => (fallback, Vec::new()),
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let promise = response
        .json()
        .map_err(|_| ApiError::network(CONNECTION_ERROR))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|_| ApiError::network(CONNECTION_ERROR))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::network(e.to_string()))
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    parse_json(send("GET", path, None).await?).await
}

pub(crate) async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
    method: &str,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let json = serde_json::to_string(body).map_err(|e| ApiError::network(e.to_string()))?;
    parse_json(send(method, path, Some(json)).await?).await
}

pub(crate) async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    parse_json(send("POST", path, None).await?).await
}

// Delete responses are 204 or a message body; either way the callers
// refetch the list, so the body is dropped.
pub(crate) async fn delete(path: &str) -> Result<(), ApiError> {
    let _ = send("DELETE", path, None).await?;
    Ok(())
}
