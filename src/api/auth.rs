//! Auth API
//!
//! Login, logout and session lookup. The backend keeps the session in
//! a cookie; the frontend only ever sees `{username, role}`.

use serde::Serialize;

use super::{get_json, post_empty, send_json, ApiError, ApiMessage};
use crate::models::UserInfo;

#[derive(Serialize)]
pub struct LoginArgs<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

pub async fn login(args: &LoginArgs<'_>) -> Result<ApiMessage, ApiError> {
    send_json("POST", "/api/login", args).await
}

pub async fn logout() -> Result<ApiMessage, ApiError> {
    post_empty("/api/logout").await
}

/// Who is logged in right now; 401 when nobody is.
pub async fn fetch_me() -> Result<UserInfo, ApiError> {
    get_json("/api/user/me").await
}
