//! Favorite Link API
//!
//! Link CRUD plus the explicit reorder call. Every mutation is followed
//! by a refetch on the caller side, so responses are message-only.

use serde::Serialize;

use super::{delete, get_json, send_json, ApiError, ApiMessage};
use crate::models::FavoriteLink;

#[derive(Serialize)]
pub struct LinkArgs<'a> {
    pub title: &'a str,
    pub url: &'a str,
    pub order: i32,
}

#[derive(Serialize)]
struct ReorderArgs<'a> {
    link_ids: &'a [u32],
}

pub async fn list_links(race_id: u32) -> Result<Vec<FavoriteLink>, ApiError> {
    get_json(&format!("/api/races/{}/favorite_links", race_id)).await
}

pub async fn create_link(race_id: u32, args: &LinkArgs<'_>) -> Result<ApiMessage, ApiError> {
    send_json("POST", &format!("/api/races/{}/favorite_links", race_id), args).await
}

pub async fn update_link(link_id: u32, args: &LinkArgs<'_>) -> Result<ApiMessage, ApiError> {
    send_json("PUT", &format!("/api/favorite_links/{}", link_id), args).await
}

pub async fn delete_link(link_id: u32) -> Result<(), ApiError> {
    delete(&format!("/api/favorite_links/{}", link_id)).await
}

/// Persist a full ordering in one shot; `link_ids` is the final sequence.
pub async fn reorder_links(race_id: u32, link_ids: &[u32]) -> Result<ApiMessage, ApiError> {
    send_json(
        "POST",
        &format!("/api/races/{}/favorite_links/reorder", race_id),
        &ReorderArgs { link_ids },
    )
    .await
}
