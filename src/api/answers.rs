//! Answer API
//!
//! User predictions and the admin answer key share one wire shape: a
//! map from question-id string to per-type answer object.

use std::collections::BTreeMap;

use super::{get_json, send_json, ApiError, ApiMessage};
use crate::models::AnswerPayload;

pub type AnswerMap = BTreeMap<String, AnswerPayload>;

/// Submit the whole accumulated answer map in one request.
pub async fn submit_answers(race_id: u32, answers: &AnswerMap) -> Result<ApiMessage, ApiError> {
    send_json("POST", &format!("/api/races/{}/answers", race_id), answers).await
}

pub async fn fetch_official_answers(race_id: u32) -> Result<Vec<AnswerPayload>, ApiError> {
    get_json(&format!("/api/races/{}/official_answers", race_id)).await
}

pub async fn save_official_answers(
    race_id: u32,
    answers: &AnswerMap,
) -> Result<ApiMessage, ApiError> {
    send_json("POST", &format!("/api/races/{}/official_answers", race_id), answers).await
}
