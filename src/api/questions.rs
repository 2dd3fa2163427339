//! Question API

use super::{get_json, ApiError};
use crate::models::Question;

/// Ordered question list for a race, options and slider fields included.
pub async fn list_questions(race_id: u32) -> Result<Vec<Question>, ApiError> {
    get_json(&format!("/api/races/{}/questions", race_id)).await
}
