//! Race API
//!
//! Race listing and creation plus the race-format catalog used by the
//! creation form.

use serde::Serialize;

use super::{get_json, send_json, ApiError, ApiMessage};
use crate::models::{Race, RaceFormat};

// ========================
// Argument Structs
// ========================

/// Distance entry for one segment of the race course
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentDistance {
    pub segment_id: u32,
    pub distance_km: f64,
}

/// Body of POST /api/races. Optional fields are serialized as null
/// (not omitted), matching what the backend validates against.
#[derive(Serialize)]
pub struct CreateRaceArgs<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub race_format_id: u32,
    pub event_date: &'a str,
    pub quiniela_close_date: Option<&'a str>,
    pub location: Option<&'a str>,
    pub promo_image_url: Option<&'a str>,
    pub gender_category: &'a str,
    pub segments: &'a [SegmentDistance],
}

// ========================
// Calls
// ========================

pub async fn list_races() -> Result<Vec<Race>, ApiError> {
    get_json("/api/races").await
}

pub async fn list_race_formats() -> Result<Vec<RaceFormat>, ApiError> {
    get_json("/api/race-formats").await
}

pub async fn create_race(args: &CreateRaceArgs<'_>) -> Result<ApiMessage, ApiError> {
    send_json("POST", "/api/races", args).await
}
