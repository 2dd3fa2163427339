//! League API

use serde::Serialize;

use super::{delete, get_json, send_json, ApiError, ApiMessage};
use crate::models::{League, PlannedRace};

/// Body of league create and update; the backend assigns the admin.
#[derive(Serialize)]
pub struct LeagueArgs<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub race_ids: &'a [u32],
}

pub async fn list_leagues() -> Result<Vec<League>, ApiError> {
    get_json("/api/leagues").await
}

/// Full league details, fetched fresh when the edit form opens.
pub async fn get_league(league_id: u32) -> Result<League, ApiError> {
    get_json(&format!("/api/leagues/{}", league_id)).await
}

pub async fn create_league(args: &LeagueArgs<'_>) -> Result<ApiMessage, ApiError> {
    send_json("POST", "/api/leagues", args).await
}

pub async fn update_league(league_id: u32, args: &LeagueArgs<'_>) -> Result<ApiMessage, ApiError> {
    send_json("PUT", &format!("/api/leagues/{}", league_id), args).await
}

pub async fn delete_league(league_id: u32) -> Result<(), ApiError> {
    delete(&format!("/api/leagues/{}", league_id)).await
}

/// Races still eligible for inclusion when assembling a league.
pub async fn list_planned_races() -> Result<Vec<PlannedRace>, ApiError> {
    get_json("/api/races/planned_for_league_creation").await
}
