//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Race, RaceFormat, UserInfo};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Logged-in user; None until the session check settles
    pub current_user: Option<UserInfo>,
    /// All races shown on the main list
    pub races: Vec<Race>,
    /// Race format catalog for the creation form
    pub race_formats: Vec<RaceFormat>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_user(store: &AppStore, user: Option<UserInfo>) {
    store.current_user().set(user);
}

pub fn store_set_races(store: &AppStore, races: Vec<Race>) {
    store.races().set(races);
}

pub fn store_set_race_formats(store: &AppStore, formats: Vec<RaceFormat>) {
    store.race_formats().set(formats);
}
