//! Navigation Bar
//!
//! Welcome line, role-gated view tabs and logout. The admin tabs are a
//! client-side convenience only; the backend enforces the real
//! permissions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::app::AppView;
use crate::components::login_form::forget_username;
use crate::store::{store_set_user, use_app_store, AppStateStoreFields};

#[component]
pub fn NavBar(view: ReadSignal<AppView>, set_view: WriteSignal<AppView>) -> impl IntoView {
    let store = use_app_store();

    let welcome = move || {
        store.current_user().get().map(|user| {
            format!(
                "Welcome, {}! You are logged in as a {}.",
                user.username, user.role
            )
        })
    };
    let is_general_admin = move || {
        store
            .current_user()
            .get()
            .map(|u| u.is_general_admin())
            .unwrap_or(false)
    };
    let manages_leagues = move || {
        store
            .current_user()
            .get()
            .map(|u| u.manages_leagues())
            .unwrap_or(false)
    };

    let tab_class = move |tab: AppView| {
        if view.get() == tab {
            "nav-tab active"
        } else {
            "nav-tab"
        }
    };

    let on_logout = move |_| {
        // The prefill goes away with the session even if the request fails
        forget_username();
        spawn_local(async move {
            if let Err(e) = api::logout().await {
                web_sys::console::warn_1(&format!("[APP] Logout request failed: {}", e).into());
            }
            set_view.set(AppView::Races);
            store_set_user(&store, None);
        });
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-welcome">{welcome}</span>
            <div class="nav-tabs">
                <button class=move || tab_class(AppView::Races) on:click=move |_| set_view.set(AppView::Races)>
                    "Races"
                </button>
                <Show when=is_general_admin>
                    <button
                        class=move || tab_class(AppView::CreateRace)
                        on:click=move |_| set_view.set(AppView::CreateRace)
                    >
                        "Create race"
                    </button>
                </Show>
                <Show when=manages_leagues>
                    <button
                        class=move || tab_class(AppView::Leagues)
                        on:click=move |_| set_view.set(AppView::Leagues)
                    >
                        "Leagues"
                    </button>
                </Show>
            </div>
            <button class="logout-btn" on:click=on_logout>
                "Log out"
            </button>
        </nav>
    }
}
