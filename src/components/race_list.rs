//! Race list view
//!
//! One card per race with its favorite links, the participation entry
//! point, and the admin-only management buttons. The list refetches on
//! mount and whenever the app-wide reload trigger bumps.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{AnswerWizard, FavoriteLinksModal, OfficialAnswersModal};
use crate::context::{use_app_context, NoticeKind};
use crate::models::{FavoriteLink, Race};
use crate::store::{store_set_races, use_app_store, AppStateStoreFields};
use crate::wizard;

/// Read-only links strip under a race card. Editing happens in the
/// admin modal.
#[component]
fn RaceLinks(race_id: u32) -> impl IntoView {
    let (links, set_links) = signal(Vec::<FavoriteLink>::new());

    spawn_local(async move {
        match api::list_links(race_id).await {
            Ok(list) => set_links.set(list),
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("[RACE] Failed to load links for race {}: {}", race_id, e).into(),
                );
            }
        }
    });

    view! {
        <Show when=move || !links.get().is_empty()>
            <div class="race-links">
                <span class="race-links-label">"Links:"</span>
                {move || {
                    links
                        .get()
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    class="race-link"
                                    href=link.url
                                    target="_blank"
                                    rel="noopener"
                                >
                                    {link.title}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}

fn deadline_view(race: &Race) -> AnyView {
    match race.quiniela_close_date.as_deref() {
        Some(close) => {
            let close_ms = js_sys::Date::parse(close);
            if wizard::deadline_passed(Some(close_ms), js_sys::Date::now()) {
                view! { <span class="race-deadline closed">{format!("Predictions closed {}", close)}</span> }
                    .into_any()
            } else {
                view! { <span class="race-deadline open">{format!("Predictions open until {}", close)}</span> }
                    .into_any()
            }
        }
        None => view! { <span class="race-deadline open">"Predictions open"</span> }.into_any(),
    }
}

#[component]
pub fn RaceList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal(None::<String>);

    let (wizard_race, set_wizard_race) = signal(None::<Race>);
    let (official_race, set_official_race) = signal(None::<Race>);
    let (links_race, set_links_race) = signal(None::<Race>);

    // Runs on mount and again whenever something bumps the reload
    // trigger, e.g. after a race is created
    Effect::new(move |_| {
        ctx.reload_trigger.get();
        set_loading.set(true);
        set_load_error.set(None);
        spawn_local(async move {
            match api::list_races().await {
                Ok(races) => {
                    store_set_races(&store, races);
                    set_loading.set(false);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[RACE] Failed to load races: {}", e).into(),
                    );
                    set_load_error.set(Some(e.to_string()));
                    set_loading.set(false);
                }
            }
        });
    });

    let is_admin = move || {
        store
            .current_user()
            .get()
            .map(|u| u.is_general_admin())
            .unwrap_or(false)
    };

    // The gate runs before the wizard mounts, so a closed race never
    // triggers a question fetch
    let on_participate = move |race: Race| {
        let close_ms = race.quiniela_close_date.as_deref().map(js_sys::Date::parse);
        if wizard::deadline_passed(close_ms, js_sys::Date::now()) {
            ctx.notify(
                "Predictions closed",
                format!("The prediction deadline for {} has passed.", race.title),
                NoticeKind::Error,
            );
            return;
        }
        set_wizard_race.set(Some(race));
    };

    let race_rows = move || {
        let races = store.races().get();
        if races.is_empty() {
            return view! { <p class="race-empty">"No races available yet."</p> }.into_any();
        }
        races
            .into_iter()
            .map(|race| {
                let race_for_wizard = race.clone();
                let race_for_official = race.clone();
                let race_for_links = race.clone();
                view! {
                    <div class="race-card">
                        <div class="race-card-header">
                            <h3 class="race-title">{race.title.clone()}</h3>
                            {deadline_view(&race)}
                        </div>
                        <div class="race-meta">
                            <span class="race-date">{race.event_date.clone()}</span>
                            {race
                                .location
                                .clone()
                                .map(|loc| view! { <span class="race-location">{loc}</span> })}
                        </div>
                        {race
                            .description
                            .clone()
                            .map(|text| view! { <p class="race-description">{text}</p> })}
                        <RaceLinks race_id=race.id/>
                        <div class="race-actions">
                            <button
                                class="participate-btn"
                                on:click=move |_| on_participate(race_for_wizard.clone())
                            >
                                "Participate"
                            </button>
                            <Show when=is_admin>
                                <button
                                    class="official-answers-btn"
                                    on:click={
                                        let race = race_for_official.clone();
                                        move |_| set_official_race.set(Some(race.clone()))
                                    }
                                >
                                    "Official answers"
                                </button>
                                <button
                                    class="manage-links-btn"
                                    on:click={
                                        let race = race_for_links.clone();
                                        move |_| set_links_race.set(Some(race.clone()))
                                    }
                                >
                                    "Manage links"
                                </button>
                            </Show>
                        </div>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="race-list">
            <h2>"Races"</h2>
            {move || {
                load_error
                    .get()
                    .map(|e| {
                        view! {
                            <p class="race-load-error">{format!("Could not load races: {}", e)}</p>
                        }
                    })
            }}
            <Show when=move || loading.get()>
                <p class="race-loading">"Loading races..."</p>
            </Show>
            <Show when=move || !loading.get()>{race_rows}</Show>

            {move || {
                wizard_race
                    .get()
                    .map(|race| {
                        view! {
                            <AnswerWizard race=race on_close=move |_| set_wizard_race.set(None)/>
                        }
                    })
            }}
            {move || {
                official_race
                    .get()
                    .map(|race| {
                        view! {
                            <OfficialAnswersModal
                                race=race
                                on_close=move |_| set_official_race.set(None)
                            />
                        }
                    })
            }}
            {move || {
                links_race
                    .get()
                    .map(|race| {
                        view! {
                            <FavoriteLinksModal
                                race=race
                                on_close=move |_| set_links_race.set(None)
                            />
                        }
                    })
            }}
        </div>
    }
}
