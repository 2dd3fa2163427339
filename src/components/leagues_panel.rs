//! League administration
//!
//! Table of leagues plus the create/edit modal. The modal's race
//! checkbox list comes from the planned-races endpoint, fetched fresh
//! on every open so newly created races show up without a reload.

use std::collections::BTreeSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, LeagueArgs};
use crate::components::{DeleteConfirmButton, Modal};
use crate::context::{use_app_context, NoticeKind};
use crate::models::{League, PlannedRace};
use crate::validate::validate_league_name;

#[component]
pub fn LeaguesPanel() -> impl IntoView {
    let ctx = use_app_context();

    let (leagues, set_leagues) = signal(None::<Vec<League>>);
    let (load_error, set_load_error) = signal(None::<String>);

    let (form_open, set_form_open) = signal(false);
    // None while creating, the league id while editing
    let (editing_id, set_editing_id) = signal(None::<u32>);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let selected_races = RwSignal::new(BTreeSet::<u32>::new());
    let (planned, set_planned) = signal(None::<Vec<PlannedRace>>);
    let (planned_error, set_planned_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    let load_leagues = move || {
        spawn_local(async move {
            match api::list_leagues().await {
                Ok(list) => {
                    set_leagues.set(Some(list));
                    set_load_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[LEAGUES] Failed to load leagues: {}", e).into(),
                    );
                    set_load_error.set(Some(e.to_string()));
                }
            }
        });
    };
    load_leagues();

    let load_planned = move || {
        set_planned.set(None);
        set_planned_error.set(None);
        spawn_local(async move {
            match api::list_planned_races().await {
                Ok(races) => set_planned.set(Some(races)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[LEAGUES] Failed to load planned races: {}", e).into(),
                    );
                    set_planned_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let open_create = move |_| {
        set_editing_id.set(None);
        name.set(String::new());
        description.set(String::new());
        selected_races.set(BTreeSet::new());
        set_form_open.set(true);
        load_planned();
    };

    // Edit works on fresh details, not the table row
    let open_edit = move |league_id: u32| {
        spawn_local(async move {
            match api::get_league(league_id).await {
                Ok(league) => {
                    name.set(league.name.clone());
                    description.set(league.description.clone().unwrap_or_default());
                    selected_races.set(league.race_ids.iter().copied().collect());
                    set_editing_id.set(Some(league.id));
                    set_form_open.set(true);
                    load_planned();
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[LEAGUES] Failed to load league {}: {}", league_id, e).into(),
                    );
                    ctx.toast(e.to_string(), NoticeKind::Error);
                }
            }
        });
    };

    let remove_league = move |league_id: u32| {
        spawn_local(async move {
            match api::delete_league(league_id).await {
                Ok(()) => {
                    ctx.toast("League deleted.", NoticeKind::Success);
                    load_leagues();
                }
                Err(e) => ctx.toast(e.to_string(), NoticeKind::Error),
            }
        });
    };

    let on_save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let name_value = match validate_league_name(&name.get_untracked()) {
            Ok(v) => v,
            Err(message) => {
                ctx.toast(message, NoticeKind::Error);
                return;
            }
        };
        let description_value = description.get_untracked();
        let race_ids: Vec<u32> = selected_races.with_untracked(|set| set.iter().copied().collect());
        let editing = editing_id.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            let args = LeagueArgs {
                name: &name_value,
                description: &description_value,
                race_ids: &race_ids,
            };
            let result = match editing {
                Some(id) => api::update_league(id, &args).await,
                None => api::create_league(&args).await,
            };
            set_saving.set(false);
            match result {
                Ok(msg) => {
                    let fallback = if editing.is_some() {
                        "League updated."
                    } else {
                        "League created."
                    };
                    let message = if msg.message.is_empty() {
                        fallback.to_string()
                    } else {
                        msg.message
                    };
                    ctx.toast(message, NoticeKind::Success);
                    set_form_open.set(false);
                    load_leagues();
                }
                Err(e) => ctx.toast(e.to_string(), NoticeKind::Error),
            }
        });
    };

    let league_rows = move || {
        leagues.get().map(|list| {
            if list.is_empty() {
                return view! {
                    <tr>
                        <td colspan="5" class="leagues-empty">"No leagues found. Create one!"</td>
                    </tr>
                }
                .into_any();
            }
            list.into_iter()
                .map(|league| {
                    let league_id = league.id;
                    view! {
                        <tr class="league-row">
                            <td>{league.name.clone()}</td>
                            <td>{league.description.clone().unwrap_or_else(|| "N/A".to_string())}</td>
                            <td>{league.admin_username.clone().unwrap_or_else(|| "N/A".to_string())}</td>
                            <td>{league.race_ids.len()}</td>
                            <td class="league-actions">
                                <button class="edit-btn" on:click=move |_| open_edit(league_id)>
                                    "Edit"
                                </button>
                                <DeleteConfirmButton
                                    button_class="delete-btn"
                                    on_confirm=Callback::new(move |_| remove_league(league_id))
                                />
                            </td>
                        </tr>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    let race_checkboxes = move || {
        planned.get().map(|races| {
            if races.is_empty() {
                return view! {
                    <p class="no-planned-races">
                        "No planned races are available for league assembly."
                    </p>
                }
                .into_any();
            }
            races
                .into_iter()
                .map(|race| {
                    let race_id = race.id;
                    view! {
                        <label class="race-checkbox-row">
                            <input
                                type="checkbox"
                                prop:checked=move || selected_races.with(|set| set.contains(&race_id))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    selected_races.update(|set| {
                                        if checked {
                                            set.insert(race_id);
                                        } else {
                                            set.remove(&race_id);
                                        }
                                    });
                                }
                            />
                            <span class="race-checkbox-title">{race.title.clone()}</span>
                            <span class="race-checkbox-date">{format!("({})", race.event_date)}</span>
                        </label>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <div class="leagues-panel">
            <div class="leagues-header">
                <h2>"Leagues"</h2>
                <button class="create-league-btn" on:click=open_create>
                    "Create league"
                </button>
            </div>

            {move || load_error.get().map(|message| view! { <div class="leagues-error">{message}</div> })}
            <Show when=move || leagues.get().is_none() && load_error.get().is_none()>
                <p class="leagues-loading">"Loading leagues..."</p>
            </Show>

            <table class="leagues-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th>"Admin"</th>
                        <th>"Races"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{league_rows}</tbody>
            </table>

            <Show when=move || form_open.get()>
                {move || {
                    let title = if editing_id.get_untracked().is_some() {
                        "Edit league"
                    } else {
                        "Create league"
                    };
                    view! {
                        <Modal title=title on_close=Callback::new(move |_| set_form_open.set(false))>
                            <div class="league-form">
                                <label class="form-label">"Name"</label>
                                <input
                                    type="text"
                                    class="league-name-input"
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                                <label class="form-label">"Description"</label>
                                <textarea
                                    class="league-description-input"
                                    prop:value=move || description.get()
                                    on:input=move |ev| description.set(event_target_value(&ev))
                                ></textarea>

                                <label class="form-label">"Races"</label>
                                {move || planned_error.get().map(|message| {
                                    view! { <div class="planned-error">{message}</div> }
                                })}
                                <Show when=move || planned.get().is_none() && planned_error.get().is_none()>
                                    <p class="planned-loading">"Loading races..."</p>
                                </Show>
                                <div class="races-checkbox-list">{race_checkboxes}</div>

                                <div class="league-form-actions">
                                    <button
                                        class="save-league-btn"
                                        disabled=move || saving.get()
                                        on:click=on_save
                                    >
                                        {move || {
                                            match (saving.get(), editing_id.get().is_some()) {
                                                (true, true) => "Updating...",
                                                (true, false) => "Creating...",
                                                (false, true) => "Save changes",
                                                (false, false) => "Save league",
                                            }
                                        }}
                                    </button>
                                    <button
                                        class="cancel-league-btn"
                                        on:click=move |_| set_form_open.set(false)
                                    >
                                        "Cancel"
                                    </button>
                                </div>
                            </div>
                        </Modal>
                    }
                }}
            </Show>
        </div>
    }
}
