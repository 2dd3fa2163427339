//! Race creation form
//!
//! Admin-only form. Selecting a format materializes its segment
//! distance rows; validation collects every problem before any request
//! goes out, and server-side failures render inline the same way.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CreateRaceArgs};
use crate::context::{use_app_context, NoticeKind};
use crate::store::{store_set_race_formats, use_app_store, AppStateStoreFields};
use crate::validate::{validate_race, RaceFormInput, SegmentInput};

/// Segment catalog: id, label, transition flag. Ids match the seeded
/// backend segments.
const SEGMENTS: &[(u32, &str, bool)] = &[
    (1, "Swimming", false),
    (2, "Cycling", false),
    (3, "Running", false),
    (4, "Transition 1 (T1)", true),
    (5, "Transition 2 (T2)", true),
];

/// Course layout per format name, as segment id sequences. Duathlon
/// runs twice, so id 3 appears twice and gets two distance rows.
const FORMAT_SEGMENTS: &[(&str, &[u32])] = &[
    ("Triathlon", &[1, 4, 2, 5, 3]),
    ("Duathlon", &[3, 4, 2, 5, 3]),
    ("Aquathlon", &[1, 4, 3]),
];

const GENDER_CATEGORIES: &[&str] = &["Male", "Female", "Mixed"];

fn segment_label(segment_id: u32) -> Option<(&'static str, bool)> {
    SEGMENTS
        .iter()
        .find(|(id, _, _)| *id == segment_id)
        .map(|(_, name, transition)| (*name, *transition))
}

fn opt_str(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// One materialized distance input
#[derive(Clone, Copy)]
struct SegmentRow {
    segment_id: u32,
    name: &'static str,
    transition: bool,
    distance: RwSignal<String>,
}

#[component]
pub fn RaceForm(#[prop(into)] on_done: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let event_date = RwSignal::new(String::new());
    let close_date = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let promo_image_url = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());
    let format_id = RwSignal::new(None::<u32>);
    let rows = RwSignal::new(Vec::<SegmentRow>::new());
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (submitting, set_submitting) = signal(false);

    // The format catalog is cached in the store across form opens
    if store.race_formats().get_untracked().is_empty() {
        spawn_local(async move {
            match api::list_race_formats().await {
                Ok(formats) => store_set_race_formats(&store, formats),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[RACE] Failed to load race formats: {}", e).into(),
                    );
                    set_errors.set(vec![
                        "Could not load race formats. Try reloading the page.".to_string(),
                    ]);
                }
            }
        });
    }

    let on_format_change = move |ev: web_sys::Event| {
        let id = event_target_value(&ev).parse::<u32>().ok();
        format_id.set(id);
        let name = id.and_then(|id| {
            store
                .race_formats()
                .get_untracked()
                .iter()
                .find(|f| f.id == id)
                .map(|f| f.name.clone())
        });
        let layout = name.as_deref().and_then(|name| {
            FORMAT_SEGMENTS
                .iter()
                .find(|(format, _)| *format == name)
                .map(|(_, ids)| *ids)
        });
        match layout {
            Some(ids) => {
                let new_rows = ids
                    .iter()
                    .filter_map(|id| {
                        segment_label(*id).map(|(name, transition)| SegmentRow {
                            segment_id: *id,
                            name,
                            transition,
                            distance: RwSignal::new(if transition {
                                "0".to_string()
                            } else {
                                String::new()
                            }),
                        })
                    })
                    .collect();
                rows.set(new_rows);
            }
            None => {
                if let Some(name) = name {
                    web_sys::console::warn_1(
                        &format!("[RACE] No segment template for format {}", name).into(),
                    );
                }
                rows.set(Vec::new());
            }
        }
    };

    let on_submit = move |_| {
        if submitting.get_untracked() {
            return;
        }
        let input = RaceFormInput {
            title: title.get_untracked(),
            race_format_id: format_id.get_untracked(),
            event_date: event_date.get_untracked(),
            gender_category: gender.get_untracked(),
            segments: rows
                .get_untracked()
                .iter()
                .map(|row| SegmentInput {
                    segment_id: row.segment_id,
                    name: row.name.to_string(),
                    transition: row.transition,
                    distance: row.distance.get_untracked(),
                })
                .collect(),
        };
        let segments = match validate_race(&input) {
            Ok(segments) => segments,
            Err(messages) => {
                set_errors.set(messages);
                return;
            }
        };
        let Some(format) = input.race_format_id else {
            return;
        };
        set_errors.set(Vec::new());
        set_submitting.set(true);

        let title_value = input.title;
        let event_date_value = input.event_date;
        let gender_value = input.gender_category;
        let description_value = description.get_untracked();
        let close_value = close_date.get_untracked();
        let location_value = location.get_untracked();
        let promo_value = promo_image_url.get_untracked();

        spawn_local(async move {
            let args = CreateRaceArgs {
                title: &title_value,
                description: opt_str(&description_value),
                race_format_id: format,
                event_date: &event_date_value,
                quiniela_close_date: opt_str(&close_value),
                location: opt_str(&location_value),
                promo_image_url: opt_str(&promo_value),
                gender_category: &gender_value,
                segments: &segments,
            };
            let result = api::create_race(&args).await;
            set_submitting.set(false);
            match result {
                Ok(_) => {
                    ctx.toast("Race created successfully.", NoticeKind::Success);
                    ctx.reload();
                    on_done.run(());
                }
                Err(e) => {
                    let mut messages = vec![e.message];
                    messages.extend(e.field_errors);
                    set_errors.set(messages);
                }
            }
        });
    };

    let segment_rows = move || {
        rows.get()
            .into_iter()
            .map(|row| {
                view! {
                    <div class="segment-entry">
                        <label class="segment-name">{row.name}</label>
                        <input
                            type="number"
                            class="segment-distance"
                            placeholder="Distance in km"
                            min="0"
                            step="0.01"
                            prop:value=move || row.distance.get()
                            on:input=move |ev| row.distance.set(event_target_value(&ev))
                        />
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="race-form">
            <h2>"Create race"</h2>

            <Show when=move || !errors.get().is_empty()>
                <div class="form-errors">
                    {move || {
                        errors
                            .get()
                            .into_iter()
                            .map(|message| view! { <div class="form-error">{message}</div> })
                            .collect_view()
                    }}
                </div>
            </Show>

            <label class="form-label">"Title"</label>
            <input
                type="text"
                class="race-title-input"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />

            <label class="form-label">"Description"</label>
            <textarea
                class="race-description-input"
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            ></textarea>

            <label class="form-label">"Race format"</label>
            <select class="race-format-select" on:change=on_format_change>
                <option value="">"Select a format"</option>
                {move || {
                    store
                        .race_formats()
                        .get()
                        .iter()
                        .map(|f| view! { <option value=f.id.to_string()>{f.name.clone()}</option> })
                        .collect_view()
                }}
            </select>

            <div class="race-segments">{segment_rows}</div>

            <label class="form-label">"Event date"</label>
            <input
                type="date"
                class="race-date-input"
                prop:value=move || event_date.get()
                on:input=move |ev| event_date.set(event_target_value(&ev))
            />

            <label class="form-label">"Prediction deadline (optional)"</label>
            <input
                type="datetime-local"
                class="race-close-input"
                prop:value=move || close_date.get()
                on:input=move |ev| close_date.set(event_target_value(&ev))
            />

            <label class="form-label">"Location (optional)"</label>
            <input
                type="text"
                class="race-location-input"
                prop:value=move || location.get()
                on:input=move |ev| location.set(event_target_value(&ev))
            />

            <label class="form-label">"Promo image URL (optional)"</label>
            <input
                type="url"
                class="race-promo-input"
                prop:value=move || promo_image_url.get()
                on:input=move |ev| promo_image_url.set(event_target_value(&ev))
            />

            <label class="form-label">"Gender category"</label>
            <select
                class="race-gender-select"
                on:change=move |ev| gender.set(event_target_value(&ev))
            >
                <option value="">"Select a category"</option>
                {GENDER_CATEGORIES
                    .iter()
                    .map(|g| view! { <option value=*g>{*g}</option> })
                    .collect_view()}
            </select>

            <div class="race-form-actions">
                <button class="create-race-btn" disabled=move || submitting.get() on:click=on_submit>
                    {move || if submitting.get() { "Creating..." } else { "Create race" }}
                </button>
                <button class="back-btn" on:click=move |_| on_done.run(())>
                    "Back to races"
                </button>
            </div>
        </div>
    }
}
