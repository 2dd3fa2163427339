//! Favorite links admin
//!
//! Per-race modal for link CRUD. The add and edit forms share the
//! predefined-title dropdown whose "Other" choice reveals a custom
//! title input; per-row numeric inputs feed the explicit reorder call.

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, LinkArgs};
use crate::components::{DeleteConfirmButton, Modal};
use crate::context::{use_app_context, NoticeKind};
use crate::models::{FavoriteLink, Race};
use crate::validate::{
    order_or_zero, parse_order, reorder_ids, validate_link, LINK_TITLES, OTHER_TITLE,
};

#[component]
pub fn FavoriteLinksModal(race: Race, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let race_id = race.id;

    let (links, set_links) = signal(None::<Vec<FavoriteLink>>);
    let (load_error, set_load_error) = signal(None::<String>);
    // Raw per-row order inputs, keyed by link id; cleared on every refetch
    let edited_orders = RwSignal::new(BTreeMap::<u32, String>::new());

    let (editing, set_editing) = signal(None::<FavoriteLink>);

    let add_choice = RwSignal::new(LINK_TITLES[0].to_string());
    let add_custom = RwSignal::new(String::new());
    let add_url = RwSignal::new(String::new());
    let add_order = RwSignal::new(String::new());
    let (adding, set_adding) = signal(false);

    let edit_choice = RwSignal::new(LINK_TITLES[0].to_string());
    let edit_custom = RwSignal::new(String::new());
    let edit_url = RwSignal::new(String::new());
    let edit_order = RwSignal::new(String::new());
    let (saving_edit, set_saving_edit) = signal(false);

    let (saving_order, set_saving_order) = signal(false);

    let load_links = move || {
        spawn_local(async move {
            match api::list_links(race_id).await {
                Ok(list) => {
                    edited_orders.set(BTreeMap::new());
                    set_links.set(Some(list));
                    set_load_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[LINKS] Failed to load links for race {}: {}", race_id, e)
                            .into(),
                    );
                    set_load_error.set(Some(e.to_string()));
                }
            }
        });
    };
    load_links();

    let on_add = move |_| {
        if adding.get_untracked() {
            return;
        }
        let (title, url) = match validate_link(
            &add_choice.get_untracked(),
            &add_custom.get_untracked(),
            &add_url.get_untracked(),
        ) {
            Ok(pair) => pair,
            Err(message) => {
                ctx.notify("Validation failed", message, NoticeKind::Error);
                return;
            }
        };
        let order = order_or_zero(&add_order.get_untracked());
        set_adding.set(true);
        spawn_local(async move {
            let result = api::create_link(race_id, &LinkArgs { title: &title, url: &url, order }).await;
            set_adding.set(false);
            match result {
                Ok(_) => {
                    ctx.toast("Link added.", NoticeKind::Success);
                    add_choice.set(LINK_TITLES[0].to_string());
                    add_custom.set(String::new());
                    add_url.set(String::new());
                    add_order.set(String::new());
                    load_links();
                }
                Err(e) => ctx.notify("API error", e.to_string(), NoticeKind::Error),
            }
        });
    };

    // Prefill the edit form; a title outside the predefined list lands
    // in the custom field under the sentinel choice.
    let begin_edit = move |link: FavoriteLink| {
        let predefined = LINK_TITLES
            .iter()
            .any(|t| *t == link.title && *t != OTHER_TITLE);
        if predefined {
            edit_choice.set(link.title.clone());
            edit_custom.set(String::new());
        } else {
            edit_choice.set(OTHER_TITLE.to_string());
            edit_custom.set(link.title.clone());
        }
        edit_url.set(link.url.clone());
        edit_order.set(link.order.to_string());
        set_editing.set(Some(link));
    };

    let on_save_edit = move |_| {
        if saving_edit.get_untracked() {
            return;
        }
        let Some(link) = editing.get_untracked() else {
            return;
        };
        let (title, url) = match validate_link(
            &edit_choice.get_untracked(),
            &edit_custom.get_untracked(),
            &edit_url.get_untracked(),
        ) {
            Ok(pair) => pair,
            Err(message) => {
                ctx.notify("Validation failed", message, NoticeKind::Error);
                return;
            }
        };
        let order = match parse_order(&edit_order.get_untracked()) {
            Ok(order) => order,
            Err(message) => {
                ctx.notify("Validation failed", message, NoticeKind::Error);
                return;
            }
        };
        set_saving_edit.set(true);
        spawn_local(async move {
            let result = api::update_link(link.id, &LinkArgs { title: &title, url: &url, order }).await;
            set_saving_edit.set(false);
            match result {
                Ok(_) => {
                    ctx.toast("Link updated.", NoticeKind::Success);
                    set_editing.set(None);
                    load_links();
                }
                Err(e) => ctx.notify("API error", e.to_string(), NoticeKind::Error),
            }
        });
    };

    let remove_link = move |link_id: u32| {
        spawn_local(async move {
            match api::delete_link(link_id).await {
                Ok(()) => {
                    ctx.toast("Link deleted.", NoticeKind::Success);
                    load_links();
                }
                Err(e) => ctx.notify("API error", e.to_string(), NoticeKind::Error),
            }
        });
    };

    // Rows not touched keep their fetched order; edited garbage counts as 0
    let on_save_order = move |_| {
        if saving_order.get_untracked() {
            return;
        }
        let Some(list) = links.get_untracked() else {
            return;
        };
        let rows: Vec<(u32, i32)> = list
            .iter()
            .map(|link| {
                let raw = edited_orders.with_untracked(|m| m.get(&link.id).cloned());
                let order = raw.map(|r| order_or_zero(&r)).unwrap_or(link.order);
                (link.id, order)
            })
            .collect();
        let ids = reorder_ids(&rows);
        set_saving_order.set(true);
        spawn_local(async move {
            let result = api::reorder_links(race_id, &ids).await;
            set_saving_order.set(false);
            match result {
                Ok(_) => {
                    ctx.toast("Link order saved.", NoticeKind::Success);
                    load_links();
                }
                Err(e) => ctx.notify("API error", e.to_string(), NoticeKind::Error),
            }
        });
    };

    let link_rows = move || {
        links.get().map(|list| {
            if list.is_empty() {
                return view! {
                    <p class="links-empty">"No links saved for this race."</p>
                }
                .into_any();
            }
            list.into_iter()
                .map(|link| {
                    let link_id = link.id;
                    let fallback_order = link.order;
                    let link_for_edit = link.clone();
                    view! {
                        <div class="link-row">
                            <div class="link-info">
                                <span class="link-title">{link.title.clone()}</span>
                                <a
                                    class="link-url"
                                    href=link.url.clone()
                                    target="_blank"
                                    rel="noopener"
                                >
                                    {link.url.clone()}
                                </a>
                            </div>
                            <div class="link-controls">
                                <label class="link-order-label">"Order:"</label>
                                <input
                                    type="number"
                                    class="link-order-input"
                                    prop:value=move || {
                                        edited_orders
                                            .with(|m| m.get(&link_id).cloned())
                                            .unwrap_or_else(|| fallback_order.to_string())
                                    }
                                    on:input=move |ev| {
                                        let raw = event_target_value(&ev);
                                        edited_orders.update(|m| {
                                            m.insert(link_id, raw);
                                        });
                                    }
                                />
                                <button
                                    class="edit-btn"
                                    on:click=move |_| begin_edit(link_for_edit.clone())
                                >
                                    "Edit"
                                </button>
                                <DeleteConfirmButton
                                    button_class="delete-btn"
                                    on_confirm=Callback::new(move |_| remove_link(link_id))
                                />
                            </div>
                        </div>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <Modal title=format!("Favorite links: {}", race.title) on_close=on_close>
            {move || load_error.get().map(|message| view! { <div class="links-error">{message}</div> })}
            <Show when=move || links.get().is_none() && load_error.get().is_none()>
                <p class="links-loading">"Loading links..."</p>
            </Show>
            <div class="links-list">{link_rows}</div>
            <Show when=move || links.get().is_some()>
                <div class="links-footer">
                    <button class="save-order-btn" disabled=move || saving_order.get() on:click=on_save_order>
                        {move || if saving_order.get() { "Saving order..." } else { "Save order" }}
                    </button>
                </div>
            </Show>

            <Show when=move || editing.get().is_none()>
                <div class="link-form">
                    <h4>"Add link"</h4>
                    <select
                        class="link-title-select"
                        prop:value=move || add_choice.get()
                        on:change=move |ev| {
                            let choice = event_target_value(&ev);
                            if choice != OTHER_TITLE {
                                add_custom.set(String::new());
                            }
                            add_choice.set(choice);
                        }
                    >
                        {LINK_TITLES
                            .iter()
                            .map(|t| view! { <option value=*t>{*t}</option> })
                            .collect_view()}
                    </select>
                    <Show when=move || add_choice.get() == OTHER_TITLE>
                        <input
                            type="text"
                            class="link-custom-title"
                            placeholder="Custom title"
                            prop:value=move || add_custom.get()
                            on:input=move |ev| add_custom.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        type="url"
                        class="link-url-input"
                        placeholder="https://..."
                        prop:value=move || add_url.get()
                        on:input=move |ev| add_url.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        class="link-order-field"
                        placeholder="Order"
                        prop:value=move || add_order.get()
                        on:input=move |ev| add_order.set(event_target_value(&ev))
                    />
                    <button class="add-link-btn" disabled=move || adding.get() on:click=on_add>
                        {move || if adding.get() { "Adding..." } else { "Add link" }}
                    </button>
                </div>
            </Show>

            <Show when=move || editing.get().is_some()>
                <div class="link-form editing">
                    <h4>"Edit link"</h4>
                    <select
                        class="link-title-select"
                        prop:value=move || edit_choice.get()
                        on:change=move |ev| {
                            let choice = event_target_value(&ev);
                            if choice != OTHER_TITLE {
                                edit_custom.set(String::new());
                            }
                            edit_choice.set(choice);
                        }
                    >
                        {LINK_TITLES
                            .iter()
                            .map(|t| view! { <option value=*t>{*t}</option> })
                            .collect_view()}
                    </select>
                    <Show when=move || edit_choice.get() == OTHER_TITLE>
                        <input
                            type="text"
                            class="link-custom-title"
                            placeholder="Custom title"
                            prop:value=move || edit_custom.get()
                            on:input=move |ev| edit_custom.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        type="url"
                        class="link-url-input"
                        prop:value=move || edit_url.get()
                        on:input=move |ev| edit_url.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        class="link-order-field"
                        prop:value=move || edit_order.get()
                        on:input=move |ev| edit_order.set(event_target_value(&ev))
                    />
                    <div class="link-form-actions">
                        <button class="save-link-btn" disabled=move || saving_edit.get() on:click=on_save_edit>
                            {move || if saving_edit.get() { "Saving..." } else { "Save changes" }}
                        </button>
                        <button class="cancel-link-btn" on:click=move |_| set_editing.set(None)>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </Show>
        </Modal>
    }
}
