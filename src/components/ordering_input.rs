//! Ordering answer editor
//!
//! One row per option; users rearrange rows by dragging them or with the
//! move buttons. The whole list re-renders on every change so row indices
//! never go stale.

use leptos::prelude::*;

use leptos_sortable::*;

use crate::models::{Answer, Question};

#[component]
pub fn OrderingInput(question: Question, draft: RwSignal<Option<Answer>>) -> impl IntoView {
    let sorts = create_sort_signals();

    let options = question.options.clone();
    let default_ids = question.option_ids();

    // The list always displays a concrete order, so leaving the screen
    // records it even if the user never rearranged anything.
    if draft.get_untracked().is_none() {
        draft.set(Some(Answer::Ordering(default_ids.clone())));
    }

    // Bind global mouseup handler for dropping
    let drop_defaults = default_ids.clone();
    bind_global_mouseup(sorts, move |dragged_id, slot| {
        let mut ids = match draft.get_untracked() {
            Some(Answer::Ordering(ids)) => ids,
            _ => drop_defaults.clone(),
        };
        let Some(from) = ids.iter().position(|id| *id == dragged_id) else {
            return;
        };
        apply_move(&mut ids, from, slot);
        draft.set(Some(Answer::Ordering(ids)));
    });

    let on_list_mouseleave = make_on_list_mouseleave(sorts);

    let rows = move || {
        let ids = match draft.get() {
            Some(Answer::Ordering(ids)) => ids,
            _ => default_ids.clone(),
        };
        let len = ids.len();

        ids.iter()
            .enumerate()
            .map(|(index, id)| {
                let id = *id;
                let text = options
                    .iter()
                    .find(|o| o.id == id)
                    .map(|o| o.option_text.clone())
                    .unwrap_or_default();

                let on_mousedown = make_on_mousedown(sorts, id);
                let on_row_mousemove = make_on_row_mousemove(sorts, index);

                // Visual state
                let is_dragging = move || sorts.dragging_id_read.get() == Some(id);
                let slot_before = move || {
                    sorts.dragging_id_read.get().is_some()
                        && sorts.hover_slot_read.get() == Some(index)
                };
                let slot_after = move || {
                    index + 1 == len
                        && sorts.dragging_id_read.get().is_some()
                        && sorts.hover_slot_read.get() == Some(len)
                };

                let row_class = move || {
                    let mut c = String::from("ordering-row");
                    if is_dragging() {
                        c.push_str(" dragging");
                    }
                    if slot_before() {
                        c.push_str(" slot-before");
                    }
                    if slot_after() {
                        c.push_str(" slot-after");
                    }
                    c
                };

                // Snapshots for the move buttons; valid until the next re-render
                let ids_up = ids.clone();
                let ids_down = ids.clone();
                let on_move_up = move |_| {
                    let mut ids = ids_up.clone();
                    ids.swap(index, index - 1);
                    draft.set(Some(Answer::Ordering(ids)));
                };
                let on_move_down = move |_| {
                    let mut ids = ids_down.clone();
                    ids.swap(index, index + 1);
                    draft.set(Some(Answer::Ordering(ids)));
                };

                view! {
                    <div
                        class=row_class
                        on:mousedown=on_mousedown
                        on:mousemove=on_row_mousemove
                    >
                        <span class="drag-handle">"⠿"</span>
                        <span class="ordering-position">{index + 1}</span>
                        <span class="ordering-text">{text}</span>
                        <div class="ordering-controls">
                            <button
                                class="move-btn"
                                disabled=index == 0
                                on:click=on_move_up
                            >
                                "↑"
                            </button>
                            <button
                                class="move-btn"
                                disabled=index + 1 == len
                                on:click=on_move_down
                            >
                                "↓"
                            </button>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="ordering-list" on:mouseleave=on_list_mouseleave>
            {rows}
        </div>
    }
}
