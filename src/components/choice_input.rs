//! Choice Input Component
//!
//! Option group for MULTIPLE_CHOICE questions: radios when a single
//! option may be correct, checkboxes when several may be.

use leptos::prelude::*;

use crate::models::{Answer, Question};

/// Radio or checkbox group bound to the current draft answer
#[component]
pub fn ChoiceInput(question: Question, draft: RwSignal<Option<Answer>>) -> impl IntoView {
    let multi = question.is_mc_multiple_correct;
    let group = format!("question-{}", question.id);
    let option_order = question.option_ids();

    view! {
        <div class="choice-list">
            {question
                .options
                .iter()
                .map(|option| {
                    let option_id = option.id;
                    let group = group.clone();
                    let option_order = option_order.clone();
                    let checked = move || match draft.get() {
                        Some(Answer::SingleChoice(selected)) => selected == Some(option_id),
                        Some(Answer::MultiChoice(selected)) => selected.contains(&option_id),
                        _ => false,
                    };
                    let on_change = move |_| {
                        if multi {
                            draft.update(|current| {
                                let mut ids = match current {
                                    Some(Answer::MultiChoice(ids)) => ids.clone(),
                                    _ => Vec::new(),
                                };
                                if let Some(pos) = ids.iter().position(|id| *id == option_id) {
                                    ids.remove(pos);
                                } else {
                                    ids.push(option_id);
                                }
                                // Submit in option order, not click order
                                ids.sort_by_key(|id| {
                                    option_order.iter().position(|o| o == id)
                                });
                                *current = Some(Answer::MultiChoice(ids));
                            });
                        } else {
                            draft.set(Some(Answer::SingleChoice(Some(option_id))));
                        }
                    };

                    view! {
                        <label class="choice-option">
                            <input
                                type=if multi { "checkbox" } else { "radio" }
                                name=group
                                prop:checked=checked
                                on:change=on_change
                            />
                            <span class="choice-option-text">{option.option_text.clone()}</span>
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}
