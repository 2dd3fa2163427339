//! Free Text Input Component
//!
//! Multi-line editor for FREE_TEXT questions.

use leptos::prelude::*;

use crate::models::Answer;

/// Textarea bound to the current draft answer
#[component]
pub fn FreeTextInput(draft: RwSignal<Option<Answer>>) -> impl IntoView {
    let text = move || match draft.get() {
        Some(Answer::FreeText(text)) => text,
        _ => String::new(),
    };

    view! {
        <textarea
            class="free-text-input"
            rows=3
            prop:value=text
            on:input=move |ev| {
                draft.set(Some(Answer::FreeText(event_target_value(&ev))));
            }
        ></textarea>
    }
}
