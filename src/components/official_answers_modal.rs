//! Official answers form
//!
//! Admin-side answer key for one race. Unlike the wizard it shows every
//! question at once, seeded from the stored key, and saves the whole map
//! in a single request using the same payload shape as user answers.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, AnswerMap};
use crate::components::{ChoiceInput, FreeTextInput, Modal, OrderingInput, SliderInput};
use crate::context::{use_app_context, NoticeKind};
use crate::models::{Answer, AnswerPayload, Question, QuestionKind, Race};
use crate::wizard::reconcile_order;

/// Reinterpret a stored key entry for the editors; a saved ordering that
/// no longer matches the option set is dropped so the row falls back to
/// the default order.
fn seed_official(payload: &AnswerPayload, question: &Question) -> Option<Answer> {
    let answer = payload.to_answer(question)?;
    if let Answer::Ordering(ids) = &answer {
        return match reconcile_order(ids, &question.option_ids()) {
            Some(ids) => Some(Answer::Ordering(ids)),
            None => {
                web_sys::console::warn_1(
                    &format!(
                        "[ADMIN] Stored order for question {} no longer matches its options, using default order",
                        question.id
                    )
                    .into(),
                );
                None
            }
        };
    }
    Some(answer)
}

#[component]
pub fn OfficialAnswersModal(race: Race, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();

    let (rows, set_rows) = signal(None::<Vec<(Question, RwSignal<Option<Answer>>)>>);
    let (load_error, set_load_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    let race_id = race.id;

    // Both the questions and the stored key must load before the form
    // renders; saving over a key we failed to read would wipe it.
    spawn_local(async move {
        let questions = match api::list_questions(race_id).await {
            Ok(questions) => questions,
            Err(e) => {
                web_sys::console::error_1(
                    &format!("[ADMIN] Failed to load questions for race {}: {}", race_id, e)
                        .into(),
                );
                set_load_error.set(Some(e.to_string()));
                return;
            }
        };
        let saved = match api::fetch_official_answers(race_id).await {
            Ok(saved) => saved,
            Err(e) => {
                web_sys::console::error_1(
                    &format!(
                        "[ADMIN] Failed to load official answers for race {}: {}",
                        race_id, e
                    )
                    .into(),
                );
                set_load_error.set(Some(e.to_string()));
                return;
            }
        };
        let seeded = questions
            .into_iter()
            .map(|question| {
                let existing = saved
                    .iter()
                    .find(|p| p.question_id == question.id)
                    .and_then(|p| seed_official(p, &question));
                (question, RwSignal::new(existing))
            })
            .collect::<Vec<_>>();
        set_rows.set(Some(seeded));
    });

    let on_save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let Some(rows) = rows.get_untracked() else {
            return;
        };
        let mut answers = AnswerMap::new();
        for (question, draft) in &rows {
            if let Some(answer) = draft.get_untracked() {
                answers.insert(question.id.to_string(), answer.to_payload(question.id));
            }
        }
        if answers.is_empty() {
            ctx.notify(
                "Nothing to save",
                "Set at least one answer before saving.",
                NoticeKind::Error,
            );
            return;
        }
        set_saving.set(true);
        spawn_local(async move {
            match api::save_official_answers(race_id, &answers).await {
                Ok(_) => {
                    ctx.toast("Official answers saved.", NoticeKind::Success);
                    on_close.run(());
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!(
                            "[ADMIN] Saving official answers for race {} failed: {}",
                            race_id, e
                        )
                        .into(),
                    );
                    ctx.notify("Save failed", e.to_string(), NoticeKind::Error);
                    set_saving.set(false);
                }
            }
        });
    };

    let form = move || {
        rows.get().map(|rows| {
            rows.into_iter()
                .map(|(question, draft)| {
                    let kind = question.question_type;
                    let text = question.text.clone();
                    let editor = match kind {
                        QuestionKind::FreeText => {
                            view! { <FreeTextInput draft=draft/> }.into_any()
                        }
                        QuestionKind::MultipleChoice => {
                            view! { <ChoiceInput question=question draft=draft/> }.into_any()
                        }
                        QuestionKind::Ordering => {
                            view! { <OrderingInput question=question draft=draft/> }.into_any()
                        }
                        QuestionKind::Slider => {
                            view! { <SliderInput question=question draft=draft/> }.into_any()
                        }
                        QuestionKind::Unknown => view! {
                            <div class="question-unsupported">
                                "This question type is not supported by this version of the app."
                            </div>
                        }
                        .into_any(),
                    };
                    view! {
                        <div class="official-answer-row">
                            <h4 class="official-question-text">{text}</h4>
                            {editor}
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <Modal title=format!("Official answers: {}", race.title) on_close=on_close>
            {move || load_error.get().map(|message| view! { <div class="official-error">{message}</div> })}
            <Show when=move || rows.get().is_none() && load_error.get().is_none()>
                <div class="official-loading">"Loading questions..."</div>
            </Show>
            <div class="official-answer-list">{form}</div>
            <Show when=move || rows.get().is_some()>
                <div class="official-footer">
                    <button class="save-btn" disabled=move || saving.get() on:click=on_save>
                        {move || if saving.get() { "Saving..." } else { "Save official answers" }}
                    </button>
                </div>
            </Show>
        </Modal>
    }
}
