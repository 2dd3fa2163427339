//! Answer wizard
//!
//! Drives the user through a race's questions one screen at a time and
//! submits the accumulated answer map in a single request at the end.
//! The session rules live in [`crate::wizard`]; this component only
//! fetches, renders and forwards user input.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ChoiceInput, FreeTextInput, Modal, OrderingInput, SliderInput};
use crate::context::{use_app_context, NoticeKind};
use crate::models::{Answer, QuestionKind, Race};
use crate::wizard::{reconcile_order, WizardSession};

/// Seed the editor draft when a question comes on screen. A committed
/// ordering whose id set no longer matches the question's options is
/// discarded in favor of the default order.
fn seed_draft(session: &WizardSession) -> Option<Answer> {
    let question = session.current_question();
    let existing = session.answer_for(question.id)?.clone();
    if let Answer::Ordering(ids) = &existing {
        return match reconcile_order(ids, &question.option_ids()) {
            Some(ids) => Some(Answer::Ordering(ids)),
            None => {
                web_sys::console::warn_1(
                    &format!(
                        "[WIZARD] Saved order for question {} no longer matches its options, using default order",
                        question.id
                    )
                    .into(),
                );
                None
            }
        };
    }
    Some(existing)
}

#[component]
pub fn AnswerWizard(race: Race, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();

    let (session, set_session) = signal(None::<WizardSession>);
    let (load_error, set_load_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);
    let draft = RwSignal::new(None::<Answer>);

    let race_id = race.id;

    // Fetch the question snapshot once on open
    spawn_local(async move {
        match api::list_questions(race_id).await {
            Ok(questions) => match WizardSession::new(race_id, questions) {
                Ok(new_session) => {
                    draft.set(seed_draft(&new_session));
                    set_session.set(Some(new_session));
                }
                Err(e) => set_load_error.set(Some(e.to_string())),
            },
            Err(e) => {
                web_sys::console::error_1(
                    &format!("[WIZARD] Failed to load questions for race {}: {}", race_id, e)
                        .into(),
                );
                set_load_error.set(Some(e.to_string()));
            }
        }
    });

    // Commit whatever is on screen, then move the cursor
    let go = move |forward: bool| {
        let committed = draft.get_untracked();
        set_session.update(|slot| {
            if let Some(session) = slot {
                if let Some(answer) = committed {
                    session.commit(answer);
                }
                let moved = if forward {
                    session.go_next()
                } else {
                    session.go_previous()
                };
                if moved {
                    draft.set(seed_draft(session));
                }
            }
        });
    };

    let on_finish = move |_| {
        if submitting.get_untracked() {
            return;
        }
        let committed = draft.get_untracked();
        let mut payload = None;
        set_session.update(|slot| {
            if let Some(session) = slot {
                if let Some(answer) = committed {
                    session.commit(answer);
                }
                payload = Some(session.finish_payload());
            }
        });
        match payload {
            Some(Ok(answers)) => {
                set_submitting.set(true);
                spawn_local(async move {
                    match api::submit_answers(race_id, &answers).await {
                        Ok(_) => {
                            ctx.toast("Answers submitted successfully.", NoticeKind::Success);
                            on_close.run(());
                        }
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("[WIZARD] Submission for race {} failed: {}", race_id, e)
                                    .into(),
                            );
                            ctx.notify("Submission failed", e.to_string(), NoticeKind::Error);
                            set_submitting.set(false);
                        }
                    }
                });
            }
            Some(Err(e)) => ctx.notify("Nothing to submit", e.to_string(), NoticeKind::Error),
            None => {}
        }
    };

    let editor = move || {
        session.get().map(|s| {
            let question = s.current_question().clone();
            match question.question_type {
                QuestionKind::FreeText => view! { <FreeTextInput draft=draft/> }.into_any(),
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
            }
        })
    };

    let progress = move || {
        session
            .get()
            .map(|s| format!("Question {} of {}", s.index() + 1, s.question_count()))
    };
    let question_text = move || session.get().map(|s| s.current_question().text.clone());

    let show_previous = move || session.get().map(|s| !s.is_first()).unwrap_or(false);
    let show_next = move || session.get().map(|s| !s.is_last()).unwrap_or(false);
    let show_finish = move || session.get().map(|s| s.is_last()).unwrap_or(false);
    let can_advance = move || session.get().map(|s| s.can_advance()).unwrap_or(false);

    view! {
        <Modal title=format!("Quiniela: {}", race.title) on_close=on_close>
            {move || load_error.get().map(|message| view! { <div class="wizard-error">{message}</div> })}
            <Show when=move || session.get().is_none() && load_error.get().is_none()>
                <div class="wizard-loading">"Loading questions..."</div>
            </Show>
            <Show when=move || session.get().is_some()>
                <div class="wizard">
                    <div class="wizard-progress">{progress}</div>
                    <h4 class="wizard-question-text">{question_text}</h4>
                    <div class="wizard-editor">{editor}</div>
                    <div class="wizard-nav">
                        <Show when=show_previous>
                            <button class="wizard-btn previous" on:click=move |_| go(false)>
                                "Previous"
                            </button>
                        </Show>
                        <Show when=show_next>
                            <button
                                class="wizard-btn next"
                                disabled=move || !can_advance()
                                on:click=move |_| go(true)
                            >
                                "Next"
                            </button>
                        </Show>
                        <Show when=show_finish>
                            <button
                                class="wizard-btn finish"
                                disabled=move || submitting.get() || !can_advance()
                                on:click=on_finish
                            >
                                {move || if submitting.get() { "Submitting..." } else { "Finish" }}
                            </button>
                        </Show>
                    </div>
                </div>
            </Show>
        </Modal>
    }
}
