//! Delete confirmation
//!
//! Two-step inline delete: the first click arms the control, the
//! second runs the callback. Arming is plain local state, so a closed
//! modal or re-rendered row comes back disarmed.

use leptos::prelude::*;

#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    move || {
        if armed.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">"Delete?"</span>
                    <button
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_armed.set(false);
                            on_confirm.run(());
                        }
                    >
                        "✓"
                    </button>
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_armed.set(false);
                        }
                    >
                        "✗"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class=button_class.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(true);
                    }
                >
                    "×"
                </button>
            }
            .into_any()
        }
    }
}
