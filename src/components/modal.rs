//! Modal Component
//!
//! Shared overlay shell for every dialog in the app. Clicking the
//! backdrop or pressing Escape closes it; clicks inside the panel stay
//! inside.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Keydown rule for the document-level listener: only an Escape press
/// while the modal is still mounted closes it. `open` is `None` once
/// the flag signal is disposed.
fn escape_closes(open: Option<bool>, key: &str) -> bool {
    open == Some(true) && key == "Escape"
}

/// Overlay dialog with a title bar and close button
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    // Escape closes from anywhere. The listener stays registered for
    // the page lifetime; the open flag drops with the modal so stale
    // listeners go inert.
    let open = RwSignal::new(true);
    let on_keydown =
        Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
            if escape_closes(open.try_get_untracked(), &ev.key()) {
                on_close.run(());
            }
        });
    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }
    }
    on_keydown.forget();
    on_cleanup(move || open.set(false));

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-panel" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3 class="modal-title">{title}</h3>
                    <button class="modal-close-btn" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_closes_only_while_mounted() {
        assert!(escape_closes(Some(true), "Escape"));
        assert!(!escape_closes(Some(true), "Enter"));
        // A cleared or disposed open flag keeps the leaked listener inert
        assert!(!escape_closes(Some(false), "Escape"));
        assert!(!escape_closes(None, "Escape"));
    }
}
