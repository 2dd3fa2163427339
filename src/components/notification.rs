//! Notification Components
//!
//! The two notification surfaces: a stack of auto-dismissing toasts
//! for transient results, and a blocking notice modal for anything the
//! user must acknowledge.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Stack of transient toasts, newest at the bottom
#[component]
pub fn ToastList() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toast-container">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = format!("toast toast-{}", toast.kind.as_str());
                    view! {
                        <div class=class role="alert">
                            <span class="toast-message">{toast.message.clone()}</span>
                            <button
                                class="toast-dismiss-btn"
                                on:click=move |_| ctx.dismiss_toast(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Blocking notice; sits above every other modal until acknowledged
#[component]
pub fn NoticeModal() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || {
            ctx.notice.get().map(|notice| {
                let class = format!("notice-panel notice-{}", notice.kind.as_str());
                view! {
                    <div class="notice-overlay">
                        <div class=class>
                            <h3 class="notice-title">{notice.title.clone()}</h3>
                            <p class="notice-message">{notice.message.clone()}</p>
                            <button class="notice-ok-btn" on:click=move |_| ctx.clear_notice()>
                                "OK"
                            </button>
                        </div>
                    </div>
                }
            })
        }}
    }
}
