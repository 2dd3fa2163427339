//! Application Context
//!
//! Shared state provided via Leptos Context API: the race reload
//! trigger and the two notification channels (auto-dismissing toasts
//! plus the blocking notice modal).

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Visual flavor of a toast or notice
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    /// CSS class suffix
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Info => "info",
        }
    }
}

/// Transient message; disappears on its own after a few seconds
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: NoticeKind,
}

/// Blocking message; stays until the user dismisses it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub kind: NoticeKind,
}

const TOAST_DISMISS_MS: u32 = 5_000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload races from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload races from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Active toasts - read
    pub toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_toast_id: ReadSignal<u32>,
    set_next_toast_id: WriteSignal<u32>,
    /// Blocking notice, shown over everything - read
    pub notice: ReadSignal<Option<Notice>>,
    set_notice: WriteSignal<Option<Notice>>,
}

impl AppContext {
    pub fn new() -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let (toasts, set_toasts) = signal(Vec::new());
        let (next_toast_id, set_next_toast_id) = signal(0u32);
        let (notice, set_notice) = signal(None);
        Self {
            reload_trigger,
            set_reload_trigger,
            toasts,
            set_toasts,
            next_toast_id,
            set_next_toast_id,
            notice,
            set_notice,
        }
    }

    /// Trigger a reload of races
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show a toast that removes itself after a few seconds.
    pub fn toast(&self, message: impl Into<String>, kind: NoticeKind) {
        let id = self.next_toast_id.get_untracked();
        self.set_next_toast_id.update(|n| *n += 1);
        self.set_toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                message: message.into(),
                kind,
            })
        });

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
        });
    }

    pub fn dismiss_toast(&self, id: u32) {
        self.set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    /// Show the blocking notice modal.
    pub fn notify(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NoticeKind,
    ) {
        self.set_notice.set(Some(Notice {
            title: title.into(),
            message: message.into(),
            kind,
        }));
    }

    pub fn clear_notice(&self) {
        self.set_notice.set(None);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
