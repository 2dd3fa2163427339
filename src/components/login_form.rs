//! Login form
//!
//! Cookie-session login. "Remember me" keeps only the username in
//! localStorage; the password is never persisted.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, LoginArgs};
use crate::store::{store_set_user, use_app_store};

const REMEMBERED_USER_KEY: &str = "rememberedUser";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn remembered_username() -> Option<String> {
    local_storage()?.get_item(REMEMBERED_USER_KEY).ok().flatten()
}

fn remember_username(username: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(REMEMBERED_USER_KEY, username);
    }
}

/// Also called on logout, so the prefill disappears with the session.
pub fn forget_username() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(REMEMBERED_USER_KEY);
    }
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let store = use_app_store();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let (message, set_message) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    if let Some(name) = remembered_username() {
        username.set(name);
        remember.set(true);
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if user.trim().is_empty() || pass.is_empty() {
            set_message.set(Some("Username and password are required.".to_string()));
            return;
        }
        set_message.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            match api::login(&LoginArgs {
                username: &user,
                password: &pass,
            })
            .await
            {
                Ok(_) => {
                    if remember.get_untracked() {
                        remember_username(&user);
                    } else {
                        forget_username();
                    }
                    // The session cookie is set; look the user up so the
                    // app can switch views with a full profile
                    match api::fetch_me().await {
                        Ok(me) => {
                            web_sys::console::log_1(
                                &format!("[APP] Logged in as {} ({})", me.username, me.role)
                                    .into(),
                            );
                            store_set_user(&store, Some(me));
                        }
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("[APP] Session lookup after login failed: {}", e)
                                    .into(),
                            );
                            set_message.set(Some(e.to_string()));
                            set_submitting.set(false);
                        }
                    }
                }
                Err(e) => {
                    let text = if e.is_unauthorized() {
                        "Incorrect credentials, please try again.".to_string()
                    } else {
                        e.message
                    };
                    set_message.set(Some(text));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-view">
            <h2>"Log in"</h2>
            <form class="login-form" on:submit=on_submit>
                {move || {
                    message
                        .get()
                        .map(|text| view! { <p class="login-message error">{text}</p> })
                }}
                <label class="form-label" for="username">
                    "Username"
                </label>
                <input
                    id="username"
                    type="text"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <label class="form-label" for="password">
                    "Password"
                </label>
                <input
                    id="password"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <label class="remember-me">
                    <input
                        type="checkbox"
                        prop:checked=move || remember.get()
                        on:change=move |ev| remember.set(event_target_checked(&ev))
                    />
                    "Remember me"
                </label>
                <button type="submit" class="login-btn" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Logging in..." } else { "Log in" }}
                </button>
            </form>
        </div>
    }
}
