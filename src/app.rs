//! Quiniela Frontend App
//!
//! Login gate, navigation and the main views. The store and the
//! notification context are provided here for the whole tree.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    LeaguesPanel, LoginForm, NavBar, NoticeModal, RaceForm, RaceList, ToastList,
};
use crate::context::AppContext;
use crate::store::{store_set_user, AppState, AppStateStoreFields};

/// Top-level views behind the login gate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Races,
    CreateRace,
    Leagues,
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);
    provide_context(AppContext::new());

    let (view, set_view) = signal(AppView::Races);
    let (checking_session, set_checking_session) = signal(true);

    // An existing cookie session survives page reloads, so ask the
    // backend who we are before deciding between login and app
    spawn_local(async move {
        match api::fetch_me().await {
            Ok(me) => {
                web_sys::console::log_1(
                    &format!("[APP] Session resumed for {} ({})", me.username, me.role).into(),
                );
                store_set_user(&store, Some(me));
            }
            Err(e) if e.is_unauthorized() => {
                web_sys::console::log_1(&"[APP] No active session".into());
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[APP] Session check failed: {}", e).into());
            }
        }
        set_checking_session.set(false);
    });

    let logged_in = move || store.current_user().get().is_some();

    view! {
        <div class="app-layout">
            <Show when=move || !checking_session.get()>
                <Show when=logged_in fallback=|| view! { <LoginForm/> }>
                    <NavBar view=view set_view=set_view/>
                    <main class="main-content">
                        {move || match view.get() {
                            AppView::Races => view! { <RaceList/> }.into_any(),
                            AppView::CreateRace => {
                                view! {
                                    <RaceForm on_done=move |_| set_view.set(AppView::Races)/>
                                }
                                    .into_any()
                            }
                            AppView::Leagues => view! { <LeaguesPanel/> }.into_any(),
                        }}
                    </main>
                </Show>
            </Show>
            <ToastList/>
            <NoticeModal/>
        </div>
    }
}
