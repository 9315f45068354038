use leptos::logging::error;
use leptos::*;
use leptos_router::{use_navigate, A};

use crate::auth::{use_session, Accounts};
use crate::storage::BrowserStorage;

/// Shared page header: brand link, session-aware nav, log in/out controls.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let log_out = move |_: ev::MouseEvent| {
        if let Err(e) = Accounts::new(BrowserStorage).logout() {
            error!("[AUTH] Failed to clear session: {e}");
        }
        session.set(None);
        navigate("/", Default::default());
    };

    view! {
        <header class="site-header">
            <A href="/" class="brand">"SkinReview"</A>
            <nav>
                <Show when=move || session.is_logged_in() fallback=|| ()>
                    <A href="/my-activity">"My Activity"</A>
                </Show>
                <A href="/reviews/new">"Write Review"</A>
            </nav>
            <div class="session-controls">
                {move || match session.user() {
                    Some(user) => {
                        let log_out = log_out.clone();
                        view! {
                            <span class="welcome">{format!("Welcome, {}!", user.username)}</span>
                            <button on:click=log_out>"Log out"</button>
                        }
                        .into_view()
                    }
                    None => view! {
                        <A href="/login">"Log in"</A>
                        <A href="/signup">"Sign up"</A>
                    }
                    .into_view(),
                }}
            </div>
        </header>
    }
}
