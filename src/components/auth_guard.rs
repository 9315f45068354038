use leptos::*;
use leptos_router::Redirect;

use crate::auth::use_session;

/// Wraps pages that require a session; anonymous visitors land on /login.
#[component]
pub fn AuthGuard(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_logged_in()
            fallback=|| view! { <Redirect path="/login"/> }
        >
            {children()}
        </Show>
    }
}
