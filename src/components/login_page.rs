use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::{use_navigate, A};

use crate::auth::{use_session, Accounts};
use crate::storage::BrowserStorage;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error_message, set_error_message) = create_signal(Option::<String>::None);

    let navigate = use_navigate();
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);
        match Accounts::new(BrowserStorage).login(&email.get(), &password.get()) {
            Ok(user) => {
                session.set(Some(user));
                navigate("/", Default::default());
            }
            Err(e) => set_error_message.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Welcome back"</h1>
            <p>"Sign in to keep tracking your skincare journey"</p>
            <form on:submit=handle_submit>
                <label>
                    "Email"
                    <input
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |e| set_email.set(event_target_value(&e))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |e| set_password.set(event_target_value(&e))
                    />
                </label>
                <Show when=move || error_message.get().is_some() fallback=|| ()>
                    <p class="form-error">{move || error_message.get().unwrap_or_default()}</p>
                </Show>
                <button type="submit">"Sign in"</button>
            </form>
            <p class="auth-switch">
                "New here? " <A href="/signup">"Create an account"</A>
            </p>
        </div>
    }
}
