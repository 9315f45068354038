use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::{use_navigate, A};

use crate::auth::{use_session, Accounts};
use crate::storage::BrowserStorage;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = use_session();
    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error_message, set_error_message) = create_signal(Option::<String>::None);

    let navigate = use_navigate();
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);
        let accounts = Accounts::new(BrowserStorage);
        match accounts.signup(&email.get(), &password.get(), &username.get()) {
            Ok(user) => {
                session.set(Some(user));
                navigate("/", Default::default());
            }
            Err(e) => set_error_message.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Create your account"</h1>
            <p>"Join our community of skincare enthusiasts"</p>
            <form on:submit=handle_submit>
                <label>
                    "Username"
                    <input
                        type="text"
                        placeholder="Choose a username"
                        prop:value=move || username.get()
                        on:input=move |e| set_username.set(event_target_value(&e))
                    />
                </label>
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
                        placeholder="Create a password"
                        prop:value=move || password.get()
                        on:input=move |e| set_password.set(event_target_value(&e))
                    />
                </label>
                <Show when=move || error_message.get().is_some() fallback=|| ()>
                    <p class="form-error">{move || error_message.get().unwrap_or_default()}</p>
                </Show>
                <button type="submit">"Create account"</button>
            </form>
            <p class="auth-switch">
                "Already have an account? " <A href="/login">"Sign in"</A>
            </p>
        </div>
    }
}
