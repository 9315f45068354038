/// Main application entry point for SkinReview.
/// Wires the session context, the shared header and the page routes.
use leptos::logging::error;
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{Route, Router, Routes};

use crate::auth::{Accounts, Session};
use crate::components::home_page::HomePage;
use crate::components::login_page::LoginPage;
use crate::components::my_activity_page::MyActivityPage;
use crate::components::new_review_page::NewReviewPage;
use crate::components::signup_page::SignupPage;
use crate::components::site_header::SiteHeader;
use crate::storage::BrowserStorage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Restore the session before anything renders. A malformed session
    // record is fatal to that read, not to the app: log it and start
    // logged out.
    let restored = match Accounts::new(BrowserStorage).current_user() {
        Ok(user) => user,
        Err(e) => {
            error!("[AUTH] Failed to restore session: {e}");
            None
        }
    };
    provide_context(Session::new(restored));

    view! {
        <Title text="SkinReview"/>
        <Router>
            <SiteHeader/>
            <main>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/signup" view=SignupPage/>
                    <Route path="/reviews/new" view=NewReviewPage/>
                    <Route path="/my-activity" view=MyActivityPage/>
                </Routes>
            </main>
        </Router>
    }
}
