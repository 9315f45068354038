use leptos::logging::error;
use leptos::*;
use leptos_router::A;

use crate::auth::use_session;
use crate::components::reviews_list::ReviewsList;
use crate::components::stats_overview::StatsOverview;
use crate::models::review::Review;
use crate::reviews::ReviewStore;
use crate::stats;
use crate::storage::BrowserStorage;

/// Landing page: hero for anonymous visitors, stats plus the three most
/// recent reviews for a logged-in user.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let (reviews, set_reviews) = create_signal(Vec::<Review>::new());

    if let Some(user) = session.user() {
        match ReviewStore::new(BrowserStorage).for_user(&user.id) {
            Ok(list) => set_reviews.set(list),
            Err(e) => error!("[REVIEWS] Failed to load reviews: {e}"),
        }
    }

    let summary = create_memo(move |_| stats::summarize(&reviews.get()));
    let recent = move || {
        stats::newest_first(&reviews.get())
            .into_iter()
            .take(3)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Track Your Skincare Journey"</h1>
                <p>
                    "Keep structured reviews of every product you try and learn "
                    "what actually works for your skin."
                </p>
                <Show when=move || !session.is_logged_in() fallback=|| ()>
                    <div class="hero-actions">
                        <A href="/signup" class="primary">"Get started"</A>
                        <A href="/login">"Log in"</A>
                    </div>
                </Show>
            </section>

            <Show when=move || session.is_logged_in() fallback=|| ()>
                <section class="overview">
                    <StatsOverview summary=summary/>
                    <div class="recent-head">
                        <h2>"Recent Reviews"</h2>
                        <A href="/reviews/new">"Write Review"</A>
                    </div>
                    <Show
                        when=move || !recent().is_empty()
                        fallback=|| view! {
                            <p class="empty-hint">
                                "No reviews yet - start by writing your first one!"
                            </p>
                        }
                    >
                        <ReviewsList reviews=Signal::derive(recent)/>
                    </Show>
                </section>
            </Show>
        </div>
    }
}
