use leptos::logging::error;
use leptos::*;
use leptos_router::A;

use crate::auth::use_session;
use crate::components::auth_guard::AuthGuard;
use crate::components::insights::Insights;
use crate::components::review_timeline::ReviewTimeline;
use crate::components::reviews_list::ReviewsList;
use crate::components::stats_overview::StatsOverview;
use crate::models::review::Review;
use crate::reviews::ReviewStore;
use crate::stats;
use crate::storage::BrowserStorage;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ActivityTab {
    Reviews,
    Timeline,
    Insights,
}

#[component]
pub fn MyActivityPage() -> impl IntoView {
    view! {
        <AuthGuard>
            <ActivityContent/>
        </AuthGuard>
    }
}

#[component]
fn ActivityContent() -> impl IntoView {
    let session = use_session();
    let (reviews, set_reviews) = create_signal(Vec::<Review>::new());

    let reload = move || {
        let Some(user) = session.user() else {
            return;
        };
        match ReviewStore::new(BrowserStorage).for_user(&user.id) {
            Ok(list) => set_reviews.set(list),
            Err(e) => error!("[REVIEWS] Failed to load reviews: {e}"),
        }
    };
    reload();

    let on_delete = Callback::new(move |id: String| {
        if let Err(e) = ReviewStore::new(BrowserStorage).delete(&id) {
            error!("[REVIEWS] Failed to delete review {id}: {e}");
        }
        reload();
    });

    let summary = create_memo(move |_| stats::summarize(&reviews.get()));
    let (tab, set_tab) = create_signal(ActivityTab::Reviews);

    view! {
        <div class="my-activity">
            <div class="page-head">
                <div>
                    <h1>"My Activity"</h1>
                    <p>"Track your skincare journey and reviews"</p>
                </div>
                <A href="/reviews/new" class="new-review">"New Review"</A>
            </div>

            <StatsOverview summary=summary/>

            <Show
                when=move || !reviews.get().is_empty()
                fallback=|| view! {
                    <div class="empty-state">
                        <h3>"No reviews yet"</h3>
                        <p>"Start your skincare journey by writing your first review!"</p>
                        <A href="/reviews/new">"Write Your First Review"</A>
                        <A href="/">"Explore Reviews"</A>
                    </div>
                }
            >
                <div class="tabs">
                    <button
                        class:active=move || tab.get() == ActivityTab::Reviews
                        on:click=move |_| set_tab.set(ActivityTab::Reviews)
                    >
                        "My Reviews"
                    </button>
                    <button
                        class:active=move || tab.get() == ActivityTab::Timeline
                        on:click=move |_| set_tab.set(ActivityTab::Timeline)
                    >
                        "Timeline"
                    </button>
                    <button
                        class:active=move || tab.get() == ActivityTab::Insights
                        on:click=move |_| set_tab.set(ActivityTab::Insights)
                    >
                        "Insights"
                    </button>
                </div>
                {move || match tab.get() {
                    ActivityTab::Reviews => view! {
                        <ReviewsList reviews=reviews on_delete=on_delete/>
                    }
                    .into_view(),
                    ActivityTab::Timeline => view! {
                        <ReviewTimeline reviews=reviews/>
                    }
                    .into_view(),
                    ActivityTab::Insights => view! {
                        <Insights reviews=reviews/>
                    }
                    .into_view(),
                }}
            </Show>
        </div>
    }
}
