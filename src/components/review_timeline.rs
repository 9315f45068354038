use leptos::*;

use crate::models::review::Review;
use crate::stats::newest_first;

/// Chronological view of the user's reviews, newest first.
#[component]
pub fn ReviewTimeline(#[prop(into)] reviews: Signal<Vec<Review>>) -> impl IntoView {
    view! {
        <div class="timeline">
            {move || {
                newest_first(&reviews.get())
                    .into_iter()
                    .map(|review| view! {
                        <div class="timeline-entry">
                            <div class="timeline-marker"></div>
                            <div class="timeline-body">
                                <h3>
                                    {review.product_name.clone()}
                                    <span class="rating">{format!("{:.1}", review.rating)}</span>
                                </h3>
                                <p class="brand">{review.brand.clone()}</p>
                                <p class="title">{review.title.clone()}</p>
                                <p class="date">
                                    {review.created_at.format("%B %e, %Y").to_string()}
                                </p>
                            </div>
                        </div>
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
