use leptos::*;

use crate::models::review::Review;
use crate::stats::{category_histogram, top_effects, TOP_EFFECTS};

/// The insights tab: category breakdown bars and the most common effects.
#[component]
pub fn Insights(#[prop(into)] reviews: Signal<Vec<Review>>) -> impl IntoView {
    view! {
        <div class="insights">
            <div class="insight-card">
                <h3>"Category Breakdown"</h3>
                {move || {
                    let reviews = reviews.get();
                    let total = reviews.len().max(1);
                    category_histogram(&reviews)
                        .into_iter()
                        .map(|(category, count)| {
                            let percent = count * 100 / total;
                            view! {
                                <div class="insight-row">
                                    <span class="insight-label">{category}</span>
                                    <div class="bar">
                                        <div class="bar-fill" style:width=format!("{percent}%")></div>
                                    </div>
                                    <span class="insight-count">{count}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <div class="insight-card">
                <h3>"Most Common Effects"</h3>
                {move || {
                    top_effects(&reviews.get(), TOP_EFFECTS)
                        .into_iter()
                        .map(|(effect, count)| view! {
                            <div class="insight-row">
                                <span class="insight-label">{effect}</span>
                                <span class="effect-badge">{count}</span>
                            </div>
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
