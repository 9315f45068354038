use leptos::*;

use crate::stats::ActivitySummary;

/// The four summary cards: review count, average rating, total spend and
/// favorite category.
#[component]
pub fn StatsOverview(#[prop(into)] summary: Signal<ActivitySummary>) -> impl IntoView {
    view! {
        <div class="stats-overview">
            <div class="stat-card">
                <p class="stat-value">{move || summary.get().total_count}</p>
                <p class="stat-label">"Reviews"</p>
            </div>
            <div class="stat-card">
                <p class="stat-value">{move || format!("{:.1}", summary.get().average_rating)}</p>
                <p class="stat-label">"Avg Rating"</p>
            </div>
            <div class="stat-card">
                <p class="stat-value">{move || format!("${}", summary.get().total_spend)}</p>
                <p class="stat-label">"Total Spent"</p>
            </div>
            <div class="stat-card">
                <p class="stat-value">{move || summary.get().favorite_category}</p>
                <p class="stat-label">"Top Category"</p>
            </div>
        </div>
    }
}
