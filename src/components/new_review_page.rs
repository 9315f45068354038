use leptos::*;

use crate::components::auth_guard::AuthGuard;
use crate::components::review_wizard::ReviewWizard;

#[component]
pub fn NewReviewPage() -> impl IntoView {
    view! {
        <AuthGuard>
            <div class="new-review-page">
                <h1>"Write a Review"</h1>
                <ReviewWizard/>
            </div>
        </AuthGuard>
    }
}
