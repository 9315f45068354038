use leptos::*;

use crate::models::review::Review;

/// Card grid of reviews. When `on_delete` is provided each card carries a
/// delete button (the activity page); without it the cards are read-only
/// (the home page's recent reviews).
#[component]
pub fn ReviewsList(
    #[prop(into)] reviews: Signal<Vec<Review>>,
    #[prop(optional, into)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <div class="reviews-grid">
            {move || {
                reviews
                    .get()
                    .into_iter()
                    .map(|review| {
                        let review_id = review.id.clone();
                        let effect_count = review.effects.len();
                        view! {
                            <div class="review-card">
                                {review.product_image.clone().map(|src| view! {
                                    <img class="product-image" src=src alt=review.product_name.clone()/>
                                })}
                                <div class="badges">
                                    <span class="rating-badge">{format!("{:.1}", review.rating)}</span>
                                    <span class="category-badge">{review.category.clone()}</span>
                                </div>
                                <h3>{review.product_name.clone()}</h3>
                                <p class="brand">{review.brand.clone()}</p>
                                <h4>{review.title.clone()}</h4>
                                <p class="content">{review.content.clone()}</p>
                                <div class="effects">
                                    {review
                                        .effects
                                        .iter()
                                        .take(2)
                                        .map(|effect| view! {
                                            <span class="effect-badge">{effect.clone()}</span>
                                        })
                                        .collect::<Vec<_>>()}
                                    {(effect_count > 2).then(|| view! {
                                        <span class="effect-badge">{format!("+{}", effect_count - 2)}</span>
                                    })}
                                </div>
                                {(review.before_image.is_some() || review.after_image.is_some())
                                    .then(|| view! {
                                        <div class="before-after">
                                            {review.before_image.clone().map(|src| view! {
                                                <figure>
                                                    <figcaption>"Before"</figcaption>
                                                    <img src=src alt="Before"/>
                                                </figure>
                                            })}
                                            {review.after_image.clone().map(|src| view! {
                                                <figure>
                                                    <figcaption>"After"</figcaption>
                                                    <img src=src alt="After"/>
                                                </figure>
                                            })}
                                        </div>
                                    })}
                                <div class="card-footer">
                                    <span class="date">
                                        {review.created_at.format("%Y-%m-%d").to_string()}
                                    </span>
                                    {(review.price > 0.0).then(|| view! {
                                        <span class="price">{format!("${}", review.price)}</span>
                                    })}
                                    {review.would_buy_again.then(|| view! {
                                        <span class="repurchase">"♥"</span>
                                    })}
                                    {on_delete.map(|on_delete| view! {
                                        <button
                                            class="delete"
                                            on:click=move |_| on_delete.call(review_id.clone())
                                        >
                                            "Delete"
                                        </button>
                                    })}
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
