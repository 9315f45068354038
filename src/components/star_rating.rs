use leptos::*;

/// Interactive five-star rating input with half-star granularity. Each star
/// is split into a left (half) and right (full) hit target; hovering
/// previews the value, clicking commits it through `on_change`.
#[component]
pub fn StarRating(
    #[prop(into)] rating: Signal<f32>,
    #[prop(into)] on_change: Callback<f32>,
) -> impl IntoView {
    let (hover, set_hover) = create_signal(0.0_f32);
    let display = move || {
        if hover.get() > 0.0 {
            hover.get()
        } else {
            rating.get()
        }
    };

    view! {
        <div class="star-rating" on:mouseleave=move |_| set_hover.set(0.0)>
            {(1..=5)
                .map(|star| {
                    let full = star as f32;
                    let half = full - 0.5;
                    view! {
                        <span class="star">
                            <button
                                type="button"
                                class="star-half left"
                                class:filled=move || { display() >= half }
                                on:mouseenter=move |_| set_hover.set(half)
                                on:click=move |_| on_change.call(half)
                            >
                                "★"
                            </button>
                            <button
                                type="button"
                                class="star-half right"
                                class:filled=move || { display() >= full }
                                on:mouseenter=move |_| set_hover.set(full)
                                on:click=move |_| on_change.call(full)
                            >
                                "★"
                            </button>
                        </span>
                    }
                })
                .collect::<Vec<_>>()}
            <span class="star-rating-value">
                {move || {
                    let value = display();
                    if value > 0.0 {
                        format!("{:.1}", value)
                    } else {
                        "Not rated".to_string()
                    }
                }}
            </span>
        </div>
    }
}
