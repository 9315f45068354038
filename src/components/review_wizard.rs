use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::*;
use leptos_router::use_navigate;

use crate::auth::Accounts;
use crate::components::effect_checklist::EffectChecklist;
use crate::components::star_rating::StarRating;
use crate::models::review::{CATEGORIES, LONGEVITY_OPTIONS, SKIN_TYPES};
use crate::reviews::ReviewStore;
use crate::storage::BrowserStorage;
use crate::wizard::{ReviewDraft, WizardStep};

/// The three-step review form (product -> review -> details). Field state
/// lives here so values survive moving between steps; submission validates
/// the assembled draft and hands it to the review store atomically.
#[component]
pub fn ReviewWizard() -> impl IntoView {
    let (step, set_step) = create_signal(WizardStep::default());

    let (product_name, set_product_name) = create_signal(String::new());
    let (brand, set_brand) = create_signal(String::new());
    let (category, set_category) = create_signal(String::new());
    let (product_image, set_product_image) = create_signal(String::new());
    let (rating, set_rating) = create_signal(0.0_f32);
    let (title, set_title) = create_signal(String::new());
    let (content, set_content) = create_signal(String::new());
    let (before_image, set_before_image) = create_signal(String::new());
    let (after_image, set_after_image) = create_signal(String::new());
    let (skin_type, set_skin_type) = create_signal(String::new());
    let (longevity, set_longevity) = create_signal(String::new());
    let effects = create_rw_signal(Vec::<String>::new());
    let (custom_effects, set_custom_effects) = create_signal(String::new());
    let (price, set_price) = create_signal(String::new());
    let (would_buy_again, set_would_buy_again) = create_signal(false);
    let (error_message, set_error_message) = create_signal(Option::<String>::None);

    let draft = move || {
        let image = |value: String| {
            let value = value.trim().to_string();
            if value.is_empty() {
                None
            } else {
                Some(value)
            }
        };
        ReviewDraft {
            product_name: product_name.get(),
            brand: brand.get(),
            category: category.get(),
            rating: rating.get(),
            title: title.get(),
            content: content.get(),
            product_image: image(product_image.get()),
            before_image: image(before_image.get()),
            after_image: image(after_image.get()),
            effects: effects.get(),
            custom_effects: custom_effects.get(),
            skin_type: skin_type.get(),
            longevity: longevity.get(),
            price: price.get().trim().parse().unwrap_or(0.0),
            would_buy_again: would_buy_again.get(),
        }
    };

    let toggle_effect = Callback::new(move |effect: String| {
        effects.update(|selected| match selected.iter().position(|e| e == &effect) {
            Some(index) => {
                selected.remove(index);
            }
            None => selected.push(effect),
        });
    });

    let on_rating = Callback::new(move |value: f32| set_rating.set(value));

    let go_next = move |_: ev::MouseEvent| {
        set_error_message.set(None);
        set_step.set(step.get().next());
    };
    let go_back = move |_: ev::MouseEvent| {
        set_error_message.set(None);
        set_step.set(step.get().back());
    };

    let navigate = use_navigate();
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let store = ReviewStore::new(BrowserStorage);
        let accounts = Accounts::new(BrowserStorage);
        match store.save(&draft(), &accounts) {
            Ok(review) => {
                log!("[WIZARD] Submitted review {}", review.id);
                navigate("/my-activity", Default::default());
            }
            Err(e) => set_error_message.set(Some(e.to_string())),
        }
    };

    view! {
        <form class="review-wizard" on:submit=handle_submit>
            <ol class="wizard-steps">
                {WizardStep::ALL
                    .iter()
                    .map(|s| {
                        let s = *s;
                        view! {
                            <li class:active=move || step.get() == s>{s.label()}</li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ol>

            {move || match step.get() {
                WizardStep::Product => view! {
                    <div class="wizard-card">
                        <label>
                            "Product Name"
                            <input
                                type="text"
                                placeholder="Enter product name"
                                prop:value=move || product_name.get()
                                on:input=move |e| set_product_name.set(event_target_value(&e))
                            />
                        </label>
                        <label>
                            "Brand"
                            <input
                                type="text"
                                placeholder="Enter brand name"
                                prop:value=move || brand.get()
                                on:input=move |e| set_brand.set(event_target_value(&e))
                            />
                        </label>
                        <label>
                            "Category"
                            <select on:change=move |e| set_category.set(event_target_value(&e))>
                                <option value="">"Select category"</option>
                                {CATEGORIES
                                    .iter()
                                    .map(|(value, label)| {
                                        let value = *value;
                                        view! {
                                            <option
                                                value=value
                                                selected=move || category.get() == value
                                            >
                                                {*label}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label>
                            "Product Image (optional)"
                            <input
                                type="text"
                                placeholder="Image URL or data"
                                prop:value=move || product_image.get()
                                on:input=move |e| set_product_image.set(event_target_value(&e))
                            />
                        </label>
                        <div class="wizard-nav">
                            <button type="button" on:click=go_next>"Next"</button>
                        </div>
                    </div>
                }
                .into_view(),
                WizardStep::Review => view! {
                    <div class="wizard-card">
                        <label>"Rating"</label>
                        <StarRating rating=rating on_change=on_rating/>
                        <label>
                            "Review Title"
                            <input
                                type="text"
                                placeholder="Summarize your experience"
                                prop:value=move || title.get()
                                on:input=move |e| set_title.set(event_target_value(&e))
                            />
                        </label>
                        <label>
                            "Your Review"
                            <textarea
                                placeholder="Share your experience with this product..."
                                prop:value=move || content.get()
                                on:input=move |e| set_content.set(event_target_value(&e))
                            ></textarea>
                        </label>
                        <label>
                            "Before Image (optional)"
                            <input
                                type="text"
                                placeholder="Image URL or data"
                                prop:value=move || before_image.get()
                                on:input=move |e| set_before_image.set(event_target_value(&e))
                            />
                        </label>
                        <label>
                            "After Image (optional)"
                            <input
                                type="text"
                                placeholder="Image URL or data"
                                prop:value=move || after_image.get()
                                on:input=move |e| set_after_image.set(event_target_value(&e))
                            />
                        </label>
                        <div class="wizard-nav">
                            <button type="button" on:click=go_back>"Back"</button>
                            <button type="button" on:click=go_next>"Next"</button>
                        </div>
                    </div>
                }
                .into_view(),
                WizardStep::Details => view! {
                    <div class="wizard-card">
                        <label>
                            "Product Longevity"
                            <select on:change=move |e| set_longevity.set(event_target_value(&e))>
                                <option value="">"How long did it last?"</option>
                                {LONGEVITY_OPTIONS
                                    .iter()
                                    .map(|(value, label)| {
                                        let value = *value;
                                        view! {
                                            <option
                                                value=value
                                                selected=move || longevity.get() == value
                                            >
                                                {*label}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label>
                            "Your Skin Type"
                            <select on:change=move |e| set_skin_type.set(event_target_value(&e))>
                                <option value="">"Select your skin type"</option>
                                {SKIN_TYPES
                                    .iter()
                                    .map(|(value, label)| {
                                        let value = *value;
                                        view! {
                                            <option
                                                value=value
                                                selected=move || skin_type.get() == value
                                            >
                                                {*label}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label>"Effects & Results"</label>
                        <EffectChecklist selected=effects on_toggle=toggle_effect/>
                        <label>
                            "Other Effects"
                            <input
                                type="text"
                                placeholder="Add other effects..."
                                prop:value=move || custom_effects.get()
                                on:input=move |e| set_custom_effects.set(event_target_value(&e))
                            />
                        </label>
                        <label>
                            "Price"
                            <input
                                type="number"
                                min="0"
                                step="0.01"
                                placeholder="0.00"
                                prop:value=move || price.get()
                                on:input=move |e| set_price.set(event_target_value(&e))
                            />
                        </label>
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || would_buy_again.get()
                                on:change=move |e| set_would_buy_again.set(event_target_checked(&e))
                            />
                            "Would purchase again"
                        </label>
                        <div class="wizard-nav">
                            <button type="button" on:click=go_back>"Back"</button>
                            <button type="submit">"Submit Review"</button>
                        </div>
                    </div>
                }
                .into_view(),
            }}

            <Show when=move || error_message.get().is_some() fallback=|| ()>
                <p class="form-error">{move || error_message.get().unwrap_or_default()}</p>
            </Show>
        </form>
    }
}
