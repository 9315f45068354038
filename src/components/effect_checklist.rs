use leptos::*;

use crate::models::review::SKIN_EFFECTS;

/// Checkbox grid for the fixed effect labels; toggling reports the label
/// back so the wizard owns the selected list.
#[component]
pub fn EffectChecklist(
    #[prop(into)] selected: Signal<Vec<String>>,
    #[prop(into)] on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="effect-grid">
            {SKIN_EFFECTS
                .iter()
                .map(|effect| {
                    let label = effect.to_string();
                    let toggled = label.clone();
                    let checked = {
                        let label = label.clone();
                        move || selected.get().iter().any(|e| e == &label)
                    };
                    view! {
                        <label class="effect-option">
                            <input
                                type="checkbox"
                                prop:checked=checked
                                on:change=move |_| on_toggle.call(toggled.clone())
                            />
                            {label}
                        </label>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
