/// The three-step review form: a linear state machine collecting fields
/// into a draft that is submitted atomically to the review store.
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::review::Review;

/// Wizard states, in order. Transitions are forward/back only, no skipping;
/// `next` on the last step and `back` on the first are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Product,
    Review,
    Details,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [WizardStep::Product, WizardStep::Review, WizardStep::Details];

    pub fn next(self) -> Self {
        match self {
            WizardStep::Product => WizardStep::Review,
            WizardStep::Review => WizardStep::Details,
            WizardStep::Details => WizardStep::Details,
        }
    }

    pub fn back(self) -> Self {
        match self {
            WizardStep::Product => WizardStep::Product,
            WizardStep::Review => WizardStep::Product,
            WizardStep::Details => WizardStep::Review,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Product => "Product",
            WizardStep::Review => "Review",
            WizardStep::Details => "Details",
        }
    }

    pub fn is_first(self) -> bool {
        self == WizardStep::Product
    }

    pub fn is_last(self) -> bool {
        self == WizardStep::Details
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::Product
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please enter the product name")]
    MissingProductName,
    #[error("please enter the brand")]
    MissingBrand,
    #[error("please select a category")]
    MissingCategory,
    #[error("please rate the product")]
    MissingRating,
    #[error("rating must be between 0.5 and 5 stars in half-star steps")]
    InvalidRating,
    #[error("price cannot be negative")]
    NegativePrice,
}

/// Everything the wizard collects; the store stamps id, owner and timestamp
/// on submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewDraft {
    pub product_name: String,
    pub brand: String,
    pub category: String,
    pub rating: f32,
    pub title: String,
    pub content: String,
    pub product_image: Option<String>,
    pub before_image: Option<String>,
    pub after_image: Option<String>,
    pub effects: Vec<String>,
    pub custom_effects: String,
    pub skin_type: String,
    pub longevity: String,
    pub price: f64,
    pub would_buy_again: bool,
}

impl ReviewDraft {
    /// Synchronous check of the required fields: product name, brand,
    /// category, and a rating above zero on a half-star step.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.product_name.trim().is_empty() {
            return Err(ValidationError::MissingProductName);
        }
        if self.brand.trim().is_empty() {
            return Err(ValidationError::MissingBrand);
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        if self.rating <= 0.0 {
            return Err(ValidationError::MissingRating);
        }
        if self.rating > 5.0 || (self.rating * 2.0).fract() != 0.0 {
            return Err(ValidationError::InvalidRating);
        }
        if self.price < 0.0 {
            return Err(ValidationError::NegativePrice);
        }
        Ok(())
    }

    pub fn toggle_effect(&mut self, effect: &str) {
        match self.effects.iter().position(|e| e == effect) {
            Some(index) => {
                self.effects.remove(index);
            }
            None => self.effects.push(effect.to_string()),
        }
    }

    pub fn into_review(self, id: String, user_id: String, created_at: DateTime<Utc>) -> Review {
        Review {
            id,
            user_id,
            product_name: self.product_name,
            brand: self.brand,
            category: self.category,
            rating: self.rating,
            title: self.title,
            content: self.content,
            product_image: self.product_image,
            before_image: self.before_image,
            after_image: self.after_image,
            effects: self.effects,
            custom_effects: self.custom_effects,
            skin_type: self.skin_type,
            longevity: self.longevity,
            price: self.price,
            would_buy_again: self.would_buy_again,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ReviewDraft {
        ReviewDraft {
            product_name: "Hydra Serum".to_string(),
            brand: "GlowLab".to_string(),
            category: "serum".to_string(),
            rating: 4.5,
            price: 24.0,
            ..ReviewDraft::default()
        }
    }

    #[test]
    fn steps_advance_linearly_and_saturate() {
        let mut step = WizardStep::default();
        assert_eq!(step, WizardStep::Product);
        assert_eq!(step.back(), WizardStep::Product);

        step = step.next();
        assert_eq!(step, WizardStep::Review);
        step = step.next();
        assert_eq!(step, WizardStep::Details);
        assert_eq!(step.next(), WizardStep::Details);

        assert_eq!(step.back(), WizardStep::Review);
        assert_eq!(step.back().back(), WizardStep::Product);
    }

    #[test]
    fn valid_draft_passes() {
        assert_eq!(valid_draft().validate(), Ok(()));
    }

    #[test]
    fn required_fields_are_checked_in_order() {
        let mut draft = valid_draft();
        draft.product_name = "  ".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::MissingProductName));

        let mut draft = valid_draft();
        draft.brand.clear();
        assert_eq!(draft.validate(), Err(ValidationError::MissingBrand));

        let mut draft = valid_draft();
        draft.category.clear();
        assert_eq!(draft.validate(), Err(ValidationError::MissingCategory));

        let mut draft = valid_draft();
        draft.rating = 0.0;
        assert_eq!(draft.validate(), Err(ValidationError::MissingRating));
    }

    #[test]
    fn rating_must_sit_on_a_half_step() {
        let mut draft = valid_draft();
        draft.rating = 5.5;
        assert_eq!(draft.validate(), Err(ValidationError::InvalidRating));

        draft.rating = 3.2;
        assert_eq!(draft.validate(), Err(ValidationError::InvalidRating));

        draft.rating = 0.5;
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn price_cannot_be_negative() {
        let mut draft = valid_draft();
        draft.price = -1.0;
        assert_eq!(draft.validate(), Err(ValidationError::NegativePrice));

        draft.price = 0.0;
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn toggle_effect_adds_then_removes() {
        let mut draft = valid_draft();
        draft.toggle_effect("Hydration");
        draft.toggle_effect("Brightening");
        assert_eq!(draft.effects, vec!["Hydration", "Brightening"]);

        draft.toggle_effect("Hydration");
        assert_eq!(draft.effects, vec!["Brightening"]);
    }

    #[test]
    fn into_review_carries_every_field() {
        let mut draft = valid_draft();
        draft.toggle_effect("Hydration");
        draft.would_buy_again = true;

        let created_at = Utc::now();
        let review = draft
            .clone()
            .into_review("r1".to_string(), "u1".to_string(), created_at);

        assert_eq!(review.id, "r1");
        assert_eq!(review.user_id, "u1");
        assert_eq!(review.created_at, created_at);
        assert_eq!(review.product_name, draft.product_name);
        assert_eq!(review.effects, draft.effects);
        assert!(review.would_buy_again);
    }
}
