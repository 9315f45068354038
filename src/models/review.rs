// src/models/review.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-submitted rating/commentary record for a skincare product.
/// Immutable once saved, except for deletion by id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,                    // Unique ID for the review
    pub user_id: String,               // ID of the user who submitted the review
    pub product_name: String,          // Product under review
    pub brand: String,                 // Product brand
    pub category: String,              // One of CATEGORIES values
    pub rating: f32,                   // 0-5 in half-step granularity
    pub title: String,                 // Short summary line
    pub content: String,               // Full review text
    pub product_image: Option<String>, // Encoded image data or URL
    pub before_image: Option<String>,
    pub after_image: Option<String>,
    pub effects: Vec<String>,          // Observed skin outcomes, from SKIN_EFFECTS
    pub custom_effects: String,        // Free-text effects
    pub skin_type: String,             // One of SKIN_TYPES values
    pub longevity: String,             // One of LONGEVITY_OPTIONS values
    pub price: f64,                    // Non-negative purchase price
    pub would_buy_again: bool,
    pub created_at: DateTime<Utc>,
}

/// Select options offered by the review wizard, as (value, label) pairs.
pub const CATEGORIES: [(&str, &str); 7] = [
    ("cleanser", "Cleanser"),
    ("toner", "Toner"),
    ("serum", "Serum"),
    ("moisturizer", "Moisturizer"),
    ("mask", "Mask"),
    ("sunscreen", "Sunscreen"),
    ("other", "Other"),
];

/// Checkbox labels for observed effects. Stored on the review verbatim.
pub const SKIN_EFFECTS: [&str; 8] = [
    "Hydration",
    "Reduced Redness",
    "Smoother Texture",
    "Brightening",
    "Exfoliation",
    "Clearer Pores",
    "Anti-Aging",
    "Oil Control",
];

pub const SKIN_TYPES: [(&str, &str); 5] = [
    ("dry", "Dry"),
    ("oily", "Oily"),
    ("combination", "Combination"),
    ("normal", "Normal"),
    ("sensitive", "Sensitive"),
];

pub const LONGEVITY_OPTIONS: [(&str, &str); 5] = [
    ("1-week", "1 week"),
    ("2-weeks", "2 weeks"),
    ("1-month", "1 month"),
    ("3-months", "3 months"),
    ("6-plus-months", "6+ months"),
];
