/// Aggregate statistics over one user's reviews.
///
/// Pure functions: deterministic given their input, no side effects, and
/// empty input produces defined defaults rather than an error. Wherever
/// counts tie, the winner is the value encountered first during the
/// grouping pass; that ordering is a contract here, not an accident of
/// map iteration.
use crate::models::review::Review;

/// How many effects `top_effects` keeps by default.
pub const TOP_EFFECTS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySummary {
    pub total_count: usize,
    pub average_rating: f64,
    pub total_spend: f64,
    pub favorite_category: String,
}

pub fn summarize(reviews: &[Review]) -> ActivitySummary {
    let total_count = reviews.len();
    let average_rating = if total_count == 0 {
        0.0
    } else {
        reviews.iter().map(|r| f64::from(r.rating)).sum::<f64>() / total_count as f64
    };
    let total_spend = reviews.iter().map(|r| r.price).sum();

    ActivitySummary {
        total_count,
        average_rating,
        total_spend,
        favorite_category: favorite_category(reviews),
    }
}

/// Category occurrence counts, in first-seen order.
pub fn category_histogram(reviews: &[Review]) -> Vec<(String, usize)> {
    let mut histogram: Vec<(String, usize)> = Vec::new();
    for review in reviews {
        match histogram.iter_mut().find(|(category, _)| *category == review.category) {
            Some((_, count)) => *count += 1,
            None => histogram.push((review.category.clone(), 1)),
        }
    }
    histogram
}

/// The most-reviewed category, "None" for an empty list. Ties keep the
/// category that was encountered first.
pub fn favorite_category(reviews: &[Review]) -> String {
    let mut best: Option<(String, usize)> = None;
    for (category, count) in category_histogram(reviews) {
        match &best {
            Some((_, top)) if count <= *top => {}
            _ => best = Some((category, count)),
        }
    }
    best.map(|(category, _)| category)
        .unwrap_or_else(|| "None".to_string())
}

/// Effect occurrence counts across all reviews' effect lists, sorted
/// non-increasing by count and truncated to `n`. The sort is stable, so
/// equal counts stay in first-seen order.
pub fn top_effects(reviews: &[Review], n: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for review in reviews {
        for effect in &review.effects {
            match counts.iter_mut().find(|(e, _)| e == effect) {
                Some((_, count)) => *count += 1,
                None => counts.push((effect.clone(), 1)),
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(n);
    counts
}

/// Reviews sorted newest first, for the timeline and "recent reviews".
pub fn newest_first(reviews: &[Review]) -> Vec<Review> {
    let mut sorted = reviews.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn review(category: &str, price: f64) -> Review {
        Review {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: "u1".to_string(),
            product_name: "Product".to_string(),
            brand: "Brand".to_string(),
            category: category.to_string(),
            rating: 4.0,
            title: String::new(),
            content: String::new(),
            product_image: None,
            before_image: None,
            after_image: None,
            effects: Vec::new(),
            custom_effects: String::new(),
            skin_type: "normal".to_string(),
            longevity: "1-month".to_string(),
            price,
            would_buy_again: false,
            created_at: Utc::now(),
        }
    }

    fn review_with_effects(effects: &[&str]) -> Review {
        let mut r = review("serum", 0.0);
        r.effects = effects.iter().map(|e| e.to_string()).collect();
        r
    }

    #[test]
    fn empty_input_produces_defined_defaults() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_count, 0);
        assert_eq!(summary.average_rating, 0.0);
        assert_eq!(summary.total_spend, 0.0);
        assert_eq!(summary.favorite_category, "None");
        assert!(category_histogram(&[]).is_empty());
        assert!(top_effects(&[], TOP_EFFECTS).is_empty());
    }

    #[test]
    fn summarize_counts_averages_and_sums() {
        let reviews = vec![
            review("serum", 10.0),
            review("serum", 20.0),
            review("toner", 5.0),
        ];

        let summary = summarize(&reviews);
        assert_eq!(summary.total_count, 3);
        assert_eq!(summary.total_spend, 35.0);
        assert_eq!(summary.favorite_category, "serum");
        assert_eq!(summary.average_rating, 4.0);

        assert_eq!(
            category_histogram(&reviews),
            vec![("serum".to_string(), 2), ("toner".to_string(), 1)]
        );
    }

    #[test]
    fn average_rating_is_the_arithmetic_mean() {
        let mut first = review("serum", 0.0);
        first.rating = 3.5;
        let mut second = review("toner", 0.0);
        second.rating = 4.5;

        let summary = summarize(&[first, second]);
        assert_eq!(summary.average_rating, 4.0);
    }

    #[test]
    fn favorite_category_tie_goes_to_first_seen() {
        let reviews = vec![
            review("toner", 0.0),
            review("serum", 0.0),
            review("serum", 0.0),
            review("toner", 0.0),
        ];
        assert_eq!(favorite_category(&reviews), "toner");
    }

    #[test]
    fn top_effects_sorts_descending_and_truncates() {
        let reviews = vec![
            review_with_effects(&["Hydration", "Brightening"]),
            review_with_effects(&["Hydration", "Exfoliation"]),
            review_with_effects(&["Hydration", "Brightening", "Oil Control"]),
            review_with_effects(&["Anti-Aging", "Clearer Pores"]),
        ];

        let top = top_effects(&reviews, TOP_EFFECTS);
        assert!(top.len() <= TOP_EFFECTS);
        assert_eq!(top[0], ("Hydration".to_string(), 3));
        assert_eq!(top[1], ("Brightening".to_string(), 2));
        // Non-increasing counts all the way down.
        assert!(top.windows(2).all(|pair| pair[0].1 >= pair[1].1));
        // Singles keep first-seen order behind the leaders.
        assert_eq!(top[2].0, "Exfoliation");

        let capped = top_effects(&reviews, 2);
        assert_eq!(capped.len(), 2);
    }

    #[test]
    fn newest_first_orders_by_created_at() {
        let now = Utc::now();
        let mut oldest = review("serum", 0.0);
        oldest.created_at = now - Duration::days(2);
        let mut middle = review("toner", 0.0);
        middle.created_at = now - Duration::days(1);
        let mut newest = review("mask", 0.0);
        newest.created_at = now;

        let sorted = newest_first(&[oldest.clone(), newest.clone(), middle.clone()]);
        assert_eq!(
            sorted.iter().map(|r| r.category.as_str()).collect::<Vec<_>>(),
            vec!["mask", "toner", "serum"]
        );
    }
}
