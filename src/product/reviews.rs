use crate::product::lenient;
use serde::Deserialize;

#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
/// Aggregate reviews of a Product.
pub struct Reviews {
    /// Average rating, nominally between 0 and 5.
    #[serde(default, deserialize_with = "lenient::number")]
    pub rating: f64,
    /// The most helpful review, if the source picked one.
    pub top_review: Option<TopReview>,
}

#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
/// A single highlighted review.
pub struct TopReview {
    #[serde(default, deserialize_with = "lenient::text")]
    pub author: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub rating: f64,
}

/// Whole stars to show for `rating`, rounded half up and clamped to `0..=5`.
///
/// Non-finite ratings count as zero stars.
pub fn star_count(rating: f64) -> usize {
    if !rating.is_finite() {
        return 0;
    }
    // floor(x + 0.5) rounds halves up for negatives too
    (rating + 0.5).floor().clamp(0.0, 5.0) as usize
}
