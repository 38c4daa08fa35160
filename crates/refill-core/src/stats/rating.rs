//! Rating aggregation over the reviews of one station

use crate::entities::RefillStationReview;

/// Averages of a station's reviews, each rounded to one decimal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    pub review_count: usize,
    pub cleanness: f64,
    pub accessibility: f64,
    pub water_quality: f64,
    /// Mean over all ratings of all dimensions
    pub average: f64,
}

/// Result of aggregating a station's reviews
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatingOutcome {
    /// The station has no reviews yet
    NoData,
    Rated(RatingSummary),
}

impl RatingOutcome {
    /// Aggregate a set of reviews
    pub fn from_reviews<'a, I>(reviews: I) -> Self
    where
        I: IntoIterator<Item = &'a RefillStationReview>,
    {
        let mut count: i64 = 0;
        let (mut cleanness, mut accessibility, mut water_quality) = (0i64, 0i64, 0i64);

        for review in reviews {
            count += 1;
            cleanness += i64::from(review.cleanness.value());
            accessibility += i64::from(review.accessibility.value());
            water_quality += i64::from(review.water_quality.value());
        }

        if count == 0 {
            return Self::NoData;
        }

        Self::Rated(RatingSummary {
            review_count: count as usize,
            cleanness: mean_one_decimal(cleanness, count),
            accessibility: mean_one_decimal(accessibility, count),
            water_quality: mean_one_decimal(water_quality, count),
            average: mean_one_decimal(cleanness + accessibility + water_quality, 3 * count),
        })
    }

    /// Summary, if any review exists
    pub fn summary(&self) -> Option<&RatingSummary> {
        match self {
            Self::NoData => None,
            Self::Rated(summary) => Some(summary),
        }
    }
}

/// `sum / count` rounded half-up to one decimal, computed on integers.
///
/// `count` must be positive; ratings are positive so the sum is too.
fn mean_one_decimal(sum: i64, count: i64) -> f64 {
    let tenths = (20 * sum + count) / (2 * count);
    tenths as f64 / 10.0
}
