//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities and reports to response DTOs.

use refill_core::{
    Bottle, CommunityContribution, ConsumerTest, ConsumerTestAnswer, ConsumerTestQuestion, Id,
    Like, RatingOutcome, RefillStation, RefillStationProblem, RefillStationReview,
    StationMarker, StationTypeCounts, User, UserContribution, WaterTransaction,
};

use super::responses::{
    BottleResponse, CommunityContributionResponse, ConsumerTestAnswerResponse,
    ConsumerTestQuestionResponse, ConsumerTestResponse, LikeResponse, MarkerResponse,
    ProblemResponse, ReviewResponse, StationRatingResponse, StationResponse,
    StationTypeCountsResponse, TransactionResponse, UserContributionResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

// ============================================================================
// Bottle Mappers
// ============================================================================

impl From<Bottle> for BottleResponse {
    fn from(bottle: Bottle) -> Self {
        Self {
            id: bottle.id,
            user_id: bottle.user_id,
            nfc_id: bottle.nfc_id,
            fill_volume: bottle.fill_volume,
            water_type: bottle.water_type,
            title: bottle.title,
            bottle_image: bottle.bottle_image,
            active: bottle.active,
        }
    }
}

// ============================================================================
// Station Mappers
// ============================================================================

impl From<RefillStation> for StationResponse {
    fn from(station: RefillStation) -> Self {
        Self {
            id: station.id,
            name: station.name,
            description: station.description,
            latitude: station.latitude,
            longitude: station.longitude,
            address: station.address,
            water_source: station.water_source,
            opening_times: station.opening_times,
            active: station.active,
            station_type: station.station_type,
            offered_water_types: station.offered_water_types,
            refill_station_image: station.image,
        }
    }
}

impl From<StationMarker> for MarkerResponse {
    fn from(marker: StationMarker) -> Self {
        Self {
            id: marker.id,
            latitude: marker.latitude,
            longitude: marker.longitude,
            status: marker.active,
        }
    }
}

impl StationRatingResponse {
    /// Attach the station id to an aggregation outcome
    pub fn new(station_id: Id, outcome: &RatingOutcome) -> Self {
        match outcome {
            RatingOutcome::NoData => Self::NoData { station_id },
            RatingOutcome::Rated(summary) => Self::Rated {
                station_id,
                review_count: summary.review_count,
                cleanness: summary.cleanness,
                accessibility: summary.accessibility,
                water_quality: summary.water_quality,
                average: summary.average,
            },
        }
    }
}

// ============================================================================
// Review / Problem Mappers
// ============================================================================

impl From<RefillStationReview> for ReviewResponse {
    fn from(review: RefillStationReview) -> Self {
        Self {
            id: review.id,
            station_id: review.station_id,
            user_id: review.user_id,
            cleanness: review.cleanness.value(),
            accessibility: review.accessibility.value(),
            water_quality: review.water_quality.value(),
            timestamp: review.timestamp,
        }
    }
}

impl From<RefillStationProblem> for ProblemResponse {
    fn from(problem: RefillStationProblem) -> Self {
        Self {
            id: problem.id,
            station_id: problem.station_id,
            title: problem.title,
            description: problem.description,
            status: problem.status,
            refill_station_problem_image: problem.image,
            timestamp: problem.timestamp,
        }
    }
}

// ============================================================================
// Consumer Test Mappers
// ============================================================================

impl From<ConsumerTest> for ConsumerTestResponse {
    fn from(test: ConsumerTest) -> Self {
        Self {
            id: test.id,
            title: test.title,
        }
    }
}

impl From<ConsumerTestQuestion> for ConsumerTestQuestionResponse {
    fn from(question: ConsumerTestQuestion) -> Self {
        Self {
            id: question.id,
            test_id: question.test_id,
            text: question.text,
            min_value: question.min_value,
            max_value: question.max_value,
        }
    }
}

impl From<ConsumerTestAnswer> for ConsumerTestAnswerResponse {
    fn from(answer: ConsumerTestAnswer) -> Self {
        Self {
            id: answer.id,
            user_id: answer.user_id,
            question_id: answer.question_id,
            answer: answer.answer,
            timestamp: answer.timestamp,
        }
    }
}

// ============================================================================
// Transaction / Like Mappers
// ============================================================================

impl From<WaterTransaction> for TransactionResponse {
    fn from(transaction: WaterTransaction) -> Self {
        Self {
            id: transaction.id,
            station_id: transaction.station_id,
            bottle_id: transaction.bottle_id,
            user_id: transaction.user_id,
            volume: transaction.volume,
            water_type: transaction.water_type,
            timestamp: transaction.timestamp,
            guest: transaction.guest,
        }
    }
}

impl From<Like> for LikeResponse {
    fn from(like: Like) -> Self {
        Self {
            id: like.id,
            station_id: like.station_id,
            user_id: like.user_id,
        }
    }
}

// ============================================================================
// Contribution Mappers
// ============================================================================

impl From<UserContribution> for UserContributionResponse {
    fn from(contribution: UserContribution) -> Self {
        Self {
            amount_fillings: contribution.amount_fillings,
            amount_water: contribution.amount_water,
            saved_money: contribution.savings.saved_money,
            saved_trash: contribution.savings.saved_trash,
        }
    }
}

impl From<CommunityContribution> for CommunityContributionResponse {
    fn from(contribution: CommunityContribution) -> Self {
        Self {
            amount_fillings: contribution.amount_fillings,
            amount_water: contribution.amount_water,
            saved_money: contribution.savings.saved_money,
            saved_trash: contribution.savings.saved_trash,
            amount_user: contribution.amount_user,
        }
    }
}

impl From<StationTypeCounts> for StationTypeCountsResponse {
    fn from(counts: StationTypeCounts) -> Self {
        Self {
            amount_refill_station_smart: counts.smart,
            amount_refill_station_manual: counts.manual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refill_core::{TransactionTotals, UserContribution, WaterType};

    #[test]
    fn test_marker_reports_active_flag_as_status() {
        let marker = StationMarker {
            id: Id::new(5),
            latitude: 1.5,
            longitude: 2.5,
            active: false,
        };
        let response = MarkerResponse::from(marker);
        assert_eq!(response.id, Id::new(5));
        assert!(!response.status);
    }

    #[test]
    fn test_user_contribution_mapping() {
        let contribution = UserContribution::from(TransactionTotals {
            count: 2,
            volume_ml: 1500,
        });
        let response = UserContributionResponse::from(contribution);
        assert_eq!(response.amount_fillings, 2);
        assert_eq!(response.amount_water, 1500);
        assert!((response.saved_money - 0.75).abs() < 1e-9);
        assert!((response.saved_trash - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_bottle_mapping_keeps_empty_tag() {
        let bottle = Bottle {
            id: Id::new(1),
            user_id: Id::new(2),
            nfc_id: String::new(),
            fill_volume: 500,
            water_type: WaterType::Mineral,
            title: "Office".into(),
            bottle_image: None,
            active: true,
        };
        let response = BottleResponse::from(bottle);
        assert_eq!(response.nfc_id, "");
        assert_eq!(response.water_type, WaterType::Mineral);
    }
}
