//! Route definitions
//!
//! All API routes organized by resource and mounted at the root.

use axum::{
    routing::{delete, get},
    Router,
};

use crate::handlers::{
    bottles, consumer_tests, contribution, health, likes, problems, reviews, stations,
    transactions, users,
};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(user_routes())
        .merge(bottle_routes())
        .merge(station_routes())
        .merge(review_routes())
        .merge(problem_routes())
        .merge(transaction_routes())
        .merge(like_routes())
        .merge(contribution_routes())
        .merge(consumer_test_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(users::get_users)
                .post(users::create_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/users/:id/bottles", get(users::get_user_bottles))
}

/// Bottle routes
fn bottle_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/bottles",
            get(bottles::get_bottles)
                .post(bottles::create_bottle)
                .put(bottles::update_bottle)
                .delete(bottles::delete_bottle),
        )
        .route(
            "/bottles/preferences/:nfc_id",
            get(bottles::get_bottle_preferences),
        )
}

/// Refill station routes
fn station_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/refill_stations",
            get(stations::get_stations)
                .post(stations::create_station)
                .put(stations::update_station)
                .delete(stations::delete_station),
        )
        .route("/refill_stations/markers", get(stations::get_markers))
        .route("/refill_stations/:id", get(stations::get_station))
        .route(
            "/refill_stations/:id/reviews",
            get(stations::get_station_rating),
        )
}

/// Review routes
fn review_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/refill_station_reviews",
            get(reviews::get_reviews)
                .post(reviews::submit_review)
                .put(reviews::update_review)
                .delete(reviews::delete_review),
        )
        .route(
            "/refill_station_reviews/:user_id/:station_id",
            get(reviews::get_user_station_review),
        )
}

/// Problem report routes
fn problem_routes() -> Router<AppState> {
    Router::new().route(
        "/refill_station_problems",
        get(problems::get_problems)
            .post(problems::create_problem)
            .put(problems::update_problem)
            .delete(problems::delete_problem),
    )
}

/// Water transaction routes
fn transaction_routes() -> Router<AppState> {
    Router::new().route(
        "/water_transactions",
        get(transactions::get_transactions)
            .post(transactions::create_transaction)
            .put(transactions::update_transaction)
            .delete(transactions::delete_transaction),
    )
}

/// Like routes
fn like_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/likes",
            get(likes::get_likes)
                .post(likes::create_like)
                .put(likes::update_like),
        )
        .route("/likes/:id", delete(likes::delete_like))
        .route("/likes/:id/count", get(likes::get_like_count))
        .route("/likes/:id/users/:user_id", get(likes::get_is_liked))
}

/// Contribution report routes
fn contribution_routes() -> Router<AppState> {
    Router::new()
        .route("/contribution/user", get(contribution::get_user_contribution))
        .route(
            "/contribution/community",
            get(contribution::get_community_contribution),
        )
        .route("/contribution/kl", get(contribution::get_station_type_counts))
}

/// Consumer test questionnaire routes
fn consumer_test_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/consumer_tests",
            get(consumer_tests::get_consumer_tests)
                .post(consumer_tests::create_consumer_test)
                .put(consumer_tests::update_consumer_test)
                .delete(consumer_tests::delete_consumer_test),
        )
        .route(
            "/consumer_test_questions",
            get(consumer_tests::get_questions)
                .post(consumer_tests::create_question)
                .put(consumer_tests::update_question)
                .delete(consumer_tests::delete_question),
        )
        .route(
            "/consumer_test_answers",
            get(consumer_tests::get_answers)
                .post(consumer_tests::create_answer)
                .put(consumer_tests::update_answer)
                .delete(consumer_tests::delete_answer),
        )
}
