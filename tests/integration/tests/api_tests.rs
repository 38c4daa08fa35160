//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn create_user(server: &TestServer) -> UserResponse {
    server
        .create("/users", &CreateUserRequest::unique())
        .await
        .expect("Failed to create user")
}

async fn create_station(server: &TestServer, station_type: &str) -> StationResponse {
    server
        .create("/refill_stations", &CreateStationRequest::of_type(station_type))
        .await
        .expect("Failed to create station")
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_user_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = create_user(&server).await;

    let response = server.get(&format!("/users?id={}", user.id)).await.unwrap();
    let fetched: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.last_name, user.last_name);

    let response = server
        .put(
            "/users",
            &json!({ "id": user.id, "first_name": "Renamed", "last_name": user.last_name }),
        )
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.first_name, "Renamed");
    assert_eq!(updated.email, None);

    let response = server.delete(&format!("/users?id={}", user.id)).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/users?id={}", user.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_list_users_returns_array() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    create_user(&server).await;

    let response = server.get("/users").await.unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!users.is_empty());
}

// ============================================================================
// Bottle Tests
// ============================================================================

#[tokio::test]
async fn test_bottle_water_type_is_normalized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = create_user(&server).await;

    let mut request = CreateBottleRequest::tagged(user.id);
    request.water_type = "Mineral".to_string();
    let bottle: BottleResponse = server.create("/bottles", &request).await.unwrap();
    assert_eq!(bottle.water_type, "mineral");

    let mut request = CreateBottleRequest::tagged(user.id);
    request.water_type = "sparkling".to_string();
    let response = server.post("/bottles", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
    assert_eq!(body.error.details.unwrap()["field"], "water_type");
}

#[tokio::test]
async fn test_untagged_bottles_do_not_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = create_user(&server).await;

    let first: BottleResponse = server
        .create("/bottles", &CreateBottleRequest::untagged(user.id))
        .await
        .unwrap();
    let second: BottleResponse = server
        .create("/bottles", &CreateBottleRequest::untagged(user.id))
        .await
        .unwrap();
    assert_ne!(first.id, second.id);

    let response = server.get(&format!("/users/{}/bottles", user.id)).await.unwrap();
    let bottles: Vec<BottleResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(bottles.len(), 2);
}

#[tokio::test]
async fn test_duplicate_nfc_id_is_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = create_user(&server).await;
    let request = CreateBottleRequest::tagged(user.id);

    let bottle: BottleResponse = server.create("/bottles", &request).await.unwrap();

    let response = server.post("/bottles", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "NFC_ID_ALREADY_EXISTS");

    let response = server
        .get(&format!("/bottles/preferences/{}", request.nfc_id))
        .await
        .unwrap();
    let found: BottleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(found.id, bottle.id);
    assert_eq!(found.fill_volume, 750);
}

// ============================================================================
// Review Tests
// ============================================================================

#[tokio::test]
async fn test_station_rating_aggregates_reviews() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let station = create_station(&server, "manual").await;

    let response = server
        .get(&format!("/refill_stations/{}/reviews", station.id))
        .await
        .unwrap();
    let rating: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rating["status"], "no_data");

    for ratings in [(4, 5, 3), (5, 4, 5)] {
        let user = create_user(&server).await;
        let _: ReviewResponse = server
            .create(
                "/refill_station_reviews",
                &CreateReviewRequest::new(station.id, user.id, ratings),
            )
            .await
            .unwrap();
    }

    let response = server
        .get(&format!("/refill_stations/{}/reviews", station.id))
        .await
        .unwrap();
    let rating: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rating["status"], "rated");
    assert_eq!(rating["review_count"], 2);
    assert_eq!(rating["cleanness"], 4.5);
    assert_eq!(rating["accessibility"], 4.5);
    assert_eq!(rating["water_quality"], 4.0);
    assert_eq!(rating["average"], 4.3);
}

#[tokio::test]
async fn test_review_out_of_range_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let station = create_station(&server, "manual").await;
    let user = create_user(&server).await;

    let response = server
        .post(
            "/refill_station_reviews",
            &CreateReviewRequest::new(station.id, user.id, (3, 6, 3)),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.details.unwrap()["field"], "accessibility");
}

#[tokio::test]
async fn test_second_review_replaces_first() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let station = create_station(&server, "smart").await;
    let user = create_user(&server).await;

    let first: ReviewResponse = server
        .create(
            "/refill_station_reviews",
            &CreateReviewRequest::new(station.id, user.id, (1, 1, 1)),
        )
        .await
        .unwrap();

    let response = server
        .post(
            "/refill_station_reviews",
            &CreateReviewRequest::new(station.id, user.id, (5, 5, 5)),
        )
        .await
        .unwrap();
    let second: ReviewResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(second.id, first.id);

    let response = server
        .get(&format!("/refill_station_reviews/{}/{}", user.id, station.id))
        .await
        .unwrap();
    let found: ReviewResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(found.cleanness, 5);
}

#[tokio::test]
async fn test_deleting_station_removes_its_reviews() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let station = create_station(&server, "manual").await;
    let user = create_user(&server).await;
    let _: ReviewResponse = server
        .create(
            "/refill_station_reviews",
            &CreateReviewRequest::new(station.id, user.id, (3, 3, 3)),
        )
        .await
        .unwrap();

    let response = server
        .delete(&format!("/refill_stations?id={}", station.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/refill_station_reviews/{}/{}", user.id, station.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Consumer Test Tests
// ============================================================================

#[tokio::test]
async fn test_consumer_test_questionnaire() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = create_user(&server).await;

    let test: ConsumerTestResponse = server
        .create("/consumer_tests", &json!({ "title": "Taste check" }))
        .await
        .unwrap();
    let question: ConsumerTestQuestionResponse = server
        .create(
            "/consumer_test_questions",
            &json!({
                "test_id": test.id,
                "text": "How cold was the water?",
                "min_value": 1.0,
                "max_value": 5.0
            }),
        )
        .await
        .unwrap();
    assert_eq!(question.test_id, test.id);
    assert_eq!(question.max_value, Some(5.0));

    let response = server
        .post(
            "/consumer_test_answers",
            &json!({ "user_id": user.id, "question_id": question.id, "answer": 9.0 }),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.details.unwrap()["field"], "answer");

    let answer: ConsumerTestAnswerResponse = server
        .create(
            "/consumer_test_answers",
            &json!({ "user_id": user.id, "question_id": question.id, "answer": 4.0 }),
        )
        .await
        .unwrap();

    let response = server
        .put(
            "/consumer_test_answers",
            &json!({
                "id": answer.id,
                "user_id": user.id,
                "question_id": question.id,
                "answer": 2.5
            }),
        )
        .await
        .unwrap();
    let updated: ConsumerTestAnswerResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.id, answer.id);
    assert_eq!(updated.answer, 2.5);

    let response = server
        .delete(&format!("/consumer_tests?id={}", test.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/consumer_test_answers?id={}", answer.id))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_CONSUMER_TEST_ANSWER");
}

#[tokio::test]
async fn test_answer_to_unknown_question_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = create_user(&server).await;

    let response = server
        .post(
            "/consumer_test_answers",
            &json!({ "user_id": user.id, "question_id": i64::MAX, "answer": 1.0 }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Like Tests
// ============================================================================

#[tokio::test]
async fn test_likes() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let station = create_station(&server, "smart").await;
    let first = create_user(&server).await;
    let second = create_user(&server).await;

    let like: LikeResponse = server
        .create(
            "/likes",
            &CreateLikeRequest {
                station_id: station.id,
                user_id: first.id,
            },
        )
        .await
        .unwrap();

    let response = server
        .post(
            "/likes",
            &CreateLikeRequest {
                station_id: station.id,
                user_id: first.id,
            },
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "LIKE_ALREADY_EXISTS");

    let _: LikeResponse = server
        .create(
            "/likes",
            &CreateLikeRequest {
                station_id: station.id,
                user_id: second.id,
            },
        )
        .await
        .unwrap();

    let response = server
        .get(&format!("/likes/{}/count", station.id))
        .await
        .unwrap();
    let count: LikeCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(count.count, 2);

    let response = server.delete(&format!("/likes/{}", like.id)).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/likes/{}/users/{}", station.id, first.id))
        .await
        .unwrap();
    let liked: IsLikedResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!liked.is_liked);

    let response = server
        .get(&format!("/likes/{}/users/{}", station.id, second.id))
        .await
        .unwrap();
    let liked: IsLikedResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(liked.is_liked);
}

// ============================================================================
// Contribution Tests
// ============================================================================

#[tokio::test]
async fn test_user_contribution() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let station = create_station(&server, "smart").await;
    let user = create_user(&server).await;

    for volume in [500, 1000] {
        let response = server
            .post(
                "/water_transactions",
                &CreateTransactionRequest::new(station.id, Some(user.id), volume),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get(&format!("/contribution/user?userId={}", user.id))
        .await
        .unwrap();
    let report: UserContributionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(report.amount_fillings, 2);
    assert_eq!(report.amount_water, 1500);
    assert!((report.saved_money - 0.75).abs() < 1e-9);
    assert!((report.saved_trash - 0.15).abs() < 1e-9);
}

#[tokio::test]
async fn test_station_type_counts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/contribution/kl").await.unwrap();
    let before: StationTypeCountsResponse = assert_json(response, StatusCode::OK).await.unwrap();

    create_station(&server, "SMART").await;

    let response = server.get("/contribution/kl").await.unwrap();
    let after: StationTypeCountsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(after.amount_refill_station_smart > before.amount_refill_station_smart);
}

#[tokio::test]
async fn test_markers_include_new_station() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let station = create_station(&server, "manual").await;

    let response = server.get("/refill_stations/markers").await.unwrap();
    let markers: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    let marker = markers
        .iter()
        .find(|m| m["id"] == station.id)
        .expect("marker for new station");
    assert_eq!(marker["status"], true);
}
