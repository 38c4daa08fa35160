//! In-memory repositories for service tests
//!
//! One store implements every repository port. Its writes enforce the same
//! unique and foreign-key constraints as the PostgreSQL schema.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use refill_core::traits::{
    BottleRepository, ConsumerTestAnswerRepository, ConsumerTestQuestionRepository,
    ConsumerTestRepository, LikeRepository, ProblemRepository, RepoResult, ReviewRepository,
    StationRepository, TransactionFilter, TransactionRepository, Upserted, UserRepository,
};
use refill_core::{
    Bottle, ConsumerTest, ConsumerTestAnswer, ConsumerTestQuestion, DomainError, Id, Like,
    NewBottle, NewConsumerTest, NewConsumerTestAnswer, NewConsumerTestQuestion, NewLike,
    NewRefillStation, NewRefillStationProblem, NewRefillStationReview, NewUser,
    NewWaterTransaction, RefillStation, RefillStationProblem, RefillStationReview,
    StationMarker, StationType, TransactionTotals, User, WaterTransaction,
};

use crate::services::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct State {
    last_id: i64,
    users: Vec<User>,
    bottles: Vec<Bottle>,
    stations: Vec<RefillStation>,
    reviews: Vec<RefillStationReview>,
    problems: Vec<RefillStationProblem>,
    transactions: Vec<WaterTransaction>,
    likes: Vec<Like>,
    consumer_tests: Vec<ConsumerTest>,
    questions: Vec<ConsumerTestQuestion>,
    answers: Vec<ConsumerTestAnswer>,
}

impl State {
    fn next_id(&mut self) -> Id {
        self.last_id += 1;
        Id::new(self.last_id)
    }

    fn require_user(&self, id: Id) -> RepoResult<()> {
        if self.users.iter().any(|u| u.id == id) {
            Ok(())
        } else {
            Err(DomainError::ReferenceNotFound("user".into()))
        }
    }

    fn require_station(&self, id: Id) -> RepoResult<()> {
        if self.stations.iter().any(|s| s.id == id) {
            Ok(())
        } else {
            Err(DomainError::ReferenceNotFound("refill station".into()))
        }
    }

    fn require_consumer_test(&self, id: Id) -> RepoResult<()> {
        if self.consumer_tests.iter().any(|t| t.id == id) {
            Ok(())
        } else {
            Err(DomainError::ReferenceNotFound("consumer test".into()))
        }
    }

    fn require_question(&self, id: Id) -> RepoResult<()> {
        if self.questions.iter().any(|q| q.id == id) {
            Ok(())
        } else {
            Err(DomainError::ReferenceNotFound("consumer test question".into()))
        }
    }

    fn nfc_taken(&self, nfc_id: &str, exclude: Option<Id>) -> bool {
        !nfc_id.is_empty()
            && self
                .bottles
                .iter()
                .any(|b| b.nfc_id == nfc_id && Some(b.id) != exclude)
    }

    fn like_taken(&self, station_id: Id, user_id: Id, exclude: Option<Id>) -> bool {
        self.likes
            .iter()
            .any(|l| l.station_id == station_id && l.user_id == user_id && Some(l.id) != exclude)
    }
}

/// Shared in-memory store
#[derive(Default)]
pub(crate) struct InMemoryStore {
    state: Mutex<State>,
    /// Existence pre-checks see nothing, as if a concurrent insert landed in between
    blind_prechecks: bool,
}

impl InMemoryStore {
    /// Store whose pre-checks always pass; only the write constraints reject
    pub(crate) fn blind() -> Self {
        Self {
            state: Mutex::default(),
            blind_prechecks: true,
        }
    }

    /// Fresh context backed by a fresh store
    pub(crate) fn context() -> ServiceContext {
        Self::context_for(Arc::new(Self::default()))
    }

    pub(crate) fn context_for(store: Arc<Self>) -> ServiceContext {
        ServiceContextBuilder::new()
            .user_repo(store.clone())
            .bottle_repo(store.clone())
            .station_repo(store.clone())
            .review_repo(store.clone())
            .problem_repo(store.clone())
            .transaction_repo(store.clone())
            .like_repo(store.clone())
            .consumer_test_repo(store.clone())
            .question_repo(store.clone())
            .answer_repo(store)
            .build()
            .expect("every repository is set")
    }
}

fn replace<T, F>(rows: &mut [T], matches: F, row: T, not_found: DomainError) -> RepoResult<()>
where
    F: Fn(&T) -> bool,
{
    let slot = rows.iter_mut().find(|r| matches(r)).ok_or(not_found)?;
    *slot = row;
    Ok(())
}

fn remove<T, F>(rows: &mut Vec<T>, matches: F, not_found: DomainError) -> RepoResult<()>
where
    F: Fn(&T) -> bool,
{
    let before = rows.len();
    rows.retain(|r| !matches(r));
    if rows.len() == before {
        Err(not_found)
    } else {
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_all(&self) -> RepoResult<Vec<User>> {
        Ok(self.state.lock().users.clone())
    }

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>> {
        Ok(self.state.lock().users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: &NewUser) -> RepoResult<Id> {
        let mut state = self.state.lock();
        if user.email.is_some() && state.users.iter().any(|u| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        let id = state.next_id();
        state.users.push(user.clone().with_id(id));
        Ok(id)
    }

    async fn update(&self, user: &User) -> RepoResult<()> {
        let mut state = self.state.lock();
        if user.email.is_some()
            && state
                .users
                .iter()
                .any(|u| u.email == user.email && u.id != user.id)
        {
            return Err(DomainError::EmailAlreadyExists);
        }
        replace(
            &mut state.users,
            |u| u.id == user.id,
            user.clone(),
            DomainError::UserNotFound(user.id),
        )
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        let mut state = self.state.lock();
        remove(&mut state.users, |u| u.id == id, DomainError::UserNotFound(id))?;
        state.bottles.retain(|b| b.user_id != id);
        state.reviews.retain(|r| r.user_id != id);
        state.likes.retain(|l| l.user_id != id);
        state.answers.retain(|a| a.user_id != id);
        Ok(())
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.state.lock().users.len() as i64)
    }
}

#[async_trait]
impl BottleRepository for InMemoryStore {
    async fn find_all(&self) -> RepoResult<Vec<Bottle>> {
        Ok(self.state.lock().bottles.clone())
    }

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Bottle>> {
        Ok(self.state.lock().bottles.iter().find(|b| b.id == id).cloned())
    }

    async fn find_by_user(&self, user_id: Id) -> RepoResult<Vec<Bottle>> {
        let state = self.state.lock();
        Ok(state
            .bottles
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_nfc_id(&self, nfc_id: &str) -> RepoResult<Option<Bottle>> {
        let state = self.state.lock();
        Ok(state.bottles.iter().find(|b| b.nfc_id == nfc_id).cloned())
    }

    async fn nfc_id_exists(&self, nfc_id: &str, exclude: Option<Id>) -> RepoResult<bool> {
        if self.blind_prechecks {
            return Ok(false);
        }
        Ok(self.state.lock().nfc_taken(nfc_id, exclude))
    }

    async fn create(&self, bottle: &NewBottle) -> RepoResult<Id> {
        let mut state = self.state.lock();
        state.require_user(bottle.user_id)?;
        if state.nfc_taken(&bottle.nfc_id, None) {
            return Err(DomainError::NfcIdAlreadyExists(bottle.nfc_id.clone()));
        }
        let id = state.next_id();
        state.bottles.push(bottle.clone().with_id(id));
        Ok(id)
    }

    async fn update(&self, bottle: &Bottle) -> RepoResult<()> {
        let mut state = self.state.lock();
        state.require_user(bottle.user_id)?;
        if state.nfc_taken(&bottle.nfc_id, Some(bottle.id)) {
            return Err(DomainError::NfcIdAlreadyExists(bottle.nfc_id.clone()));
        }
        replace(
            &mut state.bottles,
            |b| b.id == bottle.id,
            bottle.clone(),
            DomainError::BottleNotFound(bottle.id),
        )
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        let mut state = self.state.lock();
        remove(&mut state.bottles, |b| b.id == id, DomainError::BottleNotFound(id))?;
        for transaction in &mut state.transactions {
            if transaction.bottle_id == Some(id) {
                transaction.bottle_id = None;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl StationRepository for InMemoryStore {
    async fn find_all(&self) -> RepoResult<Vec<RefillStation>> {
        Ok(self.state.lock().stations.clone())
    }

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<RefillStation>> {
        Ok(self.state.lock().stations.iter().find(|s| s.id == id).cloned())
    }

    async fn find_markers(&self) -> RepoResult<Vec<StationMarker>> {
        Ok(self
            .state
            .lock()
            .stations
            .iter()
            .map(RefillStation::marker)
            .collect())
    }

    async fn create(&self, station: &NewRefillStation) -> RepoResult<Id> {
        let mut state = self.state.lock();
        let id = state.next_id();
        state.stations.push(station.clone().with_id(id));
        Ok(id)
    }

    async fn update(&self, station: &RefillStation) -> RepoResult<()> {
        let mut state = self.state.lock();
        replace(
            &mut state.stations,
            |s| s.id == station.id,
            station.clone(),
            DomainError::StationNotFound(station.id),
        )
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        let mut state = self.state.lock();
        remove(&mut state.stations, |s| s.id == id, DomainError::StationNotFound(id))?;
        state.reviews.retain(|r| r.station_id != id);
        state.problems.retain(|p| p.station_id != id);
        state.transactions.retain(|t| t.station_id != id);
        state.likes.retain(|l| l.station_id != id);
        Ok(())
    }

    async fn count_by_type(&self, station_type: StationType) -> RepoResult<i64> {
        let state = self.state.lock();
        Ok(state
            .stations
            .iter()
            .filter(|s| s.station_type == station_type)
            .count() as i64)
    }
}

#[async_trait]
impl ReviewRepository for InMemoryStore {
    async fn find_all(&self) -> RepoResult<Vec<RefillStationReview>> {
        Ok(self.state.lock().reviews.clone())
    }

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<RefillStationReview>> {
        Ok(self.state.lock().reviews.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_station(&self, station_id: Id) -> RepoResult<Vec<RefillStationReview>> {
        let state = self.state.lock();
        Ok(state
            .reviews
            .iter()
            .filter(|r| r.station_id == station_id)
            .cloned()
            .collect())
    }

    async fn find_by_user_and_station(
        &self,
        user_id: Id,
        station_id: Id,
    ) -> RepoResult<Option<RefillStationReview>> {
        if self.blind_prechecks {
            return Ok(None);
        }
        let state = self.state.lock();
        Ok(state
            .reviews
            .iter()
            .find(|r| r.user_id == user_id && r.station_id == station_id)
            .cloned())
    }

    async fn upsert(&self, review: &NewRefillStationReview) -> RepoResult<Upserted> {
        let mut state = self.state.lock();
        state.require_station(review.station_id)?;
        state.require_user(review.user_id)?;
        let now = Utc::now();
        if let Some(existing) = state
            .reviews
            .iter_mut()
            .find(|r| r.user_id == review.user_id && r.station_id == review.station_id)
        {
            *existing = review.clone().with_id(existing.id, now);
            return Ok(Upserted {
                id: existing.id,
                created: false,
            });
        }
        let id = state.next_id();
        state.reviews.push(review.clone().with_id(id, now));
        Ok(Upserted { id, created: true })
    }

    async fn update(&self, review: &RefillStationReview) -> RepoResult<()> {
        let mut state = self.state.lock();
        state.require_station(review.station_id)?;
        state.require_user(review.user_id)?;
        let mut row = review.clone();
        row.timestamp = Utc::now();
        replace(
            &mut state.reviews,
            |r| r.id == review.id,
            row,
            DomainError::ReviewNotFound(review.id),
        )
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        let mut state = self.state.lock();
        remove(&mut state.reviews, |r| r.id == id, DomainError::ReviewNotFound(id))
    }
}

#[async_trait]
impl ProblemRepository for InMemoryStore {
    async fn find_all(&self) -> RepoResult<Vec<RefillStationProblem>> {
        Ok(self.state.lock().problems.clone())
    }

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<RefillStationProblem>> {
        Ok(self.state.lock().problems.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, problem: &NewRefillStationProblem) -> RepoResult<Id> {
        let mut state = self.state.lock();
        state.require_station(problem.station_id)?;
        let id = state.next_id();
        state.problems.push(problem.clone().with_id(id, Utc::now()));
        Ok(id)
    }

    async fn update(&self, problem: &RefillStationProblem) -> RepoResult<()> {
        let mut state = self.state.lock();
        state.require_station(problem.station_id)?;
        let mut row = problem.clone();
        row.timestamp = Utc::now();
        replace(
            &mut state.problems,
            |p| p.id == problem.id,
            row,
            DomainError::ProblemNotFound(problem.id),
        )
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        let mut state = self.state.lock();
        remove(&mut state.problems, |p| p.id == id, DomainError::ProblemNotFound(id))
    }
}

#[async_trait]
impl TransactionRepository for InMemoryStore {
    async fn find_all(&self) -> RepoResult<Vec<WaterTransaction>> {
        Ok(self.state.lock().transactions.clone())
    }

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<WaterTransaction>> {
        Ok(self
            .state
            .lock()
            .transactions
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn create(&self, transaction: &NewWaterTransaction) -> RepoResult<Id> {
        let mut state = self.state.lock();
        state.require_station(transaction.station_id)?;
        if let Some(user_id) = transaction.user_id {
            state.require_user(user_id)?;
        }
        let id = state.next_id();
        state
            .transactions
            .push(transaction.clone().with_id(id, Utc::now()));
        Ok(id)
    }

    async fn update(&self, transaction: &WaterTransaction) -> RepoResult<()> {
        let mut state = self.state.lock();
        state.require_station(transaction.station_id)?;
        let mut row = transaction.clone();
        row.timestamp = Utc::now();
        replace(
            &mut state.transactions,
            |t| t.id == transaction.id,
            row,
            DomainError::TransactionNotFound(transaction.id),
        )
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        let mut state = self.state.lock();
        remove(
            &mut state.transactions,
            |t| t.id == id,
            DomainError::TransactionNotFound(id),
        )
    }

    async fn totals(&self, filter: TransactionFilter) -> RepoResult<TransactionTotals> {
        let state = self.state.lock();
        Ok(state
            .transactions
            .iter()
            .filter(|t| filter.matches(t))
            .fold(TransactionTotals::default(), |acc, t| TransactionTotals {
                count: acc.count + 1,
                volume_ml: acc.volume_ml + i64::from(t.volume),
            }))
    }
}

#[async_trait]
impl LikeRepository for InMemoryStore {
    async fn find_all(&self) -> RepoResult<Vec<Like>> {
        Ok(self.state.lock().likes.clone())
    }

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Like>> {
        Ok(self.state.lock().likes.iter().find(|l| l.id == id).copied())
    }

    async fn find_by_pair(&self, station_id: Id, user_id: Id) -> RepoResult<Option<Like>> {
        if self.blind_prechecks {
            return Ok(None);
        }
        let state = self.state.lock();
        Ok(state
            .likes
            .iter()
            .find(|l| l.station_id == station_id && l.user_id == user_id)
            .copied())
    }

    async fn create(&self, like: &NewLike) -> RepoResult<Id> {
        let mut state = self.state.lock();
        state.require_station(like.station_id)?;
        state.require_user(like.user_id)?;
        if state.like_taken(like.station_id, like.user_id, None) {
            return Err(DomainError::LikeAlreadyExists {
                station_id: like.station_id,
                user_id: like.user_id,
            });
        }
        let id = state.next_id();
        state.likes.push(like.with_id(id));
        Ok(id)
    }

    async fn update(&self, like: &Like) -> RepoResult<()> {
        let mut state = self.state.lock();
        state.require_station(like.station_id)?;
        state.require_user(like.user_id)?;
        if state.like_taken(like.station_id, like.user_id, Some(like.id)) {
            return Err(DomainError::LikeAlreadyExists {
                station_id: like.station_id,
                user_id: like.user_id,
            });
        }
        replace(
            &mut state.likes,
            |l| l.id == like.id,
            *like,
            DomainError::LikeNotFound(like.id),
        )
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        let mut state = self.state.lock();
        remove(&mut state.likes, |l| l.id == id, DomainError::LikeNotFound(id))
    }

    async fn count_by_station(&self, station_id: Id) -> RepoResult<i64> {
        let state = self.state.lock();
        Ok(state
            .likes
            .iter()
            .filter(|l| l.station_id == station_id)
            .count() as i64)
    }
}

#[async_trait]
impl ConsumerTestRepository for InMemoryStore {
    async fn find_all(&self) -> RepoResult<Vec<ConsumerTest>> {
        Ok(self.state.lock().consumer_tests.clone())
    }

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ConsumerTest>> {
        let state = self.state.lock();
        Ok(state.consumer_tests.iter().find(|t| t.id == id).cloned())
    }

    async fn create(&self, test: &NewConsumerTest) -> RepoResult<Id> {
        let mut state = self.state.lock();
        let id = state.next_id();
        state.consumer_tests.push(test.clone().with_id(id));
        Ok(id)
    }

    async fn update(&self, test: &ConsumerTest) -> RepoResult<()> {
        let mut state = self.state.lock();
        replace(
            &mut state.consumer_tests,
            |t| t.id == test.id,
            test.clone(),
            DomainError::ConsumerTestNotFound(test.id),
        )
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        let mut state = self.state.lock();
        remove(
            &mut state.consumer_tests,
            |t| t.id == id,
            DomainError::ConsumerTestNotFound(id),
        )?;
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut state.questions)
            .into_iter()
            .partition(|q| q.test_id == id);
        state.questions = kept;
        state
            .answers
            .retain(|a| !removed.iter().any(|q| q.id == a.question_id));
        Ok(())
    }
}

#[async_trait]
impl ConsumerTestQuestionRepository for InMemoryStore {
    async fn find_all(&self) -> RepoResult<Vec<ConsumerTestQuestion>> {
        Ok(self.state.lock().questions.clone())
    }

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ConsumerTestQuestion>> {
        Ok(self.state.lock().questions.iter().find(|q| q.id == id).cloned())
    }

    async fn create(&self, question: &NewConsumerTestQuestion) -> RepoResult<Id> {
        let mut state = self.state.lock();
        state.require_consumer_test(question.test_id)?;
        let id = state.next_id();
        state.questions.push(question.clone().with_id(id));
        Ok(id)
    }

    async fn update(&self, question: &ConsumerTestQuestion) -> RepoResult<()> {
        let mut state = self.state.lock();
        state.require_consumer_test(question.test_id)?;
        replace(
            &mut state.questions,
            |q| q.id == question.id,
            question.clone(),
            DomainError::ConsumerTestQuestionNotFound(question.id),
        )
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        let mut state = self.state.lock();
        remove(
            &mut state.questions,
            |q| q.id == id,
            DomainError::ConsumerTestQuestionNotFound(id),
        )?;
        state.answers.retain(|a| a.question_id != id);
        Ok(())
    }
}

#[async_trait]
impl ConsumerTestAnswerRepository for InMemoryStore {
    async fn find_all(&self) -> RepoResult<Vec<ConsumerTestAnswer>> {
        Ok(self.state.lock().answers.clone())
    }

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ConsumerTestAnswer>> {
        Ok(self.state.lock().answers.iter().find(|a| a.id == id).cloned())
    }

    async fn create(&self, answer: &NewConsumerTestAnswer) -> RepoResult<Id> {
        let mut state = self.state.lock();
        state.require_user(answer.user_id)?;
        state.require_question(answer.question_id)?;
        let id = state.next_id();
        state.answers.push(answer.clone().with_id(id, Utc::now()));
        Ok(id)
    }

    async fn update(&self, answer: &ConsumerTestAnswer) -> RepoResult<()> {
        let mut state = self.state.lock();
        state.require_user(answer.user_id)?;
        state.require_question(answer.question_id)?;
        let mut row = answer.clone();
        row.timestamp = Utc::now();
        replace(
            &mut state.answers,
            |a| a.id == answer.id,
            row,
            DomainError::ConsumerTestAnswerNotFound(answer.id),
        )
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        let mut state = self.state.lock();
        remove(
            &mut state.answers,
            |a| a.id == id,
            DomainError::ConsumerTestAnswerNotFound(id),
        )
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub(crate) mod fixtures {
    use refill_core::{
        BottleDraft, Id, LikeDraft, RefillStationDraft, RefillStationReviewDraft, UserDraft,
        WaterTransactionDraft,
    };

    pub(crate) fn user(first_name: &str) -> UserDraft {
        UserDraft {
            first_name: first_name.to_string(),
            last_name: "Tester".to_string(),
            email: None,
        }
    }

    pub(crate) fn bottle(user_id: Id, nfc_id: &str) -> BottleDraft {
        BottleDraft {
            user_id,
            nfc_id: nfc_id.to_string(),
            fill_volume: 750,
            water_type: "tap".to_string(),
            title: "Daily".to_string(),
            bottle_image: None,
            active: true,
        }
    }

    pub(crate) fn station(name: &str, station_type: &str) -> RefillStationDraft {
        RefillStationDraft {
            name: name.to_string(),
            description: "Public fountain".to_string(),
            latitude: 48.137,
            longitude: 11.575,
            address: "Marienplatz 1".to_string(),
            water_source: "municipal".to_string(),
            opening_times: "24/7".to_string(),
            active: true,
            station_type: station_type.to_string(),
            offered_water_types: "tap".to_string(),
            refill_station_image: None,
        }
    }

    pub(crate) fn review(
        station_id: Id,
        user_id: Id,
        (cleanness, accessibility, water_quality): (i32, i32, i32),
    ) -> RefillStationReviewDraft {
        RefillStationReviewDraft {
            station_id,
            user_id,
            cleanness,
            accessibility,
            water_quality,
        }
    }

    pub(crate) fn transaction(
        station_id: Id,
        user_id: Option<Id>,
        volume: i32,
    ) -> WaterTransactionDraft {
        WaterTransactionDraft {
            station_id,
            bottle_id: None,
            user_id,
            volume,
            water_type: "tap".to_string(),
            guest: user_id.is_none(),
        }
    }

    pub(crate) fn like(station_id: Id, user_id: Id) -> LikeDraft {
        LikeDraft {
            station_id,
            user_id,
        }
    }
}
