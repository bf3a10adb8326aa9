// Query Service - finder facade over an injected store

use crate::application::thread::{self, QuestionThread};
use crate::domain::{Association, Question, QuestionId, Reply, ReplyId, User, UserId};
use crate::error::Result;
use crate::port::QuestionStore;
use std::sync::Arc;

/// Read-only query service
///
/// Owns the store handle for the lifetime of the calling context. Each
/// method issues exactly one query except [`QueryService::load_thread`].
pub struct QueryService {
    store: Arc<dyn QuestionStore>,
}

impl QueryService {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    /// Store handle for record navigation (`question.author(service.store())`)
    pub fn store(&self) -> &dyn QuestionStore {
        self.store.as_ref()
    }

    // --- users -------------------------------------------------------------

    pub async fn user_by_id(&self, id: UserId) -> Result<Option<User>> {
        self.store.find_user_by_id(id).await
    }

    pub async fn user_by_name(&self, fname: &str, lname: &str) -> Result<Option<User>> {
        self.store.find_user_by_name(fname, lname).await
    }

    pub async fn average_karma(&self, user_id: UserId) -> Result<f64> {
        self.store.average_karma(user_id).await
    }

    // --- questions ---------------------------------------------------------

    pub async fn question_by_id(&self, id: QuestionId) -> Result<Option<Question>> {
        self.store.find_question_by_id(id).await
    }

    pub async fn questions_by_author_id(&self, author_id: UserId) -> Result<Vec<Question>> {
        self.store.find_questions_by_author_id(author_id).await
    }

    // --- replies -----------------------------------------------------------

    pub async fn reply_by_id(&self, id: ReplyId) -> Result<Option<Reply>> {
        self.store.find_reply_by_id(id).await
    }

    pub async fn replies_by_author_id(&self, author_id: UserId) -> Result<Vec<Reply>> {
        self.store.find_replies_by_author_id(author_id).await
    }

    pub async fn replies_by_question_id(&self, question_id: QuestionId) -> Result<Vec<Reply>> {
        self.store.find_replies_by_question_id(question_id).await
    }

    pub async fn replies_by_parent_id(&self, parent_reply_id: ReplyId) -> Result<Vec<Reply>> {
        self.store.find_replies_by_parent_id(parent_reply_id).await
    }

    // --- follows -----------------------------------------------------------

    pub async fn followers_for_question_id(&self, question_id: QuestionId) -> Result<Vec<User>> {
        self.store
            .users_for_question(Association::Follows, question_id)
            .await
    }

    pub async fn followed_questions_for_user_id(&self, user_id: UserId) -> Result<Vec<Question>> {
        self.store
            .questions_for_user(Association::Follows, user_id)
            .await
    }

    pub async fn most_followed_questions(&self, n: u32) -> Result<Vec<Question>> {
        Question::most_followed(self.store(), n).await
    }

    // --- likes -------------------------------------------------------------

    pub async fn likers_for_question_id(&self, question_id: QuestionId) -> Result<Vec<User>> {
        self.store
            .users_for_question(Association::Likes, question_id)
            .await
    }

    pub async fn liked_questions_for_user_id(&self, user_id: UserId) -> Result<Vec<Question>> {
        self.store
            .questions_for_user(Association::Likes, user_id)
            .await
    }

    pub async fn num_likes_for_question_id(&self, question_id: QuestionId) -> Result<i64> {
        self.store
            .count_for_question(Association::Likes, question_id)
            .await
    }

    pub async fn most_liked_questions(&self, n: u32) -> Result<Vec<Question>> {
        Question::most_liked(self.store(), n).await
    }

    // --- eager loading -----------------------------------------------------

    /// Question with author, replies, reply authors, followers and like count
    pub async fn load_thread(&self, question_id: QuestionId) -> Result<Option<QuestionThread>> {
        thread::load(self.store(), question_id).await
    }
}
