// Question Record

use crate::domain::{Association, Reply, User, UserId};
use crate::error::Result;
use crate::port::QuestionStore;
use serde::{Deserialize, Serialize};

/// Question primary key
pub type QuestionId = i64;

/// Snapshot of one `questions` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
    pub body: String,
    pub author_id: UserId,
}

impl Question {
    pub fn new(
        id: QuestionId,
        title: impl Into<String>,
        body: impl Into<String>,
        author_id: UserId,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            author_id,
        }
    }

    /// Top `n` questions by follower count, descending
    pub async fn most_followed(store: &dyn QuestionStore, n: u32) -> Result<Vec<Question>> {
        store
            .most_associated_questions(Association::Follows, n)
            .await
    }

    /// Top `n` questions by like count, descending
    pub async fn most_liked(store: &dyn QuestionStore, n: u32) -> Result<Vec<Question>> {
        store.most_associated_questions(Association::Likes, n).await
    }

    /// Author lookup; `None` only if the referenced user row is gone
    pub async fn author(&self, store: &dyn QuestionStore) -> Result<Option<User>> {
        store.find_user_by_id(self.author_id).await
    }

    pub async fn replies(&self, store: &dyn QuestionStore) -> Result<Vec<Reply>> {
        store.find_replies_by_question_id(self.id).await
    }

    pub async fn followers(&self, store: &dyn QuestionStore) -> Result<Vec<User>> {
        store.users_for_question(Association::Follows, self.id).await
    }

    pub async fn likers(&self, store: &dyn QuestionStore) -> Result<Vec<User>> {
        store.users_for_question(Association::Likes, self.id).await
    }

    pub async fn num_likes(&self, store: &dyn QuestionStore) -> Result<i64> {
        store.count_for_question(Association::Likes, self.id).await
    }
}
