// User Record

use crate::domain::{Association, Question, Reply};
use crate::error::Result;
use crate::port::QuestionStore;
use serde::{Deserialize, Serialize};

/// User primary key
pub type UserId = i64;

/// Snapshot of one `users` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub fname: String,
    pub lname: String,
}

impl User {
    pub fn new(id: UserId, fname: impl Into<String>, lname: impl Into<String>) -> Self {
        Self {
            id,
            fname: fname.into(),
            lname: lname.into(),
        }
    }

    /// "fname lname"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.fname, self.lname)
    }

    pub async fn authored_questions(&self, store: &dyn QuestionStore) -> Result<Vec<Question>> {
        store.find_questions_by_author_id(self.id).await
    }

    pub async fn authored_replies(&self, store: &dyn QuestionStore) -> Result<Vec<Reply>> {
        store.find_replies_by_author_id(self.id).await
    }

    pub async fn followed_questions(&self, store: &dyn QuestionStore) -> Result<Vec<Question>> {
        store.questions_for_user(Association::Follows, self.id).await
    }

    pub async fn liked_questions(&self, store: &dyn QuestionStore) -> Result<Vec<Question>> {
        store.questions_for_user(Association::Likes, self.id).await
    }

    /// Average number of likes per question this user authored (0.0 without questions)
    pub async fn average_karma(&self, store: &dyn QuestionStore) -> Result<f64> {
        store.average_karma(self.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::store::mocks::InMemoryStore;

    #[tokio::test]
    async fn test_average_karma() {
        let store = InMemoryStore::new()
            .with_user(User::new(1, "Ada", "Lovelace"))
            .with_user(User::new(2, "Alan", "Turing"))
            .with_question(Question::new(10, "a", "a", 1))
            .with_question(Question::new(11, "b", "b", 1))
            .with_link(Association::Likes, 2, 10)
            .with_link(Association::Likes, 1, 10)
            .with_link(Association::Likes, 2, 11);

        let ada = User::new(1, "Ada", "Lovelace");
        assert_eq!(ada.average_karma(&store).await.unwrap(), 1.5);

        // No authored questions
        let alan = User::new(2, "Alan", "Turing");
        assert_eq!(alan.average_karma(&store).await.unwrap(), 0.0);
        assert!(alan.authored_questions(&store).await.unwrap().is_empty());
        assert_eq!(alan.liked_questions(&store).await.unwrap().len(), 2);
    }

    #[test]
    fn test_full_name() {
        assert_eq!(User::new(1, "Ada", "Lovelace").full_name(), "Ada Lovelace");
    }
}
