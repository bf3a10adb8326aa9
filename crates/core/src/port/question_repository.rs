// Question Repository Port (Interface)

use crate::domain::{Question, QuestionId, UserId};
use crate::error::Result;
use async_trait::async_trait;

/// Read-only finders over `questions`
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Find question by ID
    async fn find_question_by_id(&self, id: QuestionId) -> Result<Option<Question>>;

    /// All questions authored by `author_id`, storage order
    async fn find_questions_by_author_id(&self, author_id: UserId) -> Result<Vec<Question>>;
}
