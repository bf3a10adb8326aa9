// Association Repository Port (Interface)

use crate::domain::{Association, Question, QuestionId, User, UserId};
use crate::error::Result;
use async_trait::async_trait;

/// Membership and ranking queries over the follow/like relations
///
/// One implementation serves both kinds; `association` only selects the
/// link table.
#[async_trait]
pub trait AssociationRepository: Send + Sync {
    /// Users linked to `question_id` (followers or likers)
    async fn users_for_question(
        &self,
        association: Association,
        question_id: QuestionId,
    ) -> Result<Vec<User>>;

    /// Questions linked to `user_id` (followed or liked)
    async fn questions_for_user(
        &self,
        association: Association,
        user_id: UserId,
    ) -> Result<Vec<Question>>;

    /// Number of link rows for `question_id` (0 if none)
    async fn count_for_question(
        &self,
        association: Association,
        question_id: QuestionId,
    ) -> Result<i64>;

    /// At most `n` questions ordered by descending link count
    ///
    /// Questions without any link row are never returned. Ties keep whatever
    /// order the store produces.
    async fn most_associated_questions(
        &self,
        association: Association,
        n: u32,
    ) -> Result<Vec<Question>>;

    /// Likes received per authored question for `user_id` (0.0 without questions)
    async fn average_karma(&self, user_id: UserId) -> Result<f64>;
}
