// Reply Repository Port (Interface)

use crate::domain::{QuestionId, Reply, ReplyId, UserId};
use crate::error::Result;
use async_trait::async_trait;

/// Read-only finders over `replies`. Sequences come back in storage order.
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn find_reply_by_id(&self, id: ReplyId) -> Result<Option<Reply>>;

    async fn find_replies_by_author_id(&self, author_id: UserId) -> Result<Vec<Reply>>;

    async fn find_replies_by_question_id(&self, question_id: QuestionId) -> Result<Vec<Reply>>;

    /// Direct children of `parent_reply_id` (one level only)
    async fn find_replies_by_parent_id(&self, parent_reply_id: ReplyId) -> Result<Vec<Reply>>;
}
