// Reply Record

use crate::domain::{Question, QuestionId, User, UserId};
use crate::error::Result;
use crate::port::QuestionStore;
use serde::{Deserialize, Serialize};

/// Reply primary key
pub type ReplyId = i64;

/// Snapshot of one `replies` row
///
/// `parent_reply_id` is `None` for a top-level reply. A parent is expected to
/// sit on the same question; the store does not check this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: ReplyId,
    pub question_id: QuestionId,
    pub body: String,
    pub parent_reply_id: Option<ReplyId>,
    pub author_id: UserId,
}

impl Reply {
    pub fn new(
        id: ReplyId,
        question_id: QuestionId,
        body: impl Into<String>,
        parent_reply_id: Option<ReplyId>,
        author_id: UserId,
    ) -> Self {
        Self {
            id,
            question_id,
            body: body.into(),
            parent_reply_id,
            author_id,
        }
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_reply_id.is_none()
    }

    pub async fn author(&self, store: &dyn QuestionStore) -> Result<Option<User>> {
        store.find_user_by_id(self.author_id).await
    }

    pub async fn question(&self, store: &dyn QuestionStore) -> Result<Option<Question>> {
        store.find_question_by_id(self.question_id).await
    }

    /// Parent reply; top-level replies return `None` without querying
    pub async fn parent_reply(&self, store: &dyn QuestionStore) -> Result<Option<Reply>> {
        match self.parent_reply_id {
            Some(parent_id) => store.find_reply_by_id(parent_id).await,
            None => Ok(None),
        }
    }

    pub async fn child_replies(&self, store: &dyn QuestionStore) -> Result<Vec<Reply>> {
        store.find_replies_by_parent_id(self.id).await
    }
}
