// Store Port - every finder behind one handle

use super::{AssociationRepository, QuestionRepository, ReplyRepository, UserRepository};

/// The full read surface of the Q&A store
///
/// Records navigate through `&dyn QuestionStore`, so a single explicitly
/// constructed handle is passed down instead of living in a global.
pub trait QuestionStore:
    UserRepository + QuestionRepository + ReplyRepository + AssociationRepository
{
}

impl<T> QuestionStore for T where
    T: UserRepository + QuestionRepository + ReplyRepository + AssociationRepository
{
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::domain::{
        Association, Question, QuestionId, Reply, ReplyId, User, UserId,
    };
    use crate::error::{AppError, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Vec-backed store mirroring the SQL semantics
    ///
    /// Every finder call bumps `query_count`, which lets tests assert how
    /// many round trips a use case costs.
    #[derive(Default)]
    pub struct InMemoryStore {
        users: Vec<User>,
        questions: Vec<Question>,
        replies: Vec<Reply>,
        follows: Vec<(UserId, QuestionId)>,
        likes: Vec<(UserId, QuestionId)>,
        query_count: AtomicUsize,
        failing: AtomicBool,
    }

    impl InMemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_user(mut self, user: User) -> Self {
            self.users.push(user);
            self
        }

        pub fn with_question(mut self, question: Question) -> Self {
            self.questions.push(question);
            self
        }

        pub fn with_reply(mut self, reply: Reply) -> Self {
            self.replies.push(reply);
            self
        }

        pub fn with_link(
            mut self,
            association: Association,
            user_id: UserId,
            question_id: QuestionId,
        ) -> Self {
            self.links_mut(association).push((user_id, question_id));
            self
        }

        /// Make every subsequent finder fail with a storage error
        pub fn fail_queries(&self) {
            self.failing.store(true, Ordering::SeqCst);
        }

        pub fn query_count(&self) -> usize {
            self.query_count.load(Ordering::SeqCst)
        }

        fn links(&self, association: Association) -> &[(UserId, QuestionId)] {
            match association {
                Association::Follows => &self.follows,
                Association::Likes => &self.likes,
            }
        }

        fn links_mut(&mut self, association: Association) -> &mut Vec<(UserId, QuestionId)> {
            match association {
                Association::Follows => &mut self.follows,
                Association::Likes => &mut self.likes,
            }
        }

        fn query(&self) -> Result<()> {
            self.query_count.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                return Err(AppError::Storage("mock store unavailable".to_string()));
            }
            Ok(())
        }

        fn link_count(&self, association: Association, question_id: QuestionId) -> usize {
            self.links(association)
                .iter()
                .filter(|(_, q)| *q == question_id)
                .count()
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryStore {
        async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>> {
            self.query()?;
            Ok(self.users.iter().find(|u| u.id == id).cloned())
        }

        async fn find_user_by_name(&self, fname: &str, lname: &str) -> Result<Option<User>> {
            self.query()?;
            Ok(self
                .users
                .iter()
                .find(|u| u.fname == fname && u.lname == lname)
                .cloned())
        }

        async fn find_users_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>> {
            if ids.is_empty() {
                return Ok(Vec::new());
            }
            self.query()?;
            Ok(self
                .users
                .iter()
                .filter(|u| ids.contains(&u.id))
                .cloned()
                .collect())
        }
    }

    #[async_trait]
    impl QuestionRepository for InMemoryStore {
        async fn find_question_by_id(&self, id: QuestionId) -> Result<Option<Question>> {
            self.query()?;
            Ok(self.questions.iter().find(|q| q.id == id).cloned())
        }

        async fn find_questions_by_author_id(&self, author_id: UserId) -> Result<Vec<Question>> {
            self.query()?;
            Ok(self
                .questions
                .iter()
                .filter(|q| q.author_id == author_id)
                .cloned()
                .collect())
        }
    }

    #[async_trait]
    impl ReplyRepository for InMemoryStore {
        async fn find_reply_by_id(&self, id: ReplyId) -> Result<Option<Reply>> {
            self.query()?;
            Ok(self.replies.iter().find(|r| r.id == id).cloned())
        }

        async fn find_replies_by_author_id(&self, author_id: UserId) -> Result<Vec<Reply>> {
            self.query()?;
            Ok(self
                .replies
                .iter()
                .filter(|r| r.author_id == author_id)
                .cloned()
                .collect())
        }

        async fn find_replies_by_question_id(&self, question_id: QuestionId) -> Result<Vec<Reply>> {
            self.query()?;
            Ok(self
                .replies
                .iter()
                .filter(|r| r.question_id == question_id)
                .cloned()
                .collect())
        }

        async fn find_replies_by_parent_id(&self, parent_reply_id: ReplyId) -> Result<Vec<Reply>> {
            self.query()?;
            Ok(self
                .replies
                .iter()
                .filter(|r| r.parent_reply_id == Some(parent_reply_id))
                .cloned()
                .collect())
        }
    }

    #[async_trait]
    impl AssociationRepository for InMemoryStore {
        async fn users_for_question(
            &self,
            association: Association,
            question_id: QuestionId,
        ) -> Result<Vec<User>> {
            self.query()?;
            Ok(self
                .users
                .iter()
                .filter(|u| {
                    self.links(association)
                        .iter()
                        .any(|(uid, qid)| *uid == u.id && *qid == question_id)
                })
                .cloned()
                .collect())
        }

        async fn questions_for_user(
            &self,
            association: Association,
            user_id: UserId,
        ) -> Result<Vec<Question>> {
            self.query()?;
            Ok(self
                .questions
                .iter()
                .filter(|q| {
                    self.links(association)
                        .iter()
                        .any(|(uid, qid)| *uid == user_id && *qid == q.id)
                })
                .cloned()
                .collect())
        }

        async fn count_for_question(
            &self,
            association: Association,
            question_id: QuestionId,
        ) -> Result<i64> {
            self.query()?;
            Ok(self.link_count(association, question_id) as i64)
        }

        async fn most_associated_questions(
            &self,
            association: Association,
            n: u32,
        ) -> Result<Vec<Question>> {
            self.query()?;
            let mut ranked: Vec<(usize, &Question)> = self
                .questions
                .iter()
                .map(|q| (self.link_count(association, q.id), q))
                .filter(|(count, _)| *count > 0)
                .collect();
            // Stable sort keeps storage order among ties
            ranked.sort_by(|a, b| b.0.cmp(&a.0));
            Ok(ranked
                .into_iter()
                .take(n as usize)
                .map(|(_, q)| q.clone())
                .collect())
        }

        async fn average_karma(&self, user_id: UserId) -> Result<f64> {
            self.query()?;
            let authored: Vec<QuestionId> = self
                .questions
                .iter()
                .filter(|q| q.author_id == user_id)
                .map(|q| q.id)
                .collect();
            if authored.is_empty() {
                return Ok(0.0);
            }
            let likes: usize = authored
                .iter()
                .map(|qid| self.link_count(Association::Likes, *qid))
                .sum();
            Ok(likes as f64 / authored.len() as f64)
        }
    }
}
