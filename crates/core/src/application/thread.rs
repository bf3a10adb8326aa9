// Question Thread - eager loading of one question and everything around it

use crate::domain::{Association, Question, QuestionId, Reply, ReplyId, User, UserId};
use crate::error::Result;
use crate::port::QuestionStore;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// A question with its replies, followers, like count and every author
/// involved, loaded up front
///
/// Lazy navigation on the records costs one query per hop, so rendering a
/// thread of N replies that way is N+1 author lookups. Loading a thread is a
/// fixed five queries: authors are fetched in one batch.
#[derive(Debug, Clone)]
pub struct QuestionThread {
    pub question: Question,
    /// Replies in storage order, all nesting levels
    pub replies: Vec<Reply>,
    pub followers: Vec<User>,
    pub num_likes: i64,
    authors: HashMap<UserId, User>,
}

impl QuestionThread {
    pub fn author(&self) -> Option<&User> {
        self.authors.get(&self.question.author_id)
    }

    pub fn author_of(&self, reply: &Reply) -> Option<&User> {
        self.authors.get(&reply.author_id)
    }

    pub fn top_level_replies(&self) -> impl Iterator<Item = &Reply> {
        self.replies.iter().filter(|r| r.is_top_level())
    }

    pub fn children_of(&self, reply_id: ReplyId) -> impl Iterator<Item = &Reply> {
        self.replies
            .iter()
            .filter(move |r| r.parent_reply_id == Some(reply_id))
    }

    /// Replies a tree walk starts from: top-level replies, plus replies whose
    /// parent is not in this thread (parent on another question, or missing)
    pub fn roots(&self) -> impl Iterator<Item = &Reply> {
        let loaded: HashSet<ReplyId> = self.replies.iter().map(|r| r.id).collect();
        self.replies.iter().filter(move |r| match r.parent_reply_id {
            None => true,
            Some(parent_id) => !loaded.contains(&parent_id),
        })
    }

    /// Depth-first walk yielding every reply exactly once as `(depth, reply)`
    ///
    /// Roots sit at depth 0 and children keep storage order. Replies caught in
    /// a parent loop hang off no root; each loop is entered at its first reply
    /// in storage order.
    pub fn walk(&self) -> Vec<(usize, &Reply)> {
        let mut visited: HashSet<ReplyId> = HashSet::with_capacity(self.replies.len());
        let mut out = Vec::with_capacity(self.replies.len());

        let starts: Vec<&Reply> = self.roots().chain(self.replies.iter()).collect();

        for start in starts {
            let mut stack = vec![(0usize, start)];
            while let Some((depth, reply)) = stack.pop() {
                if !visited.insert(reply.id) {
                    continue;
                }
                out.push((depth, reply));

                let children: Vec<&Reply> = self.children_of(reply.id).collect();
                for child in children.into_iter().rev() {
                    stack.push((depth + 1, child));
                }
            }
        }

        out
    }
}

/// Load a thread; `None` if the question does not exist
pub async fn load(
    store: &dyn QuestionStore,
    question_id: QuestionId,
) -> Result<Option<QuestionThread>> {
    let Some(question) = store.find_question_by_id(question_id).await? else {
        return Ok(None);
    };

    let (replies, followers, num_likes) = futures::try_join!(
        store.find_replies_by_question_id(question_id),
        store.users_for_question(Association::Follows, question_id),
        store.count_for_question(Association::Likes, question_id),
    )?;

    let mut author_ids: Vec<UserId> = replies
        .iter()
        .map(|r| r.author_id)
        .chain(std::iter::once(question.author_id))
        .collect();
    author_ids.sort_unstable();
    author_ids.dedup();

    let authors: HashMap<UserId, User> = store
        .find_users_by_ids(&author_ids)
        .await?
        .into_iter()
        .map(|u| (u.id, u))
        .collect();

    debug!(
        question_id,
        replies = replies.len(),
        authors = authors.len(),
        "Loaded question thread"
    );

    Ok(Some(QuestionThread {
        question,
        replies,
        followers,
        num_likes,
        authors,
    }))
}
