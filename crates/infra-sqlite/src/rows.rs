// SQLite row representations

use questions_core::domain::{Association, Question, Reply, User};

pub(crate) const USER_COLUMNS: &str = "users.id, users.fname, users.lname";
pub(crate) const QUESTION_COLUMNS: &str =
    "questions.id, questions.title, questions.body, questions.author_id";
pub(crate) const REPLY_COLUMNS: &str =
    "replies.id, replies.question_id, replies.body, replies.parent_reply_id, replies.author_id";

/// Link table backing an association kind
pub(crate) fn link_table(association: Association) -> &'static str {
    match association {
        Association::Follows => "question_follows",
        Association::Likes => "question_likes",
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct UserRow {
    id: i64,
    fname: String,
    lname: String,
}

impl UserRow {
    pub(crate) fn into_user(self) -> User {
        User {
            id: self.id,
            fname: self.fname,
            lname: self.lname,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct QuestionRow {
    id: i64,
    title: String,
    body: String,
    author_id: i64,
}

impl QuestionRow {
    pub(crate) fn into_question(self) -> Question {
        Question {
            id: self.id,
            title: self.title,
            body: self.body,
            author_id: self.author_id,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ReplyRow {
    id: i64,
    question_id: i64,
    body: String,
    parent_reply_id: Option<i64>,
    author_id: i64,
}

impl ReplyRow {
    pub(crate) fn into_reply(self) -> Reply {
        Reply {
            id: self.id,
            question_id: self.question_id,
            body: self.body,
            parent_reply_id: self.parent_reply_id,
            author_id: self.author_id,
        }
    }
}
