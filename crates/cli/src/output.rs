//! Table / JSON rendering of records

use anyhow::Result;
use colored::Colorize;
use questions_core::application::QuestionThread;
use questions_core::domain::{Question, Reply, User};
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct UserLine {
    id: i64,
    fname: String,
    lname: String,
}

impl From<&User> for UserLine {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            fname: user.fname.clone(),
            lname: user.lname.clone(),
        }
    }
}

#[derive(Tabled)]
struct QuestionLine {
    id: i64,
    title: String,
    author_id: i64,
}

impl From<&Question> for QuestionLine {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id,
            title: question.title.clone(),
            author_id: question.author_id,
        }
    }
}

#[derive(Tabled)]
struct ReplyLine {
    id: i64,
    question_id: i64,
    parent: String,
    author_id: i64,
    body: String,
}

impl From<&Reply> for ReplyLine {
    fn from(reply: &Reply) -> Self {
        Self {
            id: reply.id,
            question_id: reply.question_id,
            parent: reply
                .parent_reply_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
            author_id: reply.author_id,
            body: reply.body.clone(),
        }
    }
}

/// Printer chosen by `--json`
pub struct Printer {
    json: bool,
}

impl Printer {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    fn emit_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    fn emit_table<L: Tabled>(&self, heading: &str, lines: Vec<L>) {
        println!("{}", heading.cyan().bold());
        if lines.is_empty() {
            println!("{}", "(none)".yellow());
        } else {
            println!("{}", Table::new(lines));
        }
    }

    pub fn user(&self, user: Option<&User>) -> Result<()> {
        if self.json {
            return self.emit_json(&user);
        }
        match user {
            Some(user) => self.emit_table("User", vec![UserLine::from(user)]),
            None => println!("{}", "No such user".yellow()),
        }
        Ok(())
    }

    pub fn users(&self, heading: &str, users: &[User]) -> Result<()> {
        if self.json {
            return self.emit_json(users);
        }
        self.emit_table(heading, users.iter().map(UserLine::from).collect());
        Ok(())
    }

    pub fn questions(&self, heading: &str, questions: &[Question]) -> Result<()> {
        if self.json {
            return self.emit_json(questions);
        }
        self.emit_table(heading, questions.iter().map(QuestionLine::from).collect());
        Ok(())
    }

    pub fn replies(&self, heading: &str, replies: &[Reply]) -> Result<()> {
        if self.json {
            return self.emit_json(replies);
        }
        self.emit_table(heading, replies.iter().map(ReplyLine::from).collect());
        Ok(())
    }

    pub fn karma(&self, user_id: i64, karma: f64) -> Result<()> {
        if self.json {
            return self.emit_json(&serde_json::json!({ "user_id": user_id, "karma": karma }));
        }
        println!("{} {:.2}", format!("Karma for user {}:", user_id).bold(), karma);
        Ok(())
    }

    pub fn thread(&self, thread: Option<&QuestionThread>) -> Result<()> {
        let Some(thread) = thread else {
            if self.json {
                return self.emit_json(&Option::<Question>::None);
            }
            println!("{}", "No such question".yellow());
            return Ok(());
        };

        if self.json {
            return self.emit_json(&serde_json::json!({
                "question": thread.question,
                "author": thread.author(),
                "replies": thread.replies,
                "followers": thread.followers,
                "num_likes": thread.num_likes,
            }));
        }

        let question = &thread.question;
        let author = thread
            .author()
            .map(|u| u.full_name())
            .unwrap_or_else(|| format!("user {}", question.author_id));

        println!("{} {}", format!("#{}", question.id).bold(), question.title.cyan().bold());
        println!("  {} {}", "by".dimmed(), author);
        println!("  {}", question.body);
        println!(
            "  {} {}   {} {}",
            "followers:".bold(),
            thread.followers.len(),
            "likes:".bold(),
            thread.num_likes
        );
        println!();

        for (depth, reply) in thread.walk() {
            print_reply(thread, reply, depth + 1);
        }
        Ok(())
    }
}

fn print_reply(thread: &QuestionThread, reply: &Reply, depth: usize) {
    let indent = "  ".repeat(depth);
    let author = thread
        .author_of(reply)
        .map(|u| u.full_name())
        .unwrap_or_else(|| format!("user {}", reply.author_id));

    println!("{}{} {}", indent, format!("{}:", author).green(), reply.body);
}
