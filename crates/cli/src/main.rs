//! Questions CLI - read-only queries over a Q&A database

mod config;
mod logging;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use questions_core::application::QueryService;
use questions_infra_sqlite::{create_pool, run_migrations, SqliteStore};
use std::sync::Arc;
use tracing::{debug, info};

use config::{Cli, Command};
use output::Printer;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Initialize logging
    logging::init(cli.log_format)?;

    // 2. Open the store
    let store_config = cli.store_config()?;
    info!(database_url = %store_config.database_url, "Opening database");

    let pool = create_pool(&store_config)
        .await
        .context("Failed to open database")?;
    run_migrations(&pool)
        .await
        .context("Failed to prepare schema")?;

    // 3. Wire the service (DI: one store handle, passed down)
    let service = QueryService::new(Arc::new(SqliteStore::new(pool)));
    let printer = Printer::new(cli.json);

    debug!(command = ?cli.command, "Running command");
    run(&service, &printer, cli.command).await
}

async fn run(service: &QueryService, printer: &Printer, command: Command) -> Result<()> {
    match command {
        Command::User { id, name } => {
            let user = match (id, name.as_deref()) {
                (Some(id), _) => service.user_by_id(id).await?,
                (None, Some([fname, lname])) => service.user_by_name(fname, lname).await?,
                _ => anyhow::bail!("Pass --id or --name FNAME LNAME"),
            };
            printer.user(user.as_ref())?;
        }

        Command::Questions { author } => {
            let questions = service.questions_by_author_id(author).await?;
            printer.questions(&format!("Questions by user {}", author), &questions)?;
        }

        Command::Question { id } => {
            let thread = service.load_thread(id).await?;
            printer.thread(thread.as_ref())?;
        }

        Command::Replies {
            question,
            author,
            parent,
        } => {
            let (heading, replies) = match (question, author, parent) {
                (Some(q), _, _) => (
                    format!("Replies to question {}", q),
                    service.replies_by_question_id(q).await?,
                ),
                (_, Some(a), _) => (
                    format!("Replies by user {}", a),
                    service.replies_by_author_id(a).await?,
                ),
                (_, _, Some(p)) => (
                    format!("Replies to reply {}", p),
                    service.replies_by_parent_id(p).await?,
                ),
                _ => anyhow::bail!("Pass --question, --author or --parent"),
            };
            printer.replies(&heading, &replies)?;
        }

        Command::Followers { question_id } => {
            let users = service.followers_for_question_id(question_id).await?;
            printer.users(&format!("Followers of question {}", question_id), &users)?;
        }

        Command::Followed { user_id } => {
            let questions = service.followed_questions_for_user_id(user_id).await?;
            printer.questions(&format!("Followed by user {}", user_id), &questions)?;
        }

        Command::Likers { question_id } => {
            let users = service.likers_for_question_id(question_id).await?;
            printer.users(&format!("Likers of question {}", question_id), &users)?;
        }

        Command::Liked { user_id } => {
            let questions = service.liked_questions_for_user_id(user_id).await?;
            printer.questions(&format!("Liked by user {}", user_id), &questions)?;
        }

        Command::MostFollowed { n } => {
            let questions = service.most_followed_questions(n).await?;
            printer.questions(&format!("Top {} most followed", n), &questions)?;
        }

        Command::MostLiked { n } => {
            let questions = service.most_liked_questions(n).await?;
            printer.questions(&format!("Top {} most liked", n), &questions)?;
        }

        Command::Karma { user_id } => {
            let karma = service.average_karma(user_id).await?;
            printer.karma(user_id, karma)?;
        }
    }

    Ok(())
}
