//! Command-line and environment configuration

use crate::logging::LogFormat;
use anyhow::{bail, Result};
use clap::{ArgGroup, Parser, Subcommand};
use questions_infra_sqlite::StoreConfig;
use std::path::Path;

pub const DEFAULT_DB_PATH: &str = "~/.questions/questions.db";

#[derive(Parser, Debug)]
#[command(name = "questions")]
#[command(about = "Read-only queries over a Q&A database", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// SQLite database path or URL
    #[arg(long, env = "QUESTIONS_DB_PATH", default_value = DEFAULT_DB_PATH)]
    pub db: String,

    /// Connection pool size
    #[arg(long, env = "QUESTIONS_MAX_CONNECTIONS", default_value_t = 1)]
    pub max_connections: u32,

    /// Log format (logs go to stderr)
    #[arg(long, env = "QUESTIONS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Print records as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up a user by id or by full name
    User {
        #[arg(long, conflicts_with = "name", required_unless_present = "name")]
        id: Option<i64>,

        /// Given name and family name
        #[arg(long, num_args = 2, value_names = ["FNAME", "LNAME"])]
        name: Option<Vec<String>>,
    },

    /// Questions authored by a user
    Questions {
        #[arg(long)]
        author: i64,
    },

    /// One question with its replies, followers and likes
    Question { id: i64 },

    /// Replies filtered by question, author or parent reply
    #[command(group(ArgGroup::new("filter").required(true)))]
    Replies {
        #[arg(long, group = "filter")]
        question: Option<i64>,

        #[arg(long, group = "filter")]
        author: Option<i64>,

        #[arg(long, group = "filter")]
        parent: Option<i64>,
    },

    /// Users following a question
    Followers { question_id: i64 },

    /// Questions a user follows
    Followed { user_id: i64 },

    /// Users liking a question
    Likers { question_id: i64 },

    /// Questions a user likes
    Liked { user_id: i64 },

    /// Top N questions by follower count
    MostFollowed {
        #[arg(default_value_t = 10)]
        n: u32,
    },

    /// Top N questions by like count
    MostLiked {
        #[arg(default_value_t = 10)]
        n: u32,
    },

    /// Average likes per question authored by a user
    Karma { user_id: i64 },
}

impl Cli {
    /// Store settings with `~` expanded and bare paths turned into sqlite URLs
    ///
    /// A bare path must name an existing file: the tool only reads, so a
    /// mistyped path is an error instead of a fresh empty database.
    /// `sqlite:` URLs are passed through untouched.
    pub fn store_config(&self) -> Result<StoreConfig> {
        if self.db.starts_with("sqlite:") {
            return Ok(StoreConfig {
                database_url: self.db.clone(),
                max_connections: self.max_connections,
                ..StoreConfig::default()
            });
        }

        let path = shellexpand::tilde(&self.db).into_owned();
        if !Path::new(&path).is_file() {
            bail!(
                "Database not found at {} (pass --db or set QUESTIONS_DB_PATH)",
                path
            );
        }

        Ok(StoreConfig {
            database_url: format!("sqlite://{}", path),
            max_connections: self.max_connections,
            create_if_missing: false,
            ..StoreConfig::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_path_becomes_sqlite_url() {
        let path = std::env::temp_dir().join(format!("questions_cfg_{}.db", std::process::id()));
        std::fs::write(&path, b"").unwrap();
        let db = path.display().to_string();

        let cli = Cli::parse_from(["questions", "--db", db.as_str(), "karma", "1"]);
        let config = cli.store_config().unwrap();
        assert_eq!(config.database_url, format!("sqlite://{}", db));
        assert_eq!(config.max_connections, 1);
        assert!(!config.create_if_missing);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_path_is_rejected() {
        let path = std::env::temp_dir().join(format!(
            "questions_cfg_missing_{}/typo.db",
            std::process::id()
        ));
        let db = path.display().to_string();

        let cli = Cli::parse_from(["questions", "--db", db.as_str(), "karma", "1"]);
        let err = cli.store_config().unwrap_err();
        assert!(err.to_string().contains("Database not found"));
        assert!(!path.exists());
    }

    #[test]
    fn test_sqlite_url_kept_verbatim() {
        let cli = Cli::parse_from(["questions", "--db", "sqlite::memory:", "most-liked", "3"]);
        assert_eq!(cli.store_config().unwrap().database_url, "sqlite::memory:");
        assert!(matches!(cli.command, Command::MostLiked { n: 3 }));
    }

    #[test]
    fn test_user_by_name_takes_two_values() {
        let cli = Cli::parse_from(["questions", "user", "--name", "Ada", "Lovelace"]);
        match cli.command {
            Command::User { id, name } => {
                assert!(id.is_none());
                assert_eq!(name, Some(vec!["Ada".to_string(), "Lovelace".to_string()]));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_replies_takes_exactly_one_filter() {
        assert!(Cli::try_parse_from(["questions", "replies"]).is_err());
        assert!(
            Cli::try_parse_from(["questions", "replies", "--question", "1", "--author", "2"])
                .is_err()
        );
        assert!(Cli::try_parse_from(["questions", "replies", "--parent", "1"]).is_ok());
    }

    #[test]
    fn test_user_requires_id_or_name() {
        assert!(Cli::try_parse_from(["questions", "user"]).is_err());
    }
}
