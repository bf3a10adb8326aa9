// Association Kinds (many-to-many user <-> question links)

use serde::{Deserialize, Serialize};

/// A payload-free link between a user and a question.
///
/// Both kinds share one shape (`user_id`, `question_id`), so every join,
/// count and ranking query is written once and parametrized by this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Association {
    /// User follows a question
    Follows,
    /// User likes a question
    Likes,
}

impl Association {
    pub const ALL: [Association; 2] = [Association::Follows, Association::Likes];

    pub fn as_str(&self) -> &'static str {
        match self {
            Association::Follows => "follows",
            Association::Likes => "likes",
        }
    }
}

impl std::fmt::Display for Association {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
