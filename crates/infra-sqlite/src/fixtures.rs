// Test fixtures: an in-memory database with a small forum in it
//
// users      1 Ada Lovelace, 2 Alan Turing, 3 Grace Hopper, 4 Ada Lovelace
// questions  1..=3 by Ada, 4 by Alan
// replies    1 (q1, top), 2 and 3 (q1, children of 1), 4 (q4, top)
// follows    q1: 3, q4: 2, q2: 1
// likes      q4: 3, q1: 1

use crate::{create_pool, run_migrations, SqliteStore, StoreConfig};

const SEED_SQL: &str = r#"
INSERT INTO users (id, fname, lname) VALUES
    (1, 'Ada', 'Lovelace'),
    (2, 'Alan', 'Turing'),
    (3, 'Grace', 'Hopper'),
    (4, 'Ada', 'Lovelace');

INSERT INTO questions (id, title, body, author_id) VALUES
    (1, 'Engines', 'Can the engine compose music?', 1),
    (2, 'Notes', 'Who reads Note G?', 1),
    (3, 'Bernoulli', 'Is the table right?', 1),
    (4, 'Halting', 'Is it decidable?', 2);

INSERT INTO replies (id, question_id, body, parent_reply_id, author_id) VALUES
    (1, 1, 'Only if it is told how', NULL, 2),
    (2, 1, 'Compilers will tell it', 1, 3),
    (3, 1, 'Quite so', 1, 1),
    (4, 4, 'No', NULL, 1);

INSERT INTO question_follows (user_id, question_id) VALUES
    (2, 1), (3, 1), (4, 1),
    (1, 4), (3, 4),
    (2, 2);

INSERT INTO question_likes (user_id, question_id) VALUES
    (1, 4), (3, 4), (4, 4),
    (2, 1);
"#;

pub(crate) async fn empty_store() -> SqliteStore {
    let pool = create_pool(&StoreConfig::default()).await.unwrap();
    run_migrations(&pool).await.unwrap();
    SqliteStore::new(pool)
}

pub(crate) async fn seeded_store() -> SqliteStore {
    let store = empty_store().await;
    sqlx::raw_sql(SEED_SQL).execute(store.pool()).await.unwrap();
    store
}
