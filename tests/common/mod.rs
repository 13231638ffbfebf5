#![allow(dead_code)]

use std::sync::Arc;

use trivia_api::{
    db::Db,
    engine::SeededRandom,
    models::{NewQuestion, Question},
    router,
    store::Store,
    AppState,
};

pub async fn create_test_db() -> Db {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path =
        std::env::temp_dir().join(format!("trivia_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite://{}", path.display());
    let db = Db::new(&url).await.expect("failed to create test database");
    db.seed_categories().await.expect("failed to seed categories");
    db
}

pub fn new_question(text: &str, category: i32) -> NewQuestion {
    NewQuestion {
        question: text.to_string(),
        answer: format!("Answer to {text}"),
        difficulty: 2,
        category,
    }
}

/// Inserts `n` questions named "Question 1".. spread over categories 1 and 2.
pub async fn insert_questions(db: &Db, n: i32) -> Vec<Question> {
    let mut created = Vec::new();
    for i in 1..=n {
        let category = 1 + (i % 2);
        created.push(
            db.insert_question(new_question(&format!("Question {i}"), category))
                .await
                .expect("insert question"),
        );
    }
    created
}

pub fn app(db: Db) -> axum::Router {
    router(AppState {
        store: Arc::new(db),
        random: Arc::new(SeededRandom::new(7)),
    })
}
