// Database module - SQLite storage behind the `Store` trait

use std::str::FromStr;

use async_trait::async_trait;
use color_eyre::{eyre::ensure, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::{
    models::{Category, NewQuestion, Question},
    store::Store,
};

mod category;
mod question;
mod schema;

// Main database handle
#[derive(Clone)]
pub struct Db {
    pool: SqlitePool,
}

impl Db {
    pub async fn new(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        // Verify connection
        let one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&pool).await?;
        ensure!(one == 1, "connection check failed");

        schema::create_schema(&pool).await?;

        tracing::info!("database connection has been verified");

        Ok(Self { pool })
    }
}

#[async_trait]
impl Store for Db {
    async fn list_questions(&self) -> Result<Vec<Question>> {
        self.questions().await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.categories().await
    }

    async fn get_question(&self, id: i32) -> Result<Option<Question>> {
        self.question(id).await
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>> {
        self.category(id).await
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question> {
        self.create_question(question).await
    }

    async fn delete_question(&self, id: i32) -> Result<bool> {
        self.remove_question(id).await
    }
}
