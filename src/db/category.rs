use color_eyre::Result;

use super::Db;
use crate::{models::Category, names};

impl Db {
    pub async fn categories(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, type AS kind FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    pub async fn category(&self, category_id: i32) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, type AS kind FROM categories WHERE id = ?",
        )
        .bind(category_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    /// Writes the default categories when the table is empty. Returns how
    /// many rows were inserted.
    pub async fn seed_categories(&self) -> Result<usize> {
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;

        if existing > 0 {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        for (id, kind) in names::DEFAULT_CATEGORIES {
            sqlx::query("INSERT INTO categories (id, type) VALUES (?, ?)")
                .bind(*id)
                .bind(*kind)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        tracing::info!(
            count = names::DEFAULT_CATEGORIES.len(),
            "seeded default categories"
        );

        Ok(names::DEFAULT_CATEGORIES.len())
    }
}
