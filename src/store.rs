use async_trait::async_trait;
use color_eyre::Result;

use crate::models::{Category, NewQuestion, Question};

/// What the service needs from persistence. Listings come back ordered by
/// ascending id; lookups return `None` when the id does not exist.
#[async_trait]
pub trait Store: Send + Sync {
    async fn list_questions(&self) -> Result<Vec<Question>>;

    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn get_question(&self, id: i32) -> Result<Option<Question>>;

    async fn get_category(&self, id: i32) -> Result<Option<Category>>;

    async fn insert_question(&self, question: NewQuestion) -> Result<Question>;

    /// Returns `false` when there was nothing to delete.
    async fn delete_question(&self, id: i32) -> Result<bool>;
}
