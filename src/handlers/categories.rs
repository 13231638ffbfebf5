use axum::{extract::State, routing::get, Json, Router};

use crate::{
    engine::assemble::{self, CategoryListing, QuestionMatches},
    extractors::Id,
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::CATEGORIES_URL, get(list_categories))
        .route(names::CATEGORY_QUESTIONS_URL, get(category_questions))
}

async fn list_categories(State(state): State<AppState>) -> Result<Json<CategoryListing>, AppError> {
    let categories = state
        .store
        .list_categories()
        .await
        .reject_not_found("could not list categories")?;

    let listing = assemble::category_listing(categories);
    if listing.categories.is_empty() {
        tracing::warn!("no categories configured");
    }

    Ok(Json(listing))
}

async fn category_questions(
    State(state): State<AppState>,
    Id(category_id): Id,
) -> Result<Json<QuestionMatches>, AppError> {
    let category = state
        .store
        .get_category(category_id)
        .await
        .reject_not_found("could not get category")?
        .ok_or(AppError::NotFound)?;

    let questions = state
        .store
        .list_questions()
        .await
        .reject_not_found("could not list questions")?;

    Ok(Json(assemble::category_questions(questions, &category)))
}
