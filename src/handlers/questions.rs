use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};

use crate::{
    engine::{
        assemble::{self, Created, Deleted, QuestionList, QuestionMatches},
        coerce,
    },
    extractors::{Id, JsonBody, Page},
    models::{QuestionDraft, SearchRequest},
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            names::QUESTIONS_URL,
            get(list_questions).post(create_question),
        )
        .route(names::QUESTION_URL, delete(delete_question))
        .route(names::SEARCH_URL, post(search_questions))
}

async fn list_questions(
    State(state): State<AppState>,
    Page(page): Page,
) -> Result<Json<QuestionList>, AppError> {
    let questions = state
        .store
        .list_questions()
        .await
        .reject_not_found("could not list questions")?;
    let categories = state
        .store
        .list_categories()
        .await
        .reject_not_found("could not list categories")?;

    assemble::question_list(questions, categories, page).map(Json)
}

async fn create_question(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<QuestionDraft>,
) -> Result<Json<Created>, AppError> {
    let new_question = coerce::new_question(draft)?;

    let created = state
        .store
        .insert_question(new_question)
        .await
        .reject("could not insert question")?;

    tracing::info!(
        question_id = created.id,
        category = created.category,
        "created question"
    );

    let total = state
        .store
        .list_questions()
        .await
        .reject("could not count questions")?
        .len();

    Ok(Json(assemble::created(created, total)))
}

async fn delete_question(
    State(state): State<AppState>,
    Id(question_id): Id,
    Page(page): Page,
) -> Result<Json<Deleted>, AppError> {
    let question = state
        .store
        .get_question(question_id)
        .await
        .reject("could not get question")?
        .ok_or(AppError::NotFound)?;

    let removed = state
        .store
        .delete_question(question_id)
        .await
        .reject("could not delete question")?;
    if !removed {
        return Err(AppError::NotFound);
    }

    tracing::info!(question_id, "deleted question");

    let questions = state
        .store
        .list_questions()
        .await
        .reject("could not list questions")?;
    let categories = state
        .store
        .list_categories()
        .await
        .reject("could not list categories")?;

    assemble::deleted(&question, questions, categories, page).map(Json)
}

async fn search_questions(
    State(state): State<AppState>,
    Page(page): Page,
    JsonBody(request): JsonBody<SearchRequest>,
) -> Result<Json<QuestionMatches>, AppError> {
    let questions = state
        .store
        .list_questions()
        .await
        .reject("could not list questions")?;
    let categories = state
        .store
        .list_categories()
        .await
        .reject("could not list categories")?;

    assemble::search_results(questions, categories, &request, page).map(Json)
}
