use axum::{extract::State, routing::post, Json, Router};

use crate::{
    engine::assemble::{self, QuizResult},
    extractors::JsonBody,
    models::QuizRequest,
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::QUIZZES_URL, post(play_quiz))
}

async fn play_quiz(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<QuizRequest>,
) -> Result<Json<QuizResult>, AppError> {
    let questions = state
        .store
        .list_questions()
        .await
        .reject("could not list questions")?;

    let result = assemble::quiz(questions, &request, state.random.as_ref())?;
    tracing::debug!(remaining = result.total_questions, "drew quiz question");

    Ok(Json(result))
}
