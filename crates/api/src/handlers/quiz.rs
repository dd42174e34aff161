//! Handler for trivia quiz play.

use axum::extract::State;
use quintet_core::types::DbId;
use quintet_db::models::question::Question;
use quintet_db::repositories::QuestionRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extract::AppJson;
use crate::response::{success, Reply};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: DbId,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<DbId>,
    pub quiz_category: QuizCategory,
}

#[derive(Serialize)]
pub struct QuizQuestion {
    pub question: Question,
}

/// POST /quizzes
///
/// Returns one random question of the category that is not among
/// `previous_questions`. Category id `0` counts as missing.
pub async fn play(
    State(state): State<AppState>,
    AppJson(input): AppJson<QuizRequest>,
) -> Reply<QuizQuestion> {
    let category_id = input.quiz_category.id;
    if category_id == 0 {
        return Err(AppError::BadRequest("quiz_category.id is required".into()));
    }

    let question =
        QuestionRepo::random_for_quiz(&state.pool, category_id, &input.previous_questions)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "No unplayed questions left in category {category_id}"
                ))
            })?;

    tracing::debug!(
        category_id,
        question_id = question.id,
        played = input.previous_questions.len(),
        "Quiz question drawn"
    );
    Ok(success(QuizQuestion { question }))
}
