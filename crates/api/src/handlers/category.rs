//! Handlers for the trivia `/categories` resource.

use std::collections::BTreeMap;

use axum::extract::State;
use quintet_core::types::DbId;
use quintet_db::models::question::Question;
use quintet_db::repositories::{CategoryRepo, QuestionRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::response::{success, Reply};
use crate::state::AppState;

/// Category id to type name, serialized as `{"1": "Science", ...}`.
pub type CategoryMap = BTreeMap<DbId, String>;

#[derive(Serialize)]
pub struct CategoryList {
    pub categories: CategoryMap,
}

#[derive(Serialize)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

/// Load every category as an id -> type map.
pub async fn category_map(state: &AppState) -> AppResult<CategoryMap> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(categories.into_iter().map(|c| (c.id, c.kind)).collect())
}

/// GET /categories
pub async fn list(State(state): State<AppState>) -> Reply<CategoryList> {
    Ok(success(CategoryList {
        categories: category_map(&state).await?,
    }))
}

/// GET /categories/{id}/questions
pub async fn questions(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> Reply<CategoryQuestions> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Category", id))?;
    let questions = QuestionRepo::list_by_category(&state.pool, id).await?;
    Ok(success(CategoryQuestions {
        total_questions: questions.len(),
        questions,
        current_category: category.kind,
    }))
}
