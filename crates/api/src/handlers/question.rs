//! Handlers for the trivia `/questions` resource.
//!
//! Listing and search share the paging rules: ten per page, `?page=`
//! defaulting to 1, out-of-range pages returning an empty list.

use axum::extract::State;
use quintet_core::error::CoreError;
use quintet_core::search::optional_pattern;
use quintet_core::types::DbId;
use quintet_core::validation::require_any_field;
use quintet_db::models::question::{CreateQuestion, Question, UpdateQuestion};
use quintet_db::repositories::QuestionRepo;
use serde::Serialize;
use validator::Validate;

use crate::error::AppError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::handlers::category::{category_map, CategoryMap};
use crate::query::{PageParams, QuestionSearch};
use crate::response::{success, Reply};
use crate::state::AppState;

#[derive(Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: CategoryMap,
    pub current_category: Option<String>,
    pub page: i64,
}

#[derive(Serialize)]
pub struct QuestionCreated {
    pub created: DbId,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

#[derive(Serialize)]
pub struct QuestionSearchResults {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub page: i64,
}

#[derive(Serialize)]
pub struct QuestionBody {
    pub question: Question,
}

#[derive(Serialize)]
pub struct QuestionDeleted {
    pub deleted: DbId,
}

/// GET /questions?page=
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> Reply<QuestionPage> {
    let window = params.window();
    let questions = QuestionRepo::list_page(&state.pool, None, window).await?;
    let total_questions = QuestionRepo::count(&state.pool, None).await?;
    Ok(success(QuestionPage {
        questions,
        total_questions,
        categories: category_map(&state).await?,
        current_category: None,
        page: window.page,
    }))
}

/// GET /questions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> Reply<QuestionBody> {
    let question = QuestionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Question", id))?;
    Ok(success(QuestionBody { question }))
}

/// POST /questions?page=
///
/// Responds with the id of the new question and the requested page of the
/// full listing.
pub async fn create(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
    AppJson(input): AppJson<CreateQuestion>,
) -> Reply<QuestionCreated> {
    input.validate().map_err(CoreError::from)?;
    let question = QuestionRepo::create(&state.pool, &input).await?;
    tracing::info!(question_id = question.id, category = question.category, "Question created");

    let questions = QuestionRepo::list_page(&state.pool, None, params.window()).await?;
    let total_questions = QuestionRepo::count(&state.pool, None).await?;
    Ok(success(QuestionCreated {
        created: question.id,
        questions,
        total_questions,
    }))
}

/// PATCH /questions/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateQuestion>,
) -> Reply<QuestionBody> {
    QuestionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Question", id))?;
    require_any_field(&[
        ("question", input.question.is_some()),
        ("answer", input.answer.is_some()),
        ("difficulty", input.difficulty.is_some()),
        ("category", input.category.is_some()),
    ])?;
    input.validate().map_err(CoreError::from)?;
    let question = QuestionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Question", id))?;
    Ok(success(QuestionBody { question }))
}

/// DELETE /questions/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> Reply<QuestionDeleted> {
    if QuestionRepo::delete(&state.pool, id).await? {
        tracing::info!(question_id = id, "Question deleted");
        Ok(success(QuestionDeleted { deleted: id }))
    } else {
        Err(AppError::not_found("Question", id))
    }
}

/// POST /questions/search?page=
pub async fn search(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
    AppJson(input): AppJson<QuestionSearch>,
) -> Reply<QuestionSearchResults> {
    let pattern = optional_pattern(input.search_term.as_deref());
    let window = params.window();
    let questions = QuestionRepo::list_page(&state.pool, pattern.as_deref(), window).await?;
    let total_questions = QuestionRepo::count(&state.pool, pattern.as_deref()).await?;
    Ok(success(QuestionSearchResults {
        questions,
        total_questions,
        page: window.page,
    }))
}
