//! Handlers for the `/todos` resource.

use axum::extract::State;
use quintet_core::error::CoreError;
use quintet_core::types::DbId;
use quintet_core::validation::require_any_field;
use quintet_db::models::todo::{CreateTodo, Todo, UpdateTodo};
use quintet_db::repositories::TodoRepo;
use serde::Serialize;
use validator::Validate;

use crate::error::AppError;
use crate::extract::{AppJson, AppPath};
use crate::response::{success, Reply};
use crate::state::AppState;

#[derive(Serialize)]
pub struct TodoList {
    pub todos: Vec<Todo>,
}

#[derive(Serialize)]
pub struct TodoBody {
    pub todo: Todo,
}

#[derive(Serialize)]
pub struct TodoDeleted {
    pub deleted: DbId,
}

/// GET /todos
pub async fn list(State(state): State<AppState>) -> Reply<TodoList> {
    let todos = TodoRepo::list(&state.pool).await?;
    Ok(success(TodoList { todos }))
}

/// POST /todos
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTodo>,
) -> Reply<TodoBody> {
    input.validate().map_err(CoreError::from)?;
    let todo = TodoRepo::create(&state.pool, &input).await?;
    tracing::debug!(todo_id = todo.id, "Todo created");
    Ok(success(TodoBody { todo }))
}

/// GET /todos/{id}
pub async fn get_by_id(State(state): State<AppState>, AppPath(id): AppPath<DbId>) -> Reply<TodoBody> {
    let todo = TodoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Todo", id))?;
    Ok(success(TodoBody { todo }))
}

/// PATCH /todos/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateTodo>,
) -> Reply<TodoBody> {
    TodoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Todo", id))?;
    require_any_field(&[
        ("description", input.description.is_some()),
        ("completed", input.completed.is_some()),
    ])?;
    input.validate().map_err(CoreError::from)?;
    let todo = TodoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Todo", id))?;
    Ok(success(TodoBody { todo }))
}

/// DELETE /todos/{id}
pub async fn delete(State(state): State<AppState>, AppPath(id): AppPath<DbId>) -> Reply<TodoDeleted> {
    if TodoRepo::delete(&state.pool, id).await? {
        Ok(success(TodoDeleted { deleted: id }))
    } else {
        Err(AppError::not_found("Todo", id))
    }
}
