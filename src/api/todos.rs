//! Todo item endpoints, nested under `/lists/{id}/todos`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Router,
};
use serde::Deserialize;

use crate::api::middleware::CurrentAccount;
use crate::api::state::AppState;
use crate::api::types::{check, ApiError, Json};
use crate::domain::todo::{TodoId, TodoView};
use crate::infrastructure::services::{CreateTodoArgs, UpdateTodoArgs};

use super::lists::parse_list_id;

pub fn create_todos_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_todos).post(create_todo))
        .route("/{todo_id}", patch(update_todo).delete(delete_todo))
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub done: Option<bool>,
}

/// GET /lists/{id}/todos
pub async fn list_todos(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
    Path(id): Path<String>,
) -> Result<Json<Vec<TodoView>>, ApiError> {
    let id = parse_list_id(&id)?;

    state
        .todo_service(account)
        .list(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Todo list '{}' not found", id)))
}

/// POST /lists/{id}/todos
pub async fn create_todo(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
    Path(id): Path<String>,
    Json(request): Json<CreateTodoRequest>,
) -> Result<StatusCode, ApiError> {
    let result = state
        .todo_service(account)
        .create(&parse_list_id(&id)?, CreateTodoArgs { text: request.text })
        .await?;

    check(result)?;
    Ok(StatusCode::CREATED)
}

/// PATCH /lists/{id}/todos/{todo_id}
pub async fn update_todo(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
    Path((id, todo_id)): Path<(String, String)>,
    Json(request): Json<UpdateTodoRequest>,
) -> Result<StatusCode, ApiError> {
    let result = state
        .todo_service(account)
        .update(
            &parse_list_id(&id)?,
            &TodoId::new(todo_id)?,
            UpdateTodoArgs {
                text: request.text,
                done: request.done,
            },
        )
        .await?;

    check(result)?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /lists/{id}/todos/{todo_id}
pub async fn delete_todo(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
    Path((id, todo_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let result = state
        .todo_service(account)
        .delete(&parse_list_id(&id)?, &TodoId::new(todo_id)?)
        .await?;

    check(result)?;
    Ok(StatusCode::NO_CONTENT)
}
