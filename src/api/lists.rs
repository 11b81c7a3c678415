//! Todo list endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Router,
};
use serde::Deserialize;

use crate::api::middleware::CurrentAccount;
use crate::api::state::AppState;
use crate::api::types::{check, ApiError, Json};
use crate::domain::todo_list::{TodoListId, TodoListView};
use crate::domain::user::{UserId, UserView};
use crate::infrastructure::services::{CreateListArgs, UpdateListArgs};

use super::todos;

pub fn create_lists_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_own).post(create_list))
        .route("/coauthored", get(list_coauthored))
        .route("/{id}", get(get_list).put(update_list).delete(delete_list))
        .route("/{id}/candidates", get(list_candidates))
        .route(
            "/{id}/coauthors/{user_id}",
            put(add_coauthor).delete(remove_coauthor),
        )
        .nest("/{id}/todos", todos::create_todos_router())
}

#[derive(Debug, Deserialize)]
pub struct ListRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

pub(crate) fn parse_list_id(raw: &str) -> Result<TodoListId, ApiError> {
    Ok(TodoListId::new(raw)?)
}

fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    UserId::new(raw).map_err(|e| ApiError::bad_request(e.to_string()))
}

/// GET /lists
pub async fn list_own(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
) -> Result<Json<Vec<TodoListView>>, ApiError> {
    Ok(Json(state.list_service(account).get_all().await?))
}

/// GET /lists/coauthored
pub async fn list_coauthored(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
) -> Result<Json<Vec<TodoListView>>, ApiError> {
    let lists = state
        .list_service(account)
        .get_user_coauthored_lists()
        .await?;

    Ok(Json(lists))
}

/// POST /lists
pub async fn create_list(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
    Json(request): Json<ListRequest>,
) -> Result<StatusCode, ApiError> {
    let result = state
        .list_service(account)
        .create(CreateListArgs {
            title: request.title,
            description: request.description,
        })
        .await?;

    check(result)?;
    Ok(StatusCode::CREATED)
}

/// GET /lists/{id}
pub async fn get_list(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
    Path(id): Path<String>,
) -> Result<Json<TodoListView>, ApiError> {
    let id = parse_list_id(&id)?;

    state
        .list_service(account)
        .get_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Todo list '{}' not found", id)))
}

/// PUT /lists/{id}
pub async fn update_list(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
    Path(id): Path<String>,
    Json(request): Json<ListRequest>,
) -> Result<StatusCode, ApiError> {
    let result = state
        .list_service(account)
        .update(UpdateListArgs {
            id: parse_list_id(&id)?,
            title: request.title,
            description: request.description,
        })
        .await?;

    check(result)?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /lists/{id}
pub async fn delete_list(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_list_id(&id)?;
    check(state.list_service(account).delete(&id).await?)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /lists/{id}/candidates
pub async fn list_candidates(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
    Path(id): Path<String>,
) -> Result<Json<Vec<UserView>>, ApiError> {
    let id = parse_list_id(&id)?;
    Ok(Json(state.list_service(account).get_non_coauthors(&id).await?))
}

/// PUT /lists/{id}/coauthors/{user_id}
pub async fn add_coauthor(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
    Path((id, user_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let result = state
        .list_service(account)
        .add_permission(&parse_list_id(&id)?, &parse_user_id(&user_id)?)
        .await?;

    check(result)?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /lists/{id}/coauthors/{user_id}
pub async fn remove_coauthor(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
    Path((id, user_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let result = state
        .list_service(account)
        .remove_permission(&parse_list_id(&id)?, &parse_user_id(&user_id)?)
        .await?;

    check(result)?;
    Ok(StatusCode::NO_CONTENT)
}
