//! List service - todo list lifecycle, ownership and coauthor management
//!
//! Every expected failure (validation, missing records, permission) is
//! reported through the returned [`CommandResult`]. `DomainError` is reserved
//! for store and account failures, except during `update` where a failed
//! write becomes a `Todos` entry.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::account::AccountService;
use crate::domain::coauthorship::{Coauthorship, CoauthorshipRepository};
use crate::domain::permission::{evaluate_access, Access};
use crate::domain::todo::{TodoRepository, TodoView};
use crate::domain::todo_list::{
    validate_list_args, TodoList, TodoListId, TodoListRepository, TodoListView,
};
use crate::domain::user::{User, UserId, UserRepository, UserView};
use crate::domain::{CommandResult, DomainError};

pub(crate) const LOGIN_REQUIRED: &str = "Please log in.";
pub(crate) const LIST_NOT_FOUND: &str = "Todo list does not exist.";
const PERMISSION_DENIED: &str = "You do not have permission to modify this list.";

/// Arguments for creating a list
#[derive(Debug, Clone)]
pub struct CreateListArgs {
    pub title: String,
    pub description: Option<String>,
}

/// Arguments for updating a list's title and description
#[derive(Debug, Clone)]
pub struct UpdateListArgs {
    pub id: TodoListId,
    pub title: String,
    pub description: Option<String>,
}

/// Shared repositories the request-scoped services work against
#[derive(Debug, Clone)]
pub struct ListServiceDeps {
    pub users: Arc<dyn UserRepository>,
    pub lists: Arc<dyn TodoListRepository>,
    pub todos: Arc<dyn TodoRepository>,
    pub coauthorships: Arc<dyn CoauthorshipRepository>,
}

/// Todo list service, scoped to the caller resolved by its account
pub struct ListService {
    deps: ListServiceDeps,
    account: Arc<dyn AccountService>,
}

impl ListService {
    pub fn new(deps: ListServiceDeps, account: Arc<dyn AccountService>) -> Self {
        Self { deps, account }
    }

    /// Create a list owned by the current user
    pub async fn create(&self, args: CreateListArgs) -> Result<CommandResult, DomainError> {
        let mut result = CommandResult::new();
        let title = args.title.trim();

        if !validate_list_args(title, args.description.as_deref(), &mut result) {
            debug!(title = %title, "Rejected list arguments");
            return Ok(result);
        }

        let Some(user) = self.account.current_user().await? else {
            result.add_error("User", LOGIN_REQUIRED);
            return Ok(result);
        };

        if self.has_duplicate_by_title(title, Some(user.id())).await? {
            result.add_error("Title", duplicate_title_message(title));
            return Ok(result);
        }

        let list = TodoList::new(
            TodoListId::generate(),
            title,
            normalize_description(args.description),
            user.id().clone(),
        );
        let list = self.deps.lists.create(list).await?;

        info!(list_id = %list.id(), user_id = %user.id(), title = %list.title(), "Created todo list");
        Ok(result)
    }

    /// Delete a list with its coauthorships and items
    pub async fn delete(&self, id: &TodoListId) -> Result<CommandResult, DomainError> {
        let Some(list) = self.deps.lists.get(id).await? else {
            return Ok(CommandResult::failure("Todo", LIST_NOT_FOUND));
        };

        if !self.has_permission(Some(&list)).await? {
            warn!(list_id = %id, "Denied list deletion");
            return Ok(CommandResult::failure("User", PERMISSION_DENIED));
        }

        let coauthorships = self.deps.coauthorships.delete_by_list(id).await?;
        let todos = self.deps.todos.delete_by_list(id).await?;
        self.deps.lists.delete(id).await?;

        info!(list_id = %id, coauthorships, todos, "Deleted todo list");
        Ok(CommandResult::new())
    }

    /// Lists created by the current user
    pub async fn get_all(&self) -> Result<Vec<TodoListView>, DomainError> {
        let Some(user) = self.account.current_user().await? else {
            return Ok(Vec::new());
        };

        let lists = self.deps.lists.list_by_creator(user.id()).await?;
        self.project_all(&lists).await
    }

    /// Lists the current user has been made a coauthor of
    pub async fn get_user_coauthored_lists(&self) -> Result<Vec<TodoListView>, DomainError> {
        let Some(user) = self.account.current_user().await? else {
            return Ok(Vec::new());
        };

        let mut lists = Vec::new();
        for grant in self.deps.coauthorships.list_by_user(user.id()).await? {
            match self.deps.lists.get(grant.list_id()).await? {
                Some(list) => lists.push(list),
                None => debug!(list_id = %grant.list_id(), "Coauthorship points at a missing list"),
            }
        }

        self.project_all(&lists).await
    }

    /// A list the current user may see; `None` both when missing and when denied
    pub async fn get_by_id(&self, id: &TodoListId) -> Result<Option<TodoListView>, DomainError> {
        let Some(list) = self.deps.lists.get(id).await? else {
            return Ok(None);
        };

        if !self.has_permission(Some(&list)).await? {
            return Ok(None);
        }

        self.project(&list).await.map(Some)
    }

    /// Whether the current user is an admin, the creator, or a coauthor of `list`
    pub async fn has_permission(&self, list: Option<&TodoList>) -> Result<bool, DomainError> {
        let Some(list) = list else {
            return Ok(false);
        };

        let user = self.account.current_user().await?;
        Ok(self.access(user.as_ref(), list).await?.is_granted())
    }

    /// Change a list's title and description
    pub async fn update(&self, args: UpdateListArgs) -> Result<CommandResult, DomainError> {
        let mut result = CommandResult::new();

        let Some(mut list) = self.deps.lists.get(&args.id).await? else {
            result.add_error("TodoLists", LIST_NOT_FOUND);
            return Ok(result);
        };

        if !self.has_permission(Some(&list)).await? {
            warn!(list_id = %args.id, "Denied list update");
            result.add_error("User", PERMISSION_DENIED);
            return Ok(result);
        }

        let title = args.title.trim();
        let description = normalize_description(args.description);

        let clashes = self
            .deps
            .lists
            .find_by_title(list.created_by(), title)
            .await?;
        if clashes.iter().any(|other| other.id() != list.id()) {
            result.add_error("Title", duplicate_title_message(title));
        }

        if !validate_list_args(title, description.as_deref(), &mut result) {
            return Ok(result);
        }

        list.rename(title, description);
        match self.deps.lists.update(list).await {
            Ok(list) => info!(list_id = %list.id(), title = %list.title(), "Updated todo list"),
            Err(e) => {
                error!(list_id = %args.id, error = %e, "Failed to save todo list");
                result.add_error("Todos", "Unable to save the list. Please try again.");
            }
        }

        Ok(result)
    }

    /// Whether `creator` (default: the current user) already has a list titled exactly `title`
    pub async fn has_duplicate_by_title(
        &self,
        title: &str,
        creator: Option<&UserId>,
    ) -> Result<bool, DomainError> {
        let creator = match creator {
            Some(creator) => creator.clone(),
            None => match self.account.current_user().await? {
                Some(user) => user.id().clone(),
                None => return Ok(false),
            },
        };

        let matches = self.deps.lists.find_by_title(&creator, title).await?;
        Ok(!matches.is_empty())
    }

    /// Users who could still be added as coauthors of a list
    pub async fn get_non_coauthors(&self, id: &TodoListId) -> Result<Vec<UserView>, DomainError> {
        if self.deps.lists.get(id).await?.is_none() {
            return Ok(Vec::new());
        }

        let user = self.account.current_user().await?;
        let coauthors = self.deps.coauthorships.list_by_list(id).await?;
        let current = user.as_ref().map(User::id);

        Ok(self
            .deps
            .users
            .list()
            .await?
            .iter()
            .filter(|u| Some(u.id()) != current)
            .filter(|u| !coauthors.iter().any(|c| c.user_id() == u.id()))
            .map(UserView::from)
            .collect())
    }

    /// Grant `coauthor_id` access to a list
    pub async fn add_permission(
        &self,
        id: &TodoListId,
        coauthor_id: &UserId,
    ) -> Result<CommandResult, DomainError> {
        if self.deps.lists.get(id).await?.is_none() {
            return Ok(CommandResult::failure("TodoLists", LIST_NOT_FOUND));
        }

        if !self.deps.users.exists(coauthor_id).await? {
            return Ok(CommandResult::failure("Users", "User does not exist."));
        }

        if self.deps.coauthorships.find(id, coauthor_id).await?.is_some() {
            return Ok(CommandResult::failure(
                "TodoListPermissions",
                "User is already a coauthor of this list.",
            ));
        }

        self.deps
            .coauthorships
            .create(Coauthorship::new(id.clone(), coauthor_id.clone()))
            .await?;

        info!(list_id = %id, coauthor_id = %coauthor_id, "Added coauthor");
        Ok(CommandResult::new())
    }

    /// Revoke a coauthor's access to a list
    pub async fn remove_permission(
        &self,
        id: &TodoListId,
        coauthor_id: &UserId,
    ) -> Result<CommandResult, DomainError> {
        let Some(grant) = self.deps.coauthorships.find(id, coauthor_id).await? else {
            return Ok(CommandResult::failure(
                "TodoListPermissions",
                "User is not a coauthor of this list.",
            ));
        };

        self.deps.coauthorships.delete(&grant).await?;

        info!(list_id = %id, coauthor_id = %coauthor_id, "Removed coauthor");
        Ok(CommandResult::new())
    }

    async fn access(&self, user: Option<&User>, list: &TodoList) -> Result<Access, DomainError> {
        if user.is_none() {
            return Ok(Access::Denied);
        }

        let coauthorships = self.deps.coauthorships.list_by_list(list.id()).await?;
        Ok(evaluate_access(user, list, &coauthorships))
    }

    async fn project_all(&self, lists: &[TodoList]) -> Result<Vec<TodoListView>, DomainError> {
        let mut views = Vec::with_capacity(lists.len());
        for list in lists {
            views.push(self.project(list).await?);
        }
        Ok(views)
    }

    async fn project(&self, list: &TodoList) -> Result<TodoListView, DomainError> {
        let created_by = self.user_view(list.created_by()).await?;

        let todos = self
            .deps
            .todos
            .list_by_list(list.id())
            .await?
            .iter()
            .map(TodoView::from)
            .collect();

        let mut coauthors = Vec::new();
        for grant in self.deps.coauthorships.list_by_list(list.id()).await? {
            coauthors.push(self.user_view(grant.user_id()).await?);
        }

        Ok(TodoListView::new(list, created_by, todos, coauthors))
    }

    async fn user_view(&self, id: &UserId) -> Result<UserView, DomainError> {
        Ok(match self.deps.users.get(id).await? {
            Some(user) => UserView::from(&user),
            None => UserView {
                id: id.as_str().to_string(),
                username: String::new(),
            },
        })
    }
}

fn duplicate_title_message(title: &str) -> String {
    format!("You already have a list titled '{}'.", title)
}

/// Trim a description, dropping it when nothing is left
fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}
