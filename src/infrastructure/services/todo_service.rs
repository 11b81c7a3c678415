//! Todo service - item CRUD inside a list, gated by list access

use std::sync::Arc;

use tracing::info;

use crate::domain::account::AccountService;
use crate::domain::todo::{validate_todo_text, Todo, TodoId, TodoView};
use crate::domain::todo_list::TodoListId;
use crate::domain::{CommandResult, DomainError};

use super::list_service::{ListService, ListServiceDeps, LIST_NOT_FOUND};

const TODO_NOT_FOUND: &str = "Todo does not exist.";
const ITEM_PERMISSION_DENIED: &str = "You do not have permission to change items of this list.";

#[derive(Debug, Clone)]
pub struct CreateTodoArgs {
    pub text: String,
}

/// Fields left as `None` are not changed
#[derive(Debug, Clone, Default)]
pub struct UpdateTodoArgs {
    pub text: Option<String>,
    pub done: Option<bool>,
}

pub struct TodoService {
    deps: ListServiceDeps,
    lists: ListService,
}

impl TodoService {
    pub fn new(deps: ListServiceDeps, account: Arc<dyn AccountService>) -> Self {
        let lists = ListService::new(deps.clone(), account);
        Self { deps, lists }
    }

    /// Items of a list, `None` when the list is missing or hidden from the caller
    pub async fn list(&self, list_id: &TodoListId) -> Result<Option<Vec<TodoView>>, DomainError> {
        let list = self.deps.lists.get(list_id).await?;
        if !self.lists.has_permission(list.as_ref()).await? {
            return Ok(None);
        }

        let todos = self.deps.todos.list_by_list(list_id).await?;
        Ok(Some(todos.iter().map(TodoView::from).collect()))
    }

    pub async fn create(
        &self,
        list_id: &TodoListId,
        args: CreateTodoArgs,
    ) -> Result<CommandResult, DomainError> {
        let list = self.deps.lists.get(list_id).await?;
        if list.is_none() {
            return Ok(CommandResult::failure("TodoLists", LIST_NOT_FOUND));
        }

        if !self.lists.has_permission(list.as_ref()).await? {
            return Ok(CommandResult::failure("User", ITEM_PERMISSION_DENIED));
        }

        let text = args.text.trim();
        if let Err(e) = validate_todo_text(text) {
            return Ok(CommandResult::failure("Text", e.to_string()));
        }

        let todo = self
            .deps
            .todos
            .create(Todo::new(TodoId::generate(), list_id.clone(), text))
            .await?;

        info!(todo_id = %todo.id(), list_id = %list_id, "Created todo");
        Ok(CommandResult::new())
    }

    pub async fn update(
        &self,
        list_id: &TodoListId,
        id: &TodoId,
        args: UpdateTodoArgs,
    ) -> Result<CommandResult, DomainError> {
        let mut todo = match self.permitted_todo(list_id, id).await? {
            Ok(todo) => todo,
            Err(failure) => return Ok(failure),
        };

        if let Some(text) = args.text {
            let text = text.trim();
            if let Err(e) = validate_todo_text(text) {
                return Ok(CommandResult::failure("Text", e.to_string()));
            }
            todo.set_text(text);
        }

        if let Some(done) = args.done {
            todo.set_done(done);
        }

        let todo = self.deps.todos.update(todo).await?;

        info!(todo_id = %todo.id(), done = todo.is_done(), "Updated todo");
        Ok(CommandResult::new())
    }

    pub async fn delete(
        &self,
        list_id: &TodoListId,
        id: &TodoId,
    ) -> Result<CommandResult, DomainError> {
        if let Err(failure) = self.permitted_todo(list_id, id).await? {
            return Ok(failure);
        }

        self.deps.todos.delete(id).await?;

        info!(todo_id = %id, "Deleted todo");
        Ok(CommandResult::new())
    }

    /// Load an item of `list_id` the caller may change, or the failure to report
    async fn permitted_todo(
        &self,
        list_id: &TodoListId,
        id: &TodoId,
    ) -> Result<Result<Todo, CommandResult>, DomainError> {
        let todo = match self.deps.todos.get(id).await? {
            Some(todo) if todo.list_id() == list_id => todo,
            _ => return Ok(Err(CommandResult::failure("Todos", TODO_NOT_FOUND))),
        };

        let list = self.deps.lists.get(list_id).await?;
        if !self.lists.has_permission(list.as_ref()).await? {
            return Ok(Err(CommandResult::failure("User", ITEM_PERMISSION_DENIED)));
        }

        Ok(Ok(todo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::todo_list::TodoList;
    use crate::domain::user::User;
    use crate::infrastructure::account::RequestAccount;
    use crate::infrastructure::services::list_service::tests::{add_user, create_deps, create_list};

    fn service_for(deps: &ListServiceDeps, user: Option<&User>) -> TodoService {
        TodoService::new(deps.clone(), Arc::new(RequestAccount::new(user.cloned())))
    }

    fn text(text: &str) -> CreateTodoArgs {
        CreateTodoArgs {
            text: text.to_string(),
        }
    }

    async fn setup() -> (ListServiceDeps, User, User, TodoList) {
        let deps = create_deps();
        let alice = add_user(&deps, "alice").await;
        let carol = add_user(&deps, "carol").await;
        let list = create_list(&deps, &alice, "Groceries").await;
        (deps, alice, carol, list)
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let (deps, alice, _, list) = setup().await;
        let service = service_for(&deps, Some(&alice));

        assert!(service.create(list.id(), text("  Milk ")).await.unwrap().is_valid());
        assert!(service.create(list.id(), text("Eggs")).await.unwrap().is_valid());

        let todos = service.list(list.id()).await.unwrap().unwrap();
        let texts: Vec<&str> = todos.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts.len(), 2);
        assert!(texts.contains(&"Milk"));
        assert!(todos.iter().all(|t| !t.done));
    }

    #[tokio::test]
    async fn test_create_validation() {
        let (deps, alice, _, list) = setup().await;
        let service = service_for(&deps, Some(&alice));

        assert!(service.create(list.id(), text("   ")).await.unwrap().has_error("Text"));
        assert!(service
            .create(list.id(), text(&"x".repeat(201)))
            .await
            .unwrap()
            .has_error("Text"));
        assert!(service
            .create(&TodoListId::generate(), text("Milk"))
            .await
            .unwrap()
            .has_error("TodoLists"));
    }

    #[tokio::test]
    async fn test_stranger_cannot_touch_items() {
        let (deps, alice, carol, list) = setup().await;
        service_for(&deps, Some(&alice))
            .create(list.id(), text("Milk"))
            .await
            .unwrap();
        let todo_id = deps.todos.list_by_list(list.id()).await.unwrap()[0].id().clone();

        let stranger = service_for(&deps, Some(&carol));
        assert!(stranger.list(list.id()).await.unwrap().is_none());
        assert!(stranger.create(list.id(), text("Beer")).await.unwrap().has_error("User"));
        assert!(stranger
            .update(list.id(), &todo_id, UpdateTodoArgs { done: Some(true), ..Default::default() })
            .await
            .unwrap()
            .has_error("User"));
        assert!(stranger.delete(list.id(), &todo_id).await.unwrap().has_error("User"));
        assert!(deps.todos.get(&todo_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let (deps, alice, _, list) = setup().await;
        let service = service_for(&deps, Some(&alice));
        service.create(list.id(), text("Milk")).await.unwrap();
        let todo_id = deps.todos.list_by_list(list.id()).await.unwrap()[0].id().clone();

        let result = service
            .update(
                list.id(),
                &todo_id,
                UpdateTodoArgs {
                    text: Some("Oat milk".to_string()),
                    done: Some(true),
                },
            )
            .await
            .unwrap();
        assert!(result.is_valid());

        let stored = deps.todos.get(&todo_id).await.unwrap().unwrap();
        assert_eq!(stored.text(), "Oat milk");
        assert!(stored.is_done());

        assert!(service.delete(list.id(), &todo_id).await.unwrap().is_valid());
        assert!(service.delete(list.id(), &todo_id).await.unwrap().has_error("Todos"));
    }

    #[tokio::test]
    async fn test_items_are_addressed_through_their_own_list() {
        let (deps, alice, carol, list) = setup().await;
        let other = create_list(&deps, &carol, "Hardware").await;
        service_for(&deps, Some(&carol))
            .create(other.id(), text("Nails"))
            .await
            .unwrap();
        let todo_id = deps.todos.list_by_list(other.id()).await.unwrap()[0].id().clone();

        let service = service_for(&deps, Some(&alice));
        let update = service
            .update(list.id(), &todo_id, UpdateTodoArgs { done: Some(true), ..Default::default() })
            .await
            .unwrap();
        assert!(update.has_error("Todos"));
        assert!(service.delete(list.id(), &todo_id).await.unwrap().has_error("Todos"));

        let stored = deps.todos.get(&todo_id).await.unwrap().unwrap();
        assert!(!stored.is_done());
    }

    #[tokio::test]
    async fn test_coauthor_can_check_items() {
        let (deps, alice, carol, list) = setup().await;
        service_for(&deps, Some(&alice))
            .create(list.id(), text("Milk"))
            .await
            .unwrap();
        ListService::new(deps.clone(), Arc::new(RequestAccount::from(alice.clone())))
            .add_permission(list.id(), carol.id())
            .await
            .unwrap();
        let todo_id = deps.todos.list_by_list(list.id()).await.unwrap()[0].id().clone();

        let result = service_for(&deps, Some(&carol))
            .update(list.id(), &todo_id, UpdateTodoArgs { done: Some(true), ..Default::default() })
            .await
            .unwrap();

        assert!(result.is_valid());
        assert!(deps.todos.get(&todo_id).await.unwrap().unwrap().is_done());
    }
}
