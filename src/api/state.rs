//! Application state shared by all handlers

use std::sync::Arc;

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::account::RequestAccount;
use crate::infrastructure::auth::JwtGenerator;
use crate::infrastructure::services::{ListService, ListServiceDeps, TodoService};
use crate::infrastructure::user::{PasswordHasher, RegisterRequest, UserService};

/// Long-lived services and repositories; request-scoped services are built
/// from it around the caller's account
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub jwt_service: Arc<dyn JwtGenerator>,
    pub repositories: ListServiceDeps,
}

impl AppState {
    pub fn new(
        user_service: Arc<dyn UserServiceTrait>,
        jwt_service: Arc<dyn JwtGenerator>,
        repositories: ListServiceDeps,
    ) -> Self {
        Self {
            user_service,
            jwt_service,
            repositories,
        }
    }

    pub fn list_service(&self, account: RequestAccount) -> ListService {
        ListService::new(self.repositories.clone(), Arc::new(account))
    }

    pub fn todo_service(&self, account: RequestAccount) -> TodoService {
        TodoService::new(self.repositories.clone(), Arc::new(account))
    }
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, request: RegisterRequest) -> Result<User, DomainError>;
    async fn authenticate(&self, username: &str, password: &str)
        -> Result<Option<User>, DomainError>;
    async fn get(&self, id: &str) -> Result<Option<User>, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
    async fn ensure_admin(&self, username: &str, password: &str)
        -> Result<Option<User>, DomainError>;
}

#[async_trait::async_trait]
impl<R, H> UserServiceTrait for UserService<R, H>
where
    R: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    async fn register(&self, request: RegisterRequest) -> Result<User, DomainError> {
        UserService::register(self, request).await
    }

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        UserService::authenticate(self, username, password).await
    }

    async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        UserService::get(self, id).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        UserService::count(self).await
    }

    async fn ensure_admin(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        UserService::ensure_admin(self, username, password).await
    }
}
