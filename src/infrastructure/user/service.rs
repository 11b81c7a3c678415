//! User service for registration, authentication and admin seeding

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user::{
    validate_password, validate_username, Role, User, UserId, UserRepository,
};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Request for registering a new account
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug)]
pub struct UserService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher> UserService<R, H> {
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new account with a generated id and no roles
    pub async fn register(&self, request: RegisterRequest) -> Result<User, DomainError> {
        let username = request.username.trim();
        self.create_account(UserId::generate(), username, &request.password, None)
            .await
    }

    /// Returns the user when the username exists and the password matches
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let Some(mut user) = self.repository.get_by_username(username.trim()).await? else {
            debug!(username = %username, "Login for unknown username");
            return Ok(None);
        };

        if !self.hasher.verify(password, user.password_hash()) {
            debug!(user_id = %user.id(), "Login with wrong password");
            return Ok(None);
        }

        user.record_login();
        self.repository.update(&user).await.map(Some)
    }

    pub async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        let user_id = UserId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;
        self.repository.get(&user_id).await
    }

    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }

    /// Seed an administrator when the store holds no users yet.
    ///
    /// Returns the created user, or `None` when accounts already exist.
    pub async fn ensure_admin(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        if self.repository.count().await? > 0 {
            return Ok(None);
        }

        let id = UserId::new(username).map_err(|e| DomainError::invalid_id(e.to_string()))?;
        let admin = self
            .create_account(id, username, password, Some(Role::admin()))
            .await?;

        info!(user_id = %admin.id(), "Seeded administrator account");
        Ok(Some(admin))
    }

    async fn create_account(
        &self,
        id: UserId,
        username: &str,
        password: &str,
        role: Option<Role>,
    ) -> Result<User, DomainError> {
        validate_username(username).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(password).map_err(|e| DomainError::validation(e.to_string()))?;

        if self.repository.username_exists(username).await? {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                username
            )));
        }

        let mut user = User::new(id, username, self.hasher.hash(password)?);
        if let Some(role) = role {
            user.add_role(role);
        }

        let user = self.repository.create(user).await?;
        info!(user_id = %user.id(), username = %user.username(), "Registered user");

        Ok(user)
    }
}
