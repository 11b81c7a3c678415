//! Request-scoped account resolution

use async_trait::async_trait;

use crate::domain::account::AccountService;
use crate::domain::user::User;
use crate::domain::DomainError;

/// The caller of one HTTP request, resolved from its bearer token
#[derive(Debug, Clone, Default)]
pub struct RequestAccount(Option<User>);

impl RequestAccount {
    pub fn new(user: Option<User>) -> Self {
        Self(user)
    }

    pub fn anonymous() -> Self {
        Self(None)
    }

    pub fn user(&self) -> Option<&User> {
        self.0.as_ref()
    }
}

impl From<User> for RequestAccount {
    fn from(user: User) -> Self {
        Self(Some(user))
    }
}

#[async_trait]
impl AccountService for RequestAccount {
    async fn current_user(&self) -> Result<Option<User>, DomainError> {
        Ok(self.0.clone())
    }
}
