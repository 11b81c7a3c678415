//! Account collaborator
//!
//! Resolves the user on whose behalf a service call runs. Implementations are
//! request-scoped: one instance answers for one authenticated (or anonymous)
//! caller.

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::user::User;
use crate::domain::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccountService: Send + Sync {
    /// The authenticated user, or `None` for an anonymous caller
    async fn current_user(&self) -> Result<Option<User>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;

    #[tokio::test]
    async fn test_mock_account_returns_configured_user() {
        let mut account = MockAccountService::new();
        account.expect_current_user().times(1).returning(|| {
            Ok(Some(User::new(UserId::new("alice").unwrap(), "alice", "hash")))
        });

        let user = account.current_user().await.unwrap();
        assert_eq!(user.unwrap().username(), "alice");
    }

    #[tokio::test]
    async fn test_mock_account_anonymous() {
        let mut account = MockAccountService::new();
        account.expect_current_user().returning(|| Ok(None));

        assert!(account.current_user().await.unwrap().is_none());
    }
}
