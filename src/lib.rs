//! Todo Share
//!
//! Multi-user to-do lists with an ownership permission model:
//! - Lists owned by their creator, unique titles per creator
//! - Coauthors with owner-equivalent access
//! - Admin role with access to every list
//! - In-memory or PostgreSQL entity storage

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::{AppState, UserServiceTrait};
use domain::{Coauthorship, Todo, TodoList, User};
use infrastructure::{
    auth::{JwtConfig, JwtService},
    coauthorship::StorageCoauthorshipRepository,
    services::ListServiceDeps,
    storage::StorageFactory,
    todo::StorageTodoRepository,
    todo_list::StorageTodoListRepository,
    user::{Argon2Hasher, StorageUserRepository, UserService},
};
use rand::Rng;
use tracing::info;

/// Create the application state from configuration
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let factory = StorageFactory::connect(&config.storage.backend, &config.storage.postgres).await?;
    info!(backend = ?factory.storage_type(), "Storage backend ready");

    create_app_state_with_factory(config, &factory).await
}

/// Create the application state on an already chosen storage backend
pub async fn create_app_state_with_factory(
    config: &AppConfig,
    factory: &StorageFactory,
) -> anyhow::Result<AppState> {
    let user_repository = Arc::new(StorageUserRepository::new(factory.create::<User>().await?));

    let repositories = ListServiceDeps {
        users: user_repository.clone(),
        lists: Arc::new(StorageTodoListRepository::new(
            factory.create::<TodoList>().await?,
        )),
        todos: Arc::new(StorageTodoRepository::new(factory.create::<Todo>().await?)),
        coauthorships: Arc::new(StorageCoauthorshipRepository::new(
            factory.create::<Coauthorship>().await?,
        )),
    };

    let user_service: Arc<dyn UserServiceTrait> = Arc::new(UserService::new(
        user_repository,
        Arc::new(Argon2Hasher::new()),
    ));

    create_initial_admin_user(config, user_service.as_ref()).await?;

    let jwt_service = Arc::new(JwtService::new(JwtConfig::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
    )));

    Ok(AppState::new(user_service, jwt_service, repositories))
}

fn generate_random_password() -> String {
    use rand::distributions::Alphanumeric;

    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

/// Seed the admin account when no users exist
async fn create_initial_admin_user(
    config: &AppConfig,
    user_service: &dyn UserServiceTrait,
) -> anyhow::Result<()> {
    let (password, configured) = match &config.auth.admin_password {
        Some(p) if !p.is_empty() => (p.clone(), true),
        _ => (generate_random_password(), false),
    };

    let username = &config.auth.admin_username;
    if user_service.ensure_admin(username, &password).await?.is_none() {
        return Ok(());
    }

    info!("===========================================");
    info!("Initial admin user created!");
    info!("Username: {}", username);

    if configured {
        info!("Password: (set via auth.admin_password)");
    } else {
        info!("Password: {}", password);
    }

    info!("===========================================");

    Ok(())
}
