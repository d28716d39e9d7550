use std::sync::Arc;

use users_core::repositories::UserRepository;
use users_core::services::UserService;
use users_shared::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<dyn UserRepository>>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(user_repo: Arc<dyn UserRepository>, config: AppConfig) -> Self {
        Self {
            user_service: Arc::new(UserService::new(user_repo)),
            config,
        }
    }
}
