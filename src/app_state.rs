use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::UserDataProvider;
use crate::services::TokenService;
use crate::utils::Config;

// Using type aliases to improve readability!
pub type ConfigType = Arc<RwLock<Config>>;
pub type TokenServiceType = Arc<RwLock<TokenService>>;
pub type UserDataProviderType = Arc<RwLock<dyn UserDataProvider>>;

#[derive(Clone)]
pub struct AppState {
    pub config: ConfigType,
    pub token_service: TokenServiceType,
    pub user_data_provider: UserDataProviderType,
}

impl AppState {
    pub fn new(
        config: ConfigType,
        token_service: TokenServiceType,
        user_data_provider: UserDataProviderType,
    ) -> Self {
        Self {
            config,
            token_service,
            user_data_provider,
        }
    }
}
