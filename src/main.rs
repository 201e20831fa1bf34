use std::sync::Arc;
use tokio::sync::RwLock;

use issuance_service::app_state::AppState;
use issuance_service::services::{DemoUserDataProvider, TokenService};
use issuance_service::utils::Config;
use issuance_service::Application;

#[tokio::main]
async fn main() {
    env_logger::init();
    let config = Arc::new(RwLock::new(
        Config::default().expect("Failed to load config"),
    ));
    let token_service = Arc::new(RwLock::new(TokenService::new(config.clone())));
    let user_data_provider = Arc::new(RwLock::new(DemoUserDataProvider));
    let app_state = AppState::new(config, token_service, user_data_provider);

    let app = Application::build(app_state, "0.0.0.0:3000")
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
