use std::{error::Error, future::Future, pin::Pin};

use axum::routing::{get, post};
use axum::Router;
use axum_server::bind;
use tower_http::services::ServeDir;

use app_state::AppState;
use routes::{jwks, user_data};

pub mod app_state;
pub mod client;
pub mod domain;
pub mod errors;
pub mod flow;
pub mod routes;
pub mod services;
pub mod session;
pub mod utils;
pub mod views;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    Router::new()
        .route("/jwks.json", get(jwks::jwks))
        .route("/api/user/user-data", post(user_data::user_data))
        .fallback_service(ServeDir::new("assets"))
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);

        let http_future = bind(address.parse()?).serve(router.into_make_service());

        Ok(Self {
            http_future: Box::pin(http_future),
            address: format!("http://{}", address),
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        println!("listening on {}", &self.address);
        self.http_future.await
    }
}
