pub mod handlers;
pub mod types;

use std::sync::Arc;

use axum::routing::{any, get};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::account::service::CredentialService;

#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<CredentialService>,
}

/// Build the application router.
///
/// The account routes are registered with `any` because the handlers do
/// their own method filtering (a non-POST must get a JSON 405 body).
pub fn router(service: Arc<CredentialService>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/users/create", any(handlers::create_user))
        .route("/users/login", any(handlers::login_user))
        .layer(CorsLayer::permissive())
        .with_state(ApiState { service })
}

async fn root_handler() -> &'static str {
    "userauth service"
}

pub struct ApiServer {
    service: Arc<CredentialService>,
    bind_addr: String,
}

impl ApiServer {
    pub fn new(service: Arc<CredentialService>, bind_addr: String) -> Self {
        Self { service, bind_addr }
    }

    /// Bind and serve until the process is stopped.
    ///
    /// Bind failures surface as an error instead of a panic; per-connection
    /// write failures are handled inside hyper and never take the process
    /// down.
    pub async fn start(self) -> std::io::Result<()> {
        let app = router(self.service);

        let listener = tokio::net::TcpListener::bind(&self.bind_addr).await?;
        tracing::info!("listening on {}", self.bind_addr);

        axum::serve(listener, app).await
    }
}
