pub mod auth;
pub mod config;
pub mod doc;
pub mod error;
pub mod routes;
pub mod utils;

use axum::{Router, routing::get};
use log::warn;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;

use crate::{
    config::Config,
    error::StartupError,
    routes::secured::{self, SECURED_PATH},
};

/// Route table without any authentication layer
pub fn routes() -> Router {
    Router::new().route(SECURED_PATH, get(secured::secured))
}

/// Assembles the application router
///
/// When an issuer is configured, the bearer-token gate wraps the matched
/// routes only, so unknown paths still fall through to a plain 404.
///
/// # Arguments
/// * `config` - Runtime configuration
///
/// # Returns
/// The ready-to-serve [`Router`] or the [`StartupError`] hit while building the gate
pub async fn build_app(config: &Config) -> Result<Router, StartupError> {
    let mut app = routes();

    match &config.oidc_issuer_url {
        Some(issuer_url) => {
            let resource_server =
                auth::resource_server(issuer_url, &config.oidc_audiences).await?;
            app = app.route_layer(ServiceBuilder::new().layer(resource_server.into_layer()));
        }
        None => warn!(
            "OIDC_ISSUER_URL is not set; {SECURED_PATH} answers every request without checking tokens"
        ),
    }

    Ok(app.layer(CompressionLayer::new()))
}
