use log::info;
use tower_oauth2_resource_server::server::OAuth2ResourceServer;

use crate::error::StartupError;

/// Builds the bearer-token gate for the given OIDC issuer
///
/// The issuer's discovery document is fetched here, so an unreachable issuer
/// fails at startup instead of on the first request.
///
/// # Arguments
/// * `issuer_url` - Base URL of the OIDC issuer
/// * `audiences` - Accepted `aud` values; skipped when empty
///
/// # Returns
/// The configured [`OAuth2ResourceServer`] or [`StartupError::ResourceServer`]
pub async fn resource_server(
    issuer_url: &str,
    audiences: &[String],
) -> Result<OAuth2ResourceServer, StartupError> {
    let mut builder = <OAuth2ResourceServer>::builder().issuer_url(issuer_url);
    if !audiences.is_empty() {
        builder = builder.audiences(audiences);
    }

    let server = builder.build().await?;

    info!("Validating bearer tokens issued by {issuer_url}");
    Ok(server)
}
