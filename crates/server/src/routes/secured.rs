use axum::http::StatusCode;

/// Path of the protected resource
pub const SECURED_PATH: &str = "/okta/secured";

/// Body returned to every caller that reaches the handler
pub const SECURED_MESSAGE: &str = "Congratualations !! our access token is valid Go ahead!!";

/// Confirms that the caller reached the protected resource
///
/// Token validation happens in the layer in front of this route; the handler
/// itself reads nothing from the request.
#[utoipa::path(
    get,
    path = "/okta/secured",
    responses(
        (status = 200, description = "Access token accepted", content_type = "text/plain", body = String),
        (status = 401, description = "Unauthorized - invalid or missing JWT")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Secured"
)]
pub async fn secured() -> (StatusCode, &'static str) {
    (StatusCode::OK, SECURED_MESSAGE)
}
