use crate::routes::secured;
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(secured::secured),
    modifiers(&SecurityAddon),
    tags(
        (name = "Secured", description = "Resources behind bearer token validation"),
    ),
    info(
        title = "Okta Demo API",
        version = "0.1.0",
        description = "Protected resource for checking OIDC access tokens",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_secured_path() {
        let json = ApiDoc::openapi().to_json().unwrap();
        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();

        let op = &doc["paths"]["/okta/secured"]["get"];
        assert!(op.is_object(), "missing GET /okta/secured: {doc}");
        assert!(op["responses"]["200"].is_object());
        assert!(op["responses"]["401"].is_object());
        assert_eq!(op["security"][0]["jwt"], serde_json::json!([]));
    }

    #[test]
    fn test_document_has_bearer_scheme() {
        let json = ApiDoc::openapi().to_json().unwrap();
        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();

        let scheme = &doc["components"]["securitySchemes"]["jwt"];
        assert_eq!(scheme["type"], "http");
        assert_eq!(scheme["scheme"], "bearer");
        assert_eq!(scheme["bearerFormat"], "JWT");
    }
}
