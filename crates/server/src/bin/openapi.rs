use okta_server::doc::ApiDoc;
use utoipa::OpenApi;

/// Prints the OpenAPI document for the server to stdout
fn main() {
    match ApiDoc::openapi().to_pretty_json() {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize OpenAPI document: {e}");
            std::process::exit(1);
        }
    }
}
