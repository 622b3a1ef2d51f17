// Export OpenAPI specification as JSON
//
// Usage: cargo run --bin export-openapi > docs/api/openapi.json
//
// Generates the spec without starting the server.

use east_store_server::openapi::ApiDoc;

fn main() -> Result<(), serde_json::Error> {
    println!("{}", ApiDoc::to_json()?);
    Ok(())
}
