//! Print the OpenAPI document as JSON.

use gateway::doc::ApiDoc;
use utoipa::OpenApi;

fn main() {
    match ApiDoc::openapi().to_json() {
        Ok(json) => println!("{json}"),
        Err(error) => {
            eprintln!("failed to render OpenAPI document: {error}");
            std::process::exit(1);
        }
    }
}
