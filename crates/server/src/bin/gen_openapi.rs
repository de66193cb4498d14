//! Print the OpenAPI document, or write it to the path given as first argument.

use server::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() {
    let spec = ApiDoc::openapi()
        .to_pretty_json()
        .expect("Failed to serialize OpenAPI spec to JSON");

    match std::env::args().nth(1) {
        Some(path) => {
            std::fs::write(&path, spec).expect("Failed to write OpenAPI spec");
            eprintln!("OpenAPI spec written to {path}");
        }
        None => println!("{spec}"),
    }
}
