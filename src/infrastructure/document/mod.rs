//! Document source adapters

mod openapi;

pub use openapi::{load_openapi_documents, parse_openapi_documents};
