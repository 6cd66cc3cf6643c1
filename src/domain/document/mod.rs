//! API documents supplied by the document index

mod entity;
mod source;

pub use entity::ApiDocument;
pub use source::{DocumentSource, InMemoryDocumentSource};

#[cfg(test)]
pub use source::MockDocumentSource;
