//! Document source trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::ApiDocument;
use crate::domain::DomainError;

/// Supplies the candidate documents for a chat request
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Get every indexed document, in index order
    async fn get_all_documents(&self) -> Result<Vec<ApiDocument>, DomainError>;
}

/// Document source backed by a fixed, preloaded list
#[derive(Debug, Default)]
pub struct InMemoryDocumentSource {
    documents: Vec<ApiDocument>,
}

impl InMemoryDocumentSource {
    pub fn new(documents: Vec<ApiDocument>) -> Self {
        Self { documents }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl DocumentSource for InMemoryDocumentSource {
    async fn get_all_documents(&self) -> Result<Vec<ApiDocument>, DomainError> {
        Ok(self.documents.clone())
    }
}
