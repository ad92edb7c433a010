//! In-memory document collections
//!
//! Each collection is independent: inserts and deletes touch one document at
//! a time and there are no cross-collection transactions.

use std::sync::Arc;

use jiff::Timestamp;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A stored document: its generated identity plus the typed payload.
#[derive(Debug, Clone)]
pub struct Document<T> {
    /// Store-assigned identifier.
    pub id: Uuid,

    /// Insertion time, assigned by the store.
    pub created_at: Timestamp,

    /// The document payload.
    pub data: T,
}

/// One independent document collection.
#[derive(Debug)]
pub struct Collection<T> {
    documents: Arc<RwLock<Vec<Document<T>>>>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            documents: Arc::clone(&self.documents),
        }
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            documents: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T: Clone + Send + Sync> Collection<T> {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All documents, in insertion order.
    pub async fn list(&self) -> Vec<Document<T>> {
        self.documents.read().await.clone()
    }

    /// The first document whose payload matches the predicate.
    pub async fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<Document<T>> {
        self.documents
            .read()
            .await
            .iter()
            .find(|document| predicate(&document.data))
            .cloned()
    }

    /// The document with the given id.
    pub async fn get(&self, id: Uuid) -> Option<Document<T>> {
        self.documents
            .read()
            .await
            .iter()
            .find(|document| document.id == id)
            .cloned()
    }

    /// Appends a document, assigning its id and creation time.
    pub async fn insert(&self, data: T) -> Document<T> {
        let document = Document {
            id: Uuid::now_v7(),
            created_at: Timestamp::now(),
            data,
        };

        self.documents.write().await.push(document.clone());

        document
    }

    /// Deletes the document with the given id; returns whether one existed.
    pub async fn delete(&self, id: Uuid) -> bool {
        let mut documents = self.documents.write().await;
        let before = documents.len();

        documents.retain(|document| document.id != id);

        documents.len() < before
    }

    /// Number of documents currently stored.
    pub async fn count(&self) -> usize {
        self.documents.read().await.len()
    }
}
