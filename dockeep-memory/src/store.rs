//! In-memory repository implementation.
//!
//! Documents live in a `HashMap` keyed by id behind an async-aware
//! read-write lock. Saves take the write guard for the whole upsert;
//! lookups and searches share read guards.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use mea::rwlock::RwLock;
use tracing::debug;
use uuid::Uuid;

use dockeep_core::{
    document::Document,
    error::RepositoryResult,
    query::SearchRequest,
    repository::{DocumentRepository, DocumentRepositoryBuilder},
};

use crate::matcher::RequestMatcher;

type DocumentMap = HashMap<String, Document>;

/// Thread-safe in-memory document repository.
///
/// # Thread Safety
///
/// `InMemoryRepository` is cloneable and wraps its state in an `Arc`;
/// clones share the same underlying map and may be used concurrently from
/// independent tasks. A save holds the write guard across identity
/// resolution and the map update, so the upsert is a single atomic
/// replace-or-insert per key.
///
/// # Performance
///
/// Searches scan every stored document (no indexing). For the small
/// datasets this backend targets that is acceptable; it does not aim at
/// sub-linear search.
///
/// # Example
///
/// ```ignore
/// use dockeep_memory::InMemoryRepository;
/// use dockeep_core::{document::Document, repository::DocumentRepository};
///
/// # async fn example() -> dockeep_core::error::RepositoryResult<()> {
/// let repository = InMemoryRepository::new();
///
/// let saved = repository.save(Document::builder().title("First").build()).await?;
/// let found = repository.find_by_id(&saved.id).await?;
/// assert_eq!(found.as_ref(), Some(&saved));
/// # Ok(())
/// # }
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryRepository {
    /// The main storage map: document id -> document.
    documents: Arc<RwLock<DocumentMap>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            documents: Arc::new(RwLock::new(DocumentMap::new())),
        }
    }

    /// Creates a builder for constructing an `InMemoryRepository`.
    pub fn builder() -> InMemoryRepositoryBuilder {
        InMemoryRepositoryBuilder::default()
    }
}

#[async_trait]
impl DocumentRepository for InMemoryRepository {
    async fn save(&self, document: Document) -> RepositoryResult<Document> {
        // One write guard across the id lookup and the insert: the creation
        // date read and the replace cannot interleave with another save of
        // the same id.
        let mut documents = self.documents.write().await;

        if !document.has_id() {
            let mut document = document;
            document.id = Uuid::new_v4().to_string();
            debug!(id = %document.id, "generated id for new document");
            documents.insert(document.id.clone(), document.clone());
            return Ok(document);
        }

        let saved = match documents.get(&document.id) {
            // The creation date stays pinned to the value recorded when the
            // id was first stored, whatever the caller supplied since. The
            // stored entry and the returned document are the same value.
            Some(existing) => Document {
                created: existing.created,
                ..document
            },
            None => document,
        };

        debug!(id = %saved.id, "saved document");
        documents.insert(saved.id.clone(), saved.clone());

        Ok(saved)
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Document>> {
        let documents = self.documents.read().await;

        Ok(documents.get(id).cloned())
    }

    async fn search(&self, request: Option<&SearchRequest>) -> RepositoryResult<Vec<Document>> {
        let documents = self.documents.read().await;

        let results = match request {
            Some(request) => RequestMatcher::filter_documents(documents.values(), request),
            None => documents.values().cloned().collect(),
        };

        debug!(hits = results.len(), "search finished");
        Ok(results)
    }
}

/// Builder for constructing [`InMemoryRepository`] instances.
///
/// Currently a no-op builder; it exists so callers can construct the
/// backend through the [`DocumentRepositoryBuilder`] factory seam.
#[derive(Default)]
pub struct InMemoryRepositoryBuilder;

#[async_trait]
impl DocumentRepositoryBuilder for InMemoryRepositoryBuilder {
    type Repository = InMemoryRepository;

    /// Builds and returns a new [`InMemoryRepository`].
    ///
    /// This always succeeds and returns a freshly initialized repository.
    async fn build(self) -> RepositoryResult<Self::Repository> {
        Ok(InMemoryRepository::new())
    }
}
