//! Repository seam for document storage backends.
//!
//! This module defines the traits a storage backend implements so the rest
//! of the system can stay independent of where documents actually live.
//!
//! # Traits
//!
//! - [`DocumentRepository`]: the three repository operations
//! - [`DocumentRepositoryBuilder`]: factory trait for creating repository instances

use async_trait::async_trait;

use crate::{document::Document, error::RepositoryResult, query::SearchRequest};

/// Abstract interface for a keyed document repository.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` and support concurrent calls from
/// independent tasks. The exact concurrency model (read-write lock, sharded
/// map, ...) is implementation-specific, but `save` must be a single atomic
/// replace-or-insert per key.
///
/// # Error Handling
///
/// Operations return [`RepositoryResult<T>`](crate::error::RepositoryResult).
/// Absence is not an error: lookups on unknown ids yield `Ok(None)` and
/// searches with no matches yield an empty vec.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Inserts or updates a document, returning it as now stored.
    ///
    /// A document with an empty `id` is assigned a fresh globally-unique
    /// identifier before insertion. When a document with the same `id`
    /// already exists, every field of the stored entry is replaced except
    /// `created`, which keeps the value recorded when the id was first
    /// saved, whatever the caller supplied since. No other field is
    /// validated; title, content, author, and creation date may all be
    /// empty or absent.
    async fn save(&self, document: Document) -> RepositoryResult<Document>;

    /// Looks up a document by its identifier.
    ///
    /// Returns `Ok(None)` when nothing is stored under `id`. The empty
    /// string is a valid, simply-absent key. No side effects.
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Document>>;

    /// Returns the documents matching `request`.
    ///
    /// A `None` request matches every stored document. Otherwise a document
    /// is returned when all of the request's present filters hold for it;
    /// see [`SearchRequest`] for the per-filter semantics. Results carry no
    /// ordering guarantee. No side effects.
    async fn search(&self, request: Option<&SearchRequest>) -> RepositoryResult<Vec<Document>>;
}

/// Factory trait for constructing repository instances.
#[async_trait]
pub trait DocumentRepositoryBuilder {
    /// The repository type this builder produces.
    type Repository: DocumentRepository;

    /// Builds and returns a new repository instance.
    async fn build(self) -> RepositoryResult<Self::Repository>;
}
