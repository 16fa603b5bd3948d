//! dockeep: an in-memory document repository.
//!
//! This crate is the entry point for users of the dockeep project. It
//! re-exports the core types and exposes the in-memory backend.
//!
//! Three operations make up the whole surface:
//!
//! - **save** - upsert a document; an empty id gets a fresh identifier, and
//!   re-saving an existing id keeps the originally recorded creation date
//! - **find_by_id** - point lookup by identifier
//! - **search** - multi-criteria filtering: AND across the request's present
//!   filters, OR across the values inside each one
//!
//! # Quick Start
//!
//! ```ignore
//! use dockeep::{memory::InMemoryRepository, prelude::*};
//! use chrono::Utc;
//!
//! #[tokio::main]
//! async fn main() -> RepositoryResult<()> {
//!     let repository = InMemoryRepository::new();
//!
//!     let saved = repository
//!         .save(
//!             Document::builder()
//!                 .title("First Document")
//!                 .content("This is the content of the first document.")
//!                 .author(Author::new("A1", "Author One"))
//!                 .created(Utc::now())
//!                 .build(),
//!         )
//!         .await?;
//!
//!     // The repository assigned an id to the new document.
//!     assert!(saved.has_id());
//!
//!     let hits = repository
//!         .search(Some(
//!             &SearchRequest::builder().title_prefixes(["First"]).build(),
//!         ))
//!         .await?;
//!     assert_eq!(hits.len(), 1);
//!
//!     let found = repository.find_by_id(&saved.id).await?;
//!     assert_eq!(found, Some(saved));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Backends
//!
//! - [`memory`] - in-memory storage; the only backend in scope. The
//!   repository seam ([`repository`]) is where an alternative
//!   implementation would plug in.

pub mod prelude;

pub use dockeep_core::{document, error, query, repository};

/// In-memory repository implementation.
pub mod memory {
    pub use dockeep_memory::{InMemoryRepository, InMemoryRepositoryBuilder};
}
