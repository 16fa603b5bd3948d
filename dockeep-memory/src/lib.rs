//! In-memory document repository for dockeep.
//!
//! This crate provides a thread-safe, in-memory implementation of the
//! `DocumentRepository` trait: a single id-to-document map behind an
//! async-aware read-write lock. It is the reference backend for
//! development, testing, and small datasets.
//!
//! # Features
//!
//! - **Thread-safe access** - Concurrent reads and an exclusive write path
//!   using an async-aware `RwLock`
//! - **Atomic upsert** - Identity resolution, creation-date pinning, and the
//!   map update happen under one write guard
//! - **Full-scan search** - Every filter of a search request is evaluated
//!   against every stored document (no indexing)
//!
//! # Quick Start
//!
//! ```ignore
//! use dockeep_core::{document::{Author, Document}, repository::DocumentRepository};
//! use dockeep_memory::InMemoryRepository;
//! use chrono::Utc;
//!
//! # async fn example() -> dockeep_core::error::RepositoryResult<()> {
//! let repository = InMemoryRepository::new();
//!
//! let saved = repository
//!     .save(
//!         Document::builder()
//!             .title("First Document")
//!             .author(Author::new("A1", "Author One"))
//!             .created(Utc::now())
//!             .build(),
//!     )
//!     .await?;
//!
//! assert!(saved.has_id());
//! # Ok(())
//! # }
//! ```

pub mod matcher;
pub mod store;

pub use store::{InMemoryRepository, InMemoryRepositoryBuilder};
