//! Core types for the dockeep document repository.
//!
//! This crate defines the shared vocabulary of the dockeep project:
//!
//! - **Document model** ([`document`]) - Documents and their embedded authors
//! - **Search requests** ([`query`]) - Composable multi-field search filters
//! - **Repository seam** ([`repository`]) - Traits implemented by storage backends
//! - **Error handling** ([`error`]) - Error and result types
//!
//! Storage itself lives in backend crates; see `dockeep-memory` for the
//! in-memory implementation.
//!
//! # Example
//!
//! ```ignore
//! use dockeep_core::document::{Author, Document};
//! use chrono::Utc;
//!
//! let document = Document::builder()
//!     .id("1")
//!     .title("First Document")
//!     .content("This is the content of the first document.")
//!     .author(Author::new("A1", "Author One"))
//!     .created(Utc::now())
//!     .build();
//! ```

pub mod document;
pub mod error;
pub mod query;
pub mod repository;
