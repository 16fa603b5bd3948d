//! Convenient re-exports of commonly used types from dockeep.
//!
//! Import this prelude module to quickly access the most frequently used
//! types and traits without needing to import from multiple sub-modules:
//!
//! ```ignore
//! use dockeep::prelude::*;
//! ```

pub use dockeep_core::{
    document::{Author, Document, DocumentBuilder},
    error::{RepositoryError, RepositoryResult},
    query::{SearchRequest, SearchRequestBuilder},
    repository::{DocumentRepository, DocumentRepositoryBuilder},
};
