//! The document model: documents and their embedded authors.
//!
//! A [`Document`] is the unit of storage. Its `id` is the unique key within
//! a repository; an empty `id` marks a document that has not been assigned
//! one yet, and saving such a document generates a fresh identifier. The
//! `created` timestamp is recorded once and never changed by later saves of
//! the same id.
//!
//! # Example
//!
//! ```ignore
//! use dockeep_core::document::{Author, Document};
//! use chrono::Utc;
//!
//! let document = Document::builder()
//!     .title("First Document")
//!     .content("This is the content of the first document.")
//!     .author(Author::new("A1", "Author One"))
//!     .created(Utc::now())
//!     .build();
//!
//! assert!(!document.has_id());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The author of a document.
///
/// A plain value pair. An author is owned by exactly one document and is
/// copied along with it rather than shared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Opaque author identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Author {
    /// Creates an author from its identifier and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A stored document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique key within a repository. Empty until assigned.
    pub id: String,
    /// Document title.
    pub title: String,
    /// Document body.
    pub content: String,
    /// The author, embedded by value.
    pub author: Author,
    /// Creation timestamp. `None` when the caller never recorded one.
    pub created: Option<DateTime<Utc>>,
}

impl Document {
    /// Creates a new builder for assembling a document.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    /// Returns `true` when this document has an identifier assigned.
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Builder for constructing [`Document`] values.
///
/// Every field is optional; unset fields stay empty (or `None` for the
/// creation timestamp).
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Creates a builder with every field unset.
    pub fn new() -> Self {
        DocumentBuilder {
            document: Document::default(),
        }
    }

    /// Sets the document identifier.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.document.id = id.into();
        self
    }

    /// Sets the document title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.document.title = title.into();
        self
    }

    /// Sets the document body.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.document.content = content.into();
        self
    }

    /// Sets the document author.
    pub fn author(mut self, author: Author) -> Self {
        self.document.author = author;
        self
    }

    /// Sets the creation timestamp.
    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.document.created = Some(created);
        self
    }

    /// Builds and returns the final document.
    pub fn build(self) -> Document {
        self.document
    }
}
