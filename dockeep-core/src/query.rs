//! Search request construction.
//!
//! A [`SearchRequest`] is a transient query value object: five independent,
//! individually optional filters combined with logical AND. Within one list
//! filter the values combine with OR. A filter left unset constrains
//! nothing; a filter set to an empty list is unsatisfiable and excludes
//! every document.
//!
//! # Example
//!
//! ```ignore
//! use dockeep_core::query::SearchRequest;
//!
//! let request = SearchRequest::builder()
//!     .title_prefixes(["First", "Second"])
//!     .author_ids(["A1"])
//!     .build();
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A multi-field filter over stored documents.
///
/// Field names serialize in camelCase, matching the wire shape of the
/// minimal service contract (`titlePrefixes`, `containsContents`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Match documents whose title starts with any of these prefixes
    /// (case-sensitive, no trimming).
    pub title_prefixes: Option<Vec<String>>,
    /// Match documents whose content contains any of these substrings
    /// (case-sensitive).
    pub contains_contents: Option<Vec<String>>,
    /// Match documents whose author id is a member of this list.
    pub author_ids: Option<Vec<String>>,
    /// Inclusive lower bound on the creation timestamp.
    pub created_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the creation timestamp.
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    /// Creates a request with no filters set, matching every document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new request builder for fluent construction.
    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::new()
    }
}

/// Builder for constructing [`SearchRequest`] values.
#[derive(Debug, Clone, Default)]
pub struct SearchRequestBuilder {
    request: SearchRequest,
}

impl SearchRequestBuilder {
    /// Creates a builder with no filters set.
    pub fn new() -> Self {
        SearchRequestBuilder {
            request: SearchRequest::default(),
        }
    }

    /// Sets the title prefix filter.
    pub fn title_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.title_prefixes = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the content substring filter.
    pub fn contains_contents<I, S>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.contains_contents = Some(fragments.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the author id filter.
    pub fn author_ids<I, S>(mut self, author_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.author_ids = Some(author_ids.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the inclusive lower creation-date bound.
    pub fn created_from(mut self, created_from: DateTime<Utc>) -> Self {
        self.request.created_from = Some(created_from);
        self
    }

    /// Sets the inclusive upper creation-date bound.
    pub fn created_to(mut self, created_to: DateTime<Utc>) -> Self {
        self.request.created_to = Some(created_to);
        self
    }

    /// Builds and returns the final request.
    pub fn build(self) -> SearchRequest {
        self.request
    }
}
