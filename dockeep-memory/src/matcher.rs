//! Search request evaluation against stored documents.
//!
//! Present filters combine with logical AND; the values inside one list
//! filter combine with OR. An unset filter constrains nothing. An empty
//! list is a real constraint that no document satisfies. A document without
//! a creation date never matches a date-bounded filter.

use chrono::{DateTime, Utc};

use dockeep_core::{document::Document, query::SearchRequest};

/// Evaluates one search request against one document.
pub(crate) struct RequestMatcher<'a> {
    document: &'a Document,
}

impl<'a> RequestMatcher<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Collects the documents matching `request` out of an iterator of
    /// stored entries.
    pub fn filter_documents(
        documents: impl IntoIterator<Item = &'a Document>,
        request: &SearchRequest,
    ) -> Vec<Document> {
        documents
            .into_iter()
            .filter(|document| RequestMatcher::new(document).matches(request))
            .cloned()
            .collect()
    }

    pub fn matches(&self, request: &SearchRequest) -> bool {
        self.title_starts_with_any(request.title_prefixes.as_deref())
            && self.content_contains_any(request.contains_contents.as_deref())
            && self.author_id_among(request.author_ids.as_deref())
            && self.created_not_before(request.created_from)
            && self.created_not_after(request.created_to)
    }

    fn title_starts_with_any(&self, prefixes: Option<&[String]>) -> bool {
        match prefixes {
            Some(prefixes) => prefixes
                .iter()
                .any(|prefix| self.document.title.starts_with(prefix.as_str())),
            None => true,
        }
    }

    fn content_contains_any(&self, fragments: Option<&[String]>) -> bool {
        match fragments {
            Some(fragments) => fragments
                .iter()
                .any(|fragment| self.document.content.contains(fragment.as_str())),
            None => true,
        }
    }

    fn author_id_among(&self, author_ids: Option<&[String]>) -> bool {
        match author_ids {
            Some(author_ids) => author_ids.contains(&self.document.author.id),
            None => true,
        }
    }

    fn created_not_before(&self, bound: Option<DateTime<Utc>>) -> bool {
        match bound {
            Some(from) => self
                .document
                .created
                .is_some_and(|created| created >= from),
            None => true,
        }
    }

    fn created_not_after(&self, bound: Option<DateTime<Utc>>) -> bool {
        match bound {
            Some(to) => self.document.created.is_some_and(|created| created <= to),
            None => true,
        }
    }
}
