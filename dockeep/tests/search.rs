use std::collections::HashSet;

use chrono::{DateTime, Utc};
use dockeep::{memory::InMemoryRepository, prelude::*};

fn timestamp(value: &str) -> DateTime<Utc> {
    value.parse().expect("valid RFC 3339 timestamp")
}

/// Seeds the canonical five-document fixture: authors A1, A2, A3, A1, A2,
/// two contents mentioning "Java", created dates spanning January to May.
async fn seeded_repository() -> InMemoryRepository {
    let repository = InMemoryRepository::new();

    let documents = [
        Document::builder()
            .id("1")
            .title("First Document")
            .content("This is the content of the first document.")
            .author(Author::new("A1", "Author One"))
            .created(timestamp("2024-01-01T10:00:00Z"))
            .build(),
        Document::builder()
            .id("2")
            .title("Second Document")
            .content("This document talks about Java.")
            .author(Author::new("A2", "Author Two"))
            .created(timestamp("2024-02-01T10:00:00Z"))
            .build(),
        Document::builder()
            .id("3")
            .title("Third Document")
            .content("Java is a great programming language.")
            .author(Author::new("A3", "Author Three"))
            .created(timestamp("2024-03-01T10:00:00Z"))
            .build(),
        Document::builder()
            .id("4")
            .title("Fourth Document")
            .content("Content about something else.")
            .author(Author::new("A1", "Author One"))
            .created(timestamp("2024-04-01T10:00:00Z"))
            .build(),
        Document::builder()
            .id("5")
            .title("Fifth Document")
            .content("This document contains important information.")
            .author(Author::new("A2", "Author Two"))
            .created(timestamp("2024-05-01T10:00:00Z"))
            .build(),
    ];

    for document in documents {
        repository.save(document).await.expect("seed save succeeds");
    }

    repository
}

fn ids(results: &[Document]) -> HashSet<String> {
    results.iter().map(|document| document.id.clone()).collect()
}

#[tokio::test]
async fn search_without_a_request_returns_everything() {
    let repository = seeded_repository().await;

    let results = repository.search(None).await.unwrap();

    assert_eq!(results.len(), 5);
    assert_eq!(
        ids(&results),
        HashSet::from(["1".into(), "2".into(), "3".into(), "4".into(), "5".into()])
    );
}

#[tokio::test]
async fn search_by_title_prefix() {
    let repository = seeded_repository().await;

    let request = SearchRequest::builder().title_prefixes(["First"]).build();
    let results = repository.search(Some(&request)).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "First Document");
}

#[tokio::test]
async fn search_by_content_substring() {
    let repository = seeded_repository().await;

    let request = SearchRequest::builder().contains_contents(["Java"]).build();
    let results = repository.search(Some(&request)).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(ids(&results), HashSet::from(["2".into(), "3".into()]));
}

#[tokio::test]
async fn search_by_author_id() {
    let repository = seeded_repository().await;

    let request = SearchRequest::builder().author_ids(["A1"]).build();
    let results = repository.search(Some(&request)).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(ids(&results), HashSet::from(["1".into(), "4".into()]));
}

#[tokio::test]
async fn search_by_creation_date_range() {
    let repository = seeded_repository().await;

    let request = SearchRequest::builder()
        .created_from(timestamp("2024-01-01T00:00:00Z"))
        .created_to(timestamp("2024-03-31T23:59:59Z"))
        .build();
    let results = repository.search(Some(&request)).await.unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(
        ids(&results),
        HashSet::from(["1".into(), "2".into(), "3".into()])
    );
}

#[tokio::test]
async fn search_with_no_matches_returns_an_empty_vec() {
    let repository = seeded_repository().await;

    let request = SearchRequest::builder()
        .title_prefixes(["Nonexistent"])
        .build();
    let results = repository.search(Some(&request)).await.unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn search_combines_filters_with_logical_and() {
    let repository = seeded_repository().await;

    let request = SearchRequest::builder()
        .title_prefixes(["First", "Second", "Third"])
        .contains_contents(["Java"])
        .author_ids(["A2", "A3"])
        .created_from(timestamp("2024-01-01T00:00:00Z"))
        .created_to(timestamp("2024-05-01T10:00:00Z"))
        .build();
    let results = repository.search(Some(&request)).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(ids(&results), HashSet::from(["2".into(), "3".into()]));
}

#[tokio::test]
async fn an_empty_filter_list_excludes_everything() {
    let repository = seeded_repository().await;

    let empty_prefixes = SearchRequest::builder()
        .title_prefixes(Vec::<String>::new())
        .build();
    let empty_authors = SearchRequest::builder()
        .author_ids(Vec::<String>::new())
        .build();

    assert!(
        repository
            .search(Some(&empty_prefixes))
            .await
            .unwrap()
            .is_empty()
    );
    assert!(
        repository
            .search(Some(&empty_authors))
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn a_document_without_a_creation_date_is_skipped_by_date_filters() {
    let repository = seeded_repository().await;

    repository
        .save(
            Document::builder()
                .id("6")
                .title("Undated Document")
                .content("No creation date was recorded.")
                .author(Author::new("A1", "Author One"))
                .build(),
        )
        .await
        .unwrap();

    let bounded = SearchRequest::builder()
        .created_from(timestamp("2000-01-01T00:00:00Z"))
        .build();
    let results = repository.search(Some(&bounded)).await.unwrap();
    assert!(!ids(&results).contains("6"));

    // Without a date filter the undated document is still reachable.
    assert_eq!(repository.search(None).await.unwrap().len(), 6);
}
