//! Integration tests for MySqlSnippetRepository.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use common::TestDatabase;
use snipvault_core::{NewSnippet, UserId};
use snipvault_repository::{MySqlSnippetRepository, SnippetRepository};

fn new_snippet(title: &str, tags: &[&str]) -> NewSnippet {
    NewSnippet {
        title: title.to_string(),
        content: "fn main() {}".to_string(),
        language: "rust".to_string(),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_list() {
    let db = TestDatabase::new().await;
    let repo = MySqlSnippetRepository::new(db.pool());
    let owner = UserId::new();

    let created = repo
        .create(owner, new_snippet("Hello", &["intro"]))
        .await
        .expect("Failed to create snippet");
    assert_eq!(created.user_id, owner);
    assert_eq!(created.tags, vec!["intro".to_string()]);

    let listed = repo.find_by_owner(owner).await.expect("Query failed");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_listing_is_scoped_to_owner() {
    let db = TestDatabase::new().await;
    let repo = MySqlSnippetRepository::new(db.pool());
    let alice = UserId::new();
    let bob = UserId::new();

    repo.create(alice, new_snippet("Alice's", &[])).await.unwrap();
    repo.create(bob, new_snippet("Bob's", &[])).await.unwrap();

    let listed = repo.find_by_owner(alice).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Alice's");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_listing_newest_first() {
    let db = TestDatabase::new().await;
    let repo = MySqlSnippetRepository::new(db.pool());
    let owner = UserId::new();

    repo.create(owner, new_snippet("first", &[])).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    repo.create(owner, new_snippet("second", &[])).await.unwrap();

    let listed = repo.find_by_owner(owner).await.unwrap();
    let titles: Vec<_> = listed.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["second", "first"]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_search_matches_title_and_tag() {
    let db = TestDatabase::new().await;
    let repo = MySqlSnippetRepository::new(db.pool());
    let owner = UserId::new();

    repo.create(owner, new_snippet("Python tricks", &[])).await.unwrap();
    repo.create(owner, new_snippet("Loops", &["py"])).await.unwrap();
    repo.create(owner, new_snippet("Rust", &["cli"])).await.unwrap();

    let by_title = repo.search_by_owner(owner, "python").await.unwrap();
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].title, "Python tricks");

    let by_tag = repo.search_by_owner(owner, "cli").await.unwrap();
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag[0].title, "Rust");

    let none = repo.search_by_owner(owner, "haskell").await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_search_treats_wildcards_literally() {
    let db = TestDatabase::new().await;
    let repo = MySqlSnippetRepository::new(db.pool());
    let owner = UserId::new();

    repo.create(owner, new_snippet("snake_case helpers", &[])).await.unwrap();
    repo.create(owner, new_snippet("snakeXcase", &[])).await.unwrap();

    let found = repo.search_by_owner(owner, "snake_case").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "snake_case helpers");

    let percent = repo.search_by_owner(owner, "%").await.unwrap();
    assert!(percent.is_empty());
}
