//! Integration tests for saved-article persistence through the preference
//! store: round-trips, toggling semantics, and corrupt-value recovery.

use pretty_assertions::assert_eq;

use runway::article::Article;
use runway::saved::SavedArticles;
use runway::storage::{Database, SAVED_ARTICLES_KEY, THEME_KEY};

fn article(id: &str, title: &str) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        abstract_text: "A short summary.".to_string(),
        byline: "By Integration Test".to_string(),
        section: "Fashion".to_string(),
        published_date: "2025-11-01".to_string(),
        url: format!("https://example.com/{id}"),
        image_url: "https://example.com/img.jpg".to_string(),
        author_image_url: None,
    }
}

#[tokio::test]
async fn saved_set_round_trips_through_fresh_load() {
    let db = Database::open(":memory:").await.unwrap();

    let mut saved = SavedArticles::load(&db).await;
    assert!(saved.is_empty());

    saved.toggle(&db, &article("a", "First")).await.unwrap();
    saved.toggle(&db, &article("b", "Second")).await.unwrap();

    let reloaded = SavedArticles::load(&db).await;
    assert_eq!(reloaded.articles(), saved.articles());
    assert_eq!(reloaded.len(), 2);
    assert!(reloaded.is_saved("a"));
    assert!(reloaded.is_saved("b"));
}

#[tokio::test]
async fn unsave_persists_immediately() {
    let db = Database::open(":memory:").await.unwrap();
    let mut saved = SavedArticles::empty();

    saved.toggle(&db, &article("a", "Keep")).await.unwrap();
    saved.toggle(&db, &article("b", "Drop")).await.unwrap();
    saved.toggle(&db, &article("b", "Drop")).await.unwrap();

    let reloaded = SavedArticles::load(&db).await;
    assert_eq!(reloaded.len(), 1);
    assert!(reloaded.is_saved("a"));
    assert!(!reloaded.is_saved("b"));
}

#[tokio::test]
async fn stored_value_is_a_json_array_of_articles() {
    let db = Database::open(":memory:").await.unwrap();
    let mut saved = SavedArticles::empty();
    saved.toggle(&db, &article("a", "Stored")).await.unwrap();

    let raw = db
        .get_preference(SAVED_ARTICLES_KEY)
        .await
        .unwrap()
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], "a");
    // The summary field serializes under its wire name.
    assert_eq!(entries[0]["abstract"], "A short summary.");
}

#[tokio::test]
async fn corrupt_stored_value_recovers_as_empty() {
    let db = Database::open(":memory:").await.unwrap();
    db.set_preference(SAVED_ARTICLES_KEY, "{{ definitely not json")
        .await
        .unwrap();

    let saved = SavedArticles::load(&db).await;
    assert!(saved.is_empty());

    // The next save overwrites the corrupt value cleanly.
    let mut saved = saved;
    saved.toggle(&db, &article("a", "Fresh")).await.unwrap();
    let reloaded = SavedArticles::load(&db).await;
    assert_eq!(reloaded.len(), 1);
}

#[tokio::test]
async fn preference_keys_do_not_collide() {
    let db = Database::open(":memory:").await.unwrap();
    db.set_preference(THEME_KEY, "light").await.unwrap();

    let mut saved = SavedArticles::empty();
    saved.toggle(&db, &article("a", "First")).await.unwrap();

    assert_eq!(
        db.get_preference(THEME_KEY).await.unwrap().as_deref(),
        Some("light")
    );
    assert!(SavedArticles::load(&db).await.is_saved("a"));
}

#[tokio::test]
async fn reopened_database_retains_saved_articles() {
    let dir = std::env::temp_dir().join("runway_saved_lifecycle_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("news.db");
    std::fs::remove_file(&path).ok();
    let path_str = path.to_str().unwrap();

    {
        let db = Database::open(path_str).await.unwrap();
        let mut saved = SavedArticles::empty();
        saved.toggle(&db, &article("a", "Durable")).await.unwrap();
    }

    let db = Database::open(path_str).await.unwrap();
    let saved = SavedArticles::load(&db).await;
    assert!(saved.is_saved("a"));

    std::fs::remove_dir_all(&dir).ok();
}
