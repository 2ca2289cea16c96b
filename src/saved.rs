//! Saved-articles manager.
//!
//! An insertion-ordered set of articles keyed by id, persisted as one JSON
//! array under a fixed preference key. Every mutation re-serializes the whole
//! set — no incremental diffing, the set is small. Loading never fails:
//! a missing key starts empty, a corrupt value is logged and starts empty.

use anyhow::{Context, Result};

use crate::article::Article;
use crate::storage::{Database, SAVED_ARTICLES_KEY};

pub struct SavedArticles {
    /// Insertion-ordered; membership checks scan by id.
    articles: Vec<Article>,
}

impl SavedArticles {
    pub fn empty() -> Self {
        Self {
            articles: Vec::new(),
        }
    }

    /// Load the saved set from the store. Called once at startup.
    ///
    /// Absent key → empty set. Unparseable value → logged, empty set.
    /// Storage read errors are treated the same way — a failed load must
    /// never take the app down.
    pub async fn load(db: &Database) -> Self {
        let raw = match db.get_preference(SAVED_ARTICLES_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::empty(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read saved articles, starting empty");
                return Self::empty();
            }
        };

        match serde_json::from_str::<Vec<Article>>(&raw) {
            Ok(articles) => {
                tracing::debug!(count = articles.len(), "Loaded saved articles");
                Self { articles }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Saved articles value is corrupt, starting empty");
                Self::empty()
            }
        }
    }

    /// Toggle membership for an article and persist the whole set.
    ///
    /// Returns the new membership state (`true` = now saved). Two toggles
    /// with no mutation in between restore the original set.
    pub async fn toggle(&mut self, db: &Database, article: &Article) -> Result<bool> {
        let now_saved = match self.articles.iter().position(|a| a.id == article.id) {
            Some(index) => {
                self.articles.remove(index);
                false
            }
            None => {
                self.articles.push(article.clone());
                true
            }
        };
        self.persist(db).await?;
        Ok(now_saved)
    }

    /// Pure membership query.
    pub fn is_saved(&self, id: &str) -> bool {
        self.articles.iter().any(|a| a.id == id)
    }

    /// Contents in insertion order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    async fn persist(&self, db: &Database) -> Result<()> {
        let json =
            serde_json::to_string(&self.articles).context("Failed to serialize saved articles")?;
        db.set_preference(SAVED_ARTICLES_KEY, &json)
            .await
            .context("Failed to persist saved articles")
    }
}
