//! In-memory article store: the full fetched set plus the current filtered
//! view, recomputed through the filter engine whenever an input changes.

use crate::article::Article;
use crate::category::CategoryId;
use crate::filter;

/// Holds the fetched articles and the derived filtered view.
///
/// Mutators take the saved set as a parameter because the `Saved` category's
/// view is built from it; the store itself never owns saved articles.
pub struct ArticleStore {
    all: Vec<Article>,
    filtered: Vec<Article>,
    category: CategoryId,
    query: String,
}

impl ArticleStore {
    pub fn new(category: CategoryId) -> Self {
        Self {
            all: Vec::new(),
            filtered: Vec::new(),
            category,
            query: String::new(),
        }
    }

    /// Replace the full article set (one fetch replaces everything).
    pub fn set_articles(&mut self, articles: Vec<Article>, saved: &[Article]) {
        self.all = articles;
        self.recompute(saved);
    }

    pub fn set_category(&mut self, category: CategoryId, saved: &[Article]) {
        self.category = category;
        self.recompute(saved);
    }

    pub fn set_query(&mut self, query: impl Into<String>, saved: &[Article]) {
        self.query = query.into();
        self.recompute(saved);
    }

    /// Re-run the filter with unchanged inputs. Needed after saved-set
    /// mutations while the Saved category is active.
    pub fn refresh(&mut self, saved: &[Article]) {
        self.recompute(saved);
    }

    fn recompute(&mut self, saved: &[Article]) {
        self.filtered = filter::filter(self.category.category(), &self.query, &self.all, saved);
        tracing::debug!(
            category = self.category.category().name,
            query = %self.query,
            total = self.all.len(),
            visible = self.filtered.len(),
            "Recomputed filtered view"
        );
    }

    /// The current filtered view, in stable fetch order.
    pub fn visible(&self) -> &[Article] {
        &self.filtered
    }

    pub fn all(&self) -> &[Article] {
        &self.all
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}
