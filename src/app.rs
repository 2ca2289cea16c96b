//! Central application state and the events produced by background tasks.

use std::borrow::Cow;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::article::Article;
use crate::category::CategoryId;
use crate::saved::SavedArticles;
use crate::source::{fallback_articles, ApiError, NewsClient, FALLBACK_DELAY_MS};
use crate::storage::Database;
use crate::store::ArticleStore;
use crate::theme::{StyleMap, ThemeVariant};

/// Events from background tasks.
pub enum AppEvent {
    /// A section fetch finished.
    ///
    /// `generation` is the fetch counter at spawn time; completions from an
    /// older generation are discarded so a slow earlier request can never
    /// overwrite a newer one.
    FetchCompleted {
        generation: u64,
        result: Result<Vec<Article>, ApiError>,
    },
}

/// Whether keystrokes navigate or edit the search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// Central application state.
pub struct App {
    pub db: Database,
    pub client: NewsClient,
    /// No API key configured: fetches serve the built-in dataset instead.
    pub demo_mode: bool,

    // Theme
    pub theme_variant: ThemeVariant,
    pub theme: StyleMap,

    // Data
    pub store: ArticleStore,
    pub saved: SavedArticles,

    // UI state
    pub selected: usize,
    pub input_mode: InputMode,
    pub search_input: String,
    pub loading: bool,
    /// Transient banner shown after a failed fetch (fallback data active).
    pub error_banner: Option<String>,
    pub status_message: Option<(Cow<'static, str>, Instant)>,
    pub spinner_frame: usize,
    pub needs_redraw: bool,

    /// Monotonic fetch counter for stale-response rejection.
    fetch_generation: u64,
}

impl App {
    pub fn new(
        db: Database,
        client: NewsClient,
        demo_mode: bool,
        theme_variant: ThemeVariant,
        saved: SavedArticles,
        initial_category: CategoryId,
    ) -> Self {
        Self {
            db,
            client,
            demo_mode,
            theme_variant,
            theme: StyleMap::from_palette(&theme_variant.palette()),
            store: ArticleStore::new(initial_category),
            saved,
            selected: 0,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            loading: false,
            error_banner: None,
            status_message: None,
            spinner_frame: 0,
            needs_redraw: true,
            fetch_generation: 0,
        }
    }

    // ========================================================================
    // Selection and navigation
    // ========================================================================

    /// Currently selected article in the filtered view (bounds-checked).
    pub fn selected_article(&self) -> Option<&Article> {
        self.store.visible().get(self.selected)
    }

    pub fn nav_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn nav_down(&mut self) {
        let len = self.store.visible().len();
        if len > 0 {
            self.selected = self.selected.saturating_add(1).min(len - 1);
        }
    }

    /// Clamp the selection after any operation that shrank the view.
    pub fn clamp_selection(&mut self) {
        let len = self.store.visible().len();
        self.selected = if len == 0 {
            0
        } else {
            self.selected.min(len - 1)
        };
    }

    // ========================================================================
    // Filter inputs
    // ========================================================================

    pub fn select_category(&mut self, category: CategoryId) {
        self.store.set_category(category, self.saved.articles());
        self.selected = 0;
    }

    /// Apply the live search input to the store.
    pub fn apply_search(&mut self) {
        self.store
            .set_query(self.search_input.clone(), self.saved.articles());
        self.clamp_selection();
    }

    /// Leave search mode and clear the query.
    pub fn clear_search(&mut self) {
        self.input_mode = InputMode::Normal;
        self.search_input.clear();
        self.store.set_query("", self.saved.articles());
        self.clamp_selection();
    }

    // ========================================================================
    // Saving
    // ========================================================================

    /// Toggle the saved state of the selected article and persist.
    ///
    /// Returns the new membership, or `None` when nothing is selected.
    pub async fn toggle_save_selected(&mut self) -> Result<Option<bool>> {
        let Some(article) = self.selected_article().cloned() else {
            return Ok(None);
        };
        let now_saved = self.saved.toggle(&self.db, &article).await?;
        // The Saved view derives from the saved set; recompute so an unsave
        // disappears from it immediately.
        self.store.refresh(self.saved.articles());
        self.clamp_selection();
        Ok(Some(now_saved))
    }

    // ========================================================================
    // Theme
    // ========================================================================

    /// Toggle the theme and persist the choice. Returns the new name.
    pub async fn toggle_theme(&mut self) -> Result<&'static str> {
        let next = self.theme_variant.next();
        self.theme_variant = next;
        self.theme = StyleMap::from_palette(&next.palette());
        self.needs_redraw = true;
        self.db
            .set_preference(crate::storage::THEME_KEY, next.key())
            .await?;
        Ok(next.name())
    }

    // ========================================================================
    // Fetching
    // ========================================================================

    /// Spawn a section fetch for the current category.
    ///
    /// Each spawn bumps the generation counter; a completion carrying an
    /// older generation is ignored in [`App::apply_fetch`]. On failure the
    /// task waits briefly before reporting so the fallback substitution
    /// reads as a load, not a flash.
    pub fn spawn_fetch(&mut self, event_tx: &mpsc::Sender<AppEvent>) {
        self.fetch_generation += 1;
        let generation = self.fetch_generation;
        self.loading = true;
        self.error_banner = None;

        let section = self.store.category().section();
        let client = self.client.clone();
        let demo = self.demo_mode;
        let tx = event_tx.clone();

        tokio::spawn(async move {
            let result = if demo {
                tokio::time::sleep(std::time::Duration::from_millis(FALLBACK_DELAY_MS)).await;
                Ok(fallback_articles())
            } else {
                let result = client.fetch_section(section).await;
                if result.is_err() {
                    tokio::time::sleep(std::time::Duration::from_millis(FALLBACK_DELAY_MS)).await;
                }
                result
            };
            if tx
                .send(AppEvent::FetchCompleted { generation, result })
                .await
                .is_err()
            {
                tracing::debug!("Fetch completion dropped (receiver gone)");
            }
        });
    }

    /// Apply a fetch completion to the store.
    ///
    /// Stale generations are discarded. Errors surface a banner and
    /// substitute the fallback dataset so the view is never empty.
    pub fn apply_fetch(&mut self, generation: u64, result: Result<Vec<Article>, ApiError>) {
        if generation != self.fetch_generation {
            tracing::debug!(
                stale = generation,
                current = self.fetch_generation,
                "Discarding stale fetch completion"
            );
            return;
        }
        self.loading = false;

        match result {
            Ok(articles) => {
                self.error_banner = None;
                self.store.set_articles(articles, self.saved.articles());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Fetch failed, substituting fallback dataset");
                self.error_banner = Some(format!("{e} — showing fallback stories"));
                self.store
                    .set_articles(fallback_articles(), self.saved.articles());
            }
        }
        self.clamp_selection();
    }

    /// Current fetch generation (visible for tests).
    pub fn fetch_generation(&self) -> u64 {
        self.fetch_generation
    }

    // ========================================================================
    // Status messages
    // ========================================================================

    /// Set a status message (auto-expires after 3 seconds).
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear the status message if expired. Returns true if cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= 3 {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}
