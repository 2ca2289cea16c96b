//! Input handling for the TUI.
//!
//! Keyboard input is dispatched by mode: search mode edits the query live,
//! normal mode navigates and triggers actions.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

use crate::app::{App, AppEvent, InputMode};
use crate::category::CATEGORIES;

use super::Action;

/// Maximum allowed search query length.
const MAX_SEARCH_LENGTH: usize = 256;

/// Main input dispatch function.
pub(super) async fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return Ok(Action::Quit);
    }

    if app.input_mode == InputMode::Search {
        return Ok(handle_search_input(app, code));
    }

    match code {
        KeyCode::Char('q') => return Ok(Action::Quit),

        KeyCode::Char('j') | KeyCode::Down => app.nav_down(),
        KeyCode::Char('k') | KeyCode::Up => app.nav_up(),

        KeyCode::Tab => {
            let next = (app.store.category().index() + 1) % CATEGORIES.len();
            switch_category(app, next, event_tx);
        }
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            switch_category(app, index, event_tx);
        }

        KeyCode::Char('/') => {
            app.input_mode = InputMode::Search;
        }

        KeyCode::Char('s') => match app.toggle_save_selected().await? {
            Some(true) => app.set_status("Article saved"),
            Some(false) => app.set_status("Article unsaved"),
            None => {}
        },

        KeyCode::Char('t') => {
            let name = app.toggle_theme().await?;
            app.set_status(format!("Theme: {}", name));
        }

        KeyCode::Char('r') => {
            app.spawn_fetch(event_tx);
            app.set_status("Refreshing...");
        }

        KeyCode::Enter => open_selected(app),

        _ => {}
    }

    Ok(Action::Continue)
}

/// Handle input while editing the search query.
///
/// Every keystroke re-filters immediately. Enter keeps the query and returns
/// to normal mode; Esc clears it.
fn handle_search_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Esc => app.clear_search(),
        KeyCode::Enter => app.input_mode = InputMode::Normal,
        KeyCode::Backspace => {
            app.search_input.pop();
            app.apply_search();
        }
        KeyCode::Char(c) => {
            if app.search_input.len() < MAX_SEARCH_LENGTH {
                app.search_input.push(c);
                app.apply_search();
            }
        }
        _ => {}
    }
    Action::Continue
}

/// Switch to the category at `index` and refetch its section.
fn switch_category(app: &mut App, index: usize, event_tx: &mpsc::Sender<AppEvent>) {
    let category = &CATEGORIES[index];
    if category.id == app.store.category() {
        return;
    }
    app.select_category(category.id);
    app.spawn_fetch(event_tx);
}

/// Open the selected article in the system browser.
///
/// Fallback articles carry a placeholder URL and cannot be opened.
fn open_selected(app: &mut App) {
    let Some(article) = app.selected_article() else {
        return;
    };
    if !article.has_real_url() {
        app.set_status("No link available for this article");
        return;
    }
    let url = article.url.clone();
    match open::that_detached(&url) {
        Ok(()) => {
            tracing::info!(url = %url, "Opened article in browser");
            app.set_status("Opened in browser");
        }
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Failed to open browser");
            app.set_status(format!("Failed to open browser: {}", e));
        }
    }
}
