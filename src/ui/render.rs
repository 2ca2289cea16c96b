//! Render functions for the TUI.
//!
//! Single-screen layout: category tab strip, article list beside a detail
//! pane, and a status bar. An error banner row appears above the status bar
//! while fallback data is being shown.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::{App, InputMode};
use crate::category::{CategoryId, CATEGORIES};
use crate::util::truncate_to_width;

/// Minimum terminal dimensions required for normal operation.
const MIN_WIDTH: u16 = 60;
const MIN_HEIGHT: u16 = 10;

/// Braille spinner frames, indexed by `App::spinner_frame`.
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Main render entry point.
pub(super) fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    // Guard against zero-width/height to prevent panics
    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    // Rows: tabs, main panels, optional error banner, status bar
    let banner_height = if app.error_banner.is_some() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(banner_height),
            Constraint::Length(1),
        ])
        .split(area);

    render_tabs(f, app, chunks[0]);
    render_main(f, app, chunks[1]);
    if let Some(banner) = &app.error_banner {
        render_error_banner(f, app, banner, chunks[2]);
    }
    render_status_bar(f, app, chunks[3]);
}

/// Category tab strip with the title block.
fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, c)| Line::from(format!("{} {}", i + 1, c.name)))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.store.category().index())
        .style(app.theme.resolve("tab_normal"))
        .highlight_style(app.theme.resolve("tab_selected"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.resolve("panel_border"))
                .title(" runway "),
        );
    f.render_widget(tabs, area);
}

/// Article list beside the detail pane.
fn render_main(f: &mut Frame, app: &App, area: Rect) {
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(area);

    render_list(f, app, panels[0]);
    render_detail(f, app, panels[1]);
}

fn render_list(f: &mut Frame, app: &App, area: Rect) {
    let visible = app.store.visible();

    let title = if app.loading {
        format!(" Stories {} ", SPINNER[app.spinner_frame % SPINNER.len()])
    } else {
        format!(" Stories ({}) ", visible.len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.resolve("panel_border_focused"))
        .title(title);

    if visible.is_empty() {
        let msg = if app.store.category() == CategoryId::Saved {
            "No saved articles yet"
        } else if app.loading {
            "Loading stories..."
        } else {
            "No articles found"
        };
        let empty = Paragraph::new(msg)
            .style(app.theme.resolve("empty_state"))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    // Interior width minus borders, marker column, and a space.
    let text_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, article)| {
            let marker = if app.saved.is_saved(&article.id) {
                Span::styled("★ ", app.theme.resolve("list_saved"))
            } else {
                Span::raw("  ")
            };
            // The first story gets featured treatment, matching its larger
            // presentation in the list.
            let title_style = if i == 0 {
                app.theme.resolve("list_featured")
            } else {
                app.theme.resolve("list_title")
            };
            let title = Span::styled(
                truncate_to_width(&article.title, text_width).into_owned(),
                title_style,
            );
            let meta = Line::from(Span::styled(
                format!("  {} · {}", article.section, article.published_date),
                app.theme.resolve("list_meta"),
            ));
            ListItem::new(vec![Line::from(vec![marker, title]), meta])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(app.theme.resolve("list_selected"));

    let mut state = ListState::default();
    state.select(Some(app.selected.min(visible.len() - 1)));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_detail(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.resolve("panel_border"))
        .title(" Article ");

    let Some(article) = app.selected_article() else {
        let empty = Paragraph::new("Select a story to read its summary")
            .style(app.theme.resolve("empty_state"))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    };

    let mut metadata = vec![Span::styled(
        format!(
            "{} · {} · {}",
            article.byline, article.section, article.published_date
        ),
        app.theme.resolve("detail_metadata"),
    )];
    if app.saved.is_saved(&article.id) {
        metadata.push(Span::styled(" · ★ Saved", app.theme.resolve("list_saved")));
    }

    let mut lines = vec![
        Line::from(Span::styled(
            article.title.clone(),
            app.theme.resolve("detail_title"),
        )),
        Line::from(metadata),
        Line::default(),
        Line::from(Span::styled(
            article.abstract_text.clone(),
            app.theme.resolve("detail_body"),
        )),
    ];

    if article.has_real_url() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            article.url.clone(),
            app.theme.resolve("detail_link"),
        )));
        lines.push(Line::from(Span::styled(
            "Press Enter to open in browser",
            app.theme.resolve("detail_metadata"),
        )));
    }

    let detail = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    f.render_widget(detail, area);
}

fn render_error_banner(f: &mut Frame, app: &App, banner: &str, area: Rect) {
    let line = Paragraph::new(banner.to_string()).style(app.theme.resolve("status_error"));
    f.render_widget(line, area);
}

/// Bottom status line: search prompt or status message, then key hints.
fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let content = if app.input_mode == InputMode::Search {
        Line::from(vec![
            Span::styled("/", app.theme.resolve("search_prompt")),
            Span::raw(app.search_input.clone()),
            Span::raw("▏"),
        ])
    } else if let Some((msg, _)) = &app.status_message {
        Line::from(msg.to_string())
    } else {
        let mut hints = String::from("q quit · j/k move · Tab/1-6 category · / search");
        if !app.store.query().is_empty() {
            hints.push_str(&format!(" [{}]", app.store.query()));
        }
        hints.push_str(" · s save · t theme · r refresh");
        if app.demo_mode {
            hints.push_str(" · demo mode");
        }
        Line::from(hints)
    };

    let bar = Paragraph::new(content).style(app.theme.resolve("status_bar"));
    f.render_widget(bar, area);
}
