//! Theme system for the TUI.
//!
//! Semantic color roles map to ratatui `Style` values. `ThemeVariant` selects
//! between Light and Dark palettes (persisted through the preference store),
//! and `StyleMap` resolves role names to concrete styles at render time.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Light,
    Dark,
}

impl ThemeVariant {
    /// Parse a variant name from a stored preference (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Stored preference value for this variant.
    pub fn key(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Toggle to the other variant.
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Light => ColorPalette::light(),
            Self::Dark => ColorPalette::dark(),
        }
    }
}

// ============================================================================
// Color Palette — semantic roles to Style
// ============================================================================

/// A complete palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Category tabs --
    pub tab_normal: Style,
    pub tab_selected: Style,

    // -- Article list --
    pub list_title: Style,
    pub list_selected: Style,
    pub list_meta: Style,
    pub list_saved: Style,
    pub list_featured: Style,

    // -- Detail pane --
    pub detail_title: Style,
    pub detail_metadata: Style,
    pub detail_body: Style,
    pub detail_link: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub status_error: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,
    pub search_prompt: Style,
    pub empty_state: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            tab_normal: Style::default(),
            tab_selected: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),

            list_title: Style::default().add_modifier(Modifier::BOLD),
            list_selected: Style::default().bg(Color::DarkGray).fg(Color::White),
            list_meta: Style::default().fg(Color::DarkGray),
            list_saved: Style::default().fg(Color::Yellow),
            list_featured: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),

            detail_title: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            detail_metadata: Style::default().fg(Color::DarkGray),
            detail_body: Style::default(),
            detail_link: Style::default().fg(Color::Blue),

            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            status_error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Magenta),
            search_prompt: Style::default().fg(Color::Cyan),
            empty_state: Style::default().fg(Color::DarkGray),
        }
    }

    fn light() -> Self {
        Self {
            tab_normal: Style::default().fg(Color::Black),
            tab_selected: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),

            list_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            list_selected: Style::default().bg(Color::Blue).fg(Color::White),
            list_meta: Style::default().fg(Color::DarkGray),
            list_saved: Style::default().fg(Color::Magenta),
            list_featured: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),

            detail_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            detail_metadata: Style::default().fg(Color::DarkGray),
            detail_body: Style::default().fg(Color::Black),
            detail_link: Style::default().fg(Color::Blue),

            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            status_error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Blue),
            search_prompt: Style::default().fg(Color::Blue),
            empty_state: Style::default().fg(Color::DarkGray),
        }
    }
}

// ============================================================================
// Style Map — string-keyed lookup
// ============================================================================

/// String-keyed style lookup built from a `ColorPalette`.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 17] = [
    "tab_normal",
    "tab_selected",
    "list_title",
    "list_selected",
    "list_meta",
    "list_saved",
    "list_featured",
    "detail_title",
    "detail_metadata",
    "detail_body",
    "detail_link",
    "status_bar",
    "status_error",
    "panel_border",
    "panel_border_focused",
    "search_prompt",
    "empty_state",
];

impl StyleMap {
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 17] = [
            p.tab_normal,
            p.tab_selected,
            p.list_title,
            p.list_selected,
            p.list_meta,
            p.list_saved,
            p.list_featured,
            p.detail_title,
            p.detail_metadata,
            p.detail_body,
            p.detail_link,
            p.status_bar,
            p.status_error,
            p.panel_border,
            p.panel_border_focused,
            p.search_prompt,
            p.empty_state,
        ];

        let mut map = HashMap::with_capacity(ROLE_NAMES.len());
        for (name, style) in ROLE_NAMES.iter().zip(styles.iter()) {
            map.insert(*name, *style);
        }
        Self { map }
    }

    /// Resolve a role name to its `Style`. Unknown roles render unstyled.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================
