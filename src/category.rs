//! The fixed category set and its mapping to remote sections.
//!
//! Categories are this app's user-facing filter groupings. They are loosely
//! mapped to the remote source's section keys: several categories share a
//! section, and unmapped categories fall back to the default. The set is fixed
//! at compile time and not user-extensible.

/// Identifier for one of the six fixed categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryId {
    All,
    Saved,
    Fashion,
    Style,
    Arts,
    Culture,
}

/// A category with its display name and section-matching rule.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub id: CategoryId,
    /// Display name for the tab strip.
    pub name: &'static str,
    /// Match string for the filter engine's bidirectional-substring rule.
    /// Empty for `All` (no section filtering); unused for `Saved`.
    pub matches: &'static str,
}

/// All categories in display order. Index positions line up with the `1`-`6`
/// keybindings.
pub const CATEGORIES: [Category; 6] = [
    Category {
        id: CategoryId::All,
        name: "All",
        matches: "",
    },
    Category {
        id: CategoryId::Saved,
        name: "Saved",
        matches: "Saved",
    },
    Category {
        id: CategoryId::Fashion,
        name: "Fashion",
        matches: "Fashion & Style",
    },
    Category {
        id: CategoryId::Style,
        name: "Style",
        matches: "Style",
    },
    Category {
        id: CategoryId::Arts,
        name: "Arts",
        matches: "Arts",
    },
    Category {
        id: CategoryId::Culture,
        name: "Culture",
        matches: "Culture",
    },
];

/// Section requested when a category has no mapping of its own.
pub const DEFAULT_SECTION: &str = "fashion";

impl CategoryId {
    /// Resolve the remote Top Stories section for this category.
    ///
    /// `All` and `Saved` have no section of their own and use the default.
    pub fn section(self) -> &'static str {
        match self {
            CategoryId::Fashion | CategoryId::Style => "fashion",
            CategoryId::Arts | CategoryId::Culture => "arts",
            CategoryId::All | CategoryId::Saved => DEFAULT_SECTION,
        }
    }

    /// Look up the full `Category` entry for this id.
    pub fn category(self) -> &'static Category {
        CATEGORIES
            .iter()
            .find(|c| c.id == self)
            .expect("every CategoryId appears in CATEGORIES")
    }

    /// Parse a category id from a CLI argument or stored string.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "saved" => Some(Self::Saved),
            "fashion" => Some(Self::Fashion),
            "style" => Some(Self::Style),
            "arts" => Some(Self::Arts),
            "culture" => Some(Self::Culture),
            _ => None,
        }
    }

    /// Position of this category in [`CATEGORIES`].
    pub fn index(self) -> usize {
        CATEGORIES
            .iter()
            .position(|c| c.id == self)
            .expect("every CategoryId appears in CATEGORIES")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_resolves_a_section() {
        for cat in CATEGORIES {
            assert!(!cat.id.section().is_empty());
        }
    }

    #[test]
    fn style_and_fashion_share_a_section() {
        assert_eq!(CategoryId::Style.section(), CategoryId::Fashion.section());
        assert_eq!(CategoryId::Culture.section(), CategoryId::Arts.section());
    }

    #[test]
    fn unmapped_categories_use_default_section() {
        assert_eq!(CategoryId::All.section(), DEFAULT_SECTION);
        assert_eq!(CategoryId::Saved.section(), DEFAULT_SECTION);
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(CategoryId::from_name("Arts"), Some(CategoryId::Arts));
        assert_eq!(CategoryId::from_name("SAVED"), Some(CategoryId::Saved));
        assert_eq!(CategoryId::from_name("sports"), None);
    }

    #[test]
    fn index_round_trips_through_categories() {
        for (i, cat) in CATEGORIES.iter().enumerate() {
            assert_eq!(cat.id.index(), i);
        }
    }
}
