//! The filter engine: a pure function from filter inputs to a filtered view.
//!
//! Rules are evaluated in order and the first match short-circuits the rest:
//!
//! 1. Saved category: the saved set verbatim. The query is ignored in this
//!    mode — a deliberate quirk carried over from the product behavior.
//! 2. All + empty query: the full set unchanged.
//! 3. Otherwise: keyword filter (title, abstract, or section contains the
//!    lower-cased query), then category filter using a bidirectional
//!    substring test between the article's section and the category's match
//!    string. The either-direction test tolerates naming mismatches between
//!    category labels ("Fashion & Style") and source section names ("Fashion").
//!
//! Ordering is stable: results preserve the relative order of the input set.

use crate::article::Article;
use crate::category::{Category, CategoryId};

/// Compute the filtered view for the given category and search query.
pub fn filter(
    category: &Category,
    query: &str,
    all: &[Article],
    saved: &[Article],
) -> Vec<Article> {
    if category.id == CategoryId::Saved {
        return saved.to_vec();
    }

    if category.id == CategoryId::All && query.is_empty() {
        return all.to_vec();
    }

    let lower_query = query.to_lowercase();
    all.iter()
        .filter(|article| query.is_empty() || matches_query(article, &lower_query))
        .filter(|article| {
            category.id == CategoryId::All || section_matches(&article.section, category.matches)
        })
        .cloned()
        .collect()
}

/// Case-insensitive keyword test over title, abstract, and section.
fn matches_query(article: &Article, lower_query: &str) -> bool {
    article.title.to_lowercase().contains(lower_query)
        || article.abstract_text.to_lowercase().contains(lower_query)
        || article.section.to_lowercase().contains(lower_query)
}

/// Bidirectional substring test: either string containing the other counts
/// as a match, case-insensitively.
fn section_matches(section: &str, category_match: &str) -> bool {
    let section = section.to_lowercase();
    let category_match = category_match.to_lowercase();
    section.contains(&category_match) || category_match.contains(&section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CATEGORIES;
    use proptest::prelude::*;

    fn article(id: &str, title: &str, abstract_text: &str, section: &str) -> Article {
        Article {
            id: id.to_string(),
            title: title.to_string(),
            abstract_text: abstract_text.to_string(),
            byline: "By Test".to_string(),
            section: section.to_string(),
            published_date: "2025-11-01".to_string(),
            url: "#".to_string(),
            image_url: "placeholder".to_string(),
            author_image_url: None,
        }
    }

    fn sample_set() -> Vec<Article> {
        vec![
            article("1", "Paris Fashion Week 2025", "Runway shows", "Fashion"),
            article("2", "Gallery Openings", "New exhibits downtown", "Arts"),
            article("3", "Slow Fashion", "Quality over quantity", "Style"),
            article("4", "Street Culture", "paris street portraits", "Culture"),
        ]
    }

    fn cat(id: CategoryId) -> &'static Category {
        id.category()
    }

    #[test]
    fn all_with_empty_query_is_identity() {
        let all = sample_set();
        let result = filter(cat(CategoryId::All), "", &all, &[]);
        assert_eq!(result, all);
    }

    #[test]
    fn saved_returns_saved_set_verbatim_ignoring_query() {
        let all = sample_set();
        let saved = vec![all[1].clone()];
        let result = filter(cat(CategoryId::Saved), "no such query", &all, &saved);
        assert_eq!(result, saved);
    }

    #[test]
    fn query_matches_title_abstract_or_section() {
        let all = sample_set();
        let result = filter(cat(CategoryId::All), "paris", &all, &[]);
        // "Paris Fashion Week" (title) and "paris street portraits" (abstract)
        let ids: Vec<&str> = result.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn query_combines_with_category_filter() {
        let all = sample_set();
        let result = filter(cat(CategoryId::Fashion), "paris", &all, &[]);
        let ids: Vec<&str> = result.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn category_match_works_in_either_direction() {
        // Article section "Fashion" is a substring of the category match
        // string "Fashion & Style" — the reverse-direction case.
        let all = vec![article("1", "T", "A", "Fashion")];
        let result = filter(cat(CategoryId::Fashion), "", &all, &[]);
        assert_eq!(result.len(), 1);

        // Category match "Style" is a substring of a longer section name.
        let all = vec![article("2", "T", "A", "Style Desk")];
        let result = filter(cat(CategoryId::Style), "", &all, &[]);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn category_filter_is_case_insensitive() {
        let all = vec![article("1", "T", "A", "ARTS")];
        let result = filter(cat(CategoryId::Arts), "", &all, &[]);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn no_match_yields_empty_view() {
        let all = sample_set();
        let result = filter(cat(CategoryId::All), "zebra", &all, &[]);
        assert!(result.is_empty());
    }

    #[test]
    fn result_order_is_stable() {
        let all = sample_set();
        // "fashion" hits articles 1 (title+section) and 3 (title) in order.
        let result = filter(cat(CategoryId::All), "fashion", &all, &[]);
        let ids: Vec<&str> = result.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    proptest! {
        /// Every article surviving rule 3 with a non-empty query contains the
        /// query in at least one of the three searched fields.
        #[test]
        fn rule3_results_contain_query(query in "[a-z]{1,8}") {
            let all = sample_set();
            let result = filter(cat(CategoryId::All), &query, &all, &[]);
            for article in result {
                let q = query.to_lowercase();
                prop_assert!(
                    article.title.to_lowercase().contains(&q)
                        || article.abstract_text.to_lowercase().contains(&q)
                        || article.section.to_lowercase().contains(&q)
                );
            }
        }

        /// Category-filtered results always satisfy the bidirectional rule.
        #[test]
        fn category_results_satisfy_section_rule(idx in 2usize..CATEGORIES.len()) {
            let category = &CATEGORIES[idx];
            let all = sample_set();
            for article in filter(category, "", &all, &[]) {
                prop_assert!(section_matches(&article.section, category.matches));
            }
        }
    }
}
