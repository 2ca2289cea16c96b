//! Built-in fallback dataset.
//!
//! When a fetch fails (or the app runs in demo mode without an API key), this
//! fixed six-article set populates the view so the user never faces an empty
//! screen. Image fields hold descriptive phrases rather than URLs.

use crate::article::Article;

/// Artificial delay applied before the fallback dataset replaces the view,
/// so the substitution reads as a load rather than a flash.
pub const FALLBACK_DELAY_MS: u64 = 800;

fn article(
    id: &str,
    title: &str,
    abstract_text: &str,
    byline: &str,
    section: &str,
    published_date: &str,
    image_url: &str,
) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        abstract_text: abstract_text.to_string(),
        byline: byline.to_string(),
        section: section.to_string(),
        published_date: published_date.to_string(),
        url: "#".to_string(),
        image_url: image_url.to_string(),
        author_image_url: None,
    }
}

/// The fixed fallback dataset, in display order.
pub fn fallback_articles() -> Vec<Article> {
    vec![
        article(
            "1",
            "Sustainable Fashion: The Future of Luxury Design",
            "Leading designers are revolutionizing the fashion industry with eco-friendly \
             materials and ethical production methods. This shift represents a fundamental \
             change in how luxury brands approach sustainability.",
            "Emma Richardson",
            "Fashion",
            "2025-11-03",
            "fashion sustainable luxury",
        ),
        article(
            "2",
            "Paris Fashion Week 2025: Bold Colors and Minimalist Silhouettes",
            "The latest collections from Paris Fashion Week showcase a striking contrast \
             between vibrant color palettes and clean, minimalist designs. Designers are \
             pushing boundaries while maintaining classic elegance.",
            "Marcus Chen",
            "Fashion",
            "2025-11-02",
            "paris fashion runway",
        ),
        article(
            "3",
            "The Renaissance of Vintage Streetwear in Modern Culture",
            "Vintage streetwear is experiencing an unprecedented resurgence as Gen Z embraces \
             nostalgia and sustainability. Limited edition pieces from the 90s and early \
             2000s are commanding premium prices.",
            "Sofia Martinez",
            "Fashion",
            "2025-11-01",
            "vintage streetwear style",
        ),
        article(
            "4",
            "Milan Fashion Week: Italian Craftsmanship Meets Modern Innovation",
            "Italian designers showcase their mastery of traditional techniques while \
             embracing cutting-edge technology and sustainable practices.",
            "Alessandro Rossi",
            "Fashion",
            "2025-10-31",
            "fashion sustainable luxury",
        ),
        article(
            "5",
            "The Art of Slow Fashion: Quality Over Quantity",
            "A growing movement embraces timeless pieces and mindful consumption, challenging \
             fast fashion culture and promoting sustainable wardrobes.",
            "Claire Bennett",
            "Style",
            "2025-10-30",
            "vintage streetwear style",
        ),
        article(
            "6",
            "Digital Fashion: NFTs and Virtual Runways Transform the Industry",
            "Technology is reshaping fashion with virtual collections, digital fashion shows, \
             and NFT wearables creating new opportunities for designers and consumers.",
            "Jordan Kim",
            "Arts",
            "2025-10-29",
            "paris fashion runway",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_six_articles_with_unique_ids() {
        let articles = fallback_articles();
        assert_eq!(articles.len(), 6);
        for (i, a) in articles.iter().enumerate() {
            for b in &articles[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn fallback_articles_have_no_real_urls() {
        for a in fallback_articles() {
            assert!(!a.has_real_url());
        }
    }

    #[test]
    fn fallback_spans_multiple_sections() {
        let articles = fallback_articles();
        assert!(articles.iter().any(|a| a.section == "Fashion"));
        assert!(articles.iter().any(|a| a.section == "Style"));
        assert!(articles.iter().any(|a| a.section == "Arts"));
    }
}
