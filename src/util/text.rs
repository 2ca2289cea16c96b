use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Truncate a string to fit within `max_width` terminal columns, appending
/// "..." when text was cut off.
///
/// Width is measured in display columns, so CJK characters and emoji (2
/// columns each) are handled correctly. When the string already fits, the
/// input is returned borrowed without allocation. For very narrow widths
/// (0-3 columns) the result is as many characters as fit, with no ellipsis.
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if max_width == 0 {
        return Cow::Borrowed("");
    }
    if UnicodeWidthStr::width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    // No room for text plus ellipsis: take what fits, skip the ellipsis.
    if max_width <= ELLIPSIS_WIDTH {
        let mut out = String::new();
        let mut used = 0;
        for ch in s.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > max_width {
                break;
            }
            out.push(ch);
            used += w;
        }
        return Cow::Owned(out);
    }

    let budget = max_width - ELLIPSIS_WIDTH;
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(ELLIPSIS);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_is_borrowed() {
        let result = truncate_to_width("Short", 10);
        assert_eq!(result, "Short");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn long_string_gets_ellipsis() {
        assert_eq!(truncate_to_width("Hello World", 8), "Hello...");
    }

    #[test]
    fn cjk_counts_two_columns_per_char() {
        assert_eq!(truncate_to_width("你好世界", 7), "你好...");
    }

    #[test]
    fn narrow_widths_skip_ellipsis() {
        assert_eq!(truncate_to_width("Test", 0), "");
        assert_eq!(truncate_to_width("Testing", 1), "T");
        assert_eq!(truncate_to_width("Testing", 3), "Tes");
    }

    #[test]
    fn exact_fit_is_unchanged() {
        assert_eq!(truncate_to_width("12345", 5), "12345");
    }
}
