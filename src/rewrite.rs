// src/rewrite.rs
//! Class Attribute Rewriter: textual scan for `attr="value"` spans and
//! replacement with CSS-Modules expressions. The scan is a plain substring
//! search, not an HTML/JSX parser; matches inside comments or strings are
//! rewritten like any other.

use memchr::{memchr, memmem};

use crate::style_ref::attr_expr;

/// Default attribute matched when the caller doesn't ask for more.
pub const DEFAULT_ATTR: &str = "className";

/// Result of one rewrite pass.
pub struct Rewrite {
    /// Full output document; non-matched text copied verbatim.
    pub text: String,
    /// Number of attribute spans replaced.
    pub rewritten: usize,
}

/// Rewrite every `className="..."` span in `source`. Total: never fails on
/// any input string, returns the input unchanged when nothing matches.
pub fn rewrite(source: &str) -> String {
    rewrite_attrs(source, &[DEFAULT_ATTR]).text
}

/// Generalized rewrite over a set of attribute names. The emitted expression
/// is always `className={ ... }` regardless of which attribute matched, so
/// raw HTML `class="..."` converts straight to TSX.
pub fn rewrite_attrs(source: &str, attrs: &[&str]) -> Rewrite {
    let mut spans = find_spans(source, attrs);
    spans.sort_by_key(|s| s.start);

    let mut out = String::with_capacity(source.len());
    let mut rewritten = 0usize;
    let mut last = 0usize;

    for span in spans {
        // Overlap can't happen for distinct needles ending in `="`, but a
        // sorted left-to-right walk keeps the guarantee cheap to hold.
        if span.start < last {
            continue;
        }
        out.push_str(&source[last..span.start]);
        out.push_str(&attr_expr(&source[span.value_start..span.value_end]));
        last = span.value_end + 1; // past the closing quote
        rewritten += 1;
    }
    out.push_str(&source[last..]);

    Rewrite { text: out, rewritten }
}

/// One `attr="value"` occurrence. `start` is the beginning of the attribute
/// name; the span replaced runs from `start` through the closing quote.
struct Span {
    start: usize,
    value_start: usize,
    value_end: usize,
}

/// Collect match spans for every attribute needle. A needle hit with no
/// closing quote before EOF is not a match; everything after it stays as-is.
fn find_spans(source: &str, attrs: &[&str]) -> Vec<Span> {
    let bytes = source.as_bytes();
    let mut spans = Vec::new();

    for attr in attrs {
        let needle = format!("{attr}=\"");
        let finder = memmem::Finder::new(needle.as_bytes());
        for start in finder.find_iter(bytes) {
            let value_start = start + needle.len();
            let Some(rel) = memchr(b'"', &bytes[value_start..]) else {
                break; // unterminated: no further match for this needle
            };
            spans.push(Span {
                start,
                value_start,
                value_end: value_start + rel,
            });
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_match_is_identity() {
        let src = "<div id=\"x\">no class attributes here</div>";
        assert_eq!(rewrite(src), src);
        assert_eq!(rewrite(""), "");
    }

    #[test]
    fn single_token() {
        assert_eq!(rewrite("className=\"foo\""), "className={ styles.foo }");
    }

    #[test]
    fn hyphenated_token() {
        assert_eq!(
            rewrite("className=\"foo-bar\""),
            "className={ styles[\"foo-bar\"] }"
        );
    }

    #[test]
    fn multi_token() {
        assert_eq!(
            rewrite("className=\"foo bar-baz\""),
            "className={ `${styles.foo} ${styles[\"bar-baz\"]}` }"
        );
    }

    #[test]
    fn whitespace_collapsing() {
        assert_eq!(
            rewrite("className=\"foo  bar\""),
            "className={ `${styles.foo} ${styles.bar}` }"
        );
    }

    #[test]
    fn surrounding_text_and_order_preserved() {
        let src = "<p className=\"a\"><div><p className=\"b-c\">";
        assert_eq!(
            rewrite(src),
            "<p className={ styles.a }><div><p className={ styles[\"b-c\"] }>"
        );
    }

    #[test]
    fn empty_value_fallback() {
        assert_eq!(rewrite("className=\"\""), "className={ \"\" }");
    }

    #[test]
    fn second_pass_is_noop() {
        let once = rewrite("<p className=\"foo bar-baz\">x</p>");
        assert_eq!(rewrite(&once), once);
    }

    #[test]
    fn unterminated_value_left_alone() {
        let src = "before className=\"never closed";
        assert_eq!(rewrite(src), src);
    }

    #[test]
    fn match_after_unterminated_handled() {
        // first occurrence is fine, trailing unterminated one is kept
        let src = "className=\"a\" className=\"open";
        assert_eq!(rewrite(src), "className={ styles.a } className=\"open");
    }

    #[test]
    fn class_attr_opt_in() {
        let r = rewrite_attrs("<p class=\"foo-bar\">", &["className", "class"]);
        assert_eq!(r.text, "<p className={ styles[\"foo-bar\"] }>");
        assert_eq!(r.rewritten, 1);

        // default scan does not touch plain class=
        let src = "<p class=\"foo\">";
        assert_eq!(rewrite(src), src);
    }

    #[test]
    fn rewrite_count() {
        let r = rewrite_attrs("className=\"a\" className=\"b\"", &[DEFAULT_ATTR]);
        assert_eq!(r.rewritten, 2);
        assert_eq!(r.text, "className={ styles.a } className={ styles.b }");
    }

    #[test]
    fn utf8_surroundings_untouched() {
        let src = "héllo — className=\"foo\" — wörld";
        assert_eq!(rewrite(src), "héllo — className={ styles.foo } — wörld");
    }
}
