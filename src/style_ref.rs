// src/style_ref.rs
//! Style Reference formatting: one class token → one lookup expression on the
//! module-scoped `styles` object, plus assembly of the whole attribute
//! expression from a raw attribute value.

use std::fmt;

/// How a single class token is referenced on the `styles` object.
/// Hyphens are not valid in JS identifiers, so hyphenated tokens go through
/// index syntax instead of dotted access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleRef<'a> {
    /// `styles.token`
    Dotted(&'a str),
    /// `styles["token"]`
    Indexed(&'a str),
}

impl fmt::Display for StyleRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleRef::Dotted(t) => write!(f, "styles.{t}"),
            StyleRef::Indexed(t) => write!(f, "styles[\"{t}\"]"),
        }
    }
}

/// Classify one class token. Pure, no validation beyond the hyphen check:
/// the scan is textual and tokens are passed through as-is.
pub fn style_ref(token: &str) -> StyleRef<'_> {
    if token.contains('-') {
        StyleRef::Indexed(token)
    } else {
        StyleRef::Dotted(token)
    }
}

/// Assemble the full replacement text for one matched attribute value.
///
/// `split_whitespace` collapses runs of ASCII (and Unicode) whitespace, so
/// repeated separators never yield empty tokens. Repeated class names are
/// kept as written; deduplication is not this tool's business.
///
/// - zero tokens  → `className={ "" }` (fallback for `className=""`)
/// - one token    → `className={ styles.foo }`
/// - two or more  → `` className={ `${styles.foo} ${styles["bar-baz"]}` } ``
pub fn attr_expr(value: &str) -> String {
    let refs: Vec<String> = value
        .split_whitespace()
        .map(|t| style_ref(t).to_string())
        .collect();

    match refs.as_slice() {
        [] => "className={ \"\" }".to_string(),
        [single] => format!("className={{ {single} }}"),
        many => {
            let interpolated: Vec<String> =
                many.iter().map(|r| format!("${{{r}}}")).collect();
            format!("className={{ `{}` }}", interpolated.join(" "))
        }
    }
}
