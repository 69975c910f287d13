//! Shortcode syntax validation.
//!
//! Every caller-supplied key passes through here before it reaches the
//! store, on write, read, and delete paths alike.

/// Returns `true` iff `code` is a usable shortcode: non-empty and made of
/// ASCII letters, digits, underscores, or hyphens only.
pub fn is_valid(code: &str) -> bool {
    !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
