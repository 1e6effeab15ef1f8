//! Pathname helpers for callers of the extractor.
//!
//! Extraction compares target pathnames against settled leaf URLs
//! verbatim, so a target should be in canonical form before it is handed
//! over. Both helpers are **pure**: same input → same output, no side
//! effects.

use std::borrow::Cow;

/// Tells whether a pathname is already in canonical form (pure predicate).
///
/// # Rules
///
/// - Starts with `/`
/// - No `//` runs and no `\`
/// - No trailing `/` (the root `/` being the one exception)
/// - Not empty
///
/// # Examples
///
/// ```
/// use routescope::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/gallery/123"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("gallery")); // Missing leading /
/// assert!(!is_valid_path("/gallery/")); // Trailing /
/// assert!(!is_valid_path("/gallery//123")); // Double //
/// assert!(!is_valid_path("/gallery\\123")); // Backslash
/// ```
pub fn is_valid_path(path: &str) -> bool {
    match path {
        "" => false,
        "/" => true,
        _ => {
            path.starts_with('/')
                && !path.ends_with('/')
                && !path.contains("//")
                && !path.contains('\\')
        }
    }
}

/// Brings a pathname to canonical form.
///
/// **Pure function** with a zero-copy fast path: already-canonical input
/// comes back as `Cow::Borrowed`, anything else costs one allocation.
///
/// Collapses `//` runs, turns `\` into `/`, strips the trailing slash,
/// and folds a fully empty input down to `/`.
///
/// # Examples
///
/// ```
/// use routescope::normalize_path;
/// use std::borrow::Cow;
///
/// // Canonical input: borrowed straight through
/// assert!(matches!(normalize_path("/blog/my-post"), Cow::Borrowed(_)));
///
/// // Everything else is repaired
/// assert_eq!(normalize_path("/blog/my-post/"), "/blog/my-post");
/// assert_eq!(normalize_path("/blog//my-post"), "/blog/my-post");
/// assert_eq!(normalize_path("\\blog\\my-post"), "/blog/my-post");
/// assert_eq!(normalize_path(""), "/");
/// ```
///
/// # Performance
///
/// - O(n) over the pathname
/// - Zero allocations on the fast path, one on the slow path
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    // replace → split → filter → join pipeline
    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_path() {
        assert!(is_valid_path("/"));
        assert!(is_valid_path("/about"));
        assert!(is_valid_path("/gallery/123"));
        assert!(is_valid_path("/blog/posts/hello-world"));

        assert!(!is_valid_path(""));
        assert!(!is_valid_path("about"));
        assert!(!is_valid_path("/about/"));
        assert!(!is_valid_path("/about//page"));
        assert!(!is_valid_path("/about\\page"));
    }

    #[test]
    fn test_normalize_keeps_canonical_input_borrowed() {
        assert!(matches!(normalize_path("/gallery"), Cow::Borrowed("/gallery")));
        assert!(matches!(normalize_path("/"), Cow::Borrowed("/")));
    }

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(normalize_path("/gallery/"), "/gallery");
        assert_eq!(normalize_path("/gallery/123/"), "/gallery/123");
    }

    #[test]
    fn test_normalize_collapses_slash_runs() {
        assert_eq!(normalize_path("/blog//post"), "/blog/post");
        assert_eq!(normalize_path("/a///b////c"), "/a/b/c");
    }

    #[test]
    fn test_normalize_converts_backslashes() {
        assert_eq!(normalize_path("\\gallery"), "/gallery");
        assert_eq!(normalize_path("\\blog\\post"), "/blog/post");
    }

    #[test]
    fn test_normalize_empty_input_is_root() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("///"), "/");
    }
}
