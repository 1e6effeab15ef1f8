//! Segments of the rendered route tree.
//!
//! A segment is what one level of the tree rendered: the root, a literal
//! path component or route group, a parameterized component, or the page
//! marker that terminates a branch. Segments are plain data; turning a
//! chain of them into a canonical route is the matcher's job.

pub mod kind;

pub use kind::{DynamicKind, ParseKindError};

/// Wire name of the page marker segment.
pub const PAGE_SEGMENT: &str = "__PAGE__";

/// Wire name of the root segment (the empty string).
pub const ROOT_SEGMENT: &str = "";

/// Name of the route group the renderer injects directly beneath a named
/// slot. It is elided from canonical routes in exactly that position; the
/// same name anywhere else is user-authored and kept.
pub const SYNTHETIC_SLOT_GROUP: &str = "(slot)";

/// One segment of the rendered route tree.
///
/// # Examples
///
/// ```
/// use routescope::{DynamicKind, Segment};
///
/// // Literal components and route groups share a shape
/// assert_eq!(Segment::literal("blog").canonical_token(), Some("blog".to_string()));
/// assert_eq!(Segment::literal("(shop)").canonical_token(), Some("(shop)".to_string()));
///
/// // Dynamic segments render their kind's bracket token
/// let seg = Segment::dynamic("slug", "my-post", DynamicKind::Dynamic);
/// assert_eq!(seg.canonical_token(), Some("[slug]".to_string()));
///
/// // Root and page contribute nothing
/// assert_eq!(Segment::Root.canonical_token(), None);
/// assert_eq!(Segment::Page.canonical_token(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// The empty top-level segment. Contributes no token to canonical routes.
    Root,
    /// A literal path component, or a route group like `(marketing)`.
    /// Both pass through to canonical routes verbatim.
    Static(String),
    /// A parameterized segment together with the URL value it bound when
    /// the tree was rendered.
    Dynamic(DynamicSegment),
    /// Terminal page marker. The URL the page settled on lives on the
    /// owning [`RouteNode`](crate::RouteNode), not here.
    Page,
}

/// A dynamic segment: parameter name, bound value, and kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicSegment {
    /// Parameter name; appears inside the canonical token (`[name]`).
    pub param: String,
    /// Concrete value the parameter bound during rendering; never part of
    /// the canonical route.
    pub value: String,
    /// Which of the eleven dynamic kinds this segment is.
    pub kind: DynamicKind,
}

impl Segment {
    /// Builds a literal segment (path component or route group).
    pub fn literal(name: impl Into<String>) -> Self {
        Segment::Static(name.into())
    }

    /// Builds a dynamic segment.
    pub fn dynamic(
        param: impl Into<String>,
        value: impl Into<String>,
        kind: DynamicKind,
    ) -> Self {
        Segment::Dynamic(DynamicSegment {
            param: param.into(),
            value: value.into(),
            kind,
        })
    }

    /// Renders the canonical token this segment contributes to a route
    /// (pure function).
    ///
    /// `Root` and `Page` contribute none. `Static` passes its name through
    /// verbatim, route groups included. `Dynamic` delegates to
    /// [`DynamicKind::canonical_token`].
    pub fn canonical_token(&self) -> Option<String> {
        match self {
            Segment::Root | Segment::Page => None,
            Segment::Static(name) => Some(name.clone()),
            Segment::Dynamic(dynamic) => Some(dynamic.kind.canonical_token(&dynamic.param)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intercept::InterceptDepth;

    #[test]
    fn test_literal_token_passes_through() {
        assert_eq!(
            Segment::literal("pricing").canonical_token(),
            Some("pricing".to_string())
        );
    }

    #[test]
    fn test_route_group_token_is_kept_verbatim() {
        assert_eq!(
            Segment::literal("(auth)").canonical_token(),
            Some("(auth)".to_string())
        );
    }

    #[test]
    fn test_dynamic_token_uses_param_not_value() {
        let seg = Segment::dynamic("id", "123", DynamicKind::Dynamic);
        assert_eq!(seg.canonical_token(), Some("[id]".to_string()));
    }

    #[test]
    fn test_intercepted_token_keeps_marker() {
        let seg = Segment::dynamic(
            "photo",
            "42",
            DynamicKind::InterceptedDynamic(InterceptDepth::TwoLevelsUp),
        );
        assert_eq!(seg.canonical_token(), Some("(..)(..)[photo]".to_string()));
    }

    #[test]
    fn test_root_and_page_contribute_nothing() {
        assert_eq!(Segment::Root.canonical_token(), None);
        assert_eq!(Segment::Page.canonical_token(), None);
    }
}
