//! Canonical-route extraction.
//!
//! Depth-first search over the rendered route tree: walk every branch the
//! tree declares, collect the canonical token each segment contributes,
//! and settle on the first branch whose page leaf accounts for the target
//! pathname. All of it is **pure**: same tree + same target → same answer,
//! no shared state, and absence (`None`) is the only failure signal.

use indexmap::IndexMap;

use crate::segment::{Segment, SYNTHETIC_SLOT_GROUP};
use crate::tree::RouteNode;

/// Prefix marking a named parallel slot inside a canonical route (`@modal`).
const SLOT_MARKER: char = '@';

/// A successful extraction: the canonical route plus the parameter values
/// the matched branch bound while rendering.
///
/// # Examples
///
/// ```
/// use routescope::{extract_route_match, DynamicKind, RouteNode, Segment};
///
/// let tree = RouteNode::root().with_child(
///     RouteNode::new(Segment::literal("blog")).with_child(
///         RouteNode::new(Segment::dynamic("slug", "my-post", DynamicKind::Dynamic))
///             .with_child(RouteNode::page("/blog/my-post")),
///     ),
/// );
///
/// let matched = extract_route_match("/blog/my-post", &tree).unwrap();
/// assert_eq!(matched.route, "/blog/[slug]");
/// assert_eq!(matched.params.get("slug").map(String::as_str), Some("my-post"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Canonical file-system route, e.g. `/blog/[slug]`.
    pub route: String,
    /// Parameters bound along the matched branch, outermost first.
    pub params: IndexMap<String, String>,
}

/// Accumulator carried down one branch of the search.
///
/// Owned and cloned at every fork, so sibling branches can never observe
/// each other's tokens (move semantics instead of backtracking mutation).
#[derive(Debug, Clone, Default)]
struct Trail {
    tokens: Vec<String>,
    params: Vec<(String, String)>,
}

impl Trail {
    /// Appends a canonical token (consuming builder).
    fn with_token(mut self, token: String) -> Self {
        self.tokens.push(token);
        self
    }

    /// Records a parameter binding (consuming builder).
    fn with_param(mut self, param: &str, value: &str) -> Self {
        self.params.push((param.to_string(), value.to_string()));
        self
    }

    /// The token most recently appended, if any.
    fn last_token(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    /// Renders the finished branch: `/` + tokens joined by `/`.
    ///
    /// An empty trail renders as `/`, the canonical route of a bare root
    /// page.
    fn into_match(self) -> RouteMatch {
        RouteMatch {
            route: format!("/{}", self.tokens.join("/")),
            params: self.params.into_iter().collect(),
        }
    }
}

/// Extracts the canonical file-system route that rendered `target`.
///
/// Walks `tree` depth-first. At every node the primary `children` slot is
/// tried before any named slot, and named slots are tried in declaration
/// order; the first page leaf that settled on `target` (or that has no URL
/// committed yet) wins. Returns `None` when no branch accounts for the
/// target. No tree shape makes this panic.
///
/// # Examples
///
/// ```
/// use routescope::{extract_route, DynamicKind, RouteNode, Segment};
///
/// let tree = RouteNode::root().with_child(
///     RouteNode::new(Segment::literal("blog")).with_child(
///         RouteNode::new(Segment::dynamic("slug", "my-post", DynamicKind::Dynamic))
///             .with_child(RouteNode::page("/blog/my-post")),
///     ),
/// );
///
/// assert_eq!(extract_route("/blog/my-post", &tree), Some("/blog/[slug]".to_string()));
/// assert_eq!(extract_route("/blog/other", &tree), None);
/// ```
///
/// # Performance
///
/// - O(n) over the nodes of the tree in the worst (no-match) case
/// - Allocates only the token strings of branches actually walked
pub fn extract_route(target: &str, tree: &RouteNode) -> Option<String> {
    extract_route_match(target, tree).map(|matched| matched.route)
}

/// Extracts the canonical route together with its parameter bindings.
///
/// Same search as [`extract_route`]; use this variant when the caller also
/// wants the concrete values the dynamic segments bound.
pub fn extract_route_match(target: &str, tree: &RouteNode) -> Option<RouteMatch> {
    let matched = visit(tree, target, Trail::default());
    match &matched {
        Some(found) => tracing::debug!("extracted {} for target {}", found.route, target),
        None => tracing::trace!("no canonical route for target {}", target),
    }
    matched
}

/// Visits one node: folds its segment's token into the trail, then either
/// settles (page leaf) or descends into the slots.
fn visit(node: &RouteNode, target: &str, trail: Trail) -> Option<RouteMatch> {
    tracing::trace!("visiting {:?} with {} tokens", node.segment, trail.tokens.len());

    match &node.segment {
        // Root: contributes no token
        Segment::Root => descend(node, target, trail),

        // Page leaf: settles the branch iff it was rendered for the target,
        // or is still in flight (no URL committed yet)
        Segment::Page => match &node.url {
            None => Some(trail.into_match()),
            Some(url) if url == target => Some(trail.into_match()),
            Some(_) => None,
        },

        // Literal or route group: kept verbatim, except the synthetic
        // group injected directly beneath a named slot
        Segment::Static(name) => {
            let next = if is_synthetic_slot_group(trail.last_token(), name) {
                trail
            } else {
                trail.with_token(name.clone())
            };
            descend(node, target, next)
        }

        // Dynamic segment: contributes its bracket token and binds a param
        Segment::Dynamic(dynamic) => {
            let next = trail
                .with_token(dynamic.kind.canonical_token(&dynamic.param))
                .with_param(&dynamic.param, &dynamic.value);
            descend(node, target, next)
        }
    }
}

/// Descends into a node's slots: the primary slot strictly first, then the
/// named slots in declaration order, each behind its `@name` marker. The
/// first branch to settle wins; a failed branch just falls through to the
/// next sibling.
fn descend(node: &RouteNode, target: &str, trail: Trail) -> Option<RouteMatch> {
    if let Some(primary) = node.primary() {
        if let Some(matched) = visit(primary, target, trail.clone()) {
            return Some(matched);
        }
    }

    node.named_slots().find_map(|(slot, child)| {
        let marked = trail.clone().with_token(format!("{}{}", SLOT_MARKER, slot));
        visit(child, target, marked)
    })
}

/// Positional test for the renderer-injected `(slot)` group: synthetic
/// exactly when the step straight before it was a named-slot marker. The
/// same group name anywhere else is user-authored and stays in the route.
fn is_synthetic_slot_group(previous_token: Option<&str>, name: &str) -> bool {
    name == SYNTHETIC_SLOT_GROUP
        && previous_token
            .map(|previous| previous.starts_with(SLOT_MARKER))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_trail_renders_bare_slash() {
        let matched = Trail::default().into_match();
        assert_eq!(matched.route, "/");
        assert!(matched.params.is_empty());
    }

    #[test]
    fn test_trail_joins_tokens_in_order() {
        let matched = Trail::default()
            .with_token("blog".to_string())
            .with_token("[slug]".to_string())
            .into_match();
        assert_eq!(matched.route, "/blog/[slug]");
    }

    #[test]
    fn test_trail_collects_params_outermost_first() {
        let matched = Trail::default()
            .with_param("category", "electronics")
            .with_param("item", "laptop")
            .into_match();
        let params: Vec<(&str, &str)> = matched
            .params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(params, [("category", "electronics"), ("item", "laptop")]);
    }

    #[test]
    fn test_synthetic_group_detection_is_positional() {
        // Only "(slot)" straight after an @marker token is synthetic
        assert!(is_synthetic_slot_group(Some("@modal"), "(slot)"));
        assert!(!is_synthetic_slot_group(Some("gallery"), "(slot)"));
        assert!(!is_synthetic_slot_group(None, "(slot)"));
        assert!(!is_synthetic_slot_group(Some("@modal"), "(group)"));
    }
}
