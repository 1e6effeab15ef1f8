//! The rendered route tree.
//!
//! A [`RouteNode`] couples the segment a level rendered with its parallel
//! children and, on settled page leaves, the URL the page was rendered
//! for. The renderer produces one such tree per committed navigation;
//! this crate only ever reads it.

use indexmap::IndexMap;

use crate::segment::Segment;

/// Name of the reserved primary slot.
///
/// When both the primary slot and named parallel slots could satisfy a
/// lookup, the primary slot always wins; among named slots, declaration
/// order decides.
pub const PRIMARY_SLOT: &str = "children";

/// One node of the active rendering hierarchy.
///
/// Children live in an insertion-ordered map keyed by slot name. The
/// `"children"` key is the primary slot; every other key is a named
/// parallel slot and contributes an `@name` marker to canonical routes.
///
/// # Examples
///
/// ```
/// use routescope::{extract_route, RouteNode, Segment};
///
/// // "" → about → __PAGE__ rendered for /about
/// let tree = RouteNode::root().with_child(
///     RouteNode::new(Segment::literal("about")).with_child(RouteNode::page("/about")),
/// );
///
/// assert_eq!(extract_route("/about", &tree), Some("/about".to_string()));
/// assert_eq!(extract_route("/missing", &tree), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNode {
    /// The segment rendered at this node.
    pub segment: Segment,
    /// Parallel children keyed by slot name, in declaration order.
    pub parallel_routes: IndexMap<String, RouteNode>,
    /// URL a settled page leaf was rendered for. `None` on interior nodes
    /// and on a page leaf whose navigation has not committed a URL yet.
    pub url: Option<String>,
}

impl RouteNode {
    /// Creates a node with no children and no URL.
    pub fn new(segment: Segment) -> Self {
        RouteNode {
            segment,
            parallel_routes: IndexMap::new(),
            url: None,
        }
    }

    /// Creates the empty root segment node a tree hangs from.
    pub fn root() -> Self {
        RouteNode::new(Segment::Root)
    }

    /// Creates a settled page leaf rendered for `url`.
    pub fn page(url: impl Into<String>) -> Self {
        RouteNode {
            segment: Segment::Page,
            parallel_routes: IndexMap::new(),
            url: Some(url.into()),
        }
    }

    /// Creates a page leaf whose navigation is still in flight, so no URL
    /// has been committed. Such a leaf matches any target.
    pub fn pending_page() -> Self {
        RouteNode::new(Segment::Page)
    }

    /// Adds a child under the primary `children` slot (consuming builder).
    pub fn with_child(self, child: RouteNode) -> Self {
        self.with_slot(PRIMARY_SLOT, child)
    }

    /// Adds a child under a named slot (consuming builder).
    ///
    /// Slots keep insertion order; when several named slots could satisfy
    /// the same lookup, the earliest added wins.
    pub fn with_slot(mut self, slot: impl Into<String>, child: RouteNode) -> Self {
        self.parallel_routes.insert(slot.into(), child);
        self
    }

    /// Returns the primary (`children`) child, if any.
    pub fn primary(&self) -> Option<&RouteNode> {
        self.parallel_routes.get(PRIMARY_SLOT)
    }

    /// Iterates the named (non-primary) slots in declaration order.
    pub fn named_slots(&self) -> impl Iterator<Item = (&str, &RouteNode)> {
        self.parallel_routes
            .iter()
            .filter(|(slot, _)| slot.as_str() != PRIMARY_SLOT)
            .map(|(slot, child)| (slot.as_str(), child))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_slot_keeps_declaration_order() {
        let node = RouteNode::root()
            .with_slot("modal", RouteNode::pending_page())
            .with_child(RouteNode::pending_page())
            .with_slot("sidebar", RouteNode::pending_page());

        let slots: Vec<&String> = node.parallel_routes.keys().collect();
        assert_eq!(slots, ["modal", "children", "sidebar"]);
    }

    #[test]
    fn test_primary_finds_children_slot_only() {
        let with_primary = RouteNode::root().with_child(RouteNode::pending_page());
        assert!(with_primary.primary().is_some());

        let named_only = RouteNode::root().with_slot("modal", RouteNode::pending_page());
        assert!(named_only.primary().is_none());
    }

    #[test]
    fn test_named_slots_skip_primary() {
        let node = RouteNode::root()
            .with_child(RouteNode::pending_page())
            .with_slot("a", RouteNode::pending_page())
            .with_slot("b", RouteNode::pending_page());

        let names: Vec<&str> = node.named_slots().map(|(slot, _)| slot).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_page_leaf_carries_url() {
        assert_eq!(RouteNode::page("/x").url.as_deref(), Some("/x"));
        assert_eq!(RouteNode::pending_page().url, None);
    }
}
