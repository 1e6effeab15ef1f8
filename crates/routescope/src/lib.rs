//! # Routescope
//!
//! Canonical-route extraction for nested-layout route trees: given the
//! pathname a page rendered at and the tree of segments that rendered it,
//! recover the file-system route that produced it. Supports:
//! - Static segments and route groups (`/blog`, `(marketing)`)
//! - Dynamic parameters (`[slug]`), catch-alls (`[...slug]`), optional
//!   catch-alls (`[[...slug]]`)
//! - Intercepted dynamics and catch-alls at all four marker depths
//!   (`(.)`, `(..)`, `(..)(..)`, `(...)`)
//! - Named parallel slots with `@name` markers and their injected
//!   `(slot)` groups
//!
//! ## Functional Programming Approach
//!
//! Extraction is a pure depth-first fold over the tree:
//! - **No shared state**: an owned trail accumulator is cloned per branch
//! - **Functional composition** with `find_map()` across sibling slots
//! - **Absence as the only failure**: every question answers in `Option`,
//!   nothing panics
//! - **Zero-copy normalization** with `Cow<'_, str>` for caller-side
//!   pathname cleanup
//!
//! ## Match Priority
//!
//! - The primary `children` slot strictly dominates named slots
//! - Named slots are tried in declaration order, first hit wins
//! - A page leaf settles a branch iff it was rendered for the target
//!   pathname, or has no URL committed yet
//!
//! ## Example
//!
//! ```
//! use routescope::{extract_route, DynamicKind, RouteNode, Segment};
//!
//! // "" → blog → [slug] → __PAGE__ rendered for /blog/my-post
//! let tree = RouteNode::root().with_child(
//!     RouteNode::new(Segment::literal("blog")).with_child(
//!         RouteNode::new(Segment::dynamic("slug", "my-post", DynamicKind::Dynamic))
//!             .with_child(RouteNode::page("/blog/my-post")),
//!     ),
//! );
//!
//! assert_eq!(extract_route("/blog/my-post", &tree), Some("/blog/[slug]".to_string()));
//! ```
//!
//! Trees usually arrive over the wire rather than hand-built; the same
//! tree decodes from the renderer's compact array encoding:
//!
//! ```
//! use routescope::{extract_route, RouteNode};
//!
//! let tree: RouteNode = serde_json::from_str(
//!     r#"["", {"children": ["blog", {"children": [["slug", "my-post", "d"], {"children": ["__PAGE__", {}, "/blog/my-post"]}]}]}]"#,
//! ).unwrap();
//!
//! assert_eq!(extract_route("/blog/my-post", &tree), Some("/blog/[slug]".to_string()));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod intercept;
mod matcher;
pub mod path;
pub mod segment;
mod tree;
mod wire;

// Re-export the public surface at the crate root
pub use intercept::InterceptDepth;
pub use matcher::{extract_route, extract_route_match, RouteMatch};
pub use path::{is_valid_path, normalize_path};
pub use segment::{DynamicKind, DynamicSegment, ParseKindError, Segment};
pub use tree::{RouteNode, PRIMARY_SLOT};
