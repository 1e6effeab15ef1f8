//! Wire encoding of the rendered route tree.
//!
//! The renderer ships its tree in a compact shape: a segment is either a
//! bare string (`""` for the root, `"__PAGE__"` for the page marker,
//! anything else literal) or a `[param, value, kind]` triple; a node is a
//! `[segment, parallelRoutes, url]` array whose trailing elements may be
//! omitted. Slot order inside `parallelRoutes` objects is declaration
//! order and survives both directions.
//!
//! ```
//! use routescope::{extract_route, RouteNode};
//!
//! let tree: RouteNode = serde_json::from_str(
//!     r#"["", {"children": ["__PAGE__", {}, "/"]}]"#,
//! ).unwrap();
//!
//! assert_eq!(extract_route("/", &tree), Some("/".to_string()));
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::segment::{DynamicSegment, Segment, PAGE_SEGMENT, ROOT_SEGMENT};
use crate::tree::RouteNode;

impl Serialize for Segment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Segment::Root => serializer.serialize_str(ROOT_SEGMENT),
            Segment::Page => serializer.serialize_str(PAGE_SEGMENT),
            Segment::Static(name) => serializer.serialize_str(name),
            Segment::Dynamic(dynamic) => {
                let mut seq = serializer.serialize_seq(Some(3))?;
                seq.serialize_element(&dynamic.param)?;
                seq.serialize_element(&dynamic.value)?;
                seq.serialize_element(dynamic.kind.tag())?;
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Segment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SegmentVisitor;

        impl<'de> Visitor<'de> for SegmentVisitor {
            type Value = Segment;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a segment string or a [param, value, kind] triple")
            }

            fn visit_str<E>(self, value: &str) -> Result<Segment, E>
            where
                E: de::Error,
            {
                Ok(match value {
                    ROOT_SEGMENT => Segment::Root,
                    PAGE_SEGMENT => Segment::Page,
                    name => Segment::Static(name.to_string()),
                })
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Segment, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let param: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let value: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let tag: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(2, &self))?;

                let kind = tag.parse().map_err(de::Error::custom)?;
                Ok(Segment::Dynamic(DynamicSegment { param, value, kind }))
            }
        }

        deserializer.deserialize_any(SegmentVisitor)
    }
}

impl Serialize for RouteNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // The url slot is dropped entirely when no URL has been committed
        let len = if self.url.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.segment)?;
        seq.serialize_element(&self.parallel_routes)?;
        if let Some(url) = &self.url {
            seq.serialize_element(url)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for RouteNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NodeVisitor;

        impl<'de> Visitor<'de> for NodeVisitor {
            type Value = RouteNode;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a [segment, parallelRoutes, url] node array")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<RouteNode, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let segment: Segment = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;

                // Trailing elements are optional: a missing map means no
                // children, and a missing or null url means none committed
                let parallel_routes: IndexMap<String, RouteNode> =
                    seq.next_element()?.unwrap_or_default();
                let url: Option<String> = seq.next_element()?.unwrap_or(None);

                Ok(RouteNode {
                    segment,
                    parallel_routes,
                    url,
                })
            }
        }

        deserializer.deserialize_seq(NodeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::segment::Segment;
    use crate::tree::RouteNode;

    #[test]
    fn test_serialize_omits_uncommitted_url() {
        let json = serde_json::to_string(&RouteNode::pending_page()).unwrap();
        assert_eq!(json, r#"["__PAGE__",{}]"#);
    }

    #[test]
    fn test_serialize_keeps_committed_url() {
        let json = serde_json::to_string(&RouteNode::page("/about")).unwrap();
        assert_eq!(json, r#"["__PAGE__",{},"/about"]"#);
    }

    #[test]
    fn test_empty_string_decodes_as_root() {
        let segment: Segment = serde_json::from_str(r#""""#).unwrap();
        assert_eq!(segment, Segment::Root);
    }

    #[test]
    fn test_page_marker_is_matched_exactly() {
        let segment: Segment = serde_json::from_str(r#""__page__""#).unwrap();
        assert_eq!(segment, Segment::Static("__page__".to_string()));
    }
}
