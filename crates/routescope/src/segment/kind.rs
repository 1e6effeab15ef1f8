//! Dynamic segment kinds and their canonical bracket tokens.
//!
//! Pure functional mapping between the three faces of a dynamic segment
//! kind: the typed [`DynamicKind`] used throughout this crate, the short
//! wire tag (`"d"`, `"c"`, `"oc"`, `"di(.)"`, `"ci(..)(..)"`, ...) carried
//! by serialized trees, and the canonical file-system token (`[id]`,
//! `[...slug]`, `(.)[id]`, ...) rendered into extracted routes.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::intercept::InterceptDepth;

/// Error returned when a wire tag names no known dynamic segment kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dynamic segment kind tag `{0}`")]
pub struct ParseKindError(pub String);

/// The kind of a dynamic (parameterized) segment.
///
/// Eleven kinds exist: three plain ones and eight interception variants
/// (four depths for each of dynamic and catch-all). There is deliberately
/// no intercepted optional-catch-all: the upstream segment model never
/// produces one, and the enum keeps that combination unrepresentable.
///
/// # Examples
///
/// ```
/// use routescope::{DynamicKind, InterceptDepth};
///
/// assert_eq!(DynamicKind::Dynamic.canonical_token("id"), "[id]");
/// assert_eq!(DynamicKind::CatchAll.canonical_token("slug"), "[...slug]");
/// assert_eq!(DynamicKind::OptionalCatchAll.canonical_token("slug"), "[[...slug]]");
/// assert_eq!(
///     DynamicKind::InterceptedDynamic(InterceptDepth::SameLevel).canonical_token("id"),
///     "(.)[id]",
/// );
/// assert_eq!(
///     DynamicKind::InterceptedCatchAll(InterceptDepth::FromRoot).canonical_token("rest"),
///     "(...)[...rest]",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicKind {
    /// `[param]` - matches exactly one path component (tag `d`)
    Dynamic,
    /// `[...param]` - matches one or more path components (tag `c`)
    CatchAll,
    /// `[[...param]]` - matches zero or more path components (tag `oc`)
    OptionalCatchAll,
    /// `(marker)[param]` - dynamic segment behind an interception marker
    /// (tags `di(.)`, `di(..)`, `di(..)(..)`, `di(...)`)
    InterceptedDynamic(InterceptDepth),
    /// `(marker)[...param]` - catch-all behind an interception marker
    /// (tags `ci(.)`, `ci(..)`, `ci(..)(..)`, `ci(...)`)
    InterceptedCatchAll(InterceptDepth),
}

impl DynamicKind {
    /// Renders the canonical file-system token for this kind (pure function).
    ///
    /// Total over all eleven kinds: extraction can never hit an "unknown
    /// kind" hole at this level.
    ///
    /// # Performance
    ///
    /// - O(n) where n is the parameter name length
    /// - Single allocation per token
    pub fn canonical_token(&self, param: &str) -> String {
        match self {
            DynamicKind::Dynamic => format!("[{}]", param),
            DynamicKind::CatchAll => format!("[...{}]", param),
            DynamicKind::OptionalCatchAll => format!("[[...{}]]", param),
            DynamicKind::InterceptedDynamic(depth) => format!("{}[{}]", depth.marker(), param),
            DynamicKind::InterceptedCatchAll(depth) => {
                format!("{}[...{}]", depth.marker(), param)
            }
        }
    }

    /// Returns the wire tag for this kind.
    ///
    /// # Tag Vocabulary
    ///
    /// - `d` → **Dynamic**
    /// - `c` → **CatchAll**
    /// - `oc` → **OptionalCatchAll**
    /// - `di` + marker → **InterceptedDynamic** (`di(.)`, `di(..)`, `di(..)(..)`, `di(...)`)
    /// - `ci` + marker → **InterceptedCatchAll** (`ci(.)`, `ci(..)`, `ci(..)(..)`, `ci(...)`)
    pub fn tag(&self) -> &'static str {
        match self {
            DynamicKind::Dynamic => "d",
            DynamicKind::CatchAll => "c",
            DynamicKind::OptionalCatchAll => "oc",
            DynamicKind::InterceptedDynamic(InterceptDepth::SameLevel) => "di(.)",
            DynamicKind::InterceptedDynamic(InterceptDepth::OneLevelUp) => "di(..)",
            DynamicKind::InterceptedDynamic(InterceptDepth::TwoLevelsUp) => "di(..)(..)",
            DynamicKind::InterceptedDynamic(InterceptDepth::FromRoot) => "di(...)",
            DynamicKind::InterceptedCatchAll(InterceptDepth::SameLevel) => "ci(.)",
            DynamicKind::InterceptedCatchAll(InterceptDepth::OneLevelUp) => "ci(..)",
            DynamicKind::InterceptedCatchAll(InterceptDepth::TwoLevelsUp) => "ci(..)(..)",
            DynamicKind::InterceptedCatchAll(InterceptDepth::FromRoot) => "ci(...)",
        }
    }
}

impl fmt::Display for DynamicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DynamicKind {
    type Err = ParseKindError;

    /// Parses a wire tag back into a kind.
    ///
    /// Interception tags are `di`/`ci` followed by exactly one of the four
    /// markers; anything else (including the never-defined `oci...` family)
    /// is rejected.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "d" => Ok(DynamicKind::Dynamic),
            "c" => Ok(DynamicKind::CatchAll),
            "oc" => Ok(DynamicKind::OptionalCatchAll),
            _ => tag
                .strip_prefix("di")
                .and_then(InterceptDepth::from_marker)
                .map(DynamicKind::InterceptedDynamic)
                .or_else(|| {
                    tag.strip_prefix("ci")
                        .and_then(InterceptDepth::from_marker)
                        .map(DynamicKind::InterceptedCatchAll)
                })
                .ok_or_else(|| ParseKindError(tag.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(DynamicKind::Dynamic, "d", "[p]")]
    #[case(DynamicKind::CatchAll, "c", "[...p]")]
    #[case(DynamicKind::OptionalCatchAll, "oc", "[[...p]]")]
    #[case(DynamicKind::InterceptedDynamic(InterceptDepth::SameLevel), "di(.)", "(.)[p]")]
    #[case(DynamicKind::InterceptedDynamic(InterceptDepth::OneLevelUp), "di(..)", "(..)[p]")]
    #[case(
        DynamicKind::InterceptedDynamic(InterceptDepth::TwoLevelsUp),
        "di(..)(..)",
        "(..)(..)[p]"
    )]
    #[case(DynamicKind::InterceptedDynamic(InterceptDepth::FromRoot), "di(...)", "(...)[p]")]
    #[case(DynamicKind::InterceptedCatchAll(InterceptDepth::SameLevel), "ci(.)", "(.)[...p]")]
    #[case(DynamicKind::InterceptedCatchAll(InterceptDepth::OneLevelUp), "ci(..)", "(..)[...p]")]
    #[case(
        DynamicKind::InterceptedCatchAll(InterceptDepth::TwoLevelsUp),
        "ci(..)(..)",
        "(..)(..)[...p]"
    )]
    #[case(DynamicKind::InterceptedCatchAll(InterceptDepth::FromRoot), "ci(...)", "(...)[...p]")]
    fn test_kind_table(#[case] kind: DynamicKind, #[case] tag: &str, #[case] token: &str) {
        assert_eq!(kind.tag(), tag);
        assert_eq!(kind.to_string(), tag);
        assert_eq!(tag.parse::<DynamicKind>(), Ok(kind));
        assert_eq!(kind.canonical_token("p"), token);
    }

    #[rstest]
    #[case("")]
    #[case("x")]
    #[case("dd")]
    #[case("di")]
    #[case("ci")]
    #[case("di()")]
    #[case("di(....)")]
    #[case("di(.)(.)")]
    #[case("ci(..)x")]
    #[case("oci(.)")]
    #[case("oci(..)")]
    #[case("D")]
    fn test_unknown_tags_rejected(#[case] tag: &str) {
        assert_eq!(
            tag.parse::<DynamicKind>(),
            Err(ParseKindError(tag.to_string()))
        );
    }

    #[test]
    fn test_parse_error_names_the_tag() {
        let err = "zzz".parse::<DynamicKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown dynamic segment kind tag `zzz`");
    }
}
