/// Relative depth of an interception marker on a dynamic segment.
///
/// Intercepting routes render a route from elsewhere in the tree in place
/// of a full navigation (the modal/overlay pattern). The marker records how
/// far up the segment hierarchy the intercepted route lives, and it stays
/// part of the canonical file-system route.
///
/// # Examples
///
/// ```
/// use routescope::InterceptDepth;
///
/// assert_eq!(InterceptDepth::SameLevel.marker(), "(.)");
/// assert_eq!(InterceptDepth::OneLevelUp.marker(), "(..)");
/// assert_eq!(InterceptDepth::TwoLevelsUp.marker(), "(..)(..)");
/// assert_eq!(InterceptDepth::FromRoot.marker(), "(...)");
///
/// assert_eq!(InterceptDepth::from_marker("(..)"), Some(InterceptDepth::OneLevelUp));
/// assert_eq!(InterceptDepth::from_marker("(....)"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterceptDepth {
    /// (.) - intercept a route at the same segment level
    SameLevel,
    /// (..) - intercept a route one segment level up
    OneLevelUp,
    /// (..)(..) - intercept a route two segment levels up
    TwoLevelsUp,
    /// (...) - intercept a route from the application root
    FromRoot,
}

impl InterceptDepth {
    /// Returns the marker exactly as it appears in canonical routes and in
    /// wire kind tags.
    pub fn marker(&self) -> &'static str {
        match self {
            InterceptDepth::SameLevel => "(.)",
            InterceptDepth::OneLevelUp => "(..)",
            InterceptDepth::TwoLevelsUp => "(..)(..)",
            InterceptDepth::FromRoot => "(...)",
        }
    }

    /// Parses a marker back into a depth (pure function).
    ///
    /// Anything that is not exactly one of the four markers yields `None`.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "(.)" => Some(InterceptDepth::SameLevel),
            "(..)" => Some(InterceptDepth::OneLevelUp),
            "(..)(..)" => Some(InterceptDepth::TwoLevelsUp),
            "(...)" => Some(InterceptDepth::FromRoot),
            _ => None,
        }
    }
}
