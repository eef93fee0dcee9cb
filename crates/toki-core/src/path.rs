//! Dot-separated token paths.
//!
//! A [`TokenPath`] is the canonical identifier of a node in a token tree:
//! the sequence of keys from the root down to the node. Its text form joins
//! the segments with `.` (`color.text.primary`), which is also the syntax
//! used inside alias references (`{color.text.primary}`).

use std::fmt;

/// Path of a node in a token tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenPath {
    segments: Vec<String>,
}

impl TokenPath {
    /// The empty path (the root group).
    #[inline]
    pub fn root() -> Self {
        Self::default()
    }

    /// Parses a dot-separated path. An empty string is the root.
    ///
    /// # Example
    ///
    /// ```rust
    /// use toki_core::TokenPath;
    ///
    /// let path = TokenPath::parse("color.text.primary");
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(path.name(), Some("primary"));
    /// ```
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::root();
        }
        Self {
            segments: text.split('.').map(|s| s.trim().to_string()).collect(),
        }
    }

    /// Builds a path from individual segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a new path with `name` appended.
    pub fn child(&self, name: &str) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(name.to_string());
        Self { segments }
    }

    /// Path segments from the root down.
    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Last segment (the node's own key), `None` for the root.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Checks if this is the root path.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Joins the segments with an arbitrary separator.
    pub fn join(&self, sep: &str) -> String {
        self.segments.join(sep)
    }

    /// Flattened `-`-joined name usable as a CSS custom property or SCSS
    /// variable.
    ///
    /// ASCII letters, digits, `-`, `_` and non-ASCII characters are kept;
    /// anything else becomes `_`.
    ///
    /// ```rust
    /// use toki_core::TokenPath;
    ///
    /// let path = TokenPath::root().child("color").child("primary text");
    /// assert_eq!(path.flat_name(), "color-primary_text");
    /// ```
    pub fn flat_name(&self) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push('-');
            }
            out.extend(segment.chars().map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
                    c
                } else {
                    '_'
                }
            }));
        }
        out
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl From<&str> for TokenPath {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let path = TokenPath::parse("color.text.primary");
        assert_eq!(path.segments(), ["color", "text", "primary"]);
        assert_eq!(path.to_string(), "color.text.primary");
    }

    #[test]
    fn empty_is_root() {
        assert!(TokenPath::parse("").is_empty());
        assert!(TokenPath::parse("  ").is_empty());
        assert_eq!(TokenPath::root().name(), None);
    }

    #[test]
    fn child_appends() {
        let base = TokenPath::parse("spacing");
        let child = base.child("md");
        assert_eq!(child.to_string(), "spacing.md");
        assert_eq!(base.len(), 1);
        assert_eq!(child.join("-"), "spacing-md");
    }

    #[test]
    fn flat_name_escapes() {
        let path = TokenPath::root().child("color").child("primary text");
        assert_eq!(path.flat_name(), "color-primary_text");
        assert_eq!(TokenPath::root().child("a:b;c").flat_name(), "a_b_c");
        assert_eq!(TokenPath::parse("space.sm").flat_name(), "space-sm");
        assert_eq!(TokenPath::root().child("größe").flat_name(), "größe");
    }
}
