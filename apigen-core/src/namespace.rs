//! PHP namespace value type.

use std::{convert::Infallible, fmt, path::PathBuf, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A backslash-delimited PHP namespace such as `App\Filament\Resources`.
///
/// Parsing is lenient: forward slashes are treated as separators, outer
/// separators and whitespace are trimmed, and empty segments collapse. The
/// empty namespace is the global namespace.
///
/// # Example
///
/// ```
/// use apigen_core::Namespace;
///
/// let ns = Namespace::parse(" Shop/Product\\ ");
/// assert_eq!(ns.to_string(), "Shop\\Product");
/// assert_eq!(ns.last(), Some("Product"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Namespace {
    segments: Vec<String>,
}

impl Namespace {
    /// Namespace separator.
    pub const SEPARATOR: char = '\\';

    /// Parse and normalize a namespace string.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.replace('/', "\\");
        let trimmed = normalized.trim_matches(|c: char| c == Self::SEPARATOR || c.is_whitespace());

        Self::from_segments(trimmed.split(Self::SEPARATOR))
    }

    /// Build a namespace from raw segments, dropping blank ones.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            segments: segments
                .into_iter()
                .map(|s| s.as_ref().trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Whether this is the global namespace.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The last segment, if any.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Everything before the last segment.
    pub fn parent(&self) -> Self {
        let end = self.segments.len().saturating_sub(1);
        Self {
            segments: self.segments[..end].to_vec(),
        }
    }

    /// Exact, case-sensitive, segment-wise prefix test.
    pub fn starts_with(&self, prefix: &Namespace) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    /// Remove `prefix` if this namespace starts with it exactly.
    pub fn strip_prefix(&self, prefix: &Namespace) -> Option<Self> {
        self.starts_with(prefix).then(|| Self {
            segments: self.segments[prefix.len()..].to_vec(),
        })
    }

    /// Remove `prefix` if this namespace starts with it, ignoring case.
    pub fn strip_prefix_ignore_case(&self, prefix: &Namespace) -> Option<Self> {
        if prefix.len() > self.len() {
            return None;
        }
        let matches = self
            .segments
            .iter()
            .zip(&prefix.segments)
            .all(|(a, b)| a.to_lowercase() == b.to_lowercase());

        matches.then(|| Self {
            segments: self.segments[prefix.len()..].to_vec(),
        })
    }

    /// Append all segments of `other`.
    pub fn join(&self, other: &Namespace) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        Self { segments }
    }

    /// Append a single segment.
    pub fn child(&self, segment: impl AsRef<str>) -> Self {
        self.join(&Self::from_segments([segment]))
    }

    /// Replace the last segment, or add one to the global namespace.
    pub fn with_last(&self, segment: impl AsRef<str>) -> Self {
        self.parent().child(segment)
    }

    /// Relative filesystem path with one directory per segment.
    pub fn to_path(&self) -> PathBuf {
        self.segments.iter().collect()
    }

    /// First segment that is not a valid PHP identifier.
    pub fn invalid_segment(&self) -> Option<&str> {
        self.segments
            .iter()
            .find(|s| !is_php_identifier(s))
            .map(String::as_str)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", Self::SEPARATOR)?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for Namespace {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Serialize for Namespace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Namespace {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Check whether a name is a valid PHP class or namespace identifier.
pub fn is_php_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || !c.is_ascii() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || !c.is_ascii())
}
