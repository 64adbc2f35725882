use crate::{
    error::{FormatError, ParseError},
    field::{FieldKind, Read},
    layout::Layout,
    tag::PreRelease,
};
use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

/// A structured version: numbers, a pre-release stage and a free-form suffix.
///
/// Versions are produced by [`Layout::parse_version`] or built directly for
/// [`Layout::format_version`]. The defaults are zero for every number, [`PreRelease::Release`]
/// and an empty suffix.
///
/// Versions are totally ordered by major, minor, patch, pre-release stage and then build number.
/// The `other` suffix takes no part in equality, ordering or hashing.
///
/// # Examples
///
/// ```
/// use verlayout::prelude::*;
///
/// let layout = Layout::new("5.4.3.b1").unwrap();
/// let rc = layout.parse_version("1.1.1rc1").unwrap();
/// let release = layout.parse_version("1.1.1.1").unwrap();
/// assert_eq!(Version::new(1, 1, 1).with_pre_release(PreRelease::ReleaseCandidate).with_build(1), rc);
/// assert!(rc < release);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Version {
    /// The major number.
    pub major: i64,
    /// The minor number.
    pub minor: i64,
    /// The patch number.
    pub patch: i64,
    /// The build number.
    pub build: i64,
    /// The pre-release stage.
    pub pre_release: PreRelease,
    /// Whatever an `o` token captured.
    pub other: String,
}

impl Version {
    /// Creates a release version with the given numbers.
    pub fn new(major: i64, minor: i64, patch: i64) -> Self {
        Self {
            major,
            minor,
            patch,
            ..Self::default()
        }
    }

    /// Returns this version with the pre-release stage replaced.
    pub fn with_pre_release(self, pre_release: PreRelease) -> Self {
        Self {
            pre_release,
            ..self
        }
    }

    /// Returns this version with the build number replaced.
    pub fn with_build(self, build: i64) -> Self {
        Self { build, ..self }
    }

    /// Returns this version with the free-form suffix replaced.
    pub fn with_other(self, other: impl Into<String>) -> Self {
        Self {
            other: other.into(),
            ..self
        }
    }

    fn key(&self) -> (i64, i64, i64, PreRelease, i64) {
        (
            self.major,
            self.minor,
            self.patch,
            self.pre_release,
            self.build,
        )
    }

    /// Parses `input` token by token. The first error aborts the parse.
    pub(crate) fn parse(input: &str, layout: &Layout) -> Result<Self, ParseError> {
        let mut version = Version::default();
        let mut rest = input;

        for token in &layout.tokens {
            match token.kind.read(token.text, rest, &mut version)? {
                Read::Complete => break,
                Read::Consumed(len) => {
                    tracing::trace!(field = %token.kind, taken = &rest[..len], "read field");
                    rest = &rest[len..];
                }
            }
        }

        if !rest.is_empty() {
            tracing::debug!(input, left = rest, "version string not fully consumed");
            return Err(ParseError::TrailingInput {
                left: rest.to_string(),
            });
        }
        Ok(version)
    }

    /// Renders this version token by token.
    ///
    /// A `$` marks a point the output may be cut back to. The cut is made at the first `$` after
    /// which every rendered field holds its default value.
    pub(crate) fn format(&self, layout: &Layout) -> Result<String, FormatError> {
        let mut out = String::new();
        let mut end: Option<usize> = None;

        for token in &layout.tokens {
            if token.kind == FieldKind::AllowEnd {
                end.get_or_insert(out.len());
                continue;
            }
            let omittable = token.kind.write(token.text, self, &mut out)?;
            if !omittable {
                end = None;
            }
        }

        if let Some(len) = end {
            tracing::trace!(dropped = &out[len..], "trimmed default fields");
            out.truncate(len);
        }
        Ok(out)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
