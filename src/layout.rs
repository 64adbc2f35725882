use crate::{
    error::{FormatError, LayoutError, ParseError},
    field::FieldKind,
    numeral,
    tag::{Spelling, TagStyle},
    version::Version,
};
use core::fmt::{self, Display};

/// One token of a layout: the field it stands for and the layout text it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LayoutToken<'l> {
    pub(crate) kind: FieldKind,
    /// The exact layout text. For literals this is what is matched and written.
    pub(crate) text: &'l str,
}

impl<'l> LayoutToken<'l> {
    fn new(kind: FieldKind, text: &'l str) -> Self {
        Self { kind, text }
    }
}

/// Splits the next token off the front of a non-empty layout, returning it and the rest of the
/// layout.
pub(crate) fn next_token(layout: &str) -> Result<(LayoutToken<'_>, &str), LayoutError> {
    debug_assert!(!layout.is_empty());
    let bytes = layout.as_bytes();

    let (kind, len) = match bytes[0] {
        b'0'..=b'9' => {
            let len = numeral::digit_run(layout);
            let selector = &layout[..len];
            let kind = selector
                .parse::<u64>()
                .ok()
                .and_then(FieldKind::from_selector)
                .ok_or_else(|| LayoutError::UnknownFieldSelector {
                    selector: selector.to_string(),
                })?;
            (kind, len)
        }
        b'z' | b'Z' => (FieldKind::AlphabeticBuild, 1),
        b'y' | b'Y' => (FieldKind::AlphabeticPatch, 1),
        b'$' => (FieldKind::AllowEnd, 1),
        b'.' | b'v' | b'V' => (FieldKind::FixedLiteral, 1),
        // the rest of the layout is free-form
        b'o' => (FieldKind::Other, layout.len()),
        _ => match tag_token(bytes) {
            Some((style, len)) => (FieldKind::PreReleaseTag(style), len),
            None => (FieldKind::FixedLiteral, first_char_len(layout)),
        },
    };

    Ok((LayoutToken::new(kind, &layout[..len]), &layout[len..]))
}

/// Matches `-?(b|B)(eta)?-?` against the start of the layout, returning the tag style it spells
/// and its length.
fn tag_token(bytes: &[u8]) -> Option<(TagStyle, usize)> {
    let leading_dash = bytes.first() == Some(&b'-');
    let mut index = usize::from(leading_dash);

    let upper = match bytes.get(index) {
        Some(b'b') => false,
        Some(b'B') => true,
        _ => return None,
    };

    let long_form = if upper { b"Beta" } else { b"beta" };
    let spelling = if bytes[index..].starts_with(long_form) {
        index += long_form.len();
        if upper {
            Spelling::LongTitle
        } else {
            Spelling::LongLower
        }
    } else {
        index += 1;
        if upper {
            Spelling::ShortUpper
        } else {
            Spelling::ShortLower
        }
    };

    let trailing_dash = bytes.get(index) == Some(&b'-');
    if trailing_dash {
        index += 1;
    }

    Some((
        TagStyle {
            spelling,
            leading_dash,
            trailing_dash,
        },
        index,
    ))
}

fn first_char_len(layout: &str) -> usize {
    layout.chars().next().map_or(0, char::len_utf8)
}

/// A compiled layout pattern, describing one family of version strings.
///
/// A layout is a sequence of tokens:
///
/// | Token | Field |
/// |---|---|
/// | `5` | major number |
/// | `4` | minor number |
/// | `3` | patch number |
/// | `1` | build number |
/// | `2` | pre-release tag with no spelling: never read, always written empty |
/// | `y`, `Y` | patch number as a letter counter (`a` = 1, `z` = 26, `aa` = 27) |
/// | `z`, `Z` | build number as a letter counter |
/// | `b`, `B`, `beta`, `Beta`, each optionally with a leading and/or trailing `-` | pre-release tag, spelled like the token (see below) |
/// | `$` | the version string may end here |
/// | `o` | everything that remains, kept verbatim; ends the layout |
/// | `.`, `v`, `V`, anything else | literal text |
///
/// Tag tokens pick their spelling table by how they are written:
///
/// | Token | Alpha | Beta | Release candidate |
/// |---|---|---|---|
/// | `b` | `a` | `b` | `rc` |
/// | `B` | `A` | `B` | `RC` |
/// | `beta` | `alpha` | `beta` | `rc` |
/// | `Beta` | `Alpha` | `Beta` | `RC` |
///
/// A final release has no tag, and its dashes are not written either.
///
/// Literals are lenient when parsing: a literal that is absent from the version string is
/// skipped. If that leaves part of the string unconsumed, the parse fails with
/// [`ParseError::TrailingInput`]. A later `o` takes that part of the string instead, so
/// the parse succeeds with it as the suffix.
///
/// When formatting, everything after a `$` is dropped if it holds only default values. A
/// non-empty `o` suffix is not a default value, so it keeps the fields before it from being
/// dropped.
///
/// # Example
///
/// ```
/// use verlayout::prelude::*;
///
/// let layout = Layout::new("5.4.3-beta.1").unwrap();
/// let version = layout.parse_version("2.3.4-rc.5").unwrap();
/// assert_eq!(PreRelease::ReleaseCandidate, version.pre_release);
/// assert_eq!("2.3.4-rc.5", layout.format_version(&version).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout<'l> {
    pub(crate) tokens: Vec<LayoutToken<'l>>,
}

impl<'l> Layout<'l> {
    /// Compiles a layout pattern.
    ///
    /// # Errors
    ///
    /// - If a digit run in the layout is not one of the selectors `1` to `5`, returns
    ///   [`LayoutError::UnknownFieldSelector`].
    pub fn new(layout: &'l str) -> Result<Self, LayoutError> {
        let mut rest = layout;
        let mut tokens = Vec::new();

        while !rest.is_empty() {
            let (token, suffix) = next_token(rest).map_err(|err| {
                tracing::debug!(layout, %err, "layout rejected");
                err
            })?;
            tokens.push(token);
            rest = suffix;
        }

        Ok(Self { tokens })
    }

    /// The kind of each token, in layout order.
    pub fn fields(&self) -> impl Iterator<Item = FieldKind> + '_ {
        self.tokens.iter().map(|token| token.kind)
    }

    /// Parses a version string with this layout.
    ///
    /// # Errors
    ///
    /// - If a numeric field has no digits or too many, returns [`ParseError::MalformedNumber`].
    /// - If a letter counter is too large, returns [`ParseError::CounterOverflow`].
    /// - If the layout ends before the version string does, returns
    ///   [`ParseError::TrailingInput`].
    pub fn parse_version(&self, input: &str) -> Result<Version, ParseError> {
        Version::parse(input, self)
    }

    /// Formats a version with this layout.
    ///
    /// Fields after a `$` are dropped if they would all be written with default values.
    ///
    /// # Errors
    ///
    /// - If a letter counter field holds a negative number, returns
    ///   [`FormatError::NegativeCounter`].
    pub fn format_version(&self, version: &Version) -> Result<String, FormatError> {
        version.format(self)
    }
}

impl<'l> Display for Layout<'l> {
    /// Displays the layout as the pattern it was compiled from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str(token.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tag(spelling: Spelling, leading_dash: bool, trailing_dash: bool) -> FieldKind {
        FieldKind::PreReleaseTag(TagStyle {
            spelling,
            leading_dash,
            trailing_dash,
        })
    }

    fn tokens(layout: &str) -> Vec<(FieldKind, &str)> {
        Layout::new(layout)
            .unwrap()
            .tokens
            .into_iter()
            .map(|token| (token.kind, token.text))
            .collect()
    }

    #[rstest]
    #[case("5", FieldKind::Major, "5", "")]
    #[case("4.3", FieldKind::Minor, "4", ".3")]
    #[case("3", FieldKind::Patch, "3", "")]
    #[case("1x", FieldKind::Build, "1", "x")]
    #[case("z1", FieldKind::AlphabeticBuild, "z", "1")]
    #[case("Z", FieldKind::AlphabeticBuild, "Z", "")]
    #[case("y", FieldKind::AlphabeticPatch, "y", "")]
    #[case("Y.", FieldKind::AlphabeticPatch, "Y", ".")]
    #[case("$.3", FieldKind::AllowEnd, "$", ".3")]
    #[case(".4", FieldKind::FixedLiteral, ".", "4")]
    #[case("v5", FieldKind::FixedLiteral, "v", "5")]
    #[case("V5", FieldKind::FixedLiteral, "V", "5")]
    #[case("o.5$4", FieldKind::Other, "o.5$4", "")]
    #[case("-1", FieldKind::FixedLiteral, "-", "1")]
    #[case("-", FieldKind::FixedLiteral, "-", "")]
    #[case("+1", FieldKind::FixedLiteral, "+", "1")]
    #[case("é5", FieldKind::FixedLiteral, "é", "5")]
    #[case("b1", tag(Spelling::ShortLower, false, false), "b", "1")]
    #[case("B1", tag(Spelling::ShortUpper, false, false), "B", "1")]
    #[case("b-1", tag(Spelling::ShortLower, false, true), "b-", "1")]
    #[case("-beta.1", tag(Spelling::LongLower, true, false), "-beta", ".1")]
    #[case("-beta-1", tag(Spelling::LongLower, true, true), "-beta-", "1")]
    #[case("beta-1", tag(Spelling::LongLower, false, true), "beta-", "1")]
    #[case("Beta", tag(Spelling::LongTitle, false, false), "Beta", "")]
    #[case("-B-", tag(Spelling::ShortUpper, true, true), "-B-", "")]
    #[case("bet", tag(Spelling::ShortLower, false, false), "b", "et")]
    #[case("bEta", tag(Spelling::ShortLower, false, false), "b", "Eta")]
    fn test_next_token(
        #[case] layout: &str,
        #[case] kind: FieldKind,
        #[case] text: &str,
        #[case] rest: &str,
    ) {
        let (token, suffix) = next_token(layout).unwrap();
        assert_eq!(kind, token.kind);
        assert_eq!(text, token.text);
        assert_eq!(rest, suffix);
    }

    #[rstest]
    #[case("0")]
    #[case("6")]
    #[case("9")]
    #[case("54")]
    #[case("5.4.7")]
    #[case("5.4.99999999999999999999999")]
    fn test_unknown_selector(#[case] layout: &str) {
        let selector = layout.rsplit('.').next().unwrap();
        assert_eq!(
            Err(LayoutError::UnknownFieldSelector {
                selector: selector.to_string()
            }),
            Layout::new(layout)
        );
    }

    #[test]
    fn test_full_layout() {
        assert_eq!(
            vec![
                (FieldKind::FixedLiteral, "v"),
                (FieldKind::Major, "5"),
                (FieldKind::FixedLiteral, "."),
                (FieldKind::Minor, "4"),
                (FieldKind::AllowEnd, "$"),
                (FieldKind::FixedLiteral, "."),
                (FieldKind::Patch, "3"),
                (tag(Spelling::LongLower, true, false), "-beta"),
                (FieldKind::FixedLiteral, "."),
                (FieldKind::Build, "1"),
                (FieldKind::Other, "o"),
            ],
            tokens("v5.4$.3-beta.1o")
        );
    }

    #[test]
    fn test_empty_layout() {
        assert_eq!(Vec::<(FieldKind, &str)>::new(), tokens(""));
    }

    #[rstest]
    #[case("5.4.3")]
    #[case("v5.4$.3$.1")]
    #[case("5.4.3-beta-1o")]
    #[case("5.4y")]
    #[case("5.4.3B-Z")]
    fn test_display_round_trip(#[case] layout: &str) {
        assert_eq!(layout, Layout::new(layout).unwrap().to_string());
    }

    #[test]
    fn test_fields() {
        let layout = Layout::new("5.y$").unwrap();
        assert_eq!(
            vec![
                FieldKind::Major,
                FieldKind::FixedLiteral,
                FieldKind::AlphabeticPatch,
                FieldKind::AllowEnd
            ],
            layout.fields().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_layout_eq() {
        assert_eq!(Layout::new("5.4").unwrap(), Layout::new("5.4").unwrap());
        assert_ne!(Layout::new("5.4").unwrap(), Layout::new("v5.4").unwrap());
    }
}
