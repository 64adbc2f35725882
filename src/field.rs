use crate::{
    error::{FormatError, ParseError},
    numeral,
    tag::{PreRelease, TagStyle},
    version::Version,
};
use core::fmt::{self, Display};

/// The kind of a layout token: which part of a [`Version`] it reads and writes, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `5`: the major number, in decimal.
    Major,
    /// `4`: the minor number, in decimal.
    Minor,
    /// `3`: the patch number, in decimal.
    Patch,
    /// `1`: the build number, in decimal.
    Build,
    /// `y`/`Y`: the patch number, as a letter counter (`a` is 1, `z` is 26, `aa` is 27).
    AlphabeticPatch,
    /// `z`/`Z`: the build number, as a letter counter.
    AlphabeticBuild,
    /// `2`, or `b`/`B`/`beta`/`Beta` with optional dashes: the pre-release tag.
    PreReleaseTag(TagStyle),
    /// `.`, `v`, `V` or any other character without a meaning of its own.
    FixedLiteral,
    /// `o`: the free-form remainder of the version string.
    Other,
    /// `$`: the version string may end here.
    AllowEnd,
}

/// The storage behind a numeric field. Decimal and alphabetic kinds for the same part of a
/// version share one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    Major,
    Minor,
    Patch,
    Build,
}

impl Slot {
    fn get(&self, version: &Version) -> i64 {
        match self {
            Slot::Major => version.major,
            Slot::Minor => version.minor,
            Slot::Patch => version.patch,
            Slot::Build => version.build,
        }
    }

    fn set(&self, version: &mut Version, value: i64) {
        let field = match self {
            Slot::Major => &mut version.major,
            Slot::Minor => &mut version.minor,
            Slot::Patch => &mut version.patch,
            Slot::Build => &mut version.build,
        };
        *field = value;
    }
}

/// What reading one token did to the version string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Read {
    /// Continue after this many bytes.
    Consumed(usize),
    /// The version string ended at an [`FieldKind::AllowEnd`]; parsing is done.
    Complete,
}

/// The tag style for the digit selector `2`. Its layout text names no spelling table.
const SELECTOR_TAG_STYLE: TagStyle = TagStyle {
    spelling: crate::tag::Spelling::Unspelled,
    leading_dash: false,
    trailing_dash: false,
};

impl FieldKind {
    /// Translates a digit selector from a layout. Returns `None` for anything but `1` to `5`.
    pub(crate) fn from_selector(selector: u64) -> Option<Self> {
        Some(match selector {
            1 => FieldKind::Build,
            2 => FieldKind::PreReleaseTag(SELECTOR_TAG_STYLE),
            3 => FieldKind::Patch,
            4 => FieldKind::Minor,
            5 => FieldKind::Major,
            _ => return None,
        })
    }

    /// The storage slot of a numeric field.
    pub(crate) fn slot(&self) -> Option<Slot> {
        match self {
            FieldKind::Major => Some(Slot::Major),
            FieldKind::Minor => Some(Slot::Minor),
            FieldKind::Patch | FieldKind::AlphabeticPatch => Some(Slot::Patch),
            FieldKind::Build | FieldKind::AlphabeticBuild => Some(Slot::Build),
            FieldKind::PreReleaseTag(_)
            | FieldKind::FixedLiteral
            | FieldKind::Other
            | FieldKind::AllowEnd => None,
        }
    }

    /// Consumes a prefix of `input` for this field, storing what was read in `version`.
    ///
    /// `text` is the layout text of the token. A fixed literal that does not match consumes
    /// nothing and is not an error: the mismatch surfaces later as trailing input.
    pub(crate) fn read(
        &self,
        text: &str,
        input: &str,
        version: &mut Version,
    ) -> Result<Read, ParseError> {
        let consumed = match self {
            FieldKind::Major | FieldKind::Minor | FieldKind::Patch | FieldKind::Build => {
                let (value, len) = numeral::read_decimal(input)?;
                self.store(version, value);
                len
            }
            FieldKind::AlphabeticPatch | FieldKind::AlphabeticBuild => {
                let (value, len) = numeral::read_alphabetic(input)?;
                self.store(version, value);
                len
            }
            FieldKind::PreReleaseTag(style) => {
                let (stage, len) = style.read(input);
                version.pre_release = stage;
                len
            }
            FieldKind::FixedLiteral => {
                if input.starts_with(text) {
                    text.len()
                } else {
                    0
                }
            }
            FieldKind::Other => {
                version.other = input.to_string();
                input.len()
            }
            FieldKind::AllowEnd => {
                if input.is_empty() {
                    return Ok(Read::Complete);
                }
                0
            }
        };
        Ok(Read::Consumed(consumed))
    }

    fn store(&self, version: &mut Version, value: i64) {
        if let Some(slot) = self.slot() {
            slot.set(version, value);
        }
    }

    /// Renders this field of `version`, appending to `out`. Returns whether what was written
    /// holds only default values, and so may be dropped at an [`FieldKind::AllowEnd`].
    ///
    /// [`FieldKind::AllowEnd`] writes nothing; the format driver handles it.
    pub(crate) fn write(
        &self,
        text: &str,
        version: &Version,
        out: &mut String,
    ) -> Result<bool, FormatError> {
        let omittable = match self {
            FieldKind::Major | FieldKind::Minor | FieldKind::Patch | FieldKind::Build => {
                let value = self.load(version);
                out.push_str(&numeral::write_decimal(value));
                value == 0
            }
            FieldKind::AlphabeticPatch | FieldKind::AlphabeticBuild => {
                let value = self.load(version);
                let unsigned =
                    u64::try_from(value).map_err(|_| FormatError::NegativeCounter { value })?;
                out.push_str(&numeral::encode_alphabetic(unsigned));
                value == 0
            }
            FieldKind::PreReleaseTag(style) => {
                out.push_str(&style.write(version.pre_release));
                version.pre_release == PreRelease::Release
            }
            FieldKind::FixedLiteral => {
                out.push_str(text);
                true
            }
            FieldKind::Other => {
                out.push_str(&version.other);
                version.other.is_empty()
            }
            FieldKind::AllowEnd => true,
        };
        Ok(omittable)
    }

    fn load(&self, version: &Version) -> i64 {
        self.slot().map_or(0, |slot| slot.get(version))
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldKind::Major => "major",
            FieldKind::Minor => "minor",
            FieldKind::Patch => "patch",
            FieldKind::Build => "build",
            FieldKind::AlphabeticPatch => "alphabetic patch",
            FieldKind::AlphabeticBuild => "alphabetic build",
            FieldKind::PreReleaseTag(_) => "pre-release tag",
            FieldKind::FixedLiteral => "literal",
            FieldKind::Other => "other",
            FieldKind::AllowEnd => "allow end",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::Spelling;
    use rstest::rstest;

    #[rstest]
    #[case(1, Some(FieldKind::Build))]
    #[case(2, Some(FieldKind::PreReleaseTag(SELECTOR_TAG_STYLE)))]
    #[case(3, Some(FieldKind::Patch))]
    #[case(4, Some(FieldKind::Minor))]
    #[case(5, Some(FieldKind::Major))]
    #[case(0, None)]
    #[case(6, None)]
    #[case(9, None)]
    #[case(12, None)]
    fn test_from_selector(#[case] selector: u64, #[case] expected: Option<FieldKind>) {
        assert_eq!(expected, FieldKind::from_selector(selector));
    }

    #[test]
    fn test_alphabetic_kinds_share_slots() {
        assert_eq!(FieldKind::Patch.slot(), FieldKind::AlphabeticPatch.slot());
        assert_eq!(FieldKind::Build.slot(), FieldKind::AlphabeticBuild.slot());
        assert_eq!(None, FieldKind::Other.slot());
    }

    #[test]
    fn test_read_numeric() {
        let mut version = Version::default();
        let read = FieldKind::Minor.read("4", "12.3", &mut version);
        assert_eq!(Ok(Read::Consumed(2)), read);
        assert_eq!(12, version.minor);

        let read = FieldKind::Patch.read("3", "x", &mut version);
        assert_eq!(
            Err(ParseError::MalformedNumber {
                text: String::new()
            }),
            read
        );
    }

    #[test]
    fn test_read_alphabetic_into_shared_slot() {
        let mut version = Version::default();
        assert_eq!(
            Ok(Read::Consumed(2)),
            FieldKind::AlphabeticBuild.read("z", "aa.", &mut version)
        );
        assert_eq!(27, version.build);

        assert_eq!(
            Ok(Read::Consumed(0)),
            FieldKind::AlphabeticPatch.read("y", "1", &mut version)
        );
        assert_eq!(0, version.patch);
    }

    #[test]
    fn test_read_literal_mismatch_consumes_nothing() {
        let mut version = Version::default();
        assert_eq!(
            Ok(Read::Consumed(1)),
            FieldKind::FixedLiteral.read(".", ".1", &mut version)
        );
        assert_eq!(
            Ok(Read::Consumed(0)),
            FieldKind::FixedLiteral.read(".", "rc1", &mut version)
        );
    }

    #[test]
    fn test_read_other_takes_everything() {
        let mut version = Version::default();
        assert_eq!(
            Ok(Read::Consumed(9)),
            FieldKind::Other.read("o", "+build.42", &mut version)
        );
        assert_eq!("+build.42", version.other);
    }

    #[test]
    fn test_read_allow_end() {
        let mut version = Version::default();
        assert_eq!(
            Ok(Read::Complete),
            FieldKind::AllowEnd.read("$", "", &mut version)
        );
        assert_eq!(
            Ok(Read::Consumed(0)),
            FieldKind::AllowEnd.read("$", ".1", &mut version)
        );
    }

    #[test]
    fn test_read_tag() {
        let style = TagStyle {
            spelling: Spelling::LongLower,
            leading_dash: true,
            trailing_dash: false,
        };
        let mut version = Version::default();
        assert_eq!(
            Ok(Read::Consumed(5)),
            FieldKind::PreReleaseTag(style).read("-beta", "-beta.1", &mut version)
        );
        assert_eq!(PreRelease::Beta, version.pre_release);
    }

    #[test]
    fn test_write() {
        let version = Version::new(1, 0, 28)
            .with_pre_release(PreRelease::Alpha)
            .with_other("-dev");
        let mut out = String::new();

        assert_eq!(Ok(false), FieldKind::Major.write("5", &version, &mut out));
        assert_eq!(Ok(true), FieldKind::FixedLiteral.write(".", &version, &mut out));
        assert_eq!(Ok(true), FieldKind::Minor.write("4", &version, &mut out));
        assert_eq!(
            Ok(false),
            FieldKind::AlphabeticPatch.write("y", &version, &mut out)
        );
        assert_eq!(
            Ok(false),
            FieldKind::PreReleaseTag(SELECTOR_TAG_STYLE).write("2", &version, &mut out)
        );
        assert_eq!(Ok(true), FieldKind::AlphabeticBuild.write("z", &version, &mut out));
        assert_eq!(Ok(false), FieldKind::Other.write("o", &version, &mut out));
        assert_eq!("1.0ab-dev", out);
    }

    #[test]
    fn test_write_negative_counter() {
        let version = Version::default().with_build(-3);
        let mut out = String::new();
        assert_eq!(
            Err(FormatError::NegativeCounter { value: -3 }),
            FieldKind::AlphabeticBuild.write("z", &version, &mut out)
        );
        assert_eq!(Ok(false), FieldKind::Build.write("1", &version, &mut out));
        assert_eq!("-3", out);
    }
}
