use core::fmt::{self, Display};

/// The release stage of a version. Stages are ordered `Alpha < Beta < ReleaseCandidate < Release`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreRelease {
    /// An alpha pre-release.
    Alpha,
    /// A beta pre-release.
    Beta,
    /// A release candidate.
    ReleaseCandidate,
    /// A final release. This is the default and carries no tag when formatted.
    #[default]
    Release,
}

impl Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PreRelease::Alpha => "alpha",
            PreRelease::Beta => "beta",
            PreRelease::ReleaseCandidate => "rc",
            PreRelease::Release => "release",
        })
    }
}

/// Which spelling table a pre-release tag token selects, named after how the layout writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spelling {
    /// `b` in the layout: `a`, `b`, `rc`.
    ShortLower,
    /// `B` in the layout: `A`, `B`, `RC`.
    ShortUpper,
    /// `beta` in the layout: `alpha`, `beta`, `rc`.
    LongLower,
    /// `Beta` in the layout: `Alpha`, `Beta`, `RC`.
    LongTitle,
    /// The digit selector `2`: no spellings at all. It never reads a tag and always writes an
    /// empty one.
    Unspelled,
}

impl Spelling {
    /// The spellings of the tagged stages, in `Alpha`, `Beta`, `ReleaseCandidate` order.
    fn table(&self) -> &'static [(PreRelease, &'static str)] {
        use PreRelease::*;
        match self {
            Spelling::ShortLower => &[(Alpha, "a"), (Beta, "b"), (ReleaseCandidate, "rc")],
            Spelling::ShortUpper => &[(Alpha, "A"), (Beta, "B"), (ReleaseCandidate, "RC")],
            Spelling::LongLower => &[(Alpha, "alpha"), (Beta, "beta"), (ReleaseCandidate, "rc")],
            Spelling::LongTitle => &[(Alpha, "Alpha"), (Beta, "Beta"), (ReleaseCandidate, "RC")],
            Spelling::Unspelled => &[],
        }
    }

    fn spell(&self, stage: PreRelease) -> Option<&'static str> {
        self.table()
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|&(_, spelling)| spelling)
    }
}

/// How a pre-release tag is written: a spelling table plus optional dashes around the tag.
///
/// Dashes belong to the tag. They are written only when there is a tag to write, and read only
/// when a tag is actually present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagStyle {
    /// The spelling table.
    pub spelling: Spelling,
    /// Whether a `-` precedes the tag.
    pub leading_dash: bool,
    /// Whether a `-` follows the tag.
    pub trailing_dash: bool,
}

impl TagStyle {
    /// Reads a tag from the start of `input`, returning the stage and the number of bytes used.
    ///
    /// If no spelling matches, the stage is [`PreRelease::Release`] and nothing is consumed.
    pub(crate) fn read(&self, input: &str) -> (PreRelease, usize) {
        let mut offset = 0;
        if self.leading_dash && input.starts_with('-') {
            offset += 1;
        }

        let Some(&(stage, spelling)) = self
            .spelling
            .table()
            .iter()
            .find(|(_, spelling)| input[offset..].starts_with(spelling))
        else {
            return (PreRelease::Release, 0);
        };
        offset += spelling.len();

        if self.trailing_dash && input[offset..].starts_with('-') {
            offset += 1;
        }
        (stage, offset)
    }

    /// Writes the tag for `stage`. A release has no tag, so it writes nothing, not even dashes.
    pub(crate) fn write(&self, stage: PreRelease) -> String {
        let Some(spelling) = self.spelling.spell(stage) else {
            return String::new();
        };
        let mut out = String::with_capacity(spelling.len() + 2);
        if self.leading_dash {
            out.push('-');
        }
        out.push_str(spelling);
        if self.trailing_dash {
            out.push('-');
        }
        out
    }
}
