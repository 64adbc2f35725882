/// Errors raised while compiling a layout pattern into a [`Layout`](crate::Layout).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A digit run in the layout names no field. Only `1` (build), `2` (pre-release tag),
    /// `3` (patch), `4` (minor) and `5` (major) are selectors.
    #[error("Field selector `{selector}` in layout should be one of 1 (build), 2 (pre-release tag), 3 (patch), 4 (minor) or 5 (major)")]
    UnknownFieldSelector {
        /// The digit run as written in the layout.
        selector: String,
    },
}

/// Errors raised while parsing a version string against a layout.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The layout itself could not be compiled.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// A numeric field found no digits, or more digits than fit in an `i64`.
    #[error("Numeric field should be a decimal integer that fits in 64 bits, found `{text}`")]
    MalformedNumber {
        /// The digit run that was read (possibly empty).
        text: String,
    },

    /// An alphabetic field read a letter run whose value does not fit in an `i64`.
    #[error("Alphabetic counter `{text}` is too large to fit in 64 bits")]
    CounterOverflow {
        /// The letter run that was read.
        text: String,
    },

    /// The layout was exhausted before the version string was.
    ///
    /// A fixed literal that does not match is skipped rather than rejected, so this is also how
    /// a literal mismatch surfaces.
    #[error("Version string should end with the layout, but `{left}` is left over")]
    TrailingInput {
        /// The part of the version string that no layout token consumed.
        left: String,
    },
}

/// Errors raised while rendering a [`Version`](crate::Version) with a layout.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The layout itself could not be compiled.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Alphabetic counters have no spelling for negative numbers.
    #[error("Alphabetic field cannot render negative value `{value}`")]
    NegativeCounter {
        /// The offending field value.
        value: i64,
    },
}
