//! # verlayout
//!
//! A two-way codec for version strings.
//!
//! Version strings come in many shapes: different numbers of dots, pre-release tags spelled
//! `rc`, `-beta.` or `A`, build counters written as letters, free-form suffixes. Instead of
//! hard-coding one convention, this library lets you describe a family of version strings with a
//! compact *layout*, and then uses that one layout both to parse strings into a [`Version`] and to
//! format a [`Version`] back into a string of the same family.
//!
//! ## Examples
//!
//! Quickly parse or format with a layout string:
//!
//! ```
//! use verlayout::prelude::*;
//!
//! let version = verlayout::parse("5.4.3-beta.1", "1.2.3-alpha.4").unwrap();
//! assert_eq!(Version::new(1, 2, 3).with_pre_release(PreRelease::Alpha).with_build(4), version);
//!
//! let formatted = verlayout::format("5.4.3-beta.1", &version).unwrap();
//! assert_eq!("1.2.3-alpha.4", formatted);
//! ```
//!
//! Or compile the layout once and reuse it:
//!
//! ```
//! use verlayout::prelude::*;
//!
//! let layout = Layout::new("5.4$.3$.1").unwrap();
//! assert_eq!("1.1", layout.format_version(&Version::new(1, 1, 0)).unwrap());
//! assert_eq!("1.1.1", layout.format_version(&Version::new(1, 1, 1)).unwrap());
//!
//! let old = layout.parse_version("1.1").unwrap();
//! let new = layout.parse_version("1.1.1.1").unwrap();
//! assert!(old < new);
//! ```
//!
//! ## Layouts
//!
//! See [`Layout`] for the full token table. In short, the digits `5`, `4`, `3` and `1` stand for
//! the major, minor, patch and build numbers, `y` and `z` for the patch and build numbers written
//! as letter counters, `b`/`B`/`beta`/`Beta` (with optional dashes) for the pre-release tag, `$`
//! for "the string may end here", `o` for a free-form remainder, and everything else is literal
//! text.
//!
//! ## Prelude
//!
//! verlayout provides a prelude module for convenience. It contains everything needed to interact
//! with the library.
//!
//! Use it with:
//!
//! ```
//! use verlayout::prelude::*;
//! ```
#![warn(missing_docs)]

mod error;
mod field;
mod layout;
mod numeral;
mod tag;
mod version;

pub use crate::error::{FormatError, LayoutError, ParseError};
pub use crate::field::FieldKind;
pub use crate::layout::Layout;
pub use crate::tag::{PreRelease, Spelling, TagStyle};
pub use crate::version::Version;

/// Parses `input` with a layout string.
///
/// This compiles the layout on every call. To parse many strings with the same layout, create a
/// [`Layout`] once and use [`Layout::parse_version`].
///
/// # Errors
///
/// - If the layout is invalid, returns [`ParseError::Layout`].
/// - Otherwise, see [`Layout::parse_version`].
pub fn parse(layout: &str, input: &str) -> Result<Version, ParseError> {
    Layout::new(layout)?.parse_version(input)
}

/// Formats `version` with a layout string.
///
/// This compiles the layout on every call. To format many versions with the same layout, create
/// a [`Layout`] once and use [`Layout::format_version`].
///
/// # Errors
///
/// - If the layout is invalid, returns [`FormatError::Layout`].
/// - Otherwise, see [`Layout::format_version`].
pub fn format(layout: &str, version: &Version) -> Result<String, FormatError> {
    Layout::new(layout)?.format_version(version)
}

/// A convenience module appropriate for glob imports (`use verlayout::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::FieldKind;
    #[doc(no_inline)]
    pub use crate::FormatError;
    #[doc(no_inline)]
    pub use crate::Layout;
    #[doc(no_inline)]
    pub use crate::LayoutError;
    #[doc(no_inline)]
    pub use crate::ParseError;
    #[doc(no_inline)]
    pub use crate::PreRelease;
    #[doc(no_inline)]
    pub use crate::Spelling;
    #[doc(no_inline)]
    pub use crate::TagStyle;
    #[doc(no_inline)]
    pub use crate::Version;
}
