//! Lua-style pattern matching for byte strings
//!
//! An implementation of the Lua pattern dialect: character classes,
//! `*`/`+`/`-`/`?` quantifiers, `^`/`$` anchors, captures and position
//! captures, `%1`..`%9` backreferences, `%bxy` balanced pairs, and the
//! `%f[set]` frontier assertion. Subjects and patterns are plain byte
//! slices; embedded NUL bytes are ordinary data.
//!
//! Compile a [`Pattern`] once and reuse it, or use the free functions for
//! one-off work:
//!
//! ```
//! let pat = luapat::Pattern::new("(%a+)%s*=%s*(%d+)").unwrap();
//! let mut pairs = Vec::new();
//! for m in pat.gmatch(b"foo = 42; bar= 1337") {
//!     let m = m.unwrap();
//!     pairs.push((
//!         m.at(0).unwrap().as_bytes().to_vec(),
//!         m.at(1).unwrap().as_bytes().to_vec(),
//!     ));
//! }
//! assert_eq!(pairs.len(), 2);
//!
//! let out = luapat::gsub(b"hello world", "o", "0").unwrap();
//! assert_eq!(out, b"hell0 w0rld");
//! ```

mod captures;
mod classes;
pub mod engine;
pub mod error;
pub mod pattern;
pub mod replace;

pub use engine::{Capture, Gmatch, Match};
pub use error::{PatternError, Result};
pub use pattern::{Pattern, MAX_CAPTURES, MAX_RECURSION};
pub use replace::{Replacement, TemplatePart};

/// Find the first match of `pattern` in `subject`.
///
/// Compiles the pattern on the fly; keep a [`Pattern`] around instead when
/// matching repeatedly.
pub fn find<'s>(subject: &'s [u8], pattern: impl AsRef<[u8]>) -> Result<Option<Match<'s>>> {
    Pattern::new(pattern)?.find(subject)
}

/// Does `pattern` match anywhere in `subject`?
pub fn is_match(subject: &[u8], pattern: impl AsRef<[u8]>) -> Result<bool> {
    Pattern::new(pattern)?.is_match(subject)
}

/// Replace every match of `pattern` in `subject` using a template.
pub fn gsub(
    subject: &[u8],
    pattern: impl AsRef<[u8]>,
    template: impl AsRef<[u8]>,
) -> Result<Vec<u8>> {
    Pattern::new(pattern)?.gsub(subject, template.as_ref(), None)
}

/// Replace every match of `pattern` in `subject` with the closure's output.
pub fn gsub_with<F>(subject: &[u8], pattern: impl AsRef<[u8]>, replace: F) -> Result<Vec<u8>>
where
    F: FnMut(&Match<'_>) -> Vec<u8>,
{
    Pattern::new(pattern)?.gsub_with(subject, None, replace)
}
