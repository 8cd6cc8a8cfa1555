//! Pattern validation and the compiled pattern handle
//!
//! `Pattern::new` runs a single forward scan over the pattern bytes that
//! rejects every malformed pattern up front: unbalanced captures, open
//! bracket sets, bad escapes, backreferences to captures that are not
//! finished yet, and patterns whose atom count would blow the matcher's
//! recursion budget. The matcher only ever sees validated patterns.

use crate::engine::{self, Gmatch, Match};
use crate::error::{PatternError, Result};
use crate::replace;

/// Most captures a single pattern can open.
pub const MAX_CAPTURES: usize = 32;

/// Recursion budget for a match attempt, and the cap on pattern atoms.
pub const MAX_RECURSION: usize = 200;

/// A validated pattern, reusable across subjects.
///
/// ```
/// use luapat::Pattern;
///
/// let pat = Pattern::new("(%a+)%s*=%s*(%d+)").unwrap();
/// let m = pat.find(b"answer = 42").unwrap().unwrap();
/// assert_eq!(m.at(0).unwrap().as_bytes(), b"answer");
/// assert_eq!(m.at(1).unwrap().as_bytes(), b"42");
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    code: Box<[u8]>,
    begin: usize,
    anchor: bool,
}

impl Pattern {
    /// Validate and compile a pattern.
    pub fn new(pattern: impl AsRef<[u8]>) -> Result<Self> {
        let code: Box<[u8]> = pattern.as_ref().into();
        let anchor = code.first() == Some(&b'^');
        let begin = usize::from(anchor);
        validate(&code, begin)?;
        Ok(Pattern {
            code,
            begin,
            anchor,
        })
    }

    /// The pattern text, including a leading `^` if there was one.
    pub fn as_bytes(&self) -> &[u8] {
        &self.code
    }

    /// True if the pattern began with `^` and can only match at the start
    /// of the subject.
    pub fn is_anchored(&self) -> bool {
        self.anchor
    }

    pub(crate) fn code(&self) -> &[u8] {
        &self.code
    }

    /// Index of the first significant pattern byte (past the anchor).
    pub(crate) fn begin(&self) -> usize {
        self.begin
    }

    /// Find the first match in `subject`.
    ///
    /// Anchored patterns are only tried at position 0. The only runtime
    /// error is [`PatternError::TooComplex`] from pathological
    /// backtracking.
    pub fn find<'s>(&self, subject: &'s [u8]) -> Result<Option<Match<'s>>> {
        engine::find(self, subject)
    }

    /// Does the pattern match anywhere in `subject`?
    pub fn is_match(&self, subject: &[u8]) -> Result<bool> {
        Ok(self.find(subject)?.is_some())
    }

    /// Iterate over all non-overlapping matches, left to right.
    ///
    /// Empty matches are yielded at most once per position and never stall
    /// the iteration. An anchored pattern yields at most one match.
    pub fn gmatch<'s, 'p>(&'p self, subject: &'s [u8]) -> Gmatch<'s, 'p> {
        Gmatch::new(self, subject)
    }

    /// Replace matches using a template containing `%0`..`%9` capture
    /// references and `%%` escapes.
    ///
    /// `limit` caps the number of substitutions; `None` means unlimited
    /// and `Some(0)` returns the subject unchanged.
    pub fn gsub(&self, subject: &[u8], template: &[u8], limit: Option<usize>) -> Result<Vec<u8>> {
        replace::gsub(self, subject, template, limit)
    }

    /// Replace matches with the output of `replace`, called once per match.
    pub fn gsub_with<F>(&self, subject: &[u8], limit: Option<usize>, replace: F) -> Result<Vec<u8>>
    where
        F: FnMut(&Match<'_>) -> Vec<u8>,
    {
        replace::gsub_with(self, subject, limit, replace)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CapState {
    Available,
    Unfinished,
    Finished,
}

fn is_quantifier(b: u8) -> bool {
    matches!(b, b'*' | b'+' | b'?' | b'-')
}

/// Single forward scan over `code[begin..]`.
fn validate(code: &[u8], begin: usize) -> Result<()> {
    let end = code.len();
    let mut caps = [CapState::Available; MAX_CAPTURES];
    let mut level = 0usize;
    let mut depth = 0usize;
    let mut q = begin;

    while q < end {
        match code[q] {
            b'(' => {
                if level >= MAX_CAPTURES {
                    return Err(PatternError::TooManyCaptures);
                }
                caps[level] = CapState::Unfinished;
                level += 1;
                q += 1;
                depth += 1;
            }
            b')' => {
                let open = caps[..level]
                    .iter()
                    .rposition(|c| *c == CapState::Unfinished)
                    .ok_or(PatternError::InvalidCapture)?;
                caps[open] = CapState::Finished;
                q += 1;
                depth += 1;
            }
            b'$' => q += 1,
            b'%' => {
                q += 1;
                if q == end {
                    return Err(PatternError::EndsWithPercent);
                }
                match code[q] {
                    b'b' => {
                        q += 3;
                        if q > end {
                            return Err(PatternError::MissingBalanceArguments);
                        }
                    }
                    b'f' => {
                        q += 1;
                        if q == end || code[q] != b'[' {
                            return Err(PatternError::MissingFrontierSet);
                        }
                        q = find_set_end(code, q)?;
                    }
                    d @ b'0'..=b'9' => {
                        let index = usize::from(d - b'0');
                        if index == 0
                            || index > level
                            || caps[index - 1] != CapState::Finished
                        {
                            return Err(PatternError::InvalidCaptureIndex(index));
                        }
                        q += 1;
                    }
                    _ => {
                        // Escaped class or literal: one item, optional suffix.
                        q += 1;
                        if q < end && is_quantifier(code[q]) {
                            q += 1;
                        }
                        depth += 1;
                    }
                }
            }
            b'[' => {
                q = find_set_end(code, q)?;
                if q < end && is_quantifier(code[q]) {
                    q += 1;
                }
                depth += 1;
            }
            _ => {
                q += 1;
                if q < end && is_quantifier(code[q]) {
                    q += 1;
                }
                depth += 1;
            }
        }
    }

    if caps[..level].iter().any(|c| *c != CapState::Finished) {
        return Err(PatternError::UnfinishedCapture);
    }
    if depth > MAX_RECURSION {
        return Err(PatternError::TooComplex);
    }
    Ok(())
}

/// Scan a bracket set for its closing `]`, validating the escapes inside.
/// `q` points at the `[`; returns the index one past the `]`. The first
/// byte after `[` or `[^` is always a set member, even `]`.
fn find_set_end(code: &[u8], mut q: usize) -> Result<usize> {
    let end = code.len();
    q += 1;
    if q < end && code[q] == b'^' {
        q += 1;
    }
    loop {
        if q >= end {
            return Err(PatternError::MissingBracket);
        }
        let c = code[q];
        q += 1;
        if c == b'%' {
            if q >= end {
                return Err(PatternError::EndsWithPercent);
            }
            q += 1;
        }
        if q >= end {
            return Err(PatternError::MissingBracket);
        }
        if code[q] == b']' {
            return Ok(q + 1);
        }
    }
}
