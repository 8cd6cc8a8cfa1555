//! Replacement templates and global substitution
//!
//! A template is parsed once into literal runs and capture references,
//! then expanded for every match. `%0` is the whole match, `%1`..`%9`
//! pick a capture, `%%` is a literal percent; position captures expand to
//! their 1-based byte offset in decimal.

use crate::engine::Match;
use crate::error::{PatternError, Result};
use crate::pattern::Pattern;

/// A piece of a parsed replacement template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    /// Verbatim bytes.
    Literal(Vec<u8>),
    /// `%0`: the whole match.
    WholeMatch,
    /// `%1`..`%9`, stored 0-based.
    Capture(usize),
}

/// A parsed replacement template.
#[derive(Debug, Clone)]
pub struct Replacement {
    parts: Vec<TemplatePart>,
}

impl Replacement {
    /// Parse a template. Any `%` must be followed by `%` or a digit.
    pub fn parse(template: &[u8]) -> Result<Self> {
        let mut parts = Vec::new();
        let mut literal = Vec::new();
        let mut i = 0;
        while i < template.len() {
            if template[i] == b'%' {
                let next = *template
                    .get(i + 1)
                    .ok_or(PatternError::InvalidReplacementEscape)?;
                match next {
                    b'%' => literal.push(b'%'),
                    b'0' => {
                        flush(&mut parts, &mut literal);
                        parts.push(TemplatePart::WholeMatch);
                    }
                    b'1'..=b'9' => {
                        flush(&mut parts, &mut literal);
                        parts.push(TemplatePart::Capture(usize::from(next - b'1')));
                    }
                    _ => return Err(PatternError::InvalidReplacementEscape),
                }
                i += 2;
            } else {
                literal.push(template[i]);
                i += 1;
            }
        }
        flush(&mut parts, &mut literal);
        Ok(Replacement { parts })
    }

    /// The parsed parts, in template order.
    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }

    /// Expand the template for one match, appending to `out`.
    pub fn expand(&self, m: &Match<'_>, out: &mut Vec<u8>) -> Result<()> {
        for part in &self.parts {
            match part {
                TemplatePart::Literal(bytes) => out.extend_from_slice(bytes),
                TemplatePart::WholeMatch => out.extend_from_slice(m.as_bytes()),
                TemplatePart::Capture(i) => {
                    if *i >= m.capture_count() {
                        return Err(PatternError::InvalidCaptureIndex(i + 1));
                    }
                    let cap = m.at(*i)?;
                    if cap.is_position() {
                        // 1-based offset, in decimal.
                        out.extend_from_slice((cap.start() + 1).to_string().as_bytes());
                    } else {
                        out.extend_from_slice(cap.as_bytes());
                    }
                }
            }
        }
        Ok(())
    }
}

fn flush(parts: &mut Vec<TemplatePart>, literal: &mut Vec<u8>) {
    if !literal.is_empty() {
        parts.push(TemplatePart::Literal(std::mem::take(literal)));
    }
}

/// Template-form substitution driver.
pub(crate) fn gsub(
    pattern: &Pattern,
    subject: &[u8],
    template: &[u8],
    limit: Option<usize>,
) -> Result<Vec<u8>> {
    let replacement = Replacement::parse(template)?;
    run(pattern, subject, limit, |m, out| replacement.expand(m, out))
}

/// Function-form substitution driver.
pub(crate) fn gsub_with<F>(
    pattern: &Pattern,
    subject: &[u8],
    limit: Option<usize>,
    mut replace: F,
) -> Result<Vec<u8>>
where
    F: FnMut(&Match<'_>) -> Vec<u8>,
{
    run(pattern, subject, limit, |m, out| {
        out.extend_from_slice(&replace(m));
        Ok(())
    })
}

/// Walk the match iterator, copying unmatched regions verbatim and
/// emitting one replacement per match, up to `limit` substitutions.
fn run<F>(pattern: &Pattern, subject: &[u8], limit: Option<usize>, mut emit: F) -> Result<Vec<u8>>
where
    F: FnMut(&Match<'_>, &mut Vec<u8>) -> Result<()>,
{
    let mut out = Vec::with_capacity(subject.len());
    let mut copied = 0;
    let mut remaining = limit;

    for m in pattern.gmatch(subject) {
        if remaining == Some(0) {
            break;
        }
        let m = m?;
        if let Some(n) = remaining.as_mut() {
            *n -= 1;
        }
        out.extend_from_slice(&subject[copied..m.start()]);
        emit(&m, &mut out)?;
        copied = m.end();
    }
    out.extend_from_slice(&subject[copied..]);
    Ok(out)
}
