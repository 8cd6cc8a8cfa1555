//! The backtracking matcher and its result types
//!
//! Matching walks the subject and pattern by index. Sequential pattern
//! items advance in place; the matcher only recurses where a choice point
//! needs to be revisited on failure: capture open/close, the `?` fallback,
//! and greedy/lazy quantifier expansion. A countdown depth gate bounds
//! that recursion for adversarial patterns.

use smallvec::SmallVec;

use crate::captures::{Cap, CapLen, CaptureStack};
use crate::classes;
use crate::error::{PatternError, Result};
use crate::pattern::{Pattern, MAX_RECURSION};

/// A successful match: the byte range in the subject plus its captures.
///
/// When the pattern has no explicit `(...)` captures, the whole match is
/// exposed as capture 0 so consumers can always ask for `at(0)`.
#[derive(Debug, Clone)]
pub struct Match<'s> {
    subject: &'s [u8],
    start: usize,
    end: usize,
    caps: SmallVec<[Cap; 2]>,
}

impl<'s> Match<'s> {
    fn new(subject: &'s [u8], start: usize, end: usize, stack: &CaptureStack) -> Self {
        let mut caps: SmallVec<[Cap; 2]> = stack.iter().copied().collect();
        if caps.is_empty() {
            caps.push(Cap {
                start,
                len: CapLen::Len(end - start),
            });
        }
        debug_assert!(caps.iter().all(|c| c.len != CapLen::Unfinished));
        Match {
            subject,
            start,
            end,
            caps,
        }
    }

    /// Byte offset where the match starts.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the end of the match.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The matched range in the subject.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// The matched bytes.
    pub fn as_bytes(&self) -> &'s [u8] {
        &self.subject[self.start..self.end]
    }

    /// Length of the match in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for a zero-width match.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of captures, counting the synthesized whole-match capture
    /// when the pattern declared none.
    pub fn capture_count(&self) -> usize {
        self.caps.len()
    }

    /// The `i`-th capture (0-based).
    pub fn at(&self, i: usize) -> Result<Capture<'s>> {
        self.caps
            .get(i)
            .map(|cap| self.resolve(cap))
            .ok_or(PatternError::CaptureOutOfRange(i))
    }

    /// Iterate over all captures in order.
    pub fn captures(&self) -> impl Iterator<Item = Capture<'s>> + '_ {
        self.caps.iter().map(|cap| self.resolve(cap))
    }

    fn resolve(&self, cap: &Cap) -> Capture<'s> {
        let (len, position) = match cap.len {
            CapLen::Len(n) => (n, false),
            CapLen::Position => (0, true),
            // A successful match has closed every capture it opened.
            CapLen::Unfinished => unreachable!("unfinished capture in a match result"),
        };
        Capture {
            subject: self.subject,
            start: cap.start,
            len,
            position,
        }
    }
}

/// One capture of a match, borrowing the subject.
#[derive(Debug, Clone, Copy)]
pub struct Capture<'s> {
    subject: &'s [u8],
    start: usize,
    len: usize,
    position: bool,
}

impl<'s> Capture<'s> {
    /// Byte offset where the capture starts. For a position capture this
    /// is the recorded offset itself.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Length of the captured text; 0 for position captures.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True for a `()` position capture.
    pub fn is_position(&self) -> bool {
        self.position
    }

    /// The captured bytes (empty for position captures).
    pub fn as_bytes(&self) -> &'s [u8] {
        &self.subject[self.start..self.start + self.len]
    }
}

/// Mutable state for one match attempt at a fixed starting position.
struct MatchState<'s, 'p> {
    subject: &'s [u8],
    pat: &'p [u8],
    caps: CaptureStack,
    depth: usize,
}

impl<'s, 'p> MatchState<'s, 'p> {
    fn new(subject: &'s [u8], pat: &'p [u8]) -> Self {
        MatchState {
            subject,
            pat,
            caps: CaptureStack::default(),
            depth: MAX_RECURSION,
        }
    }

    /// Recursion entry point; every choice point comes back through here.
    fn do_match(&mut self, s: usize, p: usize) -> Result<Option<usize>> {
        if self.depth == 0 {
            return Err(PatternError::TooComplex);
        }
        self.depth -= 1;
        let res = self.run(s, p);
        self.depth += 1;
        res
    }

    /// Match `pat[p..]` against `subject[s..]`, returning the subject
    /// position just past the match.
    fn run(&mut self, mut s: usize, mut p: usize) -> Result<Option<usize>> {
        loop {
            if p == self.pat.len() {
                return Ok(Some(s));
            }
            match self.pat[p] {
                b'(' => {
                    return if self.pat.get(p + 1) == Some(&b')') {
                        self.start_capture(s, p + 2, CapLen::Position)
                    } else {
                        self.start_capture(s, p + 1, CapLen::Unfinished)
                    };
                }
                b')' => return self.end_capture(s, p + 1),
                b'$' if p + 1 == self.pat.len() => {
                    return Ok((s == self.subject.len()).then_some(s));
                }
                b'%' => match self.pat.get(p + 1).copied() {
                    Some(b'b') => match self.match_balance(s, p + 2) {
                        Some(e) => {
                            s = e;
                            p += 4;
                            continue;
                        }
                        None => return Ok(None),
                    },
                    Some(b'f') => {
                        // Zero width: previous byte outside the set, current
                        // byte inside it. Both ends of the subject read as 0.
                        let set = p + 3;
                        let prev = if s == 0 { 0 } else { self.subject[s - 1] };
                        let curr = self.byte_at(s);
                        let (curr_in, ep) = classes::match_set(self.pat, set, curr);
                        let (prev_in, _) = classes::match_set(self.pat, set, prev);
                        if !prev_in && curr_in {
                            p = ep;
                            continue;
                        }
                        return Ok(None);
                    }
                    Some(d @ b'1'..=b'9') => {
                        match self.match_backref(s, usize::from(d - b'1')) {
                            Some(e) => {
                                s = e;
                                p += 2;
                                continue;
                            }
                            None => return Ok(None),
                        }
                    }
                    // A class or escaped literal: handled as an item below.
                    _ => {}
                },
                _ => {}
            }

            // Single item, possibly followed by a quantifier suffix.
            let ep = self.item_end(p);
            let matched = s < self.subject.len() && self.single_match(self.subject[s], p);
            match self.pat.get(ep).copied() {
                Some(b'?') => {
                    if matched {
                        if let Some(e) = self.do_match(s + 1, ep + 1)? {
                            return Ok(Some(e));
                        }
                    }
                    p = ep + 1;
                }
                Some(b'+') => {
                    return if matched {
                        self.max_expand(s + 1, p, ep)
                    } else {
                        Ok(None)
                    };
                }
                Some(b'*') => return self.max_expand(s, p, ep),
                Some(b'-') => return self.min_expand(s, p, ep),
                _ => {
                    if !matched {
                        return Ok(None);
                    }
                    s += 1;
                    p = ep;
                }
            }
        }
    }

    fn byte_at(&self, s: usize) -> u8 {
        self.subject.get(s).copied().unwrap_or(0)
    }

    /// Pattern index one past the item at `p`.
    fn item_end(&self, p: usize) -> usize {
        match self.pat[p] {
            b'%' => p + 2,
            b'[' => classes::set_end(self.pat, p),
            _ => p + 1,
        }
    }

    /// Does byte `c` match the single item at `pat[p]`?
    fn single_match(&self, c: u8, p: usize) -> bool {
        match self.pat[p] {
            b'.' => true,
            b'%' => classes::match_class(c, self.pat[p + 1]),
            b'[' => classes::match_set(self.pat, p + 1, c).0,
            lit => lit == c,
        }
    }

    /// `%bxy`: consume from an opening `x` to its balancing `y`. The close
    /// byte is checked first, so `x == y` closes on every occurrence.
    fn match_balance(&self, s: usize, p: usize) -> Option<usize> {
        let open = self.pat[p];
        let close = self.pat[p + 1];
        if s >= self.subject.len() || self.subject[s] != open {
            return None;
        }
        let mut count = 1usize;
        let mut i = s + 1;
        while i < self.subject.len() {
            let c = self.subject[i];
            if c == close {
                count -= 1;
                if count == 0 {
                    return Some(i + 1);
                }
            } else if c == open {
                count += 1;
            }
            i += 1;
        }
        None
    }

    /// `%n`: the subject must repeat the text of finished capture `n`.
    fn match_backref(&self, s: usize, idx: usize) -> Option<usize> {
        // The validator only lets %n through after capture n is finished.
        let (start, len) = self.caps.finished(idx)?;
        if self.subject.len() - s >= len
            && self.subject[start..start + len] == self.subject[s..s + len]
        {
            Some(s + len)
        } else {
            None
        }
    }

    /// Greedy expansion for `*` and `+`: take the longest run of item
    /// matches, then retreat one byte at a time until the rest fits.
    fn max_expand(&mut self, s: usize, p: usize, ep: usize) -> Result<Option<usize>> {
        let mut i = 0usize;
        while s + i < self.subject.len() && self.single_match(self.subject[s + i], p) {
            i += 1;
        }
        loop {
            if let Some(e) = self.do_match(s + i, ep + 1)? {
                return Ok(Some(e));
            }
            if i == 0 {
                return Ok(None);
            }
            i -= 1;
        }
    }

    /// Lazy expansion for `-`: try the rest first, growing the run one
    /// byte per failure while the item still matches.
    fn min_expand(&mut self, mut s: usize, p: usize, ep: usize) -> Result<Option<usize>> {
        loop {
            if let Some(e) = self.do_match(s, ep + 1)? {
                return Ok(Some(e));
            }
            if s < self.subject.len() && self.single_match(self.subject[s], p) {
                s += 1;
            } else {
                return Ok(None);
            }
        }
    }

    fn start_capture(&mut self, s: usize, p: usize, what: CapLen) -> Result<Option<usize>> {
        self.caps.open(s, what);
        let res = self.do_match(s, p)?;
        if res.is_none() {
            self.caps.rollback();
        }
        Ok(res)
    }

    fn end_capture(&mut self, s: usize, p: usize) -> Result<Option<usize>> {
        let Some(idx) = self.caps.close(s) else {
            return Ok(None);
        };
        let res = self.do_match(s, p)?;
        if res.is_none() {
            self.caps.reopen(idx);
        }
        Ok(res)
    }
}

/// One match attempt at exactly `pos`; no forward scanning.
pub(crate) fn try_match_at<'s>(
    pattern: &Pattern,
    subject: &'s [u8],
    pos: usize,
) -> Result<Option<Match<'s>>> {
    let mut state = MatchState::new(subject, pattern.code());
    match state.do_match(pos, pattern.begin())? {
        Some(end) => Ok(Some(Match::new(subject, pos, end, &state.caps))),
        None => Ok(None),
    }
}

/// First-match scan: try successive start positions until one matches.
pub(crate) fn find<'s>(pattern: &Pattern, subject: &'s [u8]) -> Result<Option<Match<'s>>> {
    let mut pos = 0;
    loop {
        if let Some(m) = try_match_at(pattern, subject, pos)? {
            return Ok(Some(m));
        }
        if pattern.is_anchored() || pos == subject.len() {
            return Ok(None);
        }
        pos += 1;
    }
}

/// Iterator over all non-overlapping matches in a subject.
///
/// After an empty match the scan still advances by one byte before the
/// pattern is tried again, so iteration always terminates.
pub struct Gmatch<'s, 'p> {
    pattern: &'p Pattern,
    subject: &'s [u8],
    pos: usize,
    last_end: Option<usize>,
    done: bool,
}

impl<'s, 'p> Gmatch<'s, 'p> {
    pub(crate) fn new(pattern: &'p Pattern, subject: &'s [u8]) -> Self {
        Gmatch {
            pattern,
            subject,
            pos: 0,
            last_end: None,
            done: false,
        }
    }
}

impl<'s, 'p> Iterator for Gmatch<'s, 'p> {
    type Item = Result<Match<'s>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        while self.pos <= self.subject.len() {
            match try_match_at(self.pattern, self.subject, self.pos) {
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
                Ok(Some(m)) if !(m.is_empty() && self.last_end == Some(m.end())) => {
                    self.pos = m.end();
                    self.last_end = Some(m.end());
                    if self.pattern.is_anchored() {
                        self.done = true;
                    }
                    return Some(Ok(m));
                }
                // No match here, or an empty match repeated at the spot
                // where the previous match ended: move on one byte.
                Ok(_) => {}
            }
            if self.pattern.is_anchored() {
                break;
            }
            self.pos += 1;
        }
        self.done = true;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find_range(subject: &str, pattern: &str) -> Option<(usize, usize)> {
        let pat = Pattern::new(pattern).unwrap();
        pat.find(subject.as_bytes())
            .unwrap()
            .map(|m| (m.start(), m.end()))
    }

    fn first_str(subject: &str, pattern: &str) -> Option<String> {
        let pat = Pattern::new(pattern).unwrap();
        pat.find(subject.as_bytes())
            .unwrap()
            .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned())
    }

    #[test]
    fn test_literal_match() {
        assert_eq!(find_range("hello world", "world"), Some((6, 11)));
        assert_eq!(find_range("hello", "hello"), Some((0, 5)));
        assert_eq!(find_range("hello world", "xyz"), None);
    }

    #[test]
    fn test_dot_matches_any_byte() {
        assert_eq!(find_range("abc", "a.c"), Some((0, 3)));
        assert_eq!(find_range("aXc", "a.c"), Some((0, 3)));
        assert_eq!(find_range("ac", "a.c"), None);
        // Including NUL.
        let pat = Pattern::new(".").unwrap();
        assert!(pat.is_match(b"\0").unwrap());
    }

    #[test]
    fn test_anchors() {
        assert_eq!(find_range("hello", "^hello"), Some((0, 5)));
        assert_eq!(find_range("say hello", "^hello"), None);
        assert_eq!(find_range("hello", "hello$"), Some((0, 5)));
        assert_eq!(find_range("hello world", "hello$"), None);
        assert_eq!(find_range("hello", "^hello$"), Some((0, 5)));
        assert_eq!(find_range("hello!", "^hello$"), None);
    }

    #[test]
    fn test_dollar_in_the_middle_is_literal() {
        assert_eq!(first_str("a$a", ".$.").as_deref(), Some("a$a"));
        assert_eq!(first_str("a$a", ".%$").as_deref(), Some("a$"));
        assert_eq!(find_range("a$b", "a$"), None);
        assert_eq!(find_range("a$a", "$"), Some((3, 3)));
    }

    #[test]
    fn test_greedy_quantifiers() {
        assert_eq!(first_str("aaab", "a*").as_deref(), Some("aaa"));
        assert_eq!(first_str("aaa", "b*").as_deref(), Some(""));
        assert_eq!(first_str("aaa", "ab*a").as_deref(), Some("aa"));
        assert_eq!(first_str("aba", "ab*a").as_deref(), Some("aba"));
        assert_eq!(first_str("aaab", "a+").as_deref(), Some("aaa"));
        assert_eq!(find_range("aaa", "b+"), None);
        assert_eq!(find_range("aaa", "ab+a"), None);
        assert_eq!(first_str("aba", "ab+a").as_deref(), Some("aba"));
        assert_eq!(first_str("aabaaabaaabaaaba", "b.*b").as_deref(), Some("baaabaaabaaab"));
    }

    #[test]
    fn test_lazy_quantifier() {
        assert_eq!(first_str("aaab", "a-").as_deref(), Some(""));
        assert_eq!(first_str("aaa", "^.-$").as_deref(), Some("aaa"));
        assert_eq!(first_str("aabaaabaaabaaaba", "b.-b").as_deref(), Some("baaab"));
        assert_eq!(first_str("<a><b>", "<.->").as_deref(), Some("<a>"));
    }

    #[test]
    fn test_optional_quantifier() {
        assert_eq!(first_str("aaab", ".?b").as_deref(), Some("ab"));
        assert_eq!(find_range("color", "colou?r"), Some((0, 5)));
        assert_eq!(find_range("colour", "colou?r"), Some((0, 6)));
        assert_eq!(first_str("aa", "^aa?a?a").as_deref(), Some("aa"));
    }

    #[test]
    fn test_classes_in_patterns() {
        assert_eq!(first_str("aloALO", "%l*").as_deref(), Some("alo"));
        assert_eq!(first_str("aLo_ALO", "%a*").as_deref(), Some("aLo"));
        assert_eq!(first_str("0alo alo", "%x*").as_deref(), Some("0a"));
        assert_eq!(first_str("alo alo", "%C+").as_deref(), Some("alo alo"));
        assert_eq!(
            first_str("  \n\r*&\n\r   xuxu  \n\n", "%g%g%g+").as_deref(),
            Some("xuxu")
        );
    }

    #[test]
    fn test_captures_basic() {
        let pat = Pattern::new("(hello) (world)").unwrap();
        let m = pat.find(b"say hello world!").unwrap().unwrap();
        assert_eq!(m.range(), 4..15);
        assert_eq!(m.capture_count(), 2);
        assert_eq!(m.at(0).unwrap().as_bytes(), b"hello");
        assert_eq!(m.at(1).unwrap().as_bytes(), b"world");
        assert_eq!(
            m.at(2).unwrap_err(),
            PatternError::CaptureOutOfRange(2)
        );
    }

    #[test]
    fn test_whole_match_capture_synthesized() {
        let pat = Pattern::new("%a+").unwrap();
        let m = pat.find(b"  word  ").unwrap().unwrap();
        assert_eq!(m.capture_count(), 1);
        assert_eq!(m.at(0).unwrap().as_bytes(), b"word");
        assert!(!m.at(0).unwrap().is_position());
    }

    #[test]
    fn test_nested_captures() {
        let pat = Pattern::new("^(((.).).* (%w*))$").unwrap();
        let m = pat.find(b"clo alo").unwrap().unwrap();
        assert_eq!(m.capture_count(), 4);
        assert_eq!(m.at(0).unwrap().as_bytes(), b"clo alo");
        assert_eq!(m.at(1).unwrap().as_bytes(), b"cl");
        assert_eq!(m.at(2).unwrap().as_bytes(), b"c");
        assert_eq!(m.at(3).unwrap().as_bytes(), b"alo");
    }

    #[test]
    fn test_position_captures() {
        let pat = Pattern::new("()hello()").unwrap();
        let m = pat.find(b"__hello__").unwrap().unwrap();
        assert_eq!(m.capture_count(), 2);
        let first = m.at(0).unwrap();
        assert!(first.is_position());
        assert_eq!(first.start(), 2);
        assert!(first.is_empty());
        let second = m.at(1).unwrap();
        assert!(second.is_position());
        assert_eq!(second.start(), 7);
    }

    #[test]
    fn test_empty_capture_is_not_a_position_capture() {
        let pat = Pattern::new("(%d*)K").unwrap();
        let m = pat.find(b"254 K").unwrap().unwrap();
        assert_eq!(m.range(), 4..5);
        let cap = m.at(0).unwrap();
        assert!(cap.is_empty());
        assert!(!cap.is_position());
    }

    #[test]
    fn test_backreferences() {
        let pat = Pattern::new("(.)%1").unwrap();
        let m = pat.find(b"abccd").unwrap().unwrap();
        assert_eq!(m.range(), 2..4);

        let pat = Pattern::new("^([=]*)=%1$").unwrap();
        assert!(!pat.is_match(b"==========").unwrap());
        assert!(pat.is_match(b"===").unwrap());
    }

    #[test]
    fn test_balanced() {
        assert_eq!(find_range("(inner)", "%b()"), Some((0, 7)));
        assert_eq!(find_range("((nested))", "%b()"), Some((0, 10)));
        assert_eq!(find_range("x{a{b}c}y", "%b{}"), Some((1, 8)));
        assert_eq!(find_range("(unbalanced", "%b()"), None);
        // Equal delimiters: no nesting, every occurrence closes.
        assert_eq!(find_range("alo 'oi' alo", "%b''"), Some((4, 8)));
    }

    #[test]
    fn test_frontier() {
        assert_eq!(find_range("a", "%f[a]"), Some((0, 0)));
        assert_eq!(find_range("a", "%f[^%z]"), Some((0, 0)));
        assert_eq!(find_range("a", "%f[^%l]"), Some((1, 1)));
        assert_eq!(find_range("aba", "%f[a%z]"), Some((2, 2)));
        assert_eq!(find_range("aba", "%f[%z]"), Some((3, 3)));
        assert_eq!(find_range("aba", "%f[%l%z]"), None);
        assert_eq!(find_range("aba", "%f[^%l%z]"), None);
        assert_eq!(find_range(" alo aalo allo", "%f[%S].-%f[%s].-%f[%S]"), Some((1, 5)));
    }

    #[test]
    fn test_empty_pattern_and_subject() {
        assert_eq!(find_range("", ""), Some((0, 0)));
        assert_eq!(find_range("alo", ""), Some((0, 0)));
        assert_eq!(find_range("", "a?"), Some((0, 0)));
        assert_eq!(find_range("", "b*"), Some((0, 0)));
    }

    #[test]
    fn test_embedded_nul_bytes() {
        let pat = Pattern::new("a").unwrap();
        let m = pat.find(b"a\0o a\0o a\0o").unwrap().unwrap();
        assert_eq!(m.range(), 0..1);

        let pat = Pattern::new("b").unwrap();
        let m = pat.find(b"a\0a\0a\0a\0\0ab").unwrap().unwrap();
        assert_eq!(m.range(), 10..11);

        let pat = Pattern::new(b"b\0".as_slice()).unwrap();
        assert!(!pat.is_match(b"a\0\0a\0ab").unwrap());

        let pat = Pattern::new(b"%\0".as_slice()).unwrap();
        assert_eq!(pat.find(b"abc\0efg").unwrap().unwrap().start(), 3);

        let pat = Pattern::new(b"%b\0z".as_slice()).unwrap();
        let m = pat.find(b"abc\0q\0zyz").unwrap().unwrap();
        assert_eq!(m.as_bytes(), b"\0q\0zyz");
    }

    #[test]
    fn test_gmatch_words() {
        let pat = Pattern::new("%a+").unwrap();
        let words: Vec<_> = pat
            .gmatch(b"first second word")
            .map(|m| m.unwrap().as_bytes().to_vec())
            .collect();
        assert_eq!(words, vec![b"first".to_vec(), b"second".to_vec(), b"word".to_vec()]);
    }

    #[test]
    fn test_gmatch_empty_matches_terminate() {
        let pat = Pattern::new("()").unwrap();
        let positions: Vec<_> = pat
            .gmatch(b"abcde")
            .map(|m| m.unwrap().start())
            .collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_gmatch_non_overlapping_in_order() {
        let pat = Pattern::new("a*").unwrap();
        let subject = b"aa b aaa";
        let mut last_end = 0;
        for m in pat.gmatch(subject) {
            let m = m.unwrap();
            assert!(m.start() >= last_end);
            assert!(m.end() >= m.start());
            last_end = m.end();
        }
    }

    #[test]
    fn test_gmatch_anchored_yields_at_most_one() {
        let pat = Pattern::new("^a+").unwrap();
        let matches: Vec<_> = pat.gmatch(b"aaa aaa").collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].as_ref().unwrap().range(), 0..3);

        let pat = Pattern::new("^b").unwrap();
        assert_eq!(pat.gmatch(b"aaa").count(), 0);
    }

    #[test]
    fn test_gmatch_backref_pairs() {
        // Double letters, with the position reported by a capture.
        let pat = Pattern::new("()(.)%2").unwrap();
        let subject = b"xuxx uu ppar r";
        let starts: Vec<_> = pat
            .gmatch(subject)
            .map(|m| m.unwrap().at(0).unwrap().start())
            .collect();
        assert_eq!(starts, vec![2, 5, 8]);
    }

    #[test]
    fn test_deep_branching_reports_too_complex() {
        // Each `a?` that consumes a byte adds one level of recursion, so
        // a run of 200 optional items over 200 matching bytes exhausts the
        // depth budget, while half that finishes fine.
        let subject = vec![b'a'; 200];

        let pat = Pattern::new("a?".repeat(100)).unwrap();
        assert!(pat.find(&subject).unwrap().is_some());

        let pat = Pattern::new("a?".repeat(200)).unwrap();
        assert_eq!(pat.find(&subject).unwrap_err(), PatternError::TooComplex);
    }

    #[test]
    fn test_match_accessors() {
        let pat = Pattern::new("l+").unwrap();
        let m = pat.find(b"hello").unwrap().unwrap();
        assert_eq!(m.start(), 2);
        assert_eq!(m.end(), 4);
        assert_eq!(m.len(), 2);
        assert!(!m.is_empty());
        assert_eq!(m.as_bytes(), b"ll");
        assert_eq!(m.captures().count(), 1);
    }
}
