//! Character-class and bracket-set evaluation
//!
//! Classes operate on single bytes. The ASCII tables are hardcoded so the
//! engine behaves the same regardless of the process locale; bytes above
//! 0x7F satisfy no class predicate but still take part in the unsigned
//! range comparisons of bracket sets.

/// C `isspace` table: space, `\t`, `\n`, `\v`, `\f`, `\r`.
///
/// Rust's `is_ascii_whitespace` leaves out vertical tab, so this is spelled
/// out.
fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Does byte `c` satisfy the single-class token `cl`?
///
/// `cl` is the byte following a `%` in the pattern: a class letter
/// (lowercase matches, uppercase negates), `z`/`Z` for the zero byte, or
/// any other byte taken as an escaped literal.
pub(crate) fn match_class(c: u8, cl: u8) -> bool {
    let res = match cl.to_ascii_lowercase() {
        b'a' => c.is_ascii_alphabetic(),
        b'c' => c.is_ascii_control(),
        b'd' => c.is_ascii_digit(),
        b'g' => c.is_ascii_graphic(),
        b'l' => c.is_ascii_lowercase(),
        b'p' => c.is_ascii_punctuation(),
        b's' => is_space(c),
        b'u' => c.is_ascii_uppercase(),
        b'w' => c.is_ascii_alphanumeric(),
        b'x' => c.is_ascii_hexdigit(),
        b'z' => c == 0,
        _ => return cl == c,
    };
    if cl.is_ascii_uppercase() {
        !res
    } else {
        res
    }
}

/// Does byte `c` belong to the bracket set starting at `pat[p]`?
///
/// `p` points one past the opening `[`. Returns the membership verdict and
/// the index one past the closing `]`. Set items are tried in order:
/// `%x` escapes, `a-b` ranges (a `-` that is the last element or sits
/// right before `]` is a literal), then literal bytes. A `]` directly
/// after `[` or `[^` is a member, not the terminator.
pub(crate) fn match_set(pat: &[u8], mut p: usize, c: u8) -> (bool, usize) {
    let mut negate = false;
    if pat.get(p) == Some(&b'^') {
        negate = true;
        p += 1;
    }

    let mut found = false;
    if pat.get(p) == Some(&b']') {
        if c == b']' {
            found = true;
        }
        p += 1;
    }

    while p < pat.len() && pat[p] != b']' {
        if pat[p] == b'%' && p + 1 < pat.len() {
            if match_class(c, pat[p + 1]) {
                found = true;
            }
            p += 2;
        } else if p + 2 < pat.len() && pat[p + 1] == b'-' && pat[p + 2] != b']' {
            if pat[p] <= c && c <= pat[p + 2] {
                found = true;
            }
            p += 3;
        } else {
            if pat[p] == c {
                found = true;
            }
            p += 1;
        }
    }

    let end = if p < pat.len() { p + 1 } else { p };
    (found != negate, end)
}

/// Index one past the `]` closing the set that starts at `pat[p]` (the
/// `[` itself). The pattern must have passed validation.
pub(crate) fn set_end(pat: &[u8], mut p: usize) -> usize {
    p += 1;
    if pat.get(p) == Some(&b'^') {
        p += 1;
    }
    if pat.get(p) == Some(&b']') {
        p += 1;
    }
    while p < pat.len() && pat[p] != b']' {
        if pat[p] == b'%' {
            p += 1;
        }
        p += 1;
    }
    debug_assert!(p < pat.len(), "set_end called on an unvalidated pattern");
    p + 1
}
