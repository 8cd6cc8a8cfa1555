//! Capture bookkeeping for a single match attempt
//!
//! Captures behave like a stack during matching: `(` pushes a record,
//! `)` finishes the most recent unfinished one, and backtracking undoes
//! either step exactly. The stack keeps its first two records inline and
//! only touches the heap when a pattern opens a third capture.

use smallvec::SmallVec;

/// State of one capture record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CapLen {
    /// Opened by `(` but not yet closed.
    Unfinished,
    /// A position capture `()`: zero width, records the offset only.
    Position,
    /// Closed with this many bytes.
    Len(usize),
}

/// A single capture record.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cap {
    pub start: usize,
    pub len: CapLen,
}

/// Stack of captures for one match attempt.
#[derive(Debug, Default)]
pub(crate) struct CaptureStack {
    caps: SmallVec<[Cap; 2]>,
}

impl CaptureStack {
    /// Push a new record. The validator bounds how many captures a
    /// pattern can open, so this cannot grow without limit.
    pub fn open(&mut self, start: usize, len: CapLen) {
        debug_assert!(self.caps.len() < crate::pattern::MAX_CAPTURES);
        debug_assert!(!matches!(len, CapLen::Len(_)));
        self.caps.push(Cap { start, len });
    }

    /// Undo an `open` whose branch failed.
    pub fn rollback(&mut self) {
        self.caps.pop();
    }

    /// Finish the most recent unfinished capture at subject position `s`.
    /// Returns its index so a failed branch can `reopen` it.
    pub fn close(&mut self, s: usize) -> Option<usize> {
        let idx = self
            .caps
            .iter()
            .rposition(|c| c.len == CapLen::Unfinished)?;
        self.caps[idx].len = CapLen::Len(s - self.caps[idx].start);
        Some(idx)
    }

    /// Undo a `close` whose branch failed.
    pub fn reopen(&mut self, idx: usize) {
        self.caps[idx].len = CapLen::Unfinished;
    }

    /// Start and length of a finished capture, for backreferences.
    /// Position captures and unfinished records yield `None`.
    pub fn finished(&self, idx: usize) -> Option<(usize, usize)> {
        let cap = self.caps.get(idx)?;
        match cap.len {
            CapLen::Len(n) => Some((cap.start, n)),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.caps.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cap> {
        self.caps.iter()
    }

    /// True once the stack has spilled past its inline slots.
    #[cfg(test)]
    pub fn spilled(&self) -> bool {
        self.caps.spilled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close() {
        let mut caps = CaptureStack::default();
        caps.open(3, CapLen::Unfinished);
        assert_eq!(caps.len(), 1);
        assert_eq!(caps.close(8), Some(0));
        assert_eq!(caps.finished(0), Some((3, 5)));
    }

    #[test]
    fn test_close_picks_most_recent_unfinished() {
        let mut caps = CaptureStack::default();
        caps.open(0, CapLen::Unfinished);
        caps.open(2, CapLen::Unfinished);
        assert_eq!(caps.close(4), Some(1));
        assert_eq!(caps.close(6), Some(0));
        assert_eq!(caps.finished(0), Some((0, 6)));
        assert_eq!(caps.finished(1), Some((2, 2)));
    }

    #[test]
    fn test_close_skips_finished_and_position() {
        let mut caps = CaptureStack::default();
        caps.open(0, CapLen::Unfinished);
        caps.open(1, CapLen::Position);
        assert_eq!(caps.close(5), Some(0));
        assert_eq!(caps.close(6), None);
    }

    #[test]
    fn test_rollback_and_reopen_restore_state() {
        let mut caps = CaptureStack::default();
        caps.open(0, CapLen::Unfinished);
        let idx = caps.close(4).unwrap();
        caps.reopen(idx);
        assert_eq!(caps.finished(0), None);
        caps.rollback();
        assert_eq!(caps.len(), 0);
    }

    #[test]
    fn test_position_captures_are_not_backreference_targets() {
        let mut caps = CaptureStack::default();
        caps.open(7, CapLen::Position);
        assert_eq!(caps.finished(0), None);
    }

    #[test]
    fn test_inline_then_spill() {
        let mut caps = CaptureStack::default();
        caps.open(0, CapLen::Unfinished);
        caps.open(1, CapLen::Unfinished);
        assert!(!caps.spilled());
        caps.open(2, CapLen::Unfinished);
        assert!(caps.spilled());
        assert_eq!(caps.len(), 3);
    }
}
