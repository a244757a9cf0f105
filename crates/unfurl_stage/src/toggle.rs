//! Exclusive toggle state
//!
//! The accordion selection model: at most one item open at a time, toggling
//! the open item closes it, toggling any other item moves the selection.
//! Every `(state, index)` pair has a defined outcome.

/// Result of a toggle: which item is closing and which is opening
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleChange {
    /// Item that was open and is now closing
    pub closed: Option<usize>,
    /// Item that is now opening
    pub opened: Option<usize>,
}

impl ToggleChange {
    /// True when the toggle changed nothing (out-of-range index)
    pub fn is_noop(&self) -> bool {
        self.closed.is_none() && self.opened.is_none()
    }
}

/// At-most-one-open selection over a fixed number of items
#[derive(Clone, Copy, Debug)]
pub struct ExclusiveToggle {
    len: usize,
    open: Option<usize>,
}

impl ExclusiveToggle {
    /// All items start closed
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Currently open item, if any
    pub fn open(&self) -> Option<usize> {
        self.open
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the toggle has no items
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Toggle `index`: the open item closes, any other item opens exclusively
    ///
    /// Out-of-range indices change nothing and report a no-op.
    pub fn toggle(&mut self, index: usize) -> ToggleChange {
        if index >= self.len {
            return ToggleChange::default();
        }
        match self.open {
            Some(open) if open == index => {
                self.open = None;
                ToggleChange {
                    closed: Some(index),
                    opened: None,
                }
            }
            other => {
                self.open = Some(index);
                ToggleChange {
                    closed: other,
                    opened: Some(index),
                }
            }
        }
    }
}
