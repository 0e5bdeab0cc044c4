//! Shared handles to the two page-level collaborators
//!
//! The submitter does not look its collaborators up ambiently; it is handed
//! explicit clones of these handles, so tests can observe and substitute
//! them freely. Both are cheap to clone and safe to share across tasks.

use std::sync::{Arc, Mutex};

/// The command input field: a mutable shared string
#[derive(Clone, Default)]
pub struct InputField {
    value: Arc<Mutex<String>>,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, value: impl Into<String>) {
        *self.value.lock().expect("input lock poisoned") = value.into();
    }

    pub fn value(&self) -> String {
        self.value.lock().expect("input lock poisoned").clone()
    }

    pub fn clear(&self) {
        self.value.lock().expect("input lock poisoned").clear();
    }
}

/// The output region: an append-only sequence of rendered entries plus a
/// scroll position
#[derive(Clone, Default)]
pub struct Transcript {
    inner: Arc<Mutex<TranscriptInner>>,
}

#[derive(Default)]
struct TranscriptInner {
    entries: Vec<String>,
    scroll_top: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, entry: impl Into<String>) {
        self.inner
            .lock()
            .expect("transcript lock poisoned")
            .entries
            .push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.inner
            .lock()
            .expect("transcript lock poisoned")
            .entries
            .clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("transcript lock poisoned").entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total scrollable extent; grows with every appended entry
    pub fn scroll_height(&self) -> usize {
        self.len()
    }

    pub fn scroll_top(&self) -> usize {
        self.inner.lock().expect("transcript lock poisoned").scroll_top
    }

    /// Bring the latest content into view
    pub fn scroll_to_bottom(&self) {
        let mut inner = self.inner.lock().expect("transcript lock poisoned");
        inner.scroll_top = inner.entries.len();
    }
}
