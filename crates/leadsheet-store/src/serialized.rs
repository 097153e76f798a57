//! In-process serialization of appends.

use std::sync::Mutex;

use leadsheet_core::{Submission, SubmissionStore};

use crate::Error;

/// Wraps a store so that only one append runs at a time.
///
/// The lock spans the whole read-modify-write, so appends issued from one
/// process never lose rows. Other processes writing the same file are not
/// coordinated.
#[derive(Debug)]
pub struct SerializedStore<S> {
    inner: S,
    lock: Mutex<()>,
}

impl<S: SubmissionStore> SerializedStore<S> {
    /// Serializes appends to `inner`.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            lock: Mutex::new(()),
        }
    }

    /// The wrapped store.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: SubmissionStore> SubmissionStore for SerializedStore<S> {
    fn append(&self, submission: &Submission) -> leadsheet_core::Result<usize> {
        let _guard = self.lock.lock().map_err(|_| Error::LockPoisoned)?;
        self.inner.append(submission)
    }

    fn records(&self) -> leadsheet_core::Result<Vec<Submission>> {
        let _guard = self.lock.lock().map_err(|_| Error::LockPoisoned)?;
        self.inner.records()
    }
}
