//! Storage seam between the HTTP service and the persisted submissions.

use serde::{Deserialize, Serialize};

use crate::{Result, Submission};

/// An append-only, insertion-ordered collection of submissions.
///
/// Implementations are blocking; async callers should run them on a
/// blocking thread.
pub trait SubmissionStore: Send + Sync + 'static {
    /// Appends one submission and returns the number of records afterwards.
    fn append(&self, submission: &Submission) -> Result<usize>;

    /// Returns every stored submission in arrival order.
    fn records(&self) -> Result<Vec<Submission>>;
}

/// Whether appends are serialized inside the process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Each append reads, modifies, and rewrites the file unguarded.
    ///
    /// Two overlapping appends can lose one of the rows.
    #[default]
    Direct,
    /// Appends take an in-process lock around the read-modify-write.
    Serialized,
}
