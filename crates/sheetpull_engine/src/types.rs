use std::fmt;
use std::path::PathBuf;

pub type RunId = u64;

/// Phases one download run moves through, in order. `NoData` is terminal and
/// distinct from both `Succeeded` and `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Fetching,
    Parsing,
    Writing,
    NoData,
    Succeeded,
    Failed,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub path: PathBuf,
    pub data_rows: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Retrieval,
    Parse,
    Write,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Retrieval => write!(f, "retrieval error"),
            FailureKind::Parse => write!(f, "parse error"),
            FailureKind::Write => write!(f, "write error"),
        }
    }
}

/// Terminal result of one run. Emitted exactly once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Saved(WriteSummary),
    NoData,
    Failed { kind: FailureKind, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    /// A phase transition, emitted before the corresponding work starts.
    Status {
        run_id: RunId,
        phase: Phase,
        message: String,
    },
    /// The run finished; `outcome` is the single terminal notification.
    Finished { run_id: RunId, outcome: RunOutcome },
}
