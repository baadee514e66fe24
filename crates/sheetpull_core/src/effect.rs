use std::path::PathBuf;

/// Side effects the front end executes after an update step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand a new run to the pipeline worker.
    StartRun { run_id: crate::RunId, destination: PathBuf },
}
