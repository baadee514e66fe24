#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Operator picked the directory downloads are saved into.
    DestinationChosen(std::path::PathBuf),
    /// Operator pressed the download trigger.
    DownloadClicked,
    /// Worker entered a new pipeline phase.
    RunPhase {
        run_id: crate::RunId,
        phase: crate::Phase,
        message: String,
    },
    /// Worker finished one run, successfully or not.
    RunDone {
        run_id: crate::RunId,
        notice: crate::Notice,
    },
}
