use std::fmt;
use std::path::PathBuf;

use crate::view_model::AppViewModel;

pub type RunId = u64;

/// Pipeline phase as shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Fetching,
    Parsing,
    Writing,
    NoData,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Retrieval,
    Parse,
    Write,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Configuration => write!(f, "configuration error"),
            ErrorKind::Retrieval => write!(f, "retrieval error"),
            ErrorKind::Parse => write!(f, "parse error"),
            ErrorKind::Write => write!(f, "write error"),
        }
    }
}

/// Terminal notification for one download run. Each run produces exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Saved { path: PathBuf, data_rows: usize },
    NoData,
    Failed { kind: ErrorKind, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    destination: Option<PathBuf>,
    phase: Phase,
    status_line: String,
    notice: Option<Notice>,
    current_run: Option<RunId>,
    next_run: RunId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            destination: None,
            phase: Phase::Idle,
            status_line: "waiting".to_string(),
            notice: None,
            current_run: None,
            next_run: 1,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase,
            status_line: self.status_line.clone(),
            destination: self.destination.clone(),
            download_enabled: self.current_run.is_none(),
            notice: self.notice.clone(),
        }
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn destination(&self) -> Option<&PathBuf> {
        self.destination.as_ref()
    }

    pub(crate) fn set_destination(&mut self, dir: PathBuf) {
        self.destination = Some(dir);
        self.dirty = true;
    }

    pub(crate) fn run_active(&self) -> bool {
        self.current_run.is_some()
    }

    pub(crate) fn is_current(&self, run_id: RunId) -> bool {
        self.current_run == Some(run_id)
    }

    /// Allocates the next run id and marks it in flight.
    pub(crate) fn begin_run(&mut self) -> RunId {
        let run_id = self.next_run;
        self.next_run += 1;
        self.current_run = Some(run_id);
        self.notice = None;
        self.phase = Phase::Idle;
        self.status_line = "starting download".to_string();
        self.dirty = true;
        run_id
    }

    pub(crate) fn apply_phase(&mut self, phase: Phase, message: String) {
        self.phase = phase;
        self.status_line = message;
        self.dirty = true;
    }

    pub(crate) fn apply_outcome(&mut self, notice: Notice) {
        self.phase = match &notice {
            Notice::Saved { .. } => Phase::Succeeded,
            Notice::NoData => Phase::NoData,
            Notice::Failed { .. } => Phase::Failed,
        };
        self.status_line = status_line_for(&notice);
        self.notice = Some(notice);
        self.current_run = None;
        self.dirty = true;
    }
}

fn status_line_for(notice: &Notice) -> String {
    match notice {
        Notice::Saved { path, data_rows } => {
            format!("saved {} ({data_rows} rows)", path.display())
        }
        Notice::NoData => "the sheet has no data rows; nothing was written".to_string(),
        Notice::Failed { kind, message } => format!("{kind}: {message}"),
    }
}
