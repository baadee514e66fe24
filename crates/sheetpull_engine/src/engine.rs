use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use chrono::{DateTime, Local};

use crate::export_url::csv_export_url;
use crate::fetch::{FetchSettings, ReqwestFetcher, SheetFetcher};
use crate::parse::{parse_table, ParseError};
use crate::types::{FailureKind, Phase, PipelineEvent, RunId, RunOutcome};
use crate::workbook::WorkbookWriter;

/// Observer seam between the pipeline worker and whatever front end is
/// listening.
pub trait StatusSink: Send + Sync {
    fn emit(&self, event: PipelineEvent);
}

pub struct ChannelStatusSink {
    tx: mpsc::Sender<PipelineEvent>,
}

impl ChannelStatusSink {
    pub fn new(tx: mpsc::Sender<PipelineEvent>) -> Self {
        Self { tx }
    }
}

impl StatusSink for ChannelStatusSink {
    fn emit(&self, event: PipelineEvent) {
        let _ = self.tx.send(event);
    }
}

pub type Clock = Arc<dyn Fn() -> DateTime<Local> + Send + Sync>;

#[derive(Clone)]
pub struct PipelineConfig {
    pub sheet_url: String,
    pub fetch: FetchSettings,
    pub file_prefix: String,
    pub sheet_name: String,
    pub now: Clock,
}

impl PipelineConfig {
    /// Reference deployment defaults; only the source URL is mandatory.
    pub fn new(sheet_url: impl Into<String>) -> Self {
        Self {
            sheet_url: sheet_url.into(),
            fetch: FetchSettings::default(),
            file_prefix: "orders".to_string(),
            sheet_name: "Orders".to_string(),
            now: Arc::new(Local::now),
        }
    }
}

enum PipelineCommand {
    Start { run_id: RunId, destination: PathBuf },
}

/// Handle to the pipeline worker thread.
///
/// Commands go in over a channel; status and completion events come back out.
/// Runs are fire-and-forget: the worker is never joined, and a run cannot be
/// cancelled once started.
pub struct PipelineHandle {
    cmd_tx: mpsc::Sender<PipelineCommand>,
    event_rx: mpsc::Receiver<PipelineEvent>,
}

/// Cloneable command side of a [`PipelineHandle`], for callers that hand the
/// event side to a different thread.
#[derive(Clone)]
pub struct RunStarter {
    cmd_tx: mpsc::Sender<PipelineCommand>,
}

impl RunStarter {
    pub fn start(&self, run_id: RunId, destination: impl Into<PathBuf>) {
        let _ = self.cmd_tx.send(PipelineCommand::Start {
            run_id,
            destination: destination.into(),
        });
    }
}

impl PipelineHandle {
    pub fn new(config: PipelineConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel::<PipelineEvent>();
        let fetcher = Arc::new(ReqwestFetcher::new(config.fetch.clone()));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let PipelineCommand::Start { run_id, destination } = command;
                let fetcher = fetcher.clone();
                let config = config.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let sink = ChannelStatusSink::new(event_tx.clone());
                    let outcome =
                        run_pipeline(&config, fetcher.as_ref(), run_id, destination, &sink).await;
                    let _ = event_tx.send(PipelineEvent::Finished { run_id, outcome });
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn starter(&self) -> RunStarter {
        RunStarter {
            cmd_tx: self.cmd_tx.clone(),
        }
    }

    pub fn start(&self, run_id: RunId, destination: impl Into<PathBuf>) {
        self.starter().start(run_id, destination);
    }

    /// Blocks for the next event; `None` once the worker is gone.
    pub fn recv(&self) -> Option<PipelineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn try_recv(&self) -> Option<PipelineEvent> {
        self.event_rx.try_recv().ok()
    }
}

/// Runs one invocation end to end. Every status is emitted before the stage
/// it announces; every stage error is converted here, so nothing escapes the
/// worker unhandled.
pub async fn run_pipeline(
    config: &PipelineConfig,
    fetcher: &dyn SheetFetcher,
    run_id: RunId,
    destination: PathBuf,
    sink: &dyn StatusSink,
) -> RunOutcome {
    emit_status(
        sink,
        run_id,
        Phase::Fetching,
        "fetching dataset from the sheet endpoint".to_string(),
    );
    let export_url = csv_export_url(&config.sheet_url);
    let payload = match fetcher.fetch(&export_url).await {
        Ok(payload) => payload,
        Err(err) => return fail(sink, run_id, FailureKind::Retrieval, err.to_string()),
    };
    log::info!("run {run_id}: fetched {} bytes", payload.byte_len);

    emit_status(sink, run_id, Phase::Parsing, "parsing rows".to_string());
    let table = match parse_table(&payload.text) {
        Ok(table) => table,
        Err(ParseError::EmptyDataset) => {
            emit_status(
                sink,
                run_id,
                Phase::NoData,
                "the sheet has no data rows; nothing to write".to_string(),
            );
            return RunOutcome::NoData;
        }
        Err(err) => return fail(sink, run_id, FailureKind::Parse, err.to_string()),
    };
    log::info!(
        "run {run_id}: parsed {} columns, {} rows",
        table.columns.len(),
        table.rows.len()
    );

    emit_status(sink, run_id, Phase::Writing, "writing the workbook".to_string());
    let writer = WorkbookWriter::new(
        destination,
        config.file_prefix.clone(),
        config.sheet_name.clone(),
    );
    let summary = match writer.write(&table, &(config.now)()) {
        Ok(summary) => summary,
        Err(err) => return fail(sink, run_id, FailureKind::Write, err.to_string()),
    };

    emit_status(
        sink,
        run_id,
        Phase::Succeeded,
        format!("saved {} ({} rows)", summary.path.display(), summary.data_rows),
    );
    RunOutcome::Saved(summary)
}

fn emit_status(sink: &dyn StatusSink, run_id: RunId, phase: Phase, message: String) {
    sink.emit(PipelineEvent::Status {
        run_id,
        phase,
        message,
    });
}

fn fail(sink: &dyn StatusSink, run_id: RunId, kind: FailureKind, message: String) -> RunOutcome {
    log::warn!("run {run_id} failed: {kind}: {message}");
    emit_status(sink, run_id, Phase::Failed, message.clone());
    RunOutcome::Failed { kind, message }
}
