use std::sync::mpsc;
use std::thread;

use log::info;
use sheetpull_core::{Effect, ErrorKind, Msg, Notice, Phase};
use sheetpull_engine::{PipelineConfig, PipelineEvent, PipelineHandle, RunOutcome, RunStarter};

/// Executes core effects against the pipeline worker and feeds worker events
/// back into the update loop as messages.
pub struct EffectRunner {
    starter: RunStarter,
}

impl EffectRunner {
    pub fn new(sheet_url: String, msg_tx: mpsc::Sender<Msg>) -> Self {
        let pipeline = PipelineHandle::new(PipelineConfig::new(sheet_url));
        let starter = pipeline.starter();
        spawn_event_loop(pipeline, msg_tx);
        Self { starter }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartRun { run_id, destination } => {
                    info!("StartRun run_id={} destination={}", run_id, destination.display());
                    self.starter.start(run_id, destination);
                }
            }
        }
    }
}

fn spawn_event_loop(pipeline: PipelineHandle, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Some(event) = pipeline.recv() {
            let msg = match event {
                PipelineEvent::Status {
                    run_id,
                    phase,
                    message,
                } => Msg::RunPhase {
                    run_id,
                    phase: map_phase(phase),
                    message,
                },
                PipelineEvent::Finished { run_id, outcome } => Msg::RunDone {
                    run_id,
                    notice: map_outcome(outcome),
                },
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}

fn map_phase(phase: sheetpull_engine::Phase) -> Phase {
    match phase {
        sheetpull_engine::Phase::Idle => Phase::Idle,
        sheetpull_engine::Phase::Fetching => Phase::Fetching,
        sheetpull_engine::Phase::Parsing => Phase::Parsing,
        sheetpull_engine::Phase::Writing => Phase::Writing,
        sheetpull_engine::Phase::NoData => Phase::NoData,
        sheetpull_engine::Phase::Succeeded => Phase::Succeeded,
        sheetpull_engine::Phase::Failed => Phase::Failed,
    }
}

fn map_outcome(outcome: RunOutcome) -> Notice {
    match outcome {
        RunOutcome::Saved(summary) => Notice::Saved {
            path: summary.path,
            data_rows: summary.data_rows,
        },
        RunOutcome::NoData => Notice::NoData,
        RunOutcome::Failed { kind, message } => Notice::Failed {
            kind: map_kind(kind),
            message,
        },
    }
}

fn map_kind(kind: sheetpull_engine::FailureKind) -> ErrorKind {
    match kind {
        sheetpull_engine::FailureKind::Retrieval => ErrorKind::Retrieval,
        sheetpull_engine::FailureKind::Parse => ErrorKind::Parse,
        sheetpull_engine::FailureKind::Write => ErrorKind::Write,
    }
}
