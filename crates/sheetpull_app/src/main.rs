//! Operator front end: a thin command-line collaborator around the pipeline.
//!
//! Feeds operator input through the pure core, executes effects against the
//! engine, logs every status transition, and reports exactly one terminal
//! notification per run.
mod effects;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;

use log::info;
use pipeline_logging::{initialize, LogDestination};
use sheetpull_core::{update, AppState, ErrorKind, Msg, Notice};

use crate::effects::EffectRunner;

fn main() -> ExitCode {
    initialize(LogDestination::Both);

    let mut args = std::env::args().skip(1);
    let (Some(sheet_url), Some(destination)) = (args.next(), args.next()) else {
        eprintln!("usage: sheetpull_app <sheet-url> <destination-dir>");
        return ExitCode::from(2);
    };

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(sheet_url, msg_tx.clone());

    let _ = msg_tx.send(Msg::DestinationChosen(PathBuf::from(destination)));
    let _ = msg_tx.send(Msg::DownloadClicked);

    let mut state = AppState::new();
    while let Ok(msg) = msg_rx.recv() {
        let (next, effects) = update(state, msg);
        state = next;
        runner.enqueue(effects);

        if state.consume_dirty() {
            info!("{}", state.view().status_line);
        }
        if let Some(notice) = state.view().notice {
            return report(&notice);
        }
    }

    ExitCode::FAILURE
}

fn report(notice: &Notice) -> ExitCode {
    match notice {
        Notice::Saved { path, data_rows } => {
            println!("saved {} ({} data rows)", path.display(), data_rows);
            ExitCode::SUCCESS
        }
        Notice::NoData => {
            println!("the sheet is reachable but has no data rows; nothing was written");
            ExitCode::SUCCESS
        }
        Notice::Failed { kind, message } => {
            eprintln!("{kind}: {message}");
            if matches!(kind, ErrorKind::Configuration) {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
