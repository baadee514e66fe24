use crate::{AppState, Effect, ErrorKind, Msg, Notice};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::DestinationChosen(dir) => {
            state.set_destination(dir);
            Vec::new()
        }
        Msg::DownloadClicked => {
            if state.run_active() {
                // The trigger is disabled while a run is in flight; a click
                // that races the disable is dropped.
                return (state, Vec::new());
            }
            let Some(destination) = state.destination().cloned() else {
                state.apply_outcome(Notice::Failed {
                    kind: ErrorKind::Configuration,
                    message: "choose a destination folder before downloading".to_string(),
                });
                return (state, Vec::new());
            };
            let run_id = state.begin_run();
            vec![Effect::StartRun { run_id, destination }]
        }
        Msg::RunPhase {
            run_id,
            phase,
            message,
        } => {
            // Events from a run that is no longer current are dropped.
            if state.is_current(run_id) {
                state.apply_phase(phase, message);
            }
            Vec::new()
        }
        Msg::RunDone { run_id, notice } => {
            if state.is_current(run_id) {
                state.apply_outcome(notice);
            }
            Vec::new()
        }
    };

    (state, effects)
}
