use std::path::PathBuf;

use sheetpull_core::{update, AppState, ErrorKind, Msg, Notice, Phase};

#[test]
fn click_without_destination_fails_fast_with_no_effect() {
    let (mut state, effects) = update(AppState::new(), Msg::DownloadClicked);

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.phase, Phase::Failed);
    assert!(matches!(
        view.notice,
        Some(Notice::Failed {
            kind: ErrorKind::Configuration,
            ..
        })
    ));
    // The operator can pick a folder and try again right away.
    assert!(view.download_enabled);
    assert!(state.consume_dirty());
}

#[test]
fn click_during_a_run_is_dropped() {
    let (state, _) = update(
        AppState::new(),
        Msg::DestinationChosen(PathBuf::from("/tmp/out")),
    );
    let (mut state, first) = update(state, Msg::DownloadClicked);
    assert_eq!(first.len(), 1);
    assert!(state.consume_dirty());

    let before = state.clone();
    let (mut state, effects) = update(state, Msg::DownloadClicked);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.view(), before.view());
}

#[test]
fn events_for_a_stale_run_are_ignored() {
    let (state, _) = update(
        AppState::new(),
        Msg::DestinationChosen(PathBuf::from("/tmp/out")),
    );
    let (mut state, _) = update(state, Msg::DownloadClicked);
    assert!(state.consume_dirty());

    // A phase event from some other run id leaves the state untouched.
    let (mut state, _) = update(
        state,
        Msg::RunPhase {
            run_id: 99,
            phase: Phase::Writing,
            message: "stale".to_string(),
        },
    );
    assert_ne!(state.view().phase, Phase::Writing);
    assert!(!state.consume_dirty());

    // A stale completion neither re-enables the trigger nor posts a notice.
    let (state, _) = update(
        state,
        Msg::RunDone {
            run_id: 99,
            notice: Notice::NoData,
        },
    );
    assert!(!state.view().download_enabled);
    assert!(state.view().notice.is_none());
}

#[test]
fn choosing_a_destination_updates_the_view() {
    let (mut state, effects) = update(
        AppState::new(),
        Msg::DestinationChosen(PathBuf::from("/data/exports")),
    );

    assert!(effects.is_empty());
    assert_eq!(
        state.view().destination,
        Some(PathBuf::from("/data/exports"))
    );
    assert!(state.consume_dirty());
}
