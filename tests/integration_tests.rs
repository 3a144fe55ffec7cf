//! Integration tests for the tap/match/clear cycle

use pretty_assertions::assert_eq;
use tui_memory::core::{EngineError, GameSnapshot, GameState};
use tui_memory::types::{GameConfig, TapOutcome, TilePos, MISMATCH_DELAY_MS, TICK_MS};

/// Positions holding `value`, row-major.
fn positions_of(state: &GameState, value: u32) -> Vec<TilePos> {
    state
        .board()
        .iter()
        .filter(|t| t.value == value)
        .map(|t| t.pos())
        .collect()
}

fn new_game(rows: u32, columns: u32, m: u32) -> GameState {
    GameState::new(GameConfig::new(rows, columns, m, "test"), 2024).unwrap()
}

#[test]
fn test_two_by_two_walkthrough() {
    let mut state = new_game(2, 2, 2);
    assert_eq!(state.config().group_count(), 2);

    let zeros = positions_of(&state, 0);
    assert_eq!(zeros.len(), 2);
    assert_eq!(state.tap(zeros[0]).unwrap(), TapOutcome::Selected);
    assert_eq!(state.tap(zeros[1]).unwrap(), TapOutcome::Matched { value: 0 });
    assert_eq!(state.locked_count(), 2);
    assert!(!state.is_won());

    let ones = positions_of(&state, 1);
    state.tap(ones[0]).unwrap();
    assert_eq!(state.tap(ones[1]).unwrap(), TapOutcome::Matched { value: 1 });
    assert_eq!(state.locked_count(), 4);
    assert!(state.is_won());
    assert_eq!(state.score(), 2);
    assert_eq!(state.taps(), 4);
}

#[test]
fn test_score_counts_taps_without_matches() {
    let mut state = new_game(4, 4, 2);
    let a = positions_of(&state, 0)[0];
    let b = positions_of(&state, 1)[0];
    let c = positions_of(&state, 2)[0];

    state.tap(a).unwrap();
    assert_eq!(state.tap(b).unwrap(), TapOutcome::Mismatched);
    // Tapping elsewhere flushes the face-up pair first.
    assert_eq!(state.tap(c).unwrap(), TapOutcome::Selected);
    assert_eq!(state.score(), 3);
    assert_eq!(state.locked_count(), 0);
    assert!(!state.board().get(a).unwrap().selected);
    assert!(!state.board().get(b).unwrap().selected);
}

#[test]
fn test_match_nets_one_point() {
    for m in [1, 2, 3, 4] {
        let mut state = new_game(3, 4, m);
        for pos in positions_of(&state, 0) {
            state.tap(pos).unwrap();
        }
        assert_eq!(state.score(), 1, "match size {m}");
        assert_eq!(state.locked_count(), m);
    }
}

#[test]
fn test_perfect_game_scores_group_count() {
    let mut state = new_game(4, 6, 3);
    for value in 0..state.config().group_count() {
        for pos in positions_of(&state, value) {
            state.tap(pos).unwrap();
        }
    }
    assert!(state.is_won());
    assert_eq!(state.score(), 8);
}

#[test]
fn test_mismatch_clears_after_delay() {
    let mut state = new_game(2, 2, 2);
    let a = positions_of(&state, 0)[0];
    let b = positions_of(&state, 1)[0];
    state.tap(a).unwrap();
    state.tap(b).unwrap();

    let mut elapsed = 0;
    while elapsed + TICK_MS < MISMATCH_DELAY_MS {
        assert!(!state.tick(TICK_MS));
        elapsed += TICK_MS;
    }
    assert!(state.board().get(a).unwrap().selected);
    assert!(state.tick(TICK_MS));
    assert!(state.selection().is_empty());
    assert_eq!(state.board().selected_count(), 0);
    assert!(state.pending_clear().is_none());
}

#[test]
fn test_taps_on_face_up_tiles_are_ignored() {
    let mut state = new_game(2, 2, 2);
    let zeros = positions_of(&state, 0);
    state.tap(zeros[0]).unwrap();
    assert_eq!(state.tap(zeros[0]).unwrap(), TapOutcome::Ignored);
    state.tap(zeros[1]).unwrap();
    assert_eq!(state.tap(zeros[1]).unwrap(), TapOutcome::Ignored);
    assert_eq!(state.score(), 1);
    assert_eq!(state.taps(), 2);
}

#[test]
fn test_out_of_range_tap_rejected_without_change() {
    let mut state = new_game(2, 2, 2);
    let before = state.snapshot();
    let err = state.tap(TilePos::new(2, 0)).unwrap_err();
    assert_eq!(err, EngineError::InvalidTileReference { row: 2, column: 0 });
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_checked_tap_validates_value() {
    let mut state = new_game(2, 2, 2);
    let pos = positions_of(&state, 1)[0];
    let err = state.tap_checked(pos, 0).unwrap_err();
    assert!(matches!(err, EngineError::TileValueMismatch { expected: 0, actual: 1, .. }));
    assert_eq!(state.score(), 0);
    assert_eq!(state.tap_checked(pos, 1).unwrap(), TapOutcome::Selected);
}

#[test]
fn test_reset_restores_initial_session() {
    let mut state = new_game(4, 4, 2);
    for pos in positions_of(&state, 0) {
        state.tap(pos).unwrap();
    }
    state.tap(positions_of(&state, 1)[0]).unwrap();
    let episode = state.episode_id();

    state.reset();
    assert_eq!(state.score(), 0);
    assert_eq!(state.locked_count(), 0);
    assert_eq!(state.taps(), 0);
    assert!(state.selection().is_empty());
    assert!(state.pending_clear().is_none());
    assert_eq!(state.board().rows(), 4);
    assert_eq!(state.board().columns(), 4);
    assert!(state.board().iter().all(|t| !t.is_face_up()));
    assert_eq!(state.episode_id(), episode + 1);
}

#[test]
fn test_snapshot_into_reuses_buffer() {
    let mut state = new_game(2, 2, 2);
    let mut snap = GameSnapshot::default();
    state.snapshot_into(&mut snap);
    assert_eq!(snap.tile_count(), 4);
    assert!(!snap.won);

    let pos = positions_of(&state, 0)[0];
    state.tap(pos).unwrap();
    // The old snapshot keeps the pre-tap board.
    assert!(!snap.board.get(pos).unwrap().selected);

    state.snapshot_into(&mut snap);
    assert!(snap.board.get(pos).unwrap().selected);
    assert_eq!(snap.selection, vec![pos]);
    assert_eq!(snap.score, 1);
}
