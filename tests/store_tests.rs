//! Score store against a real file

use pretty_assertions::assert_eq;
use tempfile::tempdir;
use tui_memory::core::GameState;
use tui_memory::store::{JsonFileStore, ScoreRecord, ScoreStore, StoreError};
use tui_memory::types::{GameConfig, TapOutcome, SCORES_COLLECTION_KEY};
use tui_memory::App;

fn finish(state: &mut GameState) {
    for value in 0..state.config().group_count() {
        let group: Vec<_> = state
            .board()
            .iter()
            .filter(|t| t.value == value)
            .map(|t| t.pos())
            .collect();
        for pos in group {
            assert_ne!(state.tap(pos).unwrap(), TapOutcome::Ignored);
        }
    }
}

#[test]
fn won_game_is_appended_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scores.json");

    let mut game = GameState::new(GameConfig::preset("hard").unwrap(), 5).unwrap();
    finish(&mut game);
    let mut app = App::new(game, JsonFileStore::new(&path));
    app.save_score().unwrap();

    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let saved = &raw[SCORES_COLLECTION_KEY][0];
    assert_eq!(saved["name"], "");
    assert_eq!(saved["matrix"], "4x6");
    assert_eq!(saved["matches"], 3);
    assert_eq!(saved["score"], 8);
    assert!(saved["date"].as_str().unwrap().ends_with(" GMT"));
}

#[test]
fn records_accumulate_across_store_instances() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scores.json");
    let config = GameConfig::default();

    JsonFileStore::new(&path)
        .append(SCORES_COLLECTION_KEY, &ScoreRecord::new("a", &config, 10, "d1"))
        .unwrap();
    JsonFileStore::new(&path)
        .append(SCORES_COLLECTION_KEY, &ScoreRecord::new("b", &config, 12, "d2"))
        .unwrap();

    let names: Vec<String> = JsonFileStore::new(&path)
        .load(SCORES_COLLECTION_KEY)
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn unwritable_location_surfaces_error() {
    let dir = tempdir().unwrap();
    // A directory where the score file should be.
    let path = dir.path().to_path_buf();

    let mut game = GameState::new(GameConfig::new(1, 2, 2, "t"), 1).unwrap();
    finish(&mut game);
    let mut app = App::new(game, JsonFileStore::new(&path));

    let err = app.save_score().unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
    assert!(app.message().is_some());
    assert!(app.prompt_active());
}
