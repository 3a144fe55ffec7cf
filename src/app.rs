//! Host controller: keyboard cursor, win prompt and score saving.
//!
//! `App` sits between the terminal loop and the engine. It owns the
//! [`GameState`], turns [`GameAction`]s into taps at the cursor, and forwards
//! the "save score" intent of a won game to a [`ScoreStore`]. Store failures
//! are kept as a message for the view; nothing is retried automatically.

use log::{info, warn};

use crate::core::{GameSnapshot, GameState};
use crate::input::PromptKey;
use crate::store::{ScoreRecord, ScoreStore, StoreError};
use crate::term::{HostStatusView, MessageKind};
use crate::types::{GameAction, TapOutcome, TilePos, MAX_NAME_LEN, SCORES_COLLECTION_KEY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }
}

pub struct App<S> {
    game: GameState,
    store: S,
    cursor: TilePos,
    name: String,
    message: Option<Message>,
    /// The current board's score is already in the store.
    saved: bool,
}

impl<S: ScoreStore> App<S> {
    pub fn new(game: GameState, store: S) -> Self {
        Self {
            game,
            store,
            cursor: TilePos::new(0, 0),
            name: String::new(),
            message: None,
            saved: false,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn cursor(&self) -> TilePos {
        self.cursor
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn saved(&self) -> bool {
        self.saved
    }

    /// The win prompt has focus: board won, score not saved yet.
    pub fn prompt_active(&self) -> bool {
        self.game.is_won() && !self.saved
    }

    /// Apply a board action. Returns the tap outcome for `Flip`.
    pub fn apply_action(&mut self, action: GameAction) -> Option<TapOutcome> {
        match action {
            GameAction::MoveLeft => self.move_cursor(0, -1),
            GameAction::MoveRight => self.move_cursor(0, 1),
            GameAction::MoveUp => self.move_cursor(-1, 0),
            GameAction::MoveDown => self.move_cursor(1, 0),
            GameAction::Flip => return self.flip(),
            GameAction::Reset => self.reset(),
        }
        None
    }

    /// Apply an edit while the win prompt is open. Ignored otherwise.
    pub fn apply_prompt_key(&mut self, key: PromptKey) {
        if !self.prompt_active() {
            return;
        }
        match key {
            PromptKey::Insert(c) => {
                if self.name.chars().count() < MAX_NAME_LEN {
                    self.name.push(c);
                }
            }
            PromptKey::Backspace => {
                self.name.pop();
            }
            PromptKey::Submit => {
                // Failure is already reported through `message`.
                let _ = self.save_score();
            }
            PromptKey::Reset => self.reset(),
        }
    }

    /// Advance engine timers.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.game.tick(elapsed_ms)
    }

    /// Append the finished game to the store under the typed name.
    ///
    /// Does nothing before the board is won or once the score is saved.
    pub fn save_score(&mut self) -> Result<(), StoreError> {
        if !self.prompt_active() {
            return Ok(());
        }

        let record = ScoreRecord::now(self.name.clone(), self.game.config(), self.game.score());
        match self.store.append(SCORES_COLLECTION_KEY, &record) {
            Ok(()) => {
                info!("score {} saved for {:?}", record.score, record.name);
                self.saved = true;
                self.message = Some(Message::info(format!(
                    "Saved {} for {}",
                    record.score,
                    display_name(&record.name)
                )));
                Ok(())
            }
            Err(e) => {
                warn!("saving score failed: {e}");
                self.message = Some(Message::error(e.to_string()));
                Err(e)
            }
        }
    }

    pub fn reset(&mut self) {
        self.game.reset();
        self.name.clear();
        self.message = None;
        self.saved = false;
        self.clamp_cursor();
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    /// Host state for the view.
    pub fn status_view(&self) -> HostStatusView<'_> {
        HostStatusView {
            cursor: Some(self.cursor),
            prompt: self.prompt_active().then_some(self.name.as_str()),
            message: self
                .message
                .as_ref()
                .map(|m| (m.text.as_str(), m.kind)),
        }
    }

    fn flip(&mut self) -> Option<TapOutcome> {
        match self.game.tap(self.cursor) {
            Ok(outcome) => {
                if !matches!(outcome, TapOutcome::Ignored) {
                    self.message = None;
                }
                if self.game.is_won() {
                    self.message = Some(Message::info("Board cleared"));
                }
                Some(outcome)
            }
            Err(e) => {
                warn!("tap rejected: {e}");
                self.message = Some(Message::error(e.to_string()));
                None
            }
        }
    }

    /// Move the cursor, wrapping around the board edges.
    fn move_cursor(&mut self, d_row: i64, d_column: i64) {
        let rows = self.game.board().rows() as i64;
        let columns = self.game.board().columns() as i64;
        if rows == 0 || columns == 0 {
            return;
        }
        let row = (self.cursor.row as i64 + d_row).rem_euclid(rows);
        let column = (self.cursor.column as i64 + d_column).rem_euclid(columns);
        self.cursor = TilePos::new(row as u32, column as u32);
    }

    fn clamp_cursor(&mut self) {
        let board = self.game.board();
        self.cursor = TilePos::new(
            self.cursor.row.min(board.rows().saturating_sub(1)),
            self.cursor.column.min(board.columns().saturating_sub(1)),
        );
    }
}

fn display_name(name: &str) -> &str {
    if name.trim().is_empty() {
        "anonymous"
    } else {
        name
    }
}
