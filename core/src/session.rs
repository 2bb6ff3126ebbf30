use serde::{Deserialize, Serialize};

use crate::*;

/// A discrete player action delivered by an input source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Reveal(Coord2),
    ToggleFlag(Coord2),
}

impl Action {
    pub const fn coords(self) -> Coord2 {
        match self {
            Self::Reveal(coords) | Self::ToggleFlag(coords) => coords,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Reveal(RevealOutcome),
    Flag(FlagOutcome),
}

impl ActionOutcome {
    pub const fn ends_game(self) -> bool {
        matches!(
            self,
            Self::Reveal(RevealOutcome::HitMine | RevealOutcome::Won)
        )
    }
}

/// What a finished game leaves behind for the statistics log.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub outcome: Outcome,
    /// Mines without a flag at the moment of the loss, 0 for a win.
    pub mines_left: CellCount,
    pub turns: u32,
}

/// One game session: owns its board and counts the dispatched actions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    board: Board,
    turns: u32,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::from_board(Board::new(config, seed))
    }

    pub fn from_board(board: Board) -> Self {
        Self { board, turns: 0 }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Applies one input action. Every action dispatched while the game is running counts
    /// as a turn, even when the board rejects it. Once the game is over only dismissing is
    /// left, so further actions fail with [`GameError::GameOver`] and are not counted.
    ///
    /// Revealing a flagged tile is refused here, the board itself treats flags as advisory.
    pub fn dispatch(&mut self, action: Action) -> Result<ActionOutcome> {
        if self.board.is_finished() {
            return Err(GameError::GameOver);
        }
        self.turns += 1;
        log::debug!("turn {}: {:?}", self.turns, action);

        match action {
            Action::Reveal(coords) => {
                if self.board.tile_at(coords) == Some(Visibility::Flagged) {
                    return Err(GameError::Flagged(coords));
                }
                self.board.reveal(coords).map(ActionOutcome::Reveal)
            }
            Action::ToggleFlag(coords) => self.board.toggle_flag(coords).map(ActionOutcome::Flag),
        }
    }

    /// Summary for the statistics log, only once the game is won or lost.
    pub fn summary(&self) -> Option<GameSummary> {
        let outcome = self.board.outcome();
        if !outcome.is_terminal() {
            return None;
        }
        let mines_left = match outcome {
            Outcome::Lost => self.board.remaining_mines_unflagged().ok()?,
            _ => 0,
        };
        Some(GameSummary {
            outcome,
            mines_left,
            turns: self.turns,
        })
    }
}
