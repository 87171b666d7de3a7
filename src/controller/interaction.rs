//! Interaction controller implementation.

use crate::board::{Board, Color, Square, SquareError};

use super::{apply_click, Effect, GameState};

/// Owns the game state and feeds clicks through the state machine.
///
/// This is the only mutator of the board. Renderers query snapshots after
/// each click has been handled.
#[derive(Clone, Debug, Default)]
pub struct InteractionController {
    state: GameState,
}

impl InteractionController {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        InteractionController::with_state(GameState::new())
    }

    #[must_use]
    pub fn with_state(state: GameState) -> Self {
        #[cfg(feature = "logging")]
        log::info!("{} to move...", state.turn_to_move);
        InteractionController { state }
    }

    /// Handle a click on (row, col).
    ///
    /// Coordinates outside the board are a caller bug and are reported as
    /// `SquareError::OutOfRange`; the state is left untouched in that case.
    pub fn on_cell_clicked(&mut self, row: usize, col: usize) -> Result<Vec<Effect>, SquareError> {
        let target = Square::new(row, col)?;
        Ok(self.click(target))
    }

    /// Handle a click on an already validated square.
    pub fn click(&mut self, target: Square) -> Vec<Effect> {
        let effects = apply_click(&mut self.state, target);

        #[cfg(feature = "logging")]
        for effect in &effects {
            match effect {
                Effect::MovePerformed { from, to, piece, .. } => {
                    log::debug!("MOVE {piece} {from} > {to}");
                }
                Effect::TurnToggled { to_move } => log::info!("{to_move} to move..."),
                Effect::SelectionChanged { .. } => {}
            }
        }

        effects
    }

    /// Copy of the current board for redrawing.
    #[must_use]
    pub fn board_snapshot(&self) -> Board {
        self.state.board.clone()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[must_use]
    pub fn turn_to_move(&self) -> Color {
        self.state.turn_to_move
    }

    #[must_use]
    pub fn selected_cell(&self) -> Option<Square> {
        self.state.selection.square()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }
}
