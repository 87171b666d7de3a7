use crate::board::Square;

use super::{Effect, GameState, Selection};

/// Apply one click on `target` to `state`.
///
/// - With nothing selected, `target` becomes the selection, even when empty.
/// - With `selected` highlighted, the piece there moves to `target` when it
///   belongs to the side to move and `target` does not hold a piece of the
///   same color. The selection is then cleared and the turn passes.
/// - Otherwise `target` simply becomes the new selection. Clicking the
///   selected square again lands here too, since a piece always blocks its
///   own color.
///
/// Total over every state and every square on the board.
#[must_use]
pub fn transition(mut state: GameState, target: Square) -> (GameState, Vec<Effect>) {
    let effects = apply_click(&mut state, target);
    (state, effects)
}

/// In-place form of [`transition`].
pub fn apply_click(state: &mut GameState, target: Square) -> Vec<Effect> {
    let selected = match state.selection {
        Selection::NoSelection => {
            state.selection = Selection::Selected(target);
            return vec![Effect::SelectionChanged {
                from: None,
                to: Some(target),
            }];
        }
        Selection::Selected(selected) => selected,
    };

    let moving = state.board.piece_at(selected);
    let destination = state.board.piece_at(target);

    let owns_piece = moving.is_some();
    let color_matches = moving.is_some_and(|piece| piece.color == state.turn_to_move);
    let same_color_block = match (moving, destination) {
        (Some(piece), Some(other)) => piece.color == other.color,
        _ => false,
    };

    if !owns_piece || !color_matches || same_color_block {
        state.selection = Selection::Selected(target);
        return vec![Effect::SelectionChanged {
            from: Some(selected),
            to: Some(target),
        }];
    }

    let mut effects = Vec::with_capacity(3);
    if let Some(record) = state.board.move_piece(selected, target) {
        effects.push(Effect::MovePerformed {
            from: record.from,
            to: record.to,
            piece: record.piece,
            captured: record.captured,
            promoted: record.promoted,
        });
    }
    state.selection = Selection::NoSelection;
    effects.push(Effect::SelectionChanged {
        from: Some(selected),
        to: None,
    });
    state.turn_to_move = state.turn_to_move.opponent();
    effects.push(Effect::TurnToggled {
        to_move: state.turn_to_move,
    });

    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, Color, Piece, PieceKind};

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    fn selected(square: Square) -> GameState {
        GameState {
            selection: Selection::Selected(square),
            ..GameState::new()
        }
    }

    fn moved(effects: &[Effect]) -> bool {
        effects
            .iter()
            .any(|e| matches!(e, Effect::MovePerformed { .. }))
    }

    #[test]
    fn test_first_click_selects_anything() {
        for target in Square::all() {
            let (next, effects) = transition(GameState::new(), target);
            assert_eq!(next.selection, Selection::Selected(target));
            assert_eq!(next.board, GameState::new().board);
            assert_eq!(next.turn_to_move, Color::White);
            assert_eq!(
                effects,
                vec![Effect::SelectionChanged {
                    from: None,
                    to: Some(target)
                }]
            );
        }
    }

    #[test]
    fn test_move_to_empty_square() {
        let (next, effects) = transition(selected(sq(6, 4)), sq(4, 4));

        assert_eq!(next.selection, Selection::NoSelection);
        assert_eq!(next.turn_to_move, Color::Black);
        assert_eq!(next.board.piece_at(sq(6, 4)), None);
        assert_eq!(
            next.board.piece_at(sq(4, 4)),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(
            effects,
            vec![
                Effect::MovePerformed {
                    from: sq(6, 4),
                    to: sq(4, 4),
                    piece: Piece::new(Color::White, PieceKind::Pawn),
                    captured: None,
                    promoted: false,
                },
                Effect::SelectionChanged {
                    from: Some(sq(6, 4)),
                    to: None
                },
                Effect::TurnToggled {
                    to_move: Color::Black
                },
            ]
        );
    }

    #[test]
    fn test_capture_opponent() {
        let (next, effects) = transition(selected(sq(7, 3)), sq(1, 3));
        assert!(moved(&effects));
        assert_eq!(
            next.board.piece_at(sq(1, 3)),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(next.board.piece_count(), 31);
        assert!(effects.contains(&Effect::MovePerformed {
            from: sq(7, 3),
            to: sq(1, 3),
            piece: Piece::new(Color::White, PieceKind::Queen),
            captured: Some(Piece::new(Color::Black, PieceKind::Pawn)),
            promoted: false,
        }));
    }

    #[test]
    fn test_same_square_reselects() {
        let (next, effects) = transition(selected(sq(6, 4)), sq(6, 4));
        assert_eq!(next.selection, Selection::Selected(sq(6, 4)));
        assert_eq!(next.turn_to_move, Color::White);
        assert!(!moved(&effects));
    }

    #[test]
    fn test_friendly_target_switches_selection() {
        let (next, effects) = transition(selected(sq(6, 4)), sq(7, 6));
        assert_eq!(next.selection, Selection::Selected(sq(7, 6)));
        assert_eq!(next.board, GameState::new().board);
        assert_eq!(
            effects,
            vec![Effect::SelectionChanged {
                from: Some(sq(6, 4)),
                to: Some(sq(7, 6))
            }]
        );
    }

    #[test]
    fn test_empty_selection_never_moves() {
        for target in Square::all() {
            let (next, effects) = transition(selected(sq(4, 4)), target);
            assert_eq!(next.selection, Selection::Selected(target));
            assert!(!moved(&effects));
        }
    }

    #[test]
    fn test_opponent_selection_never_moves() {
        for target in Square::all() {
            let (next, effects) = transition(selected(sq(1, 3)), target);
            assert_eq!(next.selection, Selection::Selected(target));
            assert_eq!(next.turn_to_move, Color::White);
            assert!(!moved(&effects));
        }
    }

    #[test]
    fn test_promotion_reported() {
        let board = BoardBuilder::new()
            .piece(sq(6, 0), Color::Black, PieceKind::Pawn)
            .build();
        let state = GameState {
            selection: Selection::Selected(sq(6, 0)),
            ..GameState::from_board(board, Color::Black)
        };
        let (next, effects) = transition(state, sq(7, 0));
        assert_eq!(
            next.board.piece_at(sq(7, 0)),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert!(matches!(
            effects[0],
            Effect::MovePerformed { promoted: true, .. }
        ));
        assert_eq!(next.turn_to_move, Color::White);
    }

    #[test]
    fn test_apply_click_matches_transition() {
        let clicks = [(6, 4), (4, 4), (1, 3), (1, 3), (0, 1), (2, 2), (4, 4)];
        let mut in_place = GameState::new();
        let mut pure = GameState::new();
        for (row, col) in clicks {
            let target = sq(row, col);
            let effects = apply_click(&mut in_place, target);
            let (next, expected) = transition(pure, target);
            assert_eq!(effects, expected);
            assert_eq!(in_place, next);
            pure = next;
        }
        assert_eq!(in_place.turn_to_move, Color::White);
    }
}
