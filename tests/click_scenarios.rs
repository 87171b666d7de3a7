use chessboard::board::{BoardBuilder, Color, Piece, PieceKind, Square};
use chessboard::{Board, Effect, GameState, InteractionController, Selection};
use proptest::prelude::*;

fn sq(row: usize, col: usize) -> Square {
    Square::new(row, col).unwrap()
}

fn moved(effects: &[Effect]) -> bool {
    effects
        .iter()
        .any(|e| matches!(e, Effect::MovePerformed { .. }))
}

#[test]
fn white_pawn_double_step() {
    let mut controller = InteractionController::new();

    controller.on_cell_clicked(6, 4).unwrap();
    assert_eq!(controller.selected_cell(), Some(sq(6, 4)));
    assert_eq!(controller.turn_to_move(), Color::White);

    let effects = controller.on_cell_clicked(4, 4).unwrap();
    assert!(moved(&effects));
    let board = controller.board_snapshot();
    assert_eq!(
        board.piece_at(sq(4, 4)),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(board.piece_at(sq(6, 4)), None);
    assert_eq!(controller.turn_to_move(), Color::Black);
    assert_eq!(controller.selected_cell(), None);
}

#[test]
fn opponent_piece_selected_out_of_turn() {
    let mut controller = InteractionController::new();
    controller.on_cell_clicked(1, 3).unwrap();
    assert_eq!(controller.selected_cell(), Some(sq(1, 3)));

    // The black pawn cannot move while White is to move
    let effects = controller.on_cell_clicked(3, 3).unwrap();
    assert!(!moved(&effects));
    assert_eq!(controller.selected_cell(), Some(sq(3, 3)));
    assert_eq!(controller.turn_to_move(), Color::White);
    assert_eq!(controller.board_snapshot(), Board::new());
}

#[test]
fn same_square_twice_reselects() {
    let mut controller = InteractionController::new();
    controller.on_cell_clicked(7, 1).unwrap();
    let effects = controller.on_cell_clicked(7, 1).unwrap();

    assert!(!moved(&effects));
    assert_eq!(controller.selected_cell(), Some(sq(7, 1)));
    assert_eq!(controller.turn_to_move(), Color::White);
}

#[test]
fn friendly_piece_switches_selection() {
    let mut controller = InteractionController::new();
    controller.on_cell_clicked(6, 0).unwrap();
    controller.on_cell_clicked(6, 1).unwrap();

    assert_eq!(controller.selected_cell(), Some(sq(6, 1)));
    assert_eq!(controller.board_snapshot(), Board::new());

    // The newly selected pawn can now move
    controller.on_cell_clicked(5, 1).unwrap();
    assert_eq!(controller.board_snapshot().piece_at(sq(6, 1)), None);
    assert_eq!(controller.turn_to_move(), Color::Black);
}

#[test]
fn alternating_turns_with_capture() {
    let mut controller = InteractionController::new();
    let clicks = [(6, 4), (4, 4), (1, 3), (3, 3), (4, 4), (3, 3)];
    for (row, col) in clicks {
        controller.on_cell_clicked(row, col).unwrap();
    }

    let board = controller.board_snapshot();
    assert_eq!(
        board.piece_at(sq(3, 3)),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(board.count_of(Color::Black), 15);
    assert_eq!(controller.turn_to_move(), Color::Black);
}

#[test]
fn pawn_promotes_through_clicks() {
    let board = BoardBuilder::new()
        .piece(sq(1, 7), Color::White, PieceKind::Pawn)
        .piece(sq(0, 6), Color::Black, PieceKind::Knight)
        .build();
    let mut controller = InteractionController::with_state(GameState::from_board(board, Color::White));

    controller.on_cell_clicked(1, 7).unwrap();
    let effects = controller.on_cell_clicked(0, 6).unwrap();

    assert!(effects.contains(&Effect::MovePerformed {
        from: sq(1, 7),
        to: sq(0, 6),
        piece: Piece::new(Color::White, PieceKind::Queen),
        captured: Some(Piece::new(Color::Black, PieceKind::Knight)),
        promoted: true,
    }));
}

#[test]
fn out_of_range_click_propagates() {
    let mut controller = InteractionController::new();
    assert!(controller.on_cell_clicked(0, 8).is_err());
    assert!(controller.on_cell_clicked(8, 0).is_err());
    assert_eq!(controller.selected_cell(), None);
}

fn click_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0..8usize, 0..8usize)
}

proptest! {
    /// Every click on the board has a defined outcome and keeps the invariants
    #[test]
    fn prop_clicks_are_total(clicks in prop::collection::vec(click_strategy(), 0..200)) {
        let mut controller = InteractionController::new();
        let mut count = controller.board().piece_count();

        for (row, col) in clicks {
            let turn_before = controller.turn_to_move();
            let effects = controller.on_cell_clicked(row, col).unwrap();
            let turn_after = controller.turn_to_move();

            if moved(&effects) {
                prop_assert_eq!(turn_after, turn_before.opponent());
                prop_assert_eq!(controller.selected_cell(), None);
            } else {
                prop_assert_eq!(turn_after, turn_before);
                prop_assert_eq!(controller.selected_cell(), Some(sq(row, col)));
            }

            let next = controller.board().piece_count();
            prop_assert!(next <= count);
            count = next;
        }
    }

    /// A move never lands on a piece of the mover's own color
    #[test]
    fn prop_no_friendly_capture(clicks in prop::collection::vec(click_strategy(), 0..200)) {
        let mut controller = InteractionController::new();
        for (row, col) in clicks {
            for effect in controller.on_cell_clicked(row, col).unwrap() {
                if let Effect::MovePerformed { piece, captured: Some(victim), .. } = effect {
                    prop_assert_ne!(piece.color, victim.color);
                }
            }
        }
    }

    /// The pure transition agrees with the controller
    #[test]
    fn prop_transition_matches_controller(clicks in prop::collection::vec(click_strategy(), 0..50)) {
        let mut controller = InteractionController::new();
        let mut state = GameState::new();
        for (row, col) in clicks {
            let (next, expected) = chessboard::controller::transition(state, sq(row, col));
            let actual = controller.on_cell_clicked(row, col).unwrap();
            prop_assert_eq!(actual, expected);
            prop_assert_eq!(controller.state(), &next);
            state = next;
        }
    }
}

#[test]
fn every_state_target_pair_is_defined() {
    let mut states = vec![GameState::new()];
    for square in Square::all() {
        states.push(GameState {
            selection: Selection::Selected(square),
            ..GameState::new()
        });
        states.push(GameState {
            selection: Selection::Selected(square),
            ..GameState::from_board(Board::new(), Color::Black)
        });
    }

    for state in states {
        for target in Square::all() {
            let (next, effects) = chessboard::controller::transition(state.clone(), target);
            assert!(!effects.is_empty());
            match next.selection {
                Selection::NoSelection => assert_ne!(next.turn_to_move, state.turn_to_move),
                Selection::Selected(square) => {
                    assert_eq!(square, target);
                    assert_eq!(next.turn_to_move, state.turn_to_move);
                }
            }
        }
    }
}
