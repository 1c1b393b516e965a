//! Whole-game scenarios through the public API.

use omok::{
    apply_move, check_win, create_initial_state, get_player_label, is_legal_move, GameOutcome,
    GameState, MoveError, Pos, Stone,
};

fn play(state: &GameState, moves: &[(i32, i32)]) -> GameState {
    moves
        .iter()
        .fold(state.clone(), |s, &(r, c)| apply_move(&s, Pos::new(r, c)))
}

#[test]
fn turns_alternate_with_black_first() {
    let mut state = create_initial_state();
    let moves = [(7, 7), (7, 8), (8, 7), (9, 9), (1, 1), (2, 2)];
    for (k, &(r, c)) in moves.iter().enumerate() {
        let expected = if k % 2 == 0 { Stone::Black } else { Stone::White };
        assert_eq!(state.current_player(), expected);
        state = apply_move(&state, Pos::new(r, c));
        assert_eq!(state.board().get(Pos::new(r, c)), Some(expected));
    }
}

#[test]
fn vertical_win_for_black() {
    let state = play(
        &create_initial_state(),
        &[(2, 10), (0, 0), (3, 10), (0, 2), (4, 10), (0, 4), (5, 10), (0, 6)],
    );
    assert_eq!(state.outcome(), GameOutcome::InProgress);
    let state = apply_move(&state, Pos::new(6, 10));
    assert_eq!(state.outcome(), GameOutcome::Win(Stone::Black));
    assert!(check_win(state.board(), Pos::new(6, 10), Stone::Black));
}

#[test]
fn filling_the_gap_wins() {
    // White: (5,5) (5,6) _ (5,8) (5,9), then fills (5,7)
    let state = play(
        &create_initial_state(),
        &[(0, 0), (5, 5), (0, 2), (5, 6), (0, 4), (5, 8), (0, 6), (5, 9), (0, 8)],
    );
    assert_eq!(state.current_player(), Stone::White);
    let state = apply_move(&state, Pos::new(5, 7));
    assert_eq!(state.winner(), Some(Stone::White));
    assert_eq!(
        state.winning_line(),
        Some((5..=9).map(|c| Pos::new(5, c)).collect::<Vec<_>>())
    );
}

#[test]
fn overline_wins() {
    let state = play(
        &create_initial_state(),
        &[
            (9, 0), (14, 0),
            (9, 1), (14, 2),
            (9, 2), (14, 4),
            (9, 4), (14, 6),
            (9, 5), (14, 8),
        ],
    );
    assert!(!state.is_over());
    let state = apply_move(&state, Pos::new(9, 3));
    assert_eq!(state.winner(), Some(Stone::Black));
    assert_eq!(state.winning_line().map(|l| l.len()), Some(6));
}

#[test]
fn reset_is_a_fresh_initial_state() {
    let played = play(&create_initial_state(), &[(1, 1), (2, 2), (3, 3)]);
    let fresh = create_initial_state();
    assert_ne!(played, fresh);
    assert_eq!(fresh.move_count(), 0);
    assert!(is_legal_move(&fresh, Pos::new(1, 1)));
}

#[test]
fn explicit_rejection_distinguishes_reasons() {
    let state = play(&create_initial_state(), &[(7, 7)]);
    assert_eq!(state.try_play(Pos::new(7, 7)), Err(MoveError::Occupied { row: 7, col: 7 }));
    assert_eq!(
        state.try_play(Pos::new(15, 0)),
        Err(MoveError::OutOfBounds { row: 15, col: 0 })
    );
    assert!(state.try_play(Pos::new(7, 8)).is_ok());
}

#[test]
fn labels_for_display() {
    assert_eq!(get_player_label(Stone::Black), "Black");
    assert_eq!(get_player_label(Stone::White), "White");
    assert_eq!(get_player_label(Stone::Empty), "");
}
