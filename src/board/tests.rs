use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_labels() {
    assert_eq!(Stone::Black.label(), "Black");
    assert_eq!(Stone::White.label(), "White");
    assert_eq!(Stone::Empty.label(), "");
    assert_eq!(Stone::White.to_string(), "White");
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), Some(7 * 15 + 7));
    assert_eq!(pos.to_index(), Some(112));

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2, Pos::new(7, 7));
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
    assert_eq!(Pos::new(-1, 3).to_index(), None);
    assert_eq!(Pos::new(3, 15).to_index(), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), Some(0));
    assert_eq!(Pos::new(0, 14).to_index(), Some(14));
    assert_eq!(Pos::new(14, 0).to_index(), Some(210));
    assert_eq!(Pos::new(14, 14).to_index(), Some(224));
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.is_board_empty());
    assert_eq!(board.stone_count(), 0);
    for idx in 0..TOTAL_CELLS {
        assert_eq!(board.get(Pos::from_index(idx)), Some(Stone::Empty));
    }
}

#[test]
fn test_get_off_board() {
    let board = Board::new();
    assert_eq!(board.get(Pos::new(-1, 0)), None);
    assert_eq!(board.get(Pos::new(0, 15)), None);
    assert!(!board.is_empty(Pos::new(15, 15)));
}

#[test]
fn test_with_stone_leaves_original() {
    let board = Board::new();
    let next = board.with_stone(Pos::new(3, 4), Stone::Black);
    assert_eq!(board.get(Pos::new(3, 4)), Some(Stone::Empty));
    assert_eq!(next.get(Pos::new(3, 4)), Some(Stone::Black));
    assert_eq!(next.stone_count(), 1);
}

#[test]
fn test_place_empty_and_off_board_ignored() {
    let mut board = Board::new();
    board.place_stone(Pos::new(2, 2), Stone::Empty);
    board.place_stone(Pos::new(-3, 2), Stone::White);
    assert!(board.is_board_empty());
}

#[test]
fn test_occupied_reports_colors() {
    let mut board = Board::new();
    board.place_stone(Pos::new(0, 1), Stone::White);
    board.place_stone(Pos::new(0, 0), Stone::Black);
    board.place_stone(Pos::new(10, 3), Stone::Black);
    let cells: Vec<_> = board.occupied().collect();
    assert_eq!(
        cells,
        vec![
            (Pos::new(0, 0), Stone::Black),
            (Pos::new(0, 1), Stone::White),
            (Pos::new(10, 3), Stone::Black),
        ]
    );
}

#[test]
fn test_is_full() {
    let mut board = Board::new();
    for idx in 0..TOTAL_CELLS {
        assert!(!board.is_full());
        let stone = if idx % 2 == 0 { Stone::Black } else { Stone::White };
        board.place_stone(Pos::from_index(idx), stone);
    }
    assert!(board.is_full());
    assert_eq!(board.stones(Stone::Black).map(|b| b.count()), Some(113));
    assert_eq!(board.stones(Stone::White).map(|b| b.count()), Some(112));
    assert!(board.stones(Stone::Empty).is_none());
}

#[test]
fn test_pos_offset_saturates() {
    assert_eq!(Pos::new(3, 4).offset(1, -1, 2), Pos::new(5, 2));
    assert_eq!(Pos::new(i32::MAX, 0).offset(1, 0, 1), Pos::new(i32::MAX, 0));
    assert_eq!(Pos::new(0, i32::MIN).offset(1, -1, 3), Pos::new(3, i32::MIN));
    assert_eq!(Pos::new(0, 0).offset(1, 1, i32::MAX).row, i32::MAX);
    assert!(!Pos::new(i32::MAX, 0).offset(1, 0, 1).is_on_board());
}

#[test]
fn test_well_formed_board() {
    let mut board = Board::new();
    assert!(board.is_well_formed());
    board.place_stone(Pos::new(4, 4), Stone::Black);
    assert!(board.is_well_formed());
    // Both colors on one cell
    board.place_stone(Pos::new(4, 4), Stone::White);
    assert!(!board.is_well_formed());
}
