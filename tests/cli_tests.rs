use seabattle::{parse_target, Board, BoardError, Coord, Orientation, Ship};

#[test]
fn test_parse_valid_input() {
    assert_eq!(parse_target("1 2"), Ok(Coord::new(0, 1)));
    assert_eq!(parse_target("6 6"), Ok(Coord::new(5, 5)));
    // Surrounding whitespace is harmless.
    assert_eq!(parse_target("  3   4  "), Ok(Coord::new(2, 3)));
}

#[test]
fn test_parse_wrong_token_count() {
    assert!(parse_target("").is_err());
    assert!(parse_target("1").is_err());
    assert!(parse_target("1 2 3").is_err());
}

#[test]
fn test_parse_non_numeric() {
    assert!(parse_target("a b").is_err());
    assert!(parse_target("1 b").is_err());
    assert!(parse_target("-1 2").is_err());
    assert!(parse_target("1.5 2").is_err());
}

#[test]
fn test_zero_input_parses_but_board_rejects() {
    // "0 0" is numeric, so parsing succeeds; the 0-based conversion lands
    // off the board and the shot itself is rejected.
    let target = parse_target("0 0").unwrap();
    assert_eq!(target, Coord::new(-1, -1));

    let mut board = Board::new(false);
    board
        .place(Ship::new(Coord::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    board.clear_shot_history();
    assert_eq!(
        board.resolve_shot(target),
        Err(BoardError::OutOfBounds { row: -1, col: -1 })
    );
}
