use minesweeper::{Board, BoardError, GameStatus, RevealResult};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_construction_validation() {
    let mut rng = SmallRng::seed_from_u64(42);

    let err = Board::new(3, 3, 10, &mut rng).unwrap_err();
    assert!(matches!(err, BoardError::ConfigurationError(_)));

    let err = Board::new(0, 5, 0, &mut rng).unwrap_err();
    assert!(matches!(err, BoardError::ConfigurationError(_)));

    // Full board is allowed; mines == capacity
    assert!(Board::new(2, 2, 4, &mut rng).is_ok());
}

#[test]
fn test_with_mines_validation() {
    let err = Board::with_mines(2, 2, &[(0, 0), (0, 0)]).unwrap_err();
    assert!(matches!(err, BoardError::ConfigurationError(_)));

    let err = Board::with_mines(2, 2, &[(2, 0)]).unwrap_err();
    assert!(matches!(err, BoardError::ConfigurationError(_)));

    let board = Board::with_mines(2, 2, &[(0, 0), (1, 1)]).unwrap();
    assert_eq!(board.mine_count(), 2);
    assert_eq!(board.mine_positions().count(), 2);
    assert!(board.is_mine(0, 0).unwrap());
    assert!(!board.is_mine(0, 1).unwrap());
    assert_eq!(board.is_mine(2, 0).unwrap_err(), BoardError::OutOfRange);
}

#[test]
fn test_flag_toggle_round_trip() {
    let mut board = Board::with_mines(3, 3, &[(1, 1)]).unwrap();
    let before = board.render_text();

    board.toggle_flag(0, 0).unwrap();
    assert_eq!(board.flagged_count(), 1);
    assert!(board.cell(0, 0).unwrap().is_flagged());
    assert_eq!(board.cell(0, 0).unwrap().symbol(), '*');
    // flagged count matches mine count but the flag is wrong: no win
    assert_eq!(board.status(), GameStatus::Active);

    board.toggle_flag(0, 0).unwrap();
    assert_eq!(board.flagged_count(), 0);
    assert_eq!(board.render_text(), before);
    assert_eq!(board.status(), GameStatus::Active);
}

#[test]
fn test_flag_revealed_cell_rejected() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::with_mines(3, 3, &[(2, 2)]).unwrap();
    board.reveal(0, 0, &mut rng).unwrap();
    let err = board.toggle_flag(0, 0).unwrap_err();
    assert!(matches!(err, BoardError::InvalidOperation(_)));
}

#[test]
fn test_reveal_preconditions() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::with_mines(3, 3, &[(2, 2)]).unwrap();

    board.toggle_flag(0, 0).unwrap();
    let err = board.reveal(0, 0, &mut rng).unwrap_err();
    assert!(matches!(err, BoardError::InvalidOperation(_)));
    board.toggle_flag(0, 0).unwrap();

    board.reveal(0, 0, &mut rng).unwrap();
    let err = board.reveal(0, 0, &mut rng).unwrap_err();
    assert!(matches!(err, BoardError::InvalidOperation(_)));
}

#[test]
fn test_out_of_range_never_mutates() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::with_mines(3, 3, &[(2, 2)]).unwrap();
    let before = board.render_text();

    assert_eq!(board.toggle_flag(3, 0).unwrap_err(), BoardError::OutOfRange);
    assert_eq!(
        board.reveal(0, 3, &mut rng).unwrap_err(),
        BoardError::OutOfRange
    );
    assert_eq!(board.flagged_count(), 0);
    assert_eq!(board.revealed_count(), 0);
    assert_eq!(board.render_text(), before);
}

#[test]
fn test_win_by_flags() {
    let mut board = Board::with_mines(2, 2, &[(0, 0)]).unwrap();
    board.toggle_flag(0, 0).unwrap();
    assert_eq!(board.status(), GameStatus::Won);
}

#[test]
fn test_no_win_with_false_flag() {
    let mut board = Board::with_mines(2, 2, &[(0, 0)]).unwrap();
    board.toggle_flag(1, 1).unwrap();
    assert_eq!(board.flagged_count(), board.mine_count());
    assert_eq!(board.status(), GameStatus::Active);
}

#[test]
fn test_win_by_exhaustion_zero_mines() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::with_mines(4, 4, &[]).unwrap();
    let res = board.reveal(0, 0, &mut rng).unwrap();
    assert_eq!(res, RevealResult::Safe);
    assert_eq!(board.revealed_count(), 16);
    assert_eq!(board.status(), GameStatus::Won);
}

#[test]
fn test_loss_and_disclosure() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::with_mines(2, 2, &[(0, 0)]).unwrap();

    let res = board.reveal(1, 1, &mut rng).unwrap();
    assert_eq!(res, RevealResult::Safe);
    assert_eq!(board.cell(1, 1).unwrap().symbol(), '1');
    assert_eq!(board.status(), GameStatus::Active);

    // second move onto the mine loses and discloses it
    let res = board.reveal(0, 0, &mut rng).unwrap();
    assert_eq!(res, RevealResult::Detonated);
    assert_eq!(board.status(), GameStatus::Lost);
    assert_eq!(board.cell(0, 0).unwrap().symbol(), 'X');
    assert!(board.render_text().contains('X'));
}

#[test]
fn test_first_move_safety_reseeds() {
    // 3 mines on 4 cells: every first reveal must survive via re-seeding.
    for target in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        let mut rng = SmallRng::seed_from_u64(99);
        let mut board = Board::new(2, 2, 3, &mut rng).unwrap();
        let res = board.reveal(target.0, target.1, &mut rng).unwrap();
        assert_eq!(res, RevealResult::Safe);
        assert_ne!(board.status(), GameStatus::Lost);
        assert_eq!(board.mine_positions().count(), 3);
        // one safe cell on a 2x2 field with 3 mines wins immediately
        assert_eq!(board.status(), GameStatus::Won);
    }
}

#[test]
fn test_full_board_first_reveal_loses() {
    // mines == rows*columns leaves no safe placement to re-seed toward
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = Board::new(2, 2, 4, &mut rng).unwrap();
    let res = board.reveal(0, 0, &mut rng).unwrap();
    assert_eq!(res, RevealResult::Detonated);
    assert_eq!(board.status(), GameStatus::Lost);
}

#[test]
fn test_render_format() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::with_mines(2, 2, &[(0, 0)]).unwrap();
    board.reveal(1, 1, &mut rng).unwrap();
    let expected = " │12│\n—│——│\n1│..│\n2│.1│\n—│——│";
    assert_eq!(board.render_text(), expected);
}

#[test]
fn test_render_header_wraps_past_nine() {
    let board = Board::with_mines(1, 12, &[]).unwrap();
    let rendered = board.render_text();
    let header = rendered.lines().next().unwrap();
    assert_eq!(header, " │123456789012│");
}
