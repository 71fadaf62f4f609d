use quadtac::board::{Board, Cell, GameError, GameState, Move, Player, WIN_LEN};
use quadtac::search::alphabeta::{SearchParams, Searcher};

/// Full board with no four-run for either side:
///   X O X O
///   X O X O
///   O X O X
///   O X O X
fn drawn_board() -> Board {
    let mut b = Board::new();
    for col in 0..4 {
        for row in 0..4 {
            let mark = if (row < 2) == (col % 2 == 0) { Cell::X } else { Cell::O };
            b.set(row, col, mark);
        }
    }
    b
}

#[test]
fn alternating_full_board_is_a_draw() {
    let b = drawn_board();
    assert!(b.is_full());
    assert!(!b.has_run(Player::X, WIN_LEN));
    assert!(!b.has_run(Player::O, WIN_LEN));
    assert_eq!(b.state(), GameState::Draw);
}

#[test]
fn full_board_has_no_legal_move() {
    let b = drawn_board();
    let mut s = Searcher::default();
    assert_eq!(s.best_move(&b), Err(GameError::NoLegalMove));

    let mut par = Searcher::with_params(SearchParams { threads: 2, ..SearchParams::default() });
    assert_eq!(par.best_move(&b), Err(GameError::NoLegalMove));
}

#[test]
fn occupied_cell_is_rejected_before_mutation() {
    let mut b = Board::new();
    b.apply(Move::new(1, 2), Player::X).unwrap();
    let err = b.apply(Move::new(1, 2), Player::O).unwrap_err();
    assert_eq!(err, GameError::InvalidMove { row: 1, col: 2 });
    assert_eq!(b.get(1, 2), Cell::X, "failed apply must not overwrite the cell");
}

#[test]
fn game_flow_to_a_human_win() {
    // Human walks down column 0 unopposed by these scripted O replies.
    let mut b = Board::new();
    let o_replies = [(0, 1), (1, 1), (2, 1)];
    for (i, &(xr, xc)) in [(0, 0), (1, 0), (2, 0), (3, 0)].iter().enumerate() {
        b.apply(Move::new(xr, xc), Player::X).unwrap();
        if b.state() != GameState::InProgress {
            break;
        }
        let (or, oc) = o_replies[i];
        b.apply(Move::new(or, oc), Player::O).unwrap();
    }
    assert_eq!(b.state(), GameState::XWins);
}
