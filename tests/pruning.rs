use quadtac::board::{Board, Cell};
use quadtac::search::alphabeta::{SearchParams, Searcher};

fn board(xs: &[(usize, usize)], os: &[(usize, usize)]) -> Board {
    let mut b = Board::new();
    for &(r, c) in xs {
        b.set(r, c, Cell::X);
    }
    for &(r, c) in os {
        b.set(r, c, Cell::O);
    }
    b
}

fn sample_boards() -> Vec<Board> {
    vec![
        board(&[(0, 0), (0, 1), (0, 2)], &[]),
        board(&[(0, 0), (1, 1), (0, 2)], &[(2, 2), (1, 0)]),
        board(
            &[(0, 0), (1, 1), (0, 2), (3, 1), (2, 3)],
            &[(2, 2), (1, 0), (0, 3), (3, 0)],
        ),
        board(
            &[(0, 1), (1, 0), (2, 2), (3, 3), (1, 3), (2, 0)],
            &[(0, 0), (1, 1), (2, 1), (3, 2), (0, 2)],
        ),
    ]
}

// The cache is disabled on both sides so each run sees the raw tree; values
// stored under a narrowed window would otherwise differ between the runs.
fn run(board: &Board, use_pruning: bool) -> (Option<quadtac::board::Move>, i32, u64) {
    let mut s = Searcher::with_params(SearchParams {
        use_cache: false,
        use_pruning,
        ..SearchParams::default()
    });
    let r = s.search(board);
    (r.best, r.score, r.nodes)
}

#[test]
fn pruning_never_changes_the_root_decision() {
    for (i, b) in sample_boards().iter().enumerate() {
        let (pruned_best, pruned_score, _) = run(b, true);
        let (full_best, full_score, _) = run(b, false);
        assert_eq!(pruned_best, full_best, "board {i}: root move changed by pruning");
        assert_eq!(pruned_score, full_score, "board {i}: root score changed by pruning");
    }
}

#[test]
fn pruning_visits_no_more_nodes() {
    for (i, b) in sample_boards().iter().enumerate() {
        let (_, _, pruned_nodes) = run(b, true);
        let (_, _, full_nodes) = run(b, false);
        assert!(
            pruned_nodes <= full_nodes,
            "board {i}: pruned search visited {pruned_nodes} nodes vs {full_nodes}"
        );
    }
}
