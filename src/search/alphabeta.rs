use crate::board::{Board, Cell, GameError, Move, Player, SIZE, WIN_LEN};
use crate::search::eval::evaluate;
use crate::search::tt::Cache;
use rayon::prelude::*;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

/// Terminal scores sit in [-10, 10]; wins found deeper in the tree score
/// closer to zero, so the engine takes the quickest win and drags out a
/// forced loss.
pub const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    pub use_cache: bool,
    pub use_pruning: bool,
    pub threads: usize,
    pub cache_capacity: Option<usize>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { use_cache: true, use_pruning: true, threads: 1, cache_capacity: None }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best: Option<Move>,
    pub score: i32,
    pub nodes: u64,
}

pub struct Searcher {
    cache: Arc<Cache>,
    nodes: u64,
    use_cache: bool,
    use_pruning: bool,
    threads: usize,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::with_params(SearchParams::default())
    }
}

impl Searcher {
    pub fn with_params(params: SearchParams) -> Self {
        let cache = match params.cache_capacity {
            Some(cap) => Cache::with_capacity_limit(cap),
            None => Cache::new(),
        };
        Self {
            cache: Arc::new(cache),
            nodes: 0,
            use_cache: params.use_cache,
            use_pruning: params.use_pruning,
            threads: params.threads.max(1),
        }
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Picks O's move for the given position. The caller's board is never
    /// touched; the search simulates on a private copy with apply/undo.
    /// Fails with `NoLegalMove` on a full board.
    pub fn best_move(&mut self, board: &Board) -> Result<Move, GameError> {
        self.search(board).best.ok_or(GameError::NoLegalMove)
    }

    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.nodes = 0;
        let result = if self.threads > 1 {
            self.search_root_parallel(board)
        } else {
            self.search_root(board)
        };
        log::debug!(
            "search done: best={:?} score={} nodes={} cache_entries={}",
            result.best,
            result.score,
            result.nodes,
            self.cache.len()
        );
        result
    }

    // Row-major over empty cells with a full window per candidate; the
    // strictly-greater comparison keeps the first find on ties.
    fn search_root(&mut self, board: &Board) -> SearchResult {
        let mut work = *board;
        let mut best: Option<Move> = None;
        let mut best_score = i32::MIN;
        for row in 0..SIZE {
            for col in 0..SIZE {
                if work.get(row, col) != Cell::Empty {
                    continue;
                }
                work.set(row, col, Cell::O);
                let score = self.minimax(&mut work, 0, false, i32::MIN, i32::MAX);
                work.set(row, col, Cell::Empty);
                if score > best_score {
                    best_score = score;
                    best = Some(Move::new(row, col));
                }
            }
        }
        let score = if best.is_some() { best_score } else { 0 };
        SearchResult { best, score, nodes: self.nodes }
    }

    // Root split: the first candidate is searched serially with a full
    // window to seed a shared alpha, the tail in parallel with windows read
    // from the shared best. Pruned candidates report at or below the bound
    // they were given, so the running best is never displaced by one.
    fn search_root_parallel(&mut self, board: &Board) -> SearchResult {
        let candidates = board.empty_cells();
        let Some((&first, tail)) = candidates.split_first() else {
            return SearchResult { best: None, score: 0, nodes: self.nodes };
        };

        let mut work = *board;
        work.set(first.row, first.col, Cell::O);
        let seed_score = self.minimax(&mut work, 0, false, i32::MIN, i32::MAX);
        work.set(first.row, first.col, Cell::Empty);

        let alpha_shared = AtomicI32::new(seed_score);
        let shared_cache = self.cache.clone();
        let use_cache = self.use_cache;
        let use_pruning = self.use_pruning;
        let results: Vec<(Move, i32, u64)> = tail
            .par_iter()
            .map(|&mv| {
                let mut w = Searcher {
                    cache: shared_cache.clone(),
                    nodes: 0,
                    use_cache,
                    use_pruning,
                    threads: 1,
                };
                let mut child = *board;
                child.set(mv.row, mv.col, Cell::O);
                let a = alpha_shared.load(Ordering::Relaxed);
                let score = w.minimax(&mut child, 0, false, a, i32::MAX);
                let mut cur = a;
                while score > cur {
                    match alpha_shared.compare_exchange(cur, score, Ordering::Relaxed, Ordering::Relaxed)
                    {
                        Ok(_) => break,
                        Err(observed) => {
                            if observed >= score {
                                break;
                            }
                            cur = observed;
                        }
                    }
                }
                (mv, score, w.nodes)
            })
            .collect();

        let mut best = first;
        let mut best_score = seed_score;
        let mut nodes = self.nodes;
        for (mv, score, n) in results {
            nodes += n;
            if score > best_score {
                best_score = score;
                best = mv;
            }
        }
        self.nodes = nodes;
        SearchResult { best: Some(best), score: best_score, nodes }
    }

    /// Value of the position with `maximizing` side (O maximizes) to move.
    ///
    /// The scoring order at every node is fixed: heuristic first, with any
    /// non-zero value returned immediately, then the four-run checks, then
    /// the draw check. A completed run is therefore only detected when the
    /// heuristic nets to zero; unrelated lines can mask a finished game and
    /// the caller gets the heuristic's verdict instead. This ordering is
    /// deliberate (see DESIGN.md) and tests depend on it.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u32,
        maximizing: bool,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        self.nodes += 1;
        if self.use_cache {
            if let Some(score) = self.cache.get(board, depth, maximizing) {
                return score;
            }
        }
        let score = self.minimax_inner(board, depth, maximizing, alpha, beta);
        if self.use_cache {
            self.cache.put(board, depth, maximizing, score);
        }
        score
    }

    fn minimax_inner(
        &mut self,
        board: &mut Board,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        let score = evaluate(board);
        if score != 0 {
            return score;
        }
        if board.has_run(Player::X, WIN_LEN) {
            return -WIN_SCORE + depth as i32;
        }
        if board.has_run(Player::O, WIN_LEN) {
            return WIN_SCORE - depth as i32;
        }
        if board.is_full() {
            return 0;
        }

        let side = if maximizing { Player::O } else { Player::X };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        'rows: for row in 0..SIZE {
            for col in 0..SIZE {
                if board.get(row, col) != Cell::Empty {
                    continue;
                }
                board.set(row, col, side.mark());
                let value = self.minimax(board, depth + 1, !maximizing, alpha, beta);
                board.set(row, col, Cell::Empty);
                if maximizing {
                    best = best.max(value);
                    if self.use_pruning {
                        alpha = alpha.max(value);
                        if beta <= alpha {
                            break 'rows;
                        }
                    }
                } else {
                    best = best.min(value);
                    if self.use_pruning {
                        beta = beta.min(value);
                        if beta <= alpha {
                            break 'rows;
                        }
                    }
                }
            }
        }
        best
    }
}
