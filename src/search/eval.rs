use crate::board::{Board, Cell, Player, SIZE};

// Line weights keyed by (mark count, empty count); a tier only fires when the
// line holds nothing but that side's marks and empties. Blocking the human
// outweighs the engine's own progress at every tier.
const ENGINE_THREE: i32 = 5;
const HUMAN_THREE: i32 = -10;
const ENGINE_TWO: i32 = 2;
const HUMAN_TWO: i32 = -5;
const ENGINE_ONE: i32 = 1;
const HUMAN_ONE: i32 = -2;

// A fork is an empty cell whose occupation would create more than one
// three-with-one-open line at once.
const ENGINE_FORK: i32 = 4;
const HUMAN_FORK: i32 = -8;

const ENGINE_CENTER: i32 = 2;
const HUMAN_CENTER: i32 = -3;
const ENGINE_CORNER: i32 = 1;
const HUMAN_CORNER: i32 = -2;

const CENTERS: [(usize, usize); 4] = [(1, 1), (1, 2), (2, 1), (2, 2)];
const CORNERS: [(usize, usize); 4] = [(0, 0), (0, 3), (3, 0), (3, 3)];

fn line_counts(line: &[Cell; SIZE]) -> (i32, i32, i32) {
    let mut o = 0;
    let mut x = 0;
    let mut empty = 0;
    for &c in line {
        match c {
            Cell::O => o += 1,
            Cell::X => x += 1,
            Cell::Empty => empty += 1,
        }
    }
    (o, x, empty)
}

/// Number of lines holding exactly three of `player`'s marks plus one empty.
fn threat_lines(board: &Board, player: Player) -> usize {
    let mark = player.mark();
    board
        .lines()
        .iter()
        .filter(|line| {
            let own = line.iter().filter(|&&c| c == mark).count();
            let empty = line.iter().filter(|&&c| c == Cell::Empty).count();
            own == 3 && empty == 1
        })
        .count()
}

/// Heuristic desirability of a position from the engine's (O's) perspective.
/// Positive favors O, negative favors X, zero is neutral. Pure function of
/// the board. Completed four-runs contribute nothing here (no tier matches a
/// line with zero empties); the search scores those separately.
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;

    for line in &board.lines() {
        let (o, x, empty) = line_counts(line);
        if o == 3 && empty == 1 {
            score += ENGINE_THREE;
        } else if x == 3 && empty == 1 {
            score += HUMAN_THREE;
        }
        if o == 2 && empty == 2 {
            score += ENGINE_TWO;
        } else if x == 2 && empty == 2 {
            score += HUMAN_TWO;
        }
        if o == 1 && empty == 3 {
            score += ENGINE_ONE;
        } else if x == 1 && empty == 3 {
            score += HUMAN_ONE;
        }
    }

    // Fork potential: probe every empty cell with a hypothetical mark for
    // each side and count the resulting one-move threats.
    for mv in board.empty_cells() {
        let mut probe = *board;
        probe.set(mv.row, mv.col, Cell::O);
        if threat_lines(&probe, Player::O) > 1 {
            score += ENGINE_FORK;
        }
        probe.set(mv.row, mv.col, Cell::X);
        if threat_lines(&probe, Player::X) > 1 {
            score += HUMAN_FORK;
        }
    }

    for &(r, c) in &CENTERS {
        match board.get(r, c) {
            Cell::O => score += ENGINE_CENTER,
            Cell::X => score += HUMAN_CENTER,
            Cell::Empty => {}
        }
    }
    for &(r, c) in &CORNERS {
        match board.get(r, c) {
            Cell::O => score += ENGINE_CORNER,
            Cell::X => score += HUMAN_CORNER,
            Cell::Empty => {}
        }
    }

    score
}
