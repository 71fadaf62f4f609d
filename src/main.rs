use anyhow::Result;
use clap::Parser;
use quadtac::board::{Board, GameError, GameState, Move, Player};
use quadtac::search::alphabeta::{SearchParams, Searcher};
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(version, about = "Play 4x4 four-in-a-row against the engine", long_about = None)]
struct Args {
    /// Worker threads for the engine's root search
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Disable the engine's memoization cache
    #[arg(long)]
    no_cache: bool,

    /// Cap on memoization cache entries (unbounded if omitted)
    #[arg(long)]
    cache_capacity: Option<usize>,
}

fn get_human_move(board: &Board) -> Result<Move> {
    loop {
        print!("Enter your move as 'row col' (e.g. 0 3): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let parts: Vec<usize> = input.split_whitespace().filter_map(|t| t.parse().ok()).collect();

        match parts.as_slice() {
            [row, col] if *row < 4 && *col < 4 => {
                let mv = Move::new(*row, *col);
                let mut probe = *board;
                match probe.apply(mv, Player::X) {
                    Ok(()) => return Ok(mv),
                    Err(GameError::InvalidMove { .. }) => println!("That cell is occupied!"),
                    Err(e) => return Err(e.into()),
                }
            }
            _ => println!("Invalid input! Use two numbers in 0..4, like '1 2'"),
        }
    }
}

fn announce(state: GameState) -> bool {
    match state {
        GameState::XWins => {
            println!("X wins");
            true
        }
        GameState::OWins => {
            println!("O wins");
            true
        }
        GameState::Draw => {
            println!("Draw");
            true
        }
        GameState::InProgress => false,
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let params = SearchParams {
        use_cache: !args.no_cache,
        threads: args.threads,
        cache_capacity: args.cache_capacity,
        ..SearchParams::default()
    };
    let mut searcher = Searcher::with_params(params);
    let mut board = Board::new();

    println!("You are X, the engine is O. X moves first.\n{board}");

    loop {
        let mv = get_human_move(&board)?;
        board.apply(mv, Player::X)?;
        println!("{board}");
        if announce(board.state()) {
            break;
        }

        let reply = searcher.best_move(&board)?;
        board.apply(reply, Player::O)?;
        log::info!(
            "engine played ({}, {}) after {} nodes",
            reply.row,
            reply.col,
            searcher.nodes()
        );
        println!("Engine plays ({}, {})\n{board}", reply.row, reply.col);
        if announce(board.state()) {
            break;
        }
    }

    Ok(())
}
