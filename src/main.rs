use std::env;
use std::process;
use std::sync::Arc;
use std::time::Instant;

use gensudoku::{Board, ParseError, Solutions, Topology};

fn usage(program: &str) -> ! {
    eprintln!("usage: {} <puzzle-file> [max-solutions] [box-side]", program);
    process::exit(2);
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.get(0).map(String::as_str).unwrap_or("gensudoku");
    if args.len() < 2 || args.len() > 4 {
        usage(program);
    }
    let limit: usize = match args.get(2) {
        None => 1,
        Some(raw) => raw.parse().unwrap_or_else(|_| usage(program)),
    };
    let side: usize = match args.get(3) {
        None => 3,
        Some(raw) => raw.parse().unwrap_or_else(|_| usage(program)),
    };

    let text = match std::fs::read_to_string(&args[1]) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("cannot read {}: {}", args[1], err);
            process::exit(1);
        }
    };

    let topology = Arc::new(Topology::new(side));
    let board = match Board::from_text(topology, &text) {
        Ok(board) => board,
        Err(ParseError::Unsolvable(_)) => {
            eprintln!("the puzzle has no solution");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("bad puzzle file: {}", err);
            process::exit(2);
        }
    };

    let start = Instant::now();
    let mut solutions = Solutions::new(board);
    let mut found = 0;
    while found < limit {
        match solutions.next() {
            Some(solution) => {
                println!("{}", solution);
                found += 1;
            }
            None => break,
        }
    }
    println!(
        "{} solutions and {} dead ends found in {} ms",
        found,
        solutions.dead_ends(),
        start.elapsed().as_millis()
    );
}
