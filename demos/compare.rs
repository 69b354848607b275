use grid_search::session::{Session, DEFAULT_ROWS};
use grid_search::{Algorithm, CellState, Step};

// In this demo both algorithms are run on a 30x30 board with two walls between the
// source in the top-left and the target in the bottom-right corner. The board is printed after
// each run with
// - # marking a barrier
// - S and G marking the source and target
// - x marking closed cells, o open cells and * the path
//
// Pass an algorithm name ("astar" or "bfs") to run only that one.
// Set RUST_LOG=info to see the engine's log output.

fn main() {
    env_logger::init();
    let only = match std::env::args().nth(1).map(|arg| arg.parse::<Algorithm>()) {
        Some(Ok(algorithm)) => Some(algorithm),
        Some(Err(e)) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
        None => None,
    };

    let n = DEFAULT_ROWS;
    let mut session = Session::default();
    session.paint(1, 1).unwrap();
    session.paint(n - 2, n - 2).unwrap();
    for i in 0..n - 6 {
        session.edit_cell(i, 10, CellState::Barrier).unwrap();
        session.edit_cell(n - 1 - i, 20, CellState::Barrier).unwrap();
    }

    let algorithms = match only {
        Some(algorithm) => vec![algorithm],
        None => Algorithm::ALL.to_vec(),
    };
    for algorithm in algorithms {
        let result = session
            .run_search(algorithm, |_| Step::Continue)
            .unwrap();
        println!("{}", session.grid());
        match result.cost() {
            Some(cost) => println!("{algorithm}: path of {cost} moves"),
            None => println!("{algorithm}: no path"),
        }
        println!(
            "{algorithm}: {} expansions, time: {:.4} seconds\n",
            result.expansions,
            result.elapsed.as_secs_f64()
        );
    }
}
