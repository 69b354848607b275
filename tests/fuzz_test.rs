/// Fuzzes the search engine with many random barrier layouts. A* and BFS must agree with each
/// other and with the connected components on whether the target is reachable, and must return
/// paths of the same (shortest) length whenever it is.
use grid_search::{
    solver::{astar::AstarSolver, bfs::BfsSolver, GridSolver},
    CellState, Coord, PathingGrid, Step,
};
use rand::prelude::*;

fn random_grid(rows: usize, cols: usize, rng: &mut StdRng, density: f64) -> PathingGrid {
    let mut pathing_grid = PathingGrid::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            if rng.gen_bool(density) {
                pathing_grid
                    .set_state(row, col, CellState::Barrier)
                    .unwrap();
            }
        }
    }
    pathing_grid
}

fn random_free_point(grid: &PathingGrid, rng: &mut StdRng) -> Coord {
    loop {
        let p = Coord::new(rng.gen_range(0..grid.rows()), rng.gen_range(0..grid.cols()));
        if grid.can_move_to(&p) {
            return p;
        }
    }
}

fn visualize_grid(grid: &PathingGrid, start: &Coord, end: &Coord) {
    for cell in grid.iter() {
        let p = cell.coord();
        if *start == p {
            print!("S");
        } else if *end == p {
            print!("G");
        } else if cell.is_barrier() {
            print!("#");
        } else {
            print!(".");
        }
        if p.col + 1 == grid.cols() {
            println!();
        }
    }
}

fn is_valid_path(grid: &PathingGrid, path: &[Coord], start: &Coord, end: &Coord) -> bool {
    path.first() == Some(start)
        && path.last() == Some(end)
        && path.iter().all(|p| grid.can_move_to(p))
        && path
            .windows(2)
            .all(|w| w[0].row.abs_diff(w[1].row) + w[0].col.abs_diff(w[1].col) == 1)
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let astar = AstarSolver::new();
    for _ in 0..N_GRIDS {
        let mut random_grid = random_grid(N, N, &mut rng, 0.4);
        let start = Coord::new(0, 0);
        let end = Coord::new(N - 1, N - 1);
        random_grid.set_state(0, 0, CellState::Source).unwrap();
        random_grid
            .set_state(N - 1, N - 1, CellState::Target)
            .unwrap();
        random_grid.update();
        let reachable = random_grid.reachable(&start, &end);

        let astar_result = astar
            .search_tagged(&mut random_grid, |_| Step::Continue)
            .unwrap();
        let bfs_result = BfsSolver
            .search_tagged(&mut random_grid, |_| Step::Continue)
            .unwrap();
        // Show the grid if the algorithms disagree
        if astar_result.found() != reachable || bfs_result.found() != reachable {
            visualize_grid(&random_grid, &start, &end);
        }
        assert_eq!(astar_result.found(), reachable);
        assert_eq!(bfs_result.found(), reachable);
        if reachable {
            assert!(is_valid_path(&random_grid, &astar_result.path, &start, &end));
            assert!(is_valid_path(&random_grid, &bfs_result.path, &start, &end));
            // BFS is exact on unit costs, so A* matching it shows the heuristic never overestimates.
            assert_eq!(astar_result.cost(), bfs_result.cost());
            assert!(astar_result.expansions <= bfs_result.expansions);
        } else {
            assert!(astar_result.path.is_empty() && bfs_result.path.is_empty());
        }
    }
}

#[test]
fn fuzz_rectangular_endpoints() {
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(1);
    let astar = AstarSolver::new();
    for _ in 0..N_GRIDS {
        let rows = rng.gen_range(1..12);
        let cols = rng.gen_range(1..12);
        let mut random_grid = random_grid(rows, cols, &mut rng, 0.3);
        // Guarantee at least one free cell to place endpoints on.
        random_grid.set_state(0, 0, CellState::Free).unwrap();
        random_grid.update();
        let start = random_free_point(&random_grid, &mut rng);
        let end = random_free_point(&random_grid, &mut rng);
        let reachable = random_grid.reachable(&start, &end);

        let astar_path = astar.get_path_single_goal(&mut random_grid, start, end);
        let bfs_path = BfsSolver.get_path_single_goal(&mut random_grid, start, end);
        if astar_path.is_some() != reachable || bfs_path.is_some() != reachable {
            visualize_grid(&random_grid, &start, &end);
        }
        assert_eq!(astar_path.is_some(), reachable);
        assert_eq!(bfs_path.is_some(), reachable);
        if let (Some(a), Some(b)) = (astar_path, bfs_path) {
            assert_eq!(a.len(), b.len());
            assert!(a.len() > start.row.abs_diff(end.row) + start.col.abs_diff(end.col));
        }
    }
}

#[test]
fn fuzz_determinism() {
    const N: usize = 12;
    const N_GRIDS: usize = 200;
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng, 0.25);
        grid.set_state(0, 0, CellState::Source).unwrap();
        grid.set_state(N - 1, N - 1, CellState::Target).unwrap();
        let mut copy = grid.clone();
        for solver_runs in [
            (
                AstarSolver::new().search_tagged(&mut grid, |_| Step::Continue),
                AstarSolver::new().search_tagged(&mut copy, |_| Step::Continue),
            ),
            (
                BfsSolver.search_tagged(&mut grid, |_| Step::Continue),
                BfsSolver.search_tagged(&mut copy, |_| Step::Continue),
            ),
        ] {
            let (first, second) = (solver_runs.0.unwrap(), solver_runs.1.unwrap());
            assert_eq!(first.outcome, second.outcome);
            assert_eq!(first.path, second.path);
            assert_eq!(first.expansions, second.expansions);
        }
    }
}

#[test]
fn reset_transient_twice_is_reset_once() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        let mut grid = random_grid(8, 8, &mut rng, 0.2);
        grid.set_state(0, 0, CellState::Source).unwrap();
        grid.set_state(7, 7, CellState::Target).unwrap();
        BfsSolver
            .search_tagged(&mut grid, |_| Step::Continue)
            .unwrap();
        grid.reset_transient();
        let once = grid.to_string();
        grid.reset_transient();
        assert_eq!(grid.to_string(), once);
        assert!(grid.iter().all(|c| !c.state().is_transient()));
    }
}
