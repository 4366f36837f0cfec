use astarviz::{reconstruct_path, CellKind, Grid, SearchEngine, SearchOutcome, INFINITE_COST};

fn run(grid: &mut Grid) -> SearchOutcome {
    let mut engine = SearchEngine::new(grid).unwrap();
    engine.run(grid)
}

#[test]
fn open_grid_paths_have_manhattan_length() {
    // unit-weight 4-connectivity: path cost equals |dx| + |dy|
    let cases = [
        (5, 5, (0, 0), (4, 4), 8u32),
        (10, 10, (2, 3), (7, 9), 11),
        (30, 30, (0, 20), (20, 5), 35),
    ];
    for (cols, rows, start, end, expected) in cases {
        let mut grid = Grid::open(cols, rows, start, end).unwrap();
        assert_eq!(run(&mut grid), SearchOutcome::Found);
        assert_eq!(grid.cell(end.0, end.1).unwrap().cost, expected);
        let path = reconstruct_path(&grid);
        assert_eq!(path.len() as u32, expected + 1);
        assert_eq!(path[0], start);
        assert_eq!(*path.last().unwrap(), end);
        // consecutive path cells are orthogonal neighbors
        for pair in path.windows(2) {
            let dist = (pair[0].0 - pair[1].0).abs() + (pair[0].1 - pair[1].1).abs();
            assert_eq!(dist, 1);
        }
    }
}

#[test]
fn separating_wall_exhausts_the_search() {
    let mut grid = Grid::open(3, 3, (0, 0), (2, 2)).unwrap();
    for x in 0..3 {
        grid.cell_mut(x, 1).unwrap().kind = CellKind::Blocked;
    }
    assert_eq!(run(&mut grid), SearchOutcome::Exhausted);
    assert_eq!(grid.cell(2, 2).unwrap().predecessor, None);
    assert!(reconstruct_path(&grid).is_empty());
}

#[test]
fn coincident_start_and_end_found_immediately() {
    let mut grid = Grid::generate(7, 7, (3, 3), (3, 3), 0.3, 11).unwrap();
    let mut engine = SearchEngine::new(&mut grid).unwrap();
    // one step suffices: the first pop is already the end
    assert_eq!(engine.step(&mut grid), Some(SearchOutcome::Found));
    assert!(reconstruct_path(&grid).is_empty());
}

#[test]
fn same_seed_reproduces_the_obstacle_layout() {
    let a = Grid::generate(30, 30, (0, 20), (20, 5), 0.3, 1234).unwrap();
    let b = Grid::generate(30, 30, (0, 20), (20, 5), 0.3, 1234).unwrap();
    for (ca, cb) in a.cells.iter().zip(&b.cells) {
        assert_eq!(ca.kind, cb.kind);
    }
}

#[test]
fn examined_cells_are_frozen() {
    // once expanded, a cell's cost and predecessor never change again
    let mut grid = Grid::generate(20, 20, (0, 0), (19, 19), 0.25, 5).unwrap();
    let mut engine = SearchEngine::new(&mut grid).unwrap();
    let mut previous = grid.clone();
    loop {
        let outcome = engine.step(&mut grid);
        for (id, old) in previous.cells.iter().enumerate() {
            if old.examined {
                let new = &grid.cells[id];
                assert!(new.examined);
                assert_eq!(new.cost, old.cost);
                assert_eq!(new.predecessor, old.predecessor);
            }
        }
        if outcome.is_some() {
            break;
        }
        previous = grid.clone();
    }
}

#[test]
fn predecessors_satisfy_the_unit_cost_invariant() {
    let mut grid = Grid::generate(30, 30, (0, 20), (20, 5), 0.3, 77).unwrap();
    run(&mut grid);
    for y in 0..grid.rows {
        for x in 0..grid.cols {
            let cell = grid.cell(x, y).unwrap();
            if let Some((px, py)) = cell.predecessor {
                let pred = grid.cell(px, py).unwrap();
                assert_eq!(cell.cost, pred.cost + 1);
                // predecessors were recorded while being expanded
                assert!(pred.examined);
            }
            if cell.examined {
                assert_ne!(cell.cost, INFINITE_COST);
            }
        }
    }
}

#[test]
fn start_cost_is_zero_once_search_begins() {
    let mut grid = Grid::open(10, 10, (4, 4), (9, 9)).unwrap();
    SearchEngine::new(&mut grid).unwrap();
    assert_eq!(grid.cell(4, 4).unwrap().cost, 0);
}
