use arboard::Clipboard;
use astarviz::{reconstruct_path, spawn_search, CellKind, Config, Grid, SharedSearch};
use macroquad::prelude::*;
use std::sync::Arc;
use std::time::Duration;

fn window_conf() -> Conf {
    Conf {
        window_title: "A* Pathfinding".to_owned(),
        window_width: 600,
        window_height: 600,
        ..Default::default()
    }
}

/// Draw every cell as an inset square colored by its type and state.
fn draw_cells(grid: &Grid, cell_size: f32) {
    let block_size = cell_size * 0.9;
    let inset = (cell_size - block_size) / 2.0;

    for y in 0..grid.rows {
        for x in 0..grid.cols {
            let cell = &grid.cells[grid.get_id(x, y) as usize];
            let color = if cell.kind == CellKind::Blocked {
                Color::from_rgba(20, 20, 20, 255)
            } else if cell.examined {
                Color::from_rgba(180, 180, 200, 255)
            } else {
                Color::from_rgba(200, 200, 200, 255)
            };

            let px = x as f32 * cell_size + inset;
            let py = y as f32 * cell_size + inset;
            draw_rectangle(px, py, block_size, block_size, color);

            if (x, y) == grid.start || (x, y) == grid.end {
                let color = if (x, y) == grid.end {
                    Color::from_rgba(0, 150, 0, 255)
                } else {
                    Color::from_rgba(0, 200, 0, 255)
                };
                draw_rectangle_lines(px, py, block_size, block_size, 5.0, color);
            }
        }
    }
}

/// Draw the reconstructed path as line segments between cell centers.
fn draw_path(grid: &Grid, cell_size: f32) {
    let center = |pos: (i32, i32)| {
        let offset = cell_size / 2.0;
        (
            pos.0 as f32 * cell_size + offset,
            pos.1 as f32 * cell_size + offset,
        )
    };

    let color = Color::from_rgba(0, 150, 0, 255);
    let path = reconstruct_path(grid);
    for pair in path.windows(2) {
        let (x1, y1) = center(pair[0]);
        let (x2, y2) = center(pair[1]);
        draw_line(x1, y1, x2, y2, 3.0, color);
    }
}

fn copy_to_clipboard(grid: &Grid) {
    let text = grid.to_text_art();
    match Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(&text) {
                println!("Failed to copy to clipboard: {}", e);
            } else {
                println!("Grid state copied to clipboard!");
                // Keep clipboard alive for a moment to ensure clipboard managers can capture it
                std::thread::sleep(std::time::Duration::from_millis(100));
            }
        }
        Err(e) => {
            println!("Failed to access clipboard: {}", e);
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = Config::load();
    // crate-root path: the macroquad prelude glob re-exports its bundled
    // quad-rand as `rand`, which would shadow the registry crate here
    let seed = config.search.seed.unwrap_or_else(::rand::random);

    let grid = match Grid::generate(
        config.grid.cols,
        config.grid.rows,
        config.start(),
        config.end(),
        config.search.obstacle_probability,
        seed,
    ) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return;
        }
    };

    let shared = Arc::new(SharedSearch::new(grid));
    let handle = match spawn_search(
        shared.clone(),
        Duration::from_millis(config.search.step_interval_ms),
    ) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return;
        }
    };

    let background = Color::from_rgba(
        config.visual.background_r,
        config.visual.background_g,
        config.visual.background_b,
        255,
    );

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        // per-frame snapshot: no torn reads of cells mid-update
        let snapshot = shared.snapshot();

        if is_key_pressed(KeyCode::C) {
            copy_to_clipboard(&snapshot);
        }

        clear_background(background);
        draw_cells(&snapshot, config.grid.cell_size);
        if shared.path_found() {
            draw_path(&snapshot, config.grid.cell_size);
        }

        next_frame().await
    }

    shared.stop();
    match handle.join() {
        Ok(outcome) => println!("Search finished: {:?}", outcome),
        Err(_) => eprintln!("Search thread panicked"),
    }
}
