// main.rs - Conway's Game of Life on an unbounded plane, stepped by coroutines
// The board is a sparse LiveSet; the window shows a movable viewport onto it.

use eframe::egui;
use egui::Color32;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

mod config; // Defaults and CLI overrides
mod ui;     // eframe::App for GameOfLife

use config::{Config, ConfigError};
use life::patterns::{self, PATTERNS};
use life::{Cell, CoroError, CycleDetector, LiveSet};

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("conway_coro=info".parse()?),
        )
        .init();

    let config = match Config::from_args() {
        Ok(config) => config,
        Err(ConfigError::Cli(err)) => err.exit(), // --help, --version, or a usage error
        Err(err) => return Err(err.into()),
    };

    let mut game = GameOfLife::new(config)?;
    if let Some(generations) = game.config.headless {
        return run_headless(&mut game, generations);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Async Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(game)),
    )
    .map_err(|err| eyre::eyre!("window closed with an error: {err}"))
}

/// Driver loop without a window: step, log, print the final board.
fn run_headless(game: &mut GameOfLife, generations: u64) -> eyre::Result<()> {
    info!(generations, workers = game.config.workers, "running headless");
    for _ in 0..generations {
        game.update_generation()?;
        debug!(generation = game.generation, population = game.live.len());
    }
    info!(generation = game.generation, population = game.live.len(), "done");
    print!("{}", render_final(&game.live));
    Ok(())
}

/// Plaintext picture when the bounding box is small enough, otherwise one
/// `x y` line per live cell.
fn render_final(live: &LiveSet) -> String {
    let area = live.bounds().map_or(0, |(min, max)| {
        let width = (i128::from(max.x) - i128::from(min.x) + 1) as u128;
        let height = (i128::from(max.y) - i128::from(min.y) + 1) as u128;
        width.saturating_mul(height)
    });
    if area <= config::MAX_PRINT_AREA {
        return live.to_string();
    }

    warn!(population = live.len(), "board too sparse to draw, listing coordinates");
    let mut cells: Vec<&Cell> = live.iter().collect();
    cells.sort_unstable_by_key(|c| (c.y, c.x));
    cells.iter().map(|c| format!("{} {}\n", c.x, c.y)).collect()
}

/// Async Conway's Game of Life - the live set is the only simulation state
pub struct GameOfLife {
    pub live: LiveSet,
    pub config: Config,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub generation: u64,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    /// Top-left cell of the visible window
    pub origin: Cell,
    /// Random soups generated so far; never reset
    pub soup_count: u64,

    runtime: tokio::runtime::Runtime,
    history: CycleDetector,
}

impl GameOfLife {
    pub fn new(config: Config) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;

        let mut game = Self {
            live: LiveSet::new(),
            is_running: false,
            last_update: Instant::now(),
            update_interval: config.update_interval,
            generation: 0,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: config.pattern.unwrap_or(0),
            origin: Cell::new(0, 0),
            soup_count: 0,
            runtime,
            history: CycleDetector::default(),
            config,
        };
        if game.config.pattern.is_some() {
            game.apply_selected_pattern();
        }
        Ok(game)
    }

    /// Top-left placement that roughly centres `live` in the viewport.
    fn centred_origin(&self, live: &LiveSet) -> Cell {
        let (cols, rows) = (self.config.view_cols as i64, self.config.view_rows as i64);
        match live.bounds() {
            Some((min, max)) => Cell::new(
                (cols - (max.x - min.x + 1)).max(0) / 2,
                (rows - (max.y - min.y + 1)).max(0) / 2,
            ),
            None => Cell::new(0, 0),
        }
    }

    fn reset_run(&mut self) {
        self.generation = 0;
        self.history.clear();
    }
}

/// Driver operations the UI calls into
pub trait GameOfLifeInterface {
    fn update_generation(&mut self) -> Result<(), CoroError>;
    fn check_for_cycle(&mut self) -> bool;
    fn clear_grid(&mut self);
    fn apply_selected_pattern(&mut self);
    fn apply_random_pattern(&mut self);
    fn toggle_cell(&mut self, cell: Cell);
}

impl GameOfLifeInterface for GameOfLife {
    fn update_generation(&mut self) -> Result<(), CoroError> {
        self.live = if self.config.workers > 1 {
            // Spread neighbor counting over coroutines on the owned runtime
            self.runtime.block_on(life::step_coro(&self.live, self.config.workers))?
        } else {
            self.live.step()
        };
        self.generation += 1;

        if self.check_for_cycle() {
            if self.is_running {
                info!(generation = self.generation, population = self.live.len(), "cycle detected, pausing");
            }
            self.is_running = false;
        }
        Ok(())
    }

    fn check_for_cycle(&mut self) -> bool {
        self.history.observe(&self.live)
    }

    fn clear_grid(&mut self) {
        self.live = LiveSet::new();
        self.reset_run();
    }

    fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            let offset = self.centred_origin(&pattern.live_set());
            self.live = pattern.placed_at(offset).translate(self.origin.x, self.origin.y);
            self.reset_run();
            info!(pattern = pattern.name, population = self.live.len(), "pattern applied");
        }
    }

    fn apply_random_pattern(&mut self) {
        // A fresh seed per click, derived from the configured one
        let seed = self.config.seed.wrapping_add(self.soup_count);
        self.soup_count += 1;
        let soup = patterns::random_soup(
            self.config.view_cols as i64,
            self.config.view_rows as i64,
            self.config.density,
            seed,
        );
        self.live = soup.translate(self.origin.x, self.origin.y);
        self.reset_run();
        info!(seed, population = self.live.len(), "random soup");
    }

    fn toggle_cell(&mut self, cell: Cell) {
        let alive = self.live.toggle(cell);
        debug!(x = cell.x, y = cell.y, alive, "toggled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(args: &[&str]) -> GameOfLife {
        let config = Config::from_arg_iter(std::iter::once("conway_coro").chain(args.iter().copied()))
            .expect("valid arguments");
        GameOfLife::new(config).expect("runtime")
    }

    #[test]
    fn driver_feeds_each_output_back_in() {
        let mut game = game(&["--pattern", "glider"]);
        let start = game.live.clone();
        for _ in 0..4 {
            game.update_generation().expect("step");
        }
        assert_eq!(game.generation, 4);
        assert_eq!(game.live, start.translate(1, 1));
    }

    #[test]
    fn coroutine_driver_matches_plain_driver() {
        let mut plain = game(&["--pattern", "gosper glider gun"]);
        let mut coro = game(&["--pattern", "gosper glider gun", "--workers", "4"]);
        for _ in 0..45 {
            plain.update_generation().expect("step");
            coro.update_generation().expect("step");
        }
        assert_eq!(plain.live, coro.live);
    }

    #[test]
    fn still_life_stops_the_run() {
        let mut game = game(&[]);
        for (x, y) in [(0, 0), (1, 0), (0, 1)] {
            game.toggle_cell(Cell::new(x, y));
        }
        game.is_running = true;
        game.update_generation().expect("step"); // tromino becomes a block
        assert!(game.is_running);
        game.update_generation().expect("step"); // block repeats
        assert!(!game.is_running);
    }

    #[test]
    fn toggling_twice_restores_the_board() {
        let mut game = game(&["--pattern", "blinker"]);
        let before = game.live.clone();
        game.toggle_cell(Cell::new(-100, 3));
        assert_eq!(game.live.len(), before.len() + 1);
        game.toggle_cell(Cell::new(-100, 3));
        assert_eq!(game.live, before);
    }

    #[test]
    fn each_random_click_draws_a_new_soup() {
        let mut clicks = game(&["--seed", "42"]);
        clicks.apply_random_pattern();
        let first = clicks.live.clone();
        clicks.apply_random_pattern();
        assert_ne!(clicks.live, first, "two Random clicks gave the same board");
        assert_eq!(clicks.soup_count, 2);

        let mut replay = game(&["--seed", "42"]);
        replay.apply_random_pattern();
        assert_eq!(replay.live, first);
    }

    #[test]
    fn far_apart_cells_print_as_coordinates() {
        let small = LiveSet::from([(0, 0), (2, 0)]);
        assert_eq!(render_final(&small), "O.O\n");

        let far = LiveSet::from([(i64::MAX, 0), (i64::MIN, 0), (5, -3)]);
        assert_eq!(
            render_final(&far),
            format!("5 -3\n{} 0\n{} 0\n", i64::MIN, i64::MAX)
        );
    }

    #[test]
    fn clear_resets_generation() {
        let mut game = game(&["--pattern", "pulsar"]);
        game.update_generation().expect("step");
        game.clear_grid();
        assert!(game.live.is_empty());
        assert_eq!(game.generation, 0);
    }
}
