// config.rs - Defaults and command-line overrides for the viewer

use std::ffi::OsString;
use std::time::Duration;

use clap::{App, Arg, ArgMatches};
use life::patterns;
use thiserror::Error;

// Compile-time defaults
pub const VIEW_COLS: usize = 50; // Visible columns of the unbounded plane
pub const VIEW_ROWS: usize = 50; // Visible rows
pub const BOX_SIZE: f32 = 15.0; // Pixel size of one cell
pub const SPACING: f32 = 0.5; // Gap between cells
pub const UPDATE_INTERVAL_MS: u64 = 200;
pub const SOUP_DENSITY: f64 = 0.33;
pub const SOUP_SEED: u64 = 0x5EED_1234_ABCD_EF01;
pub const MAX_PRINT_AREA: u128 = 1 << 20; // Larger boards print as coordinates

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Cli(#[from] clap::Error),

    #[error("--{flag} expects a number, got {value:?}")]
    InvalidNumber { flag: &'static str, value: String },

    #[error("--{flag} must be greater than zero")]
    Zero { flag: &'static str },

    #[error("--density must be between 0 and 1, got {0}")]
    Density(f64),

    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub view_cols: usize,
    pub view_rows: usize,
    pub box_size: f32,
    pub spacing: f32,
    pub update_interval: Duration,
    pub workers: usize,
    pub density: f64,
    pub seed: u64,
    /// Index into [`patterns::PATTERNS`] placed on startup.
    pub pattern: Option<usize>,
    /// Run this many generations without a window.
    pub headless: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            view_cols: VIEW_COLS,
            view_rows: VIEW_ROWS,
            box_size: BOX_SIZE,
            spacing: SPACING,
            update_interval: Duration::from_millis(UPDATE_INTERVAL_MS),
            workers: 1,
            density: SOUP_DENSITY,
            seed: SOUP_SEED,
            pattern: None,
            headless: None,
        }
    }
}

impl Config {
    /// Distance in pixels from one cell's corner to the next.
    pub fn pitch(&self) -> f32 {
        self.box_size + self.spacing
    }

    pub fn from_args() -> Result<Self, ConfigError> {
        Self::from_arg_iter(std::env::args_os())
    }

    pub fn from_arg_iter<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = cli().try_get_matches_from(args)?;
        let mut config = Config::default();

        if let Some(ms) = parse_number::<u64>(&matches, "interval-ms")? {
            config.update_interval = Duration::from_millis(non_zero(ms, "interval-ms")?);
        }
        if let Some(workers) = parse_number::<usize>(&matches, "workers")? {
            config.workers = non_zero(workers, "workers")?;
        }
        if let Some(cols) = parse_number::<usize>(&matches, "cols")? {
            config.view_cols = non_zero(cols, "cols")?;
        }
        if let Some(rows) = parse_number::<usize>(&matches, "rows")? {
            config.view_rows = non_zero(rows, "rows")?;
        }
        if let Some(seed) = parse_number::<u64>(&matches, "seed")? {
            config.seed = seed;
        }
        if let Some(density) = parse_number::<f64>(&matches, "density")? {
            if !(0.0..=1.0).contains(&density) {
                return Err(ConfigError::Density(density));
            }
            config.density = density;
        }
        if let Some(name) = matches.value_of("pattern") {
            let index = patterns::find_index(name)
                .ok_or_else(|| ConfigError::UnknownPattern(name.to_string()))?;
            config.pattern = Some(index);
        }
        config.headless = parse_number::<u64>(&matches, "headless")?;

        Ok(config)
    }
}

fn cli() -> App<'static> {
    App::new("conway_coro")
        .about("Conway's Game of Life on an unbounded plane")
        .arg(Arg::new("interval-ms")
            .long("interval-ms")
            .value_name("MS")
            .help("Milliseconds between generations while running (default: 200)")
            .takes_value(true))
        .arg(Arg::new("workers")
            .short('w')
            .long("workers")
            .value_name("N")
            .help("Neighbor-counting coroutines per generation (default: 1)")
            .takes_value(true))
        .arg(Arg::new("pattern")
            .short('p')
            .long("pattern")
            .value_name("NAME")
            .help("Pattern placed on startup, e.g. \"Glider\" or \"Pulsar\"")
            .takes_value(true))
        .arg(Arg::new("seed")
            .long("seed")
            .value_name("SEED")
            .help("Seed for random soups")
            .takes_value(true))
        .arg(Arg::new("density")
            .long("density")
            .value_name("P")
            .help("Live probability for random soups, 0 to 1 (default: 0.33)")
            .takes_value(true))
        .arg(Arg::new("cols")
            .long("cols")
            .value_name("N")
            .help("Visible columns (default: 50)")
            .takes_value(true))
        .arg(Arg::new("rows")
            .long("rows")
            .value_name("N")
            .help("Visible rows (default: 50)")
            .takes_value(true))
        .arg(Arg::new("headless")
            .long("headless")
            .value_name("GENERATIONS")
            .help("Run without a window and print the final board")
            .takes_value(true))
}

fn parse_number<T: std::str::FromStr>(
    matches: &ArgMatches,
    flag: &'static str,
) -> Result<Option<T>, ConfigError> {
    matches
        .value_of(flag)
        .map(|value| {
            value.parse().map_err(|_| ConfigError::InvalidNumber {
                flag,
                value: value.to_string(),
            })
        })
        .transpose()
}

fn non_zero<T: PartialEq + Default>(value: T, flag: &'static str) -> Result<T, ConfigError> {
    if value == T::default() {
        Err(ConfigError::Zero { flag })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_gives_defaults() {
        let config = Config::from_arg_iter(["conway_coro"]).expect("defaults parse");
        assert_eq!(config.view_cols, VIEW_COLS);
        assert_eq!(config.update_interval, Duration::from_millis(UPDATE_INTERVAL_MS));
        assert_eq!(config.workers, 1);
        assert!(config.pattern.is_none());
        assert!(config.headless.is_none());
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_arg_iter([
            "conway_coro", "--workers", "4", "--pattern", "pulsar", "--headless", "30", "--density", "0.5",
        ])
        .expect("valid arguments");
        assert_eq!(config.workers, 4);
        assert_eq!(config.pattern.map(|i| patterns::PATTERNS[i].name), Some("Pulsar"));
        assert_eq!(config.headless, Some(30));
        assert_eq!(config.density, 0.5);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_arg_iter(["conway_coro", "--workers", "0"]),
            Err(ConfigError::Zero { flag: "workers" })
        ));
        for flag in ["interval-ms", "cols", "rows"] {
            let arg = format!("--{flag}");
            assert!(
                matches!(
                    Config::from_arg_iter(["conway_coro", arg.as_str(), "0"]),
                    Err(ConfigError::Zero { flag: f }) if f == flag
                ),
                "--{flag} 0 was accepted"
            );
        }
        assert!(matches!(
            Config::from_arg_iter(["conway_coro", "--interval-ms", "fast"]),
            Err(ConfigError::InvalidNumber { flag: "interval-ms", .. })
        ));
        assert!(matches!(
            Config::from_arg_iter(["conway_coro", "--density", "1.5"]),
            Err(ConfigError::Density(_))
        ));
        assert!(matches!(
            Config::from_arg_iter(["conway_coro", "--pattern", "spaceship"]),
            Err(ConfigError::UnknownPattern(_))
        ));
        assert!(matches!(
            Config::from_arg_iter(["conway_coro", "--bogus"]),
            Err(ConfigError::Cli(_))
        ));
    }
}
