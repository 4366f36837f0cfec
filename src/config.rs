use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub visual: VisualConfig,
}

#[derive(Debug, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_cols")]
    pub cols: i32,
    #[serde(default = "default_rows")]
    pub rows: i32,
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
}

#[derive(Debug, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_obstacle_probability")]
    pub obstacle_probability: f64,
    #[serde(default = "default_start_x")]
    pub start_x: i32,
    #[serde(default = "default_start_y")]
    pub start_y: i32,
    #[serde(default = "default_end_x")]
    pub end_x: i32,
    #[serde(default = "default_end_y")]
    pub end_y: i32,
    #[serde(default = "default_step_interval_ms")]
    pub step_interval_ms: u64,
    /// Obstacle layout seed; a random one is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_bg_r")]
    pub background_r: u8,
    #[serde(default = "default_bg_g")]
    pub background_g: u8,
    #[serde(default = "default_bg_b")]
    pub background_b: u8,
}

// Default values
fn default_cols() -> i32 { 30 }
fn default_rows() -> i32 { 30 }
fn default_cell_size() -> f32 { 20.0 }
fn default_obstacle_probability() -> f64 { 0.3 }
fn default_start_x() -> i32 { 0 }
fn default_start_y() -> i32 { 20 }
fn default_end_x() -> i32 { 20 }
fn default_end_y() -> i32 { 5 }
fn default_step_interval_ms() -> u64 { 50 }
fn default_bg_r() -> u8 { 255 }
fn default_bg_g() -> u8 { 255 }
fn default_bg_b() -> u8 { 255 }

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: default_cols(),
            rows: default_rows(),
            cell_size: default_cell_size(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            obstacle_probability: default_obstacle_probability(),
            start_x: default_start_x(),
            start_y: default_start_y(),
            end_x: default_end_x(),
            end_y: default_end_y(),
            step_interval_ms: default_step_interval_ms(),
            seed: None,
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            background_r: default_bg_r(),
            background_g: default_bg_g(),
            background_b: default_bg_b(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            search: SearchConfig::default(),
            visual: VisualConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    println!("Loaded configuration from config.toml");
                    config
                }
                Err(e) => {
                    eprintln!("Warning: Failed to parse config.toml: {}", e);
                    eprintln!("Using default configuration");
                    Config::default()
                }
            },
            Err(_) => {
                println!("No config.toml found, using default configuration");
                Config::default()
            }
        }
    }

    pub fn start(&self) -> (i32, i32) {
        (self.search.start_x, self.search.start_y)
    }

    pub fn end(&self) -> (i32, i32) {
        (self.search.end_x, self.search.end_y)
    }
}
