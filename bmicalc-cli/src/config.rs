use std::{
    fmt,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::Deserialize;

pub const CONFIG_ENV_VAR: &str = "BMICALC_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot open config file {0}")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("malformed config file {0}")]
    Parse(PathBuf, #[source] ron::error::SpannedError),
}

type Result<T> = std::result::Result<T, Error>;

/// Inclusive range of accepted values.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

impl<T: fmt::Display> fmt::Display for Bounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// Sanity bounds applied to the form before any calculation.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputBounds {
    pub weight: Bounds<f64>,
    pub height: Bounds<f64>,
    pub age: Bounds<u32>,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            weight: Bounds::new(30.0, 560.0),
            height: Bounds::new(50.0, 300.0),
            age: Bounds::new(13, 120),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub bounds: InputBounds,
}

impl Config {
    pub fn parse(s: &str) -> std::result::Result<Self, ron::error::SpannedError> {
        ron::from_str(s)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::Io(path.to_owned(), e))?;
        let config: Config = ron::de::from_reader(BufReader::new(file))
            .map_err(|e| Error::Parse(path.to_owned(), e))?;
        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);
        Ok(config)
    }

    /// Loads the config from `path`, falling back to the file named by
    /// `BMICALC_CONFIG` and then to built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv::dotenv().ok();
        match path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
        {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}
