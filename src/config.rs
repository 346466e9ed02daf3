use crate::consts;
use crate::game::Grid;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawConfig")]
pub(crate) struct Config {
    /// Whether to play audio cues
    pub(crate) sound: bool,

    /// Board dimensions
    pub(crate) grid: Grid,

    /// Speed curve for the simulation tick
    pub(crate) tempo: Tempo,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("sidewinder").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist
    /// and `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, parsed, or validated.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            sound: true,
            grid: Grid::new(consts::DEFAULT_GRID_WIDTH, consts::DEFAULT_GRID_HEIGHT),
            tempo: Tempo::default(),
        }
    }
}

/// How the tick interval shrinks as the level climbs: starting from `base`,
/// each level-up recomputes it as `max(min, base − level×step)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Tempo {
    base: Duration,
    min: Duration,
    step: Duration,
}

impl Tempo {
    /// The tick interval at the start of a round
    pub(crate) fn initial(self) -> Duration {
        self.base
    }

    /// The tick interval after reaching `level`
    pub(crate) fn interval_for(self, level: u32) -> Duration {
        self.base
            .saturating_sub(self.step.saturating_mul(level))
            .max(self.min)
    }
}

impl Default for Tempo {
    fn default() -> Tempo {
        Tempo {
            base: consts::BASE_TICK,
            min: consts::MIN_TICK,
            step: consts::TICK_STEP,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawConfig {
    sound: bool,
    grid: RawGrid,
    tempo: RawTempo,
}

impl Default for RawConfig {
    fn default() -> RawConfig {
        RawConfig {
            sound: true,
            grid: RawGrid::default(),
            tempo: RawTempo::default(),
        }
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(value: RawConfig) -> Result<Config, ConfigError> {
        let RawGrid { width, height } = value.grid;
        if !consts::GRID_WIDTH_RANGE.contains(&width) {
            return Err(ConfigError::invalid(format!(
                "grid width must be between {} and {}",
                consts::GRID_WIDTH_RANGE.start(),
                consts::GRID_WIDTH_RANGE.end()
            )));
        }
        if !consts::GRID_HEIGHT_RANGE.contains(&height) {
            return Err(ConfigError::invalid(format!(
                "grid height must be between {} and {}",
                consts::GRID_HEIGHT_RANGE.start(),
                consts::GRID_HEIGHT_RANGE.end()
            )));
        }
        let RawTempo {
            base_ms,
            min_ms,
            step_ms,
        } = value.tempo;
        if base_ms == 0 {
            return Err(ConfigError::invalid("tempo base-ms must be nonzero"));
        }
        if min_ms > base_ms {
            return Err(ConfigError::invalid(
                "tempo min-ms must not exceed base-ms",
            ));
        }
        Ok(Config {
            sound: value.sound,
            grid: Grid::new(width, height),
            tempo: Tempo {
                base: Duration::from_millis(base_ms),
                min: Duration::from_millis(min_ms),
                step: Duration::from_millis(step_ms),
            },
        })
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGrid {
    width: u16,
    height: u16,
}

impl Default for RawGrid {
    fn default() -> RawGrid {
        RawGrid {
            width: consts::DEFAULT_GRID_WIDTH,
            height: consts::DEFAULT_GRID_HEIGHT,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawTempo {
    base_ms: u64,
    min_ms: u64,
    step_ms: u64,
}

impl Default for RawTempo {
    fn default() -> RawTempo {
        RawTempo {
            base_ms: 250,
            min_ms: 60,
            step_ms: 15,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    fn invalid<S: Into<String>>(msg: S) -> ConfigError {
        ConfigError::Invalid(msg.into())
    }
}
