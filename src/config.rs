use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::memory::PopPolicy;
use super::runner::{Pacing, Schedule};
use super::PROGRAM_START_ADDR;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read configuration file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("'{0}' is not a valid hexadecimal value")]
    Hex(String),
    #[error("value '{0}' does not fit in one byte")]
    ByteOverflow(String),
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Step,
    Free,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Preset {
    pub address: String,
    pub value: String,
}

impl Preset {
    pub fn parse(&self) -> Result<(u16, u8), ConfigError> {
        let address = parse_hex(&self.address)?;
        let value = parse_hex(&self.value)?;
        let value = u8::try_from(value).map_err(|_| ConfigError::ByteOverflow(self.value.clone()))?;

        Ok((address, value))
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct DisplayConfig {
    pub enabled: Option<bool>,
    pub scale: Option<usize>,
    pub intensity: Option<u8>,
    pub fps: Option<u32>,
}

impl DisplayConfig {
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    pub fn scale(&self) -> usize {
        self.scale.unwrap_or(10).max(1)
    }

    pub fn intensity(&self) -> u8 {
        self.intensity.unwrap_or(16)
    }

    pub fn fps(&self) -> u32 {
        self.fps.unwrap_or(16).max(1)
    }
}

/// Runtime settings. Every field is optional, the accessors give the
/// defaults. Command line flags are merged over a loaded file.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub mode: Option<Mode>,
    pub frequency: Option<u32>,
    pub diagnostics: Option<bool>,
    pub load_address: Option<String>,
    pub pop_policy: Option<PopPolicy>,
    pub random_byte_address: Option<String>,
    pub presets: Option<Vec<Preset>>,
    pub display: Option<DisplayConfig>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        // an empty document deserializes as unit, not as an empty map
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_yaml::from_str(contents)?)
    }

    /// What the command line starts from before the file and the flags are
    /// merged: a random byte at 0x00fe before every tick and 0x64 preset
    /// at 0x00ff. A file that lists its own presets replaces this one.
    pub fn interactive() -> Self {
        Config {
            random_byte_address: Some("0x00fe".to_owned()),
            presets: Some(vec![Preset {
                address: "0x00ff".to_owned(),
                value: "0x64".to_owned(),
            }]),
            ..Config::default()
        }
    }

    /// Values set in `other` take precedence.
    pub fn merge(self, other: Config) -> Self {
        Config {
            mode: other.mode.or(self.mode),
            frequency: other.frequency.or(self.frequency),
            diagnostics: other.diagnostics.or(self.diagnostics),
            load_address: other.load_address.or(self.load_address),
            pop_policy: other.pop_policy.or(self.pop_policy),
            random_byte_address: other.random_byte_address.or(self.random_byte_address),
            presets: other.presets.or(self.presets),
            display: match (self.display, other.display) {
                (Some(mine), Some(theirs)) => Some(DisplayConfig {
                    enabled: theirs.enabled.or(mine.enabled),
                    scale: theirs.scale.or(mine.scale),
                    intensity: theirs.intensity.or(mine.intensity),
                    fps: theirs.fps.or(mine.fps),
                }),
                (mine, theirs) => theirs.or(mine),
            },
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode.unwrap_or_default()
    }

    pub fn frequency(&self) -> u32 {
        self.frequency.unwrap_or(0)
    }

    pub fn diagnostics(&self) -> bool {
        self.diagnostics.unwrap_or(true)
    }

    pub fn pop_policy(&self) -> PopPolicy {
        self.pop_policy.unwrap_or_default()
    }

    pub fn schedule(&self) -> Schedule {
        match self.mode() {
            Mode::Step => Schedule::SingleStep,
            Mode::Free => Schedule::FreeRunning(Pacing::from_frequency(self.frequency())),
        }
    }

    pub fn load_address(&self) -> Result<u16, ConfigError> {
        match &self.load_address {
            Some(address) => parse_hex(address),
            None => Ok(PROGRAM_START_ADDR),
        }
    }

    pub fn random_byte_address(&self) -> Result<Option<u16>, ConfigError> {
        self.random_byte_address
            .as_deref()
            .map(parse_hex)
            .transpose()
    }

    pub fn presets(&self) -> Result<Vec<(u16, u8)>, ConfigError> {
        self.presets
            .iter()
            .flatten()
            .map(Preset::parse)
            .collect()
    }

    pub fn display(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }
}

/// Parse a 16 bits hexadecimal value. Accepted forms are `0x1234`,
/// `#0x1234`, `$1234` and `1234`, with up to 4 digits.
pub fn parse_hex(value: &str) -> Result<u16, ConfigError> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("#0x")
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix('$'))
        .unwrap_or(trimmed);

    if digits.is_empty() || digits.len() > 4 {
        return Err(ConfigError::Hex(value.to_owned()));
    }
    let padded = format!("{:0>4}", digits);
    let mut bytes = [0x00; 2];
    hex::decode_to_slice(&padded, &mut bytes).map_err(|_| ConfigError::Hex(value.to_owned()))?;

    Ok(u16::from_be_bytes(bytes))
}
