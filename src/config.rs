use serde::Deserialize;
use std::io::{self, Error, ErrorKind};
use std::path::{Path, PathBuf};

pub const DEFAULT_TARGET: &str =
    "E:/BOS/smartcontract/bulk-sender-smartcontract/contracts/ERC20BulkSender.sol";
pub const DEFAULT_SELECTORS: [&str; 3] = ["human-summary", "modifiers", "function-summary"];
pub const DEFAULT_OUTPUT: &str = "output.md";

/// What to analyze and where the report goes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub target_file: PathBuf,
    /// Printer names handed to `--print`, in order.
    pub selectors: Vec<String>,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Config {
        return Config {
            target_file: PathBuf::from(DEFAULT_TARGET),
            selectors: DEFAULT_SELECTORS.iter().map(|s| s.to_string()).collect(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        };
    }
}

impl Config {
    /// Reads a JSON config. Fields that are left out keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Config> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        return serde_json::from_str(&raw).map_err(|e| {
            Error::new(
                ErrorKind::InvalidData,
                format!("invalid config {}: {}", path.display(), e),
            )
        });
    }
}
