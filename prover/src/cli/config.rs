//! Configuration options relevant only to the CLI, layered over the library's own [`Config`].

use std::path::PathBuf;

use prover::context::config::Config;

/// Options the CLI understands beyond what the library's [`Config`] already covers.
#[derive(Default)]
pub struct CliConfig {
    /// Where to write the rendered trace. `None` means stdout.
    pub output: Option<PathBuf>,
}

pub enum ConfigError {
    NonSpecific(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonSpecific(s) => write!(f, "{s}"),
        }
    }
}

/// The outcome of parsing `std::env::args()`: a [`Config`] for the library, CLI-only options,
/// and the path to the input clause-set file.
pub struct Parsed {
    pub config: Config,
    pub cli_options: CliConfig,
    pub input: PathBuf,
}
