//! Hand-rolled parsing of `std::env::args()` into a [`Parsed`](crate::config::Parsed).

use std::path::PathBuf;

use prover::context::config::Config;

use crate::config::{CliConfig, ConfigError, Parsed};

/// Parses CLI arguments to a [`Parsed`] bundle.
///
/// If an unrecognised argument or invalid option is found a message is returned and the process
/// exits before any clause-set file is touched. The final positional argument is taken as the
/// path to the input file.
pub fn parse_args(args: &[String]) -> Result<Parsed, ConfigError> {
    let mut config = Config::default();
    let mut cli_options = CliConfig::default();
    let mut input = None;

    for arg in args.iter().skip(1) {
        let mut split = arg.split('=');
        match split.next() {
            Some("--standardize-apart") => {
                println!("c Variables will be standardized apart before each resolution attempt.");
                config.standardize_apart = true;
            }

            Some("--step-budget") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        println!("c step budget set to: {value}");
                        config.step_budget = value;
                        continue;
                    }
                }

                return Err(ConfigError::NonSpecific(
                    "--step-budget requires an unsigned integer value".to_string(),
                ));
            }

            Some("--output") => {
                if let Some(request) = split.next() {
                    cli_options.output = Some(PathBuf::from(request));
                    continue;
                }

                return Err(ConfigError::NonSpecific(
                    "--output requires a file path".to_string(),
                ));
            }

            Some(other) if other.starts_with("--") => {
                return Err(ConfigError::NonSpecific(format!("unrecognised option: {other}")));
            }

            Some(path) => {
                input = Some(PathBuf::from(path));
            }

            None => {}
        }
    }

    let input = input.ok_or_else(|| {
        ConfigError::NonSpecific("a path to a clause-set JSON file is required".to_string())
    })?;

    Ok(Parsed {
        config,
        cli_options,
        input,
    })
}
