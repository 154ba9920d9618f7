/*!
A simple CLI interface to the library.

# Use

```sh
prover_cli [--option(=value)]* file.json
```

## Options

No configuration option is required. Of note:

- `--step-budget=N` overrides the default 50-round step budget.
- `--standardize-apart` renames variables apart before each resolution attempt (see
  [`prover::context::config::Config::standardize_apart`]).
- `--output=path` writes the rendered trace to `path` instead of stdout.

For full documentation of the supported options, see the source of [parse_args::parse_args].
*/

use prover::builder;
use prover::context::Context;

mod config;
use config::ConfigError;

mod misc;
use misc::examine_parse_report;

mod parse_args;
use parse_args::parse_args;

/// Entrypoint to the CLI.
fn main() {
    let args: Vec<String> = std::env::args().collect();

    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(ConfigError::NonSpecific(message)) => {
            println!("c {message}");
            std::process::exit(1);
        }
    };

    let file = match std::fs::File::open(&parsed.input) {
        Ok(file) => file,
        Err(e) => {
            println!("c Failed to open {:?}: {e}", parsed.input);
            std::process::exit(1);
        }
    };

    let parse_report = builder::from_reader(file);
    examine_parse_report(&parse_report, &parsed.input);

    let clauses = match parse_report {
        Ok(clauses) => clauses,
        Err(_) => std::process::exit(1),
    };

    let context = Context::from_config(parsed.config);
    let result = context.prove(clauses);

    println!("c Outcome: {:?}", result.outcome);

    let rendered = result.trace.render(result.outcome);

    match parsed.cli_options.output {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, rendered) {
                println!("c Failed to write trace to {path:?}: {e}");
                std::process::exit(2);
            }
        }
        None => print!("{rendered}"),
    }
}
