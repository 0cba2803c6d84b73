//! Hookline CLI - runs one record through the engine with catalog plugins.

use std::{io::Read, path::PathBuf, process::ExitCode};

use clap::Parser;
use hookline::{HostBuilder, Identity, Processor, Record, catalog};
use miette::{IntoDiagnostic, Result, WrapErr, miette};
use tracing::Level;

#[derive(Parser)]
#[command(name = "hookline")]
#[command(author, version, about = "Run a record through the processor and its plugins")]
struct Cli {
    /// Host configuration file (JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Catalog plugin to load, after those listed in the config (repeatable)
    #[arg(short, long = "plugin", value_name = "NAME")]
    plugins: Vec<String>,

    /// Input record as a JSON object (read from stdin if omitted)
    #[arg(short, long, value_name = "JSON")]
    input: Option<String>,

    /// List catalog plugins and exit
    #[arg(long)]
    list_plugins: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Loaded when neither the config nor the command line names a plugin.
const DEFAULT_PLUGIN: &str = "logger";

fn run(cli: Cli) -> Result<()> {
    if cli.list_plugins {
        for name in catalog::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let builder = match &cli.config {
        Some(path) => HostBuilder::from_config_path(Identity, path).into_diagnostic()?,
        None => HostBuilder::new(Identity),
    };
    let builder = select_plugins(builder, cli.plugins);

    let input = read_input(cli.input, std::io::stdin())?;

    let host = builder.configured_plugins().into_diagnostic()?.build();

    let output = host
        .run(input)
        .into_diagnostic()
        .wrap_err("run failed")?;

    let json = serde_json::to_string_pretty(&output).into_diagnostic()?;
    println!("{json}");
    Ok(())
}

/// Config plugins first, then `--plugin` flags; the logger if both are empty.
fn select_plugins<P: Processor>(builder: HostBuilder<P>, flags: Vec<String>) -> HostBuilder<P> {
    let builder = builder.with_plugins(flags);
    if builder.config().plugins.is_empty() {
        builder.with_plugins([DEFAULT_PLUGIN])
    } else {
        builder
    }
}

/// Read the input record from `arg`, or from `stdin` when it is absent.
fn read_input(arg: Option<String>, mut stdin: impl Read) -> Result<Record> {
    let text = match arg {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .into_diagnostic()
                .wrap_err("failed to read input from stdin")?;
            buf
        }
    };

    parse_input(&text)
}

fn parse_input(text: &str) -> Result<Record> {
    let value: serde_json::Value = serde_json::from_str(text)
        .into_diagnostic()
        .wrap_err("input is not valid JSON")?;
    Record::try_from(value).map_err(|other| miette!("input must be a JSON object, got {other}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookline::{HostConfig, record};

    fn builder_with(plugins: &[&str]) -> HostBuilder<Identity> {
        let config = plugins
            .iter()
            .fold(HostConfig::default(), |config, name| config.with_plugin(*name));
        HostBuilder::new(Identity).with_config(config)
    }

    #[test]
    fn flags_load_after_config_plugins() {
        let builder = select_plugins(builder_with(&["logger"]), vec!["test-only".to_owned()]);
        assert_eq!(builder.config().plugins, ["logger", "test-only"]);
    }

    #[test]
    fn flags_alone_replace_the_fallback() {
        let builder = select_plugins(builder_with(&[]), vec!["audit".to_owned()]);
        assert_eq!(builder.config().plugins, ["audit"]);
    }

    #[test]
    fn logger_is_the_fallback() {
        let builder = select_plugins(builder_with(&[]), Vec::new());
        assert_eq!(builder.config().plugins, ["logger"]);

        let host = builder.configured_plugins().unwrap().build();
        assert_eq!(host.plugins(), ["logger"]);
    }

    #[test]
    fn input_argument_wins_over_stdin() {
        let record = read_input(Some(r#"{"foo":"bar"}"#.to_owned()), &b"{}"[..]).unwrap();
        assert_eq!(record, record! { "foo": "bar" });
    }

    #[test]
    fn stdin_is_read_without_input_argument() {
        let record = read_input(None, &br#"{"from":"stdin"}"#[..]).unwrap();
        assert_eq!(record, record! { "from": "stdin" });
    }

    #[test]
    fn non_object_input_is_rejected() {
        let err = parse_input("[1,2]").unwrap_err();
        assert!(err.to_string().contains("input must be a JSON object"));
    }

    #[test]
    fn invalid_json_is_rejected() {
        let err = parse_input("{not json").unwrap_err();
        assert_eq!(err.to_string(), "input is not valid JSON");
    }
}
