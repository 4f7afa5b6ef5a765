//! shellquote - Quote arguments for use in a Bourne shell.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shellquote::{generate_output_string, shellquote_bytes, Arg, Coercion, OutputFormat};
use std::ffi::OsString;
use std::io::{Read, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Quote arguments for use in a Bourne shell.
#[derive(Parser, Debug)]
#[command(name = "shellquote", version, about, disable_help_subcommand = true)]
struct Cli {
    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Quote each trailing argument as one word
    Quote {
        /// Words to quote
        #[arg(last = true)]
        words: Vec<OsString>,
    },

    /// Quote a nested JSON array of words
    Json {
        /// JSON array of words and nested arrays (read from stdin if omitted)
        #[arg(long)]
        input: Option<String>,

        /// Accept numbers and booleans by converting them to strings
        #[arg(long)]
        coerce: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();
}

#[cfg(unix)]
fn quote_os_words(words: &[OsString]) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    shellquote_bytes(words.iter().map(|w| w.as_bytes()))
}

#[cfg(not(unix))]
fn quote_os_words(words: &[OsString]) -> Vec<u8> {
    shellquote_bytes(words.iter().map(|w| w.to_string_lossy().into_owned()))
}

fn coercion_for(coerce: bool) -> Coercion {
    if coerce {
        Coercion::Stringify
    } else {
        Coercion::Strict
    }
}

fn write_line(bytes: &[u8]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(bytes)?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Quote { words } => {
            tracing::info!(words = words.len(), "quoting command-line words");
            let quoted = quote_os_words(&words);
            write_line(&quoted).context("failed to write output")?;
        }
        Commands::Json {
            input,
            coerce,
            format,
        } => {
            let json = match input {
                Some(json) => json,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("failed to read JSON arguments from stdin")?;
                    buf
                }
            };

            let coercion = coercion_for(coerce);
            tracing::info!(?coercion, ?format, "quoting JSON arguments");

            let args = Arg::from_json(&json, coercion).context("invalid arguments")?;
            let output =
                generate_output_string(&args, format).context("failed to render output")?;
            write_line(output.as_bytes()).context("failed to write output")?;
        }
    }

    Ok(())
}
