#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # sigsplit
//!
//! Command line front end for the signature parser and the delimiter
//! splitter. Results are printed as JSON by default, or as tables with
//! `--output table` (or `SIGSPLIT_OUTPUT=table`).

use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use sigsplit::{
    DelimiterSplitter, SignatureParser,
    config::{Config, OutputFormat},
};
use tabled::{Table, Tabled};
use tracing::metadata::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Parse a method signature
    Signature(Option<OutputFormat>, String),
    /// Split a string on delimiter characters
    Split(Option<OutputFormat>, Vec<String>, String),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses an output format override
    fn o() -> impl Parser<Option<OutputFormat>> {
        short('o')
            .long("output")
            .help("Output format: json or table")
            .argument::<OutputFormat>("FORMAT")
            .optional()
    }

    /// parses a method signature
    fn s() -> impl Parser<String> {
        positional("SIGNATURE").help("Method signature, e.g. \"private void log(String value)\"")
    }

    /// parses the string to split
    fn src() -> impl Parser<String> {
        positional("SOURCE").help("String to split")
    }

    /// parses delimiters
    fn d() -> impl Parser<Vec<String>> {
        short('d')
            .long("delimiter")
            .help("Delimiter string; every character in it separates tokens")
            .argument::<String>("DELIM")
            .many()
    }

    let signature = construct!(Cmd::Signature(o(), s()))
        .to_options()
        .command("signature")
        .help("Parse a Java-like method signature");

    let split = construct!(Cmd::Split(o(), d(), src()))
        .to_options()
        .command("split")
        .help("Split a string on delimiter characters");

    let cmd = construct!([signature, split]);

    cmd.to_options()
        .descr("Method signature parser and delimiter splitter")
        .run()
}

/// Row shape for printing split tokens as a table.
#[derive(Tabled)]
struct TokenRow {
    /// position of the token
    #[tabled(rename = "#")]
    index: usize,
    /// the token text
    #[tabled(rename = "Token")]
    token: String,
}

fn main() -> Result<()> {
    dotenv().ok();
    let config = Config::from_env().context("Invalid sigsplit configuration")?;

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(config.log_level());
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let cmd = options();

    match cmd {
        Cmd::Signature(output, signature) => {
            let descriptor = SignatureParser::new()
                .parse(&signature)
                .context("Could not parse method signature")?;

            match output.unwrap_or(config.output()) {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&descriptor)?),
                OutputFormat::Table => {
                    println!("{descriptor}");
                    if !descriptor.arguments().is_empty() {
                        println!("{}", Table::new(descriptor.arguments()));
                    }
                }
            }
        }
        Cmd::Split(output, delimiters, source) => {
            let splitter = if delimiters.is_empty() {
                tracing::debug!("No delimiters given, using configured defaults");
                DelimiterSplitter::new(config.default_delimiters())
            } else {
                DelimiterSplitter::new(&delimiters)
            };
            let tokens = splitter.split(&source);

            match output.unwrap_or(config.output()) {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tokens)?),
                OutputFormat::Table => {
                    let rows = tokens
                        .into_iter()
                        .enumerate()
                        .map(|(index, token)| TokenRow { index, token });
                    println!("{}", Table::new(rows));
                }
            }
        }
    };

    Ok(())
}
