//! The uji command-line tool

mod args;

use clap::Parser;
use serde::Serialize;
use tracing::{debug, error};
use uji_engine::{
    ConversionEngine, Field, HashEngine, HashInput, NumeralBase, NumeralEngine, RandomGenerator,
};

use crate::args::{Args, Command, OutputFormat};

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Rejected(#[from] uji_engine::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let args = Args::parse();

    enable_logging(&args);
    debug!("command line: {:?}", args);

    if let Err(e) = run(&args) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    match &args.command {
        Command::Encode { field, value } => encode(args.output, *field, value),
        Command::Numeral { base, value } => numeral(args.output, *base, value),
        Command::Hash { hex, value } => hash(args.output, *hex, value),
        Command::Random {
            length,
            alphabet,
            count,
        } => random(args.output, *length as usize, alphabet, *count),
    }
}

fn encode(output: OutputFormat, field: Field, value: &str) -> Result<(), CliError> {
    let update = ConversionEngine::new().update_from_field(field, value);

    match output {
        OutputFormat::Json => print_json(&update)?,
        OutputFormat::Text => {
            for (field, value) in update.fields.iter() {
                println!("{:<16} {value}", field.name());
            }
        }
    }

    update.error.map_or(Ok(()), |e| Err(e.into()))
}

fn numeral(output: OutputFormat, base: NumeralBase, value: &str) -> Result<(), CliError> {
    let update = NumeralEngine::new().update_from_base(base, value);

    match output {
        OutputFormat::Json => print_json(&update)?,
        OutputFormat::Text => {
            for (base, value) in update.numbers.iter() {
                println!("{:<12} {value}", base.name());
            }
        }
    }

    update.error.map_or(Ok(()), |e| Err(e.into()))
}

fn hash(output: OutputFormat, hex: bool, value: &str) -> Result<(), CliError> {
    let input = if hex {
        HashInput::Hex(value)
    } else {
        HashInput::Plain(value)
    };
    let update = HashEngine::new().update(input);

    match output {
        OutputFormat::Json => print_json(&update)?,
        OutputFormat::Text if update.error.is_none() => {
            println!("{:<16} {}", "plain", update.set.plain);
            println!("{:<16} {}", "hex", update.set.hex);
            for (alg, digest) in update.set.digests.iter() {
                println!("{:<16} {}", alg.name(), digest.hex);
                println!("{:<16} {}", format!("{alg}/base64"), digest.base64);
                println!("{:<16} {}", format!("{alg}/base64url"), digest.base64url);
            }
            if let Some(warning) = update.set.warning {
                eprintln!("warning: {warning}");
            }
        }
        OutputFormat::Text => {}
    }

    update.error.map_or(Ok(()), |e| Err(e.into()))
}

fn random(
    output: OutputFormat,
    length: usize,
    alphabet: &str,
    count: usize,
) -> Result<(), CliError> {
    let mut generator = RandomGenerator::new();
    let values = (0..count)
        .map(|_| generator.generate(length, alphabet))
        .collect::<Result<Vec<_>, _>>()?;

    match output {
        OutputFormat::Json => print_json(&values)?,
        OutputFormat::Text => values.iter().for_each(|v| println!("{v}")),
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn enable_logging(args: &Args) {
    let mut builder = tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr);

    if args.quiet {
        builder = builder.with_max_level(tracing::Level::ERROR);
    } else {
        match args.verbose {
            2.. => builder = builder.with_max_level(tracing::Level::TRACE),
            1 => builder = builder.with_max_level(tracing::Level::DEBUG),
            _ => builder = builder.with_max_level(tracing::Level::INFO),
        }
    }

    builder.init();
}
