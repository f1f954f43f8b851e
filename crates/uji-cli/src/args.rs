use clap::{Parser, Subcommand, ValueEnum};
use uji_engine::{Field, NumeralBase};

/// Arguments for the uji CLI
#[derive(Parser, Debug)]
#[command(version, about = "Encoder, base converter, hasher and random string generator")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[clap(
        short = 'o',
        long,
        value_enum,
        value_name = "FORMAT",
        env = "UJI_OUTPUT",
        global = true,
        default_value_t = OutputFormat::Text,
        help = "How to print results"
    )]
    pub output: OutputFormat,

    #[clap(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Don't print any messages except for errors",
        default_value_t = false
    )]
    pub quiet: bool,

    #[clap(
        short = 'v',
        long,
        global = true,
        conflicts_with = "quiet",
        action = clap::ArgAction::Count,
        help = "Output details about each conversion; specify multiple times for more detail"
    )]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a value in every encoding, starting from the given field
    Encode {
        #[clap(
            short,
            long,
            value_name = "FIELD",
            default_value = "plain",
            help = "Field the value is written in, e.g. plain, hex, base64, base64url, \
                    percent_encoded, unicode_escaped, binary, decimal"
        )]
        field: Field,

        #[clap(help = "Value to convert")]
        value: String,
    },

    /// Write one integer in bases 2, 4, 8, 10 and 16
    Numeral {
        #[clap(
            short,
            long,
            value_name = "BASE",
            default_value = "10",
            value_parser = parse_base,
            help = "Base the value is written in: 2, 4, 8, 10 or 16"
        )]
        base: NumeralBase,

        #[clap(help = "Digits of the integer")]
        value: String,
    },

    /// MD5, SHA-1, SHA-256 and SHA-512 digests
    Hash {
        #[clap(long, help = "Treat the value as hex-encoded bytes")]
        hex: bool,

        #[clap(help = "Text (or hex with --hex) to hash")]
        value: String,
    },

    /// Generate random strings
    Random {
        #[clap(
            short = 'l',
            long,
            value_name = "N",
            env = "UJI_LENGTH",
            default_value_t = 16,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Length of each string"
        )]
        length: u32,

        #[clap(
            short = 'a',
            long,
            value_name = "CHARS",
            env = "UJI_ALPHABET",
            default_value = "",
            hide_default_value = true,
            help = "Characters to draw from [default: A-Z a-z 0-9]"
        )]
        alphabet: String,

        #[clap(
            short = 'n',
            long,
            value_name = "N",
            default_value_t = 1,
            help = "Number of strings to generate"
        )]
        count: usize,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

fn parse_base(s: &str) -> Result<NumeralBase, String> {
    let radix: u32 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;

    NumeralBase::try_from(radix).map_err(|e| e.to_string())
}
