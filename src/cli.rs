use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use crate::digit_spec::{DEFAULT_DIGITS, DigitSpec, DigitSpecError};
use crate::precision::{DEFAULT_MARGIN_DIGITS, MAX_MARGIN_DIGITS, MIN_MARGIN_DIGITS};

/// Flags that consume the following argument as their value
const VALUE_FLAGS: &[&str] = &[
    "-c",
    "--calculate",
    "-d",
    "--digits",
    "--margin",
    "-o",
    "--output",
];

/// Flags that stand alone
const SWITCHES: &[&str] = &["--json", "-v", "--verbose", "-h", "--help", "-V", "--version"];

/// Compute digits of pi with the Chudnovsky series
#[derive(Parser, Debug)]
#[command(name = "chudnovsky", version, args_override_self = true)]
pub struct Cli {
    /// Digit specification: 12345, 1K, 10M, 2G, 1e6 (default 100000)
    #[arg(value_name = "DIGITS")]
    pub positional: Vec<String>,

    /// Digit specification, takes precedence over the positional form
    #[arg(
        short = 'c',
        long = "calculate",
        visible_alias = "digits",
        visible_short_alias = 'd',
        value_name = "SPEC",
        allow_hyphen_values = true
    )]
    pub calculate: Option<String>,

    /// Extra decimal digits carried through sqrt(10005)
    #[arg(
        long,
        value_name = "DIGITS",
        default_value_t = DEFAULT_MARGIN_DIGITS,
        value_parser = clap::value_parser!(u64).range(MIN_MARGIN_DIGITS..=MAX_MARGIN_DIGITS)
    )]
    pub margin: u64,

    /// Write the digits to a file instead of stdout
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print a JSON report instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The digit specification that was given, if any
    pub fn digit_spec(&self) -> Option<&str> {
        self.calculate
            .as_deref()
            .or_else(|| self.positional.first().map(String::as_str))
    }

    /// Requested digit count, falling back to `DEFAULT_DIGITS`
    pub fn digits(&self) -> Result<u64, DigitSpecError> {
        match self.digit_spec() {
            Some(spec) => DigitSpec::parse(spec),
            None => Ok(DEFAULT_DIGITS),
        }
    }
}

/// Drop flags the command does not know so they are ignored instead of
/// rejected. The first element is the program name and is always kept.
pub fn retain_known_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut kept: Vec<String> = args.next().into_iter().collect();

    while let Some(arg) = args.next() {
        if arg == "--" {
            kept.push(arg);
            kept.extend(args.by_ref());
            break;
        }

        if !arg.starts_with('-') || arg == "-" {
            kept.push(arg);
            continue;
        }

        let (name, inline_value) = match arg.split_once('=') {
            Some((name, _)) => (name, true),
            None => (arg.as_str(), false),
        };

        if VALUE_FLAGS.contains(&name) {
            kept.push(arg);
            if !inline_value {
                kept.extend(args.next());
            }
        } else if SWITCHES.contains(&name) {
            kept.push(arg);
        } else {
            debug!(flag = %arg, "ignoring unknown flag");
        }
    }

    kept
}

/// Usage lines printed after a bad digit specification
pub fn usage_examples(program: &str) -> Vec<String> {
    ["", " 12345", " --calculate 1K", " --digits 10M", " 1e6"]
        .iter()
        .map(|args| format!("  {}{}", program, args))
        .collect()
}
