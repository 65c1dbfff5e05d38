use anyhow::{Context, Result};
use chudnovsky::{CalculatorBuilder, Cli, Report, retain_known_args, usage_examples};
use clap::Parser;
use clap::error::ErrorKind;
use std::fmt::Display;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "chudnovsky".to_string());

    let cli = match Cli::try_parse_from(retain_known_args(args)) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprint!("{}", e);
            print_usage(&program);
            std::process::exit(1);
        }
    };

    init_logging(cli.verbose);

    let digits = match cli.digits() {
        Ok(digits) => digits,
        Err(e) => usage_error(&program, e),
    };

    if let Err(e) = run(&cli, digits) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, digits: u64) -> Result<()> {
    let calculator = CalculatorBuilder::new().margin_digits(cli.margin).build();

    if !cli.json {
        println!("Calculating π to {} digits (Rust + num-bigint, Chudnovsky)...", digits);
    }

    let start = Instant::now();
    let count = i64::try_from(digits).context("Digit count out of range")?;
    let pi = calculator.compute(count)?;
    let elapsed = start.elapsed();

    if let Some(path) = &cli.output {
        std::fs::write(path, &pi.text)
            .with_context(|| format!("Failed to write digits to {}", path.display()))?;
    }

    if cli.json {
        let report = Report::new(&pi, elapsed, cli.output.is_none());
        println!("{}", report.to_json().context("Failed to serialize report")?);
        return Ok(());
    }

    println!("Time: {:.4}s", elapsed.as_secs_f64());
    match &cli.output {
        Some(path) => println!("Wrote {} digits to {}", digits, path.display()),
        None => println!("{}", pi.text),
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("chudnovsky=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chudnovsky=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn usage_error(program: &str, error: impl Display) -> ! {
    eprintln!("Error: {}", error);
    print_usage(program);
    std::process::exit(1);
}

fn print_usage(program: &str) {
    eprintln!("Usage examples:");
    for line in usage_examples(program) {
        eprintln!("{}", line);
    }
}
