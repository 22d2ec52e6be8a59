use addresser::{
    BatchOptions, BatchReport, OutputFormat, default_output_path, parse, process_file,
    process_lines, render,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse an input string into a structured address
    Parse {
        /// The address string to parse
        data: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
        /// Include the normalized source string
        #[arg(short, long)]
        verbose: bool,
    },
    /// Parse a text file line by line into a JSON-lines file
    ParseFile {
        /// The input file, one address per line
        #[arg(short, long, default_value = "data.csv")]
        input: PathBuf,
        /// The output file (default: input with a .jsonl extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Include the normalized source string in each record
        #[arg(short, long)]
        verbose: bool,
    },
    /// Read from the standard input and write the result on the standard output
    ParseStdin {
        /// Include the normalized source string in each record
        #[arg(short, long)]
        verbose: bool,
    },
    /// Print the version and exit
    Version,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error massaging data: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Parse {
            data,
            format,
            verbose,
        } => {
            let address = parse(data.as_deref())?;
            println!("{}", render(&address, format, verbose)?);
        }
        Command::ParseFile {
            input,
            output,
            verbose,
        } => {
            let output = output.unwrap_or_else(|| default_output_path(&input));
            println!("Parsing {} -> {}", input.display(), output.display());
            let report = process_file(&input, &output, BatchOptions { verbose })?;
            println!("{}", summary(&report));
        }
        Command::ParseStdin { verbose } => {
            let options = BatchOptions { verbose };
            let report = process_lines(io::stdin().lock(), io::stdout().lock(), options)
                .context("Failed to process standard input")?;
            // stdout carries the records
            eprintln!("{}", summary(&report));
        }
        Command::Version => {
            println!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
    }
    Ok(())
}

fn summary(report: &BatchReport) -> String {
    format!(
        "✓ Parsed {} lines ({} with a house number, {} without) [{:.2}s]",
        report.lines,
        report.with_number,
        report.without_number(),
        report.elapsed.as_secs_f64()
    )
}
