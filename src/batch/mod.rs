
use anyhow::{Context, Result};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::parser::parse_str;
use crate::render::AddressRecord;

/// Settings shared by every line of a batch
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Attach the normalized source (`src`) to each record
    pub verbose: bool,
}

/// Summary of a finished batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchReport {
    /// Input lines processed (one record each)
    pub lines: usize,
    /// Records that carry a house number
    pub with_number: usize,
    /// Wall time spent reading, parsing and writing
    pub elapsed: Duration,
}

impl BatchReport {
    /// Records without a house number
    pub fn without_number(&self) -> usize {
        self.lines - self.with_number
    }
}

/// Parse every line of `reader`, writing one JSON record per line to `writer`
///
/// Records keep input order. Blank lines still produce a (blank) record so
/// output line N always belongs to input line N.
pub fn process_lines<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    options: BatchOptions,
) -> Result<BatchReport> {
    let start = Instant::now();
    let mut lines = 0;
    let mut with_number = 0;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read input line {}", line_no))?;

        let address = parse_str(&line);
        if address.has_number() {
            with_number += 1;
        }

        serde_json::to_writer(&mut writer, &AddressRecord::new(&address, options.verbose))
            .with_context(|| format!("Failed to write record for line {}", line_no))?;
        writeln!(writer).with_context(|| format!("Failed to write record for line {}", line_no))?;

        lines += 1;
    }

    writer.flush().context("Failed to flush output")?;

    let report = BatchReport {
        lines,
        with_number,
        elapsed: start.elapsed(),
    };
    debug!("batch finished: {:?}", report);
    Ok(report)
}

/// Parse a text file line by line into a JSON-lines file
pub fn process_file(input: &Path, output: &Path, options: BatchOptions) -> Result<BatchReport> {
    let reader = File::open(input)
        .map(BufReader::new)
        .with_context(|| format!("Failed to open input file: {}", input.display()))?;
    let writer = File::create(output)
        .map(BufWriter::new)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;

    process_lines(reader, writer, options)
        .with_context(|| format!("Failed to process {}", input.display()))
}

/// Output path used when none is given: `data.csv` -> `data.jsonl`
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("jsonl")
}
