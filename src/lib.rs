// Public API exports
pub mod batch;
pub mod parser;
pub mod render;

// Re-export main types for convenience
pub use parser::{
    Address, NumberMatch, ParseError, Rule, Span, clean, locate, locate_leading, locate_trailing,
    normalize, parse, parse_str,
};

pub use render::{AddressRecord, OutputFormat, render};

pub use batch::{BatchOptions, BatchReport, default_output_path, process_file, process_lines};
