use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use crate::parser::Address;

/// How a parsed address is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `street:<street>;number:<number>`
    #[default]
    Plain,
    /// `{"street": ..., "housenumber": ...}`
    Json,
}

/// JSON record written for each parsed address
#[derive(Debug, Serialize)]
pub struct AddressRecord<'a> {
    pub street: &'a str,
    pub housenumber: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<&'a str>,
}

impl<'a> AddressRecord<'a> {
    /// Build a record, attaching the normalized source when `verbose`
    pub fn new(address: &'a Address, verbose: bool) -> Self {
        Self {
            street: address.street(),
            housenumber: address.number(),
            src: verbose.then_some(address.source()),
        }
    }
}

/// Render an address in the requested format
pub fn render(address: &Address, format: OutputFormat, verbose: bool) -> Result<String> {
    match format {
        OutputFormat::Plain if verbose => Ok(format!("{};src:{}", address, address.source())),
        OutputFormat::Plain => Ok(address.to_string()),
        OutputFormat::Json => serde_json::to_string(&AddressRecord::new(address, verbose))
            .context("Failed to serialize address record"),
    }
}
