use serde::Serialize;
use std::fmt;

/// A street name separated from its house number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    /// Street text with the number region removed
    pub(crate) street: String,
    /// House number, including any letter suffix or `/sub-number`
    pub(crate) number: String,
    /// Normalized string the parser scanned
    pub(crate) source: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            number: number.into(),
            source: source.into(),
        }
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether a house number was found
    pub fn has_number(&self) -> bool {
        !self.number.is_empty()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "street:{};number:{}", self.street, self.number)
    }
}
