mod address;
mod cleaner;
mod error;
mod locator;
mod normalizer;


pub use address::Address;
pub use cleaner::clean;
pub use error::ParseError;
pub use locator::{NumberMatch, Rule, Span, locate, locate_leading, locate_trailing};
pub use normalizer::normalize;

use log::debug;

/// Parse an address string into street and house number
///
/// `None` stands for a missing input and is the only failure. Every string,
/// including the empty one, produces an `Address`.
pub fn parse(input: Option<&str>) -> Result<Address, ParseError> {
    let input =
        input.ok_or_else(|| ParseError::InvalidInput("None value not allowed".to_string()))?;
    Ok(parse_str(input))
}

/// Infallible form of [`parse`] for callers that already hold a string
pub fn parse_str(input: &str) -> Address {
    let source = normalize(input);

    let (street, number) = match locate(&source) {
        Some((Rule::Leading, found)) => {
            debug!("leading number {:?} in {:?}", found.token, source);
            (
                clean(&source[found.region.end..]),
                clean(found.token.slice(&source)),
            )
        }
        Some((Rule::Trailing, found)) => {
            debug!("trailing number {:?} in {:?}", found.token, source);
            (
                clean(&source[..found.region.start]),
                clean(found.token.slice(&source)),
            )
        }
        None => {
            debug!("no house number in {:?}", source);
            (clean(&source), "")
        }
    };

    Address::new(street, number, source.as_str())
}
