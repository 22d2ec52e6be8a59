use log::trace;
use regex::Regex;
use std::sync::LazyLock;

/// Apartment/unit references followed by their identifier: "Apt. 5", "suite 12", "к 3"
///
/// The token may follow a digit ("5к 3") but not a letter ("Маяк 12"). The
/// preceding character is captured as `pre` and written back.
static UNIT_REFERENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?P<pre>^|\P{L})(?:suite|apt\.?|appartamento|piso|к\.?)\s+\d+")
        .expect("valid unit reference regex")
});

/// Strip unit references and surrounding whitespace from a raw address
pub fn normalize(raw: &str) -> String {
    let stripped = UNIT_REFERENCE_REGEX.replace_all(raw, "${pre}");
    let normalized = stripped.trim();
    if normalized.len() != raw.len() {
        trace!("normalized {:?} -> {:?}", raw, normalized);
    }
    normalized.to_string()
}
