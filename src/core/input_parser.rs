//! Parses slider triples typed on the command line
//!
//! Accepted: "5,4,3", "5 4 3", "5/4/3" (any mix of separators)

use lazy_static::lazy_static;
use regex::Regex;
use crate::types::{check_sliders, AssessmentError, Axis};

lazy_static! {
    static ref RE_TRIPLE: Regex = Regex::new(
        r"^\s*(\d{1,3})\s*[,/ ]\s*(\d{1,3})\s*[,/ ]\s*(\d{1,3})\s*$"
    ).unwrap();
}

/// Parse and range-check three sliders for `axis`
pub fn parse_triple(axis: Axis, text: &str) -> Result<[u8; 3], AssessmentError> {
    let malformed = || AssessmentError::MalformedTriple(text.to_string());

    let caps = RE_TRIPLE.captures(text).ok_or_else(malformed)?;
    let mut sliders = [0u8; 3];
    for (slot, i) in sliders.iter_mut().zip(1usize..=3) {
        *slot = caps[i].parse().map_err(|_| malformed())?;
    }

    check_sliders(axis, sliders)?;
    Ok(sliders)
}
