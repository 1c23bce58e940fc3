//! Command-line score input

use pathways_common::{Error, Result, RiasecCode, RiasecScore};
use std::io::Read;
use std::path::Path;

/// Parse a `--score` argument of the form `CODE=VALUE`, e.g. `R=80`
///
/// Used as a clap value parser, so errors surface as usage errors.
pub fn parse_score_arg(arg: &str) -> Result<RiasecScore> {
    let (code, value) = arg
        .split_once('=')
        .ok_or_else(|| Error::InvalidInput(format!("expected CODE=VALUE, got '{}'", arg)))?;

    let code = RiasecCode::from_str(code)
        .ok_or_else(|| Error::InvalidInput(format!("unknown RIASEC code '{}'", code.trim())))?;

    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidInput(format!("score for {} is not a number: '{}'", code, value.trim())))?;

    Ok(RiasecScore::new(code, value))
}

/// Read JSON input text from a file, or from stdin when the path is `-`
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(std::fs::read_to_string(path)?)
}
