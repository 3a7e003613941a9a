//! Menu candidates from a command's output stream.

use std::io::{Read, Write};

use termnorm_menu::{ExtractError, Extractor};

use crate::TerminalError;

/// Read all of `input`, then write one `label<TAB>value` line per candidate.
///
/// The filter and templates are checked before `input` is read. Returns the
/// number of candidates written.
pub fn run_menu<R: Read, W: Write>(
    mut input: R,
    out: &mut W,
    filter: &str,
    value_template: &str,
    label_template: &str,
) -> Result<usize, TerminalError> {
    let extractor = Extractor::new(filter, value_template, label_template)?;

    let mut text = String::new();
    input.read_to_string(&mut text)?;

    let candidates = extractor.extract(&text).map_err(ExtractError::from)?;
    for candidate in &candidates {
        writeln!(out, "{candidate}")?;
    }
    out.flush()?;
    Ok(candidates.len())
}
