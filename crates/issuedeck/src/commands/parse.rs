use std::path::Path;

use libissuedeck_core::DeckError;
use crate::commands::load_attributes;
use crate::output::OutputMode;

pub fn run(out: OutputMode, file: Option<&Path>) -> Result<(), DeckError> {
    let attributes = load_attributes(file)?;
    out.success(&attributes);
    Ok(())
}
