use anyhow::{Context, Result};
use extswap_core::{convert, Conversion, OutputFormatter};
use std::path::Path;

use crate::OutputFormat;

pub fn handle_convert(
    dir: &Path,
    conversion: &Conversion,
    output: Option<OutputFormat>,
) -> Result<()> {
    let report = convert(dir, conversion)
        .with_context(|| format!("Failed to convert {} in {}", conversion, dir.display()))?;

    // Silent unless a report was asked for
    if let Some(format) = output {
        println!("{}", report.format(format.into()));
    }
    Ok(())
}
