use crate::error::Result;
use crate::output::ConvertReport;
use crate::rename::{apply, plan};
use crate::snapshot::snapshot;
use crate::suffix::Conversion;
use std::path::Path;
use tracing::debug;

/// Rename every entry of `dir` that ends in the conversion's source suffix.
///
/// The directory is listed once up front and the renames then run over that
/// snapshot in name order. The first failing rename aborts the run and is
/// returned; entries renamed before it keep their new names.
pub fn convert(dir: &Path, conversion: &Conversion) -> Result<ConvertReport> {
    debug!("Converting {} in {}", conversion, dir.display());

    let snap = snapshot(dir)?;
    let renames = plan(&snap, conversion);
    apply(dir, &renames)?;

    Ok(ConvertReport {
        directory: dir.to_path_buf(),
        conversion: conversion.clone(),
        entries_scanned: snap.len(),
        renames,
    })
}

/// `.gs` -> `.js`
pub fn gs_to_js(dir: &Path) -> Result<ConvertReport> {
    convert(dir, &Conversion::gs_to_js())
}

/// `.js` -> `.gs`
pub fn js_to_gs(dir: &Path) -> Result<ConvertReport> {
    convert(dir, &Conversion::js_to_gs())
}
