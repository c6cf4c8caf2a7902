use crate::types::MonthlySummary;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pretty-printed JSON array, newline-terminated.
pub fn write_report<W: Write>(mut out: W, monthly_data: &[MonthlySummary]) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, monthly_data).context("serialize monthly report")?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

pub fn write_report_file(path: &Path, monthly_data: &[MonthlySummary]) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("create output dir {:?}", dir))?;
    }
    let file = File::create(path).with_context(|| format!("write {:?}", path))?;
    write_report(file, monthly_data)
}
