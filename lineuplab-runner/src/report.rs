//! Report persistence — one JSON file per finished search.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::search::SearchReport;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize search report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write report to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write the report as pretty JSON under `output_dir`, creating the
/// directory if needed. Returns the path written.
///
/// Filename: `search_{policy}_{completed_at}.json`, timestamped to the
/// second so repeated runs do not clobber each other.
pub fn save_report(report: &SearchReport, output_dir: &Path) -> Result<PathBuf, ReportError> {
    std::fs::create_dir_all(output_dir).map_err(|source| ReportError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let stamp = report.completed_at.format("%Y%m%d_%H%M%S");
    let path = output_dir.join(format!("search_{}_{stamp}.json", report.policy.name()));

    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(&path, json).map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
