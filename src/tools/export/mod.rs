pub mod types;
mod utils;

pub use types::*;
pub use utils::flatten_review;
use utils::*;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{Result, ScrapeError};
use crate::types::{HotelStatistics, ReviewRecord};

/// Output path per requested format, in request order.
///
/// A base path already ending in the format's extension is kept as is;
/// otherwise the extension is set (`out` -> `out.json`, `out.json` ->
/// `out.csv`). Repeated formats collapse to the first occurrence.
pub fn output_paths(base: &Path, formats: &[ExportFormat]) -> Vec<(ExportFormat, PathBuf)> {
    let current = base.extension().and_then(|ext| ext.to_str());

    let unique: Vec<ExportFormat> = crate::dedupe!(formats.iter().copied());
    unique
        .into_iter()
        .map(|format| {
            let path = match current {
                Some(ext) if format.accepts_extension(ext) => base.to_path_buf(),
                _ => base.with_extension(format.extension()),
            };
            (format, path)
        })
        .collect()
}

/// Write the dataset in every requested format and return the written paths.
///
/// Missing parent directories are created. An empty review list still yields
/// valid files (`[]`, or a header-only table).
pub fn export_dataset(
    stats: &HotelStatistics,
    reviews: &[ReviewRecord],
    base: &Path,
    formats: &[ExportFormat],
) -> Result<Vec<PathBuf>> {
    let paths = output_paths(base, formats);
    if paths.is_empty() {
        return Err(ScrapeError::config("no output formats requested"));
    }
    if reviews.is_empty() {
        warn!("no reviews to export, writing empty dataset");
    }

    let mut written = Vec::with_capacity(paths.len());
    for (format, path) in paths {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        info!(%format, path = %path.display(), reviews = reviews.len(), "writing output");
        match format {
            ExportFormat::Json => write_json(&path, stats, reviews)?,
            ExportFormat::Csv => write_csv(&path, stats, reviews)?,
            ExportFormat::Xlsx => write_xlsx(&path, stats, reviews)?,
        }
        written.push(path);
    }

    Ok(written)
}
