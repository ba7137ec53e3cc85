use arremate_core::error::ArremateError;
use arremate_core::extraction::pdftotext::PdftotextExtractor;
use arremate_core::extraction::{NoticeDocument, TextExtractor};
use arremate_core::ledger::Ledger;
use arremate_core::{process_documents, PipelineOptions};
use std::path::{Path, PathBuf};

use crate::output;

pub fn run(
    notices_dir: PathBuf,
    ledger_path: PathBuf,
    output_format: &str,
    skip_pages: usize,
    dry_run: bool,
) -> Result<(), ArremateError> {
    if !notices_dir.is_dir() {
        return Err(ArremateError::NoticesDirMissing(notices_dir));
    }

    let ledger = Ledger::load(&ledger_path)?;
    let extractor = PdftotextExtractor::new();
    let documents = load_documents(&notices_dir, &extractor)?;

    let options = PipelineOptions {
        skip_pages,
        ..PipelineOptions::default()
    };
    let outcome = process_documents(&documents, &ledger, &options);

    match output_format {
        "json" => output::json::print(&outcome)?,
        _ => output::table::print(&outcome),
    }

    if !dry_run {
        let contributing = outcome.contributing_documents();
        if !contributing.is_empty() {
            let mut ledger = ledger;
            ledger.record_contributions(contributing);
            ledger.save(&ledger_path)?;
        }
    }

    Ok(())
}

/// Read every PDF in the directory into a NoticeDocument, in name order so
/// batch output is stable. A file that fails extraction is reported and
/// skipped; it does not abort the run.
fn load_documents(
    dir: &Path,
    extractor: &dyn TextExtractor,
) -> Result<Vec<NoticeDocument>, ArremateError> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false)
        })
        .collect();
    paths.sort();

    let mut documents = Vec::new();
    for path in paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let pages = std::fs::read(&path)
            .map_err(ArremateError::Io)
            .and_then(|bytes| extractor.extract_pages(&bytes));
        match pages {
            Ok(pages) => documents.push(NoticeDocument::new(name, pages)),
            Err(e) => eprintln!("  warning: skipping {name}: {e}"),
        }
    }

    Ok(documents)
}
