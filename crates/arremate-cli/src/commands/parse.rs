use arremate_core::error::ArremateError;
use arremate_core::extraction::pdftotext::PdftotextExtractor;
use arremate_core::extraction::{NoticeDocument, TextExtractor};
use arremate_core::parsing::parse_listing;
use arremate_core::parsing::segment::NumberedLineSegmenter;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    skip_pages: usize,
    output_file: Option<PathBuf>,
) -> Result<(), ArremateError> {
    let bytes = std::fs::read(&input_file)?;
    let extractor = PdftotextExtractor::new();
    let pages = extractor.extract_pages(&bytes)?;

    let name = input_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input_file.display().to_string());
    let doc = NoticeDocument::new(name, pages);

    let text = doc
        .concatenated_text(skip_pages)
        .ok_or_else(|| ArremateError::EmptyDocument {
            name: doc.name.clone(),
        })?;

    let Some(lots) = parse_listing(&text, &NumberedLineSegmenter) else {
        eprintln!("no itemized section found in {}", doc.name);
        return Ok(());
    };

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&lots)?;
            std::fs::write(&path, json)?;
            eprintln!("Parsed {} lot(s), written to {}", lots.len(), path.display());
        }
        None => match output_format {
            "json" => println!("{}", serde_json::to_string_pretty(&lots)?),
            _ => output::table::print_lots(&lots),
        },
    }

    Ok(())
}
