pub mod anchor;
pub mod fields;
pub mod money;
pub mod segment;

use fields::{HeaderState, ParsedLot};
use segment::Segmenter;

/// Scan one document's extracted text for the itemized lot section and
/// parse every block in it.
///
/// Returns `None` when the anchor phrase is absent (the document has no
/// itemized section — zero records, not an error). Blocks that fail field
/// parsing are discarded silently; the survivors come back in document
/// order, still unfiltered. The sticky state/city accumulator lives for
/// exactly one call, so per-document scans never leak headers into each
/// other.
pub fn parse_listing(text: &str, segmenter: &dyn Segmenter) -> Option<Vec<ParsedLot>> {
    let start = anchor::find_listing_start(text)?;

    let mut headers = HeaderState::default();
    let lots = segmenter
        .segment(&text[start..])
        .iter()
        .filter_map(|block| fields::parse_block(block, &mut headers))
        .collect();
    Some(lots)
}
