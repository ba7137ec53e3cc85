/// Marker phrase that opens the itemized "relation of properties" section
/// of an edital.
pub const LISTING_ANCHOR: &str = "Anexo II - RELAÇÃO DE IMÓVEIS";

/// Find the byte offset where the itemized lot section starts.
///
/// `None` means the notice carries no itemized section. That is an expected
/// outcome (the document contributes zero records), not a failure, and the
/// orchestrator reports it separately from extraction errors.
pub fn find_listing_start(text: &str) -> Option<usize> {
    text.find(LISTING_ANCHOR)
}
