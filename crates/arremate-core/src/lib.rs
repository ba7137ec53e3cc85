pub mod error;
pub mod extraction;
pub mod filter;
pub mod ledger;
pub mod model;
pub mod parsing;

use extraction::NoticeDocument;
use filter::FilterPolicy;
use ledger::Ledger;
use model::{PropertyRecord, RecordStatus};
use parsing::segment::{NumberedLineSegmenter, Segmenter};
use serde::{Deserialize, Serialize};

/// Tuning knobs for a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Front-matter pages skipped before text concatenation.
    pub skip_pages: usize,
    pub filter: FilterPolicy,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        PipelineOptions {
            skip_pages: extraction::DEFAULT_SKIP_PAGES,
            filter: FilterPolicy::default(),
        }
    }
}

/// Where a document's processing ended up.
///
/// `AnchorMissing` is a successful empty outcome, reported separately from
/// `ExtractionFailed` so telemetry can tell "no itemized section" apart
/// from "could not read the document".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentOutcome {
    Contributed { records: usize },
    NoContribution,
    AnchorMissing,
    ExtractionFailed { reason: String },
    AlreadyProcessed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentReport {
    pub name: String,
    pub outcome: DocumentOutcome,
}

/// Aggregated result of one batch run: accepted records in discovery order
/// (document order × block order) plus one report per input document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub records: Vec<PropertyRecord>,
    pub documents: Vec<DocumentReport>,
}

impl BatchOutcome {
    /// Names of documents that contributed at least one accepted record in
    /// this run. The caller appends these to the ledger once, after the
    /// whole run completes — a crash mid-run therefore never leaves a
    /// document falsely marked as processed.
    pub fn contributing_documents(&self) -> Vec<String> {
        self.documents
            .iter()
            .filter(|d| matches!(d.outcome, DocumentOutcome::Contributed { .. }))
            .map(|d| d.name.clone())
            .collect()
    }
}

/// Run the full pipeline over a batch of already-fetched documents.
///
/// Documents already in the ledger are skipped without extraction. All
/// document-scoped failures are isolated: they show up as
/// `ExtractionFailed` reports and never abort the batch. The ledger itself
/// is not mutated here; feed `contributing_documents()` to
/// `Ledger::record_contributions` after the run.
pub fn process_documents(
    documents: &[NoticeDocument],
    ledger: &Ledger,
    options: &PipelineOptions,
) -> BatchOutcome {
    let segmenter = NumberedLineSegmenter;
    let mut records = Vec::new();
    let mut reports = Vec::new();

    for doc in documents {
        if ledger.contains(&doc.name) {
            reports.push(DocumentReport {
                name: doc.name.clone(),
                outcome: DocumentOutcome::AlreadyProcessed,
            });
            continue;
        }

        let (doc_records, outcome) = process_document(doc, &segmenter, options);
        records.extend(doc_records);
        reports.push(DocumentReport {
            name: doc.name.clone(),
            outcome,
        });
    }

    BatchOutcome {
        records,
        documents: reports,
    }
}

/// Process a single document: text -> anchor -> segment -> parse -> filter.
fn process_document(
    doc: &NoticeDocument,
    segmenter: &dyn Segmenter,
    options: &PipelineOptions,
) -> (Vec<PropertyRecord>, DocumentOutcome) {
    let text = match doc.concatenated_text(options.skip_pages) {
        Some(text) => text,
        None => {
            return (
                Vec::new(),
                DocumentOutcome::ExtractionFailed {
                    reason: "document yielded no pages".into(),
                },
            )
        }
    };

    let lots = match parsing::parse_listing(&text, segmenter) {
        Some(lots) => lots,
        None => return (Vec::new(), DocumentOutcome::AnchorMissing),
    };

    let records: Vec<PropertyRecord> = lots
        .into_iter()
        .filter(|lot| options.filter.accepts(lot.auction_value_1, lot.auction_value_2))
        .map(|lot| PropertyRecord {
            lot_id: lot.lot_id,
            state: lot.state,
            city: lot.city,
            address_description: lot.address_description,
            registry_id: lot.registry_id,
            auction_value_1: lot.auction_value_1,
            auction_value_2: lot.auction_value_2,
            provision: FilterPolicy::provision(lot.auction_value_1, lot.auction_value_2),
            source_document: doc.name.clone(),
            status: RecordStatus::New,
        })
        .collect();

    let outcome = if records.is_empty() {
        DocumentOutcome::NoContribution
    } else {
        DocumentOutcome::Contributed {
            records: records.len(),
        }
    };
    (records, outcome)
}
