use arremate_core::parsing::fields::ParsedLot;
use arremate_core::{BatchOutcome, DocumentOutcome};

pub fn print(outcome: &BatchOutcome) {
    for report in &outcome.documents {
        let status = match &report.outcome {
            DocumentOutcome::Contributed { records } => {
                format!("contributed {} record(s)", records)
            }
            DocumentOutcome::NoContribution => "no accepted lots".to_string(),
            DocumentOutcome::AnchorMissing => "itemized section not found".to_string(),
            DocumentOutcome::ExtractionFailed { reason } => {
                format!("extraction failed: {}", reason)
            }
            DocumentOutcome::AlreadyProcessed => "already processed (skipped)".to_string(),
        };
        println!("  {} -> {}", report.name, status);
    }
    println!();

    if outcome.records.is_empty() {
        println!("No lots met the provision threshold.");
        return;
    }

    println!(
        "{:>4}  {:<2}  {:<20}  {:>14}  {:>14}  {:>12}  {}",
        "lot", "uf", "city", "1st auction", "2nd auction", "provision", "source"
    );
    for record in &outcome.records {
        println!(
            "{:>4}  {:<2}  {:<20}  {:>14}  {:>14}  {:>12}  {}",
            record.lot_id,
            record.state,
            truncate(&record.city, 20),
            record.auction_value_1,
            record.auction_value_2,
            record.provision,
            record.source_document
        );
    }
}

pub fn print_lots(lots: &[ParsedLot]) {
    if lots.is_empty() {
        println!("No lots found in the itemized section.");
        return;
    }

    println!(
        "{:>4}  {:<2}  {:<20}  {:>14}  {:>14}  {}",
        "lot", "uf", "city", "1st auction", "2nd auction", "address"
    );
    for lot in lots {
        println!(
            "{:>4}  {:<2}  {:<20}  {:>14}  {:>14}  {}",
            lot.lot_id,
            lot.state,
            truncate(&lot.city, 20),
            lot.auction_value_1,
            lot.auction_value_2,
            truncate(&lot.address_description, 60)
        );
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let cut: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{cut}…")
}
