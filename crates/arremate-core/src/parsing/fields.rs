use crate::parsing::money::parse_currency;
use crate::parsing::segment::Block;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static STATE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ESTADO: (\w{2})").expect("state pattern is valid"));

static CITY_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"CIDADE: ([^\n]+)").expect("city pattern is valid"));

static REGISTRY_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)matr[íi]cula[^0-9\n]{0,15}(\d[\d./-]*)").expect("registry pattern is valid")
});

/// Numeric-looking token: digits possibly interleaved with dots and commas.
static NUMERIC_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d.,]*").expect("numeric-token pattern is valid"));

/// Sticky header values carried forward across blocks within one document.
///
/// Threaded explicitly through the per-block parse calls so concurrent
/// processing of different documents can never share it. Blocks seen before
/// any header keep empty state/city — a known limitation of the source
/// layout, not an error.
#[derive(Debug, Clone, Default)]
pub struct HeaderState {
    pub state: String,
    pub city: String,
}

/// Field-level result for one block, before the business filter runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedLot {
    pub lot_id: u32,
    pub state: String,
    pub city: String,
    pub address_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_id: Option<String>,
    pub auction_value_1: Decimal,
    pub auction_value_2: Decimal,
}

/// Parse one block into a `ParsedLot`, updating the sticky header state.
///
/// Returns `None` when the block cannot yield a record: a lot number that
/// is not a positive integer, or fewer than three numeric tokens (no
/// monetary tail to read the auction values from). Discarding is the only
/// failure mode here; nothing propagates.
pub fn parse_block(block: &Block, headers: &mut HeaderState) -> Option<ParsedLot> {
    update_headers(&block.body, headers);

    let lot_id: u32 = block.lot_number.parse().ok()?;

    let tokens: Vec<&str> = NUMERIC_TOKEN
        .find_iter(&block.body)
        .map(|m| m.as_str())
        .collect();
    if tokens.len() < 3 {
        return None;
    }
    let (auction_value_1, auction_value_2) = pick_auction_values(&tokens);

    Some(ParsedLot {
        lot_id,
        state: headers.state.clone(),
        city: headers.city.clone(),
        address_description: collapse_address(&block.body),
        registry_id: extract_registry_id(&block.body),
        auction_value_1,
        auction_value_2,
    })
}

fn update_headers(body: &str, headers: &mut HeaderState) {
    if let Some(caps) = STATE_HEADER.captures(body) {
        headers.state = caps[1].trim().to_string();
    }
    if let Some(caps) = CITY_HEADER.captures(body) {
        headers.city = caps[1].trim().to_string();
    }
}

/// Positional column heuristic for the monetary tail of a lot row:
/// `[..., value_1, value_2, appraisal]`, with the appraisal (last token)
/// discarded. This is tied to the known column layout of the source tables
/// and is the single place to swap in a column-aware strategy.
fn pick_auction_values(tokens: &[&str]) -> (Decimal, Decimal) {
    let value_1 = parse_currency(tokens[tokens.len() - 3]);
    let value_2 = parse_currency(tokens[tokens.len() - 2]);
    (value_1, value_2)
}

fn extract_registry_id(body: &str) -> Option<String> {
    REGISTRY_ID
        .captures(body)
        .map(|caps| {
            caps[1]
                .trim_end_matches(|c: char| matches!(c, '.' | '-' | '/'))
                .to_string()
        })
}

/// Non-header lines of the block, whitespace-collapsed into one line.
fn collapse_address(body: &str) -> String {
    body.lines()
        .map(str::trim)
        .filter(|line| {
            !line.is_empty() && !line.starts_with("ESTADO:") && !line.starts_with("CIDADE:")
        })
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
