use regex::Regex;
use std::sync::LazyLock;

/// A lot boundary candidate: a line that begins with one or more digits
/// followed by horizontal whitespace.
static LOT_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(\d+)[ \t]+").expect("lot-start pattern is valid")
});

/// Labels that can follow a line-leading number without the line being an
/// item row. Column-wrapped header rows in the source tables sometimes put
/// a number in front of the city label.
const NON_ITEM_KEYWORDS: &[&str] = &["CIDADE"];

/// One lot's slice of the itemized section: the declared sequence number
/// (still text at this stage) and everything up to the next boundary.
#[derive(Debug, Clone)]
pub struct Block {
    pub lot_number: String,
    pub body: String,
}

/// Boundary detection seam: splits post-anchor text into per-lot blocks.
///
/// Implementations are best-effort and order-preserving, and never fail on
/// malformed input. Blocks without a usable monetary tail are dropped by
/// the field parser, not here.
pub trait Segmenter {
    fn segment(&self, text: &str) -> Vec<Block>;
}

/// Default segmenter over the line-start numeric pattern.
///
/// A new lot starts at a line-leading number unless the text after the
/// number opens with a non-item keyword. Postal codes ("01234-567") never
/// match the boundary pattern because the digits run into a hyphen, not
/// whitespace.
pub struct NumberedLineSegmenter;

impl Segmenter for NumberedLineSegmenter {
    fn segment(&self, text: &str) -> Vec<Block> {
        // (match start, body start, lot number)
        let mut boundaries: Vec<(usize, usize, &str)> = Vec::new();
        for caps in LOT_START.captures_iter(text) {
            let (Some(whole), Some(number)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let after = &text[whole.end()..];
            if NON_ITEM_KEYWORDS.iter().any(|kw| after.starts_with(kw)) {
                continue;
            }
            boundaries.push((whole.start(), whole.end(), number.as_str()));
        }

        boundaries
            .iter()
            .enumerate()
            .map(|(i, &(_, body_start, lot_number))| {
                let body_end = boundaries
                    .get(i + 1)
                    .map(|next| next.0)
                    .unwrap_or(text.len());
                Block {
                    lot_number: lot_number.to_string(),
                    body: text[body_start..body_end].to_string(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str) -> Vec<Block> {
        NumberedLineSegmenter.segment(text)
    }

    #[test]
    fn test_two_lots_split_in_order() {
        let blocks = segment("header line\n1 Rua A, casa\nmore detail\n2 Rua B, apto\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].lot_number, "1");
        assert!(blocks[0].body.contains("Rua A"));
        assert!(blocks[0].body.contains("more detail"));
        assert_eq!(blocks[1].lot_number, "2");
        assert!(blocks[1].body.contains("Rua B"));
    }

    #[test]
    fn test_postal_code_line_is_not_a_boundary() {
        let blocks = segment("1 Rua A\nCEP\n01234-567\ndetail\n2 Rua B\n");
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].body.contains("01234-567"));
    }

    #[test]
    fn test_city_label_line_is_not_a_boundary() {
        let blocks = segment("1 Rua A\n99 CIDADE: GUARUJÁ\ndetail\n2 Rua B\n");
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].body.contains("CIDADE: GUARUJÁ"));
    }

    #[test]
    fn test_bare_number_line_is_not_a_boundary() {
        // The boundary needs whitespace after the digits; a digits-only line
        // (page number, stray column value) does not qualify.
        let blocks = segment("1 Rua A\n12345\n2 Rua B\n");
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].body.contains("12345"));
    }

    #[test]
    fn test_no_boundaries_yields_no_blocks() {
        assert!(segment("Anexo II header\nno numbered lines at all\n").is_empty());
    }

    #[test]
    fn test_last_block_runs_to_end_of_text() {
        let blocks = segment("1 Rua A\ntail line without newline");
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].body.ends_with("tail line without newline"));
    }
}
