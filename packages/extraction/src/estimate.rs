//! Expected winning-bid ranges derived from the appraisal price.

use serde::Serialize;

/// Bounds of one buyer profile's expected range, formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRange {
    #[serde(rename = "하한")]
    pub low: String,

    #[serde(rename = "상한")]
    pub high: String,
}

/// Expected winning-bid ranges for the two buyer profiles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceEstimate {
    /// Owner-occupier range: 90-100% of the appraisal price.
    #[serde(rename = "실거주용")]
    pub residential: PriceRange,

    /// Investor range: 65-80% of the appraisal price.
    #[serde(rename = "투자용")]
    pub investment: PriceRange,
}

/// Derive the estimate block from the appraisal price.
///
/// No appraisal price, no block: the caller serializes `None` as a null
/// estimate rather than a block of null bounds.
pub fn from_appraisal(appraisal: Option<i64>) -> Option<PriceEstimate> {
    let amount = appraisal?;

    Some(PriceEstimate {
        residential: PriceRange {
            low: format_won(amount * 9 / 10),
            high: format_won(amount),
        },
        investment: PriceRange {
            low: format_won(amount * 65 / 100),
            high: format_won(amount * 80 / 100),
        },
    })
}

/// Format a won amount with thousands separators: `1234567` → `"1,234,567원"`.
pub fn format_won(amount: i64) -> String {
    let digits = amount.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3 + 3);

    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }

    formatted.push('원');
    formatted
}
