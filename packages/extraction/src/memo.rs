//! Specification-page extraction (tenant/lien table).

use scraper::{Html, Selector};
use tracing::debug;

use crate::types::TenantRecord;

/// Columns a row must carry to count as a tenant record.
const TENANT_COLUMNS: usize = 5;

/// Extract tenant rows from the first table of a specification page.
///
/// This document type carries exactly one relevant table and it comes first
/// in the document. That is an observed layout fact, not a guarantee; if the
/// site ever puts a decorative table ahead of it, the lookup needs an id
/// anchor like the detail page has.
///
/// The first row is the header and is skipped. Rows with fewer than five
/// cells are dropped silently; they are decorative or malformed, and a
/// partial record would be worse than none. Output preserves row order.
pub fn extract(html: &str) -> Vec<TenantRecord> {
    let document = Html::parse_document(html);

    let table_selector = match Selector::parse("table") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };
    let row_selector = match Selector::parse("tr") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };
    let cell_selector = match Selector::parse("td") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    let Some(table) = document.select(&table_selector).next() else {
        debug!("specification page has no table");
        return Vec::new();
    };

    let mut records = Vec::new();

    for row in table.select(&row_selector).skip(1) {
        let cells: Vec<String> = row
            .select(&cell_selector)
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .collect();

        if cells.len() < TENANT_COLUMNS {
            debug!(cells = cells.len(), "dropping short table row");
            continue;
        }

        let mut cells = cells.into_iter();
        records.push(TenantRecord {
            tenant: cells.next().unwrap_or_default(),
            move_in_date: cells.next().unwrap_or_default(),
            fixed_date: cells.next().unwrap_or_default(),
            deposit: cells.next().unwrap_or_default(),
            claim_status: cells.next().unwrap_or_default(),
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMO_PAGE: &str = r#"<html><body>
        <table>
            <tr><th>임차인</th><th>전입일자</th><th>확정일자</th><th>보증금</th><th>배당요구</th></tr>
            <tr>
                <td>홍길동</td><td>2022-01-15</td><td>2022-01-16</td>
                <td>50,000,000</td><td>배당요구</td>
            </tr>
            <tr><td>비고</td><td>4칸뿐</td><td>인</td><td>행</td></tr>
            <tr>
                <td>김철수</td><td>2023-03-02</td><td>미상</td>
                <td>30,000,000</td><td>미요구</td>
            </tr>
        </table>
    </body></html>"#;

    #[test]
    fn test_extract_skips_header_and_short_rows() {
        let records = extract(MEMO_PAGE);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].tenant, "홍길동");
        assert_eq!(records[0].deposit, "50,000,000");
        assert_eq!(records[1].tenant, "김철수");
        assert_eq!(records[1].claim_status, "미요구");
    }

    #[test]
    fn test_extract_preserves_row_order() {
        let records = extract(MEMO_PAGE);

        let tenants: Vec<&str> = records.iter().map(|r| r.tenant.as_str()).collect();
        assert_eq!(tenants, vec!["홍길동", "김철수"]);
    }

    #[test]
    fn test_header_plus_one_valid_one_short_row_yields_one_record() {
        let html = r#"<table>
            <tr><th>h</th></tr>
            <tr><td>a</td><td>b</td><td>c</td><td>d</td><td>e</td></tr>
            <tr><td>a</td><td>b</td><td>c</td><td>d</td></tr>
        </table>"#;

        let records = extract(html);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].claim_status, "e");
    }

    #[test]
    fn test_no_table_yields_empty_list() {
        assert!(extract("<html><body><p>표 없음</p></body></html>").is_empty());
    }

    #[test]
    fn test_extra_cells_beyond_fifth_are_ignored() {
        let html = r#"<table>
            <tr><th>h</th></tr>
            <tr><td>a</td><td>b</td><td>c</td><td>d</td><td>e</td><td>extra</td></tr>
        </table>"#;

        let records = extract(html);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].claim_status, "e");
    }

    #[test]
    fn test_cell_text_is_trimmed() {
        let html = r#"<table>
            <tr><th>h</th></tr>
            <tr><td> 홍길동 </td><td>b</td><td>c</td><td>d</td><td>e</td></tr>
        </table>"#;

        assert_eq!(extract(html)[0].tenant, "홍길동");
    }
}
