//! Detail-page field extraction.

use scraper::{Html, Selector};
use tracing::debug;

use crate::anchors::{AnchorTable, DetailField};
use crate::types::ExtractedDetail;

/// Extract the anchored fields of a detail page.
///
/// Anchor absence is never an error: listing types vary in which fields
/// their pages carry, and a missing anchor simply leaves the field unset.
pub fn extract(html: &str) -> ExtractedDetail {
    let document = Html::parse_document(html);
    let table = AnchorTable::current();

    debug!(layout = table.version(), "extracting detail fields");

    let text = |field: DetailField| anchor_text(&document, table, field);

    ExtractedDetail {
        case_number: text(DetailField::CaseNumber),
        court: text(DetailField::Court),
        object_type: text(DetailField::ObjectType),
        location: text(DetailField::Location),
        appraisal_price: to_num(text(DetailField::AppraisalPrice).as_deref()),
        lowest_price: text(DetailField::LowestPrice),
        sale_date: text(DetailField::SaleDate),
        remarks: text(DetailField::Remarks),
        claimed_amount: text(DetailField::ClaimedAmount),
    }
}

/// Trimmed visible text of the element anchoring `field`, if present.
fn anchor_text(document: &Html, table: &AnchorTable, field: DetailField) -> Option<String> {
    let id = table.anchor(field)?;
    let selector = Selector::parse(&format!(r#"[id="{id}"]"#)).ok()?;
    let element = document.select(&selector).next()?;
    Some(element.text().collect::<String>().trim().to_string())
}

/// Coerce a text value to an integer by keeping only its digits.
///
/// `"100,000,000원"` becomes `100000000`; empty or absent input yields
/// `None`, never an error.
pub fn to_num(text: Option<&str>) -> Option<i64> {
    let digits: String = text?.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_PAGE: &str = r#"<html><body>
        <span id="mf_wfm_mainFrame_spn_gdsDtlSrchUserCsNo">2024타경1234</span>
        <span id="mf_wfm_mainFrame_spn_gdsDtlSrchCortNm">서울중앙지방법원</span>
        <span id="mf_wfm_mainFrame_spn_gdsDtlSrchGdsKndNm">아파트</span>
        <span id="mf_wfm_mainFrame_gen_lstSt_0_spn_gdsDtlSrchStCtt">
            서울특별시 강남구 테헤란로 123
        </span>
        <span id="mf_wfm_mainFrame_spn_gdsDtlSrchAeeEvlAmt">100,000,000원</span>
        <span id="mf_wfm_mainFrame_spn_gdsDtlSrchlwsDspsl">80,000,000원</span>
        <span id="mf_wfm_mainFrame_spn_gdsDtlSrchDspslDxdy">2024.09.12</span>
        <span id="mf_wfm_mainFrame_spn_gdsDtlSrchRmk">유치권 신고 있음</span>
    </body></html>"#;

    #[test]
    fn test_extract_reads_anchored_fields() {
        let detail = extract(DETAIL_PAGE);

        assert_eq!(detail.case_number.as_deref(), Some("2024타경1234"));
        assert_eq!(detail.court.as_deref(), Some("서울중앙지방법원"));
        assert_eq!(detail.object_type.as_deref(), Some("아파트"));
        assert_eq!(
            detail.location.as_deref(),
            Some("서울특별시 강남구 테헤란로 123")
        );
        assert_eq!(detail.appraisal_price, Some(100_000_000));
        assert_eq!(detail.lowest_price.as_deref(), Some("80,000,000원"));
        assert_eq!(detail.sale_date.as_deref(), Some("2024.09.12"));
        assert_eq!(detail.remarks.as_deref(), Some("유치권 신고 있음"));
    }

    #[test]
    fn test_missing_anchors_leave_fields_unset() {
        let detail = extract("<html><body><p>wrong page</p></body></html>");

        assert_eq!(detail, ExtractedDetail::default());
    }

    #[test]
    fn test_claimed_amount_absent_on_primary_layout() {
        // The fixture page carries no claimed-amount element.
        let detail = extract(DETAIL_PAGE);
        assert_eq!(detail.claimed_amount, None);
    }

    #[test]
    fn test_to_num_strips_non_digits() {
        assert_eq!(to_num(Some("12,345원")), Some(12_345));
        assert_eq!(to_num(Some("100,000,000원")), Some(100_000_000));
        assert_eq!(to_num(Some("감정가 3억")), Some(3));
    }

    #[test]
    fn test_to_num_absent_or_empty_is_none() {
        assert_eq!(to_num(None), None);
        assert_eq!(to_num(Some("")), None);
        assert_eq!(to_num(Some("미정")), None);
    }
}
