//! Extracted record types.
//!
//! Field names are idiomatic Rust; the serialized keys are the Korean wire
//! keys the frontend has always consumed.

use serde::Serialize;

/// Facts pulled from the detail page.
///
/// A `None` means the field's anchor was not present in the uploaded
/// document. That is normal layout variation between listing types, not a
/// failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractedDetail {
    #[serde(rename = "사건번호")]
    pub case_number: Option<String>,

    #[serde(rename = "법원")]
    pub court: Option<String>,

    #[serde(rename = "물건종류")]
    pub object_type: Option<String>,

    #[serde(rename = "소재지")]
    pub location: Option<String>,

    /// Appraisal price in won, the basis for the derived price ranges.
    #[serde(rename = "감정가")]
    pub appraisal_price: Option<i64>,

    #[serde(rename = "최저매각가")]
    pub lowest_price: Option<String>,

    #[serde(rename = "매각기일")]
    pub sale_date: Option<String>,

    #[serde(rename = "물건비고")]
    pub remarks: Option<String>,

    #[serde(rename = "청구금액")]
    pub claimed_amount: Option<String>,
}

/// One tenant/lien row from the specification-page table.
///
/// Built from the first five text cells of a row, in fixed column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TenantRecord {
    #[serde(rename = "임차인")]
    pub tenant: String,

    #[serde(rename = "전입일자")]
    pub move_in_date: String,

    #[serde(rename = "확정일자")]
    pub fixed_date: String,

    #[serde(rename = "보증금")]
    pub deposit: String,

    #[serde(rename = "배당요구")]
    pub claim_status: String,
}
