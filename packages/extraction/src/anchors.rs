//! Versioned anchor table for the court-auction site layout.
//!
//! Extraction is coupled to one external site's markup by construction: every
//! datum on the detail page lives in an element with a fixed id. The ids are
//! kept in a versioned table so that layout drift is a data change (a new
//! table version), not a code change.

/// Fields exposed by the detail page, one anchor each.
///
/// This is a closed enumeration; no anchor is ever constructed dynamically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailField {
    CaseNumber,
    Court,
    ObjectType,
    Location,
    AppraisalPrice,
    LowestPrice,
    SaleDate,
    Remarks,
    ClaimedAmount,
}

impl DetailField {
    /// All detail fields, in serialization order.
    pub const ALL: [DetailField; 9] = [
        DetailField::CaseNumber,
        DetailField::Court,
        DetailField::ObjectType,
        DetailField::Location,
        DetailField::AppraisalPrice,
        DetailField::LowestPrice,
        DetailField::SaleDate,
        DetailField::Remarks,
        DetailField::ClaimedAmount,
    ];
}

/// One site-layout version's field-to-element-id mapping.
///
/// A table version that does not carry a field simply yields no anchor for
/// it, which downstream turns into an unset field.
pub struct AnchorTable {
    version: &'static str,
    anchors: &'static [(DetailField, &'static str)],
}

impl AnchorTable {
    /// The table for the layout currently served by the auction site.
    pub fn current() -> &'static AnchorTable {
        &COURT_AUCTION_2024
    }

    /// Layout version identifier.
    pub fn version(&self) -> &'static str {
        self.version
    }

    /// Element id carrying the given field, if this layout has one.
    pub fn anchor(&self, field: DetailField) -> Option<&'static str> {
        self.anchors
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, id)| *id)
    }
}

/// Detail-page element ids as served by the court-auction site in 2024.
static COURT_AUCTION_2024: AnchorTable = AnchorTable {
    version: "courtauction-2024.1",
    anchors: &[
        (
            DetailField::CaseNumber,
            "mf_wfm_mainFrame_spn_gdsDtlSrchUserCsNo",
        ),
        (DetailField::Court, "mf_wfm_mainFrame_spn_gdsDtlSrchCortNm"),
        (
            DetailField::ObjectType,
            "mf_wfm_mainFrame_spn_gdsDtlSrchGdsKndNm",
        ),
        (
            DetailField::Location,
            "mf_wfm_mainFrame_gen_lstSt_0_spn_gdsDtlSrchStCtt",
        ),
        (
            DetailField::AppraisalPrice,
            "mf_wfm_mainFrame_spn_gdsDtlSrchAeeEvlAmt",
        ),
        (
            DetailField::LowestPrice,
            "mf_wfm_mainFrame_spn_gdsDtlSrchlwsDspsl",
        ),
        (
            DetailField::SaleDate,
            "mf_wfm_mainFrame_spn_gdsDtlSrchDspslDxdy",
        ),
        (DetailField::Remarks, "mf_wfm_mainFrame_spn_gdsDtlSrchRmk"),
        (
            DetailField::ClaimedAmount,
            "mf_wfm_mainFrame_spn_gdsDtlSrchClmAmt",
        ),
    ],
};
