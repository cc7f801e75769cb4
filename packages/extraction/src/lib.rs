//! Court-Auction Listing Extraction Library
//!
//! Pure functions over uploaded HTML text: the detail-page field extractor,
//! the specification-page tenant table extractor, price-range derivation from
//! the appraisal value, and assembly of the merged report mapping.
//!
//! # Design Philosophy
//!
//! - Anchored, not parsed: every datum lives in an element with a fixed id,
//!   kept in a versioned lookup table so layout drift is a data change
//! - Absence is not an error: listing types vary in which fields their pages
//!   carry, so a missing anchor leaves the field unset
//! - No I/O and no failure paths: malformed numbers and short table rows are
//!   expected outcomes represented as `None`/empty
//!
//! # Usage
//!
//! ```rust,ignore
//! use extraction::{detail, memo, report};
//!
//! let facts = detail::extract(&detail_html);
//! let tenants = memo::extract(&memo_html);
//! let merged = report::build_report(&facts, &tenants);
//! ```
//!
//! # Modules
//!
//! - [`anchors`] - Versioned field-to-element-id lookup table
//! - [`detail`] - Detail-page field extraction and numeric coercion
//! - [`memo`] - Specification-page tenant/lien table extraction
//! - [`estimate`] - Expected winning-bid ranges from the appraisal price
//! - [`report`] - Merged report mapping assembly
//! - [`types`] - Extracted record types

pub mod anchors;
pub mod detail;
pub mod estimate;
pub mod memo;
pub mod report;
pub mod types;

// Re-export core types at crate root
pub use anchors::{AnchorTable, DetailField};
pub use estimate::{PriceEstimate, PriceRange};
pub use types::{ExtractedDetail, TenantRecord};
