//! Merged report assembly.
//!
//! The caller-facing result is one flat JSON mapping: the detail fields, the
//! derived estimate block, the tenant list, and (spliced in by the boundary
//! after the external call) the narrative text.

use serde_json::{Map, Value};

use crate::estimate;
use crate::types::{ExtractedDetail, TenantRecord};

/// Key the narrative text is spliced under.
pub const NARRATIVE_KEY: &str = "권리분석GPT";

/// Key carrying the tenant record list.
pub const TENANTS_KEY: &str = "세입자정보";

/// Key carrying the price-estimate block.
pub const ESTIMATE_KEY: &str = "예상낙찰가";

/// Flat union of two mappings; keys from `overlay` win on collision.
///
/// The two extractors never produce colliding keys in practice, so this is
/// a pure union.
pub fn merge(mut base: Map<String, Value>, overlay: Map<String, Value>) -> Map<String, Value> {
    for (key, value) in overlay {
        base.insert(key, value);
    }
    base
}

/// Assemble the full report mapping from the two extractions.
///
/// The estimate block is derived here from the appraisal price; when the
/// appraisal is unknown the 예상낙찰가 key holds null rather than a block of
/// null bounds.
pub fn build_report(detail: &ExtractedDetail, tenants: &[TenantRecord]) -> Map<String, Value> {
    let mut detail_map = to_map(serde_json::to_value(detail).unwrap_or(Value::Null));
    detail_map.insert(
        ESTIMATE_KEY.to_string(),
        serde_json::to_value(estimate::from_appraisal(detail.appraisal_price))
            .unwrap_or(Value::Null),
    );

    let mut tenant_map = Map::new();
    tenant_map.insert(
        TENANTS_KEY.to_string(),
        serde_json::to_value(tenants).unwrap_or(Value::Null),
    );

    merge(detail_map, tenant_map)
}

fn to_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map_of(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_merge_keeps_disjoint_keys_from_both_sides() {
        let base = map_of(json!({"a": 1, "b": 2}));
        let overlay = map_of(json!({"c": 3}));

        let merged = merge(base, overlay);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged["a"], 1);
        assert_eq!(merged["c"], 3);
    }

    #[test]
    fn test_merge_overlay_wins_on_collision() {
        let base = map_of(json!({"a": 1}));
        let overlay = map_of(json!({"a": 2}));

        assert_eq!(merge(base, overlay)["a"], 2);
    }

    #[test]
    fn test_build_report_carries_all_sections() {
        let detail = ExtractedDetail {
            case_number: Some("2024타경1234".to_string()),
            appraisal_price: Some(100_000_000),
            ..Default::default()
        };
        let tenants = vec![TenantRecord {
            tenant: "홍길동".to_string(),
            move_in_date: "2022-01-15".to_string(),
            fixed_date: "2022-01-16".to_string(),
            deposit: "50,000,000".to_string(),
            claim_status: "배당요구".to_string(),
        }];

        let report = build_report(&detail, &tenants);

        assert_eq!(report["사건번호"], "2024타경1234");
        assert_eq!(report[ESTIMATE_KEY]["실거주용"]["하한"], "90,000,000원");
        assert_eq!(report[TENANTS_KEY].as_array().unwrap().len(), 1);
        assert!(!report.contains_key(NARRATIVE_KEY));
    }

    #[test]
    fn test_build_report_estimate_is_null_without_appraisal() {
        let report = build_report(&ExtractedDetail::default(), &[]);

        assert!(report[ESTIMATE_KEY].is_null());
        assert_eq!(report[TENANTS_KEY], json!([]));
    }
}
