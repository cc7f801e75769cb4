//! End-to-end extraction over realistic page fixtures.

use extraction::{detail, memo, report};

const DETAIL_PAGE: &str = r#"<html><body>
    <div class="detail">
        <span id="mf_wfm_mainFrame_spn_gdsDtlSrchUserCsNo">2024타경1234</span>
        <span id="mf_wfm_mainFrame_gen_lstSt_0_spn_gdsDtlSrchStCtt">서울특별시 강남구 테헤란로 123</span>
        <span id="mf_wfm_mainFrame_spn_gdsDtlSrchAeeEvlAmt">100,000,000원</span>
        <span id="mf_wfm_mainFrame_spn_gdsDtlSrchlwsDspsl">80,000,000원</span>
        <span id="mf_wfm_mainFrame_spn_gdsDtlSrchDspslDxdy">2024.09.12</span>
        <span id="mf_wfm_mainFrame_spn_gdsDtlSrchRmk">선순위 임차인 있음</span>
    </div>
</body></html>"#;

const MEMO_PAGE: &str = r#"<html><body>
    <table>
        <tr><th>임차인</th><th>전입일자</th><th>확정일자</th><th>보증금</th><th>배당요구</th></tr>
        <tr>
            <td>홍길동</td><td>2022-01-15</td><td>2022-01-16</td>
            <td>50,000,000</td><td>배당요구</td>
        </tr>
        <tr><td>합계</td><td></td><td></td><td>50,000,000</td></tr>
    </table>
</body></html>"#;

#[test]
fn merged_report_carries_detail_estimate_and_tenants() {
    let facts = detail::extract(DETAIL_PAGE);
    let tenants = memo::extract(MEMO_PAGE);
    let merged = report::build_report(&facts, &tenants);

    assert_eq!(merged["사건번호"], "2024타경1234");
    assert_eq!(merged["감정가"], 100_000_000);

    let estimate = &merged[report::ESTIMATE_KEY];
    assert_eq!(estimate["실거주용"]["하한"], "90,000,000원");
    assert_eq!(estimate["실거주용"]["상한"], "100,000,000원");
    assert_eq!(estimate["투자용"]["하한"], "65,000,000원");
    assert_eq!(estimate["투자용"]["상한"], "80,000,000원");

    // The four-cell summary row is not a tenant record.
    let tenants = merged[report::TENANTS_KEY].as_array().unwrap();
    assert_eq!(tenants.len(), 1);
    assert_eq!(tenants[0]["임차인"], "홍길동");
}

#[test]
fn wrong_documents_degrade_to_nulls_not_errors() {
    let facts = detail::extract("<html><body>not a listing</body></html>");
    let tenants = memo::extract("<html><body>no table here</body></html>");
    let merged = report::build_report(&facts, &tenants);

    assert!(merged["사건번호"].is_null());
    assert!(merged[report::ESTIMATE_KEY].is_null());
    assert_eq!(merged[report::TENANTS_KEY].as_array().unwrap().len(), 0);
}
