//! Listing analysis: two uploaded HTML documents in, merged report out.

use analysis::narrative_or_failure;
use axum::extract::{Extension, Multipart};
use axum::Json;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::app::AppState;
use crate::error::ApiError;

/// Filename marker identifying the specification document.
const SPECIFICATION_MARKER: &str = "명세서";

/// Error message when the upload does not carry exactly two documents.
const UPLOAD_COUNT_ERROR: &str = "상세페이지와 매각물건명세서 HTML 2개를 업로드해야 합니다.";

/// Uploaded documents sorted into their roles.
#[derive(Debug, Default, PartialEq)]
struct UploadedDocuments {
    detail_html: String,
    memo_html: String,
}

/// Sort uploaded (filename, content) pairs into the detail/specification
/// slots. A file is the specification document when its name contains the
/// marker; anything else is the detail document.
fn classify_documents(files: Vec<(String, String)>) -> Result<UploadedDocuments, ApiError> {
    if files.len() != 2 {
        return Err(ApiError::bad_request(UPLOAD_COUNT_ERROR));
    }

    let mut documents = UploadedDocuments::default();
    for (name, content) in files {
        if name.contains(SPECIFICATION_MARKER) {
            documents.memo_html = content;
        } else {
            documents.detail_html = content;
        }
    }

    Ok(documents)
}

/// Analyze an uploaded listing.
///
/// Extraction never fails on malformed pages (fields degrade to null), and
/// an external-service failure degrades to an embedded failure string, so a
/// well-formed upload always produces a 200 with a complete mapping.
pub async fn analyze_handler(
    Extension(state): Extension<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Map<String, Value>>, ApiError> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?
    {
        // Only file parts count; plain form fields are ignored.
        let Some(name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(e.to_string()))?;

        // Browser-saved pages occasionally carry stray bytes; decode lossily
        // rather than turning an expected situation into a hard failure.
        files.push((name, String::from_utf8_lossy(&bytes).into_owned()));
    }

    let documents = classify_documents(files)?;

    let detail = extraction::detail::extract(&documents.detail_html);
    let tenants = extraction::memo::extract(&documents.memo_html);
    debug!(tenant_rows = tenants.len(), "extraction complete");

    let mut report = extraction::report::build_report(&detail, &tenants);
    let narrative = narrative_or_failure(state.analyst.narrate(&report).await);
    report.insert(
        extraction::report::NARRATIVE_KEY.to_string(),
        Value::String(narrative),
    );

    info!(case_number = ?detail.case_number, "listing analyzed");

    Ok(Json(report))
}
