pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::assessment;
use crate::controls;
use crate::report;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/controls",
            get(controls::handlers::handle_list_controls),
        )
        .route(
            "/api/v1/analyze",
            post(assessment::handlers::handle_analyze),
        )
        .route(
            "/api/v1/report",
            get(report::handlers::handle_download_html),
        )
        .route(
            "/api/v1/report/pdf",
            get(report::handlers::handle_download_pdf),
        )
        .layer(body_limit)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::util::ServiceExt;

    use super::*;
    use crate::assessment::assessor::ControlAssessor;
    use crate::config::Config;
    use crate::controls::registry::ControlRegistry;
    use crate::errors::AppError;
    use crate::models::assessment::{ControlStatus, ControlVerdict, RiskLevel};
    use crate::models::control::ControlRecord;
    use crate::report::pdf::PdfExporter;
    use crate::report::store::ReportStore;

    const BOUNDARY: &str = "warden-test-boundary";

    /// Assessor stub returning the same verdict for every control.
    struct FixedVerdictAssessor;

    #[async_trait]
    impl ControlAssessor for FixedVerdictAssessor {
        async fn assess(
            &self,
            _control: &ControlRecord,
            _policy_text: &str,
        ) -> Result<ControlVerdict, AppError> {
            Ok(ControlVerdict {
                status: ControlStatus::NotMet,
                justification: "No evidence in the policy text.".to_string(),
                risk_level: RiskLevel::High,
                recommendation: "Document the control.".to_string(),
            })
        }
    }

    fn test_router() -> (Router, tempfile::TempDir) {
        let tmp = tempfile::tempdir().unwrap();

        let csv_path = tmp.path().join("controls.csv");
        let mut file = std::fs::File::create(&csv_path).unwrap();
        writeln!(
            file,
            "old_control_id,old_title,new_control_id,new_title,domain,description"
        )
        .unwrap();
        writeln!(
            file,
            "A.5.1.1,Policies for information security,5.1,Policies for information security,Organizational,Information security policy shall be defined and approved."
        )
        .unwrap();
        writeln!(
            file,
            "A.9.2.1,User registration,5.16,Identity management,Organizational,The full life cycle of identities shall be managed."
        )
        .unwrap();
        writeln!(
            file,
            "NEW,New control,8.28,Secure coding,Technological,Secure coding principles shall be applied."
        )
        .unwrap();

        let config = Config {
            openai_api_key: "test-key".to_string(),
            controls_csv_path: csv_path.clone(),
            reports_dir: tmp.path().join("reports"),
            chrome_executable: None,
            max_upload_bytes: 1024 * 1024,
            port: 0,
            rust_log: "info".to_string(),
        };

        let state = AppState {
            controls: Arc::new(ControlRegistry::load(&csv_path).unwrap()),
            assessor: Arc::new(FixedVerdictAssessor),
            store: ReportStore::new(config.reports_dir.clone()),
            exporter: PdfExporter::new(None),
            config,
        };

        (build_router(state), tmp)
    }

    fn analyze_request(file: Option<(&str, &[u8])>, controls: Option<&str>) -> Request<Body> {
        let mut body: Vec<u8> = Vec::new();
        if let Some((filename, data)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/pdf\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        if let Some(selection) = controls {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"controls\"\r\n\r\n{selection}\r\n"
                )
                .as_bytes(),
            );
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/v1/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let (router, _tmp) = test_router();
        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_controls_returns_catalogue() {
        let (router, _tmp) = test_router();
        let response = router
            .oneshot(
                Request::get("/api/v1/controls")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["total_controls"], 3);
        assert_eq!(json["controls"][0]["new_control_id"], "5.1");
        assert_eq!(json["controls"][2]["old_control_id"], "NEW");
    }

    #[tokio::test]
    async fn test_analyze_rejects_missing_file_field() {
        let (router, _tmp) = test_router();
        let response = router
            .oneshot(analyze_request(None, Some("5.1")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_rejects_non_pdf_upload() {
        let (router, _tmp) = test_router();
        let response = router
            .oneshot(analyze_request(
                Some(("notes.txt", b"just some plain text")),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("not a PDF"));
    }

    #[tokio::test]
    async fn test_analyze_rejects_unknown_control_identifier() {
        let (router, _tmp) = test_router();
        // Selection is validated before the PDF is parsed, so the body can be minimal
        let response = router
            .oneshot(analyze_request(
                Some(("policy.pdf", b"%PDF-1.7 minimal")),
                Some("5.1,42.9"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"]["message"].as_str().unwrap().contains("42.9"));
    }

    #[tokio::test]
    async fn test_report_download_before_any_analysis_is_404() {
        let (router, _tmp) = test_router();
        let response = router
            .clone()
            .oneshot(Request::get("/api/v1/report").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = router
            .oneshot(
                Request::get("/api/v1/report/pdf")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("/api/v1/analyze"));
    }
}
