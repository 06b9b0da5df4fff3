//! HTML report rendering.
//!
//! `render_html` is a pure function of the report value: identical reports
//! produce byte-identical HTML, so exports are reproducible given identical
//! assessor responses.

use crate::models::assessment::{ControlStatus, ReadinessReport, RiskLevel};

const REPORT_STYLE: &str = r#"        @page {
            size: A4 landscape;
            margin: 12mm;
        }

        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: Arial, sans-serif;
            font-size: 9px;
            margin: 0;
            padding: 0;
            line-height: 1.4;
            color: #333;
            background-color: white;
        }

        .container {
            max-width: 100%;
            margin: 0;
            background-color: white;
            padding: 10px;
        }

        h1 {
            color: #2c3e50;
            margin-bottom: 8px;
            font-size: 20px;
            border-bottom: 2px solid #3498db;
            padding-bottom: 8px;
        }

        .timestamp {
            color: #7f8c8d;
            margin-bottom: 15px;
            font-size: 9px;
        }

        .summary-section {
            background-color: #ecf0f1;
            padding: 12px;
            border-radius: 3px;
            margin-bottom: 15px;
        }

        .summary-section h2 {
            color: #2c3e50;
            margin-bottom: 10px;
            font-size: 14px;
        }

        .summary-grid {
            display: grid;
            grid-template-columns: repeat(5, 1fr);
            gap: 8px;
        }

        .summary-item {
            background-color: white;
            padding: 8px;
            border-radius: 3px;
            text-align: center;
        }

        .summary-item .label {
            font-size: 8px;
            color: #7f8c8d;
            margin-bottom: 4px;
        }

        .summary-item .value {
            font-size: 16px;
            font-weight: bold;
            color: #2c3e50;
        }

        .summary-item .percentage {
            color: #27ae60;
        }

        .results-section h2 {
            color: #2c3e50;
            margin-bottom: 10px;
            font-size: 14px;
        }

        table {
            width: 100%;
            table-layout: fixed;
            border-collapse: collapse;
            word-wrap: break-word;
            margin-top: 10px;
            background-color: white;
            font-size: 9px;
        }

        thead {
            display: table-header-group;
            background-color: #34495e;
            color: white;
        }

        th {
            border: 1px solid #ddd;
            padding: 6px;
            text-align: left;
            font-weight: 600;
            font-size: 9px;
            vertical-align: top;
            word-break: break-word;
        }

        td {
            border: 1px solid #ddd;
            padding: 6px;
            vertical-align: top;
            word-break: break-word;
            font-size: 9px;
        }

        tbody tr {
            page-break-inside: avoid;
        }

        tbody tr:hover {
            background-color: #f8f9fa;
        }

        .status-met {
            background-color: #d4edda;
            color: #155724;
            padding: 3px 6px;
            border-radius: 3px;
            font-weight: 600;
            display: inline-block;
            font-size: 8px;
        }

        .status-partially-met {
            background-color: #fff3cd;
            color: #856404;
            padding: 3px 6px;
            border-radius: 3px;
            font-weight: 600;
            display: inline-block;
            font-size: 8px;
        }

        .status-not-met {
            background-color: #f8d7da;
            color: #721c24;
            padding: 3px 6px;
            border-radius: 3px;
            font-weight: 600;
            display: inline-block;
            font-size: 8px;
        }

        .risk-low {
            color: #27ae60;
            font-weight: 600;
        }

        .risk-medium {
            color: #f39c12;
            font-weight: 600;
        }

        .risk-high {
            color: #e74c3c;
            font-weight: 600;
        }

        .justification, .recommendation {
            word-wrap: break-word;
            overflow-wrap: break-word;
        }"#;

/// Escapes HTML special characters in model- and caller-supplied text.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn status_class(status: ControlStatus) -> &'static str {
    match status {
        ControlStatus::Met => "status-met",
        ControlStatus::PartiallyMet => "status-partially-met",
        ControlStatus::NotMet => "status-not-met",
    }
}

fn risk_class(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "risk-low",
        RiskLevel::Medium => "risk-medium",
        RiskLevel::High => "risk-high",
    }
}

/// Renders the readiness report as a standalone HTML document.
pub fn render_html(report: &ReadinessReport) -> String {
    let timestamp = report.generated_at.format("%Y-%m-%d %H:%M:%S UTC");

    let mut rows = String::new();
    for result in &report.results {
        rows.push_str(&format!(
            r#"                    <tr>
                        <td>{control_id}</td>
                        <td>{control_title}</td>
                        <td>{domain}</td>
                        <td><span class="{status_class}">{status}</span></td>
                        <td><span class="{risk_class}">{risk_level}</span></td>
                        <td class="justification">{justification}</td>
                        <td class="recommendation">{recommendation}</td>
                    </tr>
"#,
            control_id = escape_html(&result.control_id),
            control_title = escape_html(&result.control_title),
            domain = escape_html(&result.domain),
            status_class = status_class(result.status),
            status = result.status.as_str(),
            risk_class = risk_class(result.risk_level),
            risk_level = result.risk_level.as_str(),
            justification = escape_html(&result.justification),
            recommendation = escape_html(&result.recommendation),
        ));
    }

    let summary = &report.summary;
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>ISO 27001 Readiness Assessment Report</title>
    <style>
{style}
    </style>
</head>
<body>
    <div class="container">
        <h1>ISO 27001 Readiness Assessment Report</h1>
        <p class="timestamp">Generated on: {timestamp}</p>
        <p class="timestamp">Source document: {source_document}</p>

        <div class="summary-section">
            <h2>Summary</h2>
            <div class="summary-grid">
                <div class="summary-item">
                    <div class="label">Total Controls</div>
                    <div class="value">{total_controls}</div>
                </div>
                <div class="summary-item">
                    <div class="label">Met</div>
                    <div class="value" style="color: #27ae60;">{met_count}</div>
                </div>
                <div class="summary-item">
                    <div class="label">Partially Met</div>
                    <div class="value" style="color: #f39c12;">{partially_met_count}</div>
                </div>
                <div class="summary-item">
                    <div class="label">Not Met</div>
                    <div class="value" style="color: #e74c3c;">{not_met_count}</div>
                </div>
                <div class="summary-item">
                    <div class="label">Compliance Percentage</div>
                    <div class="value percentage">{compliance_percentage}%</div>
                </div>
            </div>
        </div>

        <div class="results-section">
            <h2>Detailed Results</h2>
            <table>
                <colgroup>
                    <col style="width: 6%">
                    <col style="width: 12%">
                    <col style="width: 8%">
                    <col style="width: 8%">
                    <col style="width: 6%">
                    <col style="width: 30%">
                    <col style="width: 30%">
                </colgroup>
                <thead>
                    <tr>
                        <th>Control ID</th>
                        <th>Control Title</th>
                        <th>Domain</th>
                        <th>Status</th>
                        <th>Risk Level</th>
                        <th>Justification</th>
                        <th>Recommendation</th>
                    </tr>
                </thead>
                <tbody>
{rows}                </tbody>
            </table>
        </div>
    </div>
</body>
</html>"#,
        style = REPORT_STYLE,
        timestamp = timestamp,
        source_document = escape_html(&report.source_document),
        total_controls = summary.total_controls,
        met_count = summary.met_count,
        partially_met_count = summary.partially_met_count,
        not_met_count = summary.not_met_count,
        compliance_percentage = summary.compliance_percentage,
        rows = rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assessment::{AssessmentSummary, ControlResult};
    use chrono::TimeZone;
    use uuid::Uuid;

    fn sample_report() -> ReadinessReport {
        let results = vec![
            ControlResult {
                control_id: "5.1".to_string(),
                control_title: "Policies for information security".to_string(),
                domain: "Organizational".to_string(),
                status: ControlStatus::Met,
                risk_level: RiskLevel::Low,
                justification: "Section 1 defines & approves the policy.".to_string(),
                recommendation: "Keep the annual review cadence.".to_string(),
            },
            ControlResult {
                control_id: "8.28".to_string(),
                control_title: "Secure coding".to_string(),
                domain: "Technological".to_string(),
                status: ControlStatus::NotMet,
                risk_level: RiskLevel::High,
                justification: "No evidence of secure coding guidance.".to_string(),
                recommendation: "Adopt a secure coding standard such as <OWASP ASVS>.".to_string(),
            },
        ];
        ReadinessReport {
            report_id: Uuid::nil(),
            generated_at: chrono::Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            source_document: "policy.pdf".to_string(),
            summary: AssessmentSummary::from_results(&results),
            results,
        }
    }

    #[test]
    fn test_escape_html_replaces_special_characters() {
        assert_eq!(
            escape_html(r#"a & b < c > d "e""#),
            "a &amp; b &lt; c &gt; d &quot;e&quot;"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let report = sample_report();
        assert_eq!(render_html(&report), render_html(&report));
    }

    #[test]
    fn test_render_covers_every_result_row() {
        let html = render_html(&sample_report());
        assert!(html.contains("<td>5.1</td>"));
        assert!(html.contains("<td>8.28</td>"));
        assert!(html.contains("Policies for information security"));
        assert!(html.contains("Secure coding"));
    }

    #[test]
    fn test_render_escapes_assessor_text() {
        let html = render_html(&sample_report());
        assert!(html.contains("&lt;OWASP ASVS&gt;"));
        assert!(!html.contains("<OWASP ASVS>"));
    }

    #[test]
    fn test_render_maps_status_and_risk_classes() {
        let html = render_html(&sample_report());
        assert!(html.contains(r#"<span class="status-met">MET</span>"#));
        assert!(html.contains(r#"<span class="status-not-met">NOT MET</span>"#));
        assert!(html.contains(r#"<span class="risk-high">HIGH</span>"#));
    }

    #[test]
    fn test_render_shows_summary_numbers() {
        let html = render_html(&sample_report());
        // 1 of 2 met → 50%
        assert!(html.contains("50%"));
        assert!(html.contains("Generated on: 2025-06-01 12:00:00 UTC"));
        assert!(html.contains("Source document: policy.pdf"));
    }
}
