//! HTML report format implementation
//!
//! Single-page neumorphic template with inline CSS. Sections render only
//! when the report carries the matching data; a missing field produces an
//! empty section rather than an error, so any report kind can go through
//! the same template.

use crate::application::reporting::models::Report;

const STYLE: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: linear-gradient(145deg, #e6e6e6, #ffffff);
            min-height: 100vh;
            padding: 20px;
            color: #2c3e50;
        }

        .container {
            max-width: 1200px;
            margin: 0 auto;
            background: linear-gradient(145deg, #f0f0f0, #ffffff);
            border-radius: 30px;
            box-shadow:
                20px 20px 60px #d1d1d1,
                -20px -20px 60px #ffffff;
            padding: 40px;
            position: relative;
            overflow: hidden;
        }

        .container::before {
            content: '';
            position: absolute;
            top: 0;
            left: 0;
            right: 0;
            height: 4px;
            background: linear-gradient(90deg, #667eea 0%, #764ba2 100%);
        }

        .header {
            text-align: center;
            margin-bottom: 40px;
            padding: 30px;
            background: linear-gradient(145deg, #ffffff, #f0f0f0);
            border-radius: 25px;
            box-shadow:
                inset 5px 5px 10px #d1d1d1,
                inset -5px -5px 10px #ffffff;
        }

        .header h1 {
            font-size: 2.5em;
            font-weight: 700;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
            background-clip: text;
            margin-bottom: 10px;
        }

        .header h2 {
            font-size: 1.8em;
            color: #34495e;
            font-weight: 500;
        }

        .summary {
            background: linear-gradient(145deg, #ffffff, #f0f0f0);
            padding: 30px;
            border-radius: 25px;
            margin-bottom: 30px;
            box-shadow:
                10px 10px 20px #d1d1d1,
                -10px -10px 20px #ffffff;
        }

        .summary h3 {
            font-size: 1.5em;
            color: #2c3e50;
            margin-bottom: 25px;
            text-align: center;
            font-weight: 600;
        }

        .metrics-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 20px;
            margin-top: 20px;
        }

        .metric {
            background: linear-gradient(145deg, #ffffff, #f0f0f0);
            padding: 25px;
            border-radius: 20px;
            text-align: center;
            box-shadow:
                8px 8px 16px #d1d1d1,
                -8px -8px 16px #ffffff;
            transition: all 0.3s ease;
        }

        .metric:hover {
            transform: translateY(-5px);
            box-shadow:
                12px 12px 24px #d1d1d1,
                -12px -12px 24px #ffffff;
        }

        .metric-value {
            font-size: 2.5em;
            font-weight: 700;
            margin-bottom: 8px;
            display: block;
        }

        .metric-label {
            color: #7f8c8d;
            font-size: 0.9em;
            font-weight: 500;
            text-transform: uppercase;
            letter-spacing: 1px;
        }

        .success { color: #27ae60; }
        .warning { color: #f39c12; }
        .danger { color: #e74c3c; }
        .info { color: #3498db; }

        .section {
            background: linear-gradient(145deg, #ffffff, #f0f0f0);
            padding: 30px;
            border-radius: 25px;
            margin-bottom: 30px;
            box-shadow:
                10px 10px 20px #d1d1d1,
                -10px -10px 20px #ffffff;
        }

        .section h3 {
            font-size: 1.4em;
            color: #2c3e50;
            margin-bottom: 20px;
            padding-bottom: 15px;
            border-bottom: 2px solid #ecf0f1;
            font-weight: 600;
        }

        .vulnerability {
            background: linear-gradient(145deg, #fff8e1, #fff3e0);
            border: none;
            padding: 20px;
            margin: 15px 0;
            border-radius: 15px;
            box-shadow:
                inset 3px 3px 6px #e0d5c1,
                inset -3px -3px 6px #ffffff;
        }

        .vulnerability h4 {
            color: #e67e22;
            margin-bottom: 10px;
            font-weight: 600;
        }

        .progress-bar {
            width: 100%;
            height: 20px;
            background: linear-gradient(145deg, #e0e0e0, #f0f0f0);
            border-radius: 10px;
            overflow: hidden;
            margin: 15px 0;
            box-shadow:
                inset 3px 3px 6px #d1d1d1,
                inset -3px -3px 6px #ffffff;
        }

        .progress-fill {
            height: 100%;
            background: linear-gradient(90deg, #667eea 0%, #764ba2 100%);
            border-radius: 10px;
            transition: width 0.8s ease;
        }

        .coverage-item {
            display: flex;
            justify-content: space-between;
            align-items: center;
            padding: 15px 0;
            border-bottom: 1px solid #ecf0f1;
        }

        .coverage-item:last-child {
            border-bottom: none;
        }

        .coverage-label {
            font-weight: 500;
            color: #34495e;
        }

        .coverage-value {
            font-weight: 600;
            color: #2c3e50;
        }

        .status-badge {
            display: inline-block;
            padding: 8px 16px;
            border-radius: 20px;
            font-size: 0.8em;
            font-weight: 600;
            text-transform: uppercase;
            letter-spacing: 1px;
        }

        .status-success {
            background: linear-gradient(145deg, #d5f4e6, #e8f5e8);
            color: #27ae60;
            box-shadow:
                3px 3px 6px #c1e0d1,
                -3px -3px 6px #ffffff;
        }

        .status-warning {
            background: linear-gradient(145deg, #fef9e7, #fef5e7);
            color: #f39c12;
            box-shadow:
                3px 3px 6px #e0d5c1,
                -3px -3px 6px #ffffff;
        }

        .timestamp {
            text-align: center;
            color: #95a5a6;
            font-size: 0.9em;
            margin-top: 40px;
            padding: 20px;
            background: linear-gradient(145deg, #f8f9fa, #e9ecef);
            border-radius: 15px;
            box-shadow:
                inset 3px 3px 6px #d1d1d1,
                inset -3px -3px 6px #ffffff;
        }

        .chart-container {
            background: linear-gradient(145deg, #ffffff, #f0f0f0);
            padding: 25px;
            border-radius: 20px;
            margin: 20px 0;
            box-shadow:
                8px 8px 16px #d1d1d1,
                -8px -8px 16px #ffffff;
        }

        @media (max-width: 768px) {
            .container {
                padding: 20px;
                margin: 10px;
            }

            .metrics-grid {
                grid-template-columns: 1fr;
            }

            .header h1 {
                font-size: 2em;
            }

            .header h2 {
                font-size: 1.4em;
            }
        }
"#;

/// Render a report as a standalone HTML page
pub fn render(report: &Report) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        r#"        <div class="header">
            <h1>Security Test Framework</h1>
            <h2>{} Report</h2>
        </div>
"#,
        report.kind.title()
    ));

    body.push_str(&summary_section(report));

    if let Some(by_category) = &report.by_category {
        body.push_str("        <div class=\"section\">\n            <h3>Coverage Analysis</h3>\n            <div class=\"chart-container\">\n");
        for (category, percentage) in by_category {
            body.push_str(&format!(
                r#"                <div class="coverage-item">
                    <span class="coverage-label">{}</span>
                    <div class="progress-bar">
                        <div class="progress-fill" style="width: {percentage}%"></div>
                    </div>
                    <span class="coverage-value">{percentage}%</span>
                </div>
"#,
                capitalize(category)
            ));
        }
        body.push_str("            </div>\n        </div>\n");
    }

    if let Some(overall) = report.summary.overall {
        let meets = report.summary.meets_threshold.unwrap_or(false);
        let (badge_class, badge_text) = if meets {
            ("status-success", "Threshold Met")
        } else {
            ("status-warning", "Below Threshold")
        };
        body.push_str(&format!(
            r#"        <div class="section">
            <h3>Overall Coverage</h3>
            <div class="chart-container">
                <div class="progress-bar">
                    <div class="progress-fill" style="width: {overall}%"></div>
                </div>
                <div style="text-align: center; margin-top: 10px;">
                    <span class="status-badge {badge_class}">{badge_text}</span>
                </div>
            </div>
        </div>
"#
        ));
    }

    if !report.details.is_empty() {
        body.push_str("        <div class=\"section\">\n            <h3>Test Details</h3>\n");
        for detail in &report.details {
            body.push_str(&format!(
                r#"            <div class="vulnerability">
                <h4>Test Result</h4>
                <p>{}</p>
            </div>
"#,
                escape(detail)
            ));
        }
        body.push_str("        </div>\n");
    }

    if !report.recommendations.is_empty() {
        body.push_str("        <div class=\"section\">\n            <h3>Recommendations</h3>\n");
        for recommendation in &report.recommendations {
            body.push_str(&format!(
                r#"            <div class="vulnerability">
                <h4>Recommendation</h4>
                <p>{}</p>
            </div>
"#,
                escape(recommendation)
            ));
        }
        body.push_str("        </div>\n");
    }

    body.push_str(&format!(
        "        <div class=\"timestamp\">Generated on: {}</div>\n",
        report.timestamp.to_rfc3339()
    ));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Security Test Framework - {} Report</title>
    <style>{}</style>
</head>
<body>
    <div class="container">
{}    </div>
</body>
</html>
"#,
        report.kind.title(),
        STYLE,
        body
    )
}

fn summary_section(report: &Report) -> String {
    let summary = &report.summary;
    format!(
        r#"        <div class="summary">
            <h3>Test Summary</h3>
            <div class="metrics-grid">
                <div class="metric">
                    <span class="metric-value info">{}</span>
                    <div class="metric-label">Total Tests</div>
                </div>
                <div class="metric">
                    <span class="metric-value success">{}</span>
                    <div class="metric-label">Passed</div>
                </div>
                <div class="metric">
                    <span class="metric-value danger">{}</span>
                    <div class="metric-label">Failed</div>
                </div>
                <div class="metric">
                    <span class="metric-value warning">{}</span>
                    <div class="metric-label">Vulnerabilities</div>
                </div>
            </div>
        </div>
"#,
        summary.total_tests.unwrap_or(0),
        summary.passed.unwrap_or(0),
        summary.failed.unwrap_or(0),
        summary.vulnerabilities.unwrap_or(0),
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
