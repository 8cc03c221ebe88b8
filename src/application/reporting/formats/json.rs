//! JSON report format implementation

use serde::Serialize;

use crate::application::reporting::ReportError;

/// Pretty-printed JSON dump of any report-shaped value
pub fn render<T: Serialize>(report: &T) -> Result<String, ReportError> {
    serde_json::to_string_pretty(report).map_err(ReportError::Serialize)
}
