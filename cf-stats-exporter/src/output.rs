//! JSON rendering for stdout

use cf_stats_provider::StatusMetric;

/// Pretty-printed (2-space) JSON array with a trailing newline.
pub fn render_metrics(metrics: &[StatusMetric]) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(metrics)?;
    json.push('\n');
    Ok(json)
}
