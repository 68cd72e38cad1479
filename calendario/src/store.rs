use std::path::Path;

use anyhow::{Context, Result};
use cal_events::CustomEventDefinition;
use tracing::{debug, info, warn};

/// Read stored custom events from a JSON array.
///
/// A missing file means no custom events have been saved yet.
pub fn load_custom_events(path: &Path) -> Result<Vec<CustomEventDefinition>> {
    if !path.exists() {
        debug!(path = %path.display(), "no custom events file");
        return Ok(Vec::new());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read custom events: {}", path.display()))?;
    let events = parse_custom_events(&text)
        .with_context(|| format!("failed to parse custom events: {}", path.display()))?;
    info!(path = %path.display(), count = events.len(), "loaded custom events");
    Ok(events)
}

/// Parse a JSON array of custom-event records.
///
/// The text must be a JSON array.  A record that does not decode (a `null`
/// month, a non-string extra field) is logged and skipped; the rest load.
pub fn parse_custom_events(text: &str) -> Result<Vec<CustomEventDefinition>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let records: Vec<serde_json::Value> = serde_json::from_str(text)?;
    let mut events = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let id = record.get("id").cloned();
        match serde_json::from_value(record) {
            Ok(event) => events.push(event),
            Err(e) => warn!(index, id = ?id, "skipping custom event: {e}"),
        }
    }
    Ok(events)
}
