use tracing::info;

use super::entities::SubmittedEntry;

/// In-memory session state. Records are appended and never edited.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    entries: Vec<SubmittedEntry>,
}

impl AppState {
    pub fn record(&mut self, entry: SubmittedEntry) {
        info!(
            medicine_id = %entry.medicine_id,
            unit = entry.unit.as_str(),
            price = %entry.prices.display_price,
            total = self.entries.len() + 1,
            "recorded inventory entry"
        );
        self.entries.push(entry);
    }

    /// Submitted entries, oldest first.
    pub fn entries(&self) -> &[SubmittedEntry] {
        &self.entries
    }

    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }
}
