use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::ResourceKind;

/// Per-table entry of `GET /status`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMissing {
    #[serde(default)]
    pub total_missing: u64,
}

/// Response of `GET /status`, keyed by server table name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissingDataStatus(pub HashMap<String, TableMissing>);

/// One tile of the status grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// Server table name
    pub table: String,
    /// Screen the table belongs to, when it is a managed resource
    pub kind: Option<ResourceKind>,
    pub total_missing: u64,
}

impl StatusEntry {
    /// Resource title, or the raw table name for unmanaged tables
    pub fn title(&self) -> &str {
        match self.kind {
            Some(kind) => kind.metadata().ui.title,
            None => &self.table,
        }
    }
}

impl MissingDataStatus {
    /// Entries sorted by descending missing count, then by table name
    pub fn entries(&self) -> Vec<StatusEntry> {
        let mut entries: Vec<StatusEntry> = self
            .0
            .iter()
            .map(|(table, missing)| StatusEntry {
                table: table.clone(),
                kind: ResourceKind::from_table_name(table),
                total_missing: missing.total_missing,
            })
            .collect();
        entries.sort_by(|a, b| {
            b.total_missing
                .cmp(&a.total_missing)
                .then_with(|| a.table.cmp(&b.table))
        });
        entries
    }

    pub fn total(&self) -> u64 {
        self.0.values().map(|m| m.total_missing).sum()
    }
}

/// Response of `GET /real_time_info`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealTimeInfo {
    #[serde(default)]
    pub total_missing_data: u64,
    /// `None` when no table has missing data
    #[serde(default)]
    pub table_with_most_missing_data: Option<String>,
    #[serde(default)]
    pub max_missing_count: u64,
}

impl RealTimeInfo {
    /// Resource kind of the worst table, if it is a managed one
    pub fn worst_kind(&self) -> Option<ResourceKind> {
        self.table_with_most_missing_data
            .as_deref()
            .and_then(ResourceKind::from_table_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_entries_sorted_and_mapped() {
        let status: MissingDataStatus = serde_json::from_str(
            r#"{
                "appFertilizerData": {"total_missing": 3},
                "appLaborCostData": {"total_missing": 9},
                "legacyTable": {"total_missing": 3}
            }"#,
        )
        .unwrap();

        let entries = status.entries();
        let tables: Vec<_> = entries.iter().map(|e| e.table.as_str()).collect();
        assert_eq!(tables, vec!["appLaborCostData", "appFertilizerData", "legacyTable"]);
        assert_eq!(entries[0].kind, Some(ResourceKind::LaborCost));
        assert_eq!(entries[0].title(), "Labor Cost Data");
        assert_eq!(entries[2].title(), "legacyTable");
        assert_eq!(status.total(), 15);
    }

    #[test]
    fn test_real_time_info_null_table() {
        let info: RealTimeInfo = serde_json::from_str(
            r#"{"total_missing_data": 0, "table_with_most_missing_data": null, "max_missing_count": 0}"#,
        )
        .unwrap();
        assert_eq!(info.worst_kind(), None);

        let info: RealTimeInfo = serde_json::from_str(
            r#"{"total_missing_data": 4, "table_with_most_missing_data": "appSurveyMasterData", "max_missing_count": 4}"#,
        )
        .unwrap();
        assert_eq!(info.worst_kind(), Some(ResourceKind::SurveyMaster));
    }
}
