//! Managed resource kinds and their declarative metadata

pub mod a001_fertilizer;
pub mod a002_agrochemical;
pub mod a003_fertilizer_cost;
pub mod a004_agrochemical_cost;
pub mod a005_seedling_cost;
pub mod a006_labor_cost;
pub mod a007_unit_conversion;
pub mod a008_origin_economics;
pub mod a009_survey_master;

use crate::shared::metadata::ResourceMetadata;
use serde::{Deserialize, Serialize};

/// One of the nine managed record categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Fertilizer,
    Agrochemical,
    FertilizerCost,
    AgrochemicalCost,
    SeedlingCost,
    LaborCost,
    UnitConversion,
    OriginEconomics,
    SurveyMaster,
}

impl ResourceKind {
    /// All kinds, in navigation order
    pub const ALL: [ResourceKind; 9] = [
        Self::Fertilizer,
        Self::Agrochemical,
        Self::FertilizerCost,
        Self::AgrochemicalCost,
        Self::SeedlingCost,
        Self::LaborCost,
        Self::UnitConversion,
        Self::OriginEconomics,
        Self::SurveyMaster,
    ];

    pub fn metadata(self) -> &'static ResourceMetadata {
        match self {
            Self::Fertilizer => &a001_fertilizer::METADATA,
            Self::Agrochemical => &a002_agrochemical::METADATA,
            Self::FertilizerCost => &a003_fertilizer_cost::METADATA,
            Self::AgrochemicalCost => &a004_agrochemical_cost::METADATA,
            Self::SeedlingCost => &a005_seedling_cost::METADATA,
            Self::LaborCost => &a006_labor_cost::METADATA,
            Self::UnitConversion => &a007_unit_conversion::METADATA,
            Self::OriginEconomics => &a008_origin_economics::METADATA,
            Self::SurveyMaster => &a009_survey_master::METADATA,
        }
    }

    /// Stable key, e.g. "a001_fertilizer"
    pub fn key(self) -> &'static str {
        self.metadata().key
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// Maps a server table name (as reported by `/status`) back to its kind
    pub fn from_table_name(table: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.metadata().table_name == table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_roundtrip() {
        for kind in ResourceKind::ALL {
            assert_eq!(ResourceKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(ResourceKind::from_key("unknown"), None);
    }

    #[test]
    fn test_from_table_name() {
        assert_eq!(
            ResourceKind::from_table_name("appLaborCostData"),
            Some(ResourceKind::LaborCost)
        );
        assert_eq!(ResourceKind::from_table_name("users"), None);
    }

    #[test]
    fn test_metadata_is_consistent() {
        let mut keys = HashSet::new();
        for kind in ResourceKind::ALL {
            let meta = kind.metadata();
            assert!(keys.insert(meta.key), "duplicate key {}", meta.key);
            assert!(!meta.search_fields().is_empty(), "{} has no search field", meta.key);

            // every field a natural key refers to must exist in the schema
            match meta.natural_key {
                crate::shared::metadata::NaturalKey::Field(name) => {
                    assert!(meta.field(name).is_some(), "{}: missing key field", meta.key);
                }
                crate::shared::metadata::NaturalKey::Composite { parts, .. } => {
                    for part in parts {
                        assert!(meta.field(part).is_some(), "{}: missing {}", meta.key, part);
                    }
                }
            }

            for field in meta.fields {
                if field.field_type == crate::shared::metadata::FieldType::Choice {
                    assert!(field.enum_values.is_some_and(|v| !v.is_empty()));
                }
            }
        }
    }

    #[test]
    fn test_endpoints_are_paths() {
        for kind in ResourceKind::ALL {
            let e = kind.metadata().endpoints;
            for path in [e.list, e.create, e.update, e.delete, e.ingest] {
                assert!(path.starts_with('/'), "{path}");
            }
        }
    }
}
