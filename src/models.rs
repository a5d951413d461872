//! Domain records produced from ABR lookup responses

use serde::{Deserialize, Serialize};

/// Full details for one ABN, from an ABN or ACN lookup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRecord {
    pub abn: String,
    pub status: String,
    pub status_effective_from: String,
    pub acn: String,
    pub address: Address,
    /// Registered business names, in the order returned
    pub business_names: Vec<String>,
    pub entity: Entity,
    /// GST registration date, empty when not registered
    pub gst: String,
}

/// Main business location. No street-level data is published.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub date: String,
    pub postcode: String,
    /// State or territory code (NSW, VIC, ...)
    pub state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityType {
    pub code: String,
    pub name: String,
}

/// One row of a name search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameSearchResult {
    pub abn: String,
    pub status: String,
    pub is_current: bool,
    pub name: String,
    pub name_type: String,
    pub postcode: String,
    /// Match relevance, observed in 0..=100
    pub score: f64,
    pub state: String,
}

impl BusinessRecord {
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }

    pub fn is_gst_registered(&self) -> bool {
        !self.gst.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_record_serializes_camel_case() {
        let record = BusinessRecord {
            abn: "51824753556".to_string(),
            status: "Active".to_string(),
            status_effective_from: "2000-07-01".to_string(),
            entity: Entity {
                name: "AUSTRALIAN TAXATION OFFICE".to_string(),
                entity_type: EntityType {
                    code: "CGE".to_string(),
                    name: "Commonwealth Government Entity".to_string(),
                },
            },
            ..Default::default()
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["statusEffectiveFrom"], "2000-07-01");
        assert_eq!(value["entity"]["type"]["code"], "CGE");
        assert_eq!(value["businessNames"], serde_json::json!([]));
        assert!(record.is_active());
        assert!(!record.is_gst_registered());
    }

    #[test]
    fn test_name_search_result_serializes_camel_case() {
        let row = NameSearchResult {
            is_current: true,
            name_type: "Entity Name".to_string(),
            score: 99.5,
            ..Default::default()
        };

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["isCurrent"], true);
        assert_eq!(value["nameType"], "Entity Name");
        assert_eq!(value["score"], 99.5);
    }
}
