// src/unity/models.rs
use crate::health::HealthReading;
use serde::Deserialize;

/// Compact collection response from `/api/types/<type>/instances`.
#[derive(Debug, Deserialize)]
pub struct InstancesResponse {
    #[serde(default)]
    pub entries: Vec<InstanceEntry>,
}

#[derive(Debug, Deserialize)]
pub struct InstanceEntry {
    pub content: InstanceContent,
}

#[derive(Debug, Deserialize)]
pub struct InstanceContent {
    #[serde(default)]
    pub id: Option<String>,
    pub health: Health,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub value: i64,
    #[serde(default)]
    pub description_ids: Vec<String>,
    #[serde(default)]
    pub descriptions: Vec<String>,
}

impl From<InstanceEntry> for HealthReading {
    fn from(entry: InstanceEntry) -> Self {
        let InstanceContent { id, health } = entry.content;

        HealthReading {
            id,
            value: health.value,
            description_id: health.description_ids.into_iter().next().unwrap_or_default(),
            description: health.descriptions.into_iter().next().unwrap_or_default(),
        }
    }
}

impl InstancesResponse {
    pub fn into_readings(self) -> Vec<HealthReading> {
        self.entries.into_iter().map(HealthReading::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact_instances() {
        let body = r#"{
            "@base": "https://unity/api/types/disk/instances?fields=health,id&per_page=2000",
            "updated": "2018-02-07T10:00:00.000Z",
            "links": [{"rel": "self", "href": "&page=1"}],
            "entries": [
                {"content": {"id": "dae_0_1_disk_0", "health": {
                    "value": 5,
                    "descriptionIds": ["ALRT_COMPONENT_OK"],
                    "descriptions": ["The component is operating normally. No action is required."]
                }}},
                {"content": {"id": "dae_0_1_disk_1", "health": {
                    "value": 20,
                    "descriptionIds": ["ALRT_DISK_FAULTED", "ALRT_DISK_REMOVED"],
                    "descriptions": ["The disk has faulted.", "The disk was removed."]
                }}}
            ]
        }"#;

        let response: InstancesResponse = serde_json::from_str(body).unwrap();
        let readings = response.into_readings();

        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].id.as_deref(), Some("dae_0_1_disk_0"));
        assert_eq!(readings[1].value, 20);
        assert_eq!(readings[1].description_id, "ALRT_DISK_FAULTED");
        assert_eq!(readings[1].description, "The disk has faulted.");
    }

    #[test]
    fn test_missing_descriptions_become_empty() {
        let body = r#"{"entries": [{"content": {"health": {"value": 7}}}]}"#;

        let readings = serde_json::from_str::<InstancesResponse>(body)
            .unwrap()
            .into_readings();

        assert_eq!(readings[0].id, None);
        assert_eq!(readings[0].description_id, "");
        assert_eq!(readings[0].description, "");
    }

    #[test]
    fn test_missing_entries_is_empty() {
        let response: InstancesResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_readings().is_empty());
    }

    #[test]
    fn test_missing_health_is_an_error() {
        let body = r#"{"entries": [{"content": {"id": "spa"}}]}"#;
        assert!(serde_json::from_str::<InstancesResponse>(body).is_err());
    }
}
