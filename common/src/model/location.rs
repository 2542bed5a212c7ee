use serde::{Deserialize, Serialize};

use crate::model::coordinates::{lenient_coordinate, pair, Coordinates};
use crate::model::severity::Severity;

/// One reported pothole as listed by `GET /locations` for the public map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLocation {
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl MapLocation {
    pub fn coordinates(&self) -> Option<Coordinates> {
        pair(self.latitude, self.longitude)
    }

    pub fn severity(&self) -> Severity {
        self.severity.unwrap_or(Severity::Unknown)
    }

    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("Pending")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationList {
    #[serde(default)]
    pub locations: Vec<MapLocation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_coordinates_keep_the_record_without_a_position() {
        let list: LocationList = serde_json::from_str(
            r#"{"locations": [
                {"latitude": "17.97", "longitude": 73.59, "severity": "Minor"},
                {"latitude": "Unknown", "longitude": 73.59, "severity": "Severe", "status": "Fixed"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(list.locations.len(), 2);
        assert_eq!(
            list.locations[0].coordinates(),
            Some(Coordinates::new(17.97, 73.59))
        );
        assert_eq!(list.locations[1].coordinates(), None);
        assert_eq!(list.locations[1].severity(), Severity::Severe);
        assert_eq!(list.locations[1].status_label(), "Fixed");
    }
}
