use serde::{Deserialize, Deserializer, Serialize};

/// A WGS84 position as reported by the device or echoed back by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Leaflet ordering: `[lat, lng]`.
    pub fn lat_lng(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

/// Reads a coordinate the backend may have stored as a number, a numeric
/// string, or a placeholder such as `"Unknown"`. Anything that is not a
/// finite number becomes `None`.
pub(crate) fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Other(serde_json::Value),
    }

    let value = match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Some(n),
        Raw::Text(text) => text.trim().parse::<f64>().ok(),
        Raw::Other(_) => None,
    };
    Ok(value.filter(|v| v.is_finite()))
}

/// Pairs two optional coordinates into a position when both are present.
pub(crate) fn pair(latitude: Option<f64>, longitude: Option<f64>) -> Option<Coordinates> {
    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Some(Coordinates { latitude, longitude }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Field {
        #[serde(default, deserialize_with = "lenient_coordinate")]
        value: Option<f64>,
    }

    fn decode(json: &str) -> Option<f64> {
        serde_json::from_str::<Field>(json).unwrap().value
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        assert_eq!(decode(r#"{"value": 17.5}"#), Some(17.5));
        assert_eq!(decode(r#"{"value": " 73.59 "}"#), Some(73.59));
    }

    #[test]
    fn placeholders_and_missing_values_become_none() {
        assert_eq!(decode(r#"{"value": "Unknown"}"#), None);
        assert_eq!(decode(r#"{"value": null}"#), None);
        assert_eq!(decode(r#"{}"#), None);
    }
}
