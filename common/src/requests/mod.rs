//! Request and response bodies exchanged with the UrbanFix backend.
//!
//! Multipart detection uploads have no body type here; the browser builds the
//! form itself from [`DetectFields`].

use serde::{Deserialize, Serialize};

use crate::model::coordinates::Coordinates;
use crate::model::severity::Severity;

/// Header carrying the session identifier on `POST /send-email`.
pub const USER_ID_HEADER: &str = "User-Id";

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub user_id: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `PUT /user/profile/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
}

/// Text fields sent alongside the image in the `POST /detect` form.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectFields {
    pub latitude: String,
    pub longitude: String,
}

impl From<Coordinates> for DetectFields {
    fn from(coordinates: Coordinates) -> Self {
        Self {
            latitude: coordinates.latitude.to_string(),
            longitude: coordinates.longitude.to_string(),
        }
    }
}

/// Body of `POST /send-email`.
///
/// `image_id` is a client-generated correlation token, not a backend key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintRequest {
    pub message: String,
    pub latitude: f64,
    pub longitude: f64,
    pub severity: Severity,
    pub image_id: String,
}

/// Generic `{success, message}` acknowledgement. Every field is optional
/// since several endpoints answer with an empty or ad-hoc body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub complaint_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn complaint_request_uses_backend_field_names() {
        let request = ComplaintRequest {
            message: "large crack".to_string(),
            latitude: 17.5,
            longitude: 73.25,
            severity: Severity::Severe,
            image_id: "token-1".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "message": "large crack",
                "latitude": 17.5,
                "longitude": 73.25,
                "severity": "Severe",
                "imageId": "token-1"
            })
        );
    }

    #[test]
    fn detect_fields_render_plain_decimals() {
        let fields = DetectFields::from(Coordinates::new(17.9716, -73.5));
        assert_eq!(fields.latitude, "17.9716");
        assert_eq!(fields.longitude, "-73.5");
    }
}
