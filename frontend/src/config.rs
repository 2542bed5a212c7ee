//! Build-time configuration of the front-end.
//!
//! The backend base URL is read from `URBANFIX_BACKEND_URL` when the crate is
//! compiled (e.g. `URBANFIX_BACKEND_URL=https://api.example.org trunk build`).

/// Base URL of the UrbanFix backend, without a trailing slash.
pub const BACKEND_URL: &str = match option_env!("URBANFIX_BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:5001",
};

/// Local storage key holding the session identifier.
pub const SESSION_KEY: &str = "user_id";

/// Upper bound for `POST /detect`; inference can be slow.
pub const DETECT_TIMEOUT_MS: u32 = 60_000;

/// Upper bound for `POST /send-email`.
pub const REPORT_TIMEOUT_MS: u32 = 30_000;

pub const GEO_TIMEOUT_MS: u32 = 10_000;
pub const GEO_MAXIMUM_AGE_MS: u32 = 60_000;

/// Delay before leaving a page after a successful save.
pub const REDIRECT_DELAY_MS: u32 = 2_000;

pub const MAP_CENTER: [f64; 2] = [17.9716, 73.5946];
pub const MAP_ZOOM: f64 = 8.0;
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";
