//! Typed client for the UrbanFix backend.
//!
//! Every call resolves to `Result<T, ApiError>`:
//! - transport failures (network down, CORS, aborted by the deadline) become
//!   [`ApiError::NoResponse`];
//! - non-2xx answers become [`ApiError::Server`] carrying the status and the
//!   `error`/`message` field of the body when there is one;
//! - problems building the request or decoding the body become
//!   [`ApiError::Client`].
//!
//! `POST /detect` and `POST /send-email` run under a deadline enforced with an
//! `AbortController`; the other calls use the browser's own limits.

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::{AbortController, File, FormData};

use common::error::ApiError;
use common::model::complaint::{ComplaintList, ComplaintRecord};
use common::model::detection::DetectionResult;
use common::model::location::{LocationList, MapLocation};
use common::model::profile::Profile;
use common::requests::{
    Acknowledgement, DetectFields, LoginRequest, LoginResponse, RegisterRequest,
    UpdateProfileRequest, USER_ID_HEADER,
};
use common::workflow::ReportCommand;

use crate::config::{BACKEND_URL, DETECT_TIMEOUT_MS, REPORT_TIMEOUT_MS};

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(BACKEND_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn user_url(&self, prefix: &str, user_id: &str) -> String {
        let encoded: String = js_sys::encode_uri_component(user_id).into();
        self.url(&format!("{}/{}", prefix, encoded))
    }

    pub async fn login(&self, body: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let request = Request::post(&self.url("/auth/login"))
            .json(body)
            .map_err(client_error)?;
        read_json(send(request).await?).await
    }

    pub async fn register(&self, body: &RegisterRequest) -> Result<(), ApiError> {
        let request = Request::post(&self.url("/auth/register"))
            .json(body)
            .map_err(client_error)?;
        send(request).await.map(drop)
    }

    pub async fn get_profile(&self, user_id: &str) -> Result<Profile, ApiError> {
        let request = Request::get(&self.user_url("/user/profile", user_id))
            .build()
            .map_err(client_error)?;
        read_json(send(request).await?).await
    }

    pub async fn update_profile(
        &self,
        user_id: &str,
        body: &UpdateProfileRequest,
    ) -> Result<(), ApiError> {
        let request = Request::put(&self.user_url("/user/profile", user_id))
            .json(body)
            .map_err(client_error)?;
        send(request).await.map(drop)
    }

    /// Uploads the image as `multipart/form-data` together with the
    /// coordinates. The browser sets the boundary header itself.
    pub async fn detect(
        &self,
        file: &File,
        fields: &DetectFields,
    ) -> Result<DetectionResult, ApiError> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(js_error)?;
        form.append_with_str("latitude", &fields.latitude)
            .map_err(js_error)?;
        form.append_with_str("longitude", &fields.longitude)
            .map_err(js_error)?;

        let (builder, _deadline) =
            with_deadline(Request::post(&self.url("/detect")), DETECT_TIMEOUT_MS)?;
        let request = builder.body(form).map_err(client_error)?;
        read_json(send(request).await?).await
    }

    /// `POST /send-email`. Any 2xx (including the backend's 207 for "saved but
    /// mail not delivered") is a success.
    pub async fn submit_complaint(
        &self,
        command: &ReportCommand,
    ) -> Result<Acknowledgement, ApiError> {
        let (builder, _deadline) =
            with_deadline(Request::post(&self.url("/send-email")), REPORT_TIMEOUT_MS)?;
        let request = builder
            .header(USER_ID_HEADER, &command.user_id)
            .json(&command.request)
            .map_err(client_error)?;
        let response = send(request).await?;
        if response.status() == 207 {
            log::warn!("complaint stored but notification email was not delivered");
        }
        Ok(response.json::<Acknowledgement>().await.unwrap_or_default())
    }

    pub async fn list_complaints(&self, user_id: &str) -> Result<Vec<ComplaintRecord>, ApiError> {
        let request = Request::get(&self.user_url("/user/complaints", user_id))
            .build()
            .map_err(client_error)?;
        let list: ComplaintList = read_json(send(request).await?).await?;
        Ok(list.complaints)
    }

    pub async fn list_locations(&self) -> Result<Vec<MapLocation>, ApiError> {
        let request = Request::get(&self.url("/locations"))
            .build()
            .map_err(client_error)?;
        let list: LocationList = read_json(send(request).await?).await?;
        Ok(list.locations)
    }
}

/// Attaches an abort signal that fires after `timeout_ms`. The returned
/// `Timeout` must stay alive until the response arrives; dropping it cancels
/// the deadline.
fn with_deadline(
    builder: RequestBuilder,
    timeout_ms: u32,
) -> Result<(RequestBuilder, Timeout), ApiError> {
    let controller = AbortController::new().map_err(js_error)?;
    let builder = builder.abort_signal(Some(&controller.signal()));
    let deadline = Timeout::new(timeout_ms, move || {
        log::warn!("request aborted after {} ms", timeout_ms);
        controller.abort();
    });
    Ok((builder, deadline))
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let method = request.method();
    let url = request.url();
    log::debug!("{} {}", method, url);

    let response = request.send().await.map_err(|err| {
        log::error!("{} {} failed: {}", method, url, err);
        ApiError::no_response(err.to_string())
    })?;

    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::warn!("{} {} answered {}", method, url, status);
        Err(ApiError::from_status(status, &body))
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|err| {
        log::error!("unexpected response body from {}: {}", response.url(), err);
        ApiError::Client(format!("Unexpected response from server: {}", err))
    })
}

fn client_error(err: gloo_net::Error) -> ApiError {
    ApiError::Client(err.to_string())
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Client(format!("{:?}", err))
}
