// src/client.rs

use crate::error::VanError;
use crate::route::Route;
use crate::schedule::Schedule;
use crate::station::Station;
use crate::user::User;

use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// An authenticated user session: the bearer token issued at login plus the
/// user it belongs to.
///
/// The session lives on the [`EasyVan`] client as explicit state and is
/// attached to each request from there; nothing in the SDK reads ambient
/// globals. Tests can construct a client, inject a session, and observe
/// exactly which requests carry it.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// The main client for interacting with an EasyVan booking backend.
///
/// `EasyVan` holds the backend base URL, an underlying `reqwest::Client`,
/// and the current [`Session`], if any. Catalog reads (stations, routes,
/// schedules) live directly on the client; grouped operations are reached
/// through handles: [`EasyVan::auth`], [`EasyVan::bookings`],
/// [`EasyVan::driver`], [`EasyVan::admin`], and [`EasyVan::payments`].
///
/// # Initialization
///
/// ```rust,no_run
/// use easyvan_rs::EasyVan;
/// # use easyvan_rs::VanError;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), VanError> {
/// let mut client = EasyVan::new("http://localhost:8080")?;
///
/// let stations = client.stations().await?;
/// println!("{} stations served", stations.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EasyVan {
    pub server_url: String,
    pub(crate) http_client: Client,
    pub(crate) session: Option<Session>,
}

impl EasyVan {
    /// Creates a new `EasyVan` client for the given backend base URL.
    ///
    /// The URL is normalized: a missing scheme defaults to `http://`, and a
    /// trailing `/` or `/api` suffix is stripped so that endpoint paths can
    /// always be joined as `{base}/api/{endpoint}`.
    pub fn new(server_url: &str) -> Result<Self, VanError> {
        let mut temp_url_string = server_url.to_string();

        // Ensure scheme is present
        if !temp_url_string.starts_with("http://") && !temp_url_string.starts_with("https://") {
            temp_url_string = format!("http://{}", temp_url_string);
        }

        let parsed_server_url = Url::parse(&temp_url_string)?;

        if parsed_server_url.cannot_be_a_base() {
            return Err(VanError::SdkError(format!(
                "The server_url '{}' resolved to '{}', which cannot be a base URL. Please provide a full base URL (e.g., http://localhost:8080).",
                server_url, parsed_server_url
            )));
        }

        let http_client = Client::builder().build().map_err(VanError::ReqwestError)?;

        let mut final_server_url = parsed_server_url.as_str().trim_end_matches('/').to_string();

        // If the URL ends with /api, strip it to get the true base server URL.
        // This makes the client resilient to BACKEND_URL being
        // http://host/api or http://host.
        if final_server_url.ends_with("/api") {
            final_server_url.truncate(final_server_url.len() - "/api".len());
        }

        log::debug!("EasyVan initialized with base server_url: {}", final_server_url);

        Ok(Self {
            server_url: final_server_url,
            http_client,
            session: None,
        })
    }

    // Internal method to set or clear the session.
    pub(crate) fn _set_session(&mut self, session: Option<Session>) {
        self.session = session;
    }

    /// Returns the current bearer token, if a session is active.
    pub fn session_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// Returns the logged-in user, if a session is active.
    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// Convenience for `client.session_token().is_some()`.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Returns an `AuthHandle` for login, registration, and password
    /// management. Logging in stores the resulting [`Session`] on this
    /// client.
    pub fn auth(&mut self) -> crate::auth::AuthHandle<'_> {
        crate::auth::AuthHandle::new(self)
    }

    /// Returns a `BookingHandle` for reserving seats and managing the
    /// current user's bookings.
    pub fn bookings(&self) -> crate::booking::BookingHandle<'_> {
        crate::booking::BookingHandle::new(self)
    }

    /// Returns a `DriverHandle` for manifests and passenger check-in.
    pub fn driver(&self) -> crate::driver::DriverHandle<'_> {
        crate::driver::DriverHandle::new(self)
    }

    /// Returns an `AdminHandle` for station/route/schedule/driver
    /// management.
    pub fn admin(&self) -> crate::admin::AdminHandle<'_> {
        crate::admin::AdminHandle::new(self)
    }

    /// Returns a `PaymentHandle` for slip verification and QR payment.
    pub fn payments(&self) -> crate::payment::PaymentHandle<'_> {
        crate::payment::PaymentHandle::new(self)
    }

    // Catalog reads. These are the public, unauthenticated or
    // lightly-authenticated fetches every booking flow starts from; each is
    // an independent request and failures never poison client state.

    /// Fetches all stations.
    pub async fn stations(&self) -> Result<Vec<Station>, VanError> {
        self.get("stations").await
    }

    /// Fetches all service routes.
    pub async fn routes(&self) -> Result<Vec<Route>, VanError> {
        self.get("routes").await
    }

    /// Fetches departures for a route on a travel date.
    pub async fn schedules(
        &self,
        route_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Schedule>, VanError> {
        let params = vec![
            ("routeId".to_string(), route_id.to_string()),
            ("date".to_string(), date.format("%Y-%m-%d").to_string()),
        ];
        self._get_with_query("schedules", &params, true).await
    }

    /// Fetches a single departure by id.
    pub async fn schedule(&self, schedule_id: i64) -> Result<Schedule, VanError> {
        let endpoint = format!("schedules/{}", schedule_id);
        self._request(Method::GET, &endpoint, None::<&Value>, true, None)
            .await
    }
}

// Request plumbing. Everything below funnels through `_request` /
// `_request_text` so authorization and error mapping live in one place.
impl EasyVan {
    pub(crate) fn _endpoint_url(&self, endpoint: &str) -> Result<Url, VanError> {
        let base_url = Url::parse(&self.server_url).map_err(|e| {
            VanError::InvalidUrl(format!(
                "Base server URL '{}' is invalid: {}",
                self.server_url, e
            ))
        })?;

        // Trim any leading slashes from the endpoint to avoid paths like
        // "/api//stations".
        let api_path = format!("/api/{}", endpoint.trim_start_matches('/'));

        base_url.join(&api_path).map_err(|e| {
            VanError::InvalidUrl(format!(
                "Failed to join base URL '{}' with API path '{}': {}",
                base_url, api_path, e
            ))
        })
    }

    pub(crate) fn _auth_headers(
        &self,
        authenticated: bool,
        token_override: Option<&str>,
    ) -> Result<HeaderMap, VanError> {
        let mut headers = HeaderMap::new();

        let effective_token = token_override.or(self.session_token());
        if let Some(token) = effective_token {
            let value = format!("Bearer {}", token);
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&value).map_err(VanError::InvalidHeaderValue)?,
            );
        } else if authenticated {
            log::warn!("Authenticated request attempted without a session token.");
            return Err(VanError::SessionTokenMissing);
        }

        Ok(headers)
    }

    // Central request method for JSON-bodied responses.
    pub(crate) async fn _request<T: Serialize + Send + Sync, R: DeserializeOwned + Send + 'static>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&T>,
        authenticated: bool,
        token_override: Option<&str>,
    ) -> Result<R, VanError> {
        let response = self
            ._send(method, endpoint, body, authenticated, token_override)
            .await?;
        self._send_and_process_response(response, endpoint).await
    }

    // Central request method for the backend's plain-text endpoints
    // (reserve, cancel, reschedule, verify-pickup).
    pub(crate) async fn _request_text<T: Serialize + Send + Sync>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&T>,
        authenticated: bool,
    ) -> Result<String, VanError> {
        let response = self._send(method, endpoint, body, authenticated, None).await?;

        let status = response.status();
        let text = response.text().await.map_err(VanError::ReqwestError)?;
        if status.is_success() {
            log::debug!("Request successful. Response body: {}", text);
            Ok(text)
        } else {
            log::warn!("Request failed with status {} and body: {}", status, text);
            Err(VanError::from_response(status.as_u16(), &text))
        }
    }

    async fn _send<T: Serialize + Send + Sync>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&T>,
        authenticated: bool,
        token_override: Option<&str>,
    ) -> Result<reqwest::Response, VanError> {
        let full_url = self._endpoint_url(endpoint)?;

        log::debug!(
            "Preparing request: Method={}, URL={}, Authenticated={}",
            method,
            full_url.as_str(),
            authenticated
        );

        let mut headers = self._auth_headers(authenticated, token_override)?;
        if method == Method::POST || method == Method::PUT || method == Method::PATCH {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let mut request_builder = self
            .http_client
            .request(method, full_url.clone())
            .headers(headers);

        if let Some(body_data) = body {
            let body_str = serde_json::to_string(body_data).map_err(VanError::JsonError)?;
            log::debug!("Request body: {}", body_str);
            request_builder = request_builder.body(body_str);
        } else {
            log::debug!("Request body: None");
        }

        request_builder.send().await.map_err(VanError::ReqwestError)
    }

    // GET with query-string parameters (schedules, booked-seats).
    pub(crate) async fn _get_with_query<R: DeserializeOwned + Send + 'static>(
        &self,
        endpoint: &str,
        params: &[(String, String)],
        authenticated: bool,
    ) -> Result<R, VanError> {
        let mut full_url = self._endpoint_url(endpoint)?;
        for (key, value) in params {
            full_url.query_pairs_mut().append_pair(key, value);
        }

        log::debug!(
            "Preparing GET request with params: URL={}, Authenticated={}",
            full_url.as_str(),
            authenticated
        );

        let headers = self._auth_headers(authenticated, None)?;
        let response = self
            .http_client
            .get(full_url)
            .headers(headers)
            .send()
            .await
            .map_err(VanError::ReqwestError)?;

        self._send_and_process_response(response, endpoint).await
    }
}
