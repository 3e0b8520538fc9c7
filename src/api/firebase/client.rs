use std::collections::BTreeMap;

use gcp_auth::{CustomServiceAccount, TokenProvider};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use super::models::{ApiError, ErrorResponse};
use crate::models::Transaction;

/// OAuth2 scopes required for Realtime Database REST reads.
const DATABASE_SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/userinfo.email",
    "https://www.googleapis.com/auth/firebase.database",
];

/// Child field the database orders transaction queries by.
const ORDER_BY_FIELD: &str = "timestamp";

/// Firebase Realtime Database REST client
pub struct FirebaseClient {
    http_client: HttpClient,
    access_token: String,
    base_url: String,
}

impl FirebaseClient {
    /// Create a new client for the given database URL, minting an access
    /// token from the service account.
    ///
    /// Token minting talks to Google's OAuth endpoint; a rejected or
    /// malformed key surfaces here as `ApiError::AuthError`.
    pub async fn new(
        base_url: String,
        account: &CustomServiceAccount,
    ) -> Result<Self, ApiError> {
        let token = account
            .token(DATABASE_SCOPES)
            .await
            .map_err(|e| ApiError::AuthError(format!("Failed to obtain access token: {}", e)))?;

        Ok(Self {
            http_client: HttpClient::new(),
            access_token: token.as_str().to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client with a pre-minted token (for testing)
    pub fn with_access_token(access_token: String, base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            access_token,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create default headers with authorization
    fn create_headers(&self) -> Result<HeaderMap, String> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let auth_value = HeaderValue::from_str(&format!("Bearer {}", self.access_token))
            .map_err(|e| format!("Failed to create auth header: {}", e))?;
        headers.insert(AUTHORIZATION, auth_value);

        Ok(headers)
    }

    /// Parse error response based on HTTP status code
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();

        // The database reports failures as {"error": "<message>"}
        let message = serde_json::from_str::<ErrorResponse>(&body_text)
            .ok()
            .and_then(|err| err.error)
            .unwrap_or(body_text);

        match status_code {
            400 => ApiError::BadRequest(message),
            401 => ApiError::Unauthorized(message),
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            500..=599 => {
                warn!("Server error {}: {}", status_code, message);
                ApiError::ServerError(status_code as i32, message)
            }
            _ => ApiError::HttpError(status_code as i32, message),
        }
    }

    /// GET /{path}.json?orderBy="timestamp"&limitToLast={limit}
    ///
    /// Retrieves the `limit` records with the greatest `timestamp` under
    /// the given node. Ordering and truncation happen server-side; the
    /// caller re-sorts for display.
    ///
    /// # Returns
    /// * `Ok(Some(map))` - Service-assigned keys to transaction payloads
    /// * `Ok(None)` - The node is empty (the service answers `null`)
    /// * `Err(ApiError)` - Transport, auth, or query failure
    pub async fn latest_transactions(
        &self,
        path: &str,
        limit: u32,
    ) -> Result<Option<BTreeMap<String, Transaction>>, ApiError> {
        let url = format!("{}/{}.json", self.base_url, path);
        let headers = self.create_headers().map_err(ApiError::RequestError)?;

        debug!(
            "GET {} orderBy={} limitToLast={}",
            url, ORDER_BY_FIELD, limit
        );

        let response = self
            .http_client
            .get(&url)
            .headers(headers)
            .query(&[
                ("orderBy", format!("\"{}\"", ORDER_BY_FIELD)),
                ("limitToLast", limit.to_string()),
            ])
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<Option<BTreeMap<String, Transaction>>>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }
}
