use super::ApiError;
use crate::libs::credentials::Credentials;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

const REFRESH_URL: &str = "auth/v1/token";

/// Client for the store's token endpoint.
pub struct AuthClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

/// Tokens returned by a successful refresh.
///
/// Some deployments rotate the refresh token on every exchange, others leave
/// it out of the response. Callers keep their old refresh token when the
/// field is absent.
#[derive(Deserialize, Debug)]
pub struct TokenPair {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl AuthClient {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            client: Client::new(),
            base_url: credentials.endpoint_url.trim_end_matches('/').to_string(),
            api_key: credentials.api_key.clone(),
        }
    }

    /// Exchanges the refresh token for a fresh access token.
    ///
    /// A 400 from this endpoint means the refresh token itself was rejected,
    /// so it maps to `Unauthorized` the same as a 401.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiError> {
        let res = self
            .client
            .post(format!("{}/{}", self.base_url, REFRESH_URL))
            .query(&[("grant_type", "refresh_token")])
            .header("apikey", &self.api_key)
            .json(&RefreshRequest { refresh_token })
            .send()
            .await?;

        match res.status() {
            StatusCode::UNAUTHORIZED | StatusCode::BAD_REQUEST | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
            status if status.is_success() => {
                let body = res.text().await?;
                Ok(serde_json::from_str(&body)?)
            }
            status => Err(ApiError::Status(status)),
        }
    }
}
