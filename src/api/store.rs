use super::ApiError;
use crate::libs::catalog::{Tool, UsageEntry};
use crate::libs::credentials::Credentials;
use chrono::{DateTime, Utc};
use reqwest::{header::AUTHORIZATION, Client, StatusCode};
use serde::Serialize;

const TOOLS_URL: &str = "rest/v1/tools";

/// Client for the tool rows in the remote store.
///
/// Every request carries the project API key plus the user's access token.
/// The client is rebuilt from current credentials per sync round, so a token
/// refresh mid-round takes effect on the retry.
pub struct StoreClient {
    client: Client,
    base_url: String,
    api_key: String,
    access_token: String,
}

/// Fields written back to a tool row after usage is counted.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UsagePatch {
    pub times_used: i64,
    pub last_used_at: Option<DateTime<Utc>>,
    pub usage_history: Vec<UsageEntry>,
    pub updated_at: DateTime<Utc>,
}

impl StoreClient {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            client: Client::new(),
            base_url: credentials.endpoint_url.trim_end_matches('/').to_string(),
            api_key: credentials.api_key.clone(),
            access_token: credentials.access_token.clone(),
        }
    }

    /// Fetches the complete tool catalog.
    pub async fn fetch_tools(&self) -> Result<Vec<Tool>, ApiError> {
        let res = self
            .client
            .get(format!("{}/{}", self.base_url, TOOLS_URL))
            .query(&[("select", "*")])
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token))
            .send()
            .await?;

        match res.status() {
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            status if status.is_success() => {
                let body = res.text().await?;
                Ok(serde_json::from_str(&body)?)
            }
            status => Err(ApiError::Status(status)),
        }
    }

    /// Fetches a single tool by id.
    ///
    /// The store answers row filters with a JSON array; an empty array means
    /// the tool was deleted remotely and maps to `ToolNotFound`.
    pub async fn fetch_tool(&self, tool_id: &str) -> Result<Tool, ApiError> {
        let filter = format!("eq.{}", tool_id);
        let res = self
            .client
            .get(format!("{}/{}", self.base_url, TOOLS_URL))
            .query(&[("id", filter.as_str()), ("select", "*")])
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token))
            .send()
            .await?;

        match res.status() {
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            status if status.is_success() => {
                let body = res.text().await?;
                let tools: Vec<Tool> = serde_json::from_str(&body)?;
                tools.into_iter().next().ok_or_else(|| ApiError::ToolNotFound(tool_id.to_string()))
            }
            status => Err(ApiError::Status(status)),
        }
    }

    /// Patches a tool row with updated usage fields.
    pub async fn update_usage(&self, tool_id: &str, patch: &UsagePatch) -> Result<(), ApiError> {
        let filter = format!("eq.{}", tool_id);
        let res = self
            .client
            .patch(format!("{}/{}", self.base_url, TOOLS_URL))
            .query(&[("id", filter.as_str())])
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token))
            .header("Prefer", "return=minimal")
            .json(patch)
            .send()
            .await?;

        match res.status() {
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            status if status.is_success() => Ok(()),
            status => Err(ApiError::Status(status)),
        }
    }
}
