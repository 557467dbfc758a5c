//! Remote store credentials and their encrypted persistence.
//!
//! Credentials arrive over the bridge or through `tusk connect` and are kept
//! encrypted in the local state store. Validation happens before anything is
//! written so a rejected connect leaves prior state untouched.

use crate::libs::kv::KvStore;
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use crate::{msg_bail_anyhow, msg_warning};
use anyhow::Result;
use base64::prelude::*;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use url::Url;

/// State store key holding the encrypted credential blob.
pub const CREDENTIALS_KEY: &str = "credentials";

/// Connection parameters for the remote tool store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Credentials {
    /// Base URL of the remote store, e.g. `https://abc.supabase.co`.
    pub endpoint_url: String,
    /// Project API key sent with every request.
    pub api_key: String,
    /// Short-lived JWT authorizing the current user.
    pub access_token: String,
    /// Long-lived token used to mint fresh access tokens.
    pub refresh_token: String,
}

impl Credentials {
    /// Checks the shape of each field without touching the network.
    ///
    /// The endpoint must parse as an http(s) URL, the API key and refresh
    /// token must be non-empty, and the access token must have the three
    /// dot-separated segments of a JWT.
    pub fn validate(&self) -> Result<()> {
        match Url::parse(&self.endpoint_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            _ => msg_bail_anyhow!(Message::InvalidEndpointUrl),
        }
        if self.api_key.trim().is_empty() {
            msg_bail_anyhow!(Message::MissingApiKey);
        }
        if !looks_like_jwt(&self.access_token) {
            msg_bail_anyhow!(Message::MalformedAccessToken);
        }
        if self.refresh_token.trim().is_empty() {
            msg_bail_anyhow!(Message::MissingRefreshToken);
        }
        Ok(())
    }

    /// Loads and decrypts stored credentials.
    ///
    /// A missing entry yields `Ok(None)`. An entry that fails to decrypt or
    /// parse also yields `Ok(None)` after a warning, so a corrupted blob
    /// degrades to the disconnected state instead of wedging startup.
    pub fn load<S: KvStore>(store: &S, secret: &Secret) -> Result<Option<Credentials>> {
        let Some(encoded) = store.get(CREDENTIALS_KEY)? else {
            return Ok(None);
        };
        let json = match secret.decrypt(&encoded) {
            Ok(json) => json,
            Err(e) => {
                msg_warning!(Message::StateDecodeFailed(e.to_string()));
                return Ok(None);
            }
        };
        match serde_json::from_str(&json) {
            Ok(credentials) => Ok(Some(credentials)),
            Err(e) => {
                msg_warning!(Message::StateDecodeFailed(e.to_string()));
                Ok(None)
            }
        }
    }

    /// Encrypts and persists the credentials.
    pub fn store<S: KvStore>(&self, store: &mut S, secret: &Secret) -> Result<()> {
        let json = serde_json::to_string(self)?;
        store.set(CREDENTIALS_KEY, &secret.encrypt(&json)?)
    }

    /// True when the access token's `exp` claim falls within the next
    /// `seconds`. Tokens without a readable `exp` report false; the 401
    /// retry path covers those.
    pub fn expires_within(&self, seconds: i64) -> bool {
        match jwt_expiry(&self.access_token) {
            Some(exp) => Utc::now().timestamp() >= exp - seconds,
            None => false,
        }
    }
}

fn looks_like_jwt(token: &str) -> bool {
    let segments: Vec<&str> = token.split('.').collect();
    segments.len() == 3 && segments.iter().all(|s| !s.is_empty())
}

/// Reads the `exp` claim out of a JWT payload without verifying the signature.
fn jwt_expiry(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let decoded = BASE64_URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&decoded).ok()?;
    claims.get("exp")?.as_i64()
}
