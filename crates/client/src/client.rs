use meet_profile::{is_valid_gmt_offset, MeetInfo, RawProfile};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Default profile store, used when `MEET_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "https://api.meet.dev";

/// Roster response envelope: the store wraps the entry list in `results`.
#[derive(Debug, Deserialize)]
struct RosterResponse {
    #[serde(default)]
    results: Vec<RawProfile>,
}

/// Client for the remote profile store.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct MeetClient {
    http: reqwest::Client,
    base_url: String,
}

impl MeetClient {
    /// Build a client against `base_url` (trailing slashes ignored).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, base_url })
    }

    /// Build a client from `MEET_API_URL`, falling back to
    /// [`DEFAULT_API_URL`].
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("MEET_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the full roster of raw participant payloads.
    ///
    /// Entries with missing nested fields come back as-is; eligibility is
    /// the directory's concern, not the transport's.
    pub async fn fetch_roster(&self) -> Result<Vec<RawProfile>> {
        let url = self.url("/users");
        log::debug!("GET {url}");

        let response = self.http.get(&url).send().await?.error_for_status()?;
        let body: RosterResponse = response.json().await?;

        log::info!("fetched roster: {} entries", body.results.len());
        Ok(body.results)
    }

    /// Fetch one participant's profile payload, to pre-populate the edit
    /// form. `None` when nothing has been submitted yet.
    pub async fn fetch_meet_info(&self, username: &str) -> Result<Option<MeetInfo>> {
        let url = self.url(&format!("/users/{username}/forms/meet_info"));
        log::debug!("GET {url}");

        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let info: Option<MeetInfo> = response.error_for_status()?.json().await?;
        Ok(info)
    }

    /// Submit an edited profile payload.
    ///
    /// The timezone offset is validated first; on mismatch the submission is
    /// blocked locally and no request is issued. One request per call, no
    /// retry, no double-submit guard.
    pub async fn submit_meet_info(&self, username: &str, info: &MeetInfo) -> Result<()> {
        match info.timezone_offset.as_deref() {
            Some(offset) if is_valid_gmt_offset(offset) => {}
            other => {
                return Err(ClientError::InvalidTimezone {
                    value: other.unwrap_or("").to_string(),
                })
            }
        }

        let url = self.url(&format!("/users/{username}/forms/meet_info"));
        log::debug!("PUT {url}");

        self.http
            .put(&url)
            .json(info)
            .send()
            .await?
            .error_for_status()?;

        log::info!("submitted profile for '{username}'");
        Ok(())
    }
}
