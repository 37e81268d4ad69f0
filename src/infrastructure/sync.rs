//! HTTP client that posts a serialized journal to a sync server

use crate::domain::{wire, Journal};
use crate::error::{DevjError, Result};
use reqwest::blocking::{Client, Request};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, info};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and as whom to sync
#[derive(Debug, Clone)]
pub struct SyncTarget {
    pub url: String,
    pub user: String,
    pub password: String,
}

impl SyncTarget {
    /// Check the target before anything is sent.
    ///
    /// Credentials travel with basic auth, so only https is accepted.
    pub fn validate(&self) -> Result<()> {
        if self.user.is_empty() || self.password.is_empty() {
            return Err(DevjError::Sync(
                "need both a user and a password".to_string(),
            ));
        }
        if !self.url.starts_with("https://") {
            return Err(DevjError::Sync(format!(
                "the url must use https (so must start with \"https://\"), got '{}'",
                self.url
            )));
        }
        Ok(())
    }
}

/// Blocking client for the sync endpoint
pub struct SyncClient {
    client: Client,
}

impl SyncClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(SyncClient { client })
    }

    /// Build the POST request carrying the whole journal.
    pub fn build_request(&self, target: &SyncTarget, journal: &Journal) -> Result<Request> {
        target.validate()?;
        let body = wire::to_json(journal)?;

        let request = self
            .client
            .post(&target.url)
            .basic_auth(&target.user, Some(&target.password))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .build()?;
        Ok(request)
    }

    /// Send the journal and return the response status code.
    ///
    /// Non-success statuses are reported as `Sync` errors.
    pub fn send(&self, target: &SyncTarget, journal: &Journal) -> Result<u16> {
        let request = self.build_request(target, journal)?;
        debug!(url = %target.url, entries = journal.len(), "posting journal");

        let response = self.client.execute(request)?;
        let status = response.status();
        info!(status = status.as_u16(), "sync finished");

        if !status.is_success() {
            return Err(DevjError::Sync(format!(
                "server answered with status {}",
                status
            )));
        }
        Ok(status.as_u16())
    }
}
