//! Live server status: response model, failure substitution and the
//! bookkeeping behind the periodic poll.
//!
//! Overlapping requests are possible because the poll timer does not wait for
//! the previous response. [`StatusTracker`] resolves them with an
//! ignore-stale policy: every request carries a [`Ticket`] and a response is
//! applied only if its ticket is newer than the last one applied.
use crate::constants::STATUS_ENDPOINT;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub now: u32,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub max: u32,
}

/// Counts may be reported as `null`; treat them as zero.
fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_default())
}

/// One status observation. Extra response fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatus {
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub players: Option<Players>,
    #[serde(default)]
    pub error: Option<String>,
    /// Milliseconds since the Unix epoch when this observation was taken
    #[serde(default)]
    pub last_updated_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("{0}")]
    Transport(String),
    #[error("HTTP {0}")]
    Http(u16),
    #[error("invalid status response: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for StatusError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl ServerStatus {
    /// Parse a successful response body.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::Parse`] when the body is not a JSON object of
    /// the expected shape.
    pub fn from_json(body: &str, now_ms: u64) -> Result<Self, StatusError> {
        let mut status: Self = serde_json::from_str(body)?;
        status.last_updated_ms = now_ms;
        Ok(status)
    }

    /// Synthetic status substituted for a failed poll.
    #[must_use]
    pub fn offline(error: &StatusError, now_ms: u64) -> Self {
        Self {
            online: false,
            players: Some(Players::default()),
            error: Some(error.to_string()),
            last_updated_ms: now_ms,
        }
    }

    /// Fold a fetch result into a status; failures become offline.
    #[must_use]
    pub fn from_fetch(result: Result<String, StatusError>, now_ms: u64) -> Self {
        match result.and_then(|body| Self::from_json(&body, now_ms)) {
            Ok(status) => status,
            Err(err) => {
                log::warn!("server status unavailable: {err}");
                Self::offline(&err, now_ms)
            }
        }
    }

    #[must_use]
    pub fn player_count(&self) -> u32 {
        self.players.map_or(0, |players| players.now)
    }
}

/// What the status box shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusDisplay {
    Loading,
    Online { players: u32 },
    Offline,
}

impl StatusDisplay {
    #[must_use]
    pub fn from_status(status: Option<&ServerStatus>) -> Self {
        match status {
            None => Self::Loading,
            Some(status) if status.online => Self::Online {
                players: status.player_count(),
            },
            Some(_) => Self::Offline,
        }
    }
}

/// Status endpoint URL for a server address.
#[must_use]
pub fn status_url(address: &str) -> String {
    format!("{STATUS_ENDPOINT}?ip={}", urlencoding::encode(address))
}

/// Sequence number of one status request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Poll bookkeeping: issues tickets, drops stale or post-stop responses and
/// keeps the latest applied status.
#[derive(Debug, Default)]
pub struct StatusTracker {
    issued: u64,
    applied: Option<Ticket>,
    latest: Option<ServerStatus>,
    stopped: bool,
}

impl StatusTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request. Returns `None` once the tracker is stopped.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.stopped {
            return None;
        }
        self.issued += 1;
        Some(Ticket(self.issued))
    }

    /// Finish the request for `ticket`.
    ///
    /// Returns the status that is now current, or `None` if the response was
    /// discarded because it is stale or the tracker was stopped.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<String, StatusError>,
        now_ms: u64,
    ) -> Option<&ServerStatus> {
        if self.stopped {
            return None;
        }
        if self.applied.is_some_and(|applied| ticket <= applied) {
            log::debug!("dropping stale status response {ticket:?}");
            return None;
        }
        self.applied = Some(ticket);
        self.latest = Some(ServerStatus::from_fetch(result, now_ms));
        self.latest.as_ref()
    }

    /// Stop accepting requests and responses. Idempotent.
    pub const fn stop(&mut self) {
        self.stopped = true;
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        !self.stopped
    }

    #[must_use]
    pub const fn latest(&self) -> Option<&ServerStatus> {
        self.latest.as_ref()
    }
}
