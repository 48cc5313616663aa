use serde_json::Value;
use tracing::error;

use crate::types::Command;

/// Shown when the user triggers a lookup with nothing typed in.
pub const EMPTY_PROMPT: &str = "Please enter a Spotify track URL or ID.";

/// Fixed diagnostic shown for any failed lookup; the underlying error text
/// is appended on the next line.
pub const REMEDIATION: &str = "Failed to fetch track data. Make sure the backend \
is running (http://localhost:5050 by default) and the track reference is valid.";

#[derive(Debug)]
pub enum LookupError {
    Network(String),
    Status(u16),
    Parse(String),
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::Network(msg) => write!(f, "Network error: {}", msg),
            LookupError::Status(code) => write!(f, "HTTP error! status: {}", code),
            LookupError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for LookupError {}

/// Thin client for the local track metadata backend. The base URL is passed
/// in explicitly so tests can point it at a mock server.
pub struct TrackClient {
    base_url: String,
    client: reqwest::Client,
}

impl TrackClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Issues one GET against the backend and deserializes the body as JSON.
    /// No headers, no auth, no timeout, no retry.
    pub async fn fetch_json(&self, path_and_query: &str) -> Result<Value, LookupError> {
        let url = format!("{}{}", self.base_url, path_and_query);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Network(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| LookupError::Parse(format!("Invalid JSON response: {}", e)))
    }
}

/// Runs one parsed console command against the backend and renders the
/// outcome as display text. Success pretty-prints the raw JSON payload;
/// any failure collapses into the fixed remediation message plus the
/// error's own text, with details logged for debugging.
pub async fn run_lookup(client: &TrackClient, command: Command) -> String {
    let path = match command {
        Command::Empty | Command::Quit => return EMPTY_PROMPT.to_string(),
        Command::Lookup { endpoint, track_id } => {
            format!("/{}/{}", endpoint.path_segment(), track_id)
        }
        Command::Search { query } => {
            format!("/search?q={}&limit=10", urlencoding::encode(&query))
        }
    };

    match client.fetch_json(&path).await {
        Ok(value) => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
        }
        Err(e) => {
            error!("Lookup failed for {}: {}", path, e);
            format!("{}\n{}", REMEDIATION, e)
        }
    }
}
