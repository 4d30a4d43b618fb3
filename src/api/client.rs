use crate::error::AppError;
use serde_json::Value;

pub struct FetchClient {
    calls: u64,
}

impl FetchClient {
    pub fn new() -> Self {
        FetchClient { calls: 0 }
    }

    /// Number of fetch attempts made by this client, failed ones included.
    pub fn calls(&self) -> u64 {
        self.calls
    }

    /// Performs one blocking GET and parses the body as JSON.
    ///
    /// The attempt is counted before the outcome is known. Transport
    /// failures are never retried here; the caller owns that policy.
    pub fn fetch(&mut self, url: &str) -> Result<Value, AppError> {
        self.calls += 1;

        let body = ureq::get(url)
            .set("User-Agent", "featured_scout/0.1.0")
            .call()
            .map_err(|e| AppError::Transport(e.to_string()))?
            .into_string()
            .map_err(|e| AppError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| AppError::Transport(e.to_string()))
    }
}
