//! In-memory transport for unit tests.

use std::sync::Mutex;

use url::Url;

use crate::error::{ItunesError, Result};
use crate::transport::Transport;

/// Answers every request with the same body (or the same failure) and keeps
/// the requested URLs.
pub struct CannedTransport {
    response: std::result::Result<String, String>,
    requests: Mutex<Vec<Url>>,
}

impl CannedTransport {
    pub fn new(body: &str) -> Self {
        Self {
            response: Ok(body.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for CannedTransport {
    fn get(&self, url: &Url) -> Result<String> {
        self.requests.lock().unwrap().push(url.clone());
        self.response
            .clone()
            .map_err(ItunesError::NetworkCommunication)
    }
}
