//! Client for the oracle question-answering proxy.
//!
//! The proxy wraps a language model behind a single POST endpoint. Failures
//! of any kind (transport, HTTP status, malformed body) collapse to the
//! fixed [`ORACLE_OFFLINE`] sentinel; callers always receive a displayable
//! string and never an `Err`.

use std::time::Duration;

use crate::models::{OracleAnswer, OracleQuestion};
use crate::utils::strip_ansi_codes;

/// Sentinel answer substituted for any oracle failure.
pub const ORACLE_OFFLINE: &str = "SYSTEM_ERROR: ORACLE_OFFLINE. PLEASE TRY AGAIN.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A remote answer source for free-text questions.
pub trait Oracle {
    fn ask(&self, question: &str) -> String;
}

/// [`Oracle`] backed by the HTTP proxy endpoint.
pub struct HttpOracle {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpOracle {
    pub fn new(endpoint: String) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { http, endpoint }
    }
}

impl Oracle for HttpOracle {
    fn ask(&self, question: &str) -> String {
        let body = OracleQuestion { question: question.to_string() };
        let result = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OracleAnswer>());
        match result {
            Ok(answer) => strip_ansi_codes(&answer.text),
            Err(e) => {
                eprintln!("Warning: oracle request failed: {}", e);
                ORACLE_OFFLINE.to_string()
            }
        }
    }
}
