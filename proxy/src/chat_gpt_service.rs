use crate::config::Config;
use crate::error::UpstreamError;
use crate::models::*;
use anyhow::Result;
use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;

/// How much of an upstream error body is kept for the log line.
const ERROR_BODY_LOG_LIMIT: usize = 512;

/// Client for the external question-answering API.
///
/// Holds one `reqwest::Client`, so all requests share its connection pool.
pub struct ChatGptService {
    client: Client,
    api_url: Url,
    api_key: String,
    timeout: Duration,
}

impl ChatGptService {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            timeout: config.upstream_timeout,
        })
    }

    pub fn outbound_query(&self, questions: &Questions) -> OutboundQuery {
        OutboundQuery::new(&self.api_key, questions)
    }

    /// Forward the questions and return whatever JSON the API answered with.
    ///
    /// `Ok(None)` means the API answered but not with JSON. Every failure is
    /// logged here exactly once.
    pub async fn ask(&self, questions: &Questions) -> Result<Option<Value>, UpstreamError> {
        let query = self.outbound_query(questions);

        log::debug!(
            "Forwarding {} question(s) to {}",
            questions.len(),
            self.api_url
        );

        let response = self
            .client
            .get(self.api_url.clone())
            .query(&query)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = self.error_body_excerpt(response).await;
            let err = UpstreamError::Status { status };
            log::error!("Communication with ChatGPT API failed: {}; body: {}", err, body);
            return Err(err);
        }

        let bytes = response.bytes().await.map_err(|e| self.transport_error(e))?;

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(answers) => Ok(Some(answers)),
            Err(e) => {
                log::error!("Cannot deserialize ChatGPT response: {}", e);
                Ok(None)
            }
        }
    }

    /// First [`ERROR_BODY_LOG_LIMIT`] bytes of an error body, with the
    /// credential masked. Reading stops once enough has arrived.
    async fn error_body_excerpt(&self, mut response: reqwest::Response) -> String {
        let wanted = ERROR_BODY_LOG_LIMIT + self.api_key.len();
        let mut buf = Vec::new();
        while buf.len() < wanted {
            match response.chunk().await {
                Ok(Some(chunk)) => buf.extend_from_slice(&chunk),
                _ => break,
            }
        }
        buf.truncate(wanted);

        let mut excerpt = String::from_utf8_lossy(&buf).replace(&self.api_key, "<redacted>");
        if excerpt.len() > ERROR_BODY_LOG_LIMIT {
            let mut end = ERROR_BODY_LOG_LIMIT;
            while !excerpt.is_char_boundary(end) {
                end -= 1;
            }
            excerpt.truncate(end);
            excerpt.push_str("...");
        }
        excerpt
    }

    fn transport_error(&self, e: reqwest::Error) -> UpstreamError {
        // The request URL carries the credential in its query string.
        let e = e.without_url();
        let err = if e.is_timeout() {
            UpstreamError::Timeout(self.timeout.as_secs())
        } else {
            UpstreamError::Transport(e)
        };
        log::error!("Communication with ChatGPT API failed: {}", err);
        err
    }
}
