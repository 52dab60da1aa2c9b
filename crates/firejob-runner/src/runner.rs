//! One-shot job execution.

use std::collections::BTreeMap;
use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use tracing::{debug, warn};

use firejob_core::Job;

use crate::body::compile_body;
use crate::error::RequestError;
use crate::response::ResponseData;

/// Hook run on the raw body before JSON normalization.
pub type BodyCompiler = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Executes a job's HTTP request exactly once.
///
/// [`Runner::run`] never fails: every outcome is encoded in the returned
/// [`ResponseData`]. The client is plain: unauthenticated, one attempt,
/// platform-default timeout and redirect policy. Retry policy, if any,
/// belongs to the caller inspecting the result code.
pub struct Runner {
    client: Client,
    body_compiler: Option<BodyCompiler>,
}

impl Runner {
    /// Create a runner with a default client.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            body_compiler: None,
        }
    }

    /// Use a preconfigured client.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Install a body-compilation hook, run before JSON normalization.
    ///
    /// This is the templating seam: substitute variables or expand the raw
    /// body here and the result is still normalized to canonical JSON.
    pub fn with_body_compiler<F>(mut self, compiler: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.body_compiler = Some(Arc::new(compiler));
        self
    }

    /// Execute the job's request and capture the outcome.
    pub async fn run(&self, job: &Job) -> ResponseData {
        let spec = &job.request;

        let raw = match &self.body_compiler {
            Some(compiler) => compiler(&spec.body),
            None => spec.body.clone(),
        };
        let payload = match compile_body(&raw) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Job '{}' body rejected: {}", job.id(), e);
                return ResponseData::request_error(e.to_string());
            }
        };

        let method = match Method::from_bytes(spec.method.to_uppercase().as_bytes()) {
            Ok(method) => method,
            Err(_) => {
                let e = RequestError::InvalidMethod(spec.method.clone());
                warn!("Job '{}' request rejected: {}", job.id(), e);
                return ResponseData::request_error(e.to_string());
            }
        };

        debug!("Job '{}': {} {}", job.id(), method, spec.url);

        let request = self
            .client
            .request(method, spec.url.as_str())
            .header(CONTENT_TYPE, format!("{}; charset=utf-8", spec.content_type))
            .body(payload);

        match request.send().await {
            Ok(response) => Self::capture(response).await,
            Err(e) => {
                warn!("Job '{}' transport failure: {}", job.id(), e);
                ResponseData::request_error(e.to_string())
            }
        }
    }

    /// Fold a received HTTP response into the result shape.
    ///
    /// Any status code counts as a completed execution. Header and body
    /// read failures land in the corresponding field as error text instead
    /// of aborting the result.
    async fn capture(response: reqwest::Response) -> ResponseData {
        let status = response.status();
        let code = status.as_u16();
        let status_line = match status.canonical_reason() {
            Some(reason) => format!("{} {}", code, reason),
            None => code.to_string(),
        };

        let headers: BTreeMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_string(),
                    v.to_str().unwrap_or("").to_string(),
                )
            })
            .collect();
        let header = match serde_json::to_string(&headers) {
            Ok(header) => header,
            Err(e) => e.to_string(),
        };

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => e.to_string(),
        };

        ResponseData {
            code,
            status: status_line,
            body,
            header,
        }
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
