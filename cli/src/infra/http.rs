//! Infrastructure implementation of the `HttpTransport` port.

use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::ports::{HttpRequest, HttpResponse, HttpTransport, RequestBody};

/// User agent sent with every request (GitHub rejects requests without one).
pub const USER_AGENT: &str = concat!("sfci/", env!("CARGO_PKG_VERSION"));

/// Connect timeout; reads are left unbounded like the rest of the tooling.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Production transport backed by a blocking `ureq` agent.
///
/// Each request runs on tokio's blocking pool so the async callers never
/// block a runtime worker.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    #[must_use]
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(CONNECT_TIMEOUT)
                .user_agent(USER_AGENT)
                .build(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || send_blocking(&agent, &request))
            .await
            .context("HTTP worker task failed")?
    }
}

fn send_blocking(agent: &ureq::Agent, request: &HttpRequest) -> Result<HttpResponse> {
    let method = request.method.as_str();
    tracing::debug!(method, url = %request.url, "sending request");

    let mut req = agent.request(method, &request.url);
    for (name, value) in &request.headers {
        req = req.set(name, value);
    }

    let result = match &request.body {
        RequestBody::Json(body) => req.set("Content-Type", "application/json").send_string(body),
        RequestBody::Form(fields) => {
            let pairs: Vec<(&str, &str)> = fields
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            req.send_form(&pairs)
        }
    };

    let response = match result {
        Ok(resp) => resp,
        Err(ureq::Error::Status(_, resp)) => resp,
        Err(ureq::Error::Transport(t)) => {
            anyhow::bail!("{method} {} failed: {t}", request.url)
        }
    };

    let status = response.status();
    let body = response
        .into_string()
        .with_context(|| format!("reading response of {method} {}", request.url))?;
    tracing::debug!(status, bytes = body.len(), "response received");
    Ok(HttpResponse { status, body })
}
