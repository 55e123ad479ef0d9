//! Blocking HTTP transport backed by ureq.

use echo_core::{HttpRequest, HttpResponse, Transport, TransportError};

/// Executes `HttpRequest`s with a shared ureq agent.
///
/// Status-code-as-error is disabled so 4xx/5xx responses come back as data
/// and the core decides what counts as failure.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&mut self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.agent.post(&req.url);
        for (name, value) in &req.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let body = req.body.unwrap_or_default();

        let mut response = builder.send(body.as_bytes()).map_err(TransportError::new)?;

        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(TransportError::new)?;

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body,
        })
    }
}
