//! Executes `HttpRequest` values against the network.
//!
//! # Design
//! The rest of the crate only builds and parses plain data. `Transport` is
//! the single seam where I/O happens, which keeps the session and batch
//! logic testable with scripted transports. `UreqTransport` is the default,
//! blocking implementation: every batch worker owns its call stack, so a
//! synchronous client keeps the concurrency model explicit.

use std::time::{Duration, Instant};

use crate::error::{ApiError, Result};
use crate::http::{HttpRequest, HttpResponse};

/// Point in time after which a call must not continue.
///
/// `Deadline::none()` never expires. Deadlines are `Copy` so the same value
/// can be threaded through login and the wrapped action of one batch entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn at(instant: Instant) -> Self {
        Self(Some(instant))
    }

    /// Deadline `timeout` from now. Saturates to "never" on overflow.
    pub fn after(timeout: Duration) -> Self {
        Self(Instant::now().checked_add(timeout))
    }

    pub fn is_expired(&self) -> bool {
        self.0.is_some_and(|at| Instant::now() >= at)
    }

    /// Time left before the deadline, `None` when unbounded.
    ///
    /// Fails with [`ApiError::DeadlineExceeded`] once the deadline has passed.
    pub fn remaining(&self) -> Result<Option<Duration>> {
        match self.0 {
            None => Ok(None),
            Some(at) => {
                let left = at.saturating_duration_since(Instant::now());
                if left.is_zero() {
                    Err(ApiError::DeadlineExceeded)
                } else {
                    Ok(Some(left))
                }
            }
        }
    }
}

/// Performs one HTTP round-trip.
///
/// Implementations must return the response whatever its status code; the
/// backend reports failures inside the body.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest, timeout: Option<Duration>) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest, timeout: Option<Duration>) -> Result<HttpResponse> {
        (**self).execute(request, timeout)
    }
}

/// Blocking transport backed by a shared `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    user_agent: String,
}

impl UreqTransport {
    pub fn new(user_agent: &str) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            user_agent: user_agent.to_string(),
        }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest, timeout: Option<Duration>) -> Result<HttpResponse> {
        let mut builder = self
            .agent
            .post(&request.url)
            .config()
            .timeout_global(timeout)
            .build()
            .header("user-agent", self.user_agent.as_str());
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        let mut response = builder.send(request.body.as_str()).map_err(map_ureq_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let body = response.body_mut().read_to_string().map_err(map_ureq_error)?;

        Ok(HttpResponse { status, headers, body })
    }
}

fn map_ureq_error(err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Timeout(_) => ApiError::DeadlineExceeded,
        other => ApiError::Transport(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_deadline_never_expires() {
        let deadline = Deadline::none();
        assert!(!deadline.is_expired());
        assert_eq!(deadline.remaining().unwrap(), None);
    }

    #[test]
    fn past_deadline_reports_exceeded() {
        let deadline = Deadline::at(Instant::now() - Duration::from_millis(5));
        assert!(deadline.is_expired());
        assert!(matches!(deadline.remaining(), Err(ApiError::DeadlineExceeded)));
    }

    #[test]
    fn future_deadline_reports_time_left() {
        let deadline = Deadline::after(Duration::from_secs(30));
        let left = deadline.remaining().unwrap().unwrap();
        assert!(left <= Duration::from_secs(30));
        assert!(left > Duration::from_secs(25));
    }
}
