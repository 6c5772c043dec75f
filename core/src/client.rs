//! Blocking client that executes actions through a [`Transport`].
//!
//! # Design
//! `Client` owns a transport and its configuration and nothing else: no
//! session, no cache. Every operation receives the session and deadline it
//! runs under, which is what lets one client be shared by all workers of a
//! parallel batch. Request building and response parsing stay in
//! [`envelope`](crate::envelope); this module only sequences them around the
//! network round-trip.

use std::time::Duration;

use crate::action::Action;
use crate::config::ClientConfig;
use crate::envelope;
use crate::error::{ApiError, Result};
use crate::http::{HttpRequest, HttpResponse};
use crate::session::Session;
use crate::transport::{Deadline, Transport, UreqTransport};

#[derive(Debug, Clone)]
pub struct Client<T = UreqTransport> {
    transport: T,
    config: ClientConfig,
}

impl Client<UreqTransport> {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(&config.user_agent);
        Self { transport, config }
    }

    /// Client configured from the `IMOBILIAR_*` environment variables.
    pub fn from_env() -> Self {
        Self::with_config(ClientConfig::from_env())
    }
}

impl Default for Client<UreqTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute `A` inside `session`.
    ///
    /// Fails with [`ApiError::InvalidBase`] when the session has no id, and
    /// with [`ApiError::MalformedResponse`] when the backend reports success
    /// without a `Body`.
    pub fn run<A: Action>(&self, session: &Session, input: &A::Input, deadline: Deadline) -> Result<A::Output> {
        if !session.is_active() {
            return Err(ApiError::InvalidBase);
        }

        let request = envelope::build_request(session.endpoint(), Some(session.id()), A::NAME, input)?;
        let response = self.round_trip(&request, A::NAME, deadline)?;
        let envelope = envelope::parse_response::<A::Output>(&response)?;

        envelope
            .body
            .ok_or_else(|| ApiError::MalformedResponse(format!("{} response has no Body", A::NAME)))
    }

    /// Send `request`, bounded by whichever of `deadline` and the configured
    /// request timeout is closer.
    pub(crate) fn round_trip(&self, request: &HttpRequest, action: &str, deadline: Deadline) -> Result<HttpResponse> {
        let timeout = tighter(deadline.remaining()?, self.config.request_timeout);

        tracing::debug!(action, url = %request.url, bytes = request.body.len(), "sending request");
        let response = self.transport.execute(request, timeout)?;
        tracing::debug!(action, status = response.status, bytes = response.body.len(), "received response");

        Ok(response)
    }
}

fn tighter(a: Option<Duration>, b: Option<Duration>) -> Option<Duration> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
