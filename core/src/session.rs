//! Session lifecycle: login, logout and scoped release.
//!
//! # Design
//! A [`Session`] is created only by a successful login and is consumed by
//! [`Client::end_session`], so the type system rules out reuse after logout.
//! It is not `Clone`: exactly one call owns it. Callers that cannot thread
//! the logout through every exit path use [`SessionGuard`], which logs out
//! on drop, including while unwinding from a panic.
//!
//! Login and logout keep the `build_*` / `parse_*` split of the rest of the
//! crate so both can be exercised without a network.

use std::fmt;
use std::ops::Deref;

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::envelope::{self, EmptyBody};
use crate::error::{ApiError, Result};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Deadline, Transport};

pub const LOGIN_ACTION: &str = "LOGIN";
pub const LOGOUT_ACTION: &str = "LOGOUT";

/// Where and as whom to log in.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub endpoint: String,
    /// Tenant (administradora) identifier.
    pub imob_id: String,
    pub user_id: String,
    /// Clear-text secret. Only its digest is ever sent.
    pub user_secret: String,
}

impl Credentials {
    pub fn new(endpoint: &str, imob_id: &str, user_id: &str, user_secret: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            imob_id: imob_id.to_string(),
            user_id: user_id.to_string(),
            user_secret: user_secret.to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("endpoint", &self.endpoint)
            .field("imob_id", &self.imob_id)
            .field("user_id", &self.user_id)
            .field("user_secret", &"<redacted>")
            .finish()
    }
}

/// Body of the `LOGIN` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginInput {
    #[serde(rename = "IMOB_ID")]
    pub imob_id: String,
    #[serde(rename = "USER_ID")]
    pub user_id: String,
    /// Digest produced by [`hash_secret`].
    #[serde(rename = "USER_PASS")]
    pub user_pass: String,
}

/// Body of the `LOGIN` response. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginOutput {
    pub nome_imob: Option<String>,
    pub imob_id: Option<String>,
    pub usuario_id: Option<String>,
    pub nome: Option<String>,
    pub versao: Option<String>,
    #[serde(rename = "Client_IP")]
    pub client_ip: Option<String>,
    pub cod_filial: Option<i64>,
    pub nome_filial: Option<String>,
    pub cidade: Option<String>,
    #[serde(rename = "UF")]
    pub uf: Option<String>,
    pub max_sessions: Option<i64>,
    pub server_date_time: Option<String>,
}

/// Authenticated user and branch metadata returned by login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionProfile {
    pub usuario_id: String,
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome_imob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versao: Option<String>,
    #[serde(rename = "clientIP", skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod_filial: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome_filial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sessions: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_date_time: Option<String>,
}

/// A live, single-owner backend session.
///
/// `Session::default()` is the terminated state: it has no id, actions
/// reject it and logging it out is a no-op.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    session_id: String,
    endpoint: String,
    imob_id: String,
    #[serde(flatten)]
    profile: Option<SessionProfile>,
}

impl Session {
    /// Attach to a session id issued elsewhere. No profile is available.
    pub fn resume(endpoint: &str, imob_id: &str, session_id: &str) -> Self {
        Self {
            session_id: session_id.to_string(),
            endpoint: endpoint.to_string(),
            imob_id: imob_id.to_string(),
            profile: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.session_id
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn imob_id(&self) -> &str {
        &self.imob_id
    }

    /// `None` for resumed sessions.
    pub fn profile(&self) -> Option<&SessionProfile> {
        self.profile.as_ref()
    }

    pub fn is_active(&self) -> bool {
        !self.session_id.is_empty()
    }
}

/// Uppercase `secret` and return its MD5 digest as lowercase hex, the form
/// the backend expects in `USER_PASS`.
pub fn hash_secret(secret: &str) -> String {
    format!("{:x}", Md5::digest(secret.to_uppercase().as_bytes()))
}

/// Validate `credentials` and build the `LOGIN` request.
pub fn build_login(credentials: &Credentials) -> Result<HttpRequest> {
    if credentials.user_id.is_empty() {
        return Err(ApiError::MissingField("userId"));
    }
    if credentials.user_secret.is_empty() {
        return Err(ApiError::MissingField("userPass"));
    }

    let input = LoginInput {
        imob_id: credentials.imob_id.clone(),
        user_id: credentials.user_id.clone(),
        user_pass: hash_secret(&credentials.user_secret),
    };
    envelope::build_request(&credentials.endpoint, None, LOGIN_ACTION, &input)
}

/// Turn a `LOGIN` response into a [`Session`].
///
/// `Header.SessionId`, `Body.UsuarioId` and `Body.Nome` are required; their
/// absence on a response without an error flag is a
/// [`ApiError::MalformedResponse`]. The remaining metadata is optional.
pub fn parse_login(credentials: &Credentials, response: &HttpResponse) -> Result<Session> {
    let envelope = envelope::parse_response::<LoginOutput>(response)?;

    let session_id = envelope
        .header
        .session_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| missing("Header.SessionId"))?;
    let body = envelope.body.ok_or_else(|| missing("Body"))?;

    let profile = SessionProfile {
        usuario_id: body.usuario_id.ok_or_else(|| missing("Body.UsuarioId"))?,
        nome: body.nome.ok_or_else(|| missing("Body.Nome"))?,
        nome_imob: body.nome_imob,
        versao: body.versao,
        client_ip: body.client_ip,
        cod_filial: body.cod_filial,
        nome_filial: body.nome_filial,
        cidade: body.cidade,
        uf: body.uf,
        max_sessions: body.max_sessions,
        server_date_time: body.server_date_time,
    };

    Ok(Session {
        session_id,
        endpoint: credentials.endpoint.clone(),
        imob_id: credentials.imob_id.clone(),
        profile: Some(profile),
    })
}

/// Build the `LOGOUT` request for `session`.
pub fn build_logout(session: &Session) -> Result<HttpRequest> {
    envelope::build_request(&session.endpoint, Some(&session.session_id), LOGOUT_ACTION, &EmptyBody {})
}

pub fn parse_logout(response: &HttpResponse) -> Result<()> {
    envelope::parse_response::<EmptyBody>(response).map(|_| ())
}

fn missing(field: &str) -> ApiError {
    ApiError::MalformedResponse(format!("login response without {field}"))
}

impl<T: Transport> Client<T> {
    /// Log in with `credentials`. A failure leaves no session behind.
    pub fn new_session(&self, credentials: &Credentials, deadline: Deadline) -> Result<Session> {
        let request = build_login(credentials)?;
        let response = self.round_trip(&request, LOGIN_ACTION, deadline)?;
        let session = parse_login(credentials, &response)?;

        tracing::info!(imob_id = %session.imob_id, user_id = %credentials.user_id, "session opened");
        Ok(session)
    }

    /// Log `session` out. Succeeds without a request when it has no id.
    pub fn end_session(&self, session: Session, deadline: Deadline) -> Result<()> {
        if !session.is_active() {
            return Ok(());
        }

        let request = build_logout(&session)?;
        let response = self.round_trip(&request, LOGOUT_ACTION, deadline)?;
        parse_logout(&response)?;

        tracing::info!(imob_id = %session.imob_id, "session closed");
        Ok(())
    }

    /// Log in and wrap the session in a guard that logs out when dropped.
    pub fn open_session(&self, credentials: &Credentials, deadline: Deadline) -> Result<SessionGuard<'_, T>> {
        let session = self.new_session(credentials, deadline)?;
        Ok(SessionGuard { client: self, session })
    }

    /// Run `f` inside a fresh session and log out afterwards, whatever `f`
    /// returned.
    ///
    /// The closure's result is returned as-is; a failed logout is only
    /// logged, so it never masks the outcome of the action.
    pub fn with_session<R>(
        &self,
        credentials: &Credentials,
        deadline: Deadline,
        f: impl FnOnce(&Session) -> Result<R>,
    ) -> Result<R> {
        let guard = self.open_session(credentials, deadline)?;
        let result = f(&*guard);
        if let Err(err) = guard.end() {
            tracing::warn!(imob_id = %credentials.imob_id, error = %err, "logout failed");
        }
        result
    }
}

/// Owns a [`Session`] and guarantees its logout.
///
/// Call [`SessionGuard::end`] to observe the logout result; otherwise the
/// logout runs on drop under the configured release timeout and failures
/// are logged.
pub struct SessionGuard<'c, T: Transport> {
    client: &'c Client<T>,
    session: Session,
}

impl<T: Transport> SessionGuard<'_, T> {
    /// Log out now and report the outcome.
    pub fn end(mut self) -> Result<()> {
        let session = std::mem::take(&mut self.session);
        let deadline = Deadline::after(self.client.config().release_timeout);
        self.client.end_session(session, deadline)
    }
}

impl<T: Transport> Deref for SessionGuard<'_, T> {
    type Target = Session;

    fn deref(&self) -> &Session {
        &self.session
    }
}

impl<T: Transport> Drop for SessionGuard<'_, T> {
    fn drop(&mut self) {
        let session = std::mem::take(&mut self.session);
        if !session.is_active() {
            return;
        }
        let imob_id = session.imob_id.clone();
        let deadline = Deadline::after(self.client.config().release_timeout);
        if let Err(err) = self.client.end_session(session, deadline) {
            tracing::warn!(%imob_id, error = %err, "logout on drop failed");
        }
    }
}
