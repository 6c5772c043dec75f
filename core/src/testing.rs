//! Scripted transport for unit tests.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

type Responder = Box<dyn Fn(&str, &serde_json::Value) -> HttpResponse + Send + Sync>;

/// Answers each request with `respond(action, envelope)` and records it.
pub(crate) struct ScriptedTransport {
    respond: Responder,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new<F>(respond: F) -> Self
    where
        F: Fn(&str, &serde_json::Value) -> HttpResponse + Send + Sync + 'static,
    {
        Self {
            respond: Box::new(respond),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Backend that accepts every login with session id `S-<USER_ID>`, every
    /// logout, and answers other actions with `body`.
    pub fn backend(body: serde_json::Value) -> Self {
        Self::new(move |action, envelope| match action {
            "LOGIN" => {
                let user = envelope["Body"]["USER_ID"].as_str().unwrap_or_default();
                login_ok(&format!("S-{user}"), user)
            }
            "LOGOUT" => HttpResponse::ok(r#"{"Header":{"Action":"LOGOUT","Error":false}}"#),
            _ => HttpResponse::ok(serde_json::json!({"Header": {"Error": false}, "Body": body}).to_string()),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn actions(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| action_of(&serde_json::from_str(&r.body).unwrap_or_default()))
            .collect()
    }

    pub fn count(&self, action: &str) -> usize {
        self.actions().iter().filter(|a| *a == action).count()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: &HttpRequest, _timeout: Option<Duration>) -> Result<HttpResponse> {
        let envelope: serde_json::Value = serde_json::from_str(&request.body).unwrap_or_default();
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());
        Ok((self.respond)(&action_of(&envelope), &envelope))
    }
}

fn action_of(envelope: &serde_json::Value) -> String {
    envelope["Header"]["Action"].as_str().unwrap_or_default().to_string()
}

pub(crate) fn login_ok(session_id: &str, user_id: &str) -> HttpResponse {
    HttpResponse::ok(
        serde_json::json!({
            "Header": {"SessionId": session_id, "Action": "LOGIN", "Status": "OK", "Error": false},
            "Body": {
                "NomeImob": "Imobiliária Teste",
                "ImobId": "T1",
                "UsuarioId": user_id,
                "Nome": "Test",
                "Versao": "9.1",
                "Client_IP": "10.0.0.1",
                "CodFilial": 1,
                "NomeFilial": "Matriz",
                "Cidade": "Porto Alegre",
                "UF": "RS",
                "MaxSessions": 5,
                "ServerDateTime": "2024-03-01T10:00:00"
            }
        })
        .to_string(),
    )
}

pub(crate) fn login_denied() -> HttpResponse {
    HttpResponse::ok(
        r#"{"Header":{"Action":"LOGIN","Error":true},"Body":{"Erros":[{"Campo":"USER_PASS","Mensagem":"Usuário ou senha inválidos"}]}}"#,
    )
}
