//! In-memory stand-in for the Imobiliar backend.
//!
//! Speaks the envelope protocol on `POST /`: every request carries
//! `Header.Action`, every answer is HTTP 200 with either a JSON envelope or,
//! for unknown sessions, the plain-text expiry sentinel.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const SESSION_EXPIRED: &str = "468 - session expired, new login required";

/// Condominium fixture, serialized with the backend's keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Condominio {
    pub cod_condominio: i64,
    pub nome_condominio: String,
    pub endereco: String,
    pub cidade: String,
    #[serde(rename = "UF")]
    pub uf: String,
    pub ativo: String,
}

impl Condominio {
    pub fn new(cod_condominio: i64, nome_condominio: &str, endereco: &str) -> Self {
        Self {
            cod_condominio,
            nome_condominio: nome_condominio.to_string(),
            endereco: endereco.to_string(),
            cidade: "Porto Alegre".to_string(),
            uf: "RS".to_string(),
            ativo: "S".to_string(),
        }
    }

    pub fn inactive(mut self) -> Self {
        self.ativo = "N".to_string();
        self
    }
}

#[derive(Clone, Debug)]
struct LiveSession {
    imob_id: String,
    user_id: String,
}

/// Backend state. Users and fixtures are fixed once the backend is shared;
/// sessions and counters change per request.
#[derive(Debug, Default)]
pub struct Backend {
    /// `(imob_id, user_id)` → secret digest.
    users: HashMap<(String, String), String>,
    condominios: HashMap<String, Vec<Condominio>>,
    action_latency: Option<Duration>,
    sessions: RwLock<HashMap<String, LiveSession>>,
    login_attempts: AtomicUsize,
    logouts: AtomicUsize,
}

impl Backend {
    pub fn new() -> Self {
        Self::default()
    }

    /// One tenant with one user and two condominiums, the second inactive.
    pub fn demo(imob_id: &str, user_id: &str, secret: &str) -> Self {
        Self::new()
            .with_user(imob_id, user_id, secret)
            .with_condominio(imob_id, Condominio::new(42, "Edifício Aurora", "Rua dos Andradas, 100"))
            .with_condominio(imob_id, Condominio::new(43, "Residencial Ipê", "Av. Ipiranga, 2000").inactive())
    }

    pub fn with_user(mut self, imob_id: &str, user_id: &str, secret: &str) -> Self {
        self.users
            .insert((imob_id.to_string(), user_id.to_string()), hash_secret(secret));
        self
    }

    pub fn with_condominio(mut self, imob_id: &str, condominio: Condominio) -> Self {
        self.condominios
            .entry(imob_id.to_string())
            .or_default()
            .push(condominio);
        self
    }

    /// Delay every action except login and logout.
    pub fn with_action_latency(mut self, latency: Duration) -> Self {
        self.action_latency = Some(latency);
        self
    }

    pub fn login_attempts(&self) -> usize {
        self.login_attempts.load(Ordering::SeqCst)
    }

    pub fn logouts(&self) -> usize {
        self.logouts.load(Ordering::SeqCst)
    }

    pub async fn live_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn login(&self, body: Value) -> Response {
        self.login_attempts.fetch_add(1, Ordering::SeqCst);
        let login: LoginBody = match serde_json::from_value(body) {
            Ok(login) => login,
            Err(e) => return error_envelope("LOGIN", None, &format!("Requisição inválida: {e}")),
        };

        let key = (login.imob_id.clone(), login.user_id.clone());
        if self.users.get(&key) != Some(&login.user_pass) {
            tracing::info!(imob_id = %login.imob_id, user_id = %login.user_id, "login rejected");
            return error_envelope("LOGIN", Some("USER_PASS"), "Usuário ou senha inválidos");
        }

        let session_id = Uuid::new_v4().to_string();
        self.sessions.write().await.insert(
            session_id.clone(),
            LiveSession {
                imob_id: login.imob_id.clone(),
                user_id: login.user_id.clone(),
            },
        );
        tracing::info!(%session_id, imob_id = %login.imob_id, "login");

        Json(json!({
            "Header": {"SessionId": session_id, "Action": "LOGIN", "Status": "OK", "Error": false},
            "Body": {
                "NomeImob": format!("Imobiliária {}", login.imob_id),
                "ImobId": login.imob_id,
                "UsuarioId": login.user_id,
                "Nome": login.user_id.to_uppercase(),
                "Versao": env!("CARGO_PKG_VERSION"),
                "Client_IP": "127.0.0.1",
                "CodFilial": 1,
                "NomeFilial": "Matriz",
                "Cidade": "Porto Alegre",
                "UF": "RS",
                "MaxSessions": 10
            }
        }))
        .into_response()
    }

    async fn logout(&self, session_id: &str) -> Response {
        if self.sessions.write().await.remove(session_id).is_none() {
            return session_expired();
        }
        self.logouts.fetch_add(1, Ordering::SeqCst);
        tracing::info!(%session_id, "logout");
        ok_envelope(session_id, "LOGOUT", json!({}))
    }

    fn consultar(&self, session_id: &str, session: &LiveSession, body: &Value) -> Response {
        const ACTION: &str = "CONDOM_CONDOMINIO_CONSULTAR";
        let Some(cod) = body["CodCondominio"].as_i64() else {
            return error_envelope(ACTION, Some("CodCondominio"), "Campo obrigatório não informado");
        };
        match self.tenant(session).iter().find(|c| c.cod_condominio == cod) {
            Some(condominio) => ok_envelope(session_id, ACTION, json!(condominio)),
            None => error_envelope(ACTION, Some("CodCondominio"), "Condomínio não encontrado"),
        }
    }

    fn pesquisar(&self, session_id: &str, session: &LiveSession, body: &Value) -> Response {
        let texto = body["Texto"].as_str().unwrap_or_default().to_lowercase();
        let inclui_inativos = body["IncluiInativos"].as_str() == Some("S");
        let condominios: Vec<Value> = self
            .tenant(session)
            .iter()
            .filter(|c| inclui_inativos || c.ativo == "S")
            .filter(|c| texto.is_empty() || c.nome_condominio.to_lowercase().contains(&texto))
            .map(|c| {
                json!({
                    "CodCondominio": c.cod_condominio,
                    "NomeCondominio": c.nome_condominio,
                    "Endereco": c.endereco,
                })
            })
            .collect();
        ok_envelope(session_id, "CONDOM_CONDOMINIO_PESQUISAR", json!({ "Condominios": condominios }))
    }

    fn tenant(&self, session: &LiveSession) -> &[Condominio] {
        self.condominios
            .get(&session.imob_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Uppercase, then MD5, then lowercase hex.
pub fn hash_secret(secret: &str) -> String {
    format!("{:x}", Md5::digest(secret.to_uppercase().as_bytes()))
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Envelope {
    header: Header,
    #[serde(default)]
    body: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Header {
    session_id: Option<String>,
    action: String,
}

#[derive(Deserialize)]
struct LoginBody {
    #[serde(rename = "IMOB_ID")]
    imob_id: String,
    #[serde(rename = "USER_ID")]
    user_id: String,
    #[serde(rename = "USER_PASS")]
    user_pass: String,
}

pub fn app(backend: Arc<Backend>) -> Router {
    Router::new().route("/", post(dispatch)).with_state(backend)
}

pub async fn run(listener: TcpListener, backend: Arc<Backend>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(backend)).await
}

async fn dispatch(State(backend): State<Arc<Backend>>, raw: String) -> Response {
    let envelope: Envelope = match serde_json::from_str(&raw) {
        Ok(envelope) => envelope,
        Err(e) => return error_envelope("", None, &format!("Envelope inválido: {e}")),
    };
    let action = envelope.header.action.as_str();
    tracing::debug!(action, "request");

    if action == "LOGIN" {
        return backend.login(envelope.body).await;
    }

    let session_id = envelope.header.session_id.unwrap_or_default();
    if action == "LOGOUT" {
        return backend.logout(&session_id).await;
    }

    let Some(session) = backend.sessions.read().await.get(&session_id).cloned() else {
        return session_expired();
    };
    if let Some(latency) = backend.action_latency {
        tokio::time::sleep(latency).await;
    }
    tracing::debug!(action, user_id = %session.user_id, "action");

    match action {
        "CONDOM_CONDOMINIO_CONSULTAR" => backend.consultar(&session_id, &session, &envelope.body),
        "CONDOM_CONDOMINIO_PESQUISAR" => backend.pesquisar(&session_id, &session, &envelope.body),
        other => error_envelope(other, None, &format!("Ação desconhecida: {other}")),
    }
}

fn ok_envelope(session_id: &str, action: &str, body: Value) -> Response {
    Json(json!({
        "Header": {"SessionId": session_id, "Action": action, "Status": "OK", "Error": false},
        "Body": body
    }))
    .into_response()
}

fn error_envelope(action: &str, campo: Option<&str>, mensagem: &str) -> Response {
    Json(json!({
        "Header": {"Action": action, "Status": "ERROR", "Error": true},
        "Body": {"Erros": [{"Campo": campo, "Mensagem": mensagem}]}
    }))
    .into_response()
}

fn session_expired() -> Response {
    ([(CONTENT_TYPE, "text/plain; charset=utf-8")], SESSION_EXPIRED).into_response()
}
