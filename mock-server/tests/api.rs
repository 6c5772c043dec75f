use std::sync::Arc;

use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, hash_secret, Backend, SESSION_EXPIRED};
use serde_json::{json, Value};
use tower::ServiceExt;

fn backend() -> Arc<Backend> {
    Arc::new(Backend::demo("T1", "u1", "secret"))
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn envelope_request(envelope: Value) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(http::header::CONTENT_TYPE, "application/json; charset=utf-8")
        .body(envelope.to_string())
        .unwrap()
}

fn login_request(user_pass: &str) -> Request<String> {
    envelope_request(json!({
        "Header": {"Action": "LOGIN"},
        "Body": {"IMOB_ID": "T1", "USER_ID": "u1", "USER_PASS": user_pass}
    }))
}

fn action_request(session_id: &str, action: &str, body: Value) -> Request<String> {
    envelope_request(json!({"Header": {"SessionId": session_id, "Action": action}, "Body": body}))
}

async fn login(backend: &Arc<Backend>) -> String {
    let resp = app(backend.clone())
        .oneshot(login_request(&hash_secret("secret")))
        .await
        .unwrap();
    let json = body_json(resp).await;
    json["Header"]["SessionId"].as_str().unwrap().to_string()
}

// --- login ---

#[tokio::test]
async fn login_returns_session_and_profile() {
    let backend = backend();
    let resp = app(backend.clone())
        .oneshot(login_request(&hash_secret("secret")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["Header"]["Error"], false);
    assert!(!json["Header"]["SessionId"].as_str().unwrap().is_empty());
    assert_eq!(json["Body"]["UsuarioId"], "u1");
    assert_eq!(json["Body"]["ImobId"], "T1");
    assert_eq!(backend.live_sessions().await, 1);
}

#[tokio::test]
async fn login_with_wrong_secret_is_rejected() {
    let backend = backend();
    let resp = app(backend.clone())
        .oneshot(login_request(&hash_secret("wrong")))
        .await
        .unwrap();

    let json = body_json(resp).await;
    assert_eq!(json["Header"]["Error"], true);
    assert_eq!(json["Body"]["Erros"][0]["Campo"], "USER_PASS");
    assert_eq!(backend.login_attempts(), 1);
    assert_eq!(backend.live_sessions().await, 0);
}

#[tokio::test]
async fn plaintext_secret_is_rejected() {
    let resp = app(backend()).oneshot(login_request("secret")).await.unwrap();
    let json = body_json(resp).await;
    assert_eq!(json["Header"]["Error"], true);
}

#[tokio::test]
async fn malformed_envelope_is_an_error_envelope() {
    let resp = app(backend())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body("not json".to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["Header"]["Error"], true);
}

// --- session checks ---

#[tokio::test]
async fn unknown_session_gets_the_sentinel() {
    let resp = app(backend())
        .oneshot(action_request("nope", "CONDOM_CONDOMINIO_CONSULTAR", json!({"CodCondominio": 42})))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, SESSION_EXPIRED.as_bytes());
}

#[tokio::test]
async fn unknown_action_is_a_backend_error() {
    let backend = backend();
    let session_id = login(&backend).await;
    let resp = app(backend)
        .oneshot(action_request(&session_id, "CONDOM_NAO_EXISTE", json!({})))
        .await
        .unwrap();

    let json = body_json(resp).await;
    assert_eq!(json["Header"]["Error"], true);
    assert_eq!(json["Body"]["Erros"][0]["Mensagem"], "Ação desconhecida: CONDOM_NAO_EXISTE");
}

// --- condominiums ---

#[tokio::test]
async fn consultar_finds_fixture() {
    let backend = backend();
    let session_id = login(&backend).await;
    let resp = app(backend)
        .oneshot(action_request(&session_id, "CONDOM_CONDOMINIO_CONSULTAR", json!({"CodCondominio": 42})))
        .await
        .unwrap();

    let json = body_json(resp).await;
    assert_eq!(json["Header"]["Error"], false);
    assert_eq!(json["Body"]["NomeCondominio"], "Edifício Aurora");
}

#[tokio::test]
async fn consultar_unknown_code_is_a_backend_error() {
    let backend = backend();
    let session_id = login(&backend).await;
    let resp = app(backend)
        .oneshot(action_request(&session_id, "CONDOM_CONDOMINIO_CONSULTAR", json!({"CodCondominio": 7})))
        .await
        .unwrap();

    let json = body_json(resp).await;
    assert_eq!(json["Header"]["Error"], true);
    assert_eq!(json["Body"]["Erros"][0]["Campo"], "CodCondominio");
}

#[tokio::test]
async fn pesquisar_hides_inactive_unless_asked() {
    let backend = backend();
    let session_id = login(&backend).await;

    let resp = app(backend.clone())
        .oneshot(action_request(&session_id, "CONDOM_CONDOMINIO_PESQUISAR", json!({"IncluiInativos": "N"})))
        .await
        .unwrap();
    let json = body_json(resp).await;
    assert_eq!(json["Body"]["Condominios"].as_array().unwrap().len(), 1);

    let resp = app(backend)
        .oneshot(action_request(
            &session_id,
            "CONDOM_CONDOMINIO_PESQUISAR",
            json!({"Texto": "ipê", "IncluiInativos": "S"}),
        ))
        .await
        .unwrap();
    let json = body_json(resp).await;
    let found = json["Body"]["Condominios"].as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["CodCondominio"], 43);
}

// --- full session lifecycle ---

#[tokio::test]
async fn session_lifecycle() {
    use tower::Service;

    let backend = backend();
    let mut app = app(backend.clone()).into_service();

    // login
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(login_request(&hash_secret("SECRET")))
        .await
        .unwrap();
    let json = body_json(resp).await;
    let session_id = json["Header"]["SessionId"].as_str().unwrap().to_string();

    // action
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(action_request(&session_id, "CONDOM_CONDOMINIO_CONSULTAR", json!({"CodCondominio": 43})))
        .await
        .unwrap();
    let json = body_json(resp).await;
    assert_eq!(json["Body"]["Ativo"], "N");

    // logout
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(action_request(&session_id, "LOGOUT", json!({})))
        .await
        .unwrap();
    let json = body_json(resp).await;
    assert_eq!(json["Header"]["Error"], false);
    assert_eq!(backend.logouts(), 1);
    assert_eq!(backend.live_sessions().await, 0);

    // the id is dead now
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(action_request(&session_id, "LOGOUT", json!({})))
        .await
        .unwrap();
    assert_eq!(body_bytes(resp).await, SESSION_EXPIRED.as_bytes());
    assert_eq!(backend.logouts(), 1);
}
