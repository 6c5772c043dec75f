//! The `{Header, Body}` envelope shared by every backend action.
//!
//! # Design
//! Building and parsing are pure functions over [`HttpRequest`] and
//! [`HttpResponse`]. Parsing is two-phase: [`check_response_error`] decodes
//! only what it needs to decide whether the backend reported a failure, so a
//! body shaped like an error list never reaches the strict decode of the
//! action's output type.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ApiError, Result};
use crate::http::{HttpRequest, HttpResponse};

/// Plain-text body the backend answers with once a session id is no longer
/// valid. It is not JSON.
pub const SESSION_EXPIRED_SENTINEL: &str = "468 - session expired, new login required";

/// Outgoing envelope. The body is borrowed so callers keep ownership of
/// their input.
#[derive(Debug, Serialize)]
pub struct RequestEnvelope<'a, B> {
    #[serde(rename = "Header")]
    pub header: RequestHeader<'a>,
    #[serde(rename = "Body")]
    pub body: &'a B,
}

#[derive(Debug, Serialize)]
pub struct RequestHeader<'a> {
    #[serde(rename = "SessionId", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<&'a str>,
    #[serde(rename = "Action")]
    pub action: &'a str,
}

/// Body of actions that send no fields; serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EmptyBody {}

/// Incoming envelope after the error probe passed.
#[derive(Debug, Deserialize)]
pub struct ResponseEnvelope<B> {
    #[serde(rename = "Header")]
    pub header: ResponseHeader,
    #[serde(rename = "Body")]
    pub body: Option<B>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseHeader {
    pub session_id: Option<String>,
    pub action: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub error: bool,
    pub error_code: Option<i64>,
}

/// One entry of the backend's `Erros` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendError {
    #[serde(rename = "Campo", default, skip_serializing_if = "Option::is_none")]
    pub campo: Option<String>,
    #[serde(rename = "Mensagem", default, deserialize_with = "null_as_default")]
    pub mensagem: String,
}

#[derive(Deserialize)]
struct ErrorProbe {
    #[serde(rename = "Header")]
    header: Option<ProbeHeader>,
}

#[derive(Deserialize)]
struct ProbeHeader {
    #[serde(rename = "Error")]
    error: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(rename = "Body", default, deserialize_with = "null_as_default")]
    body: ErrorBody,
}

#[derive(Default, Deserialize)]
struct ErrorBody {
    #[serde(rename = "Erros", default, deserialize_with = "null_as_default")]
    erros: Vec<BackendError>,
}

/// `null` decodes like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serialize `body` under `action` and address it to `endpoint`.
///
/// `session_id` is omitted from the header when `None` (login).
pub fn build_request<B: Serialize>(
    endpoint: &str,
    session_id: Option<&str>,
    action: &str,
    body: &B,
) -> Result<HttpRequest> {
    let envelope = RequestEnvelope {
        header: RequestHeader { session_id, action },
        body,
    };
    let json = serde_json::to_string(&envelope).map_err(|e| ApiError::SerializationError(e.to_string()))?;
    Ok(HttpRequest::json_post(endpoint, json))
}

/// Run the error probe, then decode the full envelope.
pub fn parse_response<B: DeserializeOwned>(response: &HttpResponse) -> Result<ResponseEnvelope<B>> {
    check_response_error(&response.body)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Decide whether `body` carries a backend-reported failure.
///
/// Only the first entry of `Erros` is surfaced; its field name travels in
/// [`ApiError::Backend::field`].
pub fn check_response_error(body: &str) -> Result<()> {
    if body.trim() == SESSION_EXPIRED_SENTINEL {
        return Err(ApiError::InvalidSession);
    }

    let probe: ErrorProbe =
        serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))?;
    let flagged = probe
        .header
        .and_then(|h| h.error)
        .and_then(|v| v.as_bool())
        .ok_or(ApiError::MissingErrorFlag)?;
    if !flagged {
        return Ok(());
    }

    let envelope: ErrorEnvelope =
        serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))?;
    match envelope.body.erros.into_iter().next() {
        Some(first) => Err(ApiError::Backend {
            field: first.campo.filter(|c| !c.is_empty()),
            message: first.mensagem,
        }),
        None => Err(ApiError::ErrorFlaggedWithoutEntries),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Probe {
        #[serde(rename = "CodCondominio")]
        cod_condominio: i64,
    }

    #[test]
    fn build_request_includes_session_and_action() {
        let req = build_request("http://host/api", Some("S1"), "CONDOM_CONDOMINIO_CONSULTAR", &Probe { cod_condominio: 7 })
            .unwrap();
        assert_eq!(req.url, "http://host/api");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json; charset=utf-8".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(&req.body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "Header": {"SessionId": "S1", "Action": "CONDOM_CONDOMINIO_CONSULTAR"},
                "Body": {"CodCondominio": 7}
            })
        );
    }

    #[test]
    fn build_request_omits_missing_session_id() {
        let req = build_request("http://host", None, "LOGIN", &EmptyBody {}).unwrap();
        let body: serde_json::Value = serde_json::from_str(&req.body).unwrap();
        assert!(body["Header"].get("SessionId").is_none());
        assert_eq!(body["Body"], serde_json::json!({}));
    }

    #[test]
    fn sentinel_maps_to_invalid_session() {
        let err = check_response_error(SESSION_EXPIRED_SENTINEL).unwrap_err();
        assert!(matches!(err, ApiError::InvalidSession));
    }

    #[test]
    fn sentinel_with_trailing_newline_still_matches() {
        let err = check_response_error("468 - session expired, new login required\n").unwrap_err();
        assert!(matches!(err, ApiError::InvalidSession));
    }

    #[test]
    fn false_flag_is_not_an_error() {
        assert!(check_response_error(r#"{"Header":{"Error":false},"Body":{"X":1}}"#).is_ok());
    }

    #[test]
    fn first_backend_message_is_returned() {
        let body = r#"{"Header":{"Error":true},"Body":{"Erros":[
            {"Campo":"CodCondominio","Mensagem":"Condomínio não encontrado"},
            {"Campo":"","Mensagem":"segunda"}
        ]}}"#;
        match check_response_error(body).unwrap_err() {
            ApiError::Backend { field, message } => {
                assert_eq!(field.as_deref(), Some("CodCondominio"));
                assert_eq!(message, "Condomínio não encontrado");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn flagged_without_entries_is_reported() {
        let err = check_response_error(r#"{"Header":{"Error":true},"Body":{"Erros":[]}}"#).unwrap_err();
        assert!(matches!(err, ApiError::ErrorFlaggedWithoutEntries));

        let err = check_response_error(r#"{"Header":{"Error":true}}"#).unwrap_err();
        assert!(matches!(err, ApiError::ErrorFlaggedWithoutEntries));
    }

    #[test]
    fn null_error_list_counts_as_empty() {
        let err = check_response_error(r#"{"Header":{"Error":true},"Body":{"Erros":null}}"#).unwrap_err();
        assert!(matches!(err, ApiError::ErrorFlaggedWithoutEntries));

        let err = check_response_error(r#"{"Header":{"Error":true},"Body":null}"#).unwrap_err();
        assert!(matches!(err, ApiError::ErrorFlaggedWithoutEntries));
    }

    #[test]
    fn null_message_yields_empty_text() {
        let body = r#"{"Header":{"Error":true},"Body":{"Erros":[{"Campo":"Texto","Mensagem":null}]}}"#;
        match check_response_error(body).unwrap_err() {
            ApiError::Backend { field, message } => {
                assert_eq!(field.as_deref(), Some("Texto"));
                assert_eq!(message, "");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_or_mistyped_flag_is_fatal() {
        let err = check_response_error(r#"{"Header":{"SessionId":"S1"}}"#).unwrap_err();
        assert!(matches!(err, ApiError::MissingErrorFlag));

        let err = check_response_error(r#"{"Header":{"Error":"false"}}"#).unwrap_err();
        assert!(matches!(err, ApiError::MissingErrorFlag));

        let err = check_response_error(r#"{"Body":{}}"#).unwrap_err();
        assert!(matches!(err, ApiError::MissingErrorFlag));
    }

    #[test]
    fn non_json_body_is_a_deserialization_error() {
        let err = check_response_error("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn malformed_error_list_is_a_deserialization_error() {
        let err = check_response_error(r#"{"Header":{"Error":true},"Body":{"Erros":"boom"}}"#).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_response_returns_header_and_body() {
        #[derive(Deserialize)]
        struct Out {
            #[serde(rename = "Nome")]
            nome: String,
        }
        let response = HttpResponse::ok(r#"{"Header":{"SessionId":"S9","Status":"OK","Error":false},"Body":{"Nome":"x"}}"#);
        let envelope: ResponseEnvelope<Out> = parse_response(&response).unwrap();
        assert_eq!(envelope.header.session_id.as_deref(), Some("S9"));
        assert_eq!(envelope.header.status.as_deref(), Some("OK"));
        assert_eq!(envelope.body.unwrap().nome, "x");
    }

    #[test]
    fn parse_response_tolerates_missing_body() {
        let response = HttpResponse::ok(r#"{"Header":{"Error":false}}"#);
        let envelope: ResponseEnvelope<EmptyBody> = parse_response(&response).unwrap();
        assert!(envelope.body.is_none());
    }
}
