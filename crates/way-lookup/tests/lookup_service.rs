//! `LookupClient` against a local `tiny_http` stand-in for the REST service.

use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use way_config::LookupConfig;
use way_lookup::{LookupClient, LookupError};

const ROWS: &str = r#"[{"cin":"AB123456","nom":"Alaoui","prenom":"Sara","numero_examen":"E-0042","concours":"Ingénieur","salle":"Amphi-B"}]"#;

#[derive(Debug, Clone)]
struct Seen {
    url: String,
    headers: Vec<(String, String)>,
}

impl Seen {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Answers `ROWS` for `cin=eq.AB123456`, `[]` for other keys, and 401 when
/// the api key is wrong. Every request is recorded.
fn spawn_service() -> (String, Arc<Mutex<Vec<Seen>>>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind test service");
    let port = server
        .server_addr()
        .to_ip()
        .map(|a| a.port())
        .expect("ip listener");
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);

    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let entry = Seen {
                url: request.url().to_string(),
                headers: request
                    .headers()
                    .iter()
                    .map(|h| (h.field.to_string(), h.value.to_string()))
                    .collect(),
            };
            log.lock().unwrap().push(entry.clone());

            let response = if entry.header("apikey") != Some("anon-key") {
                tiny_http::Response::from_string(r#"{"message":"Invalid API key"}"#)
                    .with_status_code(401)
            } else if entry.url.ends_with("cin=eq.AB123456") {
                tiny_http::Response::from_string(ROWS)
            } else {
                tiny_http::Response::from_string("[]")
            };
            let _ = request.respond(response);
        }
    });

    (format!("http://127.0.0.1:{port}"), seen)
}

fn client(url: &str, api_key: &str) -> LookupClient {
    LookupClient::from_config(&LookupConfig {
        url: url.to_string(),
        api_key: api_key.to_string(),
        ..Default::default()
    })
    .expect("configured client")
}

#[tokio::test]
async fn finds_record_and_sends_service_headers() {
    let (url, seen) = spawn_service();
    let record = client(&url, "anon-key").find("  AB123456 ").await.unwrap();

    assert_eq!(record.full_name(), "Sara Alaoui");
    assert_eq!(record.numero_examen, "E-0042");
    assert_eq!(record.destination().unwrap().as_str(), "Amphi-B");

    let requests = seen.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.url, "/rest/v1/etudiant?cin=eq.AB123456");
    assert_eq!(request.header("apikey"), Some("anon-key"));
    assert_eq!(request.header("Authorization"), Some("Bearer anon-key"));
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    assert_eq!(request.header("Prefer"), Some("return=representation"));
}

#[tokio::test]
async fn empty_result_is_not_found() {
    let (url, _) = spawn_service();
    let err = client(&url, "anon-key").find("ZZ000000").await.unwrap_err();
    match err {
        LookupError::NotFound { key } => assert_eq!(key, "ZZ000000"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn rejected_key_surfaces_status_and_body() {
    let (url, _) = spawn_service();
    let err = client(&url, "wrong").find("AB123456").await.unwrap_err();
    match err {
        LookupError::Api { status, message } => {
            assert_eq!(status, 401);
            assert!(message.contains("Invalid API key"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
