//! Shared fixtures: a local stand-in for the DeepL translate endpoint.
#![allow(dead_code, clippy::unwrap_used)]

use std::io::Read;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread;

use tiny_http::{Response, Server};

/// How the mock endpoint answers.
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    /// Returns the submitted `text` uppercased.
    Uppercase,
    /// Uppercases the first `ok` requests, then answers 500.
    UppercaseThenFail { ok: usize },
    /// Always answers with this status and body.
    Fixed(u16, &'static str),
}

pub struct MockApi {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockApi {
    pub fn start(reply: Reply) -> Self {
        let server = Server::http("127.0.0.1:0").unwrap();
        let port = server.server_addr().to_ip().unwrap().port();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);

        thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                request.as_reader().read_to_string(&mut body).unwrap();
                let served = {
                    let mut log = log.lock().unwrap();
                    log.push(body.clone());
                    log.len()
                };

                let (status, payload) = match reply {
                    Reply::Uppercase => (200, uppercase_reply(&body)),
                    Reply::UppercaseThenFail { ok } if served <= ok => {
                        (200, uppercase_reply(&body))
                    }
                    Reply::UppercaseThenFail { .. } => (500, "Internal error".to_string()),
                    Reply::Fixed(status, payload) => (status, payload.to_string()),
                };
                let _ = request.respond(Response::from_string(payload).with_status_code(status));
            }
        });

        Self {
            url: format!("http://127.0.0.1:{port}/v2/translate"),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

fn uppercase_reply(body: &str) -> String {
    let text = form_value(body, "text").unwrap_or_default();
    serde_json::json!({
        "translations": [{ "detected_source_language": "EN", "text": text.to_uppercase() }]
    })
    .to_string()
}

/// Decodes one field of an `application/x-www-form-urlencoded` body.
pub fn form_value(body: &str, key: &str) -> Option<String> {
    serde_urlencoded::from_str::<Vec<(String, String)>>(body)
        .ok()?
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

/// Names of the visible files in `dir`, sorted.
pub fn visible_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
                .filter(|name| !name.starts_with('.'))
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

/// Names of the hidden (temp or partial) files in `dir`, sorted.
pub fn hidden_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
                .filter(|name| name.starts_with('.'))
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
