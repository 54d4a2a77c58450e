//! Tests for injecting a custom transport.

use std::sync::{Arc, Mutex};

use serde_json::json;

use refine::{
    params, HttpResponse, MultipartBody, Params, ProjectSource, RefineClient, RefineConfig,
    Result, Transport,
};

/// A request seen by the recording transport.
#[derive(Debug, Clone, PartialEq)]
enum Recorded {
    Get { url: String, query: Params },
    Post { url: String, form: Params },
    Multipart { url: String, content_type: String },
}

/// Transport that records requests and answers from a fixed script.
#[derive(Default)]
struct RecordingTransport {
    requests: Mutex<Vec<Recorded>>,
    replies: Mutex<Vec<HttpResponse>>,
}

impl RecordingTransport {
    fn with_replies(replies: Vec<HttpResponse>) -> Self {
        let mut replies = replies;
        replies.reverse();
        Self {
            requests: Mutex::new(Vec::new()),
            replies: Mutex::new(replies),
        }
    }

    fn next_reply(&self) -> HttpResponse {
        self.replies
            .lock()
            .unwrap()
            .pop()
            .expect("no scripted reply left")
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for RecordingTransport {
    fn get(&self, url: &str, query: &Params) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(Recorded::Get {
            url: url.to_string(),
            query: query.clone(),
        });
        Ok(self.next_reply())
    }

    fn post_form(&self, url: &str, form: &Params) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(Recorded::Post {
            url: url.to_string(),
            form: form.clone(),
        });
        Ok(self.next_reply())
    }

    fn post_multipart(&self, url: &str, body: MultipartBody) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(Recorded::Multipart {
            url: url.to_string(),
            content_type: body.content_type(),
        });
        Ok(self.next_reply())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

fn metadata_reply(name: &str) -> HttpResponse {
    HttpResponse::new(200, json!({"name": name}).to_string())
}

#[test]
fn test_open_issues_metadata_get() {
    let transport = Arc::new(RecordingTransport::with_replies(vec![metadata_reply("Foo")]));
    let client = RefineClient::connect_shared(
        transport.clone(),
        RefineConfig::default(),
        ProjectSource::existing("42"),
    )
    .unwrap();

    assert_eq!(client.project_name(), "Foo");
    assert_eq!(
        transport.requests(),
        vec![Recorded::Get {
            url: "http://127.0.0.1:3333/command/core/get-project-metadata".to_string(),
            query: params([("project", "42")]),
        }]
    );
}

#[test]
fn test_call_orders_project_first() {
    let transport = Arc::new(RecordingTransport::with_replies(vec![
        metadata_reply("Foo"),
        HttpResponse::new(200, r#"{"code":"ok"}"#),
    ]));
    let client = RefineClient::connect_shared(
        transport.clone(),
        RefineConfig::default().with_server("http://refine.local:3333/"),
        ProjectSource::existing("42"),
    )
    .unwrap();

    client
        .call("add_column", params([("baseColumnName", "city"), ("project", "7")]))
        .unwrap();

    let requests = transport.requests();
    let Recorded::Post { url, form } = &requests[1] else {
        panic!("expected a POST, got {:?}", requests[1]);
    };
    assert_eq!(url, "http://refine.local:3333/command/core/add-column");
    let keys: Vec<&str> = form.keys().map(String::as_str).collect();
    assert_eq!(keys, ["project", "baseColumnName"]);
    assert_eq!(form["project"], "42");
}

#[test]
fn test_upload_announces_boundary() {
    let transport = Arc::new(RecordingTransport::with_replies(vec![
        HttpResponse::new(302, "").with_location("/project?project=1234567890123"),
    ]));
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "a\tb\n1\t2\n").unwrap();

    let client = RefineClient::connect_shared(
        transport.clone(),
        RefineConfig::default(),
        ProjectSource::upload("tabs", file.path()),
    )
    .unwrap();

    assert_eq!(client.project_id(), "1234567890123");
    let requests = transport.requests();
    let Recorded::Multipart { url, content_type } = &requests[0] else {
        panic!("expected a multipart POST, got {:?}", requests[0]);
    };
    assert_eq!(
        url,
        "http://127.0.0.1:3333/command/core/create-project-from-upload"
    );
    assert!(content_type.starts_with("multipart/form-data; charset=utf-8; boundary="));
}

#[test]
fn test_call_with_empty_body_returns_null() {
    let transport = Arc::new(RecordingTransport::with_replies(vec![
        metadata_reply("Foo"),
        HttpResponse::new(200, ""),
    ]));
    let client = RefineClient::connect_shared(
        transport.clone(),
        RefineConfig::default(),
        ProjectSource::existing("42"),
    )
    .unwrap();

    let value = client.call("cancel_processes", Params::new()).unwrap();
    assert_eq!(value, serde_json::Value::Null);
}

#[test]
fn test_debug_names_transport() {
    let transport = RecordingTransport::with_replies(vec![metadata_reply("Foo")]);
    let client = RefineClient::connect_with(
        transport,
        RefineConfig::default(),
        ProjectSource::existing("42"),
    )
    .unwrap();

    let debug = format!("{:?}", client);
    assert!(debug.contains("recording"));
    assert!(debug.contains("42"));
}
