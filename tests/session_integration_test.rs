use gradport::domain::ports::Notifier;
use gradport::{HttpGraduateStore, Session};
use httpmock::prelude::*;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct RecordingNotifier {
    notices: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.notices.lock().unwrap().push(format!("ok: {}", message));
    }

    fn error(&self, message: &str) {
        self.notices.lock().unwrap().push(format!("err: {}", message));
    }
}

fn graduate_json(id: u64, full_name: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "fullName": full_name,
        "email": email,
        "university": "MIT",
        "degree": "CS",
        "graduationYear": 2024,
        "skills": ["Rust"]
    })
}

fn session_for(
    server: &MockServer,
) -> (Session<HttpGraduateStore, RecordingNotifier>, RecordingNotifier) {
    let notifier = RecordingNotifier::default();
    let store = HttpGraduateStore::new(server.url("/graduates"));
    (Session::new(store, notifier.clone()), notifier)
}

#[tokio::test]
async fn test_create_appends_server_assigned_record_and_clears_form() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/graduates");
        then.status(200)
            .json_body(serde_json::json!({ "data": [graduate_json(1, "Ada", "ada@example.com")] }));
    });
    let create_mock = server.mock(|when, then| {
        when.method(POST).path("/graduates");
        then.status(201)
            .json_body(graduate_json(42, "Jane Doe", "jane@example.com"));
    });

    let (mut session, notifier) = session_for(&server);
    session.load().await.unwrap();
    session.open_new();
    {
        let draft = session.draft_mut();
        draft.full_name = "Jane Doe".to_string();
        draft.email = "jane@example.com".to_string();
        draft.university = "MIT".to_string();
        draft.degree = "CS".to_string();
        draft.graduation_year = 2025;
    }
    session.set_skill_input("Rust");
    session.commit_skill_input();

    let id = session.submit().await.unwrap();

    create_mock.assert();
    assert_eq!(id, 42);
    assert_eq!(session.cache().len(), 2);
    assert_eq!(session.cache()[1].id, 42);
    assert!(session.draft().full_name.is_empty());
    assert!(!session.form_open());
    assert_eq!(
        notifier.notices(),
        vec!["ok: Graduate added successfully!".to_string()]
    );
}

#[tokio::test]
async fn test_update_replaces_in_place_keeping_order() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/graduates");
        then.status(200).json_body(serde_json::json!({ "data": [
            graduate_json(1, "Ada", "ada@example.com"),
            graduate_json(2, "Alan", "alan@example.com"),
            graduate_json(3, "Grace", "grace@example.com"),
        ] }));
    });
    let update_mock = server.mock(|when, then| {
        when.method(httpmock::Method::PATCH).path("/graduates/2");
        then.status(200)
            .json_body(graduate_json(2, "Alan M. Turing", "alan@example.com"));
    });

    let (mut session, _) = session_for(&server);
    session.load().await.unwrap();
    session.open_edit(2).unwrap();
    session.draft_mut().full_name = "Alan M. Turing".to_string();

    session.submit().await.unwrap();

    update_mock.assert();
    let names: Vec<&str> = session
        .cache()
        .iter()
        .map(|g| g.full_name.as_str())
        .collect();
    assert_eq!(names, vec!["Ada", "Alan M. Turing", "Grace"]);
    assert_eq!(session.cache().len(), 3);
}

#[tokio::test]
async fn test_delete_removes_only_the_matching_id() {
    let server = MockServer::start();
    // Twins: identical fields, different ids.
    server.mock(|when, then| {
        when.method(GET).path("/graduates");
        then.status(200).json_body(serde_json::json!({ "data": [
            graduate_json(1, "Ada", "ada@example.com"),
            graduate_json(2, "Ada", "ada@example.com"),
        ] }));
    });
    let delete_mock = server.mock(|when, then| {
        when.method(DELETE).path("/graduates/1");
        then.status(204);
    });

    let (mut session, notifier) = session_for(&server);
    session.load().await.unwrap();
    session.delete(1).await.unwrap();

    delete_mock.assert();
    assert_eq!(session.cache().len(), 1);
    assert_eq!(session.cache()[0].id, 2);
    assert_eq!(notifier.notices(), vec!["ok: Graduate deleted!".to_string()]);
}

#[tokio::test]
async fn test_failed_delete_leaves_cache_untouched() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/graduates");
        then.status(200)
            .json_body(serde_json::json!({ "data": [graduate_json(1, "Ada", "ada@example.com")] }));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/graduates/1");
        then.status(500);
    });

    let (mut session, notifier) = session_for(&server);
    session.load().await.unwrap();

    assert!(session.delete(1).await.is_err());
    assert_eq!(session.cache().len(), 1);
    assert_eq!(
        notifier.notices(),
        vec!["err: Failed to delete graduate".to_string()]
    );
}

#[tokio::test]
async fn test_remote_rejection_message_reaches_the_user() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/graduates");
        then.status(200).json_body(serde_json::json!({ "data": [] }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/graduates");
        then.status(409)
            .json_body(serde_json::json!({ "message": "Email already registered" }));
    });

    let (mut session, notifier) = session_for(&server);
    session.load().await.unwrap();
    session.open_new();
    {
        let draft = session.draft_mut();
        draft.full_name = "Jane Doe".to_string();
        draft.email = "jane@example.com".to_string();
        draft.university = "MIT".to_string();
        draft.degree = "CS".to_string();
        draft.graduation_year = 2025;
        draft.add_skill("Rust");
    }

    assert!(session.submit().await.is_err());
    assert!(session.cache().is_empty());
    // The draft survives so the user can fix and resubmit.
    assert_eq!(session.draft().email, "jane@example.com");
    assert_eq!(
        notifier.notices(),
        vec!["err: Email already registered".to_string()]
    );
}

#[tokio::test]
async fn test_list_failure_is_reported_and_recoverable() {
    let server = MockServer::start();
    let mut failing = server.mock(|when, then| {
        when.method(GET).path("/graduates");
        then.status(503);
    });

    let (mut session, notifier) = session_for(&server);
    assert!(session.load_with_retries(0).await.is_err());
    assert!(session.cache().is_empty());
    assert_eq!(notifier.notices().len(), 1);
    assert!(notifier.notices()[0].starts_with("err:"));

    // Server recovers; a manual retry fills the cache.
    failing.delete();
    server.mock(|when, then| {
        when.method(GET).path("/graduates");
        then.status(200)
            .json_body(serde_json::json!({ "data": [graduate_json(1, "Ada", "ada@example.com")] }));
    });

    assert_eq!(session.load_with_retries(0).await.unwrap(), 1);
    assert_eq!(session.cache().len(), 1);
}
