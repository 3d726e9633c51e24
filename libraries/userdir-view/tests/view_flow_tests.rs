//! Integration tests for the directory view flows.
//!
//! These drive the view through the real HTTP client against a mock server,
//! verifying the complete load / create / edit / delete workflows at the
//! wire level.

use userdir_client::{DirectoryClient, DirectoryConfig};
use userdir_view::{DirectoryView, SubmitOutcome};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_user(id: &str, name: &str, created_at: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "mobile": "5551234567",
        "createdAt": created_at
    })
}

fn view_for(server: &MockServer) -> DirectoryView<DirectoryClient> {
    let client =
        DirectoryClient::new(DirectoryConfig::new(server.uri())).expect("valid mock server url");
    DirectoryView::new(client)
}

fn ids(view: &DirectoryView<DirectoryClient>) -> Vec<&str> {
    view.users().iter().map(|u| u.id.as_str()).collect()
}

async fn mount_list(server: &MockServer, users: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users))
        .mount(server)
        .await;
}

// =============================================================================
// Load Flow
// =============================================================================

mod load_flow {
    use super::*;

    #[tokio::test]
    async fn initialize_sorts_newest_first() {
        let server = MockServer::start().await;
        mount_list(
            &server,
            serde_json::json!([
                mock_user("1", "Ann", "2024-01-01"),
                mock_user("2", "Ben", "2024-02-01"),
            ]),
        )
        .await;

        let mut view = view_for(&server);
        view.initialize().await.unwrap();

        assert_eq!(ids(&view), vec!["2", "1"]);
        assert!(!view.is_modal_open());
    }

    #[tokio::test]
    async fn initialize_failure_leaves_the_view_empty() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut view = view_for(&server);
        assert!(view.initialize().await.is_err());
        assert!(view.users().is_empty());
    }
}

// =============================================================================
// Create Flow
// =============================================================================

mod create_flow {
    use super::*;

    #[tokio::test]
    async fn submit_creates_prepends_and_closes() {
        let server = MockServer::start().await;
        mount_list(
            &server,
            serde_json::json!([
                mock_user("1", "Ann", "2024-01-01"),
                mock_user("2", "Ben", "2024-02-01"),
            ]),
        )
        .await;

        Mock::given(method("POST"))
            .and(path("/users"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(mock_user("3", "Cara", "2024-03-01")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut view = view_for(&server);
        view.initialize().await.unwrap();

        view.open_create();
        view.form_mut().name = "Cara".to_string();
        view.form_mut().email = "cara@example.com".to_string();
        view.form_mut().mobile = "5551234567".to_string();

        let outcome = view.submit().await.unwrap();
        match outcome {
            SubmitOutcome::Created(record) => assert_eq!(record.id, "3"),
            other => panic!("Expected Created, got {other:?}"),
        }

        assert_eq!(ids(&view), vec!["3", "2", "1"]);
        assert!(!view.is_modal_open());
        assert!(view.form().name.is_empty());

        // The create payload carries exactly the form fields plus a
        // creation stamp; the identifier is the server's to assign.
        let requests = server.received_requests().await.unwrap();
        let create = requests
            .iter()
            .find(|r| r.method.to_string().eq_ignore_ascii_case("POST"))
            .expect("one create request");
        let body: serde_json::Value = serde_json::from_slice(&create.body).unwrap();
        assert_eq!(body["name"], "Cara");
        assert_eq!(body["email"], "cara@example.com");
        assert_eq!(body["mobile"], "5551234567");
        assert!(body.get("id").is_none());
        assert!(body.get("createdAt").is_some());
    }

    #[tokio::test]
    async fn invalid_form_dispatches_nothing() {
        let server = MockServer::start().await;
        mount_list(&server, serde_json::json!([])).await;

        Mock::given(method("POST"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let mut view = view_for(&server);
        view.initialize().await.unwrap();

        view.open_create();
        view.form_mut().name = "Cara".to_string();
        view.form_mut().email = "not-an-email".to_string();
        view.form_mut().mobile = "12345".to_string();

        let outcome = view.submit().await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Rejected(v) if v.len() == 2));

        // The editor stays open with the input intact.
        assert!(view.is_modal_open());
        assert_eq!(view.form().name, "Cara");
    }

    #[tokio::test]
    async fn failed_create_leaves_modal_open_and_list_unchanged() {
        let server = MockServer::start().await;
        mount_list(
            &server,
            serde_json::json!([mock_user("1", "Ann", "2024-01-01")]),
        )
        .await;

        Mock::given(method("POST"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut view = view_for(&server);
        view.initialize().await.unwrap();

        view.open_create();
        view.form_mut().name = "Cara".to_string();
        view.form_mut().email = "cara@example.com".to_string();
        view.form_mut().mobile = "5551234567".to_string();

        assert!(view.submit().await.is_err());
        assert!(view.is_modal_open());
        assert_eq!(ids(&view), vec!["1"]);
        assert_eq!(view.form().name, "Cara");
    }
}

// =============================================================================
// Edit Flow
// =============================================================================

mod edit_flow {
    use super::*;

    #[tokio::test]
    async fn submit_echoes_the_original_creation_timestamp() {
        let server = MockServer::start().await;
        mount_list(
            &server,
            serde_json::json!([
                mock_user("1", "Ann", "2024-01-01T00:00:00.000Z"),
                mock_user("2", "Ben", "2024-02-01T00:00:00.000Z"),
            ]),
        )
        .await;

        // Unchanged edit: the PUT body must carry the record's original
        // createdAt, never a regenerated one.
        Mock::given(method("PUT"))
            .and(path("/users/1"))
            .and(body_partial_json(serde_json::json!({
                "name": "Ann",
                "createdAt": "2024-01-01T00:00:00.000Z"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(mock_user("1", "Ann", "2024-01-01T00:00:00.000Z")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut view = view_for(&server);
        view.initialize().await.unwrap();

        let original = view.users()[1].clone();
        assert_eq!(original.id, "1");
        view.open_edit(original);

        let outcome = view.submit().await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Updated(_)));
        assert!(!view.is_modal_open());
    }

    #[tokio::test]
    async fn server_response_replaces_the_local_record() {
        let server = MockServer::start().await;
        mount_list(
            &server,
            serde_json::json!([
                mock_user("1", "Ann", "2024-01-01"),
                mock_user("2", "Ben", "2024-02-01"),
            ]),
        )
        .await;

        Mock::given(method("PUT"))
            .and(path("/users/2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(mock_user("2", "Benjamin", "2024-02-01")),
            )
            .mount(&server)
            .await;

        let mut view = view_for(&server);
        view.initialize().await.unwrap();

        let record = view.users()[0].clone();
        view.open_edit(record);
        view.form_mut().name = "Benjamin".to_string();

        view.submit().await.unwrap();

        assert_eq!(ids(&view), vec!["2", "1"]);
        assert_eq!(view.users()[0].name, "Benjamin");
    }
}

// =============================================================================
// Delete Flow
// =============================================================================

mod delete_flow {
    use super::*;

    #[tokio::test]
    async fn remove_drops_the_record_and_keeps_order() {
        let server = MockServer::start().await;
        mount_list(
            &server,
            serde_json::json!([
                mock_user("1", "Ann", "2024-01-01"),
                mock_user("2", "Ben", "2024-02-01"),
                mock_user("3", "Cara", "2024-03-01"),
            ]),
        )
        .await;

        Mock::given(method("DELETE"))
            .and(path("/users/2"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let mut view = view_for(&server);
        view.initialize().await.unwrap();
        assert_eq!(ids(&view), vec!["3", "2", "1"]);

        view.remove("2").await.unwrap();
        assert_eq!(ids(&view), vec!["3", "1"]);
    }

    #[tokio::test]
    async fn failed_delete_keeps_the_record() {
        let server = MockServer::start().await;
        mount_list(
            &server,
            serde_json::json!([mock_user("1", "Ann", "2024-01-01")]),
        )
        .await;

        Mock::given(method("DELETE"))
            .and(path("/users/1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut view = view_for(&server);
        view.initialize().await.unwrap();

        assert!(view.remove("1").await.is_err());
        assert_eq!(ids(&view), vec!["1"]);
    }
}
