use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Form, Json, Router};

use super::*;
use crate::schemas::SearchCriteria;

/// Run `app` on a loopback port inside its own runtime thread and return
/// the base url. The thread outlives the test, which is fine here.
fn spawn_server(app: Router) -> String {
    let (tx, rx) = std::sync::mpsc::channel::<SocketAddr>();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    format!("http://{}", rx.recv().unwrap())
}

fn client(base: &str) -> ApiClient {
    ApiClient::new(base, Duration::from_secs(5)).unwrap()
}

type Captured<T> = Arc<Mutex<Option<T>>>;

#[test]
fn search_posts_form_and_decodes_rows() {
    let captured: Captured<HashMap<String, String>> = Arc::new(Mutex::new(None));

    async fn suche(
        State(captured): State<Captured<HashMap<String, String>>>,
        Form(form): Form<HashMap<String, String>>,
    ) -> impl IntoResponse {
        *captured.lock().unwrap() = Some(form);
        Json(serde_json::json!([
            {"_ID": 12, "DATUM": "01.01.2024", "SENDER": "ARD", "TITEL": "Tagesschau"},
            {"_ID": "34", "DATUM": "02.01.2024", "SENDER": "ZDF", "TITEL": "heute"},
        ]))
    }

    let app = Router::new()
        .route("/suche", post(suche))
        .with_state(captured.clone());
    let api = client(&spawn_server(app));

    let criteria = SearchCriteria {
        global: Some("nachrichten".to_string()),
        beschreibung: Some("abend".to_string()),
        ..SearchCriteria::default()
    };
    let rows = api.search(&criteria).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, "12");
    assert_eq!(rows[1].id, "34");
    assert_eq!(rows[1].sender, "ZDF");

    let form = captured.lock().unwrap().take().unwrap();
    assert_eq!(form.get("global").map(String::as_str), Some("nachrichten"));
    // The misspelled wire key the server reads.
    assert_eq!(form.get("bechreibung").map(String::as_str), Some("abend"));
    assert!(!form.contains_key("sender"));
}

#[test]
fn queue_selection_posts_joined_ids_and_dates() {
    #[derive(Clone, serde::Deserialize)]
    struct QueueForm {
        ids: String,
        dates: String,
    }

    let captured: Captured<QueueForm> = Arc::new(Mutex::new(None));

    async fn vormerken(
        State(captured): State<Captured<QueueForm>>,
        Form(form): Form<QueueForm>,
    ) -> impl IntoResponse {
        *captured.lock().unwrap() = Some(form);
        Json(serde_json::json!({"msg": "2 von 2 Filme vorgemerkt für den Download"}))
    }

    let app = Router::new()
        .route("/vormerken", post(vormerken))
        .with_state(captured.clone());
    let api = client(&spawn_server(app));

    let msg = api
        .queue_selection("12 34", "2024-01-01 2024-01-02")
        .unwrap();
    assert_eq!(msg.text(), "2 von 2 Filme vorgemerkt für den Download");

    let form = captured.lock().unwrap().take().unwrap();
    assert_eq!(form.ids, "12 34");
    assert_eq!(form.dates, "2024-01-01 2024-01-02");
}

#[test]
fn delete_file_posts_name_and_surfaces_error_msg() {
    #[derive(Clone, serde::Deserialize)]
    struct DeleteForm {
        name: String,
    }

    let captured: Captured<DeleteForm> = Arc::new(Mutex::new(None));

    async fn del_datei(
        State(captured): State<Captured<DeleteForm>>,
        Form(form): Form<DeleteForm>,
    ) -> impl IntoResponse {
        let known = form.name == "/videos/movie.mp4";
        *captured.lock().unwrap() = Some(form);
        if known {
            (
                StatusCode::OK,
                Json(serde_json::json!({"msg": "Datei erfolgreich gelöscht"})),
            )
        } else {
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"msg": "Ungültiger Dateiname"})),
            )
        }
    }

    let app = Router::new()
        .route("/del_datei", post(del_datei))
        .with_state(captured.clone());
    let api = client(&spawn_server(app));

    let msg = api.delete_file("/videos/movie.mp4").unwrap();
    assert_eq!(msg.text(), "Datei erfolgreich gelöscht");
    assert_eq!(
        captured.lock().unwrap().take().unwrap().name,
        "/videos/movie.mp4"
    );

    // The 4xx body's msg must survive inside the error.
    let err = api.delete_file("/videos/unknown.mp4").unwrap_err();
    match err {
        ApiError::Server { status, ref msg } => {
            assert_eq!(status, 400);
            assert_eq!(msg, "Ungültiger Dateiname");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.server_msg(), Some("Ungültiger Dateiname"));
}

#[test]
fn status_decodes_string_and_number_counts() {
    async fn status() -> impl IntoResponse {
        Json(serde_json::json!({"_akt": "01.02.2024 06:00:00", "_anzahl": 120}))
    }

    let app = Router::new().route("/status", get(status));
    let api = client(&spawn_server(app));

    let report = api.status().unwrap();
    assert_eq!(report.activity, "01.02.2024 06:00:00");
    assert_eq!(report.count, "120");
}

#[test]
fn empty_queue_and_file_lists_tolerate_server_quirks() {
    // The real server answers "{}" for an empty queue and the malformed
    // "{[]}" for an empty file list.
    async fn downloads() -> impl IntoResponse {
        ([(header::CONTENT_TYPE, "application/json")], "{}")
    }
    async fn dateien() -> impl IntoResponse {
        ([(header::CONTENT_TYPE, "application/json")], "{[]}")
    }

    let app = Router::new()
        .route("/downloads", post(downloads))
        .route("/dateien", post(dateien));
    let api = client(&spawn_server(app));

    assert!(api.list_queued().unwrap().is_empty());
    assert!(api.list_files().unwrap().is_empty());
}

#[test]
fn list_files_decodes_rows() {
    async fn dateien() -> impl IntoResponse {
        Json(serde_json::json!([
            {
                "DATEI": "movie.mp4",
                "DATEINAME": "/videos/movie.mp4",
                "SENDER": "ARD",
                "TITEL": "Der Film",
                "DATUMFILM": "01.01.24",
                "DATUMDATEI": "02.01.24"
            }
        ]))
    }

    let app = Router::new().route("/dateien", post(dateien));
    let api = client(&spawn_server(app));

    let rows = api.list_files().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].path, "/videos/movie.mp4");
    assert_eq!(rows[0].name, "movie.mp4");
}

#[test]
fn fetch_file_streams_body_to_disk() {
    #[derive(serde::Deserialize)]
    struct NameQuery {
        name: String,
    }

    async fn get_datei(Query(query): Query<NameQuery>) -> impl IntoResponse {
        assert_eq!(query.name, "/videos/movie.mp4");
        (
            [(header::CONTENT_TYPE, "application/mp4")],
            "not actually video data",
        )
    }

    let app = Router::new().route("/get_datei", get(get_datei));
    let api = client(&spawn_server(app));

    let dir = tempfile::tempdir().unwrap();
    let (path, bytes) = api.fetch_file("/videos/movie.mp4", dir.path()).unwrap();

    assert_eq!(path, dir.path().join("movie.mp4"));
    assert_eq!(bytes, "not actually video data".len() as u64);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "not actually video data"
    );
}

#[test]
fn refresh_index_and_start_downloads_return_msgs() {
    async fn aktualisieren() -> impl IntoResponse {
        Json(serde_json::json!({"msg": "Aktualisierung angestoßen"}))
    }
    async fn download() -> impl IntoResponse {
        Json(serde_json::json!({"msg": "Download angestoßen (Qualität: HD)"}))
    }

    let app = Router::new()
        .route("/aktualisieren", get(aktualisieren))
        .route("/download", get(download));
    let api = client(&spawn_server(app));

    assert_eq!(api.refresh_index().unwrap().text(), "Aktualisierung angestoßen");
    assert_eq!(
        api.start_downloads().unwrap().text(),
        "Download angestoßen (Qualität: HD)"
    );
}

#[test]
fn system_control_posts_to_script_namespace() {
    let captured: Captured<&'static str> = Arc::new(Mutex::new(None));

    async fn shutdown(State(captured): State<Captured<&'static str>>) -> impl IntoResponse {
        *captured.lock().unwrap() = Some("shutdown");
        StatusCode::OK
    }

    let app = Router::new()
        .route("/php/shutdown.php", post(shutdown))
        .with_state(captured.clone());
    let base = spawn_server(app);
    let system = SystemControl::new(&base, Duration::from_secs(5)).unwrap();

    system.shutdown().unwrap();
    assert_eq!(*captured.lock().unwrap(), Some("shutdown"));

    // Reboot hits a route this server does not serve; the outcome must be
    // an explicit error, not a silent success.
    assert!(system.reboot().is_err());
}

#[test]
fn transport_failures_are_explicit() {
    // Nothing listens on port 9; connection setup must fail fast.
    let api = ApiClient::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
    match api.status() {
        Err(ApiError::Transport { .. }) => {}
        other => panic!("unexpected outcome: {other:?}"),
    }
}
