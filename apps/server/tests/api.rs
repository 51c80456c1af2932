use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode, header};
use folio::domain::config::ApiConfig;
use folio_server::Server;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

const JSON_UTF8: &str = "application/json; charset=utf-8";
const LOGIN: &str = r#"{"email":"ops@example.com","password":"s3cret"}"#;

struct TestApp {
    router: Router,
    _site: TempDir,
}

impl TestApp {
    async fn start() -> Self {
        let site = tempfile::tempdir().expect("temp dir");
        fs::write(site.path().join("index.html"), "<h1>portfolio</h1>").expect("index");
        fs::write(site.path().join("admin.html"), "<h1>admin console</h1>").expect("admin");

        let mut config = ApiConfig::default();
        config.database.url = "mem://".to_owned();
        config.storage.static_dir = site.path().to_path_buf();
        config.security.admin.email = "ops@example.com".to_owned();
        config.security.admin.password = "s3cret".to_owned();

        let server = Server::builder().config(config).build().await.expect("server");
        Self { router: server.router(), _site: site }
    }

    async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.expect("response")
    }

    async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).expect("request")).await
    }

    async fn post(&self, uri: &str, cookie: Option<&str>, body: &str) -> Response<Body> {
        let mut request = Request::post(uri).header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.send(request.body(Body::from(body.to_owned())).expect("request")).await
    }

    /// Logs in and returns the `session=<token>` pair for the Cookie header.
    async fn login(&self) -> String {
        let response = self.post("/api/login", None, LOGIN).await;
        assert_eq!(response.status(), StatusCode::OK);
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().expect("ascii");
        set_cookie.split(';').next().expect("cookie pair").to_owned()
    }

    async fn content(&self) -> Value {
        json_body(self.get("/api/content").await).await["content"].clone()
    }
}

async fn json_body(response: Response<Body>) -> Value {
    assert_eq!(response.headers()[header::CONTENT_TYPE], JSON_UTF8);
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

async fn text_body(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8")
}

#[tokio::test]
async fn edit_scenario_end_to_end() {
    let app = TestApp::start().await;
    assert_eq!(app.content().await["hero_name"], "Nama Anda");

    let cookie = app.login().await;
    let response = app
        .post("/api/content/update", Some(&cookie), r#"{"content":{"hero_name":"Budi"}}"#)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["content"]["hero_name"], "Budi");
    assert_eq!(body["content"]["hero_intro"], "Halo, saya");

    let response =
        app.post("/api/content/update", None, r#"{"content":{"hero_name":"Hacker"}}"#).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await, json!({ "error": "Unauthorized" }));

    assert_eq!(app.content().await["hero_name"], "Budi");
}

#[tokio::test]
async fn update_accepts_new_keys_and_scalars() {
    let app = TestApp::start().await;
    let cookie = app.login().await;
    let before = app.content().await;

    let response = app
        .post(
            "/api/content/update",
            Some(&cookie),
            r#"{"content":{"skills":"Rust","show_games":false,"max_score":99}}"#,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let after = app.content().await;
    assert_eq!(after["skills"], "Rust");
    assert_eq!(after["show_games"], "false");
    assert_eq!(after["max_score"], "99");
    for (key, value) in before.as_object().expect("object") {
        assert_eq!(&after[key], value, "{key} changed");
    }
}

#[tokio::test]
async fn auth_is_checked_before_the_payload() {
    let app = TestApp::start().await;

    for body in ["{broken", "", r#"{"content":{"hero_name":"X"}}"#] {
        let response = app.post("/api/content/update", None, body).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "body: {body}");
    }

    let response = app
        .post("/api/content/update", Some("session=forged"), r#"{"content":{"hero_name":"X"}}"#)
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.content().await["hero_name"], "Nama Anda");
}

#[tokio::test]
async fn invalid_update_payloads_are_400() {
    let app = TestApp::start().await;
    let cookie = app.login().await;

    for body in ["{broken", "", "{}", r#"{"content":"Budi"}"#, r#"{"content":[1]}"#, "[]"] {
        let response = app.post("/api/content/update", Some(&cookie), body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(json_body(response).await, json!({ "error": "Payload tidak valid" }));
    }

    assert_eq!(app.content().await["hero_name"], "Nama Anda");
}

#[tokio::test]
async fn logout_invalidates_the_session() {
    let app = TestApp::start().await;
    let cookie = app.login().await;

    let session = json_body(
        app.send(
            Request::get("/api/session")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .expect("request"),
        )
        .await,
    )
    .await;
    assert_eq!(session, json!({ "authenticated": true }));

    let response = app.post("/api/logout", Some(&cookie), "").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::SET_COOKIE],
        "session=; Path=/; Max-Age=0; SameSite=Lax"
    );

    let response = app
        .post("/api/content/update", Some(&cookie), r#"{"content":{"hero_name":"Late"}}"#)
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn failed_login_sets_no_cookie() {
    let app = TestApp::start().await;

    let response =
        app.post("/api/login", None, r#"{"email":"ops@example.com","password":"guess"}"#).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert_eq!(json_body(response).await, json!({ "ok": false, "error": "Email/password salah" }));

    let response = app.post("/api/login", None, "{oops").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await, json!({ "error": "JSON tidak valid" }));
}

#[tokio::test]
async fn unmatched_requests_get_the_json_404() {
    let app = TestApp::start().await;

    let requests = [
        (Method::GET, "/missing.html"),
        (Method::GET, "/api/unknown"),
        (Method::POST, "/api/unknown"),
        (Method::GET, "/api/content/update"),
        (Method::POST, "/api/content"),
        (Method::POST, "/admin"),
        (Method::DELETE, "/index.html"),
    ];

    for (method, uri) in requests {
        let request = Request::builder().method(method.clone()).uri(uri).body(Body::empty());
        let response = app.send(request.expect("request")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(json_body(response).await, json!({ "error": "Not found" }));
    }
}

#[tokio::test]
async fn static_site_and_admin_console_are_served() {
    let app = TestApp::start().await;

    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(text_body(response).await, "<h1>portfolio</h1>");

    for uri in ["/admin", "/admin.html"] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().expect("ascii");
        assert!(content_type.starts_with("text/html"), "{uri}: {content_type}");
        assert_eq!(text_body(response).await, "<h1>admin console</h1>");
    }
}

#[tokio::test]
async fn health_endpoint_is_mounted() {
    let app = TestApp::start().await;
    let body = json_body(app.get("/health").await).await;
    assert_eq!(body["status"], "up");
}
