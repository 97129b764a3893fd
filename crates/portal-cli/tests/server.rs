//! HTTP surface tests driven through the router without binding a socket.

use std::io::Write;
use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tempfile::NamedTempFile;
use tower::ServiceExt;

use portal_cli::server::router;
use portal_core::RecordStore;
use portal_normalization::NormalizationTables;

const SHEET: &str = "\
ID,Name,Name English,Phone Number,University,Year,From,Score
1,أحمد، محمد,Ahmed Mohamed,010-1234-5678,- جامعة المنصورة,الاولي,الدقهليه,18
2,سارة,Sara,+20 111 222 3333,جامعة الزقازيق,الثانية,القاهرة,15.5
3,منى,Mona,00201112223333,جامعة طنطا,,الغربيه,17
4,<i>عمر</i>,<script>alert(1)</script>,01099998888,جامعة بنها,الرابعة,,12
";

fn app() -> Router {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SHEET.as_bytes()).unwrap();
    let (store, _) = RecordStore::build(file.path(), &NormalizationTables::default()).unwrap();
    router(Arc::new(store))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(uri: &str) -> (StatusCode, String) {
    send(app(), Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_form(body: &'static str) -> (StatusCode, String) {
    let request = Request::post("/result")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    send(app(), request).await
}

#[tokio::test]
async fn home_serves_the_search_form() {
    let (status, html) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("name=\"search_type\""));
    assert!(html.contains("name=\"search_value\""));
    assert!(html.contains("action=\"/result\""));
}

#[tokio::test]
async fn form_lookup_by_id_renders_the_record() {
    let (status, html) = post_form("search_type=id&search_value=1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("أحمد محمد"));
    assert!(html.contains("جامعة المنصورة"));
    assert!(html.contains("الأولى"));
    assert!(html.contains("الدقهلية"));
    assert!(!html.contains("class=\"message\""));
}

#[tokio::test]
async fn form_failures_render_the_user_message() {
    let (status, html) = post_form("search_type=id&search_value=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("يرجى إدخال رقم صحيح"));

    let (_, html) = post_form("search_type=phone&search_value=01112223333").await;
    assert!(html.contains("يوجد أكثر من طالب بنفس رقم الهاتف"));

    let (_, html) = post_form("search_type=id&search_value=99").await;
    assert!(html.contains("لم يتم العثور على الطالب بالرقم المحدد"));
}

#[tokio::test]
async fn form_output_is_escaped() {
    let (_, html) = post_form("search_type=id&search_value=4").await;
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>"));

    let (_, html) = post_form("search_type=id&search_value=%22%3E%3Cscript%3E").await;
    assert!(!html.contains("<script>"));
}

#[tokio::test]
async fn api_returns_the_record_as_json() {
    let (status, body) = get("/api/lookup?mode=phone&q=%2B20%20101%20234%205678").await;
    assert_eq!(status, StatusCode::OK);
    let record: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(record["id"], 1);
    assert_eq!(record["phone"], "01012345678");
    assert_eq!(record["year"], "الأولى");
    assert_eq!(record["score"], 18.0);
}

#[tokio::test]
async fn api_maps_failures_to_status_codes() {
    let cases = [
        ("/api/lookup?mode=id&q=abc", StatusCode::BAD_REQUEST, "invalid_query"),
        ("/api/lookup?mode=email&q=1", StatusCode::BAD_REQUEST, "invalid_query"),
        ("/api/lookup?mode=id&q=99", StatusCode::NOT_FOUND, "not_found"),
        ("/api/lookup?mode=phone&q=01555555555", StatusCode::NOT_FOUND, "not_found"),
        ("/api/lookup?mode=phone&q=01112223333", StatusCode::CONFLICT, "ambiguous"),
    ];
    for (uri, expected_status, expected_kind) in cases {
        let (status, body) = get(uri).await;
        assert_eq!(status, expected_status, "{uri}");
        let failure: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(failure["kind"], expected_kind, "{uri}");
        assert!(failure["message"].as_str().is_some_and(|m| !m.is_empty()));
    }
}

#[tokio::test]
async fn empty_store_reports_not_found() {
    let app = router(Arc::new(RecordStore::empty()));
    let request = Request::get("/api/lookup?mode=id&q=1")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_record_count() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["records"], 4);
}
