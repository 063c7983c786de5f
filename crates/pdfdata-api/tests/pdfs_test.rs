//! Page flows for the PDF record list, detail and remove handlers.

mod helpers;

use helpers::setup_test_app;

fn pdf_form(title: &str) -> Vec<(&'static str, String)> {
    vec![
        ("title", title.to_string()),
        ("file_url", format!("https://example.com/{}.pdf", title.to_lowercase())),
        ("num_pages", String::new()),
    ]
}

fn set_cookies(response: &axum_test::TestResponse) -> Vec<String> {
    response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_root_redirects_to_list() {
    let app = setup_test_app();
    let response = app.client().get("/").await;
    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/pdfs");
}

#[tokio::test]
async fn test_empty_list_renders() {
    let app = setup_test_app();
    let response = app.client().get("/pdfs").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(body.contains("<h1>PDFS</h1>"));
    assert!(body.contains("No PDFs yet."));
    assert!(app.records.is_empty());
}

#[tokio::test]
async fn test_create_list_delete_scenario() {
    let app = setup_test_app();
    let client = app.client();

    let response = client.post("/pdfs").form(&pdf_form("Alpha")).await;
    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/pdfs");

    let body = client.get("/pdfs").await.text();
    assert!(body.contains("Alpha"));

    let response = client.post("/pdfs").form(&pdf_form("Bravo")).await;
    assert_eq!(response.status_code(), 303);

    // Newest first: Bravo (id 2) before Alpha (id 1)
    let body = client.get("/pdfs").await.text();
    let bravo = body.find(r#"data-id="2""#).expect("Bravo listed");
    let alpha = body.find(r#"data-id="1""#).expect("Alpha listed");
    assert!(bravo < alpha);

    let response = client.get("/pdfs/1/remove").await;
    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/pdfs");

    let body = client.get("/pdfs").await.text();
    assert!(body.contains("Bravo"));
    assert!(!body.contains("Alpha"));

    let response = client.get("/pdfs/1").await;
    assert_eq!(response.status_code(), 404);
    assert_eq!(app.records.len(), 1);
}

#[tokio::test]
async fn test_detail_page_shows_record() {
    let app = setup_test_app();
    let client = app.client();
    client
        .post("/pdfs")
        .form(&[
            ("title", "Manual"),
            ("file_url", "https://example.com/manual.pdf"),
            ("num_pages", "42"),
        ])
        .await;

    let response = client.get("/pdfs/1").await;
    assert_eq!(response.status_code(), 200);
    let body = response.text();
    assert!(body.contains("<h1>Manual</h1>"));
    assert!(body.contains("https://example.com/manual.pdf"));
    assert!(body.contains("42"));
}

#[tokio::test]
async fn test_invalid_form_rerenders_full_page() {
    let app = setup_test_app();
    let client = app.client();
    client.post("/pdfs").form(&pdf_form("Existing")).await;

    let response = client
        .post("/pdfs")
        .form(&[("title", "   "), ("file_url", "not a url"), ("num_pages", "many")])
        .await;
    assert_eq!(response.status_code(), 422);

    let body = response.text();
    assert!(body.contains("<h1>PDFS</h1>"));
    assert!(body.contains("Existing"));
    assert!(body.contains("This field is required"));
    assert!(body.contains("Enter a valid URL"));
    assert!(body.contains("Enter a whole number"));
    assert!(body.contains(r#"value="many""#));

    assert_eq!(app.records.len(), 1);
}

#[tokio::test]
async fn test_out_of_range_page_count_is_rejected() {
    let app = setup_test_app();
    let response = app
        .client()
        .post("/pdfs")
        .form(&[
            ("title", "Huge"),
            ("file_url", "https://example.com/huge.pdf"),
            ("num_pages", "0"),
        ])
        .await;
    assert_eq!(response.status_code(), 422);
    assert!(response.text().contains("Page count must be between 1 and 100000"));
    assert!(app.records.is_empty());
}

#[tokio::test]
async fn test_script_urls_are_rejected() {
    let app = setup_test_app();

    for file_url in [
        "javascript:alert(document.cookie)",
        "data:text/html,<script>alert(1)</script>",
    ] {
        let response = app
            .client()
            .post("/pdfs")
            .form(&[("title", "Scripted"), ("file_url", file_url), ("num_pages", "")])
            .await;
        assert_eq!(response.status_code(), 422);
        assert!(response.text().contains("Enter a valid URL"));
    }

    assert!(app.records.is_empty());
}

#[tokio::test]
async fn test_oversized_form_is_rejected() {
    let app = setup_test_app();
    let title = "x".repeat(70 * 1024);

    let response = app.client().post("/pdfs").form(&pdf_form(&title)).await;
    assert_eq!(response.status_code(), 413);
    assert!(app.records.is_empty());
}

#[tokio::test]
async fn test_non_form_body_is_bad_request() {
    let app = setup_test_app();
    let response = app
        .client()
        .post("/pdfs")
        .json(&serde_json::json!({ "title": "x" }))
        .await;
    assert_eq!(response.status_code(), 400);
    assert!(app.records.is_empty());
}

#[tokio::test]
async fn test_list_get_does_not_mutate() {
    let app = setup_test_app();
    let client = app.client();
    client.post("/pdfs").form(&pdf_form("Only")).await;

    for _ in 0..3 {
        assert_eq!(client.get("/pdfs").await.status_code(), 200);
    }
    assert_eq!(app.records.len(), 1);
}

#[tokio::test]
async fn test_remove_sets_flash_shown_once() {
    let app = setup_test_app();
    let client = app.client();
    client.post("/pdfs").form(&pdf_form("Gone")).await;

    let response = client.post("/pdfs/1/remove").await;
    assert_eq!(response.status_code(), 303);
    let cookie = set_cookies(&response)
        .into_iter()
        .find(|c| c.starts_with("pdfdata_flash="))
        .expect("flash cookie");
    let pair = cookie.split(';').next().unwrap().to_string();
    assert_eq!(pair, "pdfdata_flash=info:item%20removed%20%21%21%21");

    let response = client.get("/pdfs").add_header("Cookie", pair).await;
    assert_eq!(response.status_code(), 200);
    assert!(response.text().contains("item removed !!!"));
    assert!(set_cookies(&response)
        .iter()
        .any(|c| c.starts_with("pdfdata_flash=;") && c.contains("Max-Age=0")));

    let response = client.get("/pdfs").await;
    assert!(!response.text().contains("item removed !!!"));
    assert!(set_cookies(&response).is_empty());
}

#[tokio::test]
async fn test_missing_and_malformed_ids_are_not_found() {
    let app = setup_test_app();
    let client = app.client();

    for path in ["/pdfs/99", "/pdfs/abc", "/pdfs/99/remove", "/pdfs/abc/remove"] {
        let response = client.get(path).await;
        assert_eq!(response.status_code(), 404, "{}", path);
        assert!(response.text().contains("404 Not Found"), "{}", path);
    }

    let response = client.post("/pdfs/99/remove").await;
    assert_eq!(response.status_code(), 404);
    assert!(set_cookies(&response).is_empty());
}

#[tokio::test]
async fn test_titles_are_escaped() {
    let app = setup_test_app();
    let client = app.client();
    client
        .post("/pdfs")
        .form(&[
            ("title", "<b>bold</b>"),
            ("file_url", "https://example.com/b.pdf"),
        ])
        .await;

    let body = client.get("/pdfs").await.text();
    assert!(body.contains("&lt;b&gt;bold"));
    assert!(!body.contains("<b>bold</b>"));
}
