use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use search_portal_client::application::search_bar::SearchBar;
use search_portal_client::data::http_backend::{HttpSearchBackend, MSG_SEARCH_SIMPLE};
use search_portal_client::presentation::console::{self, MSG_NO_RESULTS};
use serde_json::json;
use std::net::TcpListener;
use std::sync::Arc;

/// Stub whose behavior depends on the query: "rien" yields an empty result
/// list, "boom" a 500, anything else one hit.
async fn search(req: HttpRequest) -> HttpResponse {
    let query = req
        .query_string()
        .split('&')
        .find_map(|pair| pair.strip_prefix("query="))
        .unwrap_or("");

    match query {
        "rien" => HttpResponse::Ok().json(json!({ "results": [], "totalHits": 0 })),
        "boom" => HttpResponse::InternalServerError().finish(),
        _ => HttpResponse::Ok().json(json!({
            "results": [
                {
                    "document": {
                        "category": "presse",
                        "url": "https://exemple.fr/articles/1",
                        "title": "Un chat",
                        "content": "Un article sur les chats."
                    },
                    "score": 1.0
                }
            ],
            "totalHits": 1
        })),
    }
}

fn spawn_stub() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(|| App::new().route("/api/search", web::get().to(search)))
        .listen(listener)
        .unwrap()
        .workers(1)
        .run();
    let _ = actix_web::rt::spawn(server);
    format!("http://{addr}")
}

fn search_bar(base_url: &str) -> SearchBar<HttpSearchBackend> {
    SearchBar::new(Arc::new(HttpSearchBackend::new(base_url).unwrap()))
}

#[actix_web::test]
async fn test_successful_search_renders_hits() {
    let mut bar = search_bar(&spawn_stub());

    bar.set_query("chat");
    bar.submit().await;

    assert_eq!(bar.results().len(), 1);
    assert!(bar.error().is_none());
    let rendered = console::render(&bar);
    assert!(rendered.contains("Un chat"));
    assert!(rendered.contains("https://exemple.fr/articles/1"));
}

#[actix_web::test]
async fn test_empty_results_render_no_results_message() {
    let mut bar = search_bar(&spawn_stub());

    bar.set_query("rien");
    bar.submit().await;

    assert!(bar.results().is_empty());
    assert!(bar.error().is_none());
    assert_eq!(console::render(&bar), MSG_NO_RESULTS);
}

#[actix_web::test]
async fn test_backend_error_renders_message_over_empty_list() {
    let mut bar = search_bar(&spawn_stub());

    bar.set_query("chat");
    bar.submit().await;
    assert_eq!(bar.results().len(), 1);

    bar.set_query("boom");
    bar.submit().await;

    assert!(bar.results().is_empty());
    assert_eq!(bar.error(), Some(MSG_SEARCH_SIMPLE));
    assert_eq!(console::render(&bar), MSG_SEARCH_SIMPLE);
}

#[actix_web::test]
async fn test_each_submit_is_independent() {
    let mut bar = search_bar(&spawn_stub());

    bar.set_query("boom");
    bar.submit().await;
    assert!(bar.error().is_some());

    bar.set_query("chat");
    bar.submit().await;
    assert!(bar.error().is_none());
    assert_eq!(bar.results().len(), 1);
}
