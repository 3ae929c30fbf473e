//! Catalog loads over real HTTP against a local one-route server.

use std::sync::Arc;

use storefront_commerce::prelude::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const CARD_MARKER: &str = r#"data-testid="product-card""#;

/// Serve every connection with the same canned response. Returns the base URL.
async fn serve(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };

            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut chunk).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&chunk[..n]),
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}", addr)
}

fn http_source(base_url: String) -> HttpProductSource {
    HttpProductSource::from_config(&CatalogConfig {
        base_url: Some(base_url),
        ..CatalogConfig::default()
    })
}

fn page_for(base_url: String) -> CatalogPage {
    CatalogPage::new(
        CatalogFetcher::new(Arc::new(http_source(base_url))),
        CartManager::new(),
        Messages::default(),
    )
}

#[tokio::test]
async fn test_products_endpoint_loads_cards() {
    let base = serve(
        "200 OK",
        r#"{"products": [
            {"id": 1, "title": "Clock", "price": "22.33", "image": "clock.png"},
            {"id": 2, "title": "Caneca azul", "price": "9.90", "image": "mug.png"}
        ]}"#,
    )
    .await;

    let mut page = page_for(base);
    page.activate().await;

    assert_eq!(page.load_state(), &LoadState::Loaded);
    assert_eq!(page.render().matches(CARD_MARKER).count(), 2);
}

#[tokio::test]
async fn test_server_error_is_a_status_failure() {
    let base = serve("500 Internal Server Error", r#"{"error": "boom"}"#).await;

    let result = http_source(base).fetch_products().await;
    assert!(matches!(result, Err(CatalogError::Status { status: 500 })));
}

#[tokio::test]
async fn test_server_error_renders_error_message() {
    let base = serve("500 Internal Server Error", r#"{"error": "boom"}"#).await;

    let mut page = page_for(base);
    page.activate().await;

    let html = page.render();
    assert_eq!(page.load_state(), &LoadState::Failed);
    assert!(html.contains("Problemas ao carregar a lista!"));
    assert_eq!(html.matches(CARD_MARKER).count(), 0);
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_failure() {
    let base = serve("200 OK", "<html>not a catalog</html>").await;

    let result = http_source(base).fetch_products().await;
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

#[tokio::test]
async fn test_malformed_body_renders_error_message() {
    let base = serve("200 OK", r#"{"items": []}"#).await;

    let mut page = page_for(base);
    page.activate().await;

    let html = page.render();
    assert_eq!(page.load_state(), &LoadState::Failed);
    assert!(html.contains("Problemas ao carregar a lista!"));
    assert_eq!(html.matches(CARD_MARKER).count(), 0);
}
