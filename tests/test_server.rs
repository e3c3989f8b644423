mod utils;
use std::sync::Arc;
use std::time::Duration;

use asset_guardian::report::XLSX_CONTENT_TYPE;
use asset_guardian::{server, Config, LogObserver, Pipeline};
use futures::{SinkExt, StreamExt};
use httpmock::prelude::*;
use httpmock::Method::HEAD;
use tokio::net::TcpListener;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use utils::read_workbook;

const PAGE: &str = r#"<div class="paginas-internas"><a href="/a.pdf">A</a></div>"#;

// Address of the websocket listener and URL of the download endpoint
struct Endpoints {
    ws: String,
    download: String,
}

// Starts both servers on ephemeral ports
async fn start(pipeline: Arc<Pipeline>) -> Result<Endpoints, Box<dyn std::error::Error>> {
    let ws_listener = TcpListener::bind("127.0.0.1:0").await?;
    let http_listener = TcpListener::bind("127.0.0.1:0").await?;
    let endpoints = Endpoints {
        ws: format!("ws://{}", ws_listener.local_addr()?),
        download: format!("http://{}/download", http_listener.local_addr()?),
    };

    tokio::spawn(server::serve(ws_listener, http_listener, pipeline));
    Ok(endpoints)
}

// Mock site with one page holding a single pdf link that answers 200
async fn site() -> MockServer {
    let srv = MockServer::start_async().await;
    srv.mock_async(|when, then| {
        when.method(GET).path("/docs");
        then.status(200).body(PAGE);
    })
    .await;
    srv.mock_async(|when, then| {
        when.method(HEAD).path("/a.pdf");
        then.status(200);
    })
    .await;
    srv
}

fn pipeline(srv: &MockServer, dir: &tempfile::TempDir) -> Arc<Pipeline> {
    let config = Config {
        base_url: srv.base_url(),
        export_path: dir.path().join("records.xlsx"),
        ..Config::default()
    };
    Arc::new(Pipeline::new(&config, LogObserver::shared()).unwrap())
}

#[tokio::test]
/// before any run there is nothing to download; after a run the spreadsheet is served
async fn download_serves_latest_export() -> Result<(), Box<dyn std::error::Error>> {
    let srv = site().await;
    let dir = tempfile::tempdir()?;
    let pipeline = pipeline(&srv, &dir);
    let endpoints = start(pipeline.clone()).await?;

    let response = reqwest::get(&endpoints.download).await?;
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    pipeline.run(&srv.url("/docs")).await?;

    let response = reqwest::get(&endpoints.download).await?;
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some(XLSX_CONTENT_TYPE)
    );
    assert_eq!(
        response
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok()),
        Some("attachment; filename=\"records.xlsx\"")
    );

    // save what was served and read it back as a workbook
    let body = response.bytes().await?;
    let downloaded = dir.path().join("downloaded.xlsx");
    std::fs::write(&downloaded, &body)?;

    let (sheets, rows) = read_workbook(&downloaded)?;
    assert_eq!(sheets.len(), 1);
    assert_eq!(
        rows,
        vec![
            vec!["URL".to_string(), "Status".to_string()],
            vec![srv.url("/a.pdf"), "OK".to_string()],
        ]
    );
    Ok(())
}

#[tokio::test]
/// binary frames get no reply, every text frame gets exactly one, in the order sent
async fn websocket_replies_once_per_text_frame() -> Result<(), Box<dyn std::error::Error>> {
    let srv = site().await;
    let dir = tempfile::tempdir()?;
    let endpoints = start(pipeline(&srv, &dir)).await?;

    let (mut ws, _) = connect_async(endpoints.ws.as_str()).await?;

    ws.send(Message::Binary(vec![1, 2, 3])).await?;
    ws.send(Message::Text("garbage".to_string())).await?;
    let request = serde_json::json!({ "url": srv.url("/docs") }).to_string();
    ws.send(Message::Text(request)).await?;

    let mut replies = Vec::new();
    while replies.len() < 2 {
        let frame = tokio::time::timeout(Duration::from_secs(10), ws.next())
            .await?
            .ok_or("connection closed early")??;
        if let Message::Text(text) = frame {
            replies.push(serde_json::from_str::<serde_json::Value>(&text)?);
        }
    }

    let error = replies[0]["error"].as_str().ok_or("first reply has no error")?;
    assert!(error.starts_with("Invalid request"));
    assert_eq!(replies[0].as_object().map(|o| o.len()), Some(1));

    assert_eq!(
        replies[1],
        serde_json::json!({
            "records": [{"URL": srv.url("/a.pdf"), "Status": "OK"}],
            "url": srv.url("/docs"),
            "totals": {"total": 1, "ok": 1, "error": 0}
        })
    );

    // closing ends the loop; no further text frame may show up
    ws.close(None).await?;
    let drained = tokio::time::timeout(Duration::from_secs(5), async {
        while let Some(Ok(frame)) = ws.next().await {
            assert!(!frame.is_text(), "unexpected extra reply: {}", frame);
        }
    })
    .await;
    assert!(drained.is_ok());
    Ok(())
}

#[tokio::test]
/// the upgrade is accepted on any request path, not only `/`
async fn websocket_accepts_any_path() -> Result<(), Box<dyn std::error::Error>> {
    let srv = site().await;
    let dir = tempfile::tempdir()?;
    let endpoints = start(pipeline(&srv, &dir)).await?;

    let (mut ws, _) = connect_async(format!("{}/some/path", endpoints.ws)).await?;

    let request = serde_json::json!({ "url": srv.url("/docs") }).to_string();
    ws.send(Message::Text(request)).await?;

    let frame = tokio::time::timeout(Duration::from_secs(10), ws.next())
        .await?
        .ok_or("connection closed early")??;
    let reply: serde_json::Value = serde_json::from_str(frame.to_text()?)?;
    assert_eq!(reply["totals"]["ok"], 1);
    Ok(())
}
