use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

mod support;

use support::{test_app, write_token};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app = test_app().await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_site_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = client
        .post(format!("{}/site/", app.base_url))
        .header("Authorization", write_token())
        .json(&json!({"name": "Test Site 4", "slug": "test-site-4", "facility": "Equinix DC6"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created: Value = res.json().await?;
    let id = created["id"].as_i64().unwrap();

    let res = client
        .get(format!("{}/site/{}/", app.base_url, id))
        .header("Authorization", write_token())
        .send()
        .await?;
    let fetched: Value = res.json().await?;
    assert_eq!(fetched["facility"], "Equinix DC6");

    let res = client
        .delete(format!("{}/site/{}/", app.base_url, id))
        .header("Authorization", write_token())
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = client.get(format!("{}/site/", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);
    Ok(())
}
