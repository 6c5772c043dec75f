use std::sync::Arc;

use mock_server::Backend;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let imob_id = std::env::var("MOCK_IMOB_ID").unwrap_or_else(|_| "DEMO".to_string());
    let user_id = std::env::var("MOCK_USER_ID").unwrap_or_else(|_| "demo".to_string());
    let secret = std::env::var("MOCK_USER_PASS").unwrap_or_else(|_| "demo".to_string());

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, %imob_id, %user_id, "listening");
    mock_server::run(listener, Arc::new(Backend::demo(&imob_id, &user_id, &secret))).await
}
