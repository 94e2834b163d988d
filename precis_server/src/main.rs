mod docs;
mod error;
mod health;
mod router;
mod state;
mod summarize;

use std::{env, path::PathBuf, sync::Arc};

use dotenvy::dotenv;
use precis_core::{
    helpers::config::{InferenceConfig, env_or},
    inference::SummarizerClient,
};
use router::router;
use state::ServerState;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let server_host = env::var("SERVER_HOST").unwrap_or("0.0.0.0".to_string());
    let port: u16 = env_or("PORT", 3000);
    let public_dir = PathBuf::from(env::var("PUBLIC_DIR").unwrap_or("public".to_string()));

    let summarizer = SummarizerClient::new(InferenceConfig::from_env())?;
    let state = Arc::new(ServerState::from(summarizer));

    let app = router(state, &public_dir);

    let listener = tokio::net::TcpListener::bind((server_host.as_str(), port)).await?;
    log::info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
