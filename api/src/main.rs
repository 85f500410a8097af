use clap::Parser;
use keysmith_api::{config::KeysmithApiConfig, context::ApiContext, server};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = KeysmithApiConfig::parse();

    let (router, api, context) = server::make(config.clone()).await?;

    if config.dump_openapi {
        let json = api.to_pretty_json()?;
        print!("{}", json);
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or("keysmith_api=info,keysmith_issuer=info,tower_http=info".into()),
        )
        .pretty()
        .init();

    let listen_addr = config.listen_addr();
    let listener = TcpListener::bind(listen_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {listen_addr}: {e}"))?;

    info!(
        max_concurrent_issuances = config.max_concurrent_issuances,
        issue_timeout_secs = config.issue_timeout_secs,
        "Listening on http://{:?}",
        listen_addr
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal(context))
        .await?;

    Ok(())
}

async fn shutdown_signal(context: ApiContext) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }

    info!("Shutting down, finishing in-flight issuances");
    context.close_issuance();
}
