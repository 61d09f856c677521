//! po-server — HTTP entry point for the prompt optimizer.
//!
//! Reads config from `PO_*` env vars (see `PromptOptimizerConfig`), logging
//! filter from `RUST_LOG`.

use po_compactor::Optimizer;
use po_core::PromptOptimizerConfig;
use po_server::{app_with_state, state::AppState};
use po_translate::HttpTranslator;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "po_server=info,po_compactor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = PromptOptimizerConfig::from_env()?;
    let translator = HttpTranslator::from_config(&config.translation);
    let optimizer = Arc::new(
        Optimizer::new()
            .with_translator(Arc::new(translator))
            .with_source_language(config.translation.source_language.clone()),
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve(&config, optimizer.clone()))?;
    // The blocking HTTP client inside the translator must be dropped outside
    // the runtime.
    drop(runtime);
    drop(optimizer);
    Ok(())
}

async fn serve(config: &PromptOptimizerConfig, optimizer: Arc<Optimizer>) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Prompt optimizer listening on {addr}");

    axum::serve(listener, app_with_state(AppState::with_optimizer(optimizer)))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await?;
    Ok(())
}
