use eyre::Result;
use product_page::server::{router, AppState};
use product_page::{Config, ProductClient, ProductView};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("product_page=info".parse()?))
        .init();

    let config = Config::from_env()?;
    let client = ProductClient::new(config.api_base.clone(), config.fetch_timeout)?;
    let state = Arc::new(AppState {
        view: ProductView::new(client),
        revalidate: config.revalidate,
    });

    let addr = config.bind_addr();
    info!(api_base = %config.api_base, "Product page server starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
