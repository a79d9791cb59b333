use tracing_subscriber::EnvFilter;

use answerdoc_server::config::ServerConfig;
use answerdoc_server::pages::load_pages;
use answerdoc_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServerConfig::from_env()?;
    init_tracing(config.log_json);

    let aws = answerdoc_bedrock::client::build_config(&config.region, config.profile.as_deref()).await;
    let pages = load_pages()?;
    let state = AppState::new(&config, aws, pages);
    let app = answerdoc_server::router(state);

    tracing::info!(
        region = %config.region,
        model_id = %config.model_id,
        on_lambda = config.on_lambda,
        "starting answerdoc"
    );

    if config.on_lambda {
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %config.bind, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
