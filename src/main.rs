use country_names::config::Config;
use country_names::global::Global;
use country_names::http;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .parse_lossy(&config.level),
        )
        .init();

    tracing::info!("starting country names api");

    let global = Global::init(config).await?;

    tokio::select! {
        r = http::run(global.clone()) => {
            if let Err(e) = r {
                tracing::error!("http server error: {:#}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutting down");
        }
    }

    Ok(())
}
