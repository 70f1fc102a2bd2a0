use news_backend::{
    routes::{init_tracing, make_app},
    utils::config::Config,
};
use std::error::Error;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    let config = Config::init()?;
    init_tracing(config.log_level);
    info!("Configuration loaded successfully");
    let app = make_app(&config)?;

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
